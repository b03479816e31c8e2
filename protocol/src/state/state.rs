
/*
* typed view over the raw chain state kv
*/
inst_state_define!{ CoreState,

    /* status */

    1, total_supply,   Empty : TotalSupply
    2, latest_diamond, Empty : DiamondSmelt

    /* state */

    10, tx_exist,        Hash          : BlockHeight

    11, balance,         Address       : Balance
    13, diamond,         DiamondName   : DiamondSto
    14, diamond_name,    DiamondNumber : DiamondName
    15, diamond_smelt,   DiamondName   : DiamondSmelt
    18, diamond_lending, LendingId     : DiamondLendingSto

}
