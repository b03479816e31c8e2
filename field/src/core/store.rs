
/*
* Diamond Status
*/
pub const DIAMOND_STATUS_NORMAL            : Uint1 = Uint1::from(1);
pub const DIAMOND_STATUS_LENDING_TO_SYSTEM : Uint1 = Uint1::from(2);


/*
* Diamond
*/
combi_struct!{ DiamondSto,
    status  : Uint1
    address : Address
}


/*
* DiamondSmelt keeps the proof inputs of one mint
*/
combi_struct!{ DiamondSmelt,
    diamond          : DiamondName
    number           : DiamondNumber
    born_height      : BlockHeight
    born_hash        : Hash // containing block, zero until commit
    prev_hash        : Hash // prev containing block
    miner_address    : Address
    nonce            : HashNonce
    average_bid_burn : Uint2 // unit: mei
}
