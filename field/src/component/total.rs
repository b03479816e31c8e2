
/*
* chain wide supply counters, integer units keep revert exact
*/
combi_struct!{ TotalSupply,
    minted_diamond         : DiamondNumber
    hacd_bid_burn_zhu      : Uint8 // cumulative 90% bid fee burn, unit: zhu
    lending_mortgage_count : Uint4 // diamonds currently mortgaged to the system
    lending_loan_mei       : Uint8 // cumulative loaned HAC, unit: mei
    lending_ransom_zhu     : Uint8 // cumulative ransom HAC, unit: zhu
}
