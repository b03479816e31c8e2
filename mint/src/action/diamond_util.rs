
/*
* Diamond Constant
*/
// from the 30001st diamond, destroy 90% of the bidding fee
pub const DIAMOND_ABOVE_NUMBER_OF_BURNING90_PERCENT_TX_FEES: u32 = 3_0000;

// the average bidding burn of diamonds 1 ~ 40000 is fixed at 10 HAC
pub const DIAMOND_ABOVE_NUMBER_OF_STATISTICS_AVERAGE_BIDDING_BURNING: u32 = 4_0000;


/*
* average bid burn in whole HAC, stored on the smelt record
*/
pub fn calculate_diamond_average_bid_burn(diamond_number: u32, hacd_burn_zhu: u64) -> Uint2 {
    // old
    if diamond_number <= DIAMOND_ABOVE_NUMBER_OF_STATISTICS_AVERAGE_BIDDING_BURNING {
        return Uint2::from(10)
    }
    // average
    let bsnum = diamond_number - DIAMOND_ABOVE_NUMBER_OF_BURNING90_PERCENT_TX_FEES;
    let bidfee = hacd_burn_zhu / 1_0000_0000 / (bsnum as u64) + 1;
    Uint2::from(bidfee as u16)
}


/*
* the 90% part of the bid fee that gets destroyed
*/
pub fn calculate_bid_burn_90(fee: &Amount) -> Ret<Amount> {
    let mut keep = fee.clone();
    if keep.unit() > 1 {
        keep = keep.unit_sub(1)?; // 10% left
    }
    fee.sub_mode_u64(&keep)
}
