
/*
* Diamond system lending constant
*/
// one borrow period, about 35 days of blocks on mainnet
pub const DIAMOND_LENDING_BORROW_PERIOD_BLOCKS: u64 = 1_0000;
// development mark chains use a short period
pub const DIAMOND_LENDING_BORROW_PERIOD_BLOCKS_DEV: u64 = 50;

// each period charges 0.5% interest, counted in thousandths of one HAC
const LENDING_RANSOM_AMOUNT_UNIT: u8 = 245;


/*
* the amount a redeem must pay at the pending height:
* principal plus 0.5% interest per period, then the dutch auction
* discount past the public redeem height, capped at the full interest
*/
pub fn calculate_lending_ransom_amount(
    borrow_period: u64,
    loan_mei: u64,
    period_blocks: u64,
    private_height: u64,
    pending_height: u64,
) -> Amount {
    let mut ransom_qian = (1000 + 5 * borrow_period) * loan_mei;
    let public_height = private_height + borrow_period * period_blocks;
    if pending_height > public_height {
        let mut subcount = (pending_height - public_height) / period_blocks;
        let maxsub = borrow_period * 2;
        if subcount > maxsub {
            subcount = maxsub // never discount the principal
        }
        ransom_qian -= 5 * subcount * loan_mei;
    }
    Amount::coin(ransom_qian, LENDING_RANSOM_AMOUNT_UNIT)
}
