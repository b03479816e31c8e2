
// mempool retry signal prefix
pub const BACKTOPOOL: &str = "{BACKTOPOOL}";

pub fn is_back_to_pool(e: &str) -> bool {
    e.starts_with(BACKTOPOOL)
}


#[derive(Default, Clone)]
pub struct ChainInfo {
    pub id: u32,
    pub dev_mark: bool,
    pub borrow_period_blocks: u64,
}


#[derive(Default, Clone)]
pub struct BlkInfo {
    pub height: u64,
    pub hash: Hash,
    pub coinbase: Address,
}


#[derive(Default, Clone)]
pub struct TxInfo {
    pub ty: u8,
    pub fee: Amount,
    pub main: Address,
    pub addrs: Vec<Address>,
}


#[derive(Default, Clone)]
pub struct Env {
    pub chain: ChainInfo,
    pub block: BlkInfo,
    pub tx: TxInfo,
}


impl Env {
    // return old tx
    pub fn replace_tx(&mut self, tx: TxInfo) -> TxInfo {
        std::mem::replace(&mut self.tx, tx)
    }
}
