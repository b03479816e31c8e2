
pub struct EngineConf {
    pub chain_id: u32,
    pub dev_mark: bool,
    pub borrow_period_blocks: u64,
    pub max_block_size: usize,
    pub max_block_txs: usize,
    pub max_tx_size: usize,
    pub max_tx_actions: usize,
}


impl EngineConf {

    pub fn mainnet() -> EngineConf {
        EngineConf {
            chain_id: 0,
            dev_mark: false,
            borrow_period_blocks: mint::action::DIAMOND_LENDING_BORROW_PERIOD_BLOCKS,
            max_block_size: 1024 * 1024,
            max_block_txs: 1000,
            max_tx_size: 512 * 1024,
            max_tx_actions: 200,
        }
    }

    pub fn devnet() -> EngineConf {
        EngineConf {
            dev_mark: true,
            borrow_period_blocks: mint::action::DIAMOND_LENDING_BORROW_PERIOD_BLOCKS_DEV,
            ..Self::mainnet()
        }
    }

    pub fn chain_info(&self) -> ChainInfo {
        ChainInfo {
            id: self.chain_id,
            dev_mark: self.dev_mark,
            borrow_period_blocks: self.borrow_period_blocks,
        }
    }

}
