
/*
* single writer chain engine, one block apply or revert at a time
*/
pub struct ChainEngine {
    cnf: EngineConf,
    oracle: Arc<dyn DiamondOracle>,

    state: StateInst,
    cur_height: u64,
    cur_hash: Hash,
    cur_time: u64,

    blk_feed: Sender<Arc<BlockPkg>>,
    dia_feed: Sender<DiamondSmelt>,
    _blk_keep: InactiveReceiver<Arc<BlockPkg>>,
    _dia_keep: InactiveReceiver<DiamondSmelt>,
}


impl ChainEngine {

    pub fn open(cnf: EngineConf, oracle: Arc<dyn DiamondOracle>, disk: Arc<dyn DiskDB>) -> ChainEngine {
        mint::setup(); // wire the action creators
        let (mut blk_tx, blk_rx) = broadcast(64);
        let (mut dia_tx, dia_rx) = broadcast(64);
        blk_tx.set_overflow(true);
        dia_tx.set_overflow(true);
        ChainEngine {
            cnf,
            oracle,
            state: StateInst::build(disk),
            cur_height: 0,
            cur_hash: Hash::default(),
            cur_time: 0,
            blk_feed: blk_tx,
            dia_feed: dia_tx,
            _blk_keep: blk_rx.deactivate(),
            _dia_keep: dia_rx.deactivate(),
        }
    }

    pub fn latest_height(&self) -> u64 {
        self.cur_height
    }

    pub fn latest_hash(&self) -> &Hash {
        &self.cur_hash
    }

    pub fn state(&self) -> &dyn State {
        &self.state
    }

    // test and tool setup entrance, never during block apply
    pub fn state_mut(&mut self) -> &mut dyn State {
        &mut self.state
    }

    pub fn insert_block(&mut self, blk: BlockPkg) -> Rerr {
        do_insert(self, blk)
    }

    // sequenced inverse walk of the chain head, for reorganization
    pub fn revert_block(&mut self, blk: BlockPkg) -> Rerr {
        do_revert(self, blk)
    }

    pub fn subscribe_validated_block_on_insert(&self) -> Receiver<Arc<BlockPkg>> {
        self.blk_feed.new_receiver()
    }

    pub fn subscribe_diamond_on_create(&self) -> Receiver<DiamondSmelt> {
        self.dia_feed.new_receiver()
    }

}
