
pub trait BlkExec {
    // walk transactions in order and finalize the coinbase fee totals
    fn apply(&mut self, _: &mut dyn Context) -> Rerr { never!() }
    // the sequenced inverse walk
    fn revert(&mut self, _: &mut dyn Context) -> Rerr { never!() }
}


pub trait BlockRead : BlkExec + Serialize + Send + Sync + DynClone {

    fn hash(&self) -> Hash { never!() }

    fn version(&self) -> &Uint1 { never!() }
    fn height(&self) -> &BlockHeight { never!() }
    fn timestamp(&self) -> &Timestamp { never!() }
    fn nonce(&self) -> &Uint4 { never!() }
    fn difficulty(&self) -> &Uint4 { never!() }
    fn witness_stage(&self) -> &Uint2 { never!() }
    fn prevhash(&self) -> &Hash { never!() }
    fn mrklroot(&self) -> &Hash { never!() }
    fn transaction_count(&self) -> &Uint4 { never!() }

    fn transactions(&self) -> &Vec<Box<dyn Transaction>> { never!() }
    fn transaction_hash_list(&self) -> Vec<Hash> { never!() }
    fn coinbase_transaction(&self) -> Ret<&dyn TransactionRead> { never!() }

}


pub trait Block : BlockRead + Field + Send + Sync {

    fn as_read(&self) -> &dyn BlockRead;

    // drop the cached hash after any mutation
    fn fresh(&self);

    fn set_nonce(&mut self, _: Uint4);
    fn set_mrklroot(&mut self, _: Hash);
    fn update_mrklroot(&mut self);
    fn push_transaction(&mut self, _: Box<dyn Transaction>) -> Rerr;

}


clone_trait_object!(BlockRead);
clone_trait_object!(Block);
