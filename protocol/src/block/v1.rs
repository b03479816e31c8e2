
// BlockV1
#[derive(Debug, Default, Clone)]
pub struct BlockV1 {
    // head meta
    pub intro: BlockIntro,
    // trs body
    pub transactions: DynVecTransaction,
}


impl Parse for BlockV1 {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        let mut intro = BlockIntro::default();
        let mut seek = intro.parse(buf)?;
        let trslen = *intro.head.transaction_count;
        self.intro = intro;
        // body
        self.transactions.set_count(Uint4::from(trslen));
        seek += self.transactions.parse(&buf[seek..])?;
        Ok(seek)
    }
}

impl Serialize for BlockV1 {
    fn serialize(&self) -> Vec<u8> {
        vec![
            self.intro.serialize(),
            self.transactions.serialize(),
        ].concat()
    }
    fn size(&self) -> usize {
        self.intro.size() + self.transactions.size()
    }
}

impl Field for BlockV1 {
    fn new() -> Self {
        let mut blk = Self::default();
        blk.intro.head.version = Uint1::from(Self::VERSION);
        blk
    }
}


/********************/


macro_rules! block_head_fn_mount {
    ($fname:ident, $field:ident, $rty:ty) => (
        fn $fname(&self) -> &$rty {
            &self.intro.head.$field
        }
    )
}

macro_rules! block_meta_fn_mount {
    ($fname:ident, $field:ident, $rty:ty) => (
        fn $fname(&self) -> &$rty {
            &self.intro.meta.$field
        }
    )
}


impl BlockRead for BlockV1 {

    fn hash(&self) -> Hash {
        self.intro.hash()
    }

    block_head_fn_mount!{version, version, Uint1}
    block_head_fn_mount!{height, height, BlockHeight}
    block_head_fn_mount!{timestamp, timestamp, Timestamp}
    block_head_fn_mount!{prevhash, prevhash, Hash}
    block_head_fn_mount!{mrklroot, mrklroot, Hash}
    block_head_fn_mount!{transaction_count, transaction_count, Uint4}
    block_meta_fn_mount!{nonce, nonce, Uint4}
    block_meta_fn_mount!{difficulty, difficulty, Uint4}
    block_meta_fn_mount!{witness_stage, witness_stage, Uint2}

    fn transactions(&self) -> &Vec<Box<dyn Transaction>> {
        self.transactions.list()
    }

    fn transaction_hash_list(&self) -> Vec<Hash> {
        self.transactions.list().iter().map(|t|t.hash()).collect()
    }

    fn coinbase_transaction(&self) -> Ret<&dyn TransactionRead> {
        let txs = self.transactions();
        if txs.len() < 1 {
            return errf!("block must have coinbase tx")
        }
        let cbtx = &txs[0];
        if cbtx.ty() != TransactionCoinbase::TYPE {
            return errf!("block first tx must be coinbase")
        }
        Ok(cbtx.as_read())
    }

}


impl BlkExec for BlockV1 {

    fn apply(&mut self, ctx: &mut dyn Context) -> Rerr {
        let blkhei = self.height().uint();
        self.coinbase_transaction()?; // tx[0] must be coinbase
        let txlen = self.transactions.length();
        let mut total_fee_pay = Amount::zero();
        let mut total_fee_got = Amount::zero();
        // customer txs start from the second one
        for i in 1..txlen {
            let tx = &self.transactions.list()[i];
            let txhx = tx.hash();
            {
                let mut state = crate::state::CoreState::wrap(ctx.state());
                if state.tx_exist(&txhx).is_some() && blkhei != TX_REPEAT_PERMIT_HEIGHT {
                    return errf!("tx {} already exist", txhx)
                }
                state.tx_exist_set(&txhx, &BlockHeight::from(blkhei));
            }
            ctx.tx_replace(create_tx_info(tx.as_read()));
            tx.apply(ctx)?;
            total_fee_pay = total_fee_pay.add_mode_u128(&tx.fee_pay())?;
            total_fee_got = total_fee_got.add_mode_u128(&tx.fee_got())?;
        }
        // finalize coinbase
        {
            let cb = &mut self.transactions.as_mut_list()[0];
            cb.set_fee_totals(total_fee_pay, total_fee_got);
        }
        let cb = &self.transactions.list()[0];
        ctx.tx_replace(create_tx_info(cb.as_read()));
        cb.apply(ctx)
    }

    fn revert(&mut self, ctx: &mut dyn Context) -> Rerr {
        let txlen = self.transactions.length();
        let mut total_fee_pay = Amount::zero();
        let mut total_fee_got = Amount::zero();
        // backwards from the last tx
        for i in (1..txlen).rev() {
            let tx = &self.transactions.list()[i];
            ctx.tx_replace(create_tx_info(tx.as_read()));
            tx.revert(ctx)?;
            let txhx = tx.hash();
            let mut state = crate::state::CoreState::wrap(ctx.state());
            state.tx_exist_del(&txhx);
            total_fee_pay = total_fee_pay.add_mode_u128(&tx.fee_pay())?;
            total_fee_got = total_fee_got.add_mode_u128(&tx.fee_got())?;
        }
        {
            let cb = &mut self.transactions.as_mut_list()[0];
            cb.set_fee_totals(total_fee_pay, total_fee_got);
        }
        let cb = &self.transactions.list()[0];
        ctx.tx_replace(create_tx_info(cb.as_read()));
        cb.revert(ctx)
    }

}


/********************/


impl Block for BlockV1 {

    fn as_read(&self) -> &dyn BlockRead {
        self
    }

    fn fresh(&self) {
        self.intro.fresh();
    }

    fn update_mrklroot(&mut self) {
        let hxlist = self.transaction_hash_list();
        let mrkl = calculate_mrklroot(&hxlist);
        self.set_mrklroot(mrkl);
    }

    fn set_mrklroot(&mut self, mkrt: Hash) {
        self.intro.head.mrklroot = mkrt;
        self.intro.fresh();
    }

    fn set_nonce(&mut self, nonce: Uint4) {
        self.intro.meta.nonce = nonce;
        self.intro.fresh();
    }

    fn push_transaction(&mut self, tx: Box<dyn Transaction>) -> Rerr {
        let ct = &mut self.intro.head.transaction_count;
        if ct.uint() == u32::MAX {
            return errf!("transaction overflow")
        }
        *ct += 1;
        let newct = *ct;
        self.transactions.set_count(newct);
        self.transactions.as_mut_list().push(tx);
        self.intro.fresh();
        Ok(())
    }

}


/********************/


impl BlockV1 {

    pub const VERSION: u8 = 1;

    pub fn new() -> BlockV1 {
        <BlockV1 as Field>::new()
    }

}
