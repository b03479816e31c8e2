
macro_rules! transaction_define {
    ($class:ident, $tyid:expr) => (


field::combi_struct!{ $class,
    ty        : Uint1
    timestamp : Timestamp
    address   : Address
    fee       : Amount
    actions   : DynListActionW4
    signs     : SignW4
}


impl TransactionRead for $class {

    fn ty(&self) -> u8 {
        *self.ty
    }

    fn hash(&self) -> Hash {
        // sign data excluded
        let stuff = vec![
            self.ty.serialize(),
            self.timestamp.serialize(),
            self.address.serialize(),
            self.fee.serialize(),
            self.actions.serialize(),
        ].concat();
        let hx = sys::calculate_double_hash(stuff);
        Hash::from(hx)
    }

    fn main(&self) -> Address {
        self.address
    }

    fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    fn fee(&self) -> &Amount {
        &self.fee
    }

    fn fee_pay(&self) -> Amount {
        self.fee.clone()
    }

    // fee the miner really receives
    fn fee_got(&self) -> Amount {
        let mut gfee = self.fee.clone();
        if self.burn_90() && gfee.unit() > 1 {
            gfee = gfee.unit_sub(1).unwrap(); // burn 90
        }
        gfee
    }

    fn action_count(&self) -> usize {
        self.actions.length()
    }

    fn actions(&self) -> &Vec<Box<dyn Action>> {
        self.actions.list()
    }

    fn signs(&self) -> &Vec<Sign> {
        self.signs.list()
    }

    fn req_sign(&self) -> Ret<HashSet<Address>> {
        let mut adrsets = HashSet::from([self.main()]);
        for act in self.actions() {
            for adr in act.req_sign() {
                if adr.is_privakey() {
                    adrsets.insert(adr); // just privakey
                }
            }
        }
        Ok(adrsets)
    }

    fn verify_signature(&self) -> Rerr {
        verify_tx_signature(self)
    }

}


impl Transaction for $class {

    fn as_read(&self) -> &dyn TransactionRead {
        self
    }

    fn set_fee(&mut self, fee: Amount) {
        self.fee = fee;
    }

    fn fill_sign(&mut self, acc: &Account) -> Ret<Sign> {
        let hx = self.hash();
        let signobj = Sign::create_by(acc, &hx);
        self.push_sign(signobj.clone())?;
        Ok(signobj)
    }

    fn push_sign(&mut self, signobj: Sign) -> Rerr {
        let plen = self.signs.length();
        // replace same public key
        for i in 0..plen {
            if self.signs[i].publickey == signobj.publickey {
                let mut signs = std::mem::take(&mut self.signs).into_list();
                signs[i] = signobj;
                self.signs = SignW4::from_list(signs)?;
                return Ok(())
            }
        }
        self.signs.push(signobj)
    }

    fn push_action(&mut self, act: Box<dyn Action>) -> Rerr {
        self.actions.push(act)
    }

}


impl TxExec for $class {

    fn apply(&self, ctx: &mut dyn Context) -> Rerr {
        do_tx_apply(self, ctx)
    }

    fn revert(&self, ctx: &mut dyn Context) -> Rerr {
        do_tx_revert(self, ctx)
    }

}


impl $class {

    pub const TYPE: u8 = $tyid;

    pub fn new_by(addr: Address, fee: Amount, ts: u64) -> $class {
        $class {
            ty: Uint1::from($tyid),
            timestamp: Timestamp::from(ts),
            address: addr,
            fee: fee,
            actions: DynListActionW4::default(),
            signs: SignW4::default(),
        }
    }

}


    )
}


/*
* common execute body
*/
fn do_tx_apply(tx: &dyn TransactionRead, ctx: &mut dyn Context) -> Rerr {
    if tx.action_count() == 0 {
        return errf!("tx actions cannot empty")
    }
    let main = tx.main();
    main.must_privakey()?;
    for adr in tx.addrs() {
        adr.check_version()?;
    }
    // execute actions
    for action in tx.actions() {
        action.apply(ctx)?;
    }
    // spend fee
    let fee = tx.fee();
    if fee.is_negative() {
        return errf!("tx fee cannot be negative")
    }
    if fee.not_zero() {
        let mut state = CoreState::wrap(ctx.state());
        operate::hac_sub(&mut state, &main, fee)?;
    }
    Ok(())
}


fn do_tx_revert(tx: &dyn TransactionRead, ctx: &mut dyn Context) -> Rerr {
    let main = tx.main();
    // refund fee
    let fee = tx.fee();
    if fee.not_zero() {
        let mut state = CoreState::wrap(ctx.state());
        operate::hac_add(&mut state, &main, fee)?;
    }
    // revert actions backwards
    for action in tx.actions().iter().rev() {
        action.revert(ctx)?;
    }
    Ok(())
}
