
/*
* coinbase, tx[0] of every block
*/
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TransactionCoinbase {
    pub ty      : Uint1,
    pub address : Address,
    pub reward  : Amount,
    pub message : Fixed16,

    // filled by the block walk after body application, not on the wire
    pub total_fee_user_payed     : Amount,
    pub total_fee_miner_received : Amount,
}


impl Parse for TransactionCoinbase {
    fn parse(&mut self, buf: &[u8]) -> Ret<usize> {
        let mut seek = self.ty.parse(buf)?;
        seek += self.address.parse(&buf[seek..])?;
        seek += self.reward.parse(&buf[seek..])?;
        seek += self.message.parse(&buf[seek..])?;
        Ok(seek)
    }
}

impl Serialize for TransactionCoinbase {
    fn serialize(&self) -> Vec<u8> {
        vec![
            self.ty.serialize(),
            self.address.serialize(),
            self.reward.serialize(),
            self.message.serialize(),
        ].concat()
    }
    fn size(&self) -> usize {
        self.ty.size() + self.address.size() + self.reward.size() + self.message.size()
    }
}

impl Field for TransactionCoinbase {
    fn new() -> Self {
        Self::default()
    }
}


impl TransactionRead for TransactionCoinbase {

    fn ty(&self) -> u8 {
        *self.ty
    }

    fn hash(&self) -> Hash {
        let stuff = self.serialize();
        let hx = sys::calculate_double_hash(stuff);
        Hash::from(hx)
    }

    fn main(&self) -> Address {
        self.address.clone()
    }

    fn fee_pay(&self) -> Amount {
        Amount::zero()
    }

    fn fee_got(&self) -> Amount {
        Amount::zero()
    }

    fn reward(&self) -> &Amount {
        &self.reward
    }

    fn message(&self) -> &Fixed16 {
        &self.message
    }

    fn action_count(&self) -> usize {
        0
    }

    fn burn_90(&self) -> bool {
        false
    }

    fn verify_signature(&self) -> Rerr {
        errf!("cannot verify signature on coinbase tx")
    }

}


impl Transaction for TransactionCoinbase {

    fn as_read(&self) -> &dyn TransactionRead {
        self
    }

    fn set_fee_totals(&mut self, pay: Amount, got: Amount) {
        self.total_fee_user_payed = pay;
        self.total_fee_miner_received = got;
    }

}


impl TxExec for TransactionCoinbase {

    fn apply(&self, ctx: &mut dyn Context) -> Rerr {
        let addr = self.main();
        let mut state = CoreState::wrap(ctx.state());
        operate::hac_add(&mut state, &addr, &self.reward)?;
        let got = &self.total_fee_miner_received;
        if got.is_positive() {
            operate::hac_add(&mut state, &addr, got)?;
        }
        Ok(())
    }

    fn revert(&self, ctx: &mut dyn Context) -> Rerr {
        let addr = self.main();
        let mut state = CoreState::wrap(ctx.state());
        let got = &self.total_fee_miner_received;
        if got.is_positive() {
            operate::hac_sub(&mut state, &addr, got)?;
        }
        operate::hac_sub(&mut state, &addr, &self.reward)?;
        Ok(())
    }

}


impl TransactionCoinbase {

    pub const TYPE: u8 = 0;

    pub fn new_by(addr: Address, reward: Amount, msg: &str) -> TransactionCoinbase {
        TransactionCoinbase {
            ty: Uint1::from(Self::TYPE),
            address: addr,
            reward: reward,
            message: Fixed16::from_readable(msg.as_bytes()).unwrap(),
            ..Default::default()
        }
    }

}
