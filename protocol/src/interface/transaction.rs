
pub trait TxExec {
    fn apply(&self, _: &mut dyn Context) -> Rerr { never!() }
    fn revert(&self, _: &mut dyn Context) -> Rerr { never!() }
}


pub trait TransactionRead : Serialize + TxExec + Send + Sync + DynClone {

    fn ty(&self) -> u8 { never!() }

    // DoubleSHA256 of the serialization excluding signatures
    fn hash(&self) -> Hash { never!() }

    fn main(&self) -> Address { never!() }
    fn addrs(&self) -> Vec<Address> { vec![self.main()] }

    fn timestamp(&self) -> &Timestamp { never!() }

    fn fee(&self) -> &Amount { never!() }
    fn fee_pay(&self) -> Amount { never!() }
    fn fee_got(&self) -> Amount { never!() }

    fn message(&self) -> &Fixed16 { never!() }
    fn reward(&self) -> &Amount { never!() }

    fn action_count(&self) -> usize { never!() }
    fn actions(&self) -> &Vec<Box<dyn Action>> { never!() }
    fn signs(&self) -> &Vec<Sign> { never!() }

    fn req_sign(&self) -> Ret<HashSet<Address>> { never!() }
    fn verify_signature(&self) -> Rerr { never!() }

    // burn 90% of the fee
    fn burn_90(&self) -> bool {
        self.actions().iter().any(|a|a.burn_90())
    }

}


pub trait Transaction : TransactionRead + Field + Send + Sync {

    fn as_read(&self) -> &dyn TransactionRead;

    fn set_fee(&mut self, _: Amount) { never!() }

    // filled by the block walk after body application, coinbase only
    fn set_fee_totals(&mut self, _pay: Amount, _got: Amount) { never!() }

    fn fill_sign(&mut self, _: &Account) -> Ret<Sign> { never!() }
    fn push_sign(&mut self, _: Sign) -> Rerr { never!() }
    fn push_action(&mut self, _: Box<dyn Action>) -> Rerr { never!() }

}


clone_trait_object!(TransactionRead);
clone_trait_object!(Transaction);
