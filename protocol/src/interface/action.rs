
pub trait ActExec {
    fn apply(&self, _: &mut dyn Context) -> Rerr { never!() }
    // exact inverse of apply, for chain reorganization
    fn revert(&self, _: &mut dyn Context) -> Rerr { never!() }
}


pub trait Action : ActExec + Field + Send + Sync + DynClone + std::fmt::Debug {
    fn kind(&self) -> u16 { never!() }
    fn burn_90(&self) -> bool { false } // burn 90% of the tx fee
    fn req_sign(&self) -> Vec<Address> { vec![] }

    fn as_any(&self) -> &dyn Any { never!() }
}

clone_trait_object!(Action);
