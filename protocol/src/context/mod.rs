use sys::*;
use field::*;
use field::interface::*;

use crate::{Env, TxInfo};
use crate::interface::*;


/*
* per block execution context, owns the pending diamond slot
*/
pub struct ContextInst<'a> {
    pub env: Env,
    sta: &'a mut dyn State,
    orc: &'a dyn DiamondOracle,
    pending_diamond: Option<DiamondSmelt>,
}


impl<'a> ContextInst<'a> {

    pub fn new(env: Env, sta: &'a mut dyn State, orc: &'a dyn DiamondOracle) -> ContextInst<'a> {
        ContextInst {
            env, sta, orc,
            pending_diamond: None,
        }
    }

}


impl Context for ContextInst<'_> {

    fn env(&self) -> &Env {
        &self.env
    }

    fn tx_replace(&mut self, tx: TxInfo) -> TxInfo {
        self.env.replace_tx(tx)
    }

    fn state(&mut self) -> &mut dyn State {
        &mut *self.sta
    }

    fn oracle(&self) -> &dyn DiamondOracle {
        self.orc
    }

    fn pending_diamond(&self) -> Option<&DiamondSmelt> {
        self.pending_diamond.as_ref()
    }

    fn pending_diamond_set(&mut self, smelt: DiamondSmelt) -> Rerr {
        if let Some(hav) = &self.pending_diamond {
            return errf!("this block already contain diamond {}", hav.diamond.to_readable())
        }
        self.pending_diamond = Some(smelt);
        Ok(())
    }

    fn pending_diamond_take(&mut self) -> Option<DiamondSmelt> {
        self.pending_diamond.take()
    }

}
