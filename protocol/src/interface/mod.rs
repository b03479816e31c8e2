use std::any::Any;
use std::collections::HashSet;

use dyn_clone::{DynClone, clone_trait_object};

use sys::*;
use field::*;
use field::interface::*;

use crate::component::{MemKV, MemMap};
use crate::{Env, TxInfo};


include!{"db.rs"}
include!{"state.rs"}
include!{"oracle.rs"}
include!{"context.rs"}
include!{"action.rs"}
include!{"transaction.rs"}
include!{"block.rs"}
