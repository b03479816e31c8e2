use std::sync::RwLock;

use sys::*;
use field::*;
use field::interface::*;

use crate::interface::*;
use crate::transaction::*;


include!{"util.rs"}
include!{"intro.rs"}
include!{"v1.rs"}
include!{"create.rs"}
