use sys::*;
use field::*;
use field::interface::*;

use crate::interface::*;


include!{"macro.rs"}
include!{"state.rs"}
