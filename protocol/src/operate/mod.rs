use sys::*;
use field::*;
use field::interface::*;

use crate::state::*;


include!{"hacash.rs"}
include!{"diamond.rs"}
