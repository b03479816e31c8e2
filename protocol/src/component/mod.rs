use std::collections::HashMap;

use sys::*;
use field::*;
use field::interface::*;

use crate::interface::*;
use crate::block;


include!{"memkv.rs"}
include!{"block.rs"}
