use std::any::Any;

use sys::*;
use field::*;
use field::interface::*;

use crate::interface::*;
use crate::operate::*;
use crate::state::*;


include!{"macro.rs"}
include!{"create.rs"}

include!{"diamond.rs"}


/*
* register
*/
action_register!{

    // diamond
    DiamondTransfer           // 5
    DiamondQuantityTransfer   // 6

}
