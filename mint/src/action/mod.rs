use std::any::Any;

use sys::*;
use field::*;
use field::interface::*;

use protocol::*;
use protocol::interface::*;
use protocol::operate::*;
use protocol::state::*;
use protocol::action_define;
use protocol::action_register;


include!{"diamond_util.rs"}
include!{"diamond_mint.rs"}
include!{"lending_util.rs"}
include!{"lending.rs"}


/*
* actions register
*/
action_register!{

    DiamondMint            // 4

    DiamondLendingCreate   // 15
    DiamondLendingRansom   // 16

}
