use std::sync::OnceLock;

use sys::*;

use crate::interface::Action;


include!{"action_creater.rs"}
