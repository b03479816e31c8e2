use std::sync::Arc;

use async_broadcast::{broadcast, Sender, Receiver, InactiveReceiver};

use sys::*;
use field::*;
use field::interface::*;

use protocol::*;
use protocol::interface::*;
use protocol::component::*;
use protocol::context::ContextInst;
use protocol::state::CoreState;
use protocol::transaction::TransactionCoinbase;
use protocol::block;


include!{"conf.rs"}
include!{"state.rs"}
include!{"verify.rs"}
include!{"insert.rs"}
include!{"engine.rs"}
