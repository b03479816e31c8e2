use std::time::{SystemTime, UNIX_EPOCH};

pub type Error = String;


include!{"error.rs"}
include!{"match.rs"}
include!{"string.rs"}
include!{"buffer.rs"}
include!{"hex.rs"}
include!{"hash.rs"}
include!{"time.rs"}
include!{"account.rs"}
