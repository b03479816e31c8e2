use std::collections::*;
use std::fmt::{Debug, Display, Formatter, Result};
use std::cmp::Ordering;
use std::ops::{
    Deref, DerefMut, Index, IndexMut,
    Add, Sub, AddAssign, SubAssign,
};

use base64::prelude::*;

use sys::*;


pub mod interface;

use interface::*;


include!{"util.rs"}

// number
include!{"number/macro.rs"}
include!{"number/uint.rs"}

// bytes
include!{"bytes/fixed.rs"}

// combi
include!{"combi/struct.rs"}
include!{"combi/list.rs"}
include!{"combi/dynlist.rs"}
include!{"combi/dynvec.rs"}

// core
include!{"core/define.rs"}
include!{"core/amount.rs"}
include!{"core/address.rs"}
include!{"core/diamond.rs"}
include!{"core/store.rs"}
include!{"core/lending.rs"}

// component
include!{"component/sign.rs"}
include!{"component/balance.rs"}
include!{"component/total.rs"}

#[cfg(test)]
include!{"tests.rs"}
