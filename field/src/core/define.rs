
// block
pub type BlockHeight = Uint5;
pub type Timestamp = Uint5;

// common
pub type Hash = Fixed32;
pub type HashNonce = Fixed8;

// diamond
pub type DiamondNumber = Uint3;
