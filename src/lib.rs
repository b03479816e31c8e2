
pub use sys;
pub use field;
pub use protocol;
pub use mint;
pub use chain;
