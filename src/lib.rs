pub mod bitwise;
pub mod board;
pub mod error;
