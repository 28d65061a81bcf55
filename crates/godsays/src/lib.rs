#![doc = include_str!("../README.md")]

mod amount;
mod corpus;
mod error;
mod generator;
mod random;

pub use crate::amount::*;
pub use crate::corpus::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::random::*;
