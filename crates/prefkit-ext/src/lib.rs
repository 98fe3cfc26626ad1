#![doc = include_str!("../README.md")]

mod color;
mod date;
pub mod iso8601;
mod slice;
mod string;

pub use color::{InvalidHexColor, Rgba};
pub use date::DateComponents;
pub use slice::{SafeIndex, SafeIndexMut};
pub use string::CapitalizedFirst;
