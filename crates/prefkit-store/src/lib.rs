#![doc = include_str!("../README.md")]

mod file;
mod memory;
mod store;
mod value;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{Store, StoreError};
pub use value::NativeValue;
