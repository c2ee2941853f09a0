#[macro_use]
mod macros;

pub mod hashmap;
pub mod linked_list;

pub use hashmap::{HashTable, TableError, djb2, hash};
