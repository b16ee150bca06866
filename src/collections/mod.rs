pub mod inplace;

pub use inplace::{CapacityError, CircularDeque};
