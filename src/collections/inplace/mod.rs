pub mod circular;

pub use circular::{CapacityError, CircularDeque};
