//! A fixed-capacity double-ended queue stored inline as a ring of `N` slots.
//!
//! ```
//! use circular_deque::CircularDeque;
//!
//! let mut q = CircularDeque::<char, 4>::new();
//! q.push_back('a').unwrap();
//! q.push_back('b').unwrap();
//! q.push_back('c').unwrap();
//! q.push_front('d').unwrap();
//! assert!(q.is_full());
//! assert!(q.push_back('e').is_err());
//! assert_eq!(q.iter().collect::<String>(), "dabc");
//! assert_eq!(q.iter().rev().collect::<String>(), "cbad");
//! ```

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub use collections::{CapacityError, CircularDeque};
