//! Core types for the Gridwork spatial engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other Gridwork crate: integer
//! [`Point`]s, the four cardinal [`Direction`]s, the [`GridError`] type,
//! and a pair of small iterator helpers used by grid consumers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod iter;
pub mod point;

pub use direction::Direction;
pub use error::GridError;
pub use iter::{group_while, unique_pairs};
pub use point::Point;
