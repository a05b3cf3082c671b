//! Built-in value validators
//!
//! Value validators run after a container's presence policy accepted the
//! input, in attachment order.
//!
//! # Categories
//!
//! - **String**: length, emptiness, regex pattern
//! - **Numeric**: inclusive bounds
//! - **Collection**: size
//! - **Logical**: boolean, arbitrary predicate
//!
//! # Examples
//!
//! ```rust,ignore
//! use keel_validator::prelude::*;
//!
//! let name = required::<String>().into_data().with_validator(min_length(3).and(max_length(20)));
//! let quantity = required::<u32>().into_data().with_validator(in_range(1, 99));
//! ```

pub mod boolean;
pub mod length;
pub mod pattern;
pub mod predicate;
pub mod range;
pub mod size;

pub use boolean::{IsFalse, IsTrue, is_false, is_true};
pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use pattern::{MatchesRegex, matches_regex};
pub use predicate::{Predicate, predicate};
pub use range::{InRange, Max, Min, in_range, max, min};
pub use size::{MaxSize, MinSize, max_size, min_size};
