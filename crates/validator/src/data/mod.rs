//! Value containers
//!
//! - [`Presence`]: absent / null / supplied raw input
//! - [`Data`]: a validated field with a memoized outcome
//! - [`DataState`]: observable view of that outcome
//! - [`Member`]: type-erased container for dynamic models

pub mod container;
pub mod member;
pub mod presence;

pub use container::Data;
pub use member::Member;
pub use presence::{DataState, Presence};
