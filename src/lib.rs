//! # lensing
//!
//! Composable optics for immutable Rust data.
//!
//! ## Overview
//!
//! Optics are typed accessors that read and rebuild parts of a value without
//! mutating it. This crate provides:
//!
//! - **Capabilities**: [`Getter`](optics::Getter), [`Setter`](optics::Setter)
//! - **Optics**: Lens, Iso, Prism, Optional and Traversal, each with a named,
//!   closure-backed constructor
//! - **Composition**: lens joins, lens/traversal compositions in both
//!   directions, and lens/prism and lens/optional compositions
//! - **Focus wrapper**: [`Lenser`](optics::Lenser) for fluent chained access
//! - **Standard optics**: tuple components, vector/array/string indices and
//!   common isos
//! - **Derive macros**: `#[derive(Lenses)]` and `#[derive(Prisms)]`
//!
//! ## Feature Flags
//!
//! - `derive` (default): re-export the `Lenses` and `Prisms` derive macros
//!
//! ## Example
//!
//! ```rust
//! use lensing::prelude::*;
//!
//! let pairs = vec![(1, "one"), (2, "two")];
//!
//! let firsts = VecTraversal::new().compose_lens(pair_first());
//! assert_eq!(firsts.get_all(&pairs).collect::<Vec<i32>>(), vec![1, 2]);
//!
//! let updated = Lenser::new(pairs).index(1).second().set("deux");
//! assert_eq!(updated, vec![(1, "one"), (2, "deux")]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every optic trait, constructor and composition.
///
/// # Usage
///
/// ```rust
/// use lensing::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};
}

pub mod optics;

#[cfg(feature = "derive")]
pub use lensing_derive::{Lenses, Prisms};
