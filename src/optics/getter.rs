//! The read-only optic capability.
//!
//! A [`Getter`] extracts a focus `A` from a source `S`. Every lens and iso is a
//! getter; a getter on its own cannot write anything back.
//!
//! Getters hand out the focus by value. This lets an optic focus on data that
//! is not stored as a field of its own, such as a `char` inside a `String`.
//!
//! # Example
//!
//! ```
//! use lensing::optics::{Getter, pair_first};
//!
//! let first = pair_first::<i32, &str>();
//! assert_eq!(first.get(&(2, "three")), 2);
//! ```

/// Reads a focus out of a source.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type (the part being read)
pub trait Getter<S, A> {
    /// Returns the focused value.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The value currently in focus
    fn get(&self, source: &S) -> A;
}

impl<S, A, G> Getter<S, A> for &G
where
    G: Getter<S, A> + ?Sized,
{
    fn get(&self, source: &S) -> A {
        (**self).get(source)
    }
}
