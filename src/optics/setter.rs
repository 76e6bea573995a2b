//! The write capability shared by lenses and traversals.
//!
//! A [`Setter`] rebuilds a source with every focus passed through a function.
//! Lenses have exactly one focus, traversals zero or more.
//!
//! Lenses do not implement `modify` by hand: [`modify_through_lens`] derives it
//! from the two lens primitives, `get` and `set`.

use super::Lens;

/// Updates the focus (or foci) of a source with a function.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
///
/// # Laws
///
/// 1. **Identity**: `setter.modify(source, |x| x) == source`
/// 2. **Composition**: `setter.modify(setter.modify(source, f), g) == setter.modify(source, |x| g(f(x)))`
pub trait Setter<S, A> {
    /// Applies `function` to every focus and returns the rebuilt source.
    ///
    /// Foci are visited in order and the number of foci never changes.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `function` - The function applied to each focus
    ///
    /// # Returns
    ///
    /// A new source with every focus replaced by `function(focus)`
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;
}

/// Modifies the focus of a lens by reading it, applying `function` and writing
/// the result back.
///
/// This is `lens.set(source, function(lens.get(&source)))`, the definition every
/// lens in this crate uses for [`Setter::modify`].
///
/// # Example
///
/// ```
/// use lensing::optics::{modify_through_lens, pair_second};
///
/// let second = pair_second::<&str, i32>();
/// let pair = modify_through_lens(&second, ("a", 20), |value| value + 1);
/// assert_eq!(pair, ("a", 21));
/// ```
pub fn modify_through_lens<S, A, L, F>(lens: &L, source: S, mut function: F) -> S
where
    L: Lens<S, A> + ?Sized,
    F: FnMut(A) -> A,
{
    let current = lens.get(&source);
    lens.set(source, function(current))
}
