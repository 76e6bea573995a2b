//! Traversal optics for focusing on zero or more parts.
//!
//! A Traversal generalizes a Lens (exactly one focus) to any finite number of
//! foci. It reads them as a sequence and rebuilds the source with every focus
//! passed through a function, keeping their order and count.
//!
//! # Laws
//!
//! Every Traversal must satisfy three laws:
//!
//! 1. **Modify Identity Law**: Applying the identity function yields the original.
//!    ```text
//!    traversal.modify(source, |x| x) == source
//!    ```
//!
//! 2. **Modify Composition Law**: Consecutive `modify` calls equal a single composed call.
//!    ```text
//!    traversal.modify(traversal.modify(source, f), g) == traversal.modify(source, |x| g(f(x)))
//!    ```
//!
//! 3. **Count Law**: Modifying never adds or removes foci.
//!    ```text
//!    traversal.length(&traversal.modify(source, f)) == traversal.length(&source)
//!    ```
//!
//! # Examples
//!
//! ```
//! use lensing::optics::{Setter, Traversal, VecTraversal};
//!
//! let each: VecTraversal<i32> = VecTraversal::new();
//! let numbers = vec![1, 2, 3];
//!
//! let incremented = each.modify(numbers.clone(), |x| x + 1);
//! assert_eq!(incremented, vec![2, 3, 4]);
//!
//! // `get_all` starts over on every call and sees the current contents.
//! assert_eq!(each.get_all(&numbers).collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(each.get_all(&incremented).sum::<i32>(), 9);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::Setter;

/// A Traversal focuses on zero or more parts within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused parts)
pub trait Traversal<S, A>: Setter<S, A> {
    /// Returns an iterator over all foci, in order.
    ///
    /// Each call builds a fresh iterator, so the sequence can be walked any
    /// number of times. It is finite and reflects the source it was given.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// Foci only need to live as long as the borrow of the source, so
    /// borrowed foci such as `&str` elements can be traversed too.
    fn get_all<'a>(&'a self, source: &'a S) -> Box<dyn Iterator<Item = A> + 'a>
    where
        A: 'a;

    /// Sets every focus to the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Traversal, VecTraversal};
    ///
    /// let each: VecTraversal<i32> = VecTraversal::new();
    /// assert_eq!(each.set_all(vec![1, 2, 3], 0), vec![0, 0, 0]);
    /// ```
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Folds over all foci in order.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Traversal, VecTraversal};
    ///
    /// let each: VecTraversal<i32> = VecTraversal::new();
    /// let product = each.fold(&vec![2, 3, 4], 1, |accumulator, element| accumulator * element);
    /// assert_eq!(product, 24);
    /// ```
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).fold(initial, function)
    }

    /// Returns the number of foci.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).count()
    }

    /// Returns the first focus, if any.
    fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).next()
    }

    /// Composes this traversal with another traversal.
    ///
    /// Every focus of `self` is traversed by `other`, and the results are
    /// concatenated in order.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Setter, Traversal, VecTraversal};
    ///
    /// let rows: VecTraversal<Vec<i32>> = VecTraversal::new();
    /// let cells = rows.compose(VecTraversal::<i32>::new());
    ///
    /// let grid = vec![vec![1, 2], vec![3]];
    /// assert_eq!(cells.get_all(&grid).collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(cells.modify(grid, |x| x * 10), vec![vec![10, 20], vec![30]]);
    /// ```
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }
}

// =============================================================================
// VecTraversal - every element of a Vec
// =============================================================================

/// The identity iteration over a `Vec`: every element is a focus.
///
/// # Example
///
/// ```
/// use lensing::optics::{Traversal, VecTraversal};
///
/// let each: VecTraversal<&str> = VecTraversal::new();
/// assert_eq!(each.length(&vec!["a", "b"]), 2);
/// assert_eq!(each.to_string(), "each");
/// ```
pub struct VecTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> VecTraversal<A> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> Copy for VecTraversal<A> {}

impl<A> Setter<Vec<A>, A> for VecTraversal<A> {
    fn modify<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }
}

impl<A: Clone> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn get_all<'a>(&'a self, source: &'a Vec<A>) -> Box<dyn Iterator<Item = A> + 'a>
    where
        A: 'a,
    {
        Box::new(source.iter().cloned())
    }

    fn length(&self, source: &Vec<A>) -> usize {
        source.len()
    }
}

impl<A> fmt::Display for VecTraversal<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("each")
    }
}

impl<A> fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

// =============================================================================
// OptionTraversal - the value inside an Option
// =============================================================================

/// A traversal over the value of an `Option`: one focus for `Some`, none for
/// `None`.
///
/// # Example
///
/// ```
/// use lensing::optics::{OptionTraversal, Setter, Traversal};
///
/// let some: OptionTraversal<i32> = OptionTraversal::new();
/// assert_eq!(some.modify(Some(4), |x| x * 2), Some(8));
/// assert_eq!(some.modify(None, |x| x * 2), None);
/// assert_eq!(some.length(&None), 0);
/// ```
pub struct OptionTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> OptionTraversal<A> {
    /// Creates a new `OptionTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for OptionTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for OptionTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> Copy for OptionTraversal<A> {}

impl<A> Setter<Option<A>, A> for OptionTraversal<A> {
    fn modify<F>(&self, source: Option<A>, function: F) -> Option<A>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }
}

impl<A: Clone> Traversal<Option<A>, A> for OptionTraversal<A> {
    fn get_all<'a>(&'a self, source: &'a Option<A>) -> Box<dyn Iterator<Item = A> + 'a>
    where
        A: 'a,
    {
        Box::new(source.iter().cloned())
    }
}

impl<A> fmt::Display for OptionTraversal<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("some")
    }
}

impl<A> fmt::Debug for OptionTraversal<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("OptionTraversal").finish()
    }
}

// =============================================================================
// FunctionTraversal - a named traversal built from two functions
// =============================================================================

/// A traversal implemented using a named pair of functions.
///
/// `get_all_function` lists the foci in order. `modify_function` receives the
/// source and the per-focus update (as a `&mut dyn FnMut`) and must apply it
/// to exactly the foci that `get_all_function` lists, in the same order.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The function listing the foci
/// - `M`: The function rebuilding the source
///
/// # Example
///
/// ```
/// use lensing::optics::{FunctionTraversal, Setter, Traversal};
///
/// let both = FunctionTraversal::new(
///     "both",
///     |pair: &(i32, i32)| vec![pair.0, pair.1],
///     |(left, right): (i32, i32), function: &mut dyn FnMut(i32) -> i32| {
///         (function(left), function(right))
///     },
/// );
///
/// assert_eq!(both.get_all(&(1, 2)).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(both.modify((1, 2), |x| -x), (-1, -2));
/// ```
pub struct FunctionTraversal<S, A, G, M>
where
    G: Fn(&S) -> Vec<A>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    name: Cow<'static, str>,
    get_all_function: G,
    modify_function: M,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, M> FunctionTraversal<S, A, G, M>
where
    G: Fn(&S) -> Vec<A>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Creates a new named `FunctionTraversal`.
    ///
    /// # Arguments
    ///
    /// * `name` - A diagnostic name, shown by `Display` and `Debug`
    /// * `get_all_function` - Lists the foci of a source in order
    /// * `modify_function` - Rebuilds a source with each focus updated
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, get_all_function: G, modify_function: M) -> Self {
        Self {
            name: name.into(),
            get_all_function,
            modify_function,
            _marker: PhantomData,
        }
    }

    /// Returns the diagnostic name of this traversal.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S, A, G, M> Setter<S, A> for FunctionTraversal<S, A, G, M>
where
    G: Fn(&S) -> Vec<A>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.modify_function)(source, &mut function)
    }
}

impl<S, A, G, M> Traversal<S, A> for FunctionTraversal<S, A, G, M>
where
    G: Fn(&S) -> Vec<A>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn get_all<'a>(&'a self, source: &'a S) -> Box<dyn Iterator<Item = A> + 'a>
    where
        A: 'a,
    {
        Box::new((self.get_all_function)(source).into_iter())
    }
}

impl<S, A, G, M> Clone for FunctionTraversal<S, A, G, M>
where
    G: Fn(&S) -> Vec<A> + Clone,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get_all_function: self.get_all_function.clone(),
            modify_function: self.modify_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, M> fmt::Display for FunctionTraversal<S, A, G, M>
where
    G: Fn(&S) -> Vec<A>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl<S, A, G, M> fmt::Debug for FunctionTraversal<S, A, G, M>
where
    G: Fn(&S) -> Vec<A>,
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionTraversal")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ComposedTraversal - traversal after traversal
// =============================================================================

/// A traversal composed of two traversals.
///
/// # Type Parameters
///
/// - `T1`: The type of the outer traversal
/// - `T2`: The type of the inner traversal
/// - `A`: The intermediate type (target of T1, source of T2)
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new composed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Setter<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Setter<S, A>,
    T2: Setter<A, B>,
{
    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first.modify(source, |intermediate| {
            self.second.modify(intermediate, &mut function)
        })
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn get_all<'a>(&'a self, source: &'a S) -> Box<dyn Iterator<Item = B> + 'a>
    where
        B: 'a,
    {
        // Intermediates are owned by the closure, so their foci are collected
        // before the intermediate is dropped.
        Box::new(self.first.get_all(source).flat_map(move |intermediate| {
            self.second.get_all(&intermediate).collect::<Vec<_>>()
        }))
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<T1: fmt::Display, T2: fmt::Display, A> fmt::Display for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.first, self.second)
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, A> fmt::Debug for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_traversal_modify_preserves_order() {
        let each: VecTraversal<i32> = VecTraversal::new();
        assert_eq!(each.modify(vec![3, 1, 2], |x| x * 2), vec![6, 2, 4]);
    }

    #[test]
    fn test_vec_traversal_get_all_is_restartable() {
        let each: VecTraversal<i32> = VecTraversal::new();
        let numbers = vec![1, 2, 3];

        let first_pass: Vec<i32> = each.get_all(&numbers).collect();
        let second_pass: Vec<i32> = each.get_all(&numbers).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_vec_traversal_empty() {
        let each: VecTraversal<i32> = VecTraversal::new();
        assert_eq!(each.head_option(&Vec::new()), None);
        assert_eq!(each.modify(Vec::new(), |x| x + 1), Vec::<i32>::new());
    }

    #[test]
    fn test_option_traversal() {
        let some: OptionTraversal<String> = OptionTraversal::new();
        assert_eq!(
            some.modify(Some("a".to_string()), |s| s + "b"),
            Some("ab".to_string())
        );
        assert_eq!(some.head_option(&Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_function_traversal_name() {
        let evens = FunctionTraversal::new(
            "evens",
            |list: &Vec<i32>| list.iter().copied().filter(|x| x % 2 == 0).collect(),
            |list: Vec<i32>, function: &mut dyn FnMut(i32) -> i32| {
                list.into_iter()
                    .map(|x| if x % 2 == 0 { function(x) } else { x })
                    .collect()
            },
        );

        assert_eq!(evens.to_string(), "evens");
        assert_eq!(evens.name(), "evens");
        assert_eq!(evens.fold(&vec![1, 2, 3, 4], 0, |acc, x| acc + x), 6);
        assert_eq!(evens.modify(vec![1, 2, 3, 4], |x| x + 100), vec![1, 102, 3, 104]);
    }

    #[test]
    fn test_composed_traversal_through_options() {
        let composed = VecTraversal::<Option<i32>>::new().compose(OptionTraversal::<i32>::new());
        let data = vec![Some(1), None, Some(3)];

        assert_eq!(composed.get_all(&data).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(composed.length(&data), 2);
        assert_eq!(composed.set_all(data, 0), vec![Some(0), None, Some(0)]);
        assert_eq!(composed.to_string(), "each.some");
    }
}
