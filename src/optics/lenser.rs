//! A value paired with a lens focused inside it.
//!
//! [`Lenser`] is a small builder for chained access. It starts at the whole
//! value, and every [`join`](Lenser::join) (or fluent accessor such as
//! [`first`](Lenser::first) or [`index`](Lenser::index)) moves the focus one
//! level deeper. Reading and writing always go through the root value, so
//! `set` returns a complete new root.
//!
//! # Example
//!
//! ```
//! use lensing::optics::Lenser;
//!
//! let table = vec![(1, ('a', true)), (2, ('b', false))];
//!
//! let updated = Lenser::new(table.clone()).index(1).second().first().set('z');
//!
//! assert_eq!(updated, vec![(1, ('a', true)), (2, ('z', false))]);
//! assert_eq!(table[1].1.0, 'b');
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{
    ComposedLens, IdentityLens, Lens, PairFirst, PairSecond, TripleFirst, TripleSecond,
    TripleThird, array_index, pair_first, pair_second, string_index, triple_first, triple_second,
    triple_third, vec_index,
};

/// A root value viewed through a lens.
///
/// # Type Parameters
///
/// - `S`: The root type
/// - `A`: The focus type
/// - `L`: The lens from the root to the focus
pub struct Lenser<S, A, L = IdentityLens<S>> {
    source: S,
    lens: L,
    _marker: PhantomData<A>,
}

impl<S: Clone> Lenser<S, S, IdentityLens<S>> {
    /// Wraps a value, focused on the whole value.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::Lenser;
    ///
    /// let lenser = Lenser::new(5);
    /// assert_eq!(lenser.get(), 5);
    /// assert_eq!(lenser.set(6), 6);
    /// ```
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self::with_lens(source, IdentityLens::new())
    }
}

impl<S, A, L> Lenser<S, A, L> {
    /// Wraps a value, focused through `lens`.
    #[must_use]
    pub const fn with_lens(source: S, lens: L) -> Self {
        Self {
            source,
            lens,
            _marker: PhantomData,
        }
    }

    /// Returns the root value.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the lens from the root to the focus.
    pub const fn lens(&self) -> &L {
        &self.lens
    }

    /// Unwraps the root value.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S, A, L> Lenser<S, A, L>
where
    L: Lens<S, A>,
{
    /// Reads the focus.
    pub fn get(&self) -> A {
        self.lens.get(&self.source)
    }

    /// Returns a new root with the focus replaced by `value`.
    ///
    /// The wrapped root is left as it was, so the same `Lenser` can be used
    /// for further reads and writes.
    pub fn set(&self, value: A) -> S
    where
        S: Clone,
    {
        self.lens.set(self.source.clone(), value)
    }

    /// Returns a new root with the focus passed through `function`.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::Lenser;
    ///
    /// let pair = Lenser::new((2, "two")).first();
    /// assert_eq!(pair.modify(|n| n * 21), (42, "two"));
    /// ```
    pub fn modify<F>(&self, function: F) -> S
    where
        S: Clone,
        F: FnOnce(A) -> A,
    {
        self.set(function(self.get()))
    }

    /// Moves the focus deeper by joining the current lens with `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Lenser, pair_second};
    ///
    /// let nested = Lenser::new((0, (1, 2))).join(pair_second()).join(pair_second());
    ///
    /// assert_eq!(nested.get(), 2);
    /// assert_eq!(nested.lens().to_string(), "id.second.second");
    /// ```
    pub fn join<B, L2>(self, other: L2) -> Lenser<S, B, ComposedLens<L, L2, A>>
    where
        L2: Lens<A, B>,
    {
        Lenser::with_lens(self.source, self.lens.compose(other))
    }
}

impl<S, X, Y, L> Lenser<S, (X, Y), L>
where
    L: Lens<S, (X, Y)>,
    X: Clone,
    Y: Clone,
{
    /// Focuses on the first component of the focused pair.
    pub fn first(self) -> Lenser<S, X, ComposedLens<L, PairFirst<X, Y>, (X, Y)>> {
        self.join(pair_first())
    }

    /// Focuses on the second component of the focused pair.
    pub fn second(self) -> Lenser<S, Y, ComposedLens<L, PairSecond<X, Y>, (X, Y)>> {
        self.join(pair_second())
    }
}

impl<S, X, Y, Z, L> Lenser<S, (X, Y, Z), L>
where
    L: Lens<S, (X, Y, Z)>,
    X: Clone,
    Y: Clone,
    Z: Clone,
{
    /// Focuses on the first component of the focused triple.
    pub fn first(self) -> Lenser<S, X, ComposedLens<L, TripleFirst<X, Y, Z>, (X, Y, Z)>> {
        self.join(triple_first())
    }

    /// Focuses on the second component of the focused triple.
    pub fn second(self) -> Lenser<S, Y, ComposedLens<L, TripleSecond<X, Y, Z>, (X, Y, Z)>> {
        self.join(triple_second())
    }

    /// Focuses on the third component of the focused triple.
    pub fn third(self) -> Lenser<S, Z, ComposedLens<L, TripleThird<X, Y, Z>, (X, Y, Z)>> {
        self.join(triple_third())
    }
}

impl<S, T, L> Lenser<S, Vec<T>, L>
where
    L: Lens<S, Vec<T>>,
    T: Clone,
{
    /// Focuses on the element at `index` of the focused vector.
    ///
    /// # Panics
    ///
    /// Reading or writing through the result panics if `index` is out of
    /// bounds.
    pub fn index(
        self,
        index: usize,
    ) -> Lenser<S, T, ComposedLens<L, impl Lens<Vec<T>, T> + Clone + fmt::Display + fmt::Debug, Vec<T>>>
    {
        self.join(vec_index(index))
    }
}

impl<S, T, L, const N: usize> Lenser<S, [T; N], L>
where
    L: Lens<S, [T; N]>,
    T: Clone,
{
    /// Focuses on the element at `index` of the focused array.
    ///
    /// # Panics
    ///
    /// Reading or writing through the result panics if `index >= N`.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::Lenser;
    ///
    /// let digits = [1, 2, 3];
    /// assert_eq!(Lenser::new(digits).index(1).set(9), [1, 9, 3]);
    /// assert_eq!(digits, [1, 2, 3]);
    /// ```
    pub fn index(
        self,
        index: usize,
    ) -> Lenser<S, T, ComposedLens<L, impl Lens<[T; N], T> + Clone + fmt::Display + fmt::Debug, [T; N]>>
    {
        self.join(array_index(index))
    }
}

impl<S, L> Lenser<S, String, L>
where
    L: Lens<S, String>,
{
    /// Focuses on the `char` at position `index` of the focused string.
    ///
    /// # Panics
    ///
    /// Reading or writing through the result panics if the string has
    /// `index` or fewer chars.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::Lenser;
    ///
    /// let word = Lenser::new("abc".to_string()).index(2);
    /// assert_eq!(word.get(), 'c');
    /// assert_eq!(word.set('z'), "abz");
    /// ```
    pub fn index(
        self,
        index: usize,
    ) -> Lenser<S, char, ComposedLens<L, impl Lens<String, char> + Clone + fmt::Display + fmt::Debug, String>>
    {
        self.join(string_index(index))
    }
}

impl<S: Clone, A, L: Clone> Clone for Lenser<S, A, L> {
    fn clone(&self) -> Self {
        Self::with_lens(self.source.clone(), self.lens.clone())
    }
}

impl<S: fmt::Debug, A, L: fmt::Debug> fmt::Debug for Lenser<S, A, L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Lenser")
            .field("source", &self.source)
            .field("lens", &self.lens)
            .finish()
    }
}
