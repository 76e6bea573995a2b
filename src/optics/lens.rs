//! Lens optics for focusing on exactly one part of a value.
//!
//! A Lens is an optic that provides get/set access to a part within a larger
//! structure. The whole always contains exactly one focus. Lenses are
//! composable ("joined"), allowing access to deeply nested parts.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! A [`ComposedLens`] of two lawful lenses is lawful, and composition is
//! associative.
//!
//! # Examples
//!
//! ```
//! use lensing::optics::{Getter, Lens};
//! use lensing::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::setter::modify_through_lens;
use super::{Getter, Setter, Traversal};

/// A Lens focuses on a single part within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source, lens.get(&source)) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == value`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait Lens<S, A>: Getter<S, A> + Setter<S, A> {
    /// Sets the focused part to a new value, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused part
    ///
    /// # Returns
    ///
    /// A new source with the focused part replaced
    fn set(&self, source: S, value: A) -> S;

    /// Joins this lens with another lens to focus on a nested part.
    ///
    /// The focus of `self` becomes the source of `other`.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The target type of the other lens
    /// - `L`: The type of the other lens
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Getter, Lens, pair_first, pair_second};
    ///
    /// let nested = pair_second::<i32, (i32, i32)>().compose(pair_first());
    ///
    /// assert_eq!(nested.get(&(2, (3, 4))), 3);
    /// assert_eq!(nested.set((2, (3, 4)), 99), (2, (99, 4)));
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Converts this lens to a traversal that always has exactly one focus.
    fn to_traversal(self) -> LensAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

/// Joins two lenses end to end.
///
/// `join(left, right)` reads the intermediate value through `left`, then reads
/// or updates it through `right`. It is the free-function form of
/// [`Lens::compose`].
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Lens, join, triple_second, pair_first};
///
/// let lens = join(triple_second::<u8, (char, bool), u8>(), pair_first());
/// let source = (1, ('a', true), 3);
///
/// assert_eq!(lens.get(&source), 'a');
/// assert_eq!(lens.set(source, 'z'), (1, ('z', true), 3));
/// ```
pub fn join<S, A, B, L1, L2>(left: L1, right: L2) -> ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    left.compose(right)
}

/// A lens implemented using a named getter and setter pair.
///
/// This is the usual way to build a lens by hand. The name only shows up in
/// [`Display`](fmt::Display) and [`Debug`] output; it plays no part in
/// behavior. The getter and setter must be pure.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use lensing::optics::{FunctionLens, Getter, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     "x",
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(x_lens.to_string(), "x");
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    name: Cow<'static, str>,
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new named `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `name` - A diagnostic name, shown by `Display` and `Debug`
    /// * `getter` - A function that reads the focus from the source
    /// * `setter` - A function that returns the source with the focus replaced
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, getter: G, setter: St) -> Self {
        Self {
            name: name.into(),
            getter,
            setter,
            _marker: PhantomData,
        }
    }

    /// Returns the diagnostic name of this lens.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S, A, G, St> Getter<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }
}

impl<S, A, G, St> Setter<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        modify_through_lens(self, source, function)
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> fmt::Display for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The lens whose focus is the whole source.
///
/// `get` returns a copy of the source and `set` replaces it wholesale. It is
/// the unit of lens composition and the lens a fresh
/// [`Lenser`](super::Lenser) starts from.
pub struct IdentityLens<S> {
    _marker: PhantomData<S>,
}

impl<S> IdentityLens<S> {
    /// Creates the identity lens.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Default for IdentityLens<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for IdentityLens<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S> Copy for IdentityLens<S> {}

impl<S: Clone> Getter<S, S> for IdentityLens<S> {
    fn get(&self, source: &S) -> S {
        source.clone()
    }
}

impl<S> Setter<S, S> for IdentityLens<S> {
    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(S) -> S,
    {
        function(source)
    }
}

impl<S: Clone> Lens<S, S> for IdentityLens<S> {
    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

impl<S> fmt::Display for IdentityLens<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("id")
    }
}

impl<S> fmt::Debug for IdentityLens<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IdentityLens").finish()
    }
}

/// A lens composed of two lenses.
///
/// `get` reads through `first` then `second`. `set` reads the intermediate
/// value through `first`, replaces its part through `second`, and writes the
/// updated intermediate back through `first`.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate structure)
    /// * `second` - The inner lens (focuses on the final part)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }

    /// Returns the outer lens.
    pub const fn first(&self) -> &L1 {
        &self.first
    }

    /// Returns the inner lens.
    pub const fn second(&self) -> &L2 {
        &self.second
    }
}

impl<S, A, B, L1, L2> Getter<S, B> for ComposedLens<L1, L2, A>
where
    L1: Getter<S, A>,
    L2: Getter<A, B>,
{
    fn get(&self, source: &S) -> B {
        let intermediate = self.first.get(source);
        self.second.get(&intermediate)
    }
}

impl<S, A, B, L1, L2> Setter<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        modify_through_lens(self, source, function)
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: fmt::Display, L2: fmt::Display, A> fmt::Display for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.first, self.second)
    }
}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens converted to a traversal.
///
/// This wrapper allows using a lens where a traversal is expected.
/// It always yields exactly one element.
pub struct LensAsTraversal<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsTraversal<L, S, A> {
    /// Creates a new `LensAsTraversal` from a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Setter<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.lens.modify(source, function)
    }
}

impl<L, S, A> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_all<'a>(&'a self, source: &'a S) -> Box<dyn Iterator<Item = A> + 'a>
    where
        A: 'a,
    {
        Box::new(std::iter::once(self.lens.get(source)))
    }

    fn length(&self, _source: &S) -> usize {
        1
    }
}

impl<L: Clone, S, A> Clone for LensAsTraversal<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: fmt::Debug, S, A> fmt::Debug for LensAsTraversal<L, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LensAsTraversal")
            .field("lens", &self.lens)
            .finish()
    }
}

/// Creates a named lens for a struct field.
///
/// The lens is a [`FunctionLens`] named after the field. The getter clones the
/// field, so the field type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Lens, Setter};
/// use lensing::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(x_lens.to_string(), "x");
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
///
/// let doubled = x_lens.modify(updated, |x| x * 2);
/// assert_eq!(doubled.x, 200);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            stringify!($field),
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            stringify!($field),
            |source: &$struct_type<$($generic),+>| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            stringify!($field),
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
