//! Iso optics for lossless, bidirectional conversions.
//!
//! An Iso (isomorphism) is a [`Getter`] that can also be run backwards without
//! losing information. It is the strongest optic: every Iso can be used as a
//! Lens ([`Iso::to_lens`]) or as a Prism ([`Iso::to_prism`]).
//!
//! # Laws
//!
//! Every Iso must satisfy two laws:
//!
//! 1. **`GetReverseGet` Law**: Converting forward then backward yields the original.
//!    ```text
//!    iso.reverse_get(iso.get(&source)) == source
//!    ```
//!
//! 2. **`ReverseGetGet` Law**: Converting backward then forward yields the original.
//!    ```text
//!    iso.get(&iso.reverse_get(value)) == value
//!    ```
//!
//! # Examples
//!
//! ```
//! use lensing::optics::{FunctionIso, Getter, Iso};
//!
//! let string_chars = FunctionIso::new(
//!     "chars",
//!     |text: &String| text.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//! );
//!
//! let chars = string_chars.get(&"hello".to_string());
//! assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
//! assert_eq!(string_chars.reverse_get(chars), "hello");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use super::setter::modify_through_lens;
use super::{Getter, Lens, Prism, Setter};

/// An Iso represents an isomorphism between two types.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
///
/// # Laws
///
/// 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(&source)) == source`
/// 2. **`ReverseGetGet` Law**: `iso.get(&iso.reverse_get(value)) == value`
pub trait Iso<S, A>: Getter<S, A> {
    /// Converts from the target type back to the source type.
    ///
    /// # Arguments
    ///
    /// * `value` - The target value (consumed)
    ///
    /// # Returns
    ///
    /// The equivalent source value
    fn reverse_get(&self, value: A) -> S;

    /// Modifies the source by converting, applying `function`, and converting back.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Iso, iso_swap};
    ///
    /// let swap = iso_swap::<i32, i32>();
    /// assert_eq!(swap.modify((1, 2), |(b, a)| (b * 10, a)), (1, 20));
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(&source)))
    }

    /// Runs this Iso backwards.
    fn reverse(self) -> ReversedIso<Self, S, A>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Composes this Iso with another Iso.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The target type of the other Iso
    /// - `I`: The type of the other Iso
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Views this Iso as a Lens.
    fn to_lens(self) -> IsoAsLens<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Views this Iso as a Prism whose preview always succeeds.
    fn to_prism(self) -> IsoAsPrism<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

/// An Iso implemented using a named pair of conversion functions.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The forward conversion type
/// - `Rg`: The backward conversion type
pub struct FunctionIso<S, A, G, Rg>
where
    G: Fn(&S) -> A,
    Rg: Fn(A) -> S,
{
    name: Cow<'static, str>,
    get_function: G,
    reverse_get_function: Rg,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(&S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new named `FunctionIso`.
    ///
    /// # Arguments
    ///
    /// * `name` - A diagnostic name, shown by `Display` and `Debug`
    /// * `get_function` - Converts the source to the target
    /// * `reverse_get_function` - Converts the target back to the source
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        get_function: G,
        reverse_get_function: Rg,
    ) -> Self {
        Self {
            name: name.into(),
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }

    /// Returns the diagnostic name of this Iso.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S, A, G, Rg> Getter<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(&S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.get_function)(source)
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(&S) -> A,
    Rg: Fn(A) -> S,
{
    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, Rg> Clone for FunctionIso<S, A, G, Rg>
where
    G: Fn(&S) -> A + Clone,
    Rg: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> fmt::Display for FunctionIso<S, A, G, Rg>
where
    G: Fn(&S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl<S, A, G, Rg> fmt::Debug for FunctionIso<S, A, G, Rg>
where
    G: Fn(&S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionIso")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An Iso that runs another Iso backwards.
///
/// Reading through a reversed Iso hands the inner `reverse_get` an owned
/// value, so the inner target type must be `Clone`.
pub struct ReversedIso<I, S, A> {
    inner: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> ReversedIso<I, S, A> {
    /// Creates a new `ReversedIso`.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Getter<A, S> for ReversedIso<I, S, A>
where
    I: Iso<S, A>,
    A: Clone,
{
    fn get(&self, source: &A) -> S {
        self.inner.reverse_get(source.clone())
    }
}

impl<I, S, A> Iso<A, S> for ReversedIso<I, S, A>
where
    I: Iso<S, A>,
    A: Clone,
{
    fn reverse_get(&self, value: S) -> A {
        self.inner.get(&value)
    }
}

impl<I: Clone, S, A> Clone for ReversedIso<I, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<I: fmt::Display, S, A> fmt::Display for ReversedIso<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "reverse({})", self.inner)
    }
}

impl<I: fmt::Debug, S, A> fmt::Debug for ReversedIso<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReversedIso")
            .field("inner", &self.inner)
            .finish()
    }
}

/// An Iso composed of two Isos.
///
/// # Type Parameters
///
/// - `I1`: The type of the first Iso
/// - `I2`: The type of the second Iso
/// - `A`: The intermediate type (target of I1, source of I2)
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new composed Iso.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Getter<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I1: fmt::Display, I2: fmt::Display, A> fmt::Display for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.first, self.second)
    }
}

impl<I1: fmt::Debug, I2: fmt::Debug, A> fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An Iso used as a Lens.
///
/// `set` ignores the old source: the new focus alone determines the result.
pub struct IsoAsLens<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsLens<I, S, A> {
    /// Creates a new `IsoAsLens` from an Iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Getter<S, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source)
    }
}

impl<I, S, A> Setter<S, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        modify_through_lens(self, source, function)
    }
}

impl<I, S, A> Lens<S, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
{
    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

impl<I: Clone, S, A> Clone for IsoAsLens<I, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone())
    }
}

impl<I: fmt::Display, S, A> fmt::Display for IsoAsLens<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.iso, formatter)
    }
}

impl<I: fmt::Debug, S, A> fmt::Debug for IsoAsLens<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IsoAsLens")
            .field("iso", &self.iso)
            .finish()
    }
}

/// An Iso used as a Prism. `preview` always succeeds.
pub struct IsoAsPrism<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsPrism<I, S, A> {
    /// Creates a new `IsoAsPrism` from an Iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Prism<S, A> for IsoAsPrism<I, S, A>
where
    I: Iso<S, A>,
{
    fn preview(&self, source: &S) -> Option<A> {
        Some(self.iso.get(source))
    }

    fn review(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

impl<I: Clone, S, A> Clone for IsoAsPrism<I, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone())
    }
}

impl<I: fmt::Display, S, A> fmt::Display for IsoAsPrism<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.iso, formatter)
    }
}

impl<I: fmt::Debug, S, A> fmt::Debug for IsoAsPrism<I, S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IsoAsPrism")
            .field("iso", &self.iso)
            .finish()
    }
}
