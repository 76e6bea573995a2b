//! Optional optics for focusing on a part that may be absent.
//!
//! An Optional sits between a Lens and a Prism: it reads a focus that may be
//! missing, and writes it back only when it is there. Composing a Lens with a
//! Prism produces one, and so do the partial index accessors such as
//! [`vec_ix`](super::vec_ix).
//!
//! # Laws
//!
//! Every Optional must satisfy two laws when the focus is present, and leave
//! the source untouched when it is not:
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) then
//!        optional.set(source, value) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.is_present(&source) then
//!        optional.get_option(&optional.set(source, value)) == Some(value)
//!    ```
//!
//! 3. **Absent Set Law**: Setting an absent focus is the identity.
//!    ```text
//!    if !optional.is_present(&source) then
//!        optional.set(source, value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use lensing::optics::{Optional, vec_ix};
//!
//! let third = vec_ix::<i32>(2);
//!
//! assert_eq!(third.get_option(&vec![1, 2, 3]), Some(3));
//! assert_eq!(third.get_option(&vec![1]), None);
//! assert_eq!(third.set(vec![1], 9), vec![1]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// An Optional focuses on a part that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused part, if present)
pub trait Optional<S, A> {
    /// Returns the focus if it is present.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// `Some(focus)` if present, `None` otherwise
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focus if it is present.
    ///
    /// When the focus is absent the source is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focus
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focus if present.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the focus is present, `None` otherwise
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get_option(&source)?;
        Some(self.set(source, function(value)))
    }

    /// Modifies the focus if present, otherwise returns the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Optional, string_ix};
    ///
    /// let first = string_ix(0);
    /// let upper = |c: char| c.to_ascii_uppercase();
    ///
    /// assert_eq!(first.modify("abc".to_string(), upper), "Abc");
    /// assert_eq!(first.modify(String::new(), upper), "");
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Returns `true` if the focus is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with another optional to focus on a nested part.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The target type of the other optional
    /// - `O`: The type of the other optional
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }
}

/// An optional implemented using a named pair of functions.
///
/// The setter is only called when `get_option` finds a focus, so it never has
/// to handle the absent case itself.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The `get_option` function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use lensing::optics::{FunctionOptional, Optional};
///
/// let head = FunctionOptional::new(
///     "head",
///     |list: &Vec<i32>| list.first().copied(),
///     |mut list: Vec<i32>, value: i32| {
///         list[0] = value;
///         list
///     },
/// );
///
/// assert_eq!(head.get_option(&vec![5, 6]), Some(5));
/// assert_eq!(head.set(vec![5, 6], 1), vec![1, 6]);
/// assert_eq!(head.set(Vec::new(), 1), Vec::<i32>::new());
/// ```
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    name: Cow<'static, str>,
    get_option_function: G,
    set_function: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new named `FunctionOptional`.
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        get_option_function: G,
        set_function: St,
    ) -> Self {
        Self {
            name: name.into(),
            get_option_function,
            set_function,
            _marker: PhantomData,
        }
    }

    /// Returns the diagnostic name of this optional.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.get_option_function)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.is_present(&source) {
            (self.set_function)(source, value)
        } else {
            source
        }
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get_option_function: self.get_option_function.clone(),
            set_function: self.set_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> fmt::Display for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl<S, A, G, St> fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An optional composed of two optionals.
///
/// The focus is present only when both the intermediate part and the inner
/// focus are present.
///
/// # Type Parameters
///
/// - `O1`: The type of the outer optional
/// - `O2`: The type of the inner optional
/// - `A`: The intermediate type (target of O1, source of O2)
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new composed optional.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        self.first
            .modify(source, |intermediate| self.second.set(intermediate, value))
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<O1: fmt::Display, O2: fmt::Display, A> fmt::Display for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.first, self.second)
    }
}

impl<O1: fmt::Debug, O2: fmt::Debug, A> fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
