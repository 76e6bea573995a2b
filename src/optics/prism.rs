//! Prism optics for focusing on enum variants.
//!
//! A Prism models a "may contain" relationship: `preview` extracts the focus
//! when the source is the expected case and returns `None` otherwise, while
//! `review` always builds a source back from a focus. A missing focus is an
//! ordinary `None`, never an error.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **PreviewReview Law**: Reviewing then previewing yields the original value.
//!    ```text
//!    prism.preview(&prism.review(value)) == Some(value)
//!    ```
//!
//! 2. **ReviewPreview Law**: If preview succeeds, reviewing the result yields the original.
//!    ```text
//!    if let Some(value) = prism.preview(&source) then
//!        prism.review(value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use lensing::optics::Prism;
//! use lensing::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.preview(&Shape::Square(3.0)), None);
//! assert_eq!(circle_prism.review(10.0), Shape::Circle(10.0));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// A Prism focuses on a single case of a sum type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the value inside the case)
///
/// # Laws
///
/// 1. **PreviewReview Law**: `prism.preview(&prism.review(value)) == Some(value)`
/// 2. **ReviewPreview Law**: If `prism.preview(&source) == Some(value)`, then `prism.review(value) == source`
pub trait Prism<S, A> {
    /// Returns the focus if the source is the expected case.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value
    ///
    /// # Returns
    ///
    /// `Some(focus)` if the case matches, `None` otherwise
    fn preview(&self, source: &S) -> Option<A>;

    /// Builds a source of the expected case from a focus.
    ///
    /// # Arguments
    ///
    /// * `value` - The focus to wrap
    ///
    /// # Returns
    ///
    /// A source holding `value`
    fn review(&self, value: A) -> S;

    /// Modifies the focus if the source is the expected case.
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the case matches, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::Prism;
    /// use lensing::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape {
    ///     Circle(f64),
    ///     Square(f64),
    /// }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let doubled = circle_prism.modify_option(Shape::Circle(5.0), |r| r * 2.0);
    /// assert_eq!(doubled, Some(Shape::Circle(10.0)));
    ///
    /// assert_eq!(circle_prism.modify_option(Shape::Square(3.0), |r| r * 2.0), None);
    /// ```
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview(&source)
            .map(|value| self.review(function(value)))
    }

    /// Modifies the focus if the source is the expected case, or returns the
    /// source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::Prism;
    /// use lensing::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape {
    ///     Circle(f64),
    ///     Square(f64),
    /// }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    /// let square = Shape::Square(3.0);
    /// assert_eq!(circle_prism.modify_or_identity(square.clone(), |r| r * 2.0), square);
    /// ```
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }

    /// Composes this prism with another prism to focus on a nested case.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The target type of the other prism
    /// - `P`: The type of the other prism
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }
}

/// A prism implemented using a named preview and review function pair.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `Pr`: The preview function type
/// - `Re`: The review function type
///
/// # Example
///
/// ```
/// use lensing::optics::{FunctionPrism, Prism};
///
/// let positive = FunctionPrism::new(
///     "positive",
///     |value: &i32| (*value > 0).then_some(*value as u32),
///     |value: u32| value as i32,
/// );
///
/// assert_eq!(positive.preview(&7), Some(7));
/// assert_eq!(positive.preview(&-7), None);
/// ```
pub struct FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    name: Cow<'static, str>,
    preview_function: Pr,
    review_function: Re,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Pr, Re> FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    /// Creates a new named `FunctionPrism`.
    ///
    /// # Arguments
    ///
    /// * `name` - A diagnostic name, shown by `Display` and `Debug`
    /// * `preview_function` - Extracts the focus when the case matches
    /// * `review_function` - Builds the source from a focus
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        preview_function: Pr,
        review_function: Re,
    ) -> Self {
        Self {
            name: name.into(),
            preview_function,
            review_function,
            _marker: PhantomData,
        }
    }

    /// Returns the diagnostic name of this prism.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S, A, Pr, Re> Prism<S, A> for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }
}

impl<S, A, Pr, Re> Clone for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A> + Clone,
    Re: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re> fmt::Display for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl<S, A, Pr, Re> fmt::Debug for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `A`: The intermediate type (target of P1, source of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: fmt::Display, P2: fmt::Display, A> fmt::Display for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.first, self.second)
    }
}

impl<P1: fmt::Debug, P2: fmt::Debug, A> fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a named prism for a single-field tuple variant of an enum.
///
/// The prism is a [`FunctionPrism`] named after the variant. `preview` clones
/// the payload, so it must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// ```
///
/// # Example
///
/// ```
/// use lensing::optics::Prism;
/// use lensing::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = prism!(MyOption<i32>, Some);
///
/// assert_eq!(some_prism.preview(&MyOption::Some(42)), Some(42));
/// assert_eq!(some_prism.preview(&MyOption::None), None);
/// assert_eq!(some_prism.review(100), MyOption::Some(100));
/// assert_eq!(some_prism.to_string(), "Some");
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            stringify!($variant),
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            stringify!($variant),
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::<$($generic),+>::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {{
        // A path fragment cannot be extended with `::Variant`, so go through an alias.
        type PrismSource = $enum_type;
        $crate::optics::FunctionPrism::new(
            stringify!($variant),
            |source: &PrismSource| match source {
                PrismSource::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| PrismSource::$variant(value),
        )
    }};
}
