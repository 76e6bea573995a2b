//! Composition across optic kinds.
//!
//! Composing two optics of the same kind lives on the kind's own trait
//! (`Lens::compose`, `Traversal::compose`, ...). This module covers the mixed
//! cases through extension traits that are implemented for every optic of the
//! left-hand kind:
//!
//! ```text
//! Lens + Traversal  -> Traversal   (compose_traversal)
//! Traversal + Lens  -> Traversal   (compose_lens)
//! Lens + Prism      -> Optional    (compose_prism)
//! Lens + Optional   -> Optional    (compose_optional)
//! ```
//!
//! # Example
//!
//! ```
//! use lensing::optics::{LensComposeWithTraversal, Setter, Traversal, VecTraversal, pair_second};
//!
//! let scores = pair_second::<&str, Vec<u32>>().compose_traversal(VecTraversal::new());
//! let entry = ("ada", vec![7, 9]);
//!
//! assert_eq!(scores.get_all(&entry).collect::<Vec<_>>(), vec![7, 9]);
//! assert_eq!(scores.modify(entry, |score| score + 1), ("ada", vec![8, 10]));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{Lens, Optional, Prism, Setter, Traversal};

// =============================================================================
// Lens + Traversal -> Traversal
// =============================================================================

/// A traversal reached through a lens.
///
/// The lens picks out one part of the source, and the traversal walks the foci
/// inside that part. Updating rebuilds the part through the traversal and
/// writes it back through the lens.
///
/// # Type Parameters
///
/// - `L`: The lens type
/// - `T`: The traversal type
/// - `A`: The intermediate type (target of L, source of T)
pub struct LensTraversalComposition<L, T, A> {
    lens: L,
    traversal: T,
    _marker: PhantomData<A>,
}

impl<L, T, A> LensTraversalComposition<L, T, A> {
    /// Creates a new `LensTraversalComposition`.
    #[must_use]
    pub const fn new(lens: L, traversal: T) -> Self {
        Self {
            lens,
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, T> Setter<S, B> for LensTraversalComposition<L, T, A>
where
    L: Lens<S, A>,
    T: Setter<A, B>,
{
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        let intermediate = self.lens.get(&source);
        let updated = self.traversal.modify(intermediate, function);
        self.lens.set(source, updated)
    }
}

impl<S, A, B, L, T> Traversal<S, B> for LensTraversalComposition<L, T, A>
where
    L: Lens<S, A>,
    T: Traversal<A, B>,
{
    fn get_all<'a>(&'a self, source: &'a S) -> Box<dyn Iterator<Item = B> + 'a>
    where
        B: 'a,
    {
        // The intermediate is a fresh value, so its foci cannot borrow from it
        // past this call.
        let intermediate = self.lens.get(source);
        let foci: Vec<B> = self.traversal.get_all(&intermediate).collect();
        Box::new(foci.into_iter())
    }

    fn length(&self, source: &S) -> usize {
        self.traversal.length(&self.lens.get(source))
    }
}

impl<L: Clone, T: Clone, A> Clone for LensTraversalComposition<L, T, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.traversal.clone())
    }
}

impl<L: fmt::Display, T: fmt::Display, A> fmt::Display for LensTraversalComposition<L, T, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.lens, self.traversal)
    }
}

impl<L: fmt::Debug, T: fmt::Debug, A> fmt::Debug for LensTraversalComposition<L, T, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LensTraversalComposition")
            .field("lens", &self.lens)
            .field("traversal", &self.traversal)
            .finish()
    }
}

/// Extension trait for composing a Lens with a Traversal.
pub trait LensComposeWithTraversal<S, A>: Lens<S, A> {
    /// Composes this lens with a traversal over its focus.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{LensComposeWithTraversal, Traversal, VecTraversal};
    /// use lensing::lens;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Basket {
    ///     items: Vec<String>,
    /// }
    ///
    /// let items = lens!(Basket, items).compose_traversal(VecTraversal::new());
    /// let basket = Basket { items: vec!["pear".into(), "fig".into()] };
    ///
    /// assert_eq!(items.length(&basket), 2);
    /// assert_eq!(items.head_option(&basket), Some("pear".to_string()));
    /// assert_eq!(items.to_string(), "items.each");
    /// ```
    fn compose_traversal<B, T>(self, traversal: T) -> LensTraversalComposition<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        LensTraversalComposition::new(self, traversal)
    }
}

impl<S, A, L> LensComposeWithTraversal<S, A> for L where L: Lens<S, A> {}

// =============================================================================
// Traversal + Lens -> Traversal
// =============================================================================

/// A lens applied to every focus of a traversal.
///
/// Each focus of the traversal is read or updated through the lens, so the
/// result has exactly as many foci as the traversal, in the same order.
///
/// # Type Parameters
///
/// - `T`: The traversal type
/// - `L`: The lens type
/// - `A`: The intermediate type (target of T, source of L)
pub struct TraversalLensComposition<T, L, A> {
    traversal: T,
    lens: L,
    _marker: PhantomData<A>,
}

impl<T, L, A> TraversalLensComposition<T, L, A> {
    /// Creates a new `TraversalLensComposition`.
    #[must_use]
    pub const fn new(traversal: T, lens: L) -> Self {
        Self {
            traversal,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T, L> Setter<S, B> for TraversalLensComposition<T, L, A>
where
    T: Setter<S, A>,
    L: Lens<A, B>,
{
    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.traversal.modify(source, |element| {
            let focus = self.lens.get(&element);
            self.lens.set(element, function(focus))
        })
    }
}

impl<S, A, B, T, L> Traversal<S, B> for TraversalLensComposition<T, L, A>
where
    T: Traversal<S, A>,
    L: Lens<A, B>,
{
    fn get_all<'a>(&'a self, source: &'a S) -> Box<dyn Iterator<Item = B> + 'a>
    where
        B: 'a,
    {
        Box::new(
            self.traversal
                .get_all(source)
                .map(move |element| self.lens.get(&element)),
        )
    }

    fn length(&self, source: &S) -> usize {
        self.traversal.length(source)
    }
}

impl<T: Clone, L: Clone, A> Clone for TraversalLensComposition<T, L, A> {
    fn clone(&self) -> Self {
        Self::new(self.traversal.clone(), self.lens.clone())
    }
}

impl<T: fmt::Display, L: fmt::Display, A> fmt::Display for TraversalLensComposition<T, L, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.traversal, self.lens)
    }
}

impl<T: fmt::Debug, L: fmt::Debug, A> fmt::Debug for TraversalLensComposition<T, L, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TraversalLensComposition")
            .field("traversal", &self.traversal)
            .field("lens", &self.lens)
            .finish()
    }
}

/// Extension trait for composing a Traversal with a Lens.
pub trait TraversalComposeWithLens<S, A>: Traversal<S, A> {
    /// Composes this traversal with a lens applied to each focus.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{Setter, Traversal, TraversalComposeWithLens, VecTraversal, pair_first};
    ///
    /// let keys = VecTraversal::<(char, u8)>::new().compose_lens(pair_first());
    /// let table = vec![('a', 1), ('b', 2)];
    ///
    /// assert_eq!(keys.get_all(&table).collect::<String>(), "ab");
    /// assert_eq!(
    ///     keys.modify(table, |key| key.to_ascii_uppercase()),
    ///     vec![('A', 1), ('B', 2)]
    /// );
    /// ```
    fn compose_lens<B, L>(self, lens: L) -> TraversalLensComposition<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        TraversalLensComposition::new(self, lens)
    }
}

impl<S, A, T> TraversalComposeWithLens<S, A> for T where T: Traversal<S, A> {}

// =============================================================================
// Lens + Prism -> Optional
// =============================================================================

/// A prism reached through a lens.
///
/// The focus is present when the part picked out by the lens is the case the
/// prism matches. Setting writes the new case back only in that situation and
/// otherwise leaves the source unchanged.
///
/// # Type Parameters
///
/// - `L`: The lens type
/// - `P`: The prism type
/// - `A`: The intermediate type (target of L, source of P)
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Creates a new `LensPrismComposition`.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.preview(&self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        if self.is_present(&source) {
            self.lens.set(source, self.prism.review(value))
        } else {
            source
        }
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.prism.clone())
    }
}

impl<L: fmt::Display, P: fmt::Display, A> fmt::Display for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.lens, self.prism)
    }
}

impl<L: fmt::Debug, P: fmt::Debug, A> fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// Extension trait for composing a Lens with a Prism.
pub trait LensComposeWithPrism<S, A>: Lens<S, A> {
    /// Composes this lens with a prism over its focus.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{LensComposeWithPrism, Optional};
    /// use lensing::{lens, prism};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// enum Payment {
    ///     Card(String),
    ///     Cash,
    /// }
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Order {
    ///     payment: Payment,
    /// }
    ///
    /// let card = lens!(Order, payment).compose_prism(prism!(Payment, Card));
    ///
    /// let by_card = Order { payment: Payment::Card("4242".into()) };
    /// assert_eq!(card.get_option(&by_card), Some("4242".to_string()));
    ///
    /// let by_cash = Order { payment: Payment::Cash };
    /// assert_eq!(card.set(by_cash.clone(), "0000".into()), by_cash);
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, prism)
    }
}

impl<S, A, L> LensComposeWithPrism<S, A> for L where L: Lens<S, A> {}

// =============================================================================
// Lens + Optional -> Optional
// =============================================================================

/// An optional reached through a lens.
///
/// # Type Parameters
///
/// - `L`: The lens type
/// - `O`: The optional type
/// - `A`: The intermediate type (target of L, source of O)
pub struct LensOptionalComposition<L, O, A> {
    lens: L,
    optional: O,
    _marker: PhantomData<A>,
}

impl<L, O, A> LensOptionalComposition<L, O, A> {
    /// Creates a new `LensOptionalComposition`.
    #[must_use]
    pub const fn new(lens: L, optional: O) -> Self {
        Self {
            lens,
            optional,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, O> Optional<S, B> for LensOptionalComposition<L, O, A>
where
    L: Lens<S, A>,
    O: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional.get_option(&self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.lens.get(&source);
        let updated = self.optional.set(intermediate, value);
        self.lens.set(source, updated)
    }
}

impl<L: Clone, O: Clone, A> Clone for LensOptionalComposition<L, O, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.optional.clone())
    }
}

impl<L: fmt::Display, O: fmt::Display, A> fmt::Display for LensOptionalComposition<L, O, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}", self.lens, self.optional)
    }
}

impl<L: fmt::Debug, O: fmt::Debug, A> fmt::Debug for LensOptionalComposition<L, O, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LensOptionalComposition")
            .field("lens", &self.lens)
            .field("optional", &self.optional)
            .finish()
    }
}

/// Extension trait for composing a Lens with an Optional.
pub trait LensComposeWithOptional<S, A>: Lens<S, A> {
    /// Composes this lens with an optional over its focus.
    ///
    /// # Example
    ///
    /// ```
    /// use lensing::optics::{LensComposeWithOptional, Optional, vec_ix};
    /// use lensing::lens;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Container {
    ///     items: Vec<i32>,
    /// }
    ///
    /// let second_item = lens!(Container, items).compose_optional(vec_ix(1));
    ///
    /// let container = Container { items: vec![1, 2, 3] };
    /// assert_eq!(second_item.get_option(&container), Some(2));
    ///
    /// let short = Container { items: vec![1] };
    /// assert_eq!(second_item.set(short.clone(), 9), short);
    /// ```
    fn compose_optional<B, O>(self, optional: O) -> LensOptionalComposition<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        LensOptionalComposition::new(self, optional)
    }
}

impl<S, A, L> LensComposeWithOptional<S, A> for L where L: Lens<S, A> {}
