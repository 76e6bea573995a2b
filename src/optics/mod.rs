//! Optics for immutable data manipulation.
//!
//! Optics are typed, composable accessors. Each one knows how to read some
//! part of a value and how to build a new value with that part replaced, so
//! deeply nested updates never mutate anything in place.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Getter  Setter
//!    \     /  \
//!     Lens   Traversal      Lens + Traversal = Traversal
//!      |                    Lens + Prism     = Optional
//!     Iso    Prism          Lens + Optional  = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Getter`] / [`Setter`]: the read and write capabilities on their own
//! - [`Lens`]: exactly one focus (get/set access)
//! - [`Iso`]: a lossless two-way conversion
//! - [`Prism`]: one case of a sum type (preview/review access)
//! - [`Optional`]: a focus that may be absent
//! - [`Traversal`]: zero or more foci, in order
//! - [`Lenser`]: a value paired with a lens, for fluent chained access
//!
//! Every concrete optic carries a diagnostic name. `Display` prints it, and
//! composed optics print `outer.inner`.
//!
//! # Laws
//!
//! Every lens in this module, and every composition of lawful lenses,
//! satisfies:
//!
//! ```text
//! GetPut: lens.set(s, lens.get(&s))          == s
//! PutGet: lens.get(&lens.set(s, v))          == v
//! PutPut: lens.set(lens.set(s, v1), v2)      == lens.set(s, v2)
//! ```
//!
//! Traversals keep the order and number of their foci:
//!
//! ```text
//! traversal.modify(s, |x| x)                 == s
//! traversal.length(&traversal.modify(s, f))  == traversal.length(&s)
//! ```
//!
//! # Example with Lens
//!
//! ```
//! use lensing::optics::{Getter, Lens};
//! use lensing::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! assert_eq!(person_street.to_string(), "address.street");
//! ```
//!
//! # Example with Traversal
//!
//! ```
//! use lensing::optics::{
//!     LensComposeWithTraversal, Setter, Traversal, TraversalComposeWithLens, VecTraversal,
//! };
//! use lensing::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Item { price: u32 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Cart { items: Vec<Item> }
//!
//! let prices = lens!(Cart, items)
//!     .compose_traversal(VecTraversal::new())
//!     .compose_lens(lens!(Item, price));
//!
//! let cart = Cart { items: vec![Item { price: 3 }, Item { price: 5 }] };
//! assert_eq!(prices.fold(&cart, 0, |total, price| total + price), 8);
//!
//! let discounted = prices.modify(cart, |price| price - 1);
//! assert_eq!(prices.get_all(&discounted).collect::<Vec<_>>(), vec![2, 4]);
//! ```
//!
//! # Example with Lenser
//!
//! ```
//! use lensing::optics::Lenser;
//!
//! let grid = vec![(0, ('a', 'b')), (1, ('c', 'd'))];
//! let updated = Lenser::new(grid).index(0).second().first().set('x');
//!
//! assert_eq!(updated[0], (0, ('x', 'b')));
//! ```

mod getter;
mod iso;
mod lens;
mod lenser;
pub mod optics_compose;
mod optional;
mod prism;
mod setter;
mod standard_optics;
mod traversal;

// Capabilities
pub use getter::Getter;
pub use setter::Setter;
pub use setter::modify_through_lens;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::IdentityLens;
pub use lens::Lens;
pub use lens::LensAsTraversal;
pub use lens::join;

// Re-export all iso-related types and traits
pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::IsoAsLens;
pub use iso::IsoAsPrism;
pub use iso::ReversedIso;

// Re-export all prism-related types and traits
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;

// Re-export all optional-related types and traits
pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::Optional;

// Re-export all traversal-related types and traits
pub use traversal::ComposedTraversal;
pub use traversal::FunctionTraversal;
pub use traversal::OptionTraversal;
pub use traversal::Traversal;
pub use traversal::VecTraversal;

// Re-export cross-kind compositions
pub use optics_compose::LensComposeWithOptional;
pub use optics_compose::LensComposeWithPrism;
pub use optics_compose::LensComposeWithTraversal;
pub use optics_compose::LensOptionalComposition;
pub use optics_compose::LensPrismComposition;
pub use optics_compose::LensTraversalComposition;
pub use optics_compose::TraversalComposeWithLens;
pub use optics_compose::TraversalLensComposition;

pub use lenser::Lenser;

// Re-export standard optics
pub use standard_optics::PairFirst;
pub use standard_optics::PairSecond;
pub use standard_optics::TripleFirst;
pub use standard_optics::TripleSecond;
pub use standard_optics::TripleThird;
pub use standard_optics::array_index;
pub use standard_optics::identity_lens;
pub use standard_optics::iso_identity;
pub use standard_optics::iso_string_chars;
pub use standard_optics::iso_swap;
pub use standard_optics::pair_first;
pub use standard_optics::pair_second;
pub use standard_optics::string_index;
pub use standard_optics::string_ix;
pub use standard_optics::triple_first;
pub use standard_optics::triple_second;
pub use standard_optics::triple_third;
pub use standard_optics::vec_index;
pub use standard_optics::vec_ix;
