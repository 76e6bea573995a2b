//! Derive macros for lensing optics.
//!
//! This crate generates named optics for user types:
//!
//! - [`Lenses`]: one lens per named struct field
//! - [`Prisms`]: one prism per enum variant
//!
//! The generated optics are `lensing::optics::FunctionLens` and
//! `lensing::optics::FunctionPrism` values named after the field or variant,
//! so composed optics print readable paths such as `address.street`.
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use lensing::Lenses;
//! use lensing::optics::{Getter, Lens};
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use lensing::Prisms;
//! use lensing::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! assert_eq!(Shape::rectangle_prism().preview(&Shape::Rectangle(1.0, 2.0)), Some((1.0, 2.0)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod bounds;
mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro generating a lens per struct field.
///
/// For each field `foo: T` the macro adds an associated function
/// `foo_lens()` returning a lens named `"foo"`:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone + Display + Debug
///     where
///         T: Clone;
/// }
/// ```
///
/// The getter clones the field, so every field type must be `Clone`. The
/// `T: Clone` bound is only written for field types that mention the
/// struct's generic parameters; a concrete field type that is not `Clone`
/// is a compile error at the derive site.
///
/// # Requirements
///
/// - The struct must have named fields (no tuple or unit structs)
///
/// # Example
///
/// ```rust,ignore
/// use lensing::Lenses;
/// use lensing::optics::{Getter, Lens};
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Alice".to_string(), age: 30 };
///
/// let name_lens = Person::name_lens();
/// assert_eq!(name_lens.get(&person), "Alice");
/// assert_eq!(name_lens.to_string(), "name");
///
/// let updated = name_lens.set(person, "Bob".to_string());
/// assert_eq!(updated.name, "Bob");
/// ```
///
/// Generic structs work the same way, with the lens functions called on the
/// concrete type: `Container::<i32>::value_lens()`.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro generating a prism per enum variant.
///
/// For each variant `FooBar` the macro adds an associated function
/// `foo_bar_prism()` returning a prism named `"FooBar"`. The focus type
/// depends on the variant shape:
///
/// - **Unit variants** (`None`): `()`
/// - **Single-field variants** (`Some(T)`, `Wrap { inner: T }`): `T`
/// - **Multi-field tuple variants** (`Point(i32, i32)`): `(i32, i32)`
/// - **Multi-field struct variants** (`Click { x: i32, y: i32 }`): a tuple of
///   the fields in declaration order
///
/// `preview` clones the payload, so every payload type must be `Clone`.
/// Payload types that mention the enum's generic parameters get a `Clone`
/// bound on their own prism function, so `Slot<T>::empty_prism()` stays
/// available for a non-`Clone` `T`. A concrete payload type that is not
/// `Clone` is a compile error at the derive site.
///
/// # Example
///
/// ```rust,ignore
/// use lensing::Prisms;
/// use lensing::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Quit,
/// }
///
/// assert_eq!(Event::key_press_prism().preview(&Event::KeyPress('q')), Some('q'));
/// assert_eq!(Event::click_prism().review((1, 2)), Event::Click { x: 1, y: 2 });
/// assert_eq!(Event::quit_prism().preview(&Event::Quit), Some(()));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
