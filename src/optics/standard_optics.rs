//! Ready-made optics for tuples, vectors, arrays and strings.
//!
//! The tuple lenses have nameable types ([`PairFirst`], [`TripleThird`], ...)
//! built from plain function pointers, so they can be stored in fields and
//! statics. The index optics capture their index and are returned as `impl`
//! types.
//!
//! Index lenses are total: an out-of-range index is a programming error and
//! panics, like slice indexing. Use the `_ix` optionals when the index may be
//! missing.

use std::fmt;
use std::ops::Range;

use super::{FunctionIso, FunctionLens, FunctionOptional, IdentityLens, Iso, Lens, Optional};

/// Returns the lens that focuses on the whole value.
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Lens, identity_lens};
///
/// let id = identity_lens::<u8>();
/// assert_eq!(id.get(&4), 4);
/// assert_eq!(id.set(4, 5), 5);
/// ```
#[must_use]
pub const fn identity_lens<S: Clone>() -> IdentityLens<S> {
    IdentityLens::new()
}

macro_rules! tuple_component_lens {
    (
        $(#[$meta:meta])*
        $shape:ident $component:ident: ($($param:ident),+) . $index:tt -> $focus:ident
    ) => {
        paste::paste! {
            #[doc = concat!(
                "The type of the lens returned by [`",
                stringify!($shape),
                "_",
                stringify!($component),
                "`]."
            )]
            pub type [<$shape:camel $component:camel>]<$($param),+> = FunctionLens<
                ($($param,)+),
                $focus,
                fn(&($($param,)+)) -> $focus,
                fn(($($param,)+), $focus) -> ($($param,)+),
            >;

            $(#[$meta])*
            #[must_use]
            pub fn [<$shape _ $component>]<$($param: Clone),+>() -> [<$shape:camel $component:camel>]<$($param),+> {
                let getter: fn(&($($param,)+)) -> $focus = |source| source.$index.clone();
                let setter: fn(($($param,)+), $focus) -> ($($param,)+) = |mut source, value| {
                    source.$index = value;
                    source
                };
                FunctionLens::new(stringify!($component), getter, setter)
            }
        }
    };
}

tuple_component_lens! {
    /// Returns the lens on the first component of a pair.
    ///
    /// ```
    /// use lensing::optics::{Getter, Lens, pair_first};
    ///
    /// let first = pair_first::<i32, char>();
    /// assert_eq!(first.get(&(1, 'b')), 1);
    /// assert_eq!(first.set((1, 'b'), 7), (7, 'b'));
    /// assert_eq!(first.to_string(), "first");
    /// ```
    pair first: (A, B) . 0 -> A
}

tuple_component_lens! {
    /// Returns the lens on the second component of a pair.
    pair second: (A, B) . 1 -> B
}

tuple_component_lens! {
    /// Returns the lens on the first component of a triple.
    triple first: (A, B, C) . 0 -> A
}

tuple_component_lens! {
    /// Returns the lens on the second component of a triple.
    triple second: (A, B, C) . 1 -> B
}

tuple_component_lens! {
    /// Returns the lens on the third component of a triple.
    ///
    /// ```
    /// use lensing::optics::{Lens, triple_third};
    ///
    /// assert_eq!(triple_third().set((1, 2, 3), 30), (1, 2, 30));
    /// ```
    triple third: (A, B, C) . 2 -> C
}

fn index_name(index: usize) -> String {
    format!("[{index}]")
}

/// Returns the lens on the element at `index` of a vector.
///
/// The setter replaces only that element of the vector it is given, so any
/// other copy of the vector is left as it was.
///
/// # Panics
///
/// `get` and `set` panic if `index` is out of bounds.
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Lens, vec_index};
///
/// let second = vec_index::<&str>(1);
/// let words = vec!["a", "b", "c"];
///
/// assert_eq!(second.get(&words), "b");
/// assert_eq!(second.set(words.clone(), "x"), vec!["a", "x", "c"]);
/// assert_eq!(words, vec!["a", "b", "c"]);
/// assert_eq!(second.to_string(), "[1]");
/// ```
#[must_use]
pub fn vec_index<T: Clone>(index: usize) -> impl Lens<Vec<T>, T> + Clone + fmt::Display + fmt::Debug {
    FunctionLens::new(
        index_name(index),
        move |list: &Vec<T>| list[index].clone(),
        move |mut list: Vec<T>, value: T| {
            list[index] = value;
            list
        },
    )
}

/// Returns the lens on the element at `index` of a fixed-size array.
///
/// # Panics
///
/// `get` and `set` panic if `index >= N`.
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Lens, array_index};
///
/// let middle = array_index::<char, 3>(1);
/// let letters = ['1', '2', '3'];
///
/// assert_eq!(middle.get(&letters), '2');
/// assert_eq!(middle.set(letters, 'x'), ['1', 'x', '3']);
/// assert_eq!(letters, ['1', '2', '3']);
/// ```
#[must_use]
pub fn array_index<T: Clone, const N: usize>(
    index: usize,
) -> impl Lens<[T; N], T> + Clone + fmt::Display + fmt::Debug {
    FunctionLens::new(
        index_name(index),
        move |array: &[T; N]| array[index].clone(),
        move |mut array: [T; N], value: T| {
            array[index] = value;
            array
        },
    )
}

/// Returns the byte range of the `index`-th `char` of `text`.
fn char_span(text: &str, index: usize) -> Option<Range<usize>> {
    text.char_indices()
        .nth(index)
        .map(|(start, current)| start..start + current.len_utf8())
}

fn replace_char(mut text: String, span: Range<usize>, value: char) -> String {
    text.replace_range(span, value.encode_utf8(&mut [0; 4]));
    text
}

fn char_out_of_range(text: &str, index: usize) -> ! {
    panic!(
        "char index {index} out of range for string of {} chars",
        text.chars().count()
    )
}

/// Returns the lens on the `char` at position `index` of a string.
///
/// Positions count `char`s, not bytes, so multi-byte characters are replaced
/// whole.
///
/// # Panics
///
/// `get` and `set` panic if the string has `index` or fewer chars.
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Lens, string_index};
///
/// let third = string_index(2);
///
/// assert_eq!(third.get(&"abc".to_string()), 'c');
/// assert_eq!(third.set("abc".to_string(), 'z'), "abz");
/// assert_eq!(third.set("añb".to_string(), 'ß'), "añß");
/// ```
#[must_use]
pub fn string_index(index: usize) -> impl Lens<String, char> + Clone + fmt::Display + fmt::Debug {
    FunctionLens::new(
        index_name(index),
        move |text: &String| {
            text.chars()
                .nth(index)
                .unwrap_or_else(|| char_out_of_range(text, index))
        },
        move |text: String, value: char| match char_span(&text, index) {
            Some(span) => replace_char(text, span, value),
            None => char_out_of_range(&text, index),
        },
    )
}

/// Returns the optional on the element at `index` of a vector.
///
/// Out of bounds, `get_option` is `None` and `set` returns the vector as is.
///
/// # Example
///
/// ```
/// use lensing::optics::{Optional, vec_ix};
///
/// let first = vec_ix::<i32>(0);
///
/// assert_eq!(first.get_option(&vec![4, 5]), Some(4));
/// assert_eq!(first.set(vec![4, 5], 0), vec![0, 5]);
/// assert!(!first.is_present(&Vec::new()));
/// ```
#[must_use]
pub fn vec_ix<T: Clone>(index: usize) -> impl Optional<Vec<T>, T> + Clone + fmt::Display + fmt::Debug {
    FunctionOptional::new(
        index_name(index),
        move |list: &Vec<T>| list.get(index).cloned(),
        move |mut list: Vec<T>, value: T| {
            if let Some(slot) = list.get_mut(index) {
                *slot = value;
            }
            list
        },
    )
}

/// Returns the optional on the `char` at position `index` of a string.
///
/// # Example
///
/// ```
/// use lensing::optics::{Optional, string_ix};
///
/// let second = string_ix(1);
///
/// assert_eq!(second.get_option(&"ok".to_string()), Some('k'));
/// assert_eq!(second.get_option(&"o".to_string()), None);
/// assert_eq!(second.set("o".to_string(), 'x'), "o");
/// ```
#[must_use]
pub fn string_ix(index: usize) -> impl Optional<String, char> + Clone + fmt::Display + fmt::Debug {
    FunctionOptional::new(
        index_name(index),
        move |text: &String| text.chars().nth(index),
        move |text: String, value: char| match char_span(&text, index) {
            Some(span) => replace_char(text, span, value),
            None => text,
        },
    )
}

/// Returns the iso from a value to itself.
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Iso, iso_identity};
///
/// let identity = iso_identity::<i32>();
///
/// assert_eq!(identity.get(&42), 42);
/// assert_eq!(identity.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T: Clone>() -> impl Iso<T, T> + Clone + fmt::Display + fmt::Debug {
    FunctionIso::new("identity", |value: &T| value.clone(), |value: T| value)
}

/// Returns the iso that swaps the components of a pair.
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Iso, iso_swap};
///
/// let swap = iso_swap::<i32, String>();
///
/// let pair = (42, "hello".to_string());
/// let swapped = swap.get(&pair);
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap.reverse_get(swapped), pair);
/// ```
#[must_use]
pub fn iso_swap<A: Clone, B: Clone>() -> impl Iso<(A, B), (B, A)> + Clone + fmt::Display + fmt::Debug {
    FunctionIso::new(
        "swap",
        |(a, b): &(A, B)| (b.clone(), a.clone()),
        |(b, a): (B, A)| (a, b),
    )
}

/// Returns the iso between a string and its characters.
///
/// # Example
///
/// ```
/// use lensing::optics::{Getter, Iso, iso_string_chars};
///
/// let chars = iso_string_chars();
///
/// assert_eq!(chars.get(&"hi".to_string()), vec!['h', 'i']);
/// assert_eq!(chars.reverse_get(vec!['o', 'k']), "ok");
/// ```
#[must_use]
pub fn iso_string_chars() -> impl Iso<String, Vec<char>> + Clone + fmt::Display + fmt::Debug {
    FunctionIso::new(
        "chars",
        |text: &String| text.chars().collect(),
        |chars: Vec<char>| chars.into_iter().collect(),
    )
}

static_assertions::assert_impl_all!(PairFirst<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(TripleThird<u8, String, Vec<u8>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(IdentityLens<String>: Send, Sync, Copy);
