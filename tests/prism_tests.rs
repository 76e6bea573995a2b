//! Unit tests for Prism optics.
//!
//! - [`FunctionPrism`]: named prism from preview and review functions
//! - [`ComposedPrism`]: a case nested inside another case
//! - [`prism!`] macro: prisms for enum variants
//! - Lens then prism compositions

use lensing::lens;
use lensing::optics::{
    ComposedPrism, FunctionPrism, LensComposeWithPrism, Optional, Prism, pair_second,
};
use lensing::prism;
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Shape {
    Circle(f64),
    Rectangle((f64, f64)),
    Point(()),
}

#[derive(Clone, PartialEq, Debug)]
enum Message<T> {
    Payload(T),
    Empty(()),
}

type Envelope = Message<Message<Json>>;

#[derive(Clone, PartialEq, Debug)]
enum Json {
    Number(i64),
    Text(String),
    List(Vec<Json>),
}

#[derive(Clone, PartialEq, Debug)]
struct Field {
    key: String,
    value: Json,
}

mod network {
    #[derive(Clone, PartialEq, Debug)]
    pub enum Address {
        V4([u8; 4]),
        Named(String),
    }
}

// =============================================================================
// FunctionPrism
// =============================================================================

#[test]
fn test_function_prism_on_primitive() {
    let even = FunctionPrism::new(
        "even",
        |value: &u32| (value % 2 == 0).then(|| value / 2),
        |half: u32| half * 2,
    );

    assert_eq!(even.preview(&8), Some(4));
    assert_eq!(even.preview(&7), None);
    assert_eq!(even.review(5), 10);
    assert_eq!(even.name(), "even");
    assert_eq!(format!("{even:?}"), "FunctionPrism { name: \"even\", .. }");
}

#[rstest]
#[case(Shape::Circle(1.5), Some(1.5))]
#[case(Shape::Rectangle((1.0, 2.0)), None)]
#[case(Shape::Point(()), None)]
fn test_circle_preview(#[case] shape: Shape, #[case] expected: Option<f64>) {
    assert_eq!(prism!(Shape, Circle).preview(&shape), expected);
}

#[test]
fn test_tuple_payload_prism() {
    let rectangle = prism!(Shape, Rectangle);

    assert_eq!(rectangle.preview(&Shape::Rectangle((3.0, 4.0))), Some((3.0, 4.0)));
    assert_eq!(rectangle.review((1.0, 1.0)), Shape::Rectangle((1.0, 1.0)));
}

#[test]
fn test_unit_payload_prism() {
    let point = prism!(Shape, Point);

    assert_eq!(point.preview(&Shape::Point(())), Some(()));
    assert_eq!(point.review(()), Shape::Point(()));
    assert_eq!(point.preview(&Shape::Circle(0.0)), None);
}

// =============================================================================
// Macro arms
// =============================================================================

#[test]
fn test_prism_macro_generic_enum() {
    let payload = prism!(Message<String>, Payload);

    assert_eq!(
        payload.preview(&Message::Payload("hi".to_string())),
        Some("hi".to_string())
    );
    assert_eq!(payload.preview(&Message::Empty(())), None);
    assert_eq!(payload.review("yo".to_string()), Message::Payload("yo".to_string()));
}

#[test]
fn test_prism_macro_path() {
    let named = prism!(network::Address, Named);

    assert_eq!(
        named.preview(&network::Address::Named("localhost".to_string())),
        Some("localhost".to_string())
    );
    assert_eq!(named.preview(&network::Address::V4([127, 0, 0, 1])), None);
    assert_eq!(named.to_string(), "Named");
}

// =============================================================================
// Modification
// =============================================================================

#[rstest]
#[case(Json::Number(2), Some(Json::Number(3)))]
#[case(Json::Text("2".to_string()), None)]
fn test_modify_option(#[case] source: Json, #[case] expected: Option<Json>) {
    assert_eq!(prism!(Json, Number).modify_option(source, |n| n + 1), expected);
}

#[test]
fn test_modify_or_identity_keeps_other_variants() {
    let text = prism!(Json, Text);
    let number = Json::Number(1);

    assert_eq!(text.modify_or_identity(number.clone(), |s| s + "!"), number);
    assert_eq!(
        text.modify_or_identity(Json::Text("a".to_string()), |s| s + "!"),
        Json::Text("a!".to_string())
    );
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_composed_prism_through_payload() {
    let total: ComposedPrism<_, _, Message<Json>> =
        prism!(Envelope, Payload).compose(prism!(Message<Json>, Payload));
    let number = total.compose(prism!(Json, Number));

    let nested = Message::Payload(Message::Payload(Json::Number(7)));
    assert_eq!(number.preview(&nested), Some(7));
    assert_eq!(number.preview(&Message::Payload(Message::Empty(()))), None);
    assert_eq!(number.preview(&Message::Empty(())), None);
    assert_eq!(number.review(1), Message::Payload(Message::Payload(Json::Number(1))));
    assert_eq!(number.to_string(), "Payload.Payload.Number");
}

#[test]
fn test_lens_then_prism() {
    let numeric_value = lens!(Field, value).compose_prism(prism!(Json, Number));
    let count = Field {
        key: "count".to_string(),
        value: Json::Number(3),
    };
    let label = Field {
        key: "label".to_string(),
        value: Json::Text("x".to_string()),
    };

    assert_eq!(numeric_value.get_option(&count), Some(3));
    assert_eq!(numeric_value.get_option(&label), None);
    let updated = numeric_value.set(count.clone(), 10);
    assert_eq!(updated.value, Json::Number(10));
    assert_eq!(updated.key, "count");
    assert_eq!(numeric_value.set(label.clone(), 10), label);
    assert_eq!(numeric_value.modify(count, |n| n * 2).value, Json::Number(6));
    assert_eq!(numeric_value.to_string(), "value.Number");
}

#[test]
fn test_lens_then_prism_on_recursive_enum() {
    let items = pair_second::<&str, Json>().compose_prism(prism!(Json, List));
    let document = ("root", Json::List(vec![Json::Number(1)]));

    assert!(items.is_present(&document));
    let extended = items.modify(document, |mut list| {
        list.push(Json::Text("two".to_string()));
        list
    });
    assert_eq!(
        extended.1,
        Json::List(vec![Json::Number(1), Json::Text("two".to_string())])
    );
}
