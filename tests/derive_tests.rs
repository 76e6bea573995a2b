//! Tests for `#[derive(Lenses)]` and `#[derive(Prisms)]`.

use lensing::optics::{Getter, Lens, LensComposeWithPrism, Optional, Prism, Setter};
use lensing::{Lenses, Prisms};
use rstest::rstest;

// =============================================================================
// Lenses
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    name: String,
    age: u32,
    address: Address,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: &'static str,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Bounded<T>
where
    T: Clone + Default,
{
    items: Vec<T>,
}

fn person() -> Person {
    Person {
        name: "Alice".to_string(),
        age: 30,
        address: Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
        },
    }
}

#[test]
fn test_derived_lens_get_and_set() {
    let age = Person::age_lens();

    assert_eq!(age.get(&person()), 30);
    assert_eq!(age.set(person(), 31).age, 31);
    assert_eq!(age.modify(person(), |years| years * 2).age, 60);
}

#[test]
fn test_derived_lenses_compose() {
    let city = Person::address_lens().compose(Address::city_lens());
    let moved = city.set(person(), "Osaka".to_string());

    assert_eq!(moved.address.city, "Osaka");
    assert_eq!(moved.address.street, "Main St");
    assert_eq!(moved.name, "Alice");
    assert_eq!(city.to_string(), "address.city");
}

#[test]
fn test_derived_lens_names() {
    assert_eq!(Person::name_lens().to_string(), "name");
    assert_eq!(Address::street_lens().to_string(), "street");
    assert_eq!(
        format!("{:?}", Person::age_lens()),
        "FunctionLens { name: \"age\", .. }"
    );
}

#[rstest]
#[case(1, 2)]
#[case(-7, 0)]
fn test_derived_lens_on_generic_struct(#[case] initial: i64, #[case] replacement: i64) {
    let container = Container {
        value: initial,
        label: "n",
    };

    assert_eq!(Container::<i64>::value_lens().get(&container), initial);
    let updated = Container::<i64>::value_lens().set(container, replacement);
    assert_eq!(updated.value, replacement);
    assert_eq!(Container::<i64>::label_lens().get(&updated), "n");
}

#[test]
fn test_derived_lens_with_where_clause() {
    let items = Bounded::<u8>::items_lens();
    let bounded = Bounded { items: vec![1, 2] };

    assert_eq!(items.modify(bounded, |mut list| {
        list.push(3);
        list
    }).items, vec![1, 2, 3]);
}

// =============================================================================
// Prisms
// =============================================================================

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Shape {
    Circle(f64),
    Rectangle(f64, f64),
    Polygon { sides: u8, length: f64 },
    Empty,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Event<T> {
    KeyPress(char),
    HTTPRequest(T),
    Quit,
}

#[derive(PartialEq, Debug, Prisms)]
enum Slot<T> {
    Filled(T),
    Label(String),
    Empty,
}

#[derive(PartialEq, Debug)]
struct Handle(u32);

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Drawing {
    title: String,
    shape: Shape,
}

#[test]
fn test_single_field_variant() {
    let circle = Shape::circle_prism();

    assert_eq!(circle.preview(&Shape::Circle(2.0)), Some(2.0));
    assert_eq!(circle.preview(&Shape::Empty), None);
    assert_eq!(circle.review(1.5), Shape::Circle(1.5));
}

#[test]
fn test_multi_field_variant_focus_is_tuple() {
    let rectangle = Shape::rectangle_prism();

    assert_eq!(rectangle.preview(&Shape::Rectangle(3.0, 4.0)), Some((3.0, 4.0)));
    assert_eq!(rectangle.review((1.0, 2.0)), Shape::Rectangle(1.0, 2.0));
    assert_eq!(
        rectangle.modify_option(Shape::Rectangle(1.0, 1.0), |(w, h)| (w * 2.0, h)),
        Some(Shape::Rectangle(2.0, 1.0))
    );
}

#[test]
fn test_struct_variant_focus_in_declaration_order() {
    let polygon = Shape::polygon_prism();
    let hexagon = Shape::Polygon {
        sides: 6,
        length: 1.0,
    };

    assert_eq!(polygon.preview(&hexagon), Some((6, 1.0)));
    assert_eq!(polygon.review((6, 1.0)), hexagon);
    assert_eq!(polygon.preview(&Shape::Circle(1.0)), None);
}

#[test]
fn test_unit_variant_focus_is_unit() {
    let empty = Shape::empty_prism();

    assert_eq!(empty.preview(&Shape::Empty), Some(()));
    assert_eq!(empty.preview(&Shape::Circle(0.0)), None);
    assert_eq!(empty.review(()), Shape::Empty);
}

#[rstest]
#[case(Event::KeyPress('a'), Some('a'))]
#[case(Event::HTTPRequest("/".to_string()), None)]
#[case(Event::Quit, None)]
fn test_generic_enum_prism(#[case] event: Event<String>, #[case] expected: Option<char>) {
    assert_eq!(Event::<String>::key_press_prism().preview(&event), expected);
}

#[test]
fn test_derived_prism_names_follow_variants() {
    let request = Event::<u16>::http_request_prism();

    assert_eq!(request.to_string(), "HTTPRequest");
    assert_eq!(request.review(404), Event::HTTPRequest(404));
    assert_eq!(Event::<u16>::quit_prism().to_string(), "Quit");
}

#[test]
fn test_derived_lens_then_derived_prism() {
    let radius = Drawing::shape_lens().compose_prism(Shape::circle_prism());
    let drawing = Drawing {
        title: "moon".to_string(),
        shape: Shape::Circle(1.0),
    };

    assert_eq!(radius.get_option(&drawing), Some(1.0));
    let grown = radius.set(drawing.clone(), 3.0);
    assert_eq!(grown.shape, Shape::Circle(3.0));
    assert_eq!(grown.title, "moon");
    assert_eq!(radius.to_string(), "shape.Circle");

    let empty = Drawing {
        shape: Shape::Empty,
        ..drawing
    };
    assert_eq!(radius.set(empty.clone(), 3.0), empty);
}

#[test]
fn test_concrete_payload_prisms_ignore_generic_clone() {
    let label = Slot::<Handle>::label_prism();

    assert_eq!(label.preview(&Slot::Label("a".to_string())), Some("a".to_string()));
    assert_eq!(label.preview(&Slot::Filled(Handle(1))), None);
    assert_eq!(label.review("b".to_string()), Slot::Label("b".to_string()));
    assert_eq!(Slot::<Handle>::empty_prism().preview(&Slot::Empty), Some(()));
    assert_eq!(Slot::<u8>::filled_prism().preview(&Slot::Filled(7)), Some(7));
}
