//! Unit tests for Traversal optics and their compositions with lenses.
//!
//! - [`VecTraversal`]: the identity iteration over a vector
//! - [`OptionTraversal`]: zero or one focus
//! - [`FunctionTraversal`]: named traversal from two functions
//! - [`ComposedTraversal`]: traversal after traversal
//! - Lens then traversal and traversal then lens compositions

use lensing::lens;
use lensing::optics::{
    FunctionTraversal, LensAsTraversal, LensComposeWithTraversal, Lens, OptionTraversal, Setter,
    Traversal, TraversalComposeWithLens, VecTraversal, pair_first, pair_second,
};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Employee {
    name: String,
    salary: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Department {
    name: String,
    staff: Vec<Employee>,
}

#[derive(Clone, PartialEq, Debug)]
struct Company {
    departments: Vec<Department>,
}

fn employee(name: &str, salary: u32) -> Employee {
    Employee {
        name: name.to_string(),
        salary,
    }
}

fn company() -> Company {
    Company {
        departments: vec![
            Department {
                name: "research".to_string(),
                staff: vec![employee("ada", 100), employee("alan", 90)],
            },
            Department {
                name: "empty".to_string(),
                staff: Vec::new(),
            },
            Department {
                name: "ops".to_string(),
                staff: vec![employee("grace", 120)],
            },
        ],
    }
}

fn salaries() -> impl Traversal<Company, u32> + std::fmt::Display {
    lens!(Company, departments)
        .compose_traversal(VecTraversal::new())
        .compose_lens(lens!(Department, staff))
        .compose(VecTraversal::new())
        .compose_lens(lens!(Employee, salary))
}

// =============================================================================
// Identity iteration
// =============================================================================

#[test]
fn test_vec_traversal_increment() {
    let each: VecTraversal<i32> = VecTraversal::new();
    let numbers = vec![1, 2, 3];

    assert_eq!(each.modify(numbers.clone(), |x| x + 1), vec![2, 3, 4]);
    assert_eq!(each.get_all(&numbers).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
#[case(vec![], None)]
#[case(vec![7], Some(7))]
#[case(vec![4, 5, 6], Some(4))]
fn test_head_option(#[case] numbers: Vec<i32>, #[case] expected: Option<i32>) {
    assert_eq!(VecTraversal::new().head_option(&numbers), expected);
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![1, 2, 3, 4], 10)]
fn test_fold_sum(#[case] numbers: Vec<i32>, #[case] expected: i32) {
    let each: VecTraversal<i32> = VecTraversal::new();
    assert_eq!(each.fold(&numbers, 0, |total, x| total + x), expected);
}

// =============================================================================
// FunctionTraversal
// =============================================================================

#[test]
fn test_function_traversal_over_pair() {
    let both = FunctionTraversal::new(
        "both",
        |pair: &(String, String)| vec![pair.0.clone(), pair.1.clone()],
        |(left, right): (String, String), function: &mut dyn FnMut(String) -> String| {
            (function(left), function(right))
        },
    );
    let pair = ("a".to_string(), "b".to_string());

    assert_eq!(both.length(&pair), 2);
    assert_eq!(
        both.modify(pair, |text| text.repeat(2)),
        ("aa".to_string(), "bb".to_string())
    );
    assert_eq!(format!("{both:?}"), "FunctionTraversal { name: \"both\", .. }");
}

#[test]
fn test_function_traversal_visits_in_order() {
    let each = FunctionTraversal::new(
        "each",
        |list: &Vec<u8>| list.clone(),
        |list: Vec<u8>, function: &mut dyn FnMut(u8) -> u8| list.into_iter().map(function).collect(),
    );

    let mut visited = Vec::new();
    let _ = each.modify(vec![3, 1, 2], |x| {
        visited.push(x);
        x
    });
    assert_eq!(visited, vec![3, 1, 2]);
}

// =============================================================================
// Compositions
// =============================================================================

#[test]
fn test_lens_then_traversal() {
    let staff = lens!(Department, staff).compose_traversal(VecTraversal::new());
    let research = company().departments[0].clone();

    let names: Vec<String> = staff.get_all(&research).map(|e| e.name).collect();
    assert_eq!(names, vec!["ada", "alan"]);

    let raised = staff.modify(research.clone(), |e| Employee {
        salary: e.salary + 1,
        ..e
    });
    assert_eq!(raised.name, research.name);
    assert_eq!(raised.staff[1].salary, 91);
}

#[test]
fn test_traversal_then_lens() {
    let firsts = VecTraversal::<(u8, char)>::new().compose_lens(pair_first());
    let pairs = vec![(1, 'a'), (2, 'b')];

    assert_eq!(firsts.get_all(&pairs).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(firsts.modify(pairs, |x| x * 10), vec![(10, 'a'), (20, 'b')]);
}

#[test]
fn test_deep_salary_traversal() {
    let salaries = salaries();
    let source = company();

    assert_eq!(salaries.get_all(&source).collect::<Vec<_>>(), vec![100, 90, 120]);
    assert_eq!(salaries.length(&source), 3);

    let raised = salaries.modify(source.clone(), |salary| salary + 10);
    assert_eq!(salaries.get_all(&raised).collect::<Vec<_>>(), vec![110, 100, 130]);
    assert_eq!(raised.departments[1], source.departments[1]);
    assert_eq!(raised.departments[2].name, "ops");
}

#[test]
fn test_deep_traversal_display() {
    assert_eq!(
        salaries().to_string(),
        "departments.each.staff.each.salary"
    );
}

#[test]
fn test_option_traversal_composition() {
    let present = VecTraversal::<Option<(i32, i32)>>::new()
        .compose(OptionTraversal::new())
        .compose_lens(pair_second());
    let data = vec![Some((1, 2)), None, Some((3, 4))];

    assert_eq!(present.get_all(&data).collect::<Vec<_>>(), vec![2, 4]);
    assert_eq!(
        present.set_all(data, 0),
        vec![Some((1, 0)), None, Some((3, 0))]
    );
}

#[test]
fn test_lens_as_traversal_has_one_focus() {
    let only: LensAsTraversal<_, (i32, i32), i32> = pair_second::<i32, i32>().to_traversal();
    assert_eq!(only.get_all(&(1, 2)).collect::<Vec<_>>(), vec![2]);
    assert_eq!(only.set_all((1, 2), 9), (1, 9));
}

#[test]
fn test_get_all_reflects_current_contents() {
    let each: VecTraversal<String> = VecTraversal::new();
    let mut words = vec!["x".to_string()];
    assert_eq!(each.length(&words), 1);

    words.push("y".to_string());
    assert_eq!(each.get_all(&words).collect::<Vec<_>>(), vec!["x", "y"]);
}

// =============================================================================
// Borrowed foci
// =============================================================================

fn longest_word<'a>(words: &Vec<&'a str>) -> Option<&'a str> {
    let each = VecTraversal::<&'a str>::new();
    each.get_all(words).max_by_key(|word| word.len())
}

fn words_longer_than<'a>(lines: &Vec<Vec<&'a str>>, width: usize) -> Vec<&'a str> {
    let words = VecTraversal::<Vec<&'a str>>::new().compose(VecTraversal::<&'a str>::new());
    words.get_all(lines).filter(|word| word.len() > width).collect()
}

#[test]
fn test_get_all_over_borrowed_elements() {
    let text = String::from("a lens focuses here");
    let words: Vec<&str> = text.split(' ').collect();

    assert_eq!(longest_word(&words), Some("focuses"));
    assert_eq!(longest_word(&Vec::new()), None);
}

#[test]
fn test_composed_traversal_over_borrowed_elements() {
    let text = String::from("get set\nmodify compose\nfold");
    let lines: Vec<Vec<&str>> = text.lines().map(|line| line.split(' ').collect()).collect();

    assert_eq!(words_longer_than(&lines, 3), vec!["modify", "compose", "fold"]);
}

#[test]
fn test_lens_then_traversal_over_borrowed_elements() {
    let text = String::from("x y z");
    let tagged: (usize, Vec<&str>) = (1, text.split(' ').collect());
    let words = pair_second::<usize, Vec<&str>>().compose_traversal(VecTraversal::new());

    assert_eq!(words.get_all(&tagged).collect::<Vec<_>>(), vec!["x", "y", "z"]);
    assert_eq!(words.modify(tagged, |_| "w").1, vec!["w", "w", "w"]);
}
