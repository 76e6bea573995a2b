//! Property-based tests for Prism laws.
//!
//! - **PreviewReview Law**: `prism.preview(&prism.review(value)) == Some(value)`
//! - **ReviewPreview Law**: if `prism.preview(&source) == Some(value)` then
//!   `prism.review(value) == source`

use lensing::optics::{FunctionPrism, Iso, Prism, iso_swap};
use lensing::prism;
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
enum Token {
    Integer(i64),
    Word(String),
    Pair((u8, u8)),
}

#[derive(Clone, PartialEq, Debug)]
enum Tree {
    Leaf(Token),
    Empty(()),
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        any::<i64>().prop_map(Token::Integer),
        "[a-z]{0,8}".prop_map(Token::Word),
        any::<(u8, u8)>().prop_map(Token::Pair),
    ]
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    prop_oneof![
        token_strategy().prop_map(Tree::Leaf),
        Just(Tree::Empty(())),
    ]
}

fn check_prism_laws<S, A, P>(prism: &P, source: &S, value: A) -> Result<(), TestCaseError>
where
    S: Clone + PartialEq + std::fmt::Debug,
    A: Clone + PartialEq + std::fmt::Debug,
    P: Prism<S, A>,
{
    prop_assert_eq!(prism.preview(&prism.review(value.clone())), Some(value));
    if let Some(focus) = prism.preview(source) {
        prop_assert_eq!(&prism.review(focus), source);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_integer_prism_laws(token in token_strategy(), value in any::<i64>()) {
        check_prism_laws(&prism!(Token, Integer), &token, value)?;
    }

    #[test]
    fn prop_word_prism_laws(token in token_strategy(), value in ".*") {
        check_prism_laws(&prism!(Token, Word), &token, value)?;
    }

    #[test]
    fn prop_pair_prism_laws(token in token_strategy(), value in any::<(u8, u8)>()) {
        check_prism_laws(&prism!(Token, Pair), &token, value)?;
    }

    #[test]
    fn prop_composed_prism_laws(tree in tree_strategy(), value in any::<i64>()) {
        let leaf_integer = prism!(Tree, Leaf).compose(prism!(Token, Integer));
        check_prism_laws(&leaf_integer, &tree, value)?;
    }

    #[test]
    fn prop_function_prism_laws(source in any::<i32>(), value in 0u32..=i32::MAX as u32) {
        let non_negative = FunctionPrism::new(
            "non_negative",
            |value: &i32| u32::try_from(*value).ok(),
            |value: u32| i32::try_from(value).unwrap_or(i32::MAX),
        );
        check_prism_laws(&non_negative, &source, value)?;
    }

    #[test]
    fn prop_iso_as_prism_laws(source in any::<(bool, char)>(), value in any::<(char, bool)>()) {
        check_prism_laws(&iso_swap::<bool, char>().to_prism(), &source, value)?;
    }

    #[test]
    fn prop_preview_matches_only_its_case(token in token_strategy()) {
        let integer = prism!(Token, Integer);
        let word = prism!(Token, Word);
        let pair = prism!(Token, Pair);

        let matches = usize::from(integer.preview(&token).is_some())
            + usize::from(word.preview(&token).is_some())
            + usize::from(pair.preview(&token).is_some());
        prop_assert_eq!(matches, 1);
    }
}
