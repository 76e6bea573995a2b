//! Selection of the `Clone` bounds placed on generated optic functions.

use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::ToTokens;
use syn::{Generics, Ident, Type};

/// Returns the names of the type and const parameters declared by `generics`.
pub fn generic_parameters(generics: &Generics) -> Vec<Ident> {
    generics
        .type_params()
        .map(|parameter| parameter.ident.clone())
        .chain(generics.const_params().map(|parameter| parameter.ident.clone()))
        .collect()
}

/// Keeps the types that mention one of `parameters`.
///
/// A bound on a concrete type is a global predicate, checked where the
/// function is declared rather than where it is called. Only bounds that
/// depend on the item's generics are emitted.
pub fn generic_types<'a>(types: &'a [Type], parameters: &[Ident]) -> Vec<&'a Type> {
    types
        .iter()
        .filter(|ty| mentions_any(ty.to_token_stream(), parameters))
        .collect()
}

fn mentions_any(tokens: TokenStream2, parameters: &[Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => parameters.contains(&ident),
        TokenTree::Group(group) => mentions_any(group.stream(), parameters),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parameters() -> Vec<Ident> {
        let generics: Generics = syn::parse_quote! { <T, Item> };
        generic_parameters(&generics)
    }

    #[rstest]
    #[case(syn::parse_quote! { T }, true)]
    #[case(syn::parse_quote! { Vec<T> }, true)]
    #[case(syn::parse_quote! { (u8, [Item; 4]) }, true)]
    #[case(syn::parse_quote! { Box<dyn Fn(T) -> u8> }, true)]
    #[case(syn::parse_quote! { String }, false)]
    #[case(syn::parse_quote! { Vec<Token> }, false)]
    #[case(syn::parse_quote! { std::fs::File }, false)]
    fn test_generic_types_detection(#[case] ty: Type, #[case] expected: bool) {
        let types = vec![ty];
        assert_eq!(generic_types(&types, &parameters()).len(), usize::from(expected));
    }

    #[test]
    fn test_lifetimes_are_not_collected() {
        let generics: Generics = syn::parse_quote! { <'a, T, const N: usize> };
        let names: Vec<String> = generic_parameters(&generics)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(names, vec!["T", "N"]);
    }
}
