//! Implementation of the `#[derive(Prisms)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Type, Variant, parse_macro_input};

use crate::bounds::{generic_parameters, generic_types};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            let parameters = generic_parameters(&input.generics);
            let prism_functions = data_enum
                .variants
                .iter()
                .map(|variant| variant_prism(variant, &parameters));
            let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
            let name = &input.ident;

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#prism_functions)*
                }
            }
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// How a variant's payload is matched, rebuilt and exposed as a focus.
struct VariantShape {
    /// Pattern binding every field by reference.
    pattern: TokenStream2,
    /// Expression rebuilding the variant from the bindings.
    construct: TokenStream2,
    /// The focus type.
    focus_type: TokenStream2,
    /// Pattern destructuring a focus into the bindings.
    focus_pattern: TokenStream2,
    /// Expression building an owned focus from the reference bindings.
    focus_value: TokenStream2,
    /// Payload types that must be `Clone`.
    field_types: Vec<Type>,
}

/// Wraps several items in a tuple, leaving a single item bare.
fn tuple_or_single(items: &[TokenStream2]) -> TokenStream2 {
    match items {
        [single] => single.clone(),
        _ => quote! { (#(#items),*) },
    }
}

fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;

    let (bindings, field_types): (Vec<Ident>, Vec<Type>) = match &variant.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .filter_map(|field| Some((field.ident.clone()?, field.ty.clone())))
            .unzip(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| (format_ident!("field_{}", index), field.ty.clone()))
            .unzip(),
        Fields::Unit => (Vec::new(), Vec::new()),
    };

    let (pattern, construct) = match &variant.fields {
        Fields::Named(_) => (
            quote! { Self::#variant_name { #(#bindings),* } },
            quote! { Self::#variant_name { #(#bindings),* } },
        ),
        Fields::Unnamed(_) => (
            quote! { Self::#variant_name(#(#bindings),*) },
            quote! { Self::#variant_name(#(#bindings),*) },
        ),
        Fields::Unit => (quote! { Self::#variant_name }, quote! { Self::#variant_name }),
    };

    let binding_tokens: Vec<TokenStream2> = bindings.iter().map(|binding| quote! { #binding }).collect();
    let type_tokens: Vec<TokenStream2> = field_types.iter().map(|ty| quote! { #ty }).collect();
    let cloned: Vec<TokenStream2> = bindings
        .iter()
        .map(|binding| quote! { ::core::clone::Clone::clone(#binding) })
        .collect();

    VariantShape {
        pattern,
        construct,
        focus_type: tuple_or_single(&type_tokens),
        focus_pattern: tuple_or_single(&binding_tokens),
        focus_value: tuple_or_single(&cloned),
        field_types,
    }
}

/// Generates the prism function for a single variant.
fn variant_prism(variant: &Variant, parameters: &[Ident]) -> TokenStream2 {
    let variant_name = &variant.ident;
    let prism_name = variant_name.to_string();
    let function_name = format_ident!("{}_prism", to_snake_case(&prism_name));
    let doc = format!("Returns the prism on the `{prism_name}` variant.");

    let VariantShape {
        pattern,
        construct,
        focus_type,
        focus_pattern,
        focus_value,
        field_types,
    } = variant_shape(variant);
    let bounded_types = generic_types(&field_types, parameters);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #function_name() -> impl ::lensing::optics::Prism<Self, #focus_type>
               + ::core::clone::Clone
               + ::core::fmt::Display
               + ::core::fmt::Debug
        where
            #(#bounded_types: ::core::clone::Clone,)*
        {
            ::lensing::optics::FunctionPrism::new(
                #prism_name,
                |source: &Self| match source {
                    #pattern => ::core::option::Option::Some(#focus_value),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |#focus_pattern: #focus_type| #construct,
            )
        }
    }
}

/// Converts a `PascalCase` identifier to `snake_case`.
///
/// A run of capitals is kept together as one word, so `HTTPRequest` becomes
/// `http_request`.
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (index, character) in characters.iter().copied().enumerate() {
        if character.is_uppercase() && index > 0 {
            let previous = characters[index - 1];
            let next_is_lowercase = characters
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());
            let starts_word =
                previous.is_lowercase() || previous.is_ascii_digit() || (previous.is_uppercase() && next_is_lowercase);
            if starts_word {
                result.push('_');
            }
        }
        result.extend(character.to_lowercase());
    }

    result
}
