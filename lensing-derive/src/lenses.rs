//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

use crate::bounds::{generic_parameters, generic_types};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_lenses(&input.ident, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates one lens function per named field.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    let Fields::Named(named_fields) = fields else {
        return syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields.",
        )
        .to_compile_error();
    };

    let parameters = generic_parameters(generics);
    let lens_functions = named_fields
        .named
        .iter()
        .filter_map(|field| field_lens(field, &parameters));
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_functions)*
        }
    }
}

/// Generates the lens function for a single field.
fn field_lens(field: &Field, parameters: &[Ident]) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let function_name = format_ident!("{}_lens", field_name);
    let lens_name = field_name.to_string();
    let doc = format!("Returns the lens on the `{lens_name}` field.");
    let field_types = [field_type.clone()];
    let bounded_types = generic_types(&field_types, parameters);

    Some(quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #function_name() -> impl ::lensing::optics::Lens<Self, #field_type>
               + ::core::clone::Clone
               + ::core::fmt::Display
               + ::core::fmt::Debug
        where
            #(#bounded_types: ::core::clone::Clone,)*
        {
            ::lensing::optics::FunctionLens::new(
                #lens_name,
                |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}
