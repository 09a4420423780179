//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro that implements `Solver` by dispatching to `PartSolver<N>` impls
///
/// The type must implement `AocParser` and `PartSolver<N>` for every part
/// in `1..=max_parts`. Parts outside that range are rejected with
/// `SolveError::PartNotImplemented`.
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts the solver implements (1-255)
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_aoc_solver(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let max_parts = parse_max_parts(input)?;

    let parts: Vec<Literal> = (1..=max_parts).map(Literal::u8_unsuffixed).collect();
    let arms = parts.iter();
    let targets = parts.iter();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &Self::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms => <Self as ::aoc_solver::PartSolver<#targets>>::solve(shared),)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Read `max_parts` out of the `#[aoc_solver(...)]` attribute
fn parse_max_parts(input: &DeriveInput) -> syn::Result<u8> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "AocSolver derive macro requires #[aoc_solver(max_parts = N)] attribute",
            )
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            match meta.value()?.parse()? {
                Lit::Int(lit_int) => {
                    max_parts = Some(lit_int.base10_parse()?);
                    Ok(())
                }
                other => Err(syn::Error::new_spanned(other, "max_parts must be an integer")),
            }
        } else {
            Err(meta.error("unsupported aoc_solver attribute"))
        }
    })?;

    match max_parts {
        Some(0) => Err(syn::Error::new_spanned(attr, "max_parts must be at least 1")),
        Some(n) => Ok(n),
        None => Err(syn::Error::new_spanned(attr, "missing required 'max_parts' attribute")),
    }
}
