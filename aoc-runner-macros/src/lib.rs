//! Procedural macros for the aoc-runner library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro generating the `Solver` impl from per-part `PartSolver` impls
///
/// # Attributes
///
/// - `max_parts`: Required. The number of parts (usually 1 or 2). The type
///   must implement `PartSolver<N>` for every `N` in `1..=max_parts`.
///
/// # Example
///
/// ```ignore
/// use aoc_runner::{AocParser, PartSolver};
/// use aoc_runner_macros::AocSolver;
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver { /* ... */ }
/// impl PartSolver<1> for Day1Solver { /* ... */ }
/// impl PartSolver<2> for Day1Solver { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .expect("AocSolver derive macro requires #[aoc_solver(...)] attribute");

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                max_parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[aoc_solver(...)] attribute");

    let max_parts = max_parts.expect("Missing required 'max_parts' attribute");
    assert!(max_parts >= 1, "'max_parts' must be at least 1");

    // One match arm per part, dispatching to the PartSolver<N> impl
    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <#name as ::aoc_runner::PartSolver<#part>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::aoc_runner::Solver for #name {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::aoc_runner::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::std::result::Result::Err(
                        ::aoc_runner::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates the code to register a solver with the inventory system, so it
/// can be discovered by `RegistryBuilder::register_all_plugins`.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2022)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "bfs"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait; otherwise you get a
/// compile-time error naming the unsatisfied bound.
///
/// # Example
///
/// ```ignore
/// use aoc_runner_macros::{AocSolver, AutoRegisterSolver};
///
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2022, day = 1, tags = ["parsing"])]
/// struct Day1Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .expect("AutoRegisterSolver derive macro requires #[aoc(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[aoc(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait,
        // producing a readable error when it does not
        const _: () = {
            trait MustImplementSolver: ::aoc_runner::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_runner::inventory::submit! {
            ::aoc_runner::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
