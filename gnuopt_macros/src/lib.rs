//! Procedural macros for `gnuopt`.
//!
//! `#[derive(Options)]` implements `gnuopt::reflect::Options` for a struct
//! with named fields. Each field may carry a `#[getopt("...")]` tag in the
//! option tag language; untagged fields are declared from their identifier
//! and fields tagged `"-"` are left out entirely. A struct-level
//! `#[getopt(crate = "path")]` points the generated code at a renamed
//! dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `gnuopt::reflect::Options`.
#[proc_macro_derive(Options, attributes(getopt))]
pub fn derive_options(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
