//! Expansion of `#[derive(Options)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;

/// Parses `input` and emits the `Options` impl.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::options_impl(&parsed))
}
