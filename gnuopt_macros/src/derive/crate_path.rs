//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[getopt(crate = "...")]` attribute value into the
//! tokens that prefix every `gnuopt` path in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the crate path, defaulting to `::gnuopt`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::gnuopt }, |path| quote! { #path })
}
