//! Emits the `Options` impl.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::crate_path;
use super::parse::OptionsInput;

/// Builds `impl Options for <struct>` from the parsed input.
pub(crate) fn options_impl(input: &OptionsInput) -> TokenStream {
    let krate = crate_path::resolve(input.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let infos = input.fields.iter().map(|field| {
        let name = &field.name;
        let tag = field.tag.as_ref().map_or_else(
            || quote! { ::core::option::Option::None },
            |lit| quote! { ::core::option::Option::Some(#lit) },
        );
        quote! { #krate::FieldInfo::new(#name, #tag) }
    });
    let members: Vec<_> = input.fields.iter().map(|field| &field.member).collect();
    let indices = (0..members.len()).map(Literal::usize_unsuffixed);

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::reflect::Options for #ident #ty_generics #where_clause {
            fn fields() -> &'static [#krate::FieldInfo] {
                const FIELDS: &[#krate::FieldInfo] = &[#(#infos),*];
                FIELDS
            }

            fn value(&self, index: usize) -> ::core::option::Option<&dyn #krate::Value> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members as &dyn #krate::Value),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn values_mut(&mut self) -> ::std::vec::Vec<&mut dyn #krate::Value> {
                ::std::vec![#(&mut self.#members as &mut dyn #krate::Value),*]
            }
        }
    }
}
