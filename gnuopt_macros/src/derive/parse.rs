//! Reads the deriving struct and its `#[getopt]` attributes.

use syn::ext::IdentExt as _;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr, Path};

const ATTR: &str = "getopt";
const IGNORE: &str = "-";

/// The deriving struct, reduced to what code generation needs.
pub(crate) struct OptionsInput {
    pub ident: Ident,
    pub generics: Generics,
    pub crate_path: Option<Path>,
    pub fields: Vec<OptionField>,
}

/// A field that takes part in option declaration.
pub(crate) struct OptionField {
    pub member: Ident,
    /// Identifier as written, without any `r#` prefix.
    pub name: String,
    pub tag: Option<LitStr>,
}

/// Parses the derive input, dropping fields tagged `"-"`.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<OptionsInput> {
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Options requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Options can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(member) = field.ident.clone() else {
            continue;
        };
        let tag = field_tag(&field.attrs)?;
        if tag.as_ref().is_some_and(|lit| lit.value() == IGNORE) {
            continue;
        }
        fields.push(OptionField {
            name: member.unraw().to_string(),
            member,
            tag,
        });
    }

    Ok(OptionsInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        crate_path: struct_crate_path(&input.attrs)?,
        fields,
    })
}

/// Extracts the tag of a field from `#[getopt("...")]`.
fn field_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut tag: Option<LitStr> = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        let lit = attr.parse_args::<LitStr>()?;
        if tag.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[getopt] attribute on field",
            ));
        }
        tag = Some(lit);
    }
    Ok(tag)
}

/// Extracts `#[getopt(crate = "...")]` from the struct attributes.
fn struct_crate_path(attrs: &[Attribute]) -> syn::Result<Option<Path>> {
    let mut crate_path = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                crate_path = Some(lit.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported getopt attribute; expected `crate = \"...\"`"))
            }
        })?;
    }
    Ok(crate_path)
}
