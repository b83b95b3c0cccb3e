//! Attribute parsing for `#[env("...")]` annotations.
//!
//! The tag grammar itself is checked at runtime by `envbind::parse_tag`;
//! here we only extract the literal.

use syn::{Field, LitStr};

/// Parsed `#[env("...")]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw tag string. `None` when the field carries no `env` attribute and
    /// is therefore not bound.
    pub tag: Option<LitStr>,
}

impl FieldAttrs {
    /// Extract the `#[env("...")]` attribute from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if attrs.tag.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate env attribute; combine name, mode and default in one tag",
                ));
            }

            let tag: LitStr = attr.parse_args().map_err(|e| {
                syn::Error::new(
                    e.span(),
                    "expected a string literal: #[env(\"NAME;mandatory|optional;default\")]",
                )
            })?;
            attrs.tag = Some(tag);
        }

        Ok(attrs)
    }
}
