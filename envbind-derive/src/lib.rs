//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `EnvBind` derive macro
///
/// Implements `envbind::Bind` for a struct with named fields and adds a
/// `bind_env(&mut self)` method that maps the process environment onto it.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("NAME")]`: bind to `NAME`, optional, no default
/// - `#[env("NAME;mandatory")]`: fail if `NAME` is not set
/// - `#[env("NAME;optional;value")]`: use `value` if `NAME` is not set
///
/// Fields without `#[env]` are not bound. Bound fields must implement
/// `envbind::EnvValue`.
///
/// # Generated Items
///
/// - `impl envbind::Bind for T`
/// - `T::bind_env(&mut self)`, an inherent method. A struct that already has
///   an inherent `bind_env` fails to compile with a duplicate definition
///   error. Rename that method, or skip the shortcut and call
///   `envbind::Binder::new().map(&mut value)` directly.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Struct name
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "EnvBind only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input.ident, "EnvBind only supports structs")
                .to_compile_error()
                .into();
        }
    };

    // One slot per annotated field, in declaration order
    let mut slots = Vec::new();
    for field in fields {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };
        let Some(tag) = attrs.tag else {
            continue;
        };
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_label = field_name.to_string().trim_start_matches("r#").to_string();

        slots.push(quote! {
            ::envbind::FieldSlot::new(#field_label, #tag, &mut self.#field_name)
        });
    }

    let expanded = quote! {
        impl #impl_generics ::envbind::Bind for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envbind::FieldSlot<'_>> {
                ::std::vec![#(#slots),*]
            }
        }

        impl #impl_generics #struct_name #ty_generics #where_clause {
            /// Populate the annotated fields from the process environment
            ///
            /// # Errors
            ///
            /// - A field annotation is malformed
            /// - A mandatory variable is not set and has no default
            /// - A value cannot be converted to its field's type
            pub fn bind_env(&mut self) -> ::std::result::Result<(), ::envbind::BindError> {
                ::envbind::Binder::new().map(self)
            }
        }
    };

    TokenStream::from(expanded)
}
