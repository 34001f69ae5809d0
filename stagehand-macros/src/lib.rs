//! Procedural macros for the stagehand actor adapter.
//!
//! - `#[derive(Actor)]`: Implements `stagehand::Actor` for your type, preserving generics and bounds.
//!
//! Usage:
//! ```rust,ignore
//! use stagehand::{Actor, InfoBuilder, InfoContributor};
//!
//! #[derive(Actor)]
//! #[actor(interface = "Inventory", contributor)]
//! struct InventoryActor {
//!     #[actor(identity)]
//!     warehouse: String,
//!     items: usize,
//! }
//!
//! impl InfoContributor for InventoryActor {
//!     fn contribute(&self, builder: &mut InfoBuilder) -> stagehand::Result<()> {
//!         builder.with_detail("items", self.items);
//!         Ok(())
//!     }
//! }
//! ```
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, LitStr, parse_macro_input};

/// Derives `stagehand::Actor`.
///
/// Type-level options, given as `#[actor(...)]`:
/// - `interface = "Name"` sets the interface name reported for grouping.
///   Defaults to the type's own name.
/// - `contributor` makes the actor visible to the actor info registry.
///   The type must also implement `stagehand::InfoContributor`.
///
/// Mark at most one field with `#[actor(identity)]`. Its `ToString` output
/// becomes the actor identity. Without such a field the actor has no identity.
#[proc_macro_derive(Actor, attributes(actor))]
pub fn derive_actor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_actor(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_actor(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut interface = ident.to_string();
    let mut contributor = false;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("actor")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("interface") {
                let name: LitStr = meta.value()?.parse()?;
                interface = name.value();
                Ok(())
            } else if meta.path.is_ident("contributor") {
                contributor = true;
                Ok(())
            } else {
                Err(meta.error("expected `interface = \"...\"` or `contributor`"))
            }
        })?;
    }

    let identity_impl = match identity_accessor(input)? {
        Some(access) => quote! {
            fn identity(&self) -> ::std::option::Option<::std::string::String> {
                ::std::option::Option::Some(::std::string::ToString::to_string(&#access))
            }
        },
        None => quote! {},
    };

    let contributor_impl = if contributor {
        quote! {
            fn as_contributor(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::option::Option<::std::sync::Arc<dyn stagehand::InfoContributor>> {
                ::std::option::Option::Some(self)
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #impl_generics stagehand::Actor for #ident #ty_generics #where_clause {
            fn interface_name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#interface)
            }

            #identity_impl

            #contributor_impl
        }
    })
}

/// Finds the field marked `#[actor(identity)]` and returns `self.<field>`.
fn identity_accessor(input: &DeriveInput) -> syn::Result<Option<TokenStream2>> {
    let Data::Struct(data) = &input.data else {
        return Ok(None);
    };

    let mut found: Option<TokenStream2> = None;
    let fields: Vec<_> = match &data.fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        Fields::Unit => Vec::new(),
    };

    for (index, field) in fields.into_iter().enumerate() {
        let mut is_identity = false;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("actor")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("identity") {
                    is_identity = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `identity`"))
                }
            })?;
        }
        if !is_identity {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "only one field can be marked `#[actor(identity)]`",
            ));
        }
        found = Some(match &field.ident {
            Some(name) => quote! { self.#name },
            None => {
                let index = Index::from(index);
                quote! { self.#index }
            }
        });
    }

    Ok(found)
}
