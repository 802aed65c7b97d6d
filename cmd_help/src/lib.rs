use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Fields, parse_macro_input};

/// Joins the `///` lines of a variant, dropping the single space rustdoc keeps after `///`.
fn doc_of(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_owned).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Derives `help(&self)` and `all_help()` for an enum from the doc comments of its variants.
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let help_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let doc = doc_of(&v.attrs);
        let pattern = match &v.fields {
            Fields::Unit => quote! { #variant_name },
            Fields::Unnamed(_) => quote! { #variant_name(..) },
            Fields::Named(_) => quote! { #variant_name { .. } },
        };
        quote! {
            Self::#pattern => #doc,
        }
    });

    let all_help_entries = variants.iter().map(|v| {
        let name = v.ident.to_string();
        let doc = doc_of(&v.attrs);
        quote! {
            (#name, #doc)
        }
    });

    let expanded = quote! {
        impl #enum_name {
            /// Help text of this variant.
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_arms)*
                }
            }

            /// `(variant, help)` of every variant, in declaration order.
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #(#all_help_entries),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
