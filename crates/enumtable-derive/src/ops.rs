use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::newtype::NewtypeInput;

/// Bit operators for a flag-set newtype.
pub fn flag_ops(newtype: &NewtypeInput) -> TokenStream {
    let specs = [
        OpSpec::binary("bitor", quote!(::std::ops::BitOr), quote!(|)),
        OpSpec::assign("bitor_assign", quote!(::std::ops::BitOrAssign), quote!(|=)),
        OpSpec::binary("bitand", quote!(::std::ops::BitAnd), quote!(&)),
        OpSpec::assign("bitand_assign", quote!(::std::ops::BitAndAssign), quote!(&=)),
    ];

    specs
        .into_iter()
        .map(|spec| {
            if spec.is_assign {
                expand_assign(newtype, spec)
            } else {
                expand_binary(newtype, spec)
            }
        })
        .collect()
}

///
/// OpSpec
///

struct OpSpec {
    trait_path: TokenStream,
    method: &'static str,
    op_token: TokenStream,
    is_assign: bool,
}

impl OpSpec {
    const fn binary(method: &'static str, trait_path: TokenStream, op_token: TokenStream) -> Self {
        Self {
            trait_path,
            method,
            op_token,
            is_assign: false,
        }
    }

    const fn assign(method: &'static str, trait_path: TokenStream, op_token: TokenStream) -> Self {
        Self {
            trait_path,
            method,
            op_token,
            is_assign: true,
        }
    }
}

fn expand_binary(newtype: &NewtypeInput, spec: OpSpec) -> TokenStream {
    let ident = &newtype.ident;
    let trait_path = spec.trait_path;
    let method = format_ident!("{}", spec.method);
    let op_token = spec.op_token;

    quote! {
        impl #trait_path<#ident> for #ident {
            type Output = Self;

            fn #method(self, other: Self) -> Self::Output {
                Self(self.0 #op_token other.0)
            }
        }
    }
}

fn expand_assign(newtype: &NewtypeInput, spec: OpSpec) -> TokenStream {
    let ident = &newtype.ident;
    let trait_path = spec.trait_path;
    let method = format_ident!("{}", spec.method);
    let op_token = spec.op_token;

    quote! {
        impl #trait_path<#ident> for #ident {
            fn #method(&mut self, other: Self) {
                self.0 #op_token other.0;
            }
        }
    }
}
