use convert_case::{Case, Casing};
use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Error, Expr, ExprLit, ExprUnary, Fields, Ident, Lit,
    LitStr, Type, UnOp, spanned::Spanned,
};

use crate::{
    newtype::{self, NewtypeInput},
    ops,
};

const ATTR: &str = "enum_kind";

pub fn derive_enum_kind(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, Error> {
    // Phase 1: parse the item and its container attributes.
    let item: DeriveInput = syn::parse2(input.clone())?;
    if !item.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &item.generics,
            "EnumKind cannot be derived for generic types",
        ));
    }
    let container = ContainerAttrs::parse(&item.attrs)?;

    // Phase 2: collect members and the integer representation.
    match &item.data {
        Data::Enum(data) => {
            if let Some(span) = container.flags {
                return Err(Error::new(
                    span,
                    "flag sets are declared on tuple newtypes, not enums",
                ));
            }
            if let Some(member) = container.members.first() {
                return Err(Error::new(
                    member.span,
                    "enum members are declared by the variants themselves",
                ));
            }

            let repr = repr_of(&item.attrs)?;
            let variants = collect_variants(data, &repr)?;

            Ok(expand_enum(&item.ident, &repr, &variants))
        }
        Data::Struct(_) => {
            if container.flags.is_none() {
                return Err(Error::new_spanned(
                    &item.ident,
                    "EnumKind on a struct requires #[enum_kind(flags)]",
                ));
            }

            let newtype = newtype::parse_newtype(input, "EnumKind")?;
            let repr = IntRepr::from_type(&newtype.inner)?;
            for member in &container.members {
                repr.check(member.value, member.span)?;
            }
            check_unique_names(&container.members)?;

            Ok(expand_flags(&newtype, &repr, &container.members))
        }
        Data::Union(_) => Err(Error::new_spanned(
            &item.ident,
            "EnumKind can only be derived for enums and tuple newtypes",
        )),
    }
}

///
/// IntRepr
///

struct IntRepr {
    ty: Ident,
    kind: Ident,
    min: i128,
    max: i128,
}

impl IntRepr {
    fn from_ident(ident: &Ident) -> Option<Self> {
        let (kind, min, max) = match ident.to_string().as_str() {
            "i8" => ("I8", i128::from(i8::MIN), i128::from(i8::MAX)),
            "i16" => ("I16", i128::from(i16::MIN), i128::from(i16::MAX)),
            "i32" => ("I32", i128::from(i32::MIN), i128::from(i32::MAX)),
            "i64" => ("I64", i128::from(i64::MIN), i128::from(i64::MAX)),
            "u8" => ("U8", 0, i128::from(u8::MAX)),
            "u16" => ("U16", 0, i128::from(u16::MAX)),
            "u32" => ("U32", 0, i128::from(u32::MAX)),
            "u64" => ("U64", 0, i128::from(u64::MAX)),
            _ => return None,
        };

        Some(Self {
            ty: ident.clone(),
            kind: Ident::new(kind, Span::call_site()),
            min,
            max,
        })
    }

    fn default_repr() -> Self {
        Self {
            ty: Ident::new("i32", Span::call_site()),
            kind: Ident::new("I32", Span::call_site()),
            min: i128::from(i32::MIN),
            max: i128::from(i32::MAX),
        }
    }

    fn from_type(ty: &Type) -> Result<Self, Error> {
        let Type::Path(path) = ty else {
            return Err(Error::new_spanned(ty, "flag sets must wrap an integer type"));
        };

        path.path
            .get_ident()
            .and_then(Self::from_ident)
            .ok_or_else(|| {
                Error::new_spanned(
                    ty,
                    "flag sets must wrap one of i8, i16, i32, i64, u8, u16, u32, u64",
                )
            })
    }

    fn check(&self, value: i128, span: Span) -> Result<(), Error> {
        if value < self.min || value > self.max {
            return Err(Error::new(
                span,
                format!("value {value} does not fit {}", self.ty),
            ));
        }

        Ok(())
    }
}

// #[repr(..)] may also carry non-integer hints such as `C`
fn repr_of(attrs: &[Attribute]) -> Result<IntRepr, Error> {
    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(repr) = meta.path.get_ident().and_then(IntRepr::from_ident) {
                found = Some(repr);
            }
            Ok(())
        })?;
    }

    Ok(found.unwrap_or_else(IntRepr::default_repr))
}

///
/// Member
///

struct Member {
    name: String,
    description: Option<String>,
    value: i128,
    span: Span,
}

///
/// ContainerAttrs
///

#[derive(Default)]
struct ContainerAttrs {
    flags: Option<Span>,
    members: Vec<Member>,
}

impl ContainerAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("flags") {
                    out.flags = Some(meta.path.span());
                    return Ok(());
                }

                if meta.path.is_ident("member") {
                    let span = meta.path.span();
                    let mut name = None;
                    let mut description = None;
                    let mut value = None;

                    meta.parse_nested_meta(|inner| {
                        if inner.path.is_ident("name") {
                            name = Some(inner.value()?.parse::<LitStr>()?.value());
                        } else if inner.path.is_ident("description") {
                            description = Some(inner.value()?.parse::<LitStr>()?.value());
                        } else if inner.path.is_ident("value") {
                            value = Some(int_literal(&inner.value()?.parse::<Expr>()?)?);
                        } else {
                            return Err(inner.error("expected `name`, `value` or `description`"));
                        }
                        Ok(())
                    })?;

                    let name = name.ok_or_else(|| Error::new(span, "member requires `name`"))?;
                    let value = value.ok_or_else(|| Error::new(span, "member requires `value`"))?;
                    out.members.push(Member {
                        name,
                        description,
                        value,
                        span,
                    });

                    return Ok(());
                }

                Err(meta.error("expected `flags` or `member(..)`"))
            })?;
        }

        Ok(out)
    }
}

fn variant_description(attrs: &[Attribute]) -> Result<Option<String>, Error> {
    let mut description = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("description") {
                description = Some(meta.value()?.parse::<LitStr>()?.value());
                Ok(())
            } else {
                Err(meta.error("expected `description`"))
            }
        })?;
    }

    Ok(description)
}

/// Integer literal, optionally negated.
fn int_literal(expr: &Expr) -> Result<i128, Error> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse::<i128>(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => int_literal(expr).map(|v| -v),
        Expr::Group(group) => int_literal(&group.expr),
        Expr::Paren(paren) => int_literal(&paren.expr),
        _ => Err(Error::new_spanned(expr, "expected an integer literal")),
    }
}

fn collect_variants(data: &DataEnum, repr: &IntRepr) -> Result<Vec<(Ident, Member)>, Error> {
    let mut next = 0i128;
    let mut out = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                &variant.fields,
                "EnumKind variants cannot carry fields",
            ));
        }

        let value = match &variant.discriminant {
            Some((_, expr)) => int_literal(expr)?,
            None => next,
        };
        repr.check(value, variant.ident.span())?;
        next = value + 1;

        out.push((
            variant.ident.clone(),
            Member {
                name: variant.ident.to_string(),
                description: variant_description(&variant.attrs)?,
                value,
                span: variant.ident.span(),
            },
        ));
    }

    Ok(out)
}

fn check_unique_names(members: &[Member]) -> Result<(), Error> {
    for (i, member) in members.iter().enumerate() {
        if members[..i].iter().any(|m| m.name == member.name) {
            return Err(Error::new(
                member.span,
                format!("duplicate member name '{}'", member.name),
            ));
        }
    }

    Ok(())
}

// i128 literal usable in both expression and pattern position
fn raw_literal(value: i128) -> TokenStream {
    let lit = Literal::u128_unsuffixed(value.unsigned_abs());

    if value < 0 { quote!(-#lit) } else { quote!(#lit) }
}

// ============================================================================
// EXPANSION
// ============================================================================

fn descriptor_tokens<'a>(
    ident: &Ident,
    repr: &IntRepr,
    flags: bool,
    members: impl Iterator<Item = &'a Member>,
) -> TokenStream {
    let ident_str = ident.to_string();
    let kind = &repr.kind;
    let members = members.map(|m| {
        let name = &m.name;
        let value = raw_literal(m.value);
        let description = m
            .description
            .as_ref()
            .map_or_else(|| quote!(None), |d| quote!(Some(#d)));

        quote! {
            ::enumtable::model::MemberDescriptor {
                name: #name,
                description: #description,
                value: #value,
            }
        }
    });

    quote! {
        fn descriptor() -> &'static ::enumtable::model::EnumDescriptor {
            static DESCRIPTOR: ::enumtable::model::EnumDescriptor = ::enumtable::model::EnumDescriptor {
                ident: #ident_str,
                repr: ::enumtable::types::IntKind::#kind,
                flags: #flags,
                members: &[#(#members),*],
            };

            &DESCRIPTOR
        }
    }
}

// Reflect and FieldValue are shared by enums and flag sets
fn common_impls(ident: &Ident) -> TokenStream {
    quote! {
        impl ::enumtable::traits::Reflect for #ident {
            fn shape() -> ::enumtable::model::Shape {
                ::enumtable::model::Shape::Enum(
                    <Self as ::enumtable::traits::EnumKind>::descriptor(),
                )
            }
        }

        impl ::enumtable::traits::FieldValue for #ident {
            fn data_type() -> ::enumtable::types::DataType {
                ::enumtable::types::DataType::Text
            }

            fn to_value(&self) -> ::enumtable::value::Value {
                ::enumtable::value::Value::Text(::enumtable::enums::to_name(*self))
            }

            fn from_value(value: &::enumtable::value::Value) -> Option<Self> {
                ::enumtable::__private::enum_from_value(value)
            }
        }
    }
}

fn expand_enum(ident: &Ident, repr: &IntRepr, variants: &[(Ident, Member)]) -> TokenStream {
    let descriptor = descriptor_tokens(ident, repr, false, variants.iter().map(|(_, m)| m));
    let common = common_impls(ident);

    let to_raw_arms = variants.iter().map(|(variant, m)| {
        let value = raw_literal(m.value);
        quote!(Self::#variant => #value,)
    });
    let from_raw_arms = variants.iter().map(|(variant, m)| {
        let value = raw_literal(m.value);
        quote!(#value => Some(Self::#variant),)
    });

    quote! {
        impl ::enumtable::traits::EnumKind for #ident {
            #descriptor

            fn to_raw(self) -> i128 {
                match self {
                    #(#to_raw_arms)*
                }
            }

            fn from_raw(raw: i128) -> Option<Self> {
                match raw {
                    #(#from_raw_arms)*
                    _ => None,
                }
            }
        }

        #common
    }
}

fn expand_flags(newtype: &NewtypeInput, repr: &IntRepr, members: &[Member]) -> TokenStream {
    let ident = &newtype.ident;
    let inner = &repr.ty;
    let descriptor = descriptor_tokens(ident, repr, true, members.iter());
    let common = common_impls(ident);
    let ops = ops::flag_ops(newtype);

    let consts = members.iter().map(|m| {
        let const_ident = format_ident!("{}", m.name.to_case(Case::UpperSnake));
        let value = raw_literal(m.value);
        let doc = m.description.as_deref().unwrap_or(&m.name);

        quote! {
            #[doc = #doc]
            pub const #const_ident: Self = Self(#value);
        }
    });

    quote! {
        impl #ident {
            #(#consts)*

            /// No flags set.
            #[must_use]
            pub const fn empty() -> Self {
                Self(0)
            }

            #[must_use]
            pub const fn from_bits(bits: #inner) -> Self {
                Self(bits)
            }

            #[must_use]
            pub const fn bits(self) -> #inner {
                self.0
            }

            /// True when every bit of `other` is set in `self`.
            #[must_use]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl ::enumtable::traits::EnumKind for #ident {
            #descriptor

            fn to_raw(self) -> i128 {
                i128::from(self.0)
            }

            fn from_raw(raw: i128) -> Option<Self> {
                <#inner>::try_from(raw).ok().map(Self)
            }
        }

        #ops

        #common
    }
}
