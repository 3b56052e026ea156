use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Error, Field, Fields, Ident, LitStr, WherePredicate, parse_quote,
};

use crate::util::extend_where;

const ATTR: &str = "table";

// derive_table_model
pub fn derive_table_model(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

///
/// MappedField
///

struct MappedField<'a> {
    field: &'a Field,
    ident: &'a Ident,
    column: String,
    display_name: Option<String>,
}

fn expand(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = &input.ident;
    let ident_str = ident.to_string();
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();

    let message = "TableModel can only be derived for structs with named fields";
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => return Err(Error::new_spanned(other, message)),
        },
        _ => return Err(Error::new_spanned(ident, message)),
    };

    let mut mapped = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let column = attrs
            .name
            .clone()
            .unwrap_or_else(|| field_ident.to_string());
        if mapped.iter().any(|m: &MappedField| m.column == column) {
            return Err(Error::new_spanned(
                field,
                format!("duplicate column name '{column}'"),
            ));
        }

        mapped.push(MappedField {
            field,
            ident: field_ident,
            column,
            display_name: attrs.name,
        });
    }

    // every mapped field type converts to and from a cell
    let mut bounds: Vec<WherePredicate> = mapped
        .iter()
        .map(|m| {
            let ty = &m.field.ty;
            parse_quote!(#ty: ::enumtable::traits::FieldValue)
        })
        .collect();
    bounds.push(parse_quote!(Self: 'static));
    let reflect_where = extend_where(&input.generics, &bounds);
    bounds.push(parse_quote!(Self: ::std::default::Default));
    let model_where = extend_where(&input.generics, &bounds);

    let field_descriptors = mapped.iter().map(|m| {
        let field_ident = m.ident.to_string();
        let ty = &m.field.ty;
        let display_name = m
            .display_name
            .as_ref()
            .map_or_else(|| quote!(None), |name| quote!(Some(#name)));

        quote! {
            ::enumtable::model::FieldDescriptor {
                ident: #field_ident,
                display_name: #display_name,
                data_type: <#ty as ::enumtable::traits::FieldValue>::data_type(),
            }
        }
    });

    let get_arms = mapped.iter().map(|m| {
        let column = &m.column;
        let field_ident = m.ident;

        quote! {
            #column => Some(::enumtable::traits::FieldValue::to_value(&self.#field_ident)),
        }
    });

    let set_arms = mapped.iter().map(|m| {
        let column = &m.column;
        let field_ident = m.ident;

        quote! {
            #column => ::enumtable::__private::assign(&mut self.#field_ident, value),
        }
    });

    Ok(quote! {
        impl #impl_generics ::enumtable::traits::Reflect for #ident #ty_generics #reflect_where {
            fn shape() -> ::enumtable::model::Shape {
                ::enumtable::model::Shape::Record(::enumtable::model::RecordDescriptor {
                    ident: #ident_str,
                    fields: ::std::vec![#(#field_descriptors),*],
                })
            }
        }

        impl #impl_generics ::enumtable::traits::TableModel for #ident #ty_generics #model_where {
            fn get_value(&self, column: &str) -> Option<::enumtable::value::Value> {
                match column {
                    #(#get_arms)*
                    _ => None,
                }
            }

            #[allow(unused_variables)]
            fn set_value(
                &mut self,
                column: &str,
                value: &::enumtable::value::Value,
            ) -> Result<(), ::enumtable::value::ValueConversionError> {
                match column {
                    #(#set_arms)*
                    _ => Ok(()),
                }
            }
        }
    })
}

///
/// FieldAttrs
///

#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    out.name = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `name = \"..\"` or `skip`"))
                }
            })?;
        }

        Ok(out)
    }
}
