use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Expr, Field, Fields, Ident, Result, Type, parse_quote,
    spanned::Spanned,
};

pub(crate) fn expand_from_tokens(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromTokens` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromTokens` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .collect::<Result<Vec<_>>>()?;

    // Generic structs need each self-describing field type bounded.
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in fields.iter().filter(|f| f.decoder.is_none()) {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::loadable::avec::FromTokens));
        }
    }

    // Struct expressions evaluate their fields in the order written, which
    // keeps token consumption in declaration order.
    let assignments = fields.iter().map(|field| {
        let FieldMetadata { name, ty, decoder } = field;

        let value = if let Some(decoder) = decoder {
            quote! {
                ::loadable::sans::Decoder::decode(&(#decoder), cursor)?
            }
        } else {
            quote! {
                <#ty as ::loadable::avec::FromTokens>::from_tokens(cursor)?
            }
        };

        quote! { #name: #value }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::loadable::avec::FromTokens for #name #ty_generics #where_clause {
            fn from_tokens(
                cursor: &mut ::loadable::sans::Cursor<'_>,
            ) -> ::core::result::Result<Self, ::loadable::sans::DecodeError> {
                ::core::result::Result::Ok(Self {
                    #(#assignments,)*
                })
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    ty: Type,
    decoder: Option<Expr>,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Self> {
        let name = field.ident.clone().unwrap();

        let mut attrs = field.attrs.iter().filter(|a| a.path().is_ident("decode"));

        let decoder = match attrs.next() {
            Some(attr) => Some(attr.meta.require_list()?.parse_args::<Expr>()?),
            None => None,
        };

        if let Some(extra) = attrs.next() {
            Err(Error::new_spanned(
                extra,
                "Fields may carry at most one `decode` attribute.",
            ))?
        }

        Ok(Self {
            name,
            ty: field.ty.clone(),
            decoder,
        })
    }
}
