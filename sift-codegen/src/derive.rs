//! Implementation of the `#[derive(Record)]` macro.

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Path, Type};

/// Parse and generate code for the `#[derive(Record)]` macro.
pub fn derive_record_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record derive does not support generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record derive only supports structs",
            ));
        }
    };

    let struct_attrs = parse_struct_attrs(input)?;
    let krate = struct_attrs
        .krate
        .unwrap_or_else(|| syn::parse_quote!(::sift));
    let type_name = name.unraw().to_string();

    let mut field_infos = Vec::with_capacity(fields.len());
    for field in fields {
        if let Some(info) = parse_field(field)? {
            field_infos.push(info);
        }
    }

    let keys = field_infos.iter().enumerate().map(|(index, f)| {
        let const_name = &f.const_name;
        let field_name = &f.field_name;
        let doc = format!("Selects the `{}` field.", field_name);
        quote! {
            #[doc = #doc]
            pub const #const_name: #krate::FieldKey<#name> = #krate::FieldKey::new(#index, #field_name);
        }
    });

    let entries = field_infos.iter().map(|f| {
        let ident = &f.ident;
        let field_name = &f.field_name;
        let ty = &f.ty;
        quote! {
            #krate::Field::of::<#ty>(#field_name, |record: &#name| {
                #krate::FieldKind::to_field_value(&record.#ident)
            })
        }
    });

    Ok(quote! {
        impl #name {
            #(#keys)*
        }

        impl #krate::Record for #name {
            const TYPE_NAME: &'static str = #type_name;

            fn fields() -> &'static #krate::FieldSet<Self> {
                static FIELDS: ::std::sync::OnceLock<#krate::FieldSet<#name>> =
                    ::std::sync::OnceLock::new();
                FIELDS.get_or_init(|| #krate::FieldSet::new([#(#entries),*]))
            }
        }
    })
}

/// Struct-level attributes parsed from `#[sift(...)]`.
#[derive(Debug, Default)]
struct StructAttrs {
    krate: Option<Path>,
}

fn parse_struct_attrs(input: &DeriveInput) -> Result<StructAttrs, syn::Error> {
    let mut attrs = StructAttrs::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("sift") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                attrs.krate = Some(value.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported sift attribute, expected `crate`"))
            }
        })?;
    }

    Ok(attrs)
}

/// A field that takes part in filtering.
#[derive(Debug)]
struct FieldInfo {
    ident: Ident,
    ty: Type,
    field_name: String,
    const_name: Ident,
}

/// Parse a field and its `#[sift(...)]` attributes; `None` when skipped.
fn parse_field(field: &syn::Field) -> Result<Option<FieldInfo>, syn::Error> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "Fields must be named"))?;

    let mut field_name = ident.unraw().to_string();
    let mut skip = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("sift") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(syn::Error::new_spanned(value, "field name cannot be empty"));
                }
                field_name = value.value();
                Ok(())
            } else {
                Err(meta.error("unsupported sift attribute, expected `skip` or `rename`"))
            }
        })?;
    }

    if skip {
        return Ok(None);
    }

    let const_name = format_ident!("{}", ident.unraw().to_string().to_case(Case::UpperSnake));

    Ok(Some(FieldInfo {
        ident,
        ty: field.ty.clone(),
        field_name,
        const_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        derive_record_impl(&input).unwrap().to_string()
    }

    #[test]
    fn test_simple_record() {
        let code = expand(parse_quote! {
            struct Person {
                name: String,
                age: i32,
                email: Option<String>,
            }
        });

        assert!(code.contains("impl :: sift :: Record for Person"));
        assert!(code.contains("const TYPE_NAME : & 'static str = \"Person\""));
        assert!(code.contains("pub const NAME : :: sift :: FieldKey < Person > = :: sift :: FieldKey :: new (0usize , \"name\")"));
        assert!(code.contains("pub const AGE"));
        assert!(code.contains("pub const EMAIL"));
        assert!(code.contains("Field :: of :: < Option < String > > (\"email\""));
    }

    #[test]
    fn test_rename_and_skip() {
        let code = expand(parse_quote! {
            struct Order {
                #[sift(rename = "OrderNumber")]
                number: String,
                #[sift(skip)]
                lines: Vec<String>,
                total_cents: i64,
            }
        });

        assert!(code.contains("FieldKey :: new (0usize , \"OrderNumber\")"));
        assert!(code.contains("pub const TOTAL_CENTS : :: sift :: FieldKey < Order > = :: sift :: FieldKey :: new (1usize , \"total_cents\")"));
        assert!(!code.contains("LINES"));
        assert!(!code.contains("Vec"));
    }

    #[test]
    fn test_crate_path() {
        let code = expand(parse_quote! {
            #[sift(crate = "sift_query")]
            struct Tag {
                label: String,
            }
        });

        assert!(code.contains("impl sift_query :: Record for Tag"));
        assert!(!code.contains(":: sift ::"));
    }

    #[test]
    fn test_raw_identifier() {
        let code = expand(parse_quote! {
            struct Item {
                r#type: String,
            }
        });

        assert!(code.contains("pub const TYPE"));
        assert!(code.contains("\"type\""));
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            struct Pair(i32, i32);
        };
        let err = derive_record_impl(&input).unwrap_err();
        assert_eq!(err.to_string(), "Record derive only supports structs with named fields");
    }

    #[test]
    fn test_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            enum Status { Active, Inactive }
        };
        assert!(derive_record_impl(&input).is_err());
    }

    #[test]
    fn test_rejects_generics() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> {
                inner: T,
            }
        };
        let err = derive_record_impl(&input).unwrap_err();
        assert_eq!(err.to_string(), "Record derive does not support generic structs");
    }

    #[test]
    fn test_rejects_unknown_attribute() {
        let input: DeriveInput = parse_quote! {
            struct Person {
                #[sift(column = "n")]
                name: String,
            }
        };
        assert!(derive_record_impl(&input).is_err());
    }

    #[test]
    fn test_rejects_empty_rename() {
        let input: DeriveInput = parse_quote! {
            struct Person {
                #[sift(rename = "")]
                name: String,
            }
        };
        assert!(derive_record_impl(&input).is_err());
    }
}
