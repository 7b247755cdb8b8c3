// crates/cwmp-rs-derive/src/attrs.rs

//! Parsing of `#[cwmp(...)]` and the relevant part of `#[serde(...)]`.

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitInt, LitStr, Token};

/// Value of an `access = "..."` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessMode {
    #[default]
    ReadOnly,
    ReadWrite,
}

impl AccessMode {
    pub fn is_writable(self) -> bool {
        self == AccessMode::ReadWrite
    }
}

impl ToTokens for AccessMode {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            AccessMode::ReadOnly => quote!(::cwmp_rs::Access::ReadOnly),
            AccessMode::ReadWrite => quote!(::cwmp_rs::Access::ReadWrite),
        });
    }
}

/// Attributes on the struct itself.
pub struct ObjectAttrs {
    pub path: String,
    pub access: AccessMode,
    pub min_entries: u32,
    pub max_entries: Option<u32>,
    pub num_entries: Option<String>,
    pub enable: Option<String>,
    pub unique_keys: Vec<String>,
}

/// Attributes on one field.
#[derive(Default)]
pub struct FieldAttrs {
    pub access: Option<AccessMode>,
    pub notify: Option<TokenStream>,
    pub units: Option<String>,
    pub default: Option<String>,
    pub data_type: Option<String>,
    pub values: Vec<String>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub min_size: Option<usize>,
    pub max_size: Option<usize>,
    pub list: bool,
    pub hidden: bool,
    pub object: bool,
    pub item: Option<String>,
}

fn parse_access(lit: &LitStr) -> syn::Result<AccessMode> {
    match lit.value().as_str() {
        "readOnly" => Ok(AccessMode::ReadOnly),
        "readWrite" => Ok(AccessMode::ReadWrite),
        _ => Err(syn::Error::new_spanned(
            lit,
            "access must be \"readOnly\" or \"readWrite\"",
        )),
    }
}

fn parse_notify(lit: &LitStr) -> syn::Result<TokenStream> {
    match lit.value().as_str() {
        "normal" => Ok(quote!(::cwmp_rs::ActiveNotify::Normal)),
        "canDeny" => Ok(quote!(::cwmp_rs::ActiveNotify::CanDeny)),
        "forceEnabled" => Ok(quote!(::cwmp_rs::ActiveNotify::ForceEnabled)),
        "forceDefaultEnabled" => Ok(quote!(::cwmp_rs::ActiveNotify::ForceDefaultEnabled)),
        _ => Err(syn::Error::new_spanned(
            lit,
            "notify must be one of normal, canDeny, forceEnabled, forceDefaultEnabled",
        )),
    }
}

fn string_value(meta: &ParseNestedMeta<'_>) -> syn::Result<LitStr> {
    meta.value()?.parse()
}

/// Parses `= 12` or `= -1`.
fn signed_value(meta: &ParseNestedMeta<'_>) -> syn::Result<i64> {
    let input = meta.value()?;
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let lit: LitInt = input.parse()?;
    let value: i64 = lit.base10_parse()?;
    Ok(if negative { -value } else { value })
}

fn unsigned_value<T>(meta: &ParseNestedMeta<'_>) -> syn::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let lit: LitInt = meta.value()?.parse()?;
    lit.base10_parse()
}

pub fn parse_object_attrs(attrs: &[Attribute]) -> syn::Result<ObjectAttrs> {
    let mut path = None;
    let mut object = ObjectAttrs {
        path: String::new(),
        access: AccessMode::ReadOnly,
        min_entries: 1,
        max_entries: Some(1),
        num_entries: None,
        enable: None,
        unique_keys: Vec::new(),
    };
    let mut explicit_min = false;
    let mut explicit_max = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("cwmp")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("path") {
                path = Some(string_value(&meta)?);
            } else if meta.path.is_ident("access") {
                object.access = parse_access(&string_value(&meta)?)?;
            } else if meta.path.is_ident("min_entries") {
                object.min_entries = unsigned_value(&meta)?;
                explicit_min = true;
            } else if meta.path.is_ident("max_entries") {
                object.max_entries = Some(unsigned_value(&meta)?);
                explicit_max = true;
            } else if meta.path.is_ident("num_entries") {
                object.num_entries = Some(string_value(&meta)?.value());
            } else if meta.path.is_ident("enable") {
                object.enable = Some(string_value(&meta)?.value());
            } else if meta.path.is_ident("unique_key") {
                object.unique_keys.push(string_value(&meta)?.value());
            } else {
                return Err(meta.error("unknown cwmp object attribute"));
            }
            Ok(())
        })?;
    }

    let path = path.ok_or_else(|| {
        syn::Error::new(
            Span::call_site(),
            "CwmpObject requires #[cwmp(path = \"...\")] on the struct",
        )
    })?;
    object.path = path.value();
    if !object.path.ends_with('.') {
        return Err(syn::Error::new_spanned(
            path,
            "cwmp object path must end with '.'",
        ));
    }
    // Tables default to 0..unbounded.
    if object.path.ends_with(".{i}.") {
        if !explicit_min {
            object.min_entries = 0;
        }
        if !explicit_max {
            object.max_entries = None;
        }
    }
    Ok(object)
}

pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut field = FieldAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("cwmp")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("access") {
                field.access = Some(parse_access(&string_value(&meta)?)?);
            } else if meta.path.is_ident("notify") {
                field.notify = Some(parse_notify(&string_value(&meta)?)?);
            } else if meta.path.is_ident("units") {
                field.units = Some(string_value(&meta)?.value());
            } else if meta.path.is_ident("default") {
                field.default = Some(string_value(&meta)?.value());
            } else if meta.path.is_ident("data_type") {
                field.data_type = Some(string_value(&meta)?.value());
            } else if meta.path.is_ident("values") {
                field.values = string_value(&meta)?
                    .value()
                    .split('|')
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect();
            } else if meta.path.is_ident("min") {
                field.min = Some(signed_value(&meta)?);
            } else if meta.path.is_ident("max") {
                field.max = Some(signed_value(&meta)?);
            } else if meta.path.is_ident("min_size") {
                field.min_size = Some(unsigned_value(&meta)?);
            } else if meta.path.is_ident("max_size") {
                field.max_size = Some(unsigned_value(&meta)?);
            } else if meta.path.is_ident("list") {
                field.list = true;
            } else if meta.path.is_ident("hidden") {
                field.hidden = true;
            } else if meta.path.is_ident("object") {
                field.object = true;
            } else if meta.path.is_ident("item") {
                field.item = Some(string_value(&meta)?.value());
            } else {
                return Err(meta.error("unknown cwmp field attribute"));
            }
            Ok(())
        })?;
    }
    Ok(field)
}

/// Reads `rename = "..."` out of the field's `#[serde(...)]` attributes.
/// Every other serde key is skipped.
pub fn serde_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                rename = Some(string_value(&meta)?.value());
            } else if meta.input.peek(Token![=]) {
                let _: syn::Lit = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream = content.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(rename)
}

#[cfg(test)]
mod tests {
    use super::{AccessMode, parse_field_attrs};
    use syn::parse_quote;

    #[test]
    fn test_field_access_is_recorded() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[cwmp(access = "readWrite")])];
        let field = parse_field_attrs(&attrs).unwrap();
        assert_eq!(field.access, Some(AccessMode::ReadWrite));
        assert!(field.access.is_some_and(AccessMode::is_writable));

        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[cwmp(access = "readOnly", hidden)])];
        let field = parse_field_attrs(&attrs).unwrap();
        assert_eq!(field.access, Some(AccessMode::ReadOnly));
        assert!(!field.access.is_some_and(AccessMode::is_writable));

        let field = parse_field_attrs(&[]).unwrap();
        assert_eq!(field.access, None);
    }

    #[test]
    fn test_unknown_access_is_rejected() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[cwmp(access = "writeOnly")])];
        let err = parse_field_attrs(&attrs).err().unwrap();
        assert_eq!(err.to_string(), "access must be \"readOnly\" or \"readWrite\"");
    }
}
