// crates/cwmp-rs-derive/src/expand.rs

use crate::attrs::{
    AccessMode, FieldAttrs, ObjectAttrs, parse_field_attrs, parse_object_attrs, serde_rename,
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, GenericArgument, Ident, PathArguments, Type};

enum FieldKind {
    /// `Option<T>` leaf parameter.
    Parameter,
    /// `Option<T>` single child object.
    Object,
    /// `Vec<T>` table of child objects.
    Table { item: Ident },
}

struct FieldMeta<'a> {
    ident: &'a Ident,
    /// CWMP / XML name from `#[serde(rename)]`.
    name: String,
    /// Type inside `Option<..>` or `Vec<..>`.
    inner: &'a Type,
    kind: FieldKind,
    attrs: FieldAttrs,
}

pub fn expand_derive(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "CwmpObject cannot be derived for generic types",
        ));
    }
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "CwmpObject can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            name,
            "CwmpObject requires a struct with named fields",
        ));
    };

    let object = parse_object_attrs(&input.attrs)?;
    let fields = named
        .named
        .iter()
        .map(parse_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let info_fn = generate_info(&object, &fields);
    let visit_fn = generate_visit(&fields);
    let set_fn = generate_set_parameter(&fields);
    let accessors = generate_accessors(&fields);
    let path = &object.path;

    Ok(quote! {
        #[automatically_derived]
        impl #name {
            /// Template path of this object in the data model.
            pub const PATH: &'static str = #path;

            #(#accessors)*
        }

        #[automatically_derived]
        impl ::cwmp_rs::CwmpObject for #name {
            #info_fn
            #visit_fn
            #set_fn
        }
    })
}

fn parse_field(field: &syn::Field) -> syn::Result<FieldMeta<'_>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let attrs = parse_field_attrs(&field.attrs)?;
    let name = serde_rename(&field.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(
            ident,
            "CwmpObject fields need #[serde(rename = \"...\")] carrying the CWMP name",
        )
    })?;

    let (inner, kind) = if let Some(inner) = generic_inner(&field.ty, "Option") {
        let kind = if attrs.object {
            FieldKind::Object
        } else {
            FieldKind::Parameter
        };
        (inner, kind)
    } else if let Some(inner) = generic_inner(&field.ty, "Vec") {
        if !attrs.object {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "Vec fields are tables and need #[cwmp(object)]",
            ));
        }
        let field_name = ident.to_string();
        let item = attrs.item.clone().unwrap_or_else(|| singular(&field_name));
        if item == field_name {
            return Err(syn::Error::new_spanned(
                ident,
                "cannot derive a singular name for this table, add #[cwmp(item = \"...\")]",
            ));
        }
        (inner, FieldKind::Table {
            item: format_ident!("{}", item),
        })
    } else {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "CwmpObject fields must be Option<T> or Vec<T>",
        ));
    };

    Ok(FieldMeta {
        ident,
        name,
        inner,
        kind,
        attrs,
    })
}

/// Returns `T` for `Wrapper<T>`.
fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Plain-English singular of a snake_case table field name.
fn singular(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{}y", stem)
    } else if ["sses", "xes", "ches", "shes"]
        .iter()
        .any(|suffix| name.ends_with(suffix))
    {
        name[..name.len() - 2].to_string()
    } else if let Some(stem) = name.strip_suffix('s') {
        stem.to_string()
    } else {
        name.to_string()
    }
}

/// Primitive types are taken by value so integer literals infer correctly.
fn is_primitive(ty: &Type) -> bool {
    const PRIMITIVES: [&str; 11] = [
        "bool", "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64", "usize", "isize",
    ];
    match ty {
        Type::Path(type_path) => type_path
            .path
            .get_ident()
            .is_some_and(|ident| PRIMITIVES.iter().any(|p| ident == p)),
        _ => false,
    }
}

fn opt_str(value: Option<&String>) -> TokenStream {
    match value {
        Some(v) => quote!(::core::option::Option::Some(#v)),
        None => quote!(::core::option::Option::None),
    }
}

fn generate_info(object: &ObjectAttrs, fields: &[FieldMeta<'_>]) -> TokenStream {
    let parameters: Vec<TokenStream> = fields
        .iter()
        .filter(|f| matches!(f.kind, FieldKind::Parameter))
        .map(parameter_info)
        .collect();
    let parameter_count = parameters.len();

    let children: Vec<TokenStream> = fields
        .iter()
        .filter_map(|f| {
            let multi = match f.kind {
                FieldKind::Parameter => return None,
                FieldKind::Object => false,
                FieldKind::Table { .. } => true,
            };
            let name = &f.name;
            let inner = f.inner;
            Some(quote! {
                ::cwmp_rs::ChildInfo {
                    name: #name,
                    multi_instance: #multi,
                    info: <#inner as ::cwmp_rs::CwmpObject>::info,
                }
            })
        })
        .collect();
    let child_count = children.len();

    let path = &object.path;
    let access = &object.access;
    let min_entries = object.min_entries;
    let max_entries = match object.max_entries {
        Some(max) => quote!(::core::option::Option::Some(#max)),
        None => quote!(::core::option::Option::None),
    };
    let num_entries = opt_str(object.num_entries.as_ref());
    let enable = opt_str(object.enable.as_ref());
    let unique_keys = &object.unique_keys;

    quote! {
        fn info() -> &'static ::cwmp_rs::ObjectInfo {
            static PARAMETERS: [::cwmp_rs::ParameterInfo; #parameter_count] = [#(#parameters),*];
            static CHILDREN: [::cwmp_rs::ChildInfo; #child_count] = [#(#children),*];
            static INFO: ::cwmp_rs::ObjectInfo = ::cwmp_rs::ObjectInfo {
                path: #path,
                access: #access,
                min_entries: #min_entries,
                max_entries: #max_entries,
                num_entries_parameter: #num_entries,
                enable_parameter: #enable,
                unique_keys: &[#(#unique_keys),*],
                parameters: &PARAMETERS,
                children: &CHILDREN,
            };
            &INFO
        }
    }
}

fn parameter_info(field: &FieldMeta<'_>) -> TokenStream {
    let name = &field.name;
    let inner = field.inner;
    let attrs = &field.attrs;
    let data_type = match &attrs.data_type {
        Some(dt) => quote!(::core::option::Option::Some(#dt)),
        None => quote!(<#inner as ::cwmp_rs::ParameterType>::DATA_TYPE),
    };
    let access = attrs.access.unwrap_or_default();
    let notify = attrs
        .notify
        .clone()
        .unwrap_or_else(|| quote!(::cwmp_rs::ActiveNotify::Normal));
    let units = opt_str(attrs.units.as_ref());
    let default_value = opt_str(attrs.default.as_ref());
    let size = if attrs.min_size.is_some() || attrs.max_size.is_some() {
        let min = option_tokens(attrs.min_size);
        let max = option_tokens(attrs.max_size);
        quote!(::core::option::Option::Some(::cwmp_rs::SizeRange { min: #min, max: #max }))
    } else {
        quote!(::core::option::Option::None)
    };
    let range = if attrs.min.is_some() || attrs.max.is_some() {
        let min = option_tokens(attrs.min);
        let max = option_tokens(attrs.max);
        quote!(::core::option::Option::Some(::cwmp_rs::Range { min: #min, max: #max }))
    } else {
        quote!(::core::option::Option::None)
    };
    let values = &attrs.values;
    let list = attrs.list;
    let hidden = attrs.hidden;

    quote! {
        ::cwmp_rs::ParameterInfo {
            name: #name,
            kind: <#inner as ::cwmp_rs::ParameterType>::KIND,
            data_type: #data_type,
            access: #access,
            notify: #notify,
            units: #units,
            size: #size,
            range: #range,
            values: &[#(#values),*],
            default_value: #default_value,
            list: #list,
            hidden: #hidden,
        }
    }
}

fn option_tokens<T: quote::ToTokens>(value: Option<T>) -> TokenStream {
    match value {
        Some(v) => quote!(::core::option::Option::Some(#v)),
        None => quote!(::core::option::Option::None),
    }
}

fn generate_visit(fields: &[FieldMeta<'_>]) -> TokenStream {
    let mut parameter_index = 0usize;
    let steps = fields.iter().map(|f| {
        let ident = f.ident;
        let name = &f.name;
        let inner = f.inner;
        match &f.kind {
            FieldKind::Parameter => {
                let index = parameter_index;
                parameter_index += 1;
                let value = if f.attrs.hidden {
                    quote!(self.#ident.as_ref().map(|_| ::std::string::String::new()))
                } else {
                    quote!(self.#ident.as_ref().map(<#inner as ::cwmp_rs::ParameterType>::to_cwmp_string))
                };
                quote! {
                    visitor.visit_parameter(
                        &::std::format!("{}{}", path, #name),
                        &info.parameters[#index],
                        #value,
                    );
                }
            }
            FieldKind::Object => quote! {
                if let ::core::option::Option::Some(child) = &self.#ident {
                    let child_path = ::std::format!("{}{}.", path, #name);
                    ::cwmp_rs::CwmpObject::visit(child, &child_path, visitor);
                }
            },
            FieldKind::Table { .. } => quote! {
                for (index, child) in self.#ident.iter().enumerate() {
                    let child_path = ::std::format!("{}{}.{}.", path, #name, index + 1);
                    ::cwmp_rs::CwmpObject::visit(child, &child_path, visitor);
                }
            },
        }
    });
    let steps: Vec<TokenStream> = steps.collect();

    quote! {
        fn visit(&self, path: &str, visitor: &mut dyn ::cwmp_rs::ParameterVisitor) {
            let info = <Self as ::cwmp_rs::CwmpObject>::info();
            visitor.visit_object(path, info);
            #(#steps)*
        }
    }
}

fn generate_set_parameter(fields: &[FieldMeta<'_>]) -> TokenStream {
    let arms = fields.iter().map(|f| {
        let ident = f.ident;
        let name = &f.name;
        let inner = f.inner;
        match &f.kind {
            FieldKind::Parameter => {
                if f.attrs.access.is_some_and(AccessMode::is_writable) {
                    quote! {
                        (#name, ::core::option::Option::None) => {
                            self.#ident = ::core::option::Option::Some(
                                <#inner as ::cwmp_rs::ParameterType>::from_cwmp_str(value)?,
                            );
                            ::core::result::Result::Ok(())
                        }
                    }
                } else {
                    quote! {
                        (#name, ::core::option::Option::None) => ::core::result::Result::Err(
                            ::cwmp_rs::CwmpError::NotWritable(::std::string::ToString::to_string(path)),
                        ),
                    }
                }
            }
            // A missing child is only attached once the write below it succeeds.
            FieldKind::Object => quote! {
                (#name, ::core::option::Option::Some(rest)) => match &mut self.#ident {
                    ::core::option::Option::Some(child) => {
                        ::cwmp_rs::CwmpObject::set_parameter_value(child, rest, value)
                    }
                    ::core::option::Option::None => {
                        let mut child: #inner = ::core::default::Default::default();
                        ::cwmp_rs::CwmpObject::set_parameter_value(&mut child, rest, value)?;
                        self.#ident = ::core::option::Option::Some(child);
                        ::core::result::Result::Ok(())
                    }
                },
            },
            FieldKind::Table { .. } => quote! {
                (#name, rest @ ::core::option::Option::Some(_)) => {
                    let (instance, tail) = ::cwmp_rs::path::instance_segment(head, rest)?;
                    let entry = self
                        .#ident
                        .get_mut((instance - 1) as usize)
                        .ok_or_else(|| ::cwmp_rs::CwmpError::NoSuchInstance {
                            object: ::std::string::ToString::to_string(head),
                            instance,
                        })?;
                    ::cwmp_rs::CwmpObject::set_parameter_value(entry, tail, value)
                }
            },
        }
    });
    let arms: Vec<TokenStream> = arms.collect();

    quote! {
        #[allow(unused_variables)]
        fn set_parameter_value(
            &mut self,
            path: &str,
            value: &str,
        ) -> ::core::result::Result<(), ::cwmp_rs::CwmpError> {
            let (head, rest) = ::cwmp_rs::path::next_segment(path);
            match (head, rest) {
                #(#arms)*
                (_, ::core::option::Option::None) => ::core::result::Result::Err(
                    ::cwmp_rs::CwmpError::UnknownParameter(::std::string::ToString::to_string(path)),
                ),
                (_, ::core::option::Option::Some(_)) => ::core::result::Result::Err(
                    ::cwmp_rs::CwmpError::UnknownObject(::std::string::ToString::to_string(head)),
                ),
            }
        }
    }
}

fn generate_accessors(fields: &[FieldMeta<'_>]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f| {
            let ident = f.ident;
            let inner = f.inner;
            let name = &f.name;
            let setter = format_ident!("set_{}", ident);
            let builder = format_ident!("with_{}", ident);
            match &f.kind {
                FieldKind::Parameter => {
                    let set_doc = format!("Sets `{}`.", name);
                    let with_doc = format!("Sets `{}` and returns `self`.", name);
                    let (param, convert) = if is_primitive(inner) {
                        (quote!(value: #inner), quote!(value))
                    } else {
                        (
                            quote!(value: impl ::core::convert::Into<#inner>),
                            quote!(::core::convert::Into::into(value)),
                        )
                    };
                    quote! {
                        #[doc = #set_doc]
                        pub fn #setter(&mut self, #param) {
                            self.#ident = ::core::option::Option::Some(#convert);
                        }

                        #[doc = #with_doc]
                        #[must_use]
                        pub fn #builder(mut self, #param) -> Self {
                            self.#ident = ::core::option::Option::Some(#convert);
                            self
                        }
                    }
                }
                FieldKind::Object => {
                    let getter_mut = format_ident!("{}_mut", ident);
                    let mut_doc = format!("Returns `{}`, creating it if absent.", name);
                    quote! {
                        pub fn #setter(&mut self, value: #inner) {
                            self.#ident = ::core::option::Option::Some(value);
                        }

                        #[must_use]
                        pub fn #builder(mut self, value: #inner) -> Self {
                            self.#ident = ::core::option::Option::Some(value);
                            self
                        }

                        #[doc = #mut_doc]
                        pub fn #getter_mut(&mut self) -> &mut #inner {
                            self.#ident.get_or_insert_with(::core::default::Default::default)
                        }
                    }
                }
                FieldKind::Table { item } => {
                    let with_item = format_ident!("with_{}", item);
                    let add_item = format_ident!("add_{}", item);
                    let add_doc = format!(
                        "Appends a `{}` entry and returns its instance number.",
                        name
                    );
                    quote! {
                        pub fn #setter(&mut self, value: ::std::vec::Vec<#inner>) {
                            self.#ident = value;
                        }

                        #[must_use]
                        pub fn #builder(mut self, value: ::std::vec::Vec<#inner>) -> Self {
                            self.#ident = value;
                            self
                        }

                        #[must_use]
                        pub fn #with_item(mut self, value: #inner) -> Self {
                            self.#ident.push(value);
                            self
                        }

                        #[doc = #add_doc]
                        pub fn #add_item(&mut self, value: #inner) -> u32 {
                            self.#ident.push(value);
                            self.#ident.len() as u32
                        }
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::singular;

    #[test]
    fn test_singular_forms() {
        assert_eq!(singular("static_addresses"), "static_address");
        assert_eq!(singular("clients"), "client");
        assert_eq!(singular("lines"), "line");
        assert_eq!(singular("entries"), "entry");
        assert_eq!(singular("list"), "list");
    }
}
