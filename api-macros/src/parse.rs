//! Parsing of `#[operation(...)]` attributes.
//!
//! The struct-level attribute describes the endpoint (method, path template,
//! output type, status table); field-level attributes say where each field
//! goes in the request.

use proc_macro2::Span;
use syn::{
    punctuated::Punctuated, spanned::Spanned, Attribute, Error, Field, Ident, LitInt, LitStr,
    Result, Token, Type,
};

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parse from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "Get" | "GET" | "get" => Ok(HttpMethod::Get),
            "Post" | "POST" | "post" => Ok(HttpMethod::Post),
            "Put" | "PUT" | "put" => Ok(HttpMethod::Put),
            "Patch" | "PATCH" | "patch" => Ok(HttpMethod::Patch),
            "Delete" | "DELETE" | "delete" => Ok(HttpMethod::Delete),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown HTTP method: `{}`. Expected one of: Get, Post, Put, Patch, Delete",
                    other
                ),
            )),
        }
    }
}

/// Parsed endpoint configuration from the struct's `#[operation(...)]`.
#[derive(Debug)]
pub struct OperationConfig {
    /// Explicit operation id; defaults to the snake_cased struct name.
    pub id: Option<String>,
    pub method: HttpMethod,
    /// Path template such as `/payments/{payment_id}`.
    pub path: String,
    /// Type of the typed response body; `()` when absent.
    pub output: Option<Type>,
    /// Statuses whose body is parsed into `output`.
    pub typed: Vec<u16>,
    /// Documented statuses without a body schema.
    pub empty: Vec<u16>,
    pub span: Span,
}

impl OperationConfig {
    /// Parse the endpoint configuration from struct attributes.
    pub fn from_attrs(attrs: &[Attribute], span: Span) -> Result<Self> {
        let mut id: Option<String> = None;
        let mut method: Option<HttpMethod> = None;
        let mut path: Option<String> = None;
        let mut output: Option<Type> = None;
        let mut typed: Option<Vec<u16>> = None;
        let mut empty: Option<Vec<u16>> = None;
        let mut attr_span: Option<Span> = None;

        for attr in attrs {
            if !attr.path().is_ident("operation") {
                continue;
            }
            attr_span = Some(attr.span());
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    let value: LitStr = meta.value()?.parse()?;
                    id = Some(value.value());
                } else if meta.path.is_ident("method") {
                    let value: Ident = meta.value()?.parse()?;
                    method = Some(HttpMethod::from_ident(&value)?);
                } else if meta.path.is_ident("path") {
                    let value: LitStr = meta.value()?.parse()?;
                    path = Some(value.value());
                } else if meta.path.is_ident("output") {
                    output = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("typed") {
                    typed = Some(parse_statuses(&meta)?);
                } else if meta.path.is_ident("empty") {
                    empty = Some(parse_statuses(&meta)?);
                } else {
                    return Err(meta.error(format!(
                        "unknown operation attribute: `{}`",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        let span = attr_span.unwrap_or(span);
        let method = method.ok_or_else(|| {
            Error::new(span, "missing `method` in #[operation(...)]")
        })?;
        let path = path.ok_or_else(|| Error::new(span, "missing `path` in #[operation(...)]"))?;

        let (typed, empty) = match (typed, empty) {
            (None, None) if output.is_some() => (vec![200], Vec::new()),
            (None, None) => (Vec::new(), vec![200]),
            (typed, empty) => (typed.unwrap_or_default(), empty.unwrap_or_default()),
        };

        if !typed.is_empty() && output.is_none() {
            return Err(Error::new(span, "typed statuses need an `output` type"));
        }
        if let Some(code) = typed.iter().find(|code| empty.contains(code)) {
            return Err(Error::new(
                span,
                format!("status {} is listed as both typed and empty", code),
            ));
        }

        Ok(OperationConfig {
            id,
            method,
            path,
            output,
            typed,
            empty,
            span,
        })
    }

    /// Extract path parameters from the path template.
    ///
    /// For example, `/api_keys/{merchant_id}/{key_id}` returns
    /// `["merchant_id", "key_id"]`.
    pub fn path_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        let mut in_param = false;
        let mut current_param = String::new();

        for ch in self.path.chars() {
            match ch {
                '{' => {
                    in_param = true;
                    current_param.clear();
                }
                '}' => {
                    if in_param && !current_param.is_empty() {
                        params.push(current_param.clone());
                    }
                    in_param = false;
                }
                _ if in_param => {
                    current_param.push(ch);
                }
                _ => {}
            }
        }

        params
    }

    /// Every documented status, typed first.
    pub fn statuses(&self) -> Vec<u16> {
        self.typed.iter().chain(&self.empty).copied().collect()
    }
}

fn parse_statuses(meta: &syn::meta::ParseNestedMeta) -> Result<Vec<u16>> {
    let content;
    syn::parenthesized!(content in meta.input);
    let codes = Punctuated::<LitInt, Token![,]>::parse_terminated(&content)?;
    codes
        .iter()
        .map(|lit| {
            let code: u16 = lit.base10_parse()?;
            if !(100..=599).contains(&code) {
                return Err(Error::new(lit.span(), "not an HTTP status code"));
            }
            Ok(code)
        })
        .collect()
}

/// Where a field goes in the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRole {
    /// Substituted into `{name}` in the path template.
    Path(String),
    /// Query parameter `name`.
    Query(String),
    /// Header `name`.
    Header(String),
    /// JSON request body.
    Body,
}

/// How a field's type encodes presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Plain,
    /// `Option<T>`: `None` is omitted.
    Option,
    /// `Field<T>`: `Unset` and `Null` are omitted.
    Field,
}

impl ValueKind {
    pub fn of(ty: &Type) -> Self {
        let Type::Path(type_path) = ty else {
            return ValueKind::Plain;
        };
        match type_path.path.segments.last() {
            Some(segment) if segment.ident == "Option" => ValueKind::Option,
            Some(segment) if segment.ident == "Field" => ValueKind::Field,
            _ => ValueKind::Plain,
        }
    }
}

/// One annotated struct field.
#[derive(Debug)]
pub struct OperationField {
    pub ident: Ident,
    pub role: FieldRole,
    pub kind: ValueKind,
}

impl OperationField {
    /// Parse the `#[operation(...)]` attribute of a named field.
    pub fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "operation structs need named fields"))?;
        let default_name = ident.to_string();
        let mut role: Option<FieldRole> = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("operation") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let next = if meta.path.is_ident("path") {
                    FieldRole::Path(optional_name(&meta)?.unwrap_or_else(|| default_name.clone()))
                } else if meta.path.is_ident("query") {
                    FieldRole::Query(optional_name(&meta)?.unwrap_or_else(|| default_name.clone()))
                } else if meta.path.is_ident("header") {
                    let name: LitStr = meta.value()?.parse()?;
                    FieldRole::Header(name.value())
                } else if meta.path.is_ident("body") {
                    FieldRole::Body
                } else {
                    return Err(meta.error("expected one of: path, query, header, body"));
                };
                if role.replace(next).is_some() {
                    return Err(meta.error("a field can only have one role"));
                }
                Ok(())
            })?;
        }

        let role = role.ok_or_else(|| {
            Error::new(
                ident.span(),
                format!(
                    "field `{}` needs #[operation(path | query | header = \"..\" | body)]",
                    ident
                ),
            )
        })?;
        let kind = ValueKind::of(&field.ty);

        match (&role, kind) {
            (FieldRole::Path(_), ValueKind::Option | ValueKind::Field) => Err(Error::new(
                field.ty.span(),
                "path parameters are required and cannot be Option or Field",
            )),
            (FieldRole::Header(_), ValueKind::Field) => Err(Error::new(
                field.ty.span(),
                "header parameters must be a plain value or Option",
            )),
            (FieldRole::Body, ValueKind::Field) => Err(Error::new(
                field.ty.span(),
                "request bodies must be a plain value or Option",
            )),
            _ => Ok(OperationField { ident, role, kind }),
        }
    }
}

fn optional_name(meta: &syn::meta::ParseNestedMeta) -> Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let value: LitStr = meta.value()?.parse()?;
        Ok(Some(value.value()))
    } else {
        Ok(None)
    }
}
