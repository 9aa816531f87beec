//! Code generation for `#[derive(Operation)]`.
//!
//! Generated code refers to the runtime crate by its absolute path
//! `::hyperswitch_api`, so deriving crates must depend on it directly.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Result};

use crate::parse::{FieldRole, HttpMethod, OperationConfig, OperationField, ValueKind};

/// Expands a derive input into an `Operation` impl.
pub fn expand_operation(input: &DeriveInput) -> Result<TokenStream> {
    let config = OperationConfig::from_attrs(&input.attrs, input.ident.span())?;
    let fields = operation_fields(input)?;
    check_path_params(&config, &fields)?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let id = config
        .id
        .clone()
        .unwrap_or_else(|| to_snake_case(&name.to_string()));
    let output = match &config.output {
        Some(ty) => quote! { #ty },
        None => quote! { () },
    };
    let statuses = config.statuses();
    let build_request = build_request_body(&config, &fields);
    let parse_response = parse_response_fn(&config);

    Ok(quote! {
        impl #impl_generics ::hyperswitch_api::Operation for #name #ty_generics #where_clause {
            type Output = #output;
            const ID: &'static str = #id;
            const STATUSES: &'static [u16] = &[#(#statuses),*];

            fn build_request(
                &self,
            ) -> ::std::result::Result<
                ::hyperswitch_api::HttpRequest,
                ::hyperswitch_api::ApiError,
            > {
                #build_request
            }

            #parse_response
        }
    })
}

fn operation_fields(input: &DeriveInput) -> Result<Vec<OperationField>> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new(
            input.ident.span(),
            "Operation can only be derived for structs",
        ));
    };

    let fields: Vec<OperationField> = match &data.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(OperationField::from_field)
            .collect::<Result<_>>()?,
        Fields::Unit => Vec::new(),
        Fields::Unnamed(unnamed) => {
            return Err(Error::new_spanned(
                unnamed,
                "operation structs need named fields",
            ));
        }
    };

    let bodies = fields.iter().filter(|f| f.role == FieldRole::Body).count();
    if bodies > 1 {
        return Err(Error::new(
            input.ident.span(),
            "an operation has at most one #[operation(body)] field",
        ));
    }

    Ok(fields)
}

/// Every `{param}` in the template needs exactly one path field, and every
/// path field needs a placeholder.
fn check_path_params(config: &OperationConfig, fields: &[OperationField]) -> Result<()> {
    let params = config.path_params();

    for field in fields {
        if let FieldRole::Path(name) = &field.role {
            if !params.contains(name) {
                return Err(Error::new(
                    field.ident.span(),
                    format!("`{}` has no parameter named {{{}}}", config.path, name),
                ));
            }
        }
    }

    for param in &params {
        let provided = fields
            .iter()
            .filter(|f| matches!(&f.role, FieldRole::Path(name) if name == param))
            .count();
        if provided != 1 {
            return Err(Error::new(
                config.span,
                format!(
                    "path parameter {{{}}} needs exactly one #[operation(path)] field",
                    param
                ),
            ));
        }
    }

    Ok(())
}

fn build_request_body(config: &OperationConfig, fields: &[OperationField]) -> TokenStream {
    let method = http_method_ident(config.method);
    let path = &config.path;
    let steps = fields.iter().map(request_step);

    quote! {
        let request = ::hyperswitch_api::HttpRequest::builder(
            ::hyperswitch_api::RestMethod::#method,
            #path,
        );
        #(#steps)*
        request.build()
    }
}

/// One builder step, rebinding `request`.
fn request_step(field: &OperationField) -> TokenStream {
    let ident = &field.ident;

    match (&field.role, field.kind) {
        (FieldRole::Path(name), _) => quote! {
            let request = request.path_param(#name, &self.#ident);
        },
        (FieldRole::Query(name), ValueKind::Plain) => quote! {
            let request = request.query(#name, &self.#ident);
        },
        (FieldRole::Query(name), ValueKind::Option) => quote! {
            let request = request.query_opt(#name, self.#ident.as_ref());
        },
        (FieldRole::Query(name), ValueKind::Field) => quote! {
            let request = request.query_field(#name, &self.#ident);
        },
        (FieldRole::Header(name), ValueKind::Option) => quote! {
            let request = request.header_opt(#name, self.#ident.as_deref());
        },
        (FieldRole::Header(name), _) => quote! {
            let request = request.header(#name, ::std::string::ToString::to_string(&self.#ident));
        },
        (FieldRole::Body, ValueKind::Option) => quote! {
            let request = match &self.#ident {
                ::std::option::Option::Some(body) => request.json(body),
                ::std::option::Option::None => request,
            };
        },
        (FieldRole::Body, _) => quote! {
            let request = request.json(&self.#ident);
        },
    }
}

fn parse_response_fn(config: &OperationConfig) -> TokenStream {
    let typed = &config.typed;
    let empty = &config.empty;

    let body = if typed.is_empty() {
        Ident::new("_body", Span::call_site())
    } else {
        Ident::new("body", Span::call_site())
    };
    let typed_arm = (!typed.is_empty()).then(|| {
        quote! { #(#typed)|* => ::hyperswitch_api::parse_json(#body), }
    });
    let empty_arm = (!empty.is_empty()).then(|| {
        quote! { #(#empty)|* => ::std::result::Result::Ok(::hyperswitch_api::Parsed::Empty), }
    });

    quote! {
        fn parse_response(
            status: u16,
            #body: &[u8],
        ) -> ::std::result::Result<
            ::hyperswitch_api::Parsed<Self::Output>,
            ::hyperswitch_api::ValidationError,
        > {
            match status {
                #typed_arm
                #empty_arm
                _ => ::std::result::Result::Ok(::hyperswitch_api::Parsed::Undocumented),
            }
        }
    }
}

/// Generates the identifier for an HTTP method.
pub fn http_method_ident(method: HttpMethod) -> Ident {
    match method {
        HttpMethod::Get => format_ident!("Get"),
        HttpMethod::Post => format_ident!("Post"),
        HttpMethod::Put => format_ident!("Put"),
        HttpMethod::Patch => format_ident!("Patch"),
        HttpMethod::Delete => format_ident!("Delete"),
    }
}

/// Generates a snake_case identifier from a string.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_lowercase = false;
        } else {
            result.push(ch);
            prev_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        expand_operation(&input).unwrap().to_string()
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("RetrievePayment"), "retrieve_payment");
        assert_eq!(to_snake_case("ToggleMerchantKv"), "toggle_merchant_kv");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_http_method_ident() {
        assert_eq!(http_method_ident(HttpMethod::Get).to_string(), "Get");
        assert_eq!(http_method_ident(HttpMethod::Post).to_string(), "Post");
        assert_eq!(http_method_ident(HttpMethod::Delete).to_string(), "Delete");
    }

    #[test]
    fn test_expansion_uses_field_kinds() {
        let code = expand(parse_quote! {
            #[operation(
                method = Get,
                path = "/payments/{payment_id}",
                output = PaymentsResponse,
                typed(200),
                empty(404),
            )]
            pub struct RetrievePayment {
                #[operation(path)]
                pub payment_id: String,
                #[operation(query)]
                pub force_sync: Option<bool>,
                #[operation(query)]
                pub client_secret: Field<String>,
            }
        });

        assert!(code.contains("\"retrieve_payment\""), "{code}");
        assert!(code.contains("path_param"), "{code}");
        assert!(code.contains("query_opt"), "{code}");
        assert!(code.contains("query_field"), "{code}");
        assert!(code.contains("404u16"), "{code}");
    }

    #[test]
    fn test_empty_only_operation_ignores_body() {
        let code = expand(parse_quote! {
            #[operation(method = Post, path = "/payments/{payment_id}/cancel")]
            pub struct CancelPayment {
                #[operation(path)]
                pub payment_id: String,
            }
        });

        assert!(code.contains("_body"), "{code}");
        assert!(!code.contains("parse_json"), "{code}");
    }

    #[test]
    fn test_missing_path_field_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[operation(method = Get, path = "/refunds/{refund_id}", output = Refund)]
            pub struct RetrieveRefund;
        };
        let err = expand_operation(&input).unwrap_err();
        assert!(err.to_string().contains("refund_id"));
    }

    #[test]
    fn test_unknown_path_field_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[operation(method = Get, path = "/refunds", output = Refund)]
            pub struct ListRefunds {
                #[operation(path)]
                pub refund_id: String,
            }
        };
        assert!(expand_operation(&input).is_err());
    }

    #[test]
    fn test_two_bodies_are_rejected() {
        let input: DeriveInput = parse_quote! {
            #[operation(method = Post, path = "/x")]
            pub struct Twice {
                #[operation(body)]
                pub a: Value,
                #[operation(body)]
                pub b: Value,
            }
        };
        assert!(expand_operation(&input).is_err());
    }
}
