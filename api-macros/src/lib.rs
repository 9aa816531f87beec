//! Derive macro for Hyperswitch API operations.
//!
//! `#[derive(Operation)]` turns a struct describing one endpoint call into an
//! implementation of `hyperswitch_api::Operation`: the request builder is
//! generated from field annotations and the response parser from the status
//! table.
//!
//! ## Examples
//!
//! ```ignore
//! use hyperswitch_api::Field;
//! use hyperswitch_api_macros::Operation;
//!
//! #[derive(Debug, Clone, Operation)]
//! #[operation(
//!     method = Get,
//!     path = "/payments/{payment_id}",
//!     output = PaymentsResponse,
//!     typed(200),
//!     empty(404),
//! )]
//! pub struct RetrievePayment {
//!     #[operation(path)]
//!     pub payment_id: String,
//!     #[operation(query)]
//!     pub force_sync: Option<bool>,
//!     #[operation(query)]
//!     pub client_secret: Field<String>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod parse;

/// Derives `hyperswitch_api::Operation` for a struct.
///
/// ## Struct attribute
///
/// `#[operation(...)]` with:
///
/// - `method = Get|Post|Put|Patch|Delete` (required)
/// - `path = "/resource/{param}"` (required)
/// - `output = Type`: body type of the typed statuses; `()` when omitted
/// - `typed(200, ...)`: statuses parsed into `output`
/// - `empty(400, 404, ...)`: documented statuses without a body schema
/// - `id = "..."`: tracing id; defaults to the snake_cased struct name
///
/// Without `typed`/`empty`, status 200 is typed when `output` is given and
/// empty otherwise. Every other status parses as `Parsed::Undocumented`.
///
/// ## Field attributes
///
/// Every field needs exactly one role:
///
/// - `#[operation(path)]` or `#[operation(path = "name")]`
/// - `#[operation(query)]` or `#[operation(query = "name")]`
/// - `#[operation(header = "X-Header-Name")]`
/// - `#[operation(body)]`
///
/// `Option` fields are omitted when `None`; `Field` query parameters are
/// omitted when `Unset` or `Null`.
#[proc_macro_derive(Operation, attributes(operation))]
pub fn derive_operation(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match codegen::expand_operation(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
