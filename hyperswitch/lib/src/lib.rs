//! Typed client for the Hyperswitch payments API.
//!
//! Builds on the `hyperswitch_api` runtime with the API's models and one
//! operation struct per endpoint.
//!
//! ## Features
//!
//! - **Models**: serde types for every request and response body, with
//!   [`Field`](hyperswitch_api::Field) for nullable fields and a catch-all
//!   map for keys the server adds later
//! - **Operations**: `operations::<resource>::<Name>` structs usable with
//!   any client call variant
//! - **Resource handles**: `client.payments().retrieve("pay_123")` on both
//!   the async and the blocking client, via [`Resources`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use hyperswitch::Resources;
//! use hyperswitch::models::{Currency, PaymentsCreateRequest};
//! use hyperswitch_api::ApiClient;
//!
//! let client = ApiClient::from_env()?;
//!
//! let mut payment = PaymentsCreateRequest::new(6540, Currency::Usd);
//! payment.confirm = Some(true);
//! if let Some(created) = client.payments().create(payment).await? {
//!     println!("{} is {}", created.payment_id, created.status);
//! }
//! ```

pub mod models;
pub mod operations;

use hyperswitch_api::{ApiClient, AsyncTransport, BlockingApiClient, BlockingTransport};

use crate::operations::{
    Accounts, ApiKeys, Blocklist, Connectors, Customers, Disputes, Events, Gsm, Mandates,
    Organizations, PaymentMethods, Payments, Payouts, Poll, Profiles, Refunds, Relay, Routing,
};

/// Resource handles on a client.
///
/// Implemented for [`ApiClient`] and [`BlockingApiClient`]; the returned
/// handles expose `async` methods on the first and plain methods on the
/// second.
pub trait Resources: Sized {
    fn payments(&self) -> Payments<'_, Self> {
        Payments { client: self }
    }

    fn refunds(&self) -> Refunds<'_, Self> {
        Refunds { client: self }
    }

    fn disputes(&self) -> Disputes<'_, Self> {
        Disputes { client: self }
    }

    fn customers(&self) -> Customers<'_, Self> {
        Customers { client: self }
    }

    fn mandates(&self) -> Mandates<'_, Self> {
        Mandates { client: self }
    }

    fn payment_methods(&self) -> PaymentMethods<'_, Self> {
        PaymentMethods { client: self }
    }

    /// Merchant accounts (admin key).
    fn accounts(&self) -> Accounts<'_, Self> {
        Accounts { client: self }
    }

    /// Merchant connector accounts (admin key).
    fn connectors(&self) -> Connectors<'_, Self> {
        Connectors { client: self }
    }

    /// Business profiles (admin key).
    fn profiles(&self) -> Profiles<'_, Self> {
        Profiles { client: self }
    }

    fn api_keys(&self) -> ApiKeys<'_, Self> {
        ApiKeys { client: self }
    }

    fn organizations(&self) -> Organizations<'_, Self> {
        Organizations { client: self }
    }

    fn routing(&self) -> Routing<'_, Self> {
        Routing { client: self }
    }

    fn blocklist(&self) -> Blocklist<'_, Self> {
        Blocklist { client: self }
    }

    fn gsm(&self) -> Gsm<'_, Self> {
        Gsm { client: self }
    }

    fn payouts(&self) -> Payouts<'_, Self> {
        Payouts { client: self }
    }

    fn relay(&self) -> Relay<'_, Self> {
        Relay { client: self }
    }

    fn events(&self) -> Events<'_, Self> {
        Events { client: self }
    }

    fn poll(&self) -> Poll<'_, Self> {
        Poll { client: self }
    }
}

impl<T: AsyncTransport> Resources for ApiClient<T> {}

impl<T: BlockingTransport> Resources for BlockingApiClient<T> {}
