//! One struct per documented endpoint, grouped by resource.
//!
//! Every struct implements [`hyperswitch_api::Operation`] and can be passed
//! to any of the client call variants. Each module also exposes a resource
//! handle ([`Payments`], [`Refunds`], ...) returned by the
//! [`Resources`](crate::Resources) methods.

pub mod accounts;
pub mod api_keys;
pub mod blocklist;
pub mod connectors;
pub mod customers;
pub mod disputes;
pub mod events;
pub mod gsm;
pub mod mandates;
pub mod organization;
pub mod payment_methods;
pub mod payments;
pub mod payouts;
pub mod poll;
pub mod profiles;
pub mod refunds;
pub mod relay;
pub mod routing;

pub use accounts::Accounts;
pub use api_keys::ApiKeys;
pub use blocklist::Blocklist;
pub use connectors::Connectors;
pub use customers::Customers;
pub use disputes::Disputes;
pub use events::Events;
pub use gsm::Gsm;
pub use mandates::Mandates;
pub use organization::Organizations;
pub use payment_methods::PaymentMethods;
pub use payments::Payments;
pub use payouts::Payouts;
pub use poll::Poll;
pub use profiles::Profiles;
pub use refunds::Refunds;
pub use relay::Relay;
pub use routing::Routing;
