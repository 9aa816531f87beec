//! Request and response bodies for every Hyperswitch resource.
//!
//! Every model is a plain serde struct or enum. Nullable fields use
//! [`Field`](hyperswitch_api::Field), optional ones use `Option`, and object
//! models keep unrecognized keys in `additional_properties` so newer server
//! fields survive a round trip.

mod admin;
mod api_keys;
mod blocklist;
mod common;
mod customers;
mod disputes;
mod enums;
mod events;
mod gsm;
mod mandates;
mod organization;
mod payment_methods;
mod payments;
mod payouts;
mod poll;
mod refunds;
mod relay;
mod routing;

pub use admin::*;
pub use api_keys::*;
pub use blocklist::*;
pub use common::*;
pub use customers::*;
pub use disputes::*;
pub use enums::*;
pub use events::*;
pub use gsm::*;
pub use mandates::*;
pub use organization::*;
pub use payment_methods::*;
pub use payments::*;
pub use payouts::*;
pub use poll::*;
pub use refunds::*;
pub use relay::*;
pub use routing::*;
