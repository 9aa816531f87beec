//! Hyperswitch CLI - ad-hoc calls against the payments API

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use hyperswitch::models::ErrorResponse;
use hyperswitch::operations::{
    accounts::{RetrieveMerchantAccount, RetrieveMerchantKv},
    api_keys::{ListApiKeys, RevokeApiKey},
    customers::{DeleteCustomer, ListCustomers, RetrieveCustomer},
    disputes::RetrieveDispute,
    mandates::{RetrieveMandate, RevokeMandate},
    payments::{ListPayments, RetrievePayment},
    poll::RetrievePollStatus,
    refunds::RetrieveRefund,
};
use hyperswitch_api::{ApiClient, ApiResponse, ClientConfig, Credentials, Field, Operation, Parsed};
use serde::Serialize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser)]
#[command(name = "hyperswitch")]
#[command(version, about = "Ad-hoc calls against the Hyperswitch payments API", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// API base URL [default: HYPERSWITCH_BASE_URL or the sandbox]
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<Url>,

    /// API key [default: HYPERSWITCH_API_KEY, then HYPERSWITCH_ADMIN_API_KEY]
    #[arg(long, global = true, value_name = "KEY")]
    api_key: Option<String>,

    /// Treat --api-key as an admin key
    #[arg(long, global = true)]
    admin: bool,

    /// Fail on statuses the endpoint does not document
    #[arg(long, global = true)]
    raise: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment intents
    #[command(subcommand)]
    Payments(PaymentCommands),

    /// Refunds
    #[command(subcommand)]
    Refunds(RefundCommands),

    /// Customers
    #[command(subcommand)]
    Customers(CustomerCommands),

    /// Mandates
    #[command(subcommand)]
    Mandates(MandateCommands),

    /// Disputes
    #[command(subcommand)]
    Disputes(DisputeCommands),

    /// API keys of a merchant (admin key)
    #[command(subcommand)]
    ApiKeys(ApiKeyCommands),

    /// Merchant accounts (admin key)
    #[command(subcommand)]
    Accounts(AccountCommands),

    /// Status of a poll started by a redirect or 3DS flow
    Poll {
        #[arg(value_name = "POLL_ID")]
        poll_id: String,
    },
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Show one payment
    Retrieve {
        #[arg(value_name = "PAYMENT_ID")]
        payment_id: String,

        /// Ask the connector for the latest status first
        #[arg(long)]
        force_sync: bool,
    },

    /// List recent payments
    List {
        #[arg(long, value_name = "CUSTOMER_ID")]
        customer_id: Option<String>,

        #[arg(long)]
        limit: Option<i64>,
    },
}

#[derive(Subcommand)]
enum RefundCommands {
    /// Show one refund
    Retrieve {
        #[arg(value_name = "REFUND_ID")]
        refund_id: String,
    },
}

#[derive(Subcommand)]
enum CustomerCommands {
    /// Show one customer
    Retrieve {
        #[arg(value_name = "CUSTOMER_ID")]
        customer_id: String,
    },

    /// List customers
    List {
        #[arg(long)]
        limit: Option<u16>,

        #[arg(long)]
        offset: Option<u32>,
    },

    /// Delete a customer with its addresses and payment methods
    Delete {
        #[arg(value_name = "CUSTOMER_ID")]
        customer_id: String,
    },
}

#[derive(Subcommand)]
enum MandateCommands {
    /// Show one mandate
    Retrieve {
        #[arg(value_name = "MANDATE_ID")]
        mandate_id: String,
    },

    /// Revoke a mandate
    Revoke {
        #[arg(value_name = "MANDATE_ID")]
        mandate_id: String,
    },
}

#[derive(Subcommand)]
enum DisputeCommands {
    /// Show one dispute
    Retrieve {
        #[arg(value_name = "DISPUTE_ID")]
        dispute_id: String,
    },
}

#[derive(Subcommand)]
enum ApiKeyCommands {
    /// List a merchant's keys
    List {
        #[arg(value_name = "MERCHANT_ID")]
        merchant_id: String,
    },

    /// Revoke a key
    Revoke {
        #[arg(value_name = "MERCHANT_ID")]
        merchant_id: String,

        #[arg(value_name = "KEY_ID")]
        key_id: String,
    },
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Show a merchant account
    Retrieve {
        #[arg(value_name = "ACCOUNT_ID")]
        account_id: String,
    },

    /// Show whether the key-value store is enabled
    Kv {
        #[arg(value_name = "ACCOUNT_ID")]
        account_id: String,
    },
}

impl Cli {
    /// Environment configuration with command line overrides applied.
    fn client(&self) -> Result<ApiClient> {
        let config = ClientConfig::from_env()?;

        let base_url = self.base_url.clone().unwrap_or_else(|| config.base_url().clone());
        let mut builder = ApiClient::builder(base_url)
            .timeout(config.timeout())
            .raise_on_unexpected_status(self.raise || config.raise_on_unexpected_status());

        let credentials = match &self.api_key {
            Some(key) if self.admin => Some(Credentials::AdminApiKey(key.clone())),
            Some(key) => Some(Credentials::ApiKey(key.clone())),
            None => config.credentials().cloned(),
        };
        if let Some(credentials) = credentials {
            builder = builder.credentials(credentials);
        }

        Ok(builder.build()?)
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,hyperswitch_api=info".to_string(),
            2 => "info,hyperswitch_api=debug".to_string(),
            _ => "debug,hyperswitch_api=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Prints a typed body as JSON; anything else becomes an error carrying
/// the server's error envelope when there is one.
fn report<T: Serialize>(response: &ApiResponse<T>) -> Result<()> {
    match &response.parsed {
        Parsed::Typed(value) => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
        Parsed::Empty | Parsed::Undocumented => {
            if let Some(err) = ErrorResponse::from_slice(&response.content) {
                return Err(eyre!(
                    "HTTP {} {}: {} ({})",
                    response.status,
                    err.error.code,
                    err.error.message,
                    err.error.error_type
                ));
            }
            if (200..300).contains(&response.status) {
                println!("HTTP {} (no body)", response.status);
                Ok(())
            } else {
                Err(eyre!("HTTP {} with no usable body", response.status))
            }
        }
    }
}

async fn call<O>(client: &ApiClient, operation: &O) -> Result<()>
where
    O: Operation,
    O::Output: Serialize,
{
    let response = client.execute_detailed(operation).await?;
    report(&response)
}

async fn dispatch(client: &ApiClient, command: Commands) -> Result<()> {
    match command {
        Commands::Payments(PaymentCommands::Retrieve {
            payment_id,
            force_sync,
        }) => {
            let mut operation = RetrievePayment::new(payment_id);
            operation.force_sync = force_sync.then_some(true);
            call(client, &operation).await
        }
        Commands::Payments(PaymentCommands::List { customer_id, limit }) => {
            let operation = ListPayments {
                customer_id: Field::from_option(customer_id),
                limit: Field::from_option(limit),
                ..Default::default()
            };
            call(client, &operation).await
        }
        Commands::Refunds(RefundCommands::Retrieve { refund_id }) => {
            call(client, &RetrieveRefund::new(refund_id)).await
        }
        Commands::Customers(CustomerCommands::Retrieve { customer_id }) => {
            call(client, &RetrieveCustomer::new(customer_id)).await
        }
        Commands::Customers(CustomerCommands::List { limit, offset }) => {
            call(client, &ListCustomers { offset, limit }).await
        }
        Commands::Customers(CustomerCommands::Delete { customer_id }) => {
            call(client, &DeleteCustomer::new(customer_id)).await
        }
        Commands::Mandates(MandateCommands::Retrieve { mandate_id }) => {
            call(client, &RetrieveMandate::new(mandate_id)).await
        }
        Commands::Mandates(MandateCommands::Revoke { mandate_id }) => {
            call(client, &RevokeMandate::new(mandate_id)).await
        }
        Commands::Disputes(DisputeCommands::Retrieve { dispute_id }) => {
            call(client, &RetrieveDispute::new(dispute_id)).await
        }
        Commands::ApiKeys(ApiKeyCommands::List { merchant_id }) => {
            call(client, &ListApiKeys::new(merchant_id)).await
        }
        Commands::ApiKeys(ApiKeyCommands::Revoke {
            merchant_id,
            key_id,
        }) => call(client, &RevokeApiKey::new(merchant_id, key_id)).await,
        Commands::Accounts(AccountCommands::Retrieve { account_id }) => {
            call(client, &RetrieveMerchantAccount::new(account_id)).await
        }
        Commands::Accounts(AccountCommands::Kv { account_id }) => {
            call(client, &RetrieveMerchantKv::new(account_id)).await
        }
        Commands::Poll { poll_id } => call(client, &RetrievePollStatus::new(poll_id)).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json_logs);

    tracing::debug!("Hyperswitch CLI starting");

    let client = cli.client()?;
    dispatch(&client, cli.command).await
}
