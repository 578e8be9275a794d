//! shapeshift - invoke any modeled service operation from the command line.
//!
//! # Usage
//!
//! ```text
//! shapeshift list
//! shapeshift operations <service>
//! shapeshift invoke <service> <operation>
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SHAPESHIFT_DEFINITION` | `./aws-api-definition.json` | Service definition document |
//! | `SHAPESHIFT_REGION` | *(from endpoint table)* | Region override |
//! | `SHAPESHIFT_ENDPOINT` | *(from endpoint table)* | Endpoint URL override |
//! | `SHAPESHIFT_NO_PARAMS` | `false` | Send an empty input tree |
//! | `AWS_ACCESS_KEY_ID` | *(unset)* | Access key for signing |
//! | `AWS_SECRET_ACCESS_KEY` | *(unset)* | Secret key for signing |
//! | `AWS_SESSION_TOKEN` | *(unset)* | Session token for temporary credentials |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shapeshift_auth::Credentials;
use shapeshift_client::{Api, HttpTransport, InvokeOptions};
use shapeshift_model::Catalog;

/// Default location of the definition document.
const DEFAULT_DEFINITION: &str = "./aws-api-definition.json";

/// Environment-driven configuration.
#[derive(Debug, Clone)]
struct CliConfig {
    /// Path of the service definition document.
    definition: String,
    /// Log level used when `RUST_LOG` is unset.
    log_level: String,
    /// Region override.
    region: Option<String>,
    /// Endpoint URL override.
    endpoint: Option<String>,
    /// Whether to skip input synthesis.
    no_params: bool,
}

impl CliConfig {
    fn from_env() -> Self {
        Self {
            definition: std::env::var("SHAPESHIFT_DEFINITION")
                .unwrap_or_else(|_| DEFAULT_DEFINITION.to_owned()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()),
            region: std::env::var("SHAPESHIFT_REGION").ok(),
            endpoint: std::env::var("SHAPESHIFT_ENDPOINT").ok(),
            no_params: std::env::var("SHAPESHIFT_NO_PARAMS")
                .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config
/// value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

/// Build credentials from the standard AWS environment variables.
fn credentials_from_env() -> Option<Credentials> {
    let access_key_id = std::env::var("AWS_ACCESS_KEY_ID").ok()?;
    let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY").ok()?;
    let mut credentials = Credentials::new(access_key_id, secret_access_key);
    if let Ok(token) = std::env::var("AWS_SESSION_TOKEN") {
        credentials = credentials.with_session_token(token);
    }
    Some(credentials)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::from_env();
    init_tracing(&config.log_level)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        bail!("usage: shapeshift <list | operations <service> | invoke <service> <operation>>");
    };

    let catalog = Catalog::from_path(&config.definition)
        .with_context(|| format!("loading definition from {}", config.definition))?;
    info!(
        definition = %config.definition,
        services = catalog.len(),
        "loaded service catalog"
    );

    match command {
        "list" => {
            for name in catalog.service_names() {
                println!("{name}");
            }
        }
        "operations" => {
            let [_, service] = args.as_slice() else {
                bail!("usage: shapeshift operations <service>");
            };
            let api = Api::new(catalog.service(service)?);
            for name in api.operation_names() {
                println!("{name}");
            }
        }
        "invoke" => {
            let [_, service, operation] = args.as_slice() else {
                bail!("usage: shapeshift invoke <service> <operation>");
            };
            let api = Api::new(catalog.service(service)?);
            let operation = api.operation(operation)?;

            let mut options = InvokeOptions::new();
            if let Some(credentials) = credentials_from_env() {
                options = options.with_credentials(credentials);
            }
            if let Some(region) = &config.region {
                options = options.with_region(region.clone());
            }
            if let Some(endpoint) = &config.endpoint {
                options = options.with_endpoint(endpoint.clone());
            }
            if config.no_params {
                options = options.without_params();
            }

            let transport = HttpTransport::new();
            let response = operation.invoke(&transport, &options).await?;
            println!("status: {}", response.status);
            println!("{}", String::from_utf8_lossy(&response.body));
        }
        other => bail!("unknown command: {other}"),
    }

    Ok(())
}
