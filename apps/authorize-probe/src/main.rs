//! Authorize Probe
//!
//! Dials the Authorize service the same way production clients do (env
//! configuration, optional mutual TLS, reconnect and retry) and exercises it.
//! Running `ping` in a loop while the server restarts shows the reconnect path.

use std::time::Duration;

use authorize_client::{AuthorizeClient, AuthorizeClientConfig, CallContext, LoadBalancingPolicy, Origin};
use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use eyre::{Result, WrapErr};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "authorize-probe")]
#[command(about = "Probe the Authorize gRPC service")]
struct Cli {
    /// Overrides AUTHORIZE_HOST
    #[arg(long, global = true)]
    host: Option<String>,

    /// Overrides AUTHORIZE_PORT
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Overrides AUTHORIZE_LB_POLICY (round_robin, pick_first)
    #[arg(long, global = true)]
    lb_policy: Option<LoadBalancingPolicy>,

    /// Per-call timeout in seconds; overrides AUTHORIZE_REQUEST_TIMEOUT_SECS
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Service(ServiceCommand),

    /// Print the secret name (and ARN) holding a service's client certificate
    SecretName {
        service: String,
        stage: String,

        #[arg(long, requires = "region")]
        account_id: Option<String>,

        #[arg(long, requires = "account_id")]
        region: Option<String>,
    },
}

/// Commands that talk to a dialed Authorize service
#[derive(Subcommand)]
enum ServiceCommand {
    /// Deep-ping the service
    Ping {
        /// Number of pings (0 = until interrupted)
        #[arg(short, long, default_value_t = 1)]
        count: u64,

        /// Seconds between pings
        #[arg(short, long, default_value_t = 1)]
        interval: u64,
    },

    /// Ask whether a user may perform an action on a resource
    Check {
        user_id: String,
        action: String,
        resource_id: String,

        #[arg(long, default_value = "")]
        resource_type: String,
    },
}

impl Cli {
    fn client_config(&self) -> Result<AuthorizeClientConfig> {
        let mut config = AuthorizeClientConfig::from_env().wrap_err("Invalid Authorize configuration")?;
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(policy) = self.lb_policy {
            config.load_balancing = policy;
        }
        if let Some(secs) = self.timeout {
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let cli = Cli::parse();

    let command = match &cli.command {
        Commands::Service(command) => command,
        Commands::SecretName {
            service,
            stage,
            account_id,
            region,
        } => {
            let location = account_id.as_deref().zip(region.as_deref());
            for line in secret_names(service, stage, location) {
                println!("{line}");
            }
            return Ok(());
        }
    };

    let config = cli.client_config()?;
    info!(
        host = %config.host,
        port = config.port,
        tls = config.secret_name.is_some(),
        "Dialing Authorize"
    );
    let client = config
        .connect()
        .await
        .wrap_err_with(|| format!("Failed to dial {}:{}", config.host, config.port))?;

    let outcome = run(&client, command).await;
    if let Err(err) = client.close().await {
        warn!(error = %err, "Failed to report closing connection");
    }
    outcome
}

/// Secret name, followed by its ARN when the account and region are known.
fn secret_names(service: &str, stage: &str, location: Option<(&str, &str)>) -> Vec<String> {
    let mut names = vec![grpc_client::secret_key_name(service, stage)];
    if let Some((account_id, region)) = location {
        names.push(grpc_client::secret_key_arn(account_id, region, service, stage));
    }
    names
}

async fn run(client: &AuthorizeClient, command: &ServiceCommand) -> Result<()> {
    match command {
        ServiceCommand::Ping { count, interval } => {
            let mut sent = 0u64;
            loop {
                sent += 1;
                match client.deep_ping(CallContext::background()).await {
                    Ok(()) => info!(ping = sent, "Deep ping ok"),
                    Err(err) if *count == 0 => warn!(ping = sent, error = %err, "Deep ping failed"),
                    Err(err) => return Err(err).wrap_err("Deep ping failed"),
                }
                if *count != 0 && sent >= *count {
                    return Ok(());
                }
                tokio::time::sleep(Duration::from_secs(*interval)).await;
            }
        }

        ServiceCommand::Check {
            user_id,
            action,
            resource_id,
            resource_type,
        } => {
            let resource = Origin {
                id: resource_id.clone(),
                r#type: resource_type.clone(),
                provider: String::new(),
            };
            let (ok, reason) = client
                .is_authorized_with_reason(CallContext::background(), user_id, action, Some(resource))
                .await
                .wrap_err("Authorization check failed")?;
            println!("{}: {}", if ok { "allowed" } else { "denied" }, reason);
            Ok(())
        }
    }
}
