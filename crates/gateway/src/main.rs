//! API Gateway - HTTP REST API for driver and station signup.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::validate_password;
use gateway_lib::checks::{check_value, ValueKind};
use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "Signup API gateway")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "GATEWAY_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "GATEWAY_PORT", default_value = "3000")]
        port: u16,
    },
    /// Validate a single value and print its display format
    Check {
        #[arg(value_enum)]
        kind: ValueKind,
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GatewayConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            gateway_lib::run_server(config.with_address(host, port)).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { kind, value } => Ok(run_check(kind, &value)),
    }
}

fn run_check(kind: ValueKind, value: &str) -> ExitCode {
    let check = check_value(kind, value);
    println!("{}", if check.valid { "valid" } else { "invalid" });

    if let Some(masked) = check.masked {
        println!("{}", masked);
    }
    if kind == ValueKind::Password {
        for error in validate_password(value).errors {
            println!("- {}", error);
        }
    }

    if check.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
