// ABOUTME: Entry point for the ecsdeploy binary.
// ABOUTME: Runs as a Lambda function or deploys a single version from the shell.

mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use ecsdeploy::aws::AwsClients;
use ecsdeploy::config::DeploymentConfig;
use ecsdeploy::deploy;
use ecsdeploy::error::Result;
use ecsdeploy::handler;
use ecsdeploy::output::{Output, OutputMode};
use ecsdeploy::types::ReleaseVersion;
use std::env;
use tracing_subscriber::EnvFilter;

/// Set by the Lambda service in every function container.
const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        None if env::var_os(LAMBDA_RUNTIME_API).is_some() => Commands::Lambda,
        None => {
            let _ = Cli::command().print_help();
            std::process::exit(2);
        }
    };

    init_tracing(cli.verbose, matches!(command, Commands::Lambda));

    if let Err(e) = run(command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` takes precedence.
fn init_tracing(verbose: bool, lambda: bool) {
    let default_filter = match (verbose, lambda) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if lambda {
        // CloudWatch timestamps every line already.
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Lambda => {
            // Misconfiguration stops the function before it takes any event.
            let config = DeploymentConfig::from_env()?;
            let clients = AwsClients::from_env().await;
            handler::run_lambda(config, clients).await
        }
        Commands::Deploy {
            version,
            json,
            quiet,
        } => {
            let config = DeploymentConfig::from_env()?;
            let version = ReleaseVersion::new(&version)?;

            let mode = if json {
                OutputMode::Json
            } else if quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Normal
            };
            let mut output = Output::new(mode);
            output.start_timer();
            output.progress(&format!(
                "Deploying {} ({}) to {}/{}",
                config.image, version, config.cluster, config.service
            ));

            let clients = AwsClients::from_env().await;
            let result = deploy::execute(config, version, &clients).await?;
            output.result(&result)
        }
    }
}
