// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the lambda and deploy subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ecsdeploy")]
#[command(about = "Roll an ECS service onto a new image tag or ECR digest")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve deployment events from the Lambda runtime API
    Lambda,

    /// Deploy one version now, configured by the same environment variables
    Deploy {
        /// Version to release, used as the image tag
        version: String,

        /// Print the result as JSON
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Print only the new task definition ARN
        #[arg(short, long)]
        quiet: bool,
    },
}
