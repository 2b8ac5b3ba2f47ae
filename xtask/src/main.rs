//! Developer tasks for the objects workspace, run as `cargo xtask <task>`.

use clap::Parser;

mod dynamodb;
mod prelude;

use prelude::p_r;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Developer tasks for objects", long_about = None)]
struct Cli {
    /// Print nothing but errors
    #[arg(long, global = true)]
    silent: bool,

    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, clap::Subcommand)]
enum Task {
    /// Provision or seed the DynamoDB item table
    Dynamodb {
        #[command(subcommand)]
        action: dynamodb::DynamodbAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.task {
        Task::Dynamodb { action } => dynamodb::run(action, cli.silent).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", p_r("error:"), e);
        std::process::exit(1);
    }
}
