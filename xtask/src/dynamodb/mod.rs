//! `cargo xtask dynamodb`: provision and seed the item table.

mod error;
mod planning;
mod seed;
mod table;

pub use error::{DynamodbError, Result};

use aws_sdk_dynamodb::Client;
use dialoguer::Confirm;

use crate::prelude::*;
use planning::Plan;

#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Create the item table, or delete it with --destroy.
    #[command(long_about = "Create the item table, or delete it with --destroy.

The table has a single string partition key, object_id, and on-demand
billing. A table that already exists under another key is reported and left
alone.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
    Deploy(DeployArgs),

    /// Insert sample vehicles into an existing table.
    Seed(SeedArgs),
}

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    /// Delete the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub force: bool,

    #[arg(long, default_value = "objects", env = "TABLE_NAME")]
    pub table_name: String,
}

#[derive(Debug, clap::Args)]
pub struct SeedArgs {
    /// Number of vehicles to insert.
    #[arg(long, default_value = "15")]
    pub count: usize,

    #[arg(long, default_value = "objects", env = "TABLE_NAME")]
    pub table_name: String,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub force: bool,
}

/// Prints progress unless `--silent` was given.
#[derive(Debug, Clone, Copy)]
struct Console {
    silent: bool,
}

impl Console {
    fn say(&self, line: impl std::fmt::Display) {
        if !self.silent {
            aprintln!("{}", line);
        }
    }
}

pub async fn run(action: DynamodbAction, silent: bool) -> Result<()> {
    let console = Console { silent };
    let (client, target) = table::connect().await;
    console.say(format!("{} {}", p_b("Target:"), target));

    match action {
        DynamodbAction::Deploy(args) => deploy(&client, args, console).await,
        DynamodbAction::Seed(args) => seed(&client, args, console).await,
    }
}

async fn deploy(client: &Client, args: DeployArgs, console: Console) -> Result<()> {
    let current = table::describe(client, &args.table_name).await?;
    let plan = if args.destroy {
        Plan::destroy(current.as_ref())
    } else {
        Plan::deploy(current.as_ref())
    };

    let summary = plan.describe(&args.table_name);
    console.say(match plan {
        Plan::Create => p_g(&summary),
        Plan::Delete => p_r(&summary),
        Plan::Conflict { .. } => p_y(&summary),
        Plan::Keep | Plan::Absent => summary,
    });

    match plan {
        Plan::Keep | Plan::Absent => Ok(()),
        Plan::Conflict { partition_key } => Err(DynamodbError::KeyConflict {
            table_name: args.table_name,
            partition_key,
        }),
        Plan::Create => {
            confirm("Create the table?", true, args.force)?;
            table::create(client, &args.table_name).await?;
            console.say(p_g("Table is active."));
            Ok(())
        }
        Plan::Delete => {
            confirm("Delete the table? ALL DATA WILL BE LOST", false, args.force)?;
            table::delete(client, &args.table_name).await?;
            console.say(p_g("Table deleted."));
            Ok(())
        }
    }
}

async fn seed(client: &Client, args: SeedArgs, console: Console) -> Result<()> {
    if table::describe(client, &args.table_name).await?.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: args.table_name,
        });
    }

    let items = seed::generate_seed_items(args.count);
    console.say(p_c(&format!("{} vehicles for '{}':", items.len(), args.table_name)));
    for item in items.iter().take(5) {
        console.say(format!("  {}", seed::describe_item(item)));
    }
    if items.len() > 5 {
        console.say(format!("  ... and {} more", items.len() - 5));
    }

    confirm(&format!("Insert {} items?", items.len()), true, args.force)?;

    let written = seed::seed_items(client, &args.table_name, &items).await?;
    console.say(format!("{} {} items inserted.", p_g("Success:"), written));
    Ok(())
}

fn confirm(prompt: &str, default: bool, force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::Cancelled)
    }
}
