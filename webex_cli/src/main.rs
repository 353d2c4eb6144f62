mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::Directive;
use webex_api::config::ACCESS_TOKEN_ENV;
use webex_api::{Client, SessionConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "webex")]
#[command(about = "Query and manage Webex organization resources")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root, e.g. a regional contact-center host
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Access token (defaults to WEBEX_TEAMS_ACCESS_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// People in the organization
    People(commands::people::PeopleArgs),
    /// Workspaces (rooms, desks, huddle spaces)
    Workspaces(commands::workspaces::WorkspacesArgs),
    /// Registered devices
    Devices(commands::devices::DevicesArgs),
    /// Organization locations
    Locations(commands::locations::LocationsArgs),
    /// Auto attendants, hunt groups and numbers
    Telephony(commands::telephony::TelephonyArgs),
    /// Contact-center skills
    Skills(commands::skills::SkillsArgs),
    /// Contact-center configuration by feature name
    ContactCenter(commands::contact_center::ContactCenterArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("webex_api=info".parse::<Directive>()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = Client::new(&session_config(&cli)?)?;

    match &cli.command {
        Commands::People(args) => commands::people::run(args, &client, &format).await?,
        Commands::Workspaces(args) => commands::workspaces::run(args, &client, &format).await?,
        Commands::Devices(args) => commands::devices::run(args, &client, &format).await?,
        Commands::Locations(args) => commands::locations::run(args, &client, &format).await?,
        Commands::Telephony(args) => commands::telephony::run(args, &client, &format).await?,
        Commands::Skills(args) => commands::skills::run(args, &client, &format).await?,
        Commands::ContactCenter(args) => {
            commands::contact_center::run(args, &client, &format).await?
        }
    }

    Ok(())
}

/// Environment first, then command-line overrides.
fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let token = cli.token.clone();
    let mut config = SessionConfig::from_lookup(|key| match (&token, key) {
        (Some(token), ACCESS_TOKEN_ENV) => Some(token.clone()),
        _ => std::env::var(key).ok(),
    })?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    Ok(config)
}
