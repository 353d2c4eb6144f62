use anyhow::Result;
use clap::{Args, Subcommand};
use webex_api::{Client, PeopleQuery, Query};

use super::take_items;
use crate::output::{print_record, print_records, OutputFormat};

#[derive(Args)]
pub struct PeopleArgs {
    #[command(subcommand)]
    pub command: PeopleCommand,
}

#[derive(Subcommand)]
pub enum PeopleCommand {
    /// Show the person the access token belongs to
    Me,
    /// List people. Non-admins must filter by email or display name.
    List {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        display_name: Option<String>,

        /// Organization to list in (defaults to the token's own)
        #[arg(long)]
        org_id: Option<String>,

        /// Include Webex Calling details
        #[arg(long)]
        calling_data: bool,

        /// Results per page
        #[arg(long)]
        max: Option<u32>,

        /// Stop after this many people
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one person
    Get {
        id: String,

        /// Include Webex Calling details
        #[arg(long)]
        calling_data: bool,
    },
}

pub async fn run(args: &PeopleArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        PeopleCommand::Me => {
            let me = client.people().me().await?;
            print_record(me.json(), format)?;
        }
        PeopleCommand::List {
            email,
            display_name,
            org_id,
            calling_data,
            max,
            limit,
        } => {
            let mut query = PeopleQuery::default();
            if let Some(email) = email {
                query = query.with_email(email);
            }
            if let Some(display_name) = display_name {
                query = query.with_display_name(display_name);
            }
            if let Some(org_id) = org_id {
                query = query.with_org_id(org_id);
            }
            if *calling_data {
                query = query.with_calling_data(true);
            }
            if let Some(max) = max {
                query = query.with_max(*max);
            }
            let items = take_items(client.people().list(&query)?, *limit).await?;
            print_records(&items, format)?;
        }
        PeopleCommand::Get { id, calling_data } => {
            let person = client.people().get(id, *calling_data).await?;
            print_record(person.json(), format)?;
        }
    }
    Ok(())
}
