use anyhow::Result;
use clap::{Args, Subcommand};
use webex_api::api::TelephonyFeature;
use webex_api::{Client, Query, TelephonyQuery};

use super::take_items;
use crate::output::{print_record, print_records, OutputFormat};

#[derive(Args)]
pub struct TelephonyArgs {
    #[command(subcommand)]
    pub command: TelephonyCommand,
}

#[derive(Subcommand)]
pub enum TelephonyCommand {
    /// List auto-attendants, hunt-groups or numbers
    List {
        feature: TelephonyFeature,

        #[arg(long)]
        location_id: Option<String>,

        #[arg(long)]
        org_id: Option<String>,

        /// Filter by name
        #[arg(long)]
        name: Option<String>,

        /// Results per page
        #[arg(long)]
        max: Option<u32>,

        /// Stop after this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one auto attendant or hunt group
    Get {
        feature: TelephonyFeature,
        location_id: String,
        id: String,

        #[arg(long)]
        org_id: Option<String>,
    },
}

pub async fn run(args: &TelephonyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        TelephonyCommand::List {
            feature,
            location_id,
            org_id,
            name,
            max,
            limit,
        } => {
            let mut query = TelephonyQuery::default();
            if let Some(location_id) = location_id {
                query = query.with_location_id(location_id);
            }
            if let Some(org_id) = org_id {
                query = query.with_org_id(org_id);
            }
            if let Some(name) = name {
                query = query.with_name(name);
            }
            if let Some(max) = max {
                query = query.with_max(*max);
            }
            let items = take_items(client.telephony().list(*feature, &query)?, *limit).await?;
            print_records(&items, format)?;
        }
        TelephonyCommand::Get {
            feature,
            location_id,
            id,
            org_id,
        } => {
            let record = client
                .telephony()
                .get(*feature, location_id, id, org_id.as_deref())
                .await?;
            print_record(record.json(), format)?;
        }
    }
    Ok(())
}
