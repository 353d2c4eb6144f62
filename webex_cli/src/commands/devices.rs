use anyhow::Result;
use clap::{Args, Subcommand};
use webex_api::{Client, DeviceQuery, Query};

use super::take_items;
use crate::output::{print_record, print_records, OutputFormat};

#[derive(Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Subcommand)]
pub enum DevicesCommand {
    /// List devices
    List {
        #[arg(long)]
        org_id: Option<String>,

        /// Devices owned by this person
        #[arg(long)]
        person_id: Option<String>,

        /// Devices in this workspace
        #[arg(long)]
        workspace_id: Option<String>,

        /// Filter by product name (e.g. "Cisco Room Kit")
        #[arg(long)]
        product: Option<String>,

        #[arg(long)]
        max: Option<u32>,

        /// Stop after this many devices
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one device
    Get {
        id: String,
        #[arg(long)]
        org_id: Option<String>,
    },
    /// Delete a device
    Delete {
        id: String,
        #[arg(long)]
        org_id: Option<String>,
    },
}

pub async fn run(args: &DevicesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        DevicesCommand::List {
            org_id,
            person_id,
            workspace_id,
            product,
            max,
            limit,
        } => {
            let mut query = DeviceQuery::default();
            if let Some(org_id) = org_id {
                query = query.with_org_id(org_id);
            }
            if let Some(person_id) = person_id {
                query = query.with_person_id(person_id);
            }
            if let Some(workspace_id) = workspace_id {
                query = query.with_place_id(workspace_id);
            }
            if let Some(product) = product {
                query = query.with_product(product);
            }
            if let Some(max) = max {
                query = query.with_max(*max);
            }
            let items = take_items(client.devices().list(&query)?, *limit).await?;
            print_records(&items, format)?;
        }
        DevicesCommand::Get { id, org_id } => {
            let device = client.devices().get(id, org_id.as_deref()).await?;
            print_record(device.json(), format)?;
        }
        DevicesCommand::Delete { id, org_id } => {
            client.devices().delete(id, org_id.as_deref()).await?;
            eprintln!("Deleted device {}", id);
        }
    }
    Ok(())
}
