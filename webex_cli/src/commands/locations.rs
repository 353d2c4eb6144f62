use anyhow::Result;
use clap::Args;
use webex_api::{Client, LocationQuery, Query};

use super::take_items;
use crate::output::{print_records, OutputFormat};

#[derive(Args)]
pub struct LocationsArgs {
    /// Organization to list in (defaults to the token's own)
    #[arg(long)]
    pub org_id: Option<String>,

    /// Filter by location name
    #[arg(long)]
    pub name: Option<String>,

    /// Results per page
    #[arg(long)]
    pub max: Option<u32>,

    /// Stop after this many locations
    #[arg(long)]
    pub limit: Option<usize>,
}

pub async fn run(args: &LocationsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = LocationQuery::default();
    if let Some(org_id) = &args.org_id {
        query = query.with_org_id(org_id);
    }
    if let Some(name) = &args.name {
        query = query.with_name(name);
    }
    if let Some(max) = args.max {
        query = query.with_max(max);
    }
    let items = take_items(client.locations().list(&query)?, args.limit).await?;
    print_records(&items, format)
}
