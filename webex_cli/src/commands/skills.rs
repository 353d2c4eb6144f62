use anyhow::Result;
use clap::Args;
use webex_api::{Client, FeatureQuery};

use super::take_items;
use crate::output::{print_records, OutputFormat};

#[derive(Args)]
pub struct SkillsArgs {
    /// Contact-center organization ID
    pub org_id: String,

    /// Stop after this many skills
    #[arg(long)]
    pub limit: Option<usize>,
}

pub async fn run(args: &SkillsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let list = client.skills().list(&args.org_id, &FeatureQuery::default())?;
    let items = take_items(list, args.limit).await?;
    print_records(&items, format)
}
