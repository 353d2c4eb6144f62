use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use webex_api::{Client, FeatureQuery};

use super::take_items;
use crate::output::{print_record, print_records, OutputFormat};

#[derive(Args)]
pub struct ContactCenterArgs {
    #[command(subcommand)]
    pub command: ContactCenterCommand,
}

/// Where a feature listing keeps its items.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Shape {
    /// Pages with a `data` array
    Data,
    /// Bare JSON arrays
    List,
    /// Pages with a `resources` array (queues)
    Queues,
}

#[derive(Subcommand)]
pub enum ContactCenterCommand {
    /// List a feature (team, entry-point, site, ...)
    List {
        org_id: String,
        feature: String,

        #[arg(long, value_enum, default_value = "data")]
        shape: Shape,

        /// Filter by `type`
        #[arg(long = "type")]
        feature_type: Option<String>,

        /// Stop after this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one feature entry
    Get {
        org_id: String,
        feature: String,
        id: String,
    },
}

pub async fn run(args: &ContactCenterArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let cc = client.contact_center();
    match &args.command {
        ContactCenterCommand::List {
            org_id,
            feature,
            shape,
            feature_type,
            limit,
        } => {
            let mut query = FeatureQuery::default();
            if let Some(feature_type) = feature_type {
                query = query.with_type(feature_type);
            }
            let list = match shape {
                Shape::Data => cc.list_feature(org_id, feature, &query)?,
                Shape::List => cc.list_feature_list(org_id, feature, &query)?,
                Shape::Queues => cc.list_queues(org_id, feature, &query)?,
            };
            let items = take_items(list, *limit).await?;
            print_records(&items, format)?;
        }
        ContactCenterCommand::Get { org_id, feature, id } => {
            let entry = cc.get_feature(org_id, feature, id).await?;
            print_record(&entry, format)?;
        }
    }
    Ok(())
}
