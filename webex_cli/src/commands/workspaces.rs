use anyhow::Result;
use clap::{Args, Subcommand};
use webex_api::{Client, Query, WorkspaceQuery};

use super::take_items;
use crate::output::{print_record, print_records, OutputFormat};

#[derive(Args)]
pub struct WorkspacesArgs {
    #[command(subcommand)]
    pub command: WorkspacesCommand,
}

#[derive(Subcommand)]
pub enum WorkspacesCommand {
    /// List workspaces
    List {
        /// Organization to list in (defaults to the token's own)
        #[arg(long)]
        org_id: Option<String>,

        /// Filter by display name
        #[arg(long)]
        display_name: Option<String>,

        /// Filter by workspace type: meetingRoom, desk, huddle, focus, other
        #[arg(long = "type")]
        workspace_type: Option<String>,

        /// Filter by capacity
        #[arg(long)]
        capacity: Option<u32>,

        /// Results per page
        #[arg(long)]
        max: Option<u32>,

        /// Stop after this many workspaces
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one workspace
    Get { id: String },
    /// Delete a workspace
    Delete { id: String },
}

pub async fn run(args: &WorkspacesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        WorkspacesCommand::List {
            org_id,
            display_name,
            workspace_type,
            capacity,
            max,
            limit,
        } => {
            let mut query = WorkspaceQuery::default();
            if let Some(org_id) = org_id {
                query = query.with_org_id(org_id);
            }
            if let Some(display_name) = display_name {
                query = query.with_display_name(display_name);
            }
            if let Some(workspace_type) = workspace_type {
                query = query.with_type(workspace_type);
            }
            if let Some(capacity) = capacity {
                query = query.with_capacity(*capacity);
            }
            if let Some(max) = max {
                query = query.with_max(*max);
            }
            let items = take_items(client.workspaces().list(&query)?, *limit).await?;
            print_records(&items, format)?;
        }
        WorkspacesCommand::Get { id } => {
            let workspace = client.workspaces().get(id).await?;
            print_record(&workspace, format)?;
        }
        WorkspacesCommand::Delete { id } => {
            client.workspaces().delete(id).await?;
            eprintln!("Deleted workspace {}", id);
        }
    }
    Ok(())
}
