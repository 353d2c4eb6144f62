//! CLI subcommand implementations.

pub mod contact_center;
pub mod devices;
pub mod locations;
pub mod people;
pub mod skills;
pub mod telephony;
pub mod workspaces;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use webex_api::{Decode, ItemList, Transport};

/// Walks a listing, stopping after `limit` items when one is given so later
/// pages are never requested.
pub async fn take_items<T, D>(list: ItemList<'_, T, D>, limit: Option<usize>) -> Result<Vec<Value>>
where
    T: Transport,
    D: Decode + Clone,
    D::Output: Serialize,
{
    let mut items = list.iter();
    let mut out = Vec::new();
    while limit.map_or(true, |limit| out.len() < limit) {
        match items.next().await {
            Some(item) => out.push(serde_json::to_value(item?)?),
            None => break,
        }
    }
    Ok(out)
}
