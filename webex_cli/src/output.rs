use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

/// Fields tried, in order, for each column.
const NAME_FIELDS: &[&str] = &["displayName", "name", "email"];
const KIND_FIELDS: &[&str] = &["type", "product", "teamType"];

#[derive(Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
}

fn first_text(item: &Value, fields: &[&str]) -> String {
    fields
        .iter()
        .find_map(|field| item.get(*field).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn build_rows(items: &[Value]) -> Vec<RecordRow> {
    items
        .iter()
        .map(|item| RecordRow {
            id: first_text(item, &["id"]),
            name: first_text(item, NAME_FIELDS),
            kind: first_text(item, KIND_FIELDS),
        })
        .collect()
}

pub fn print_records(items: &[Value], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_rows(items))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_rows(items));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(items)?,
        OutputFormat::Json => print_json(&items),
    }
    Ok(())
}

/// Single records print the same way as a one-item listing, except JSON,
/// which prints the object itself.
pub fn print_record(item: &Value, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(item);
            Ok(())
        }
        _ => print_records(std::slice::from_ref(item), format),
    }
}

fn print_csv(items: &[Value]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_rows(items) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
