//! Screen listing and schema inspection commands

use anyhow::Result;
use tabled::Tabled;

use crate::client::{ApiClient, SchemaResponse, ScreenList};
use crate::output::{print_warning, OutputFormat};

/// Row for the screen listing table
#[derive(Tabled)]
struct ScreenRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Fields")]
    fields: usize,
    #[tabled(rename = "Schema")]
    schema_version: String,
    #[tabled(rename = "Available")]
    available: String,
}

/// Row for the schema table
#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Min")]
    min: f64,
    #[tabled(rename = "Max")]
    max: f64,
    #[tabled(rename = "Prompt")]
    prompt: String,
}

/// List all screens
pub async fn list_screens(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: ScreenList = client.get("api/v1/screens").await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result.screens)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if result.screens.is_empty() {
                print_warning("No screens found");
                return Ok(());
            }

            let rows: Vec<ScreenRow> = result
                .screens
                .iter()
                .map(|s| ScreenRow {
                    id: s.id.clone(),
                    title: s.title.clone(),
                    fields: s.field_count,
                    schema_version: s.schema_version.clone(),
                    available: if s.available {
                        "✓".to_string()
                    } else {
                        "".to_string()
                    },
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} screens", result.total);
        }
    }

    Ok(())
}

/// Show the input schema of one screen
pub async fn show_schema(client: &ApiClient, screen: &str, format: OutputFormat) -> Result<()> {
    let path = format!("api/v1/screens/{}/schema", screen);
    let schema: SchemaResponse = client.get(&path).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&schema)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{} ({})\n", schema.title, schema.schema_version);

            let rows: Vec<FieldRow> = schema
                .fields
                .iter()
                .map(|f| FieldRow {
                    name: f.name.clone(),
                    kind: f.kind.clone(),
                    min: f.min,
                    max: f.max,
                    prompt: f.prompt.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
