//! Prediction command

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::client::{ApiClient, Diagnosis, PredictRequest, SchemaResponse};
use crate::output::{color_outcome, format_timestamp, print_info, print_success, print_warning, OutputFormat};

/// Run a prediction for a screen
pub async fn run_prediction(
    client: &ApiClient,
    screen: &str,
    fields: &[String],
    input_file: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let mut values: HashMap<String, f64> = HashMap::new();

    if let Some(path) = input_file {
        values.extend(load_input_file(path)?);
    }

    // -f flags override file values
    for (name, value) in parse_field_args(fields)? {
        values.insert(name, value);
    }

    if values.is_empty() {
        anyhow::bail!("No input values provided. Use -f name=value or --input <file>.");
    }

    // Advisory range check against the published schema
    let schema_path = format!("api/v1/screens/{}/schema", screen);
    let schema: SchemaResponse = client.get(&schema_path).await?;
    for field in &schema.fields {
        if let Some(value) = values.get(&field.name) {
            if *value < field.min || *value > field.max {
                print_warning(&format!(
                    "{} = {} is outside the typical range [{}, {}]",
                    field.name, value, field.min, field.max
                ));
            }
        }
    }

    let request = PredictRequest { values };
    let path = format!("api/v1/screens/{}/predict", screen);
    let diagnosis: Diagnosis = client.post(&path, &request).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&diagnosis)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            print_success(&format!("{}: {}", schema.title, diagnosis.message));
            println!("  Outcome:  {}", color_outcome(&diagnosis.outcome));
            println!("  Label:    {}", diagnosis.class_label);
            println!("  Schema:   {}", diagnosis.schema_version);
            print_info(&format!(
                "Generated at {}",
                format_timestamp(diagnosis.generated_at)
            ));
        }
    }

    Ok(())
}

/// Load input values from a JSON file
fn load_input_file(path: &Path) -> Result<HashMap<String, f64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON in input file: {}", path.display()))
}

/// Parse repeated `name=value` field arguments
fn parse_field_args(fields: &[String]) -> Result<Vec<(String, f64)>> {
    let mut parsed = Vec::with_capacity(fields.len());

    for field in fields {
        let (name, raw) = field
            .split_once('=')
            .with_context(|| format!("Invalid field argument '{}': expected name=value", field))?;

        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Invalid field argument '{}': empty field name", field);
        }

        let value: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid numeric value in '{}'", field))?;

        parsed.push((name.to_string(), value));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_args() {
        let args = vec!["Glucose=148".to_string(), "BMI=33.6".to_string()];
        let parsed = parse_field_args(&args).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].0, "Glucose");
        assert_eq!(parsed[0].1, 148.0);
        assert_eq!(parsed[1].0, "BMI");
        assert!((parsed[1].1 - 33.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_field_args_trims_whitespace() {
        let args = vec![" Age = 50 ".to_string()];
        let parsed = parse_field_args(&args).unwrap();
        assert_eq!(parsed[0].0, "Age");
        assert_eq!(parsed[0].1, 50.0);
    }

    #[test]
    fn test_parse_field_args_missing_equals() {
        let args = vec!["Glucose148".to_string()];
        assert!(parse_field_args(&args).is_err());
    }

    #[test]
    fn test_parse_field_args_empty_name() {
        let args = vec!["=42".to_string()];
        assert!(parse_field_args(&args).is_err());
    }

    #[test]
    fn test_parse_field_args_non_numeric_value() {
        let args = vec!["Glucose=high".to_string()];
        assert!(parse_field_args(&args).is_err());
    }

    #[test]
    fn test_load_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, r#"{"Glucose": 148, "BMI": 33.6}"#).unwrap();

        let values = load_input_file(&path).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values["Glucose"], 148.0);
    }

    #[test]
    fn test_load_input_file_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_input_file(&path).is_err());
    }

    #[test]
    fn test_load_input_file_missing() {
        assert!(load_input_file(Path::new("/nonexistent/input.json")).is_err());
    }
}
