use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({ "message": message });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: OutputFormat, message: &str) {
    match output_format {
        OutputFormat::Json => println!("{}", json!({ "error": message })),
        OutputFormat::Text => eprintln!("Error: {}", message),
    }
}

/// Print a single record: raw JSON, or `key: value` lines
pub fn output_record(output_format: OutputFormat, record: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Text => {
            if let Value::Object(fields) = record {
                for (key, value) in fields {
                    println!("{}: {}", key, display_value(value));
                }
            } else {
                println!("{}", display_value(record));
            }
        }
    }
    Ok(())
}

/// Print a collection as a table of the given columns
pub fn output_collection(
    output_format: OutputFormat,
    items: &Value,
    columns: &[&str],
    empty_message: &str,
) -> anyhow::Result<()> {
    let rows = items.as_array().map(Vec::as_slice).unwrap_or_default();

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Text if rows.is_empty() => println!("{}", empty_message),
        OutputFormat::Text => {
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|row| columns.iter().map(|c| display_value(&row[*c])).collect())
                .collect();

            let widths: Vec<usize> = columns
                .iter()
                .enumerate()
                .map(|(i, c)| table.iter().map(|r| r[i].len()).chain([c.len()]).max().unwrap_or(0))
                .collect();

            let line = |cells: Vec<String>| {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                    .collect::<Vec<_>>()
                    .join("  ")
            };

            println!("{}", line(columns.iter().map(|c| c.to_uppercase()).collect()));
            for row in table {
                println!("{}", line(row));
            }
        }
    }
    Ok(())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Password from the flag, then `ADDRESSBOOK_PASSWORD`
pub fn resolve_password(provided: Option<String>) -> anyhow::Result<String> {
    provided
        .or_else(|| std::env::var("ADDRESSBOOK_PASSWORD").ok())
        .filter(|p| !p.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Password required: pass --password or set ADDRESSBOOK_PASSWORD"))
}
