//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TypotrieArgs};
use crate::error::Result;

/// One suggestion printed by `lookup`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Suggestion {
    pub spelling: String,
    pub distance: f32,
    pub probability: f64,
}

/// Result structure for lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub typed: String,
    pub exact_match: bool,
    pub suggestions: Vec<Suggestion>,
    pub duration_us: u64,
}

/// Result structure for distance computations.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub meant: String,
    pub typed: String,
    pub cost_model: String,
    pub distance: f32,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub entries: usize,
    pub trie_nodes: usize,
    pub max_depth: usize,
    pub total_characters: usize,
    pub average_length: f64,
    pub build_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TypotrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TypotrieArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    if value.get("suggestions").is_some() {
        output_lookup_results_human(&value)
    } else {
        output_generic_human(&value)
    }
}

/// Output lookup results in human format.
fn output_lookup_results_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    let typed = obj.get("typed").and_then(|t| t.as_str()).unwrap_or("");
    if obj.get("exact_match").and_then(|e| e.as_bool()) == Some(true) {
        println!("'{typed}' is in the dictionary");
    }

    let suggestions = obj
        .get("suggestions")
        .and_then(|s| s.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    if suggestions.is_empty() {
        println!("No suggestions for '{typed}'");
        return Ok(());
    }

    println!("Did you mean:");
    for suggestion in suggestions {
        let spelling = suggestion.get("spelling").and_then(|s| s.as_str()).unwrap_or("");
        let distance = suggestion.get("distance").and_then(|d| d.as_f64()).unwrap_or(0.0);
        let probability = suggestion
            .get("probability")
            .and_then(|p| p.as_f64())
            .unwrap_or(0.0);
        println!("  {spelling:<24} distance {distance:>5.2}  p={probability:.4}");
    }

    if let Some(duration) = obj.get("duration_us").and_then(|d| d.as_u64()) {
        println!();
        println!("Lookup time: {duration}µs");
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TypotrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.3}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("apple")), "apple");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(0.5)), "0.500");
        assert_eq!(format_value(&json!([1, 2])), "[1, 2]");
        assert_eq!(format_value(&json!(null)), "null");
    }

    #[test]
    fn test_lookup_results_serialize() {
        let results = LookupResults {
            typed: "aplpe".to_string(),
            exact_match: false,
            suggestions: vec![Suggestion {
                spelling: "apple".to_string(),
                distance: 1.0,
                probability: 0.5,
            }],
            duration_us: 12,
        };
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["suggestions"][0]["spelling"], "apple");
        assert_eq!(value["exact_match"], false);
    }
}
