//! Payload and query input shared by every subcommand.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;

use awx_core::{Payload, Query};

/// Request body built from a JSON document and/or individual fields.
#[derive(Args, Debug, Default)]
pub struct PayloadArgs {
    /// Read the payload from a JSON file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Set a payload field; VALUE is parsed as JSON, else used as a string
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,
}

impl PayloadArgs {
    /// Build the payload; `--set` fields override keys from `--json`.
    pub fn payload(&self) -> Result<Payload> {
        let mut payload = match &self.json {
            Some(path) => Payload::from_value(read_json(path)?)
                .with_context(|| format!("{} is not a JSON object", path.display()))?,
            None => Payload::new(),
        };

        for field in &self.fields {
            let (key, value) = split_pair(field)?;
            payload.insert(key, parse_value(value));
        }

        Ok(payload)
    }
}

/// Query string parameters.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Add a query parameter (e.g. --query name__icontains=deploy)
    #[arg(long = "query", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

impl QueryArgs {
    pub fn query(&self) -> Result<Query> {
        let mut query = Query::new();
        for param in &self.params {
            let (key, value) = split_pair(param)?;
            query.insert(key, value);
        }
        Ok(query)
    }
}

/// Read a JSON document from a file, or from stdin for `-`.
pub fn read_json(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Expected KEY=VALUE, got '{pair}'"),
    }
}

fn parse_value(value: &str) -> Value {
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}
