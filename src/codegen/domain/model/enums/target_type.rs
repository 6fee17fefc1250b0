use chrono::{DateTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::json;

use crate::codegen::domain::model::enums::codegen_domain_error::CodegenDomainError;

lazy_static! {
    static ref TEXT_TYPE_REGEX: Regex =
        Regex::new(r"^(?:(?:character varying|varchar|character|char)(?:\s*\(\d+\))?|text)$")
            .expect("valid regex");
    static ref TEMPORAL_TYPE_REGEX: Regex = Regex::new(
        r"^(?:(?:timestamp|time)(?:\s*\([0-6]\))?(?: with(?:out)? time zone)?|date)$"
    )
    .expect("valid regex");
}

/// Target-language type a catalog column is generated as.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum TargetType {
    #[serde(rename = "int8")]
    Int8,
    #[serde(rename = "int")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "uint8")]
    UInt8,
    #[serde(rename = "uint32")]
    UInt32,
    #[serde(rename = "uint64")]
    UInt64,
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "float64")]
    Float64,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "pgsql.JSONStr")]
    Json,
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "time.Time")]
    Timestamp,
}

impl TargetType {
    pub fn from_catalog_type(catalog_type: &str) -> Result<Self, CodegenDomainError> {
        let mapped = match catalog_type {
            "smallint" => Some(Self::Int8),
            "integer" => Some(Self::Int32),
            "bigint" => Some(Self::Int64),
            "decimal" | "numeric" | "double" | "double precision" => Some(Self::Float64),
            "real" => Some(Self::Float32),
            "smallserial" => Some(Self::UInt8),
            "serial" => Some(Self::UInt32),
            "bigserial" => Some(Self::UInt64),
            "boolean" => Some(Self::Bool),
            "jsonb" => Some(Self::Json),
            other if TEXT_TYPE_REGEX.is_match(other) => Some(Self::Text),
            other if TEMPORAL_TYPE_REGEX.is_match(other) => Some(Self::Timestamp),
            _ => None,
        };

        mapped.ok_or_else(|| CodegenDomainError::UnknownType {
            catalog_type: catalog_type.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int32 => "int",
            Self::Int64 => "int64",
            Self::UInt8 => "uint8",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::Json => "pgsql.JSONStr",
            Self::Text => "string",
            Self::Timestamp => "time.Time",
        }
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Timestamp)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Source literal used to seed generated test fixtures.
    ///
    /// Only numeric and boolean values depend on `index`; booleans alternate
    /// starting with `false` at index 0.
    pub fn default_test_value(&self, index: usize) -> String {
        match self {
            Self::Int8 | Self::Int32 | Self::Int64 | Self::UInt8 | Self::UInt32 | Self::UInt64 => {
                index.to_string()
            }
            Self::Float32 | Self::Float64 => format!("{:.6}", index as f64),
            Self::Bool => (index % 2 == 1).to_string(),
            Self::Text => "\"test value\"".to_string(),
            Self::Timestamp => format!(
                "pgsql.TimeOnly(time.Parse(time.RFC3339, \"{}\"))",
                DateTime::<Utc>::UNIX_EPOCH.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            Self::Json => format!("`{}`", json!({ "ID": 123, "Name": "Hello, World" })),
        }
    }
}
