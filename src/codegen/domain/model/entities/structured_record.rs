use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

use crate::codegen::domain::model::enums::{
    codegen_domain_error::CodegenDomainError, field_kind::FieldKind,
};

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Temporal(DateTime<FixedOffset>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::Float(_) => FieldKind::Float,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Text(_) | Self::Temporal(_) => FieldKind::StringOrTemporal,
        }
    }

    /// Inline SQL literal. Not safe for executed statements.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => float_literal(*value),
            Self::Boolean(value) => value.to_string(),
            Self::Text(value) => format!("'{}'", value.replace('\'', "''")),
            Self::Temporal(value) => {
                format!("'{}'", value.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub value: FieldValue,
}

/// One row's worth of named, typed values in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuredRecord {
    fields: Vec<RecordField>,
}

impl StructuredRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push(RecordField {
            name: name.into(),
            value,
        });
    }

    pub fn from_json_object(payload: &Value) -> Result<Self, CodegenDomainError> {
        let object = payload
            .as_object()
            .ok_or_else(|| CodegenDomainError::UnsupportedFieldType {
                field: "<record>".to_string(),
                kind: json_kind(payload).to_string(),
            })?;

        let mut record = Self::new();
        for (name, value) in object {
            let field_value = match value {
                Value::Bool(flag) => FieldValue::Boolean(*flag),
                Value::Number(number) => match number.as_i64() {
                    Some(integer) => FieldValue::Integer(integer),
                    None => FieldValue::Float(number.as_f64().unwrap_or_default()),
                },
                Value::String(text) => FieldValue::Text(text.clone()),
                other => {
                    return Err(CodegenDomainError::UnsupportedFieldType {
                        field: name.clone(),
                        kind: json_kind(other).to_string(),
                    });
                }
            };
            record.push(name.clone(), field_value);
        }

        Ok(record)
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Non-finite floats only exist in SQL as quoted special values.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "'NaN'".to_string()
    } else if value.is_infinite() && value.is_sign_positive() {
        "'Infinity'".to_string()
    } else if value.is_infinite() {
        "'-Infinity'".to_string()
    } else {
        value.to_string()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
