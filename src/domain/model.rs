use crate::utils::error::{BoltError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Configuration map handed to a component by its host at prepare time.
pub type TopologyConf = HashMap<String, serde_json::Value>;

/// A single typed value inside a tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    U64(u64),
    I64(i64),
    Bool(bool),
}

impl Value {
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Str(_) => FieldType::String,
            Value::U64(_) => FieldType::UnsignedInteger,
            Value::I64(_) => FieldType::Integer,
            Value::Bool(_) => FieldType::Boolean,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::U64(n) => write!(f, "{}", n),
            Value::I64(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

/// Fixed-shape ordered record flowing between components.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tuple {
    values: Vec<Value>,
}

impl Tuple {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or(BoltError::MissingField {
            index,
            arity: self.values.len(),
        })
    }

    pub fn get_string(&self, index: usize) -> Result<&str> {
        match self.get(index)? {
            Value::Str(s) => Ok(s),
            other => Err(BoltError::FieldType {
                index,
                expected: FieldType::String,
                found: other.field_type(),
            }),
        }
    }

    pub fn get_u64(&self, index: usize) -> Result<u64> {
        match self.get(index)? {
            Value::U64(n) => Ok(*n),
            other => Err(BoltError::FieldType {
                index,
                expected: FieldType::UnsignedInteger,
                found: other.field_type(),
            }),
        }
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    UnsignedInteger,
    Integer,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::UnsignedInteger => "unsigned_integer",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldType,
}

impl Field {
    pub fn new(name: &str, kind: FieldType) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Output schema a component declares to its host before processing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fields {
    fields: Vec<Field>,
}

impl Fields {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Checks arity and per-position type of `tuple` against this schema.
    pub fn validate(&self, tuple: &Tuple) -> Result<()> {
        if tuple.len() != self.fields.len() {
            return Err(BoltError::SchemaMismatch {
                message: format!(
                    "expected {} fields ({}), got {}",
                    self.fields.len(),
                    self.names().join(", "),
                    tuple.len()
                ),
            });
        }

        for (field, value) in self.fields.iter().zip(tuple.values()) {
            if field.kind != value.field_type() {
                return Err(BoltError::SchemaMismatch {
                    message: format!(
                        "field '{}' expects {}, got {}",
                        field.name,
                        field.kind,
                        value.field_type()
                    ),
                });
            }
        }

        Ok(())
    }
}

/// A word paired with its running count after the latest increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: &str, count: u64) -> Self {
        Self {
            word: word.to_string(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.word, self.count)
    }
}

impl From<WordCount> for Tuple {
    fn from(record: WordCount) -> Self {
        Tuple::new(vec![Value::Str(record.word), Value::U64(record.count)])
    }
}

impl TryFrom<&Tuple> for WordCount {
    type Error = BoltError;

    fn try_from(tuple: &Tuple) -> Result<Self> {
        Ok(Self {
            word: tuple.get_string(0)?.to_string(),
            count: tuple.get_u64(1)?,
        })
    }
}

/// How emitted records are rendered by a writer-backed collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = BoltError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(BoltError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}
