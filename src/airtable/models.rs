// ABOUTME: Typed request and response payloads for the Airtable API
// ABOUTME: Decoding is validated at the client boundary so malformed bodies fail early

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workspace-scoped database container, as listed by `GET meta/bases`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub permission_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BaseList {
    pub bases: Vec<Base>,
}

/// A column definition as returned by the table-schema endpoint. Airtable
/// attaches per-type `options` (colors, precision, choices) which are decoded
/// here but never transferred.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Option<Value>,
}

/// The `{name, type}` projection of a [`Field`]: the only field shape ever
/// sent when recreating a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl From<&Field> for FieldSpec {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            field_type: field.field_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub primary_field_id: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Deserialize)]
pub struct TableList {
    pub tables: Vec<Table>,
}

/// Id/name projection used by listing flows that don't need field schemas.
#[derive(Debug, Clone)]
pub struct TableSummary {
    pub id: String,
    pub name: String,
}

/// A row fetched from a table. `fields` is keyed by field name; values keep
/// their JSON shape since cell types vary per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// One page of a record listing. A present `offset` means more pages follow;
/// the token is opaque and only ever echoed back.
#[derive(Debug, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// A record to be created at the destination: field values only, so the
/// service assigns a fresh identifier.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    pub fields: Map<String, Value>,
}

impl From<&Record> for NewRecord {
    fn from(record: &Record) -> Self {
        Self {
            fields: record.fields.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateRecordsRequest<'a> {
    pub records: &'a [NewRecord],
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordsResponse {
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct CreateTableRequest<'a> {
    pub name: &'a str,
    pub fields: &'a [FieldSpec],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBaseRequest<'a> {
    pub name: &'a str,
    pub workspace_id: &'a str,
    pub tables: Vec<StarterTable>,
}

/// The service requires at least one table in a new base.
#[derive(Debug, Serialize)]
pub struct StarterTable {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl StarterTable {
    pub fn default_structure() -> Self {
        Self {
            name: "Table1".to_string(),
            fields: vec![
                FieldSpec {
                    name: "Field1".to_string(),
                    field_type: "singleLineText".to_string(),
                },
                FieldSpec {
                    name: "Field2".to_string(),
                    field_type: "singleLineText".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedBase {
    pub id: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}
