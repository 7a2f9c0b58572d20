// ABOUTME: Schema transfer: recreate a source table's structure in another base
// ABOUTME: Only field names and type tags survive the copy

use crate::airtable::models::{Field, FieldSpec, Table};
use crate::airtable::AirtableClient;

use super::ReplicateError;

/// Recreate `table_name`'s structure from `source_base` inside `dest_base`.
///
/// The table is located by exact, case-sensitive name in the source schema.
/// Field options (colors, icons, descriptions) are dropped; a name collision
/// in the destination is left to the service to reject.
pub async fn replicate_table(
    client: &AirtableClient,
    source_base: &str,
    table_name: &str,
    dest_base: &str,
) -> Result<Table, ReplicateError> {
    let tables = client
        .get_tables_with_fields(source_base)
        .await
        .map_err(ReplicateError::SchemaFetchFailed)?;

    let source = tables
        .iter()
        .find(|t| t.name == table_name)
        .ok_or_else(|| ReplicateError::TableNotFound(table_name.to_string()))?;

    let fields = project_fields(&source.fields);
    tracing::debug!(
        field_count = fields.len(),
        "creating table '{}' in base {}",
        table_name,
        dest_base
    );

    client
        .create_table(dest_base, table_name, &fields)
        .await
        .map_err(|source| ReplicateError::TableCreationFailed {
            name: table_name.to_string(),
            source,
        })
}

/// Project fields to their `{name, type}` pairs, preserving order.
pub fn project_fields(fields: &[Field]) -> Vec<FieldSpec> {
    fields.iter().map(FieldSpec::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn field(value: serde_json::Value) -> Field {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_projection_keeps_name_and_type_in_order() {
        let fields = vec![
            field(json!({"id": "fld1", "name": "Name", "type": "singleLineText"})),
            field(json!({
                "id": "fld2",
                "name": "Visited",
                "type": "checkbox",
                "description": "been there",
                "options": {"color": "greenBright", "icon": "check"}
            })),
            field(json!({"id": "fld3", "name": "Email", "type": "email"})),
        ];

        let projected = project_fields(&fields);
        assert_eq!(
            projected,
            vec![
                FieldSpec {
                    name: "Name".into(),
                    field_type: "singleLineText".into()
                },
                FieldSpec {
                    name: "Visited".into(),
                    field_type: "checkbox".into()
                },
                FieldSpec {
                    name: "Email".into(),
                    field_type: "email".into()
                },
            ]
        );
    }

    #[test]
    fn test_projection_serializes_without_options() {
        let fields = vec![field(json!({
            "name": "Visited",
            "type": "checkbox",
            "options": {"color": "greenBright"}
        }))];

        let value = serde_json::to_value(project_fields(&fields)).unwrap();
        assert_eq!(value, json!([{"name": "Visited", "type": "checkbox"}]));
    }
}
