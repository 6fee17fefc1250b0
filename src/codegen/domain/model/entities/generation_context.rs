use serde::Serialize;
use uuid::Uuid;

use crate::codegen::domain::{
    model::{
        entities::{column::Column, table::Table, table_constraint::TableConstraint},
        enums::{
            codegen_domain_error::CodegenDomainError, import_marker::ImportMarker,
            target_type::TargetType,
        },
        value_objects::import_set::ImportSet,
    },
    services::{
        clause_builder::{
            delete_clause, insert_columns_clause, primary_key_function_args,
            primary_key_where_clause, return_key_clause, select_columns_clause, title_case,
            update_clause, update_function_args,
        },
        constraint_resolver::{
            column_constraints, is_primary_key, non_primary_key_names, primary_key_names,
        },
        type_mapper::{default_test_value, map_type},
    },
};

const BASE_IMPORTS: [ImportMarker; 2] = [ImportMarker::Formatting, ImportMarker::Reflection];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnField {
    pub column_name: String,
    pub field_name: String,
    pub target_type: TargetType,
    pub is_primary_key: bool,
    pub nullable: bool,
    pub has_default: bool,
    pub default_test_value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestFixtureField {
    pub field_name: String,
    pub target_type: TargetType,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableClauses {
    pub select: String,
    pub insert: String,
    pub update: String,
    pub delete: String,
    pub primary_key_where: String,
    pub returning: String,
    pub primary_key_args: String,
    pub primary_key_pointer_args: String,
    pub update_args: String,
}

/// Everything the templates need to render one table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationContext {
    pub schema: String,
    pub name: String,
    pub package_root: String,
    pub columns: Vec<Column>,
    pub constraints: Vec<TableConstraint>,
    pub primary_key_names: Vec<String>,
    pub non_primary_key_names: Vec<String>,
    pub imports_needed: ImportSet,
    pub test_imports_needed: ImportSet,
    pub fields: Vec<ColumnField>,
    pub test_fixture_fields: Vec<TestFixtureField>,
    pub clauses: TableClauses,
}

impl GenerationContext {
    pub fn assemble(
        table: &Table,
        columns: Vec<Column>,
        constraints: Vec<TableConstraint>,
        package_root: &str,
    ) -> Result<Self, CodegenDomainError> {
        let mut imports_needed = ImportSet::with_markers(&BASE_IMPORTS);
        let mut test_imports_needed = ImportSet::new();
        let mut fields = Vec::with_capacity(columns.len());
        let mut test_fixture_fields = Vec::new();

        for (index, column) in columns.iter().enumerate() {
            let target_type = map_type(&column.catalog_type).map_err(|_| {
                CodegenDomainError::UnknownColumnType {
                    schema: table.schema.clone(),
                    table: table.name.clone(),
                    column: column.name.clone(),
                    catalog_type: column.catalog_type.clone(),
                }
            })?;

            let constraint_types = column_constraints(&constraints, &column.name)
                .into_iter()
                .map(|c| c.constraint_type.as_str())
                .collect::<Vec<_>>();
            tracing::debug!(
                table = %table.qualified_name(),
                column = %column.name,
                catalog_type = %column.catalog_type,
                default = %column.default,
                constraints = ?constraint_types,
                "catalog column"
            );

            if target_type.is_temporal() {
                imports_needed.insert(ImportMarker::Temporal);
                test_imports_needed.insert(ImportMarker::Temporal);
            }

            let primary_key = is_primary_key(column, &constraints);
            let field_name = title_case(&column.name);
            let sample_value = default_test_value(target_type, index);

            if !column.has_default() {
                let value = if primary_key && target_type.is_text() {
                    format!("\"{}\"", fixture_key_urn(table, &column.name))
                } else {
                    sample_value.clone()
                };
                test_fixture_fields.push(TestFixtureField {
                    field_name: field_name.clone(),
                    target_type,
                    value,
                });
            }

            fields.push(ColumnField {
                column_name: column.name.clone(),
                field_name,
                target_type,
                is_primary_key: primary_key,
                nullable: column.nullable,
                has_default: column.has_default(),
                default_test_value: sample_value,
            });
        }

        let insertable = columns
            .iter()
            .filter(|column| !column.has_default())
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>();
        let all_names = columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>();

        let statement_name = table.statement_name();
        let clauses = TableClauses {
            select: select_columns_clause(all_names.as_slice()),
            insert: insert_columns_clause(insertable.as_slice(), &statement_name),
            update: update_clause(&columns, &constraints, &statement_name),
            delete: delete_clause(&columns, &constraints, &statement_name),
            primary_key_where: primary_key_where_clause(&columns, &constraints),
            returning: return_key_clause(&columns, &constraints),
            primary_key_args: primary_key_function_args(&columns, &constraints, "pk", false),
            primary_key_pointer_args: primary_key_function_args(
                &columns,
                &constraints,
                "pk",
                true,
            ),
            update_args: update_function_args(&columns, &constraints, "s", false),
        };

        Ok(Self {
            schema: table.schema.clone(),
            name: table.name.clone(),
            package_root: package_root.to_string(),
            primary_key_names: primary_key_names(&columns, &constraints),
            non_primary_key_names: non_primary_key_names(&columns, &constraints),
            columns,
            constraints,
            imports_needed,
            test_imports_needed,
            fields,
            test_fixture_fields,
            clauses,
        })
    }
}

// Deterministic per column.
fn fixture_key_urn(table: &Table, column_name: &str) -> String {
    let seed = format!("{}.{}", table.qualified_name(), column_name);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
        .urn()
        .to_string()
}
