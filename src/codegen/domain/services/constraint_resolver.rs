use crate::codegen::domain::model::entities::{column::Column, table_constraint::TableConstraint};

pub fn is_primary_key(column: &Column, constraints: &[TableConstraint]) -> bool {
    constraints
        .iter()
        .any(|constraint| constraint.is_primary_key_for(&column.name))
}

/// Primary key columns in declaration order.
pub fn primary_key_columns<'a>(
    columns: &'a [Column],
    constraints: &'a [TableConstraint],
) -> impl Iterator<Item = &'a Column> {
    columns
        .iter()
        .filter(move |column| is_primary_key(column, constraints))
}

pub fn primary_key_names(columns: &[Column], constraints: &[TableConstraint]) -> Vec<String> {
    primary_key_columns(columns, constraints)
        .map(|column| column.name.clone())
        .collect()
}

pub fn non_primary_key_columns<'a>(
    columns: &'a [Column],
    constraints: &'a [TableConstraint],
) -> impl Iterator<Item = &'a Column> {
    columns
        .iter()
        .filter(move |column| !is_primary_key(column, constraints))
}

pub fn non_primary_key_names(columns: &[Column], constraints: &[TableConstraint]) -> Vec<String> {
    non_primary_key_columns(columns, constraints)
        .map(|column| column.name.clone())
        .collect()
}

pub fn column_constraints<'a>(
    constraints: &'a [TableConstraint],
    column_name: &str,
) -> Vec<&'a TableConstraint> {
    constraints
        .iter()
        .filter(|constraint| constraint.column_name == column_name)
        .collect()
}
