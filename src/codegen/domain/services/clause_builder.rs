//! SQL fragment builders.
//!
//! Every function here is a pure, order-preserving derivation of its inputs:
//! field order decides select-list order and the `$n` placeholder bound to
//! each field.

use crate::codegen::domain::{
    model::entities::{
        column::Column, structured_record::StructuredRecord, table_constraint::TableConstraint,
    },
    services::constraint_resolver::{non_primary_key_columns, primary_key_columns},
};

/// `select f1, f2`. An empty record yields a bare `select`.
pub fn select_clause(record: &StructuredRecord) -> String {
    let names = record.names().collect::<Vec<_>>();
    select_columns_clause(names.as_slice())
}

pub fn select_columns_clause<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        return "select".to_string();
    }

    format!("select {}", join_names(names, ", "))
}

/// `insert into table (f1,f2) values ($1,$2)`, or `insert into table default values`
/// when there is nothing to bind.
pub fn insert_clause(record: &StructuredRecord, table_name: &str) -> String {
    let names = record.names().collect::<Vec<_>>();
    insert_columns_clause(names.as_slice(), table_name)
}

pub fn insert_columns_clause<S: AsRef<str>>(names: &[S], table_name: &str) -> String {
    if names.is_empty() {
        return format!("insert into {table_name} default values");
    }

    let placeholders = (1..=names.len())
        .map(|position| format!("${position}"))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "insert into {} ({}) values ({})",
        table_name,
        join_names(names, ","),
        placeholders
    )
}

/// ` where f1=v1 and f2='v2'` with values inlined as literals.
///
/// Meant for log and debug output only. Executed statements go through the
/// placeholder builders.
pub fn where_clause(record: &StructuredRecord) -> String {
    if record.is_empty() {
        return String::new();
    }

    let predicates = record
        .fields()
        .iter()
        .map(|field| format!("{}={}", field.name, field.value.to_sql_literal()))
        .collect::<Vec<_>>()
        .join(" and ");

    format!(" where {predicates}")
}

/// `where k1 = $1 and k2 = $2`, numbered over the key columns only.
pub fn primary_key_where_clause(columns: &[Column], constraints: &[TableConstraint]) -> String {
    key_predicates(columns, constraints, 0)
        .map(|predicates| format!("where {predicates}"))
        .unwrap_or_default()
}

/// `update t set n1 = $1, n2 = $2 where k1 = $3`. Key placeholders continue
/// after the set list. Empty without a key or without non-key columns.
pub fn update_clause(
    columns: &[Column],
    constraints: &[TableConstraint],
    table_name: &str,
) -> String {
    let assignments = non_primary_key_columns(columns, constraints)
        .enumerate()
        .map(|(index, column)| format!("{} = ${}", column.name, index + 1))
        .collect::<Vec<_>>();

    if assignments.is_empty() {
        return String::new();
    }

    key_predicates(columns, constraints, assignments.len())
        .map(|predicates| {
            format!(
                "update {} set {} where {}",
                table_name,
                assignments.join(", "),
                predicates
            )
        })
        .unwrap_or_default()
}

/// `delete from t where k1 = $1`, or empty without a key.
pub fn delete_clause(
    columns: &[Column],
    constraints: &[TableConstraint],
    table_name: &str,
) -> String {
    key_predicates(columns, constraints, 0)
        .map(|predicates| format!("delete from {table_name} where {predicates}"))
        .unwrap_or_default()
}

/// `returning k1, k2`, or empty when the table has no primary key.
pub fn return_key_clause(columns: &[Column], constraints: &[TableConstraint]) -> String {
    let keys = primary_key_columns(columns, constraints)
        .map(|column| column.name.as_str())
        .collect::<Vec<_>>();

    if keys.is_empty() {
        return String::new();
    }

    format!("returning {}", keys.join(", "))
}

pub fn field_arguments(variable: &str, record: &StructuredRecord, want_pointers: bool) -> String {
    argument_list(variable, record.names(), want_pointers)
}

pub fn primary_key_function_args(
    columns: &[Column],
    constraints: &[TableConstraint],
    variable: &str,
    want_pointers: bool,
) -> String {
    let fields = primary_key_columns(columns, constraints)
        .map(|column| title_case(&column.name))
        .collect::<Vec<_>>();

    argument_list(variable, fields.iter().map(String::as_str), want_pointers)
}

/// Arguments bound by [`update_clause`]: non-key fields, then key fields.
pub fn update_function_args(
    columns: &[Column],
    constraints: &[TableConstraint],
    variable: &str,
    want_pointers: bool,
) -> String {
    let has_key = primary_key_columns(columns, constraints).next().is_some();
    let has_assignments = non_primary_key_columns(columns, constraints).next().is_some();
    if !(has_key && has_assignments) {
        return String::new();
    }

    let fields = non_primary_key_columns(columns, constraints)
        .chain(primary_key_columns(columns, constraints))
        .map(|column| title_case(&column.name))
        .collect::<Vec<_>>();

    argument_list(variable, fields.iter().map(String::as_str), want_pointers)
}

/// Upper-cases the first letter of every word; `_` and digits do not split words.
pub fn title_case(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if at_word_start {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    titled
}

fn argument_list<'a>(
    variable: &str,
    names: impl Iterator<Item = &'a str>,
    want_pointers: bool,
) -> String {
    let marker = if want_pointers { "&" } else { "" };

    names
        .map(|name| format!("{marker}{variable}.{name}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn key_predicates(
    columns: &[Column],
    constraints: &[TableConstraint],
    offset: usize,
) -> Option<String> {
    let predicates = primary_key_columns(columns, constraints)
        .enumerate()
        .map(|(index, column)| format!("{} = ${}", column.name, offset + index + 1))
        .collect::<Vec<_>>();

    if predicates.is_empty() {
        return None;
    }

    Some(predicates.join(" and "))
}

fn join_names<S: AsRef<str>>(names: &[S], separator: &str) -> String {
    names
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<_>>()
        .join(separator)
}
