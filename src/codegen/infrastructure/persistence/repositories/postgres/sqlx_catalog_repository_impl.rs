use async_trait::async_trait;
use sqlx::{Connection, PgPool, Postgres, Row, pool::PoolConnection, postgres::PgRow};

use crate::codegen::{
    domain::model::{
        entities::{column::Column, table::Table, table_constraint::TableConstraint},
        enums::codegen_domain_error::CodegenDomainError,
    },
    infrastructure::persistence::repositories::catalog_repository::CatalogRepository,
};

pub struct SqlxCatalogRepositoryImpl {
    pool: PgPool,
}

impl SqlxCatalogRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn live_connection(&self) -> Result<PoolConnection<Postgres>, CodegenDomainError> {
        let mut connection = self
            .pool
            .acquire()
            .await
            .map_err(|e| CodegenDomainError::Connectivity(e.to_string()))?;

        connection
            .ping()
            .await
            .map_err(|e| CodegenDomainError::Connectivity(e.to_string()))?;

        Ok(connection)
    }

    fn column_from_row(row: &PgRow) -> Result<Column, sqlx::Error> {
        Ok(Column {
            name: nullable_to_string(row.try_get("column_name")?),
            default: nullable_to_string(row.try_get("column_default")?),
            nullable: nullable_to_flag(row.try_get("is_nullable")?),
            catalog_type: nullable_to_string(row.try_get("data_type")?),
        })
    }

    fn constraint_from_row(row: &PgRow) -> Result<TableConstraint, sqlx::Error> {
        Ok(TableConstraint {
            column_name: nullable_to_string(row.try_get("column_name")?),
            constraint_type: nullable_to_string(row.try_get("constraint_type")?),
            is_deferrable: nullable_to_flag(row.try_get("is_deferrable")?),
            is_initially_deferred: nullable_to_flag(row.try_get("initially_deferred")?),
        })
    }
}

fn nullable_to_string(value: Option<String>) -> String {
    value.unwrap_or_default()
}

// information_schema encodes booleans as 'YES' / 'NO'.
fn nullable_to_flag(value: Option<String>) -> bool {
    value.as_deref() == Some("YES")
}

fn query_error(table: &Table, error: sqlx::Error) -> CodegenDomainError {
    CodegenDomainError::InfrastructureError(format!("{}: {}", table.qualified_name(), error))
}

#[async_trait]
impl CatalogRepository for SqlxCatalogRepositoryImpl {
    async fn ping(&self) -> Result<(), CodegenDomainError> {
        self.live_connection().await.map(|_| ())
    }

    async fn list_tables(&self) -> Result<Vec<Table>, CodegenDomainError> {
        let mut connection = self.live_connection().await?;

        let statement = r#"
            SELECT
                t.table_schema::text AS table_schema,
                t.table_name::text AS table_name
            FROM information_schema.tables t
            WHERE t.table_schema NOT IN ('pg_catalog', 'information_schema')
                AND t.table_type = 'BASE TABLE'
            ORDER BY t.table_schema, t.table_name
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&mut *connection)
            .await
            .map_err(|e| CodegenDomainError::InfrastructureError(e.to_string()))?;

        rows.iter()
            .map(|row| -> Result<Table, sqlx::Error> {
                Ok(Table {
                    schema: nullable_to_string(row.try_get("table_schema")?),
                    name: nullable_to_string(row.try_get("table_name")?),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CodegenDomainError::InfrastructureError(e.to_string()))
    }

    async fn list_columns(&self, table: &Table) -> Result<Vec<Column>, CodegenDomainError> {
        let mut connection = self.live_connection().await?;

        let statement = r#"
            SELECT
                c.column_name::text AS column_name,
                c.column_default::text AS column_default,
                c.is_nullable::text AS is_nullable,
                c.data_type::text AS data_type
            FROM information_schema.columns c
            WHERE c.table_schema = $1 AND c.table_name = $2
            ORDER BY c.ordinal_position
        "#;

        let rows = sqlx::query(statement)
            .bind(&table.schema)
            .bind(&table.name)
            .fetch_all(&mut *connection)
            .await
            .map_err(|e| query_error(table, e))?;

        rows.iter()
            .map(Self::column_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(table, e))
    }

    async fn list_constraints(
        &self,
        table: &Table,
    ) -> Result<Vec<TableConstraint>, CodegenDomainError> {
        let mut connection = self.live_connection().await?;

        let statement = r#"
            SELECT
                tc.constraint_type::text AS constraint_type,
                tc.initially_deferred::text AS initially_deferred,
                tc.is_deferrable::text AS is_deferrable,
                kcu.column_name::text AS column_name
            FROM information_schema.table_constraints tc
            INNER JOIN information_schema.key_column_usage kcu
                ON tc.constraint_name = kcu.constraint_name
                AND tc.table_schema = kcu.table_schema
                AND tc.table_name = kcu.table_name
            WHERE tc.table_schema = $1 AND tc.table_name = $2
        "#;

        let rows = sqlx::query(statement)
            .bind(&table.schema)
            .bind(&table.name)
            .fetch_all(&mut *connection)
            .await
            .map_err(|e| query_error(table, e))?;

        rows.iter()
            .map(Self::constraint_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| query_error(table, e))
    }
}
