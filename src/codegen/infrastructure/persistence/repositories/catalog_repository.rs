use async_trait::async_trait;

use crate::codegen::domain::model::{
    entities::{column::Column, table::Table, table_constraint::TableConstraint},
    enums::codegen_domain_error::CodegenDomainError,
};

/// Read access to the database catalog.
///
/// Every listing probes the connection first and fails with
/// `CodegenDomainError::Connectivity` instead of returning stale or empty results.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn ping(&self) -> Result<(), CodegenDomainError>;

    /// User tables ordered by schema and name, system schemas excluded.
    async fn list_tables(&self) -> Result<Vec<Table>, CodegenDomainError>;

    /// Columns in catalog ordinal order.
    async fn list_columns(&self, table: &Table) -> Result<Vec<Column>, CodegenDomainError>;

    async fn list_constraints(
        &self,
        table: &Table,
    ) -> Result<Vec<TableConstraint>, CodegenDomainError>;
}
