use std::sync::Arc;

use async_trait::async_trait;

use crate::codegen::{
    domain::{
        model::{
            entities::{generation_context::GenerationContext, table::Table},
            enums::codegen_domain_error::CodegenDomainError,
            queries::table_context_query::TableContextQuery,
        },
        services::table_context_query_service::TableContextQueryService,
    },
    infrastructure::persistence::repositories::catalog_repository::CatalogRepository,
};

pub struct TableContextQueryServiceImpl {
    catalog_repository: Arc<dyn CatalogRepository>,
}

impl TableContextQueryServiceImpl {
    pub fn new(catalog_repository: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog_repository }
    }
}

#[async_trait]
impl TableContextQueryService for TableContextQueryServiceImpl {
    async fn handle_list_tables(&self) -> Result<Vec<Table>, CodegenDomainError> {
        self.catalog_repository.list_tables().await
    }

    async fn handle_table_context(
        &self,
        query: TableContextQuery,
    ) -> Result<GenerationContext, CodegenDomainError> {
        let columns = self.catalog_repository.list_columns(query.table()).await?;
        let constraints = self
            .catalog_repository
            .list_constraints(query.table())
            .await?;

        tracing::debug!(
            table = %query.table().qualified_name(),
            columns = columns.len(),
            constraints = constraints.len(),
            "catalog entries loaded"
        );

        GenerationContext::assemble(query.table(), columns, constraints, query.package_root())
    }
}
