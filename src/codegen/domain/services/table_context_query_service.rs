use async_trait::async_trait;

use crate::codegen::domain::model::{
    entities::{generation_context::GenerationContext, table::Table},
    enums::codegen_domain_error::CodegenDomainError,
    queries::table_context_query::TableContextQuery,
};

#[async_trait]
pub trait TableContextQueryService: Send + Sync {
    async fn handle_list_tables(&self) -> Result<Vec<Table>, CodegenDomainError>;

    async fn handle_table_context(
        &self,
        query: TableContextQuery,
    ) -> Result<GenerationContext, CodegenDomainError>;
}
