use std::sync::Arc;

use async_trait::async_trait;

use crate::codegen::{
    domain::{
        model::{
            commands::run_generation_command::RunGenerationCommand,
            entities::generation_run_report::{
                GenerationRunReport, RenderedArtifact, SkippedTable,
            },
            enums::codegen_domain_error::CodegenDomainError,
            queries::table_context_query::TableContextQuery,
        },
        services::{
            generation_run_command_service::GenerationRunCommandService,
            table_context_query_service::TableContextQueryService,
        },
    },
    interfaces::acl::template_renderer::TemplateRenderer,
};

pub struct GenerationRunCommandServiceImpl {
    table_context_query_service: Arc<dyn TableContextQueryService>,
    template_renderer: Arc<dyn TemplateRenderer>,
}

impl GenerationRunCommandServiceImpl {
    pub fn new(
        table_context_query_service: Arc<dyn TableContextQueryService>,
        template_renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            table_context_query_service,
            template_renderer,
        }
    }
}

#[async_trait]
impl GenerationRunCommandService for GenerationRunCommandServiceImpl {
    /// Tables are generated one at a time in listing order. Table-scoped
    /// failures skip the table unless the command is strict; anything else
    /// aborts the run.
    async fn handle_run(
        &self,
        command: RunGenerationCommand,
    ) -> Result<GenerationRunReport, CodegenDomainError> {
        let tables = self.table_context_query_service.handle_list_tables().await?;
        tracing::info!(tables = tables.len(), "catalog tables listed");

        let mut report = GenerationRunReport::default();

        for table in tables {
            let query = TableContextQuery::new(table.clone(), command.package_root().to_string());

            let context = match self
                .table_context_query_service
                .handle_table_context(query)
                .await
            {
                Ok(context) => context,
                Err(error) if error.is_table_scoped() && !command.strict() => {
                    tracing::warn!(
                        table = %table.qualified_name(),
                        %error,
                        "skipping table"
                    );
                    report.skipped_tables.push(SkippedTable {
                        table,
                        reason: error.to_string(),
                    });
                    continue;
                }
                Err(error) => {
                    tracing::error!(
                        table = %table.qualified_name(),
                        %error,
                        "generation aborted"
                    );
                    return Err(error);
                }
            };

            for template_name in command.template_names() {
                let contents = self
                    .template_renderer
                    .render(template_name, &context)
                    .await?;

                report.artifacts.push(RenderedArtifact {
                    table: table.clone(),
                    template_name: template_name.value().to_string(),
                    contents,
                });
            }

            tracing::info!(
                table = %table.qualified_name(),
                primary_key = ?context.primary_key_names,
                "table generated"
            );
        }

        Ok(report)
    }
}
