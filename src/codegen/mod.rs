use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::{
    codegen::{
        application::{
            acl::json_context_renderer_impl::JsonContextRendererImpl,
            command_services::generation_run_command_service_impl::GenerationRunCommandServiceImpl,
            query_services::table_context_query_service_impl::TableContextQueryServiceImpl,
        },
        domain::model::{
            commands::run_generation_command::RunGenerationCommand,
            enums::codegen_domain_error::CodegenDomainError,
        },
        infrastructure::persistence::repositories::{
            catalog_repository::CatalogRepository,
            postgres::sqlx_catalog_repository_impl::SqlxCatalogRepositoryImpl,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Wires the catalog connection, the assembler and the JSON renderer.
///
/// The pool holds a single connection: the run never queries concurrently.
pub async fn build_generation_run_service(
    config: &AppConfig,
) -> Result<GenerationRunCommandServiceImpl, String> {
    let catalog_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.catalog_database_url())
        .await
        .map_err(|e| e.to_string())?;

    let catalog_repository = Arc::new(SqlxCatalogRepositoryImpl::new(catalog_pool));
    catalog_repository.ping().await.map_err(|e| e.to_string())?;

    let table_context_query_service =
        Arc::new(TableContextQueryServiceImpl::new(catalog_repository));
    let template_renderer = Arc::new(JsonContextRendererImpl::new());

    Ok(GenerationRunCommandServiceImpl::new(
        table_context_query_service,
        template_renderer,
    ))
}

pub fn run_generation_command(
    config: &AppConfig,
) -> Result<RunGenerationCommand, CodegenDomainError> {
    RunGenerationCommand::new(
        config.templates.clone(),
        config.package_root.clone(),
        config.strict,
    )
}
