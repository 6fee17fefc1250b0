use std::sync::Arc;

use pggen::codegen::{
    application::{
        command_services::generation_run_command_service_impl::GenerationRunCommandServiceImpl,
        query_services::table_context_query_service_impl::TableContextQueryServiceImpl,
    },
    domain::model::entities::{column::Column, table::Table, table_constraint::TableConstraint},
};

use super::fakes::{FakeCatalogRepository, FakeTemplateRenderer};

pub struct GenerationHarness {
    pub catalog: Arc<FakeCatalogRepository>,
    pub renderer: Arc<FakeTemplateRenderer>,
    pub query_service: Arc<TableContextQueryServiceImpl>,
    pub run_service: GenerationRunCommandServiceImpl,
}

pub fn create_harness(
    tables: Vec<(Table, Vec<Column>, Vec<TableConstraint>)>,
) -> GenerationHarness {
    let catalog = Arc::new(FakeCatalogRepository::new());
    for (table, columns, constraints) in tables {
        catalog.add_table(table, columns, constraints);
    }

    let renderer = Arc::new(FakeTemplateRenderer::new());
    let query_service = Arc::new(TableContextQueryServiceImpl::new(catalog.clone()));
    let run_service = GenerationRunCommandServiceImpl::new(query_service.clone(), renderer.clone());

    GenerationHarness {
        catalog,
        renderer,
        query_service,
        run_service,
    }
}
