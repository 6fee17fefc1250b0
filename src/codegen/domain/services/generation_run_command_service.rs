use async_trait::async_trait;

use crate::codegen::domain::model::{
    commands::run_generation_command::RunGenerationCommand,
    entities::generation_run_report::GenerationRunReport,
    enums::codegen_domain_error::CodegenDomainError,
};

#[async_trait]
pub trait GenerationRunCommandService: Send + Sync {
    async fn handle_run(
        &self,
        command: RunGenerationCommand,
    ) -> Result<GenerationRunReport, CodegenDomainError>;
}
