use async_trait::async_trait;

use crate::codegen::domain::model::{
    entities::generation_context::GenerationContext,
    enums::codegen_domain_error::CodegenDomainError,
    value_objects::template_name::TemplateName,
};

/// Boundary to the template engine. Failures surface as
/// `CodegenDomainError::RenderError` and are passed through untouched.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    async fn render(
        &self,
        template_name: &TemplateName,
        context: &GenerationContext,
    ) -> Result<String, CodegenDomainError>;
}
