use async_trait::async_trait;
use serde::Serialize;

use crate::codegen::{
    domain::model::{
        entities::generation_context::GenerationContext,
        enums::codegen_domain_error::CodegenDomainError,
        value_objects::template_name::TemplateName,
    },
    interfaces::acl::template_renderer::TemplateRenderer,
};

#[derive(Serialize)]
struct RenderedDocument<'a> {
    template: &'a str,
    context: &'a GenerationContext,
}

/// Renders the raw context as JSON, tagged with the requested template.
pub struct JsonContextRendererImpl;

impl JsonContextRendererImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonContextRendererImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateRenderer for JsonContextRendererImpl {
    async fn render(
        &self,
        template_name: &TemplateName,
        context: &GenerationContext,
    ) -> Result<String, CodegenDomainError> {
        serde_json::to_string_pretty(&RenderedDocument {
            template: template_name.value(),
            context,
        })
        .map_err(|e| CodegenDomainError::RenderError(e.to_string()))
    }
}
