use crate::codegen::domain::model::{
    enums::codegen_domain_error::CodegenDomainError, value_objects::template_name::TemplateName,
};

#[derive(Clone, Debug)]
pub struct RunGenerationCommand {
    template_names: Vec<TemplateName>,
    package_root: String,
    strict: bool,
}

impl RunGenerationCommand {
    pub fn new(
        template_names: Vec<String>,
        package_root: String,
        strict: bool,
    ) -> Result<Self, CodegenDomainError> {
        let template_names = template_names
            .into_iter()
            .map(TemplateName::new)
            .collect::<Result<Vec<_>, _>>()?;

        if template_names.is_empty() {
            return Err(CodegenDomainError::InvalidTemplateName);
        }

        Ok(Self {
            template_names,
            package_root,
            strict,
        })
    }

    pub fn template_names(&self) -> &[TemplateName] {
        &self.template_names
    }
    pub fn package_root(&self) -> &str {
        &self.package_root
    }
    pub fn strict(&self) -> bool {
        self.strict
    }
}
