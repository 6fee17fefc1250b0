use crate::codegen::domain::model::enums::codegen_domain_error::CodegenDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new(value: String) -> Result<Self, CodegenDomainError> {
        let normalized = value.trim().to_string();
        let valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');

        if !valid {
            return Err(CodegenDomainError::InvalidTemplateName);
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
