use crate::codegen::domain::model::enums::{
    codegen_domain_error::CodegenDomainError, target_type::TargetType,
};

pub fn map_type(catalog_type: &str) -> Result<TargetType, CodegenDomainError> {
    TargetType::from_catalog_type(catalog_type)
}

pub fn default_test_value(target_type: TargetType, index: usize) -> String {
    target_type.default_test_value(index)
}
