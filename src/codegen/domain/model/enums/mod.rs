pub mod codegen_domain_error;
pub mod field_kind;
pub mod import_marker;
pub mod target_type;
