pub mod import_set;
pub mod template_name;
