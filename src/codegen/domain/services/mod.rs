pub mod clause_builder;
pub mod constraint_resolver;
pub mod generation_run_command_service;
pub mod table_context_query_service;
pub mod type_mapper;
