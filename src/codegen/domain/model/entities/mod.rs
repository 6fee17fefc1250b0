pub mod column;
pub mod generation_context;
pub mod generation_run_report;
pub mod structured_record;
pub mod table;
pub mod table_constraint;
