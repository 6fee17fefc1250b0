pub mod table_context_query;
