pub mod table_context_query_service_impl;
