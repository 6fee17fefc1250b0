mod generation_run_command_service_tests;
mod table_context_query_service_tests;
