pub mod generation_run_command_service_impl;
