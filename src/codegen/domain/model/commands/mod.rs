pub mod run_generation_command;
