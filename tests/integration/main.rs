//! Integration tests for sortviz

mod algorithms_test;
mod cli_test;
mod config_test;
mod controller_test;
mod helpers;
