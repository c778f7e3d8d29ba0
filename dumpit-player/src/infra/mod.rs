pub mod constants;
pub mod runtime_config;
