pub mod config;
pub mod generate;
pub mod headers;
pub mod timezone;
