pub mod config;
pub mod intake;
pub mod output;
pub mod scoring;
pub mod store;
