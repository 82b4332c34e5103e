pub mod config;
pub mod engine;
pub mod error;
pub mod geo;
pub mod models;
pub mod report;
