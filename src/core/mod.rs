pub mod agent;
pub mod config;
pub mod models;
pub mod services;
