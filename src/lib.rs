pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod models;
pub mod state;
