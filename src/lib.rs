pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod users;
