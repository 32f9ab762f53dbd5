pub mod config;
pub mod database;
pub mod embedding;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
