pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod migration;
pub mod models;
pub mod params;
pub mod seed;
pub mod services;
pub mod state;
pub mod telemetry;
