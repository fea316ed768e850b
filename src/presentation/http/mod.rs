// src/presentation/http/mod.rs
pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
