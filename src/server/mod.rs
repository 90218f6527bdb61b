pub mod app;
mod error;
mod pagination;
mod quiz;
mod routes;
