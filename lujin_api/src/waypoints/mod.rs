pub mod optimize_handler;
pub mod routes;
