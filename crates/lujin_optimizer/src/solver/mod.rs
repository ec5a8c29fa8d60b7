pub mod assignment;
pub mod construction;
pub mod index_manager;
pub mod routing_model;
pub mod search_parameters;
