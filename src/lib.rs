pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;
