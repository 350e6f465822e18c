pub mod config;
pub mod errors;
pub mod responses;
pub mod star;
