pub mod command;
pub mod service;
pub mod shared;
pub mod store;
