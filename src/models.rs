pub mod config;
pub mod error;
pub mod installation;
pub mod notification;
pub mod paths;
