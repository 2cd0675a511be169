pub mod derivation;
pub mod form;
pub mod installation_service;
pub mod registry;
pub mod services;
pub mod store;
pub mod validator;
