pub mod assets;
pub mod auth;
pub mod employees;
pub mod repairs;
