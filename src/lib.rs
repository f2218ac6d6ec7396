// Library for tests to access modules

pub mod config;
pub mod models;
pub mod overview;
pub mod providers;
pub mod routes;
pub mod version;
