pub mod api;
pub mod config;
pub mod error;
pub mod jsonfile;
pub mod junit;
pub mod runner;
pub mod style;
pub mod summary;
pub mod testjson;
