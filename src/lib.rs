pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod json_io;
pub mod numerical;
pub mod poisson;
pub mod scenario;
pub mod solution;
pub mod solver;
