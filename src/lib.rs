// Library crate exposing modules for integration tests

pub mod cli;
pub mod model;
pub mod scanner;
pub mod util;
