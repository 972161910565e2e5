pub mod favorites;
pub mod generator;
pub mod logging;
pub mod tables;
