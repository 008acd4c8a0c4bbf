pub mod config;
pub mod generate;
pub mod id;
pub mod tags;
