pub mod advisor;
pub mod board;
pub mod config;
pub mod constants;
pub mod game;
