pub mod cli;
pub mod export;
pub mod interactive;
pub mod ports;
