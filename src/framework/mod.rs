pub mod config;
pub use config::Config;

pub mod data;

pub mod gate;
pub mod logging;
pub mod poise;
