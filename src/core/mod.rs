pub mod algorithm;
pub mod config;
pub mod morse_table;
pub mod params;
pub mod request;
