pub mod batch;
pub mod config;
pub mod modes;
pub mod process;
pub mod session;
