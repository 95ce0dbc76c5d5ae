pub mod config;
pub mod respond;
pub mod state;
pub mod status;
pub mod watch;
