pub mod cli;
pub mod commands;
pub mod error;
pub mod layout;
pub mod logging;
