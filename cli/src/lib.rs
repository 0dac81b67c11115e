pub mod args;
pub mod contexts;
pub mod logging;
