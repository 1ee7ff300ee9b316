pub mod bot;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod intent;
pub mod logging;
pub mod prompter;
pub mod ui;

#[cfg(test)]
mod testing;
