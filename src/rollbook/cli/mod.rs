mod commands;
mod input;
mod render;
mod setup;
mod shell;

pub use commands::run;
