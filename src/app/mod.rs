// Application layer: turns parsed CLI commands into toolkit calls.

pub mod commands;
