// Application layer: turns selected commands into report output.

pub mod commands;
