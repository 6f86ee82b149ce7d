//! Hardware assignment and inter-task communication
pub mod resources;
pub mod tone_command;
