pub mod actions;
pub mod commands;
pub mod display;
pub mod prompts;

pub use actions::MenuAction;
