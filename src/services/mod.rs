// Services module for scaffolding logic

pub mod frontend;
pub mod generator;
pub mod templates;
