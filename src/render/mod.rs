//! Human-readable output for the `locate` command.

pub mod text;

pub use text::render_configuration;
