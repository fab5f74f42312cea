// CLI surface: clap argument definitions and console rendering.
pub mod args;
pub mod output;
