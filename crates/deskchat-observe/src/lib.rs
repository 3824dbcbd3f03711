//! Logging and trace export setup for deskchat binaries.

pub mod tracing_setup;
