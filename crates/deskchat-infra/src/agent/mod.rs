//! Agent service client implementations.

pub mod http;
