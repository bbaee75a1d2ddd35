//! pagechunk CLI library
//!
//! This library provides the command-line interface for extracting text
//! from PDF and plain-text documents and splitting it into overlapping
//! chunks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
