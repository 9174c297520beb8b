//! Utility functions for error handling
//!
//! This module provides helpers that attach path and purpose context to
//! IO errors raised while opening collaborator data files.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(PipelineError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {} (needed for {purpose})", path.display()),
        )));
    }

    if !path.is_file() {
        return Err(PipelineError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a file: {} (expected a file for {purpose})", path.display()),
        )));
    }

    fs::File::open(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open {} for {purpose}: {e}", path.display()),
        ))
    })
}

/// Check that a directory exists and is a directory before scanning it
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() || !path.is_dir() {
        return Err(PipelineError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Directory not found: {} (needed for {purpose})", path.display()),
        )));
    }
    Ok(())
}
