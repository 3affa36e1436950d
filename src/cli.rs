use crate::SolverConfig;
use clap::Parser;
use miette::{Diagnostic, Result};
use std::{io::Read, path::PathBuf};
use thiserror::Error;

/// Decides satisfiability of a 2-CNF formula given in DIMACS format.
///
/// Exits with 10 if the formula is satisfiable and 20 if it is not.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Path to the DIMACS file, reads from stdin if omitted
    pub input: Option<PathBuf>,

    /// Abort if the formula contains more variables
    #[arg(long, value_name = "N")]
    pub max_variables: Option<usize>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ArgError {
    #[error("Path {} does not exist", path.display())]
    FileDoesNotExist { path: PathBuf },

    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },

    #[error("Cannot read file {}: {}", path.display(), err)]
    CannotReadFile { path: PathBuf, err: std::io::Error },

    #[error("Cannot read from stdin: {}", err)]
    CannotReadStdIn { err: std::io::Error },
}

impl Args {
    #[must_use]
    pub fn config(&self) -> SolverConfig {
        SolverConfig { max_variables: self.max_variables }
    }

    /// Reads the input file, or stdin if no file was given.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgError`] if the input cannot be read.
    pub fn content(&self) -> Result<String> {
        let Some(file_path) = &self.input else {
            tracing::info!("No input file provided, read from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| ArgError::CannotReadStdIn { err })?;
            return Ok(buffer);
        };
        if !file_path.exists() {
            return Err(ArgError::FileDoesNotExist { path: file_path.clone() }.into());
        }
        if !file_path.is_file() {
            return Err(ArgError::NotAFile { path: file_path.clone() }.into());
        }
        let contents = std::fs::read_to_string(file_path)
            .map_err(|err| ArgError::CannotReadFile { path: file_path.clone(), err })?;
        Ok(contents)
    }
}
