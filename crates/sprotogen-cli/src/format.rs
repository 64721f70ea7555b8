//! External source formatters

use sprotogen_core::{BoxError, Formatter, TargetLanguage};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Formatter invocation failure
#[derive(Error, Debug)]
pub enum FormatError {
    /// The formatter could not be started or fed
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The formatter rejected the source
    #[error("{program} exited with {status}: {stderr}")]
    Rejected {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The formatter produced non UTF-8 output
    #[error("{program} produced invalid UTF-8 output")]
    InvalidOutput { program: String },
}

/// Pipes source text through a formatter on `PATH`
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
}

impl ExternalFormatter {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Standard formatter of a target language
    pub fn for_language(lang: TargetLanguage) -> Self {
        match lang {
            TargetLanguage::Go => Self::new("gofmt", &[]),
            TargetLanguage::Rust => Self::new("rustfmt", &["--edition", "2024", "--emit", "stdout"]),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, source: &str) -> Result<String, FormatError> {
        let spawn_error = |source| FormatError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            // A formatter that exits before reading its input closes the pipe;
            // its exit status decides the result.
            match stdin.write_all(source.as_bytes()) {
                Err(err) if err.kind() != ErrorKind::BrokenPipe => return Err(spawn_error(err)),
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(spawn_error)?;

        if !output.status.success() {
            return Err(FormatError::Rejected {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| FormatError::InvalidOutput {
            program: self.program.clone(),
        })
    }
}

impl Formatter for ExternalFormatter {
    fn format(&self, source: &str) -> Result<String, BoxError> {
        Ok(self.run(source)?)
    }
}
