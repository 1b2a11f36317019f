use std::path::PathBuf;

/// Everything that can stop a glossary build. All variants are fatal.
#[derive(thiserror::Error, Debug)]
pub enum GlossaryError {
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write page for '{term}' to {}", .path.display())]
    Write {
        path: PathBuf,
        term: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("term '{term}' would overwrite the index page")]
    ReservedTerm { term: String },

    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl GlossaryError {
    pub fn code(&self) -> &'static str {
        match self {
            GlossaryError::MalformedInput { .. } => "MALFORMED_INPUT",
            GlossaryError::Read { .. } => "IO_READ",
            GlossaryError::Write { .. }
            | GlossaryError::WriteOutput { .. }
            | GlossaryError::ReservedTerm { .. } => "IO_WRITE",
            GlossaryError::Config { .. } => "CONFIG",
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            GlossaryError::MalformedInput { .. } => "parse",
            GlossaryError::Read { .. } => "read",
            GlossaryError::Write { .. }
            | GlossaryError::WriteOutput { .. }
            | GlossaryError::ReservedTerm { .. } => "write",
            GlossaryError::Config { .. } => "config",
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GlossaryError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
