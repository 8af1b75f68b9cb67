//! Diagnostic sinks for the engine's own progress text.
//!
//! The original console coupling is replaced by an injected capability: the
//! router and decorators report through a [`DiagnosticSink`] handed to them at
//! construction, so the core stays free of direct console/file coupling and
//! the text is capturable in tests. Sink failures are swallowed - diagnostics
//! never fail a build.
//!
//! This is distinct from the `Log.e` calls the engine injects into bytecode:
//! those run inside the instrumented application, these run inside the build.

use std::{fs::File, io::Write, path::Path, sync::Mutex};

use crate::Result;

/// Receiver of diagnostic text emitted while instrumenting.
pub trait DiagnosticSink: Send + Sync {
    /// One line of diagnostic text.
    fn message(&self, text: &str);
}

/// Writes each message to standard output.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn message(&self, text: &str) {
        println!("{text}");
    }
}

/// Discards every message.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn message(&self, _text: &str) {}
}

/// Forwards each message to the `log` facade at debug level.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn message(&self, text: &str) {
        log::debug!(target: "classweave", "{text}");
    }
}

/// Appends each message as a line to a file.
///
/// # Examples
///
/// ```rust,no_run
/// use classweave::diagnostics::{DiagnosticSink, FileSink};
///
/// let sink = FileSink::create("trace_out")?;
/// sink.message("method app.Greeter.hello()V");
/// # Ok::<(), classweave::Error>(())
/// ```
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Create (truncating) the diagnostic file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(FileSink {
            file: Mutex::new(File::create(path)?),
        })
    }
}

impl DiagnosticSink for FileSink {
    fn message(&self, text: &str) {
        let mut file = lock!(self.file);
        let _ = writeln!(file, "{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_lines() {
        let path = std::env::temp_dir().join(format!("classweave-diag-{}", std::process::id()));
        {
            let sink = FileSink::create(&path).unwrap();
            sink.message("first");
            sink.message("second");
        }
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_null_and_log_sinks_accept_messages() {
        NullSink.message("dropped");
        // Without an installed logger this is a no-op; it must still be safe.
        LogSink.message("debug text");
    }
}
