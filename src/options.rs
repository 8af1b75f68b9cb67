//! Engine configuration.

use std::path::PathBuf;

/// Configuration consumed at engine construction.
///
/// The selection prefix and traced-method name feed the router; the sink
/// toggle only chooses where the engine's own diagnostic text goes and never
/// affects the injected bytecode shape.
///
/// # Examples
///
/// ```rust
/// use classweave::InstrumentationOptions;
///
/// let options = InstrumentationOptions::new()
///     .with_package_prefix("com.example")
///     .with_traced_method("hello")
///     .with_write_to_stdout(false)
///     .with_diagnostic_path("build/trace_out");
/// assert_eq!(options.traced_method, "hello");
/// ```
#[derive(Debug, Clone)]
pub struct InstrumentationOptions {
    /// Root package prefix a class name must start with to qualify
    pub package_prefix: String,
    /// Name of the method that receives entry/exit timing
    pub traced_method: String,
    /// Diagnostic text goes to standard output when true, to
    /// [`InstrumentationOptions::diagnostic_path`] otherwise
    pub write_to_stdout: bool,
    /// Destination of the file-backed diagnostic sink
    pub diagnostic_path: PathBuf,
}

impl Default for InstrumentationOptions {
    fn default() -> Self {
        InstrumentationOptions {
            package_prefix: "com.example".to_string(),
            traced_method: "hello".to_string(),
            write_to_stdout: true,
            diagnostic_path: PathBuf::from("trace_out"),
        }
    }
}

impl InstrumentationOptions {
    /// Options with the default selection and sink settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root package prefix.
    #[must_use]
    pub fn with_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.package_prefix = prefix.into();
        self
    }

    /// Set the traced-method name.
    #[must_use]
    pub fn with_traced_method(mut self, name: impl Into<String>) -> Self {
        self.traced_method = name.into();
        self
    }

    /// Choose between the console and file diagnostic sinks.
    #[must_use]
    pub fn with_write_to_stdout(mut self, write_to_stdout: bool) -> Self {
        self.write_to_stdout = write_to_stdout;
        self
    }

    /// Set the file the diagnostic sink writes when not using stdout.
    #[must_use]
    pub fn with_diagnostic_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.diagnostic_path = path.into();
        self
    }
}
