use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most of the engine is infallible by construction: the target selector and the
/// exit-point classifier absorb malformed input with safe defaults (not
/// instrumentable, not an exit) and never surface an error. What remains are
/// frame-capacity problems, which must not be guessed away because an
/// under-declared operand stack produces verifier-rejected output, and protocol
/// violations by the driving host.
///
/// # Error Categories
///
/// ## Frame capacity
/// - [`Error::FrameBudgetOverflow`] - adjusted `max_stack` would not fit the class-file encoding
/// - [`Error::MissingFrameDeclaration`] - a method visit ended without a capacity declaration
///
/// ## Visit protocol
/// - [`Error::VisitOrder`] - the host drove a method visit out of order
///
/// ## I/O and misc
/// - [`Error::FileError`] - filesystem I/O from the file-backed diagnostic sink
/// - [`Error::Error`] - miscellaneous failures
///
/// # Examples
///
/// ```rust
/// use classweave::{Error, Instrumenter, InstrumentationOptions};
/// use classweave::bytecode::{ClassUnit, Instruction, MethodAccessFlags, MethodUnit, opcodes};
///
/// let engine = Instrumenter::with_diagnostics(
///     InstrumentationOptions::new().with_package_prefix("app."),
///     std::sync::Arc::new(classweave::diagnostics::NullSink),
/// );
/// let class = ClassUnit::new("app.Greeter").method(
///     MethodUnit::new("hello", "()V", MethodAccessFlags::PUBLIC)
///         .instruction(Instruction::simple(opcodes::RETURN))
///         .frames(u16::MAX, 1),
/// );
/// match engine.instrument_class(&class) {
///     Err(Error::FrameBudgetOverflow { class, method, .. }) => {
///         eprintln!("cannot instrument {}.{}", class, method);
///     }
///     other => panic!("expected an overflow, got {:?}", other.map(|_| ())),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Raising the declared operand-stack capacity by the injected cost would
    /// exceed what the class-file encoding can represent.
    ///
    /// Surfaced rather than clamped: a clamped value would under-declare the
    /// true stack requirement and the downstream verifier would reject the
    /// class. The host is expected to discard the whole class output.
    #[error("frame budget overflow in {class}.{method}: max_stack {max_stack} + injected {injected} exceeds the encodable range")]
    FrameBudgetOverflow {
        /// Fully-qualified name of the class being instrumented
        class: String,
        /// Name of the method whose frames were being adjusted
        method: String,
        /// The capacity the method originally declared
        max_stack: u16,
        /// The injected-sequence stack cost that was being added
        injected: u16,
    },

    /// A method visit ended without the host ever declaring frame capacity.
    ///
    /// The engine cannot invent a capacity, so the method (and with it the
    /// class) fails instead of emitting unsound output.
    #[error("method {class}.{method} ended without declaring frame capacity")]
    MissingFrameDeclaration {
        /// Fully-qualified name of the class being instrumented
        class: String,
        /// Name of the method whose visit was incomplete
        method: String,
    },

    /// The host drove the method-visit protocol out of order.
    ///
    /// One body-start, then instructions, then exactly one capacity
    /// declaration; anything else lands here.
    #[error("visit order violation in {class}.{method}: {message}")]
    VisitOrder {
        /// Fully-qualified name of the class being instrumented
        class: String,
        /// Name of the method being visited
        method: String,
        /// What the host did wrong
        message: String,
    },

    /// File I/O error.
    ///
    /// Produced by the file-backed diagnostic sink and by trace rendering into
    /// arbitrary writers.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
