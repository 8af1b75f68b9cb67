//! # classweave Prelude
//!
//! Convenient re-exports of the most commonly used types and traits. Import
//! this module to drive the engine without spelling out module paths.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all classweave operations
pub use crate::Error;

/// The result type used throughout classweave
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The host-facing engine driver
pub use crate::pipeline::{Instrumenter, MethodCollector};

/// Engine configuration
pub use crate::options::InstrumentationOptions;

// ================================================================================================
// Bytecode View
// ================================================================================================

/// The JVM opcode constant table and classification helpers
pub use crate::bytecode::opcodes;

/// The instruction model
pub use crate::bytecode::{ConstantValue, Instruction, MemberRef, Operand};

/// Method access flags
pub use crate::bytecode::MethodAccessFlags;

/// In-memory class and method units
pub use crate::bytecode::{ClassUnit, MethodUnit};

/// The visitor seam and the text-rendering sink
pub use crate::bytecode::{trace_class, MethodSink, TraceMethodSink};

// ================================================================================================
// Instrumentation Engine
// ================================================================================================

/// Selection, frame accounting, decorators, and routing
pub use crate::instrument::{
    adjust_frame_budget, ClassRouter, InstrumentationDecision, MethodLogInjector, MethodRole,
    MethodRoute, StaticInitInjector, TargetSelector, ENTRY_EXIT_STACK_COST,
    STATIC_INITIALIZER_NAME, STATIC_INIT_STACK_COST,
};

// ================================================================================================
// Diagnostics
// ================================================================================================

/// Diagnostic sinks for the engine's own progress text
pub use crate::diagnostics::{ConsoleSink, DiagnosticSink, FileSink, LogSink, NullSink};
