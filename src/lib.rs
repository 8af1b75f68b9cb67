// Copyright 2025 The classweave contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # classweave
//!
//! A selective JVM bytecode instrumentation engine. Given a stream of compiled
//! classes, `classweave` decides which classes and methods qualify and rewrites
//! qualifying method bodies by injecting timing/log calls at method entry and at
//! every exit path, with a distinct variant for static initializers, while
//! keeping the declared operand-stack capacity consistent with the added
//! instructions.
//!
//! ## Features
//!
//! - **Selective targeting** - package-prefix selection with exclusion rules for
//!   generated classes (`R`, `R$*`, `*BuildConfig`)
//! - **Entry/exit timing injection** - a nanosecond-clock log sequence at method
//!   entry and before every return instruction
//! - **Static-initializer logging** - a lighter, untimed sequence for `<clinit>`
//! - **Sound frame accounting** - declared `max_stack` is raised by the exact
//!   injected cost, never guessed, with overflow surfaced as an error
//! - **Parallel batches** - class visits share no state, so whole compilations
//!   can be instrumented across threads
//!
//! `classweave` does not parse or encode the binary class-file format. It
//! operates on a structured, traversal-capable view of classes, methods, and
//! instructions ([`bytecode::ClassUnit`], [`bytecode::Instruction`]) and on the
//! visitor seam ([`bytecode::MethodSink`]) that a host bytecode pipeline drives.
//!
//! ## Quick Start
//!
//! ```rust
//! use classweave::prelude::*;
//! use std::sync::Arc;
//!
//! let options = InstrumentationOptions::new()
//!     .with_package_prefix("app.")
//!     .with_traced_method("hello");
//! let engine = Instrumenter::with_diagnostics(options, Arc::new(NullSink));
//!
//! let greeter = ClassUnit::new("app.Greeter").method(
//!     MethodUnit::new("hello", "()V", MethodAccessFlags::PUBLIC)
//!         .instruction(Instruction::simple(opcodes::ALOAD_0))
//!         .instruction(Instruction::invoke_static("app/Support", "emit", "()V"))
//!         .instruction(Instruction::simple(opcodes::RETURN))
//!         .frames(2, 1),
//! );
//!
//! let rewritten = engine.instrument_class(&greeter)?;
//! // One begin sequence, one end sequence, declared stack raised by the
//! // injected cost.
//! assert_eq!(rewritten.methods[0].max_stack, 2 + ENTRY_EXIT_STACK_COST);
//! # Ok::<(), classweave::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`bytecode`] - the structured view: opcodes, instructions, access flags,
//!   class/method units, and the `MethodSink` visitor seam
//! - [`instrument`] - the engine: target selector, exit-point classifier, frame
//!   budget adjuster, the two method decorators, and the per-class router
//! - [`diagnostics`] - where the engine's own diagnostic text goes (console,
//!   file, `log` facade, or nowhere); distinct from the log calls it injects
//! - [`Instrumenter`] - the host-facing driver for whole class units
//!
//! Data flows host traversal → [`instrument::ClassRouter`] → per-method
//! decorator or pass-through → downstream sink. Each decorator owns the next
//! stage directly; there is no visitor inheritance.

#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use classweave::prelude::*;
///
/// let selector = TargetSelector::new("app.");
/// assert!(selector.is_instrumentable("app.Greeter"));
/// assert!(!selector.is_instrumentable("app.R$id"));
/// ```
pub mod prelude;

/// The structured bytecode view the engine operates on.
///
/// This module owns everything the engine knows about JVM bytecode without
/// parsing class files: the opcode constant table and mnemonics
/// ([`bytecode::opcodes`]), the instruction model ([`bytecode::Instruction`],
/// [`bytecode::Operand`]), method access flags, in-memory class/method units,
/// and the [`bytecode::MethodSink`] visitor seam a host pipeline drives.
pub mod bytecode;

/// The instrumentation engine itself.
///
/// Selection ([`instrument::TargetSelector`]), frame accounting
/// ([`instrument::adjust_frame_budget`]), the entry/exit decorator
/// ([`instrument::MethodLogInjector`]), the static-initializer decorator
/// ([`instrument::StaticInitInjector`]), and the per-class router
/// ([`instrument::ClassRouter`]) that picks one of them per method.
pub mod instrument;

/// Diagnostic sinks for the engine's own progress text.
///
/// The engine never prints directly; it reports through an injected
/// [`diagnostics::DiagnosticSink`]. This is unrelated to the `Log.e` calls the
/// engine injects into bytecode.
pub mod diagnostics;

/// Engine configuration consumed at construction.
pub mod options;

/// The host-facing driver: complete class visits over in-memory units.
pub mod pipeline;

pub use error::Error;

/// `Result<T>` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

pub use instrument::{ENTRY_EXIT_STACK_COST, STATIC_INIT_STACK_COST};
pub use options::InstrumentationOptions;
pub use pipeline::Instrumenter;
