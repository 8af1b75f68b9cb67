//! The structured bytecode view: opcodes, instructions, flags, units, and the
//! visitor seam.
//!
//! Parsing and encoding of the binary class-file format is deliberately out of
//! scope; a host bytecode library owns that layout and drives the engine
//! through the [`MethodSink`] callbacks with already-structured data.

mod flags;
mod instruction;
mod unit;
mod visitor;

pub mod opcodes;

pub use flags::MethodAccessFlags;
pub use instruction::{ConstantValue, Instruction, MemberRef, Operand};
pub use unit::{ClassUnit, MethodUnit};
pub use visitor::{trace_class, MethodSink, TraceMethodSink};
