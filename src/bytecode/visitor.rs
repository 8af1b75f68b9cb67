//! The visitor seam between the host traversal and the engine.
//!
//! A [`MethodSink`] receives one method visit: a single body-start callback,
//! one callback per instruction in program order, and exactly one frame
//! declaration at the end. The instrumentation decorators implement this trait
//! while owning the next stage's sink directly, so a chain is plain
//! composition: host → decorator → downstream sink. There is no inheritance
//! and no shared state between stages.
//!
//! [`TraceMethodSink`] is a terminal sink that renders the visited stream as
//! text, useful for inspecting what the engine actually emitted.

use std::io;

use crate::{
    bytecode::{opcodes, ClassUnit, Instruction},
    Result,
};

/// Receiver of one method visit.
///
/// The host (or an upstream decorator) calls `begin_body` once, then
/// `instruction` once per instruction in program order, then `declare_frames`
/// exactly once. Implementations may emit additional instructions downstream
/// between callbacks; they must not reorder, duplicate, or drop the
/// instructions they are handed.
pub trait MethodSink {
    /// The method body begins; no instruction has been forwarded yet.
    fn begin_body(&mut self) -> Result<()>;

    /// One instruction of the original stream, in program order.
    fn instruction(&mut self, instruction: Instruction) -> Result<()>;

    /// The declared frame capacity; called exactly once, at method end.
    fn declare_frames(&mut self, max_stack: u16, max_locals: u16) -> Result<()>;
}

/// A terminal [`MethodSink`] that renders each callback as a text line,
/// annotating known instructions with their [`opcodes::InstructionCategory`].
///
/// # Examples
///
/// ```rust
/// use classweave::bytecode::{opcodes, Instruction, MethodSink, TraceMethodSink};
///
/// let mut sink = TraceMethodSink::new(Vec::new());
/// sink.begin_body()?;
/// sink.instruction(Instruction::simple(opcodes::RETURN))?;
/// sink.declare_frames(1, 1)?;
/// let text = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(text.contains("return"));
/// assert!(text.contains("stack=1"));
/// # Ok::<(), classweave::Error>(())
/// ```
pub struct TraceMethodSink<W> {
    out: W,
}

impl<W: io::Write> TraceMethodSink<W> {
    /// Create a trace sink writing to `out`.
    pub fn new(out: W) -> Self {
        TraceMethodSink { out }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> MethodSink for TraceMethodSink<W> {
    fn begin_body(&mut self) -> Result<()> {
        Ok(())
    }

    fn instruction(&mut self, instruction: Instruction) -> Result<()> {
        let text = instruction.to_string();
        match opcodes::category(instruction.opcode) {
            Some(category) => writeln!(self.out, "    {text:<44} ; {category}")?,
            None => writeln!(self.out, "    {text}")?,
        }
        Ok(())
    }

    fn declare_frames(&mut self, max_stack: u16, max_locals: u16) -> Result<()> {
        writeln!(self.out, "    .frames stack={max_stack} locals={max_locals}")?;
        Ok(())
    }
}

/// Render a whole class unit as text, one method visit at a time.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn trace_class<W: io::Write>(unit: &ClassUnit, out: &mut W) -> Result<()> {
    writeln!(out, "class {}", unit.name)?;
    for method in &unit.methods {
        writeln!(out, "  method {}{}", method.name, method.descriptor)?;
        if !method.has_body() {
            continue;
        }
        let mut sink = TraceMethodSink::new(&mut *out);
        sink.begin_body()?;
        for instruction in &method.instructions {
            sink.instruction(instruction.clone())?;
        }
        sink.declare_frames(method.max_stack, method.max_locals)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::{opcodes, MethodAccessFlags, MethodUnit};

    #[test]
    fn test_trace_class_renders_every_method() {
        let class = ClassUnit::new("app.Greeter")
            .method(
                MethodUnit::new("hello", "()V", MethodAccessFlags::PUBLIC)
                    .instruction(Instruction::simple(opcodes::ALOAD_0))
                    .instruction(Instruction::simple(opcodes::RETURN))
                    .frames(2, 1),
            )
            .method(MethodUnit::new(
                "stub",
                "()V",
                MethodAccessFlags::PUBLIC | MethodAccessFlags::ABSTRACT,
            ));

        let mut rendered = Vec::new();
        trace_class(&class, &mut rendered).unwrap();
        let text = String::from_utf8(rendered).unwrap();

        assert!(text.contains("class app.Greeter"));
        assert!(text.contains("method hello()V"));
        assert!(text.contains("aload_0"));
        assert!(text.contains(".frames stack=2 locals=1"));
        // Abstract methods get a header but no body lines.
        assert!(text.contains("method stub()V"));
    }
}
