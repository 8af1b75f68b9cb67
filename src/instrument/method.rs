//! The entry/exit timing decorator.

use std::sync::Arc;

use crate::{
    bytecode::{Instruction, MethodSink},
    diagnostics::DiagnosticSink,
    instrument::{
        adjust_frame_budget, VisitState, BOX_DESCRIPTOR, BOX_NAME, BOX_OWNER, CLOCK_DESCRIPTOR,
        CLOCK_NAME, CLOCK_OWNER, CONCAT_DESCRIPTOR, CONCAT_NAME, CONCAT_OWNER, LOG_DESCRIPTOR,
        LOG_NAME, LOG_OWNER,
    },
    Error, Result,
};

/// Worst-case operand-stack cost of one timed log sequence.
///
/// Class-name constant, label constant, the clock's long (two slots), then the
/// boxing, concatenation, and log calls each replace their operands; the
/// conservative bound also covers the log call's int result resting on the
/// stack above the method's own values.
pub const ENTRY_EXIT_STACK_COST: u16 = 5;

/// The timed log sequence: class name, `"<method> <phase>: "` label, a
/// nanosecond clock read, boxed and concatenated into one message, handed to
/// the log call.
fn timed_log_sequence(class_name: &str, method_name: &str, phase: &str) -> [Instruction; 6] {
    [
        Instruction::load_string(class_name),
        Instruction::load_string(format!("{method_name} {phase}: ")),
        Instruction::invoke_static(CLOCK_OWNER, CLOCK_NAME, CLOCK_DESCRIPTOR),
        Instruction::invoke_static(BOX_OWNER, BOX_NAME, BOX_DESCRIPTOR),
        Instruction::invoke_static(CONCAT_OWNER, CONCAT_NAME, CONCAT_DESCRIPTOR),
        Instruction::invoke_static(LOG_OWNER, LOG_NAME, LOG_DESCRIPTOR),
    ]
}

/// Decorator that injects a timed begin-sequence at body start and a timed
/// end-sequence before every exit instruction, then raises the declared stack
/// capacity by [`ENTRY_EXIT_STACK_COST`].
///
/// Owns the downstream sink; all state is local to one method visit, so a
/// fresh injector per method processes any number of methods and classes
/// without interference.
///
/// # Examples
///
/// ```rust
/// use classweave::bytecode::{opcodes, Instruction, MethodSink, TraceMethodSink};
/// use classweave::diagnostics::NullSink;
/// use classweave::instrument::MethodLogInjector;
/// use std::sync::Arc;
///
/// let mut injector = MethodLogInjector::new(
///     "app.Greeter",
///     "hello",
///     Arc::new(NullSink),
///     TraceMethodSink::new(Vec::new()),
/// );
/// injector.begin_body()?;
/// injector.instruction(Instruction::simple(opcodes::RETURN))?;
/// injector.declare_frames(2, 1)?;
/// let text = String::from_utf8(injector.finish()?.into_inner()).unwrap();
/// assert!(text.contains("hello begin: "));
/// assert!(text.contains("hello end: "));
/// assert!(text.contains("stack=7"));
/// # Ok::<(), classweave::Error>(())
/// ```
pub struct MethodLogInjector<M> {
    inner: M,
    class_name: String,
    method_name: String,
    diagnostics: Arc<dyn DiagnosticSink>,
    state: VisitState,
}

impl<M: MethodSink> MethodLogInjector<M> {
    /// Create a fresh injector for one method visit.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        diagnostics: Arc<dyn DiagnosticSink>,
        inner: M,
    ) -> Self {
        MethodLogInjector {
            inner,
            class_name: class_name.into(),
            method_name: method_name.into(),
            diagnostics,
            state: VisitState::NotStarted,
        }
    }

    /// Complete the visit and hand back the downstream sink.
    ///
    /// # Errors
    /// Returns [`Error::MissingFrameDeclaration`] if the host never declared
    /// frame capacity for this method.
    pub fn finish(self) -> Result<M> {
        if self.state != VisitState::Closed {
            return Err(Error::MissingFrameDeclaration {
                class: self.class_name,
                method: self.method_name,
            });
        }
        Ok(self.inner)
    }

    /// Discard the decorator and hand back the downstream sink unchecked.
    pub fn into_inner(self) -> M {
        self.inner
    }

    fn emit_log(&mut self, phase: &str) -> Result<()> {
        for instruction in timed_log_sequence(&self.class_name, &self.method_name, phase) {
            self.inner.instruction(instruction)?;
        }
        Ok(())
    }

    fn out_of_order(&self, message: &str) -> Error {
        Error::VisitOrder {
            class: self.class_name.clone(),
            method: self.method_name.clone(),
            message: message.to_string(),
        }
    }
}

impl<M: MethodSink> MethodSink for MethodLogInjector<M> {
    fn begin_body(&mut self) -> Result<()> {
        if self.state != VisitState::NotStarted {
            return Err(self.out_of_order("body opened twice"));
        }
        self.inner.begin_body()?;
        self.diagnostics.message(&format!(
            "injecting entry log into {}.{}",
            self.class_name, self.method_name
        ));
        self.emit_log("begin")?;
        self.state = VisitState::BodyOpened;
        Ok(())
    }

    fn instruction(&mut self, instruction: Instruction) -> Result<()> {
        match self.state {
            VisitState::NotStarted => return Err(self.out_of_order("instruction before body start")),
            VisitState::Closed => {
                return Err(self.out_of_order("instruction after frame declaration"))
            }
            VisitState::BodyOpened | VisitState::Visiting => {}
        }
        if instruction.is_exit() {
            self.diagnostics.message(&format!(
                "injecting exit log into {}.{}",
                self.class_name, self.method_name
            ));
            self.emit_log("end")?;
        }
        self.inner.instruction(instruction)?;
        self.state = VisitState::Visiting;
        Ok(())
    }

    fn declare_frames(&mut self, max_stack: u16, max_locals: u16) -> Result<()> {
        match self.state {
            VisitState::NotStarted => {
                return Err(self.out_of_order("frames declared before body start"))
            }
            VisitState::Closed => return Err(self.out_of_order("frames declared twice")),
            VisitState::BodyOpened | VisitState::Visiting => {}
        }
        let (stack, locals) = adjust_frame_budget(max_stack, max_locals, ENTRY_EXIT_STACK_COST)
            .ok_or_else(|| Error::FrameBudgetOverflow {
                class: self.class_name.clone(),
                method: self.method_name.clone(),
                max_stack,
                injected: ENTRY_EXIT_STACK_COST,
            })?;
        self.inner.declare_frames(stack, locals)?;
        self.state = VisitState::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::opcodes;
    use crate::diagnostics::NullSink;
    use crate::pipeline::MethodCollector;
    use crate::bytecode::{MethodAccessFlags, MethodUnit};

    fn collector() -> MethodCollector {
        MethodCollector::new(
            "app.Greeter",
            &MethodUnit::new("hello", "()V", MethodAccessFlags::PUBLIC),
        )
    }

    fn injector() -> MethodLogInjector<MethodCollector> {
        MethodLogInjector::new("app.Greeter", "hello", Arc::new(NullSink), collector())
    }

    #[test]
    fn test_begin_sequence_precedes_first_instruction() {
        let mut injector = injector();
        injector.begin_body().unwrap();
        injector
            .instruction(Instruction::simple(opcodes::ALOAD_0))
            .unwrap();
        injector
            .instruction(Instruction::simple(opcodes::RETURN))
            .unwrap();
        injector.declare_frames(2, 1).unwrap();
        let method = injector.finish().unwrap().finish().unwrap();

        // 6 begin + aload_0 + 6 end + return
        assert_eq!(method.instructions.len(), 14);
        assert_eq!(method.instructions[0], Instruction::load_string("app.Greeter"));
        assert_eq!(
            method.instructions[1],
            Instruction::load_string("hello begin: ")
        );
        assert_eq!(method.instructions[6], Instruction::simple(opcodes::ALOAD_0));
        assert_eq!(
            method.instructions[8],
            Instruction::load_string("hello end: ")
        );
        assert_eq!(
            method.instructions[13],
            Instruction::simple(opcodes::RETURN)
        );
        assert_eq!(method.max_stack, 7);
        assert_eq!(method.max_locals, 1);
    }

    #[test]
    fn test_one_end_sequence_per_exit() {
        let mut injector = injector();
        injector.begin_body().unwrap();
        for opcode in [
            opcodes::ICONST_0,
            opcodes::IRETURN,
            opcodes::ICONST_1,
            opcodes::IRETURN,
        ] {
            injector.instruction(Instruction::simple(opcode)).unwrap();
        }
        injector.declare_frames(1, 1).unwrap();
        let method = injector.finish().unwrap().finish().unwrap();

        let labels = method
            .instructions
            .iter()
            .filter(|i| **i == Instruction::load_string("hello end: "))
            .count();
        assert_eq!(labels, 2);
        // Each end sequence sits immediately before its return.
        for (index, instruction) in method.instructions.iter().enumerate() {
            if instruction.opcode == opcodes::IRETURN {
                assert_eq!(
                    method.instructions[index - 6],
                    Instruction::load_string("app.Greeter")
                );
            }
        }
    }

    #[test]
    fn test_visit_order_is_enforced() {
        let mut inj = injector();
        assert!(matches!(
            inj.instruction(Instruction::simple(opcodes::NOP)),
            Err(Error::VisitOrder { .. })
        ));

        let mut inj = injector();
        inj.begin_body().unwrap();
        assert!(matches!(
            inj.begin_body(),
            Err(Error::VisitOrder { .. })
        ));

        let mut inj = injector();
        inj.begin_body().unwrap();
        inj.declare_frames(1, 1).unwrap();
        assert!(matches!(
            inj.instruction(Instruction::simple(opcodes::NOP)),
            Err(Error::VisitOrder { .. })
        ));
    }

    #[test]
    fn test_missing_frames_is_surfaced() {
        let mut injector = injector();
        injector.begin_body().unwrap();
        injector
            .instruction(Instruction::simple(opcodes::RETURN))
            .unwrap();
        assert!(matches!(
            injector.finish(),
            Err(Error::MissingFrameDeclaration { .. })
        ));
    }

    #[test]
    fn test_frame_overflow_names_the_method() {
        let mut injector = injector();
        injector.begin_body().unwrap();
        injector
            .instruction(Instruction::simple(opcodes::RETURN))
            .unwrap();
        match injector.declare_frames(u16::MAX - 2, 1) {
            Err(Error::FrameBudgetOverflow { class, method, .. }) => {
                assert_eq!(class, "app.Greeter");
                assert_eq!(method, "hello");
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }
}
