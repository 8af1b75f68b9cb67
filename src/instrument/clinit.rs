//! The static-initializer decorator.

use std::sync::Arc;

use crate::{
    bytecode::{Instruction, MethodSink},
    diagnostics::DiagnosticSink,
    instrument::{
        adjust_frame_budget, VisitState, STATIC_INITIALIZER_NAME, LOG_DESCRIPTOR, LOG_NAME,
        LOG_OWNER,
    },
    Error, Result,
};

/// Worst-case operand-stack cost of one static-initializer log sequence.
///
/// Two string constants and the log call's int result; no clock read and no
/// two-slot long, hence cheaper than the timed sequence.
pub const STATIC_INIT_STACK_COST: u16 = 4;

/// The untimed sequence: class name and the fixed `<clinit>` label, handed to
/// the log call. No timestamp, no concatenation.
fn clinit_log_sequence(class_name: &str) -> [Instruction; 3] {
    [
        Instruction::load_string(class_name),
        Instruction::load_string(STATIC_INITIALIZER_NAME),
        Instruction::invoke_static(LOG_OWNER, LOG_NAME, LOG_DESCRIPTOR),
    ]
}

/// Decorator for the implicit class-initialization method.
///
/// Same visit state machine as [`crate::instrument::MethodLogInjector`], but
/// the begin-sequence is omitted entirely: only exit paths receive an
/// injection, and the injected sequence is the untimed
/// [`STATIC_INIT_STACK_COST`]-cost one.
pub struct StaticInitInjector<M> {
    inner: M,
    class_name: String,
    diagnostics: Arc<dyn DiagnosticSink>,
    state: VisitState,
}

impl<M: MethodSink> StaticInitInjector<M> {
    /// Create a fresh injector for one `<clinit>` visit.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        diagnostics: Arc<dyn DiagnosticSink>,
        inner: M,
    ) -> Self {
        StaticInitInjector {
            inner,
            class_name: class_name.into(),
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
                method: STATIC_INITIALIZER_NAME.to_string(),
            });
        }
        Ok(self.inner)
    }

    /// Discard the decorator and hand back the downstream sink unchecked.
    pub fn into_inner(self) -> M {
        self.inner
    }

    fn out_of_order(&self, message: &str) -> Error {
        Error::VisitOrder {
            class: self.class_name.clone(),
            method: STATIC_INITIALIZER_NAME.to_string(),
            message: message.to_string(),
        }
    }
}

impl<M: MethodSink> MethodSink for StaticInitInjector<M> {
    fn begin_body(&mut self) -> Result<()> {
        if self.state != VisitState::NotStarted {
            return Err(self.out_of_order("body opened twice"));
        }
        self.inner.begin_body()?;
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
                "injecting static-init log into {}",
                self.class_name
            ));
            for injected in clinit_log_sequence(&self.class_name) {
                self.inner.instruction(injected)?;
            }
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
        let (stack, locals) = adjust_frame_budget(max_stack, max_locals, STATIC_INIT_STACK_COST)
            .ok_or_else(|| Error::FrameBudgetOverflow {
                class: self.class_name.clone(),
                method: STATIC_INITIALIZER_NAME.to_string(),
                max_stack,
                injected: STATIC_INIT_STACK_COST,
            })?;
        self.inner.declare_frames(stack, locals)?;
        self.state = VisitState::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::{opcodes, MethodAccessFlags, MethodUnit};
    use crate::diagnostics::NullSink;
    use crate::pipeline::MethodCollector;

    fn injector() -> StaticInitInjector<MethodCollector> {
        StaticInitInjector::new(
            "app.Greeter",
            Arc::new(NullSink),
            MethodCollector::new(
                "app.Greeter",
                &MethodUnit::new(
                    STATIC_INITIALIZER_NAME,
                    "()V",
                    MethodAccessFlags::STATIC,
                ),
            ),
        )
    }

    #[test]
    fn test_no_begin_sequence() {
        let mut injector = injector();
        injector.begin_body().unwrap();
        injector
            .instruction(Instruction::simple(opcodes::ISTORE_0))
            .unwrap();
        injector
            .instruction(Instruction::simple(opcodes::RETURN))
            .unwrap();
        injector.declare_frames(1, 1).unwrap();
        let method = injector.finish().unwrap().finish().unwrap();

        // istore_0 + 3 injected + return; nothing before the first original
        // instruction.
        assert_eq!(method.instructions.len(), 5);
        assert_eq!(
            method.instructions[0],
            Instruction::simple(opcodes::ISTORE_0)
        );
        assert_eq!(
            method.instructions[1],
            Instruction::load_string("app.Greeter")
        );
        assert_eq!(
            method.instructions[2],
            Instruction::load_string(STATIC_INITIALIZER_NAME)
        );
        assert_eq!(method.instructions[4], Instruction::simple(opcodes::RETURN));
        assert_eq!(method.max_stack, 1 + STATIC_INIT_STACK_COST);
    }

    #[test]
    fn test_untimed_sequence_has_no_clock_call() {
        let mut injector = injector();
        injector.begin_body().unwrap();
        injector
            .instruction(Instruction::simple(opcodes::RETURN))
            .unwrap();
        injector.declare_frames(0, 0).unwrap();
        let method = injector.finish().unwrap().finish().unwrap();

        let clock = Instruction::invoke_static("java/lang/System", "nanoTime", "()J");
        assert!(method.instructions.iter().all(|i| *i != clock));
    }
}
