//! The host-facing driver: complete class visits over in-memory units.

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    bytecode::{ClassUnit, Instruction, MethodAccessFlags, MethodSink, MethodUnit},
    diagnostics::{ConsoleSink, DiagnosticSink, FileSink},
    instrument::ClassRouter,
    options::InstrumentationOptions,
    Error, Result,
};

/// Terminal sink that rebuilds a [`MethodUnit`] from the visited stream.
///
/// Enforces the tail of the visit protocol: exactly one frame declaration,
/// surfaced as [`Error::MissingFrameDeclaration`] if absent when the collector
/// is finished.
pub struct MethodCollector {
    class_name: String,
    name: String,
    descriptor: String,
    access: MethodAccessFlags,
    instructions: Vec<Instruction>,
    frames: Option<(u16, u16)>,
}

impl MethodCollector {
    /// Create a collector for one method visit, copying the method's header.
    #[must_use]
    pub fn new(class_name: impl Into<String>, method: &MethodUnit) -> Self {
        MethodCollector {
            class_name: class_name.into(),
            name: method.name.clone(),
            descriptor: method.descriptor.clone(),
            access: method.access,
            instructions: Vec::with_capacity(method.instructions.len()),
            frames: None,
        }
    }

    /// Complete the visit and produce the rebuilt method.
    ///
    /// # Errors
    /// Returns [`Error::MissingFrameDeclaration`] if no frame capacity was
    /// ever declared.
    pub fn finish(self) -> Result<MethodUnit> {
        let Some((max_stack, max_locals)) = self.frames else {
            return Err(Error::MissingFrameDeclaration {
                class: self.class_name,
                method: self.name,
            });
        };
        Ok(MethodUnit {
            name: self.name,
            descriptor: self.descriptor,
            access: self.access,
            instructions: self.instructions,
            max_stack,
            max_locals,
        })
    }
}

impl MethodSink for MethodCollector {
    fn begin_body(&mut self) -> Result<()> {
        Ok(())
    }

    fn instruction(&mut self, instruction: Instruction) -> Result<()> {
        self.instructions.push(instruction);
        Ok(())
    }

    fn declare_frames(&mut self, max_stack: u16, max_locals: u16) -> Result<()> {
        if self.frames.is_some() {
            return Err(Error::VisitOrder {
                class: self.class_name.clone(),
                method: self.name.clone(),
                message: "frames declared twice".to_string(),
            });
        }
        self.frames = Some((max_stack, max_locals));
        Ok(())
    }
}

/// The engine's host-facing entry point.
///
/// Owns the configuration and the diagnostic sink, and drives one complete,
/// synchronous class visit per [`Instrumenter::instrument_class`] call:
/// router, per-method decorator or pass-through, collecting sink. Holds no
/// state across visits, so batches parallelize freely.
///
/// # Examples
///
/// ```rust
/// use classweave::prelude::*;
/// use std::sync::Arc;
///
/// let engine = Instrumenter::with_diagnostics(
///     InstrumentationOptions::new().with_package_prefix("app."),
///     Arc::new(NullSink),
/// );
///
/// let class = ClassUnit::new("app.R$id").method(
///     MethodUnit::new("values", "()[I", MethodAccessFlags::STATIC)
///         .instruction(Instruction::simple(opcodes::ACONST_NULL))
///         .instruction(Instruction::simple(opcodes::ARETURN))
///         .frames(1, 0),
/// );
/// // Generated resource classes pass through untouched.
/// assert_eq!(engine.instrument_class(&class)?, class);
/// # Ok::<(), classweave::Error>(())
/// ```
pub struct Instrumenter {
    options: InstrumentationOptions,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Instrumenter {
    /// Create an engine whose diagnostic sink follows the options: standard
    /// output, or the configured diagnostic file.
    ///
    /// # Errors
    /// Returns an error if the diagnostic file cannot be created.
    pub fn new(options: InstrumentationOptions) -> Result<Self> {
        let diagnostics: Arc<dyn DiagnosticSink> = if options.write_to_stdout {
            Arc::new(ConsoleSink)
        } else {
            Arc::new(FileSink::create(&options.diagnostic_path)?)
        };
        Ok(Instrumenter {
            options,
            diagnostics,
        })
    }

    /// Create an engine with an explicit diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(
        options: InstrumentationOptions,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Instrumenter {
            options,
            diagnostics,
        }
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn options(&self) -> &InstrumentationOptions {
        &self.options
    }

    /// Run one complete class visit and return the rewritten unit.
    ///
    /// Methods without a body are carried over unchanged; every other method
    /// is driven through the router's choice of decorator. On error the
    /// partially built output is discarded with the returned error.
    ///
    /// # Errors
    /// Returns frame-capacity and visit-order errors, identifying the class
    /// and method; selection never errors.
    pub fn instrument_class(&self, unit: &ClassUnit) -> Result<ClassUnit> {
        let router = ClassRouter::new(&self.options, Arc::clone(&self.diagnostics), &*unit.name);
        let mut methods = Vec::with_capacity(unit.methods.len());
        for method in &unit.methods {
            if !method.has_body() {
                methods.push(method.clone());
                continue;
            }
            let collector = MethodCollector::new(&*unit.name, method);
            let mut route = router.method(&method.name, &method.descriptor, method.access, collector);
            route.begin_body()?;
            for instruction in &method.instructions {
                route.instruction(instruction.clone())?;
            }
            route.declare_frames(method.max_stack, method.max_locals)?;
            methods.push(route.finish()?.finish()?);
        }
        Ok(ClassUnit {
            name: unit.name.clone(),
            methods,
        })
    }

    /// Instrument a batch of classes in parallel.
    ///
    /// Class visits share no mutable state, so the batch fans out across the
    /// rayon pool; results keep the input order.
    ///
    /// # Errors
    /// Returns the first error any class visit produced.
    pub fn instrument_all(&self, units: &[ClassUnit]) -> Result<Vec<ClassUnit>> {
        units
            .par_iter()
            .map(|unit| self.instrument_class(unit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::opcodes;
    use crate::diagnostics::NullSink;

    #[test]
    fn test_collector_rejects_double_frames() {
        let method = MethodUnit::new("f", "()V", MethodAccessFlags::PUBLIC);
        let mut collector = MethodCollector::new("app.A", &method);
        collector.begin_body().unwrap();
        collector.declare_frames(1, 1).unwrap();
        assert!(matches!(
            collector.declare_frames(1, 1),
            Err(Error::VisitOrder { .. })
        ));
    }

    #[test]
    fn test_collector_requires_frames() {
        let method = MethodUnit::new("f", "()V", MethodAccessFlags::PUBLIC);
        let collector = MethodCollector::new("app.A", &method);
        assert!(matches!(
            collector.finish(),
            Err(Error::MissingFrameDeclaration { .. })
        ));
    }

    #[test]
    fn test_bodyless_methods_are_carried_over() {
        let engine = Instrumenter::with_diagnostics(
            InstrumentationOptions::new().with_package_prefix("app."),
            Arc::new(NullSink),
        );
        let class = ClassUnit::new("app.Greeter").method(MethodUnit::new(
            "hello",
            "()V",
            MethodAccessFlags::PUBLIC | MethodAccessFlags::ABSTRACT,
        ));
        let rewritten = engine.instrument_class(&class).unwrap();
        assert_eq!(rewritten, class);
    }
}
