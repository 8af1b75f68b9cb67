//! Per-class routing of methods to decorators.

use std::sync::Arc;

use crate::{
    bytecode::{Instruction, MethodAccessFlags, MethodSink},
    diagnostics::DiagnosticSink,
    instrument::{MethodLogInjector, StaticInitInjector, TargetSelector},
    options::InstrumentationOptions,
    Result,
};

/// Reserved name of the implicit class-initialization method.
pub const STATIC_INITIALIZER_NAME: &str = "<clinit>";

/// Role of a method within its class, computed once per method.
///
/// Replaces scattered name comparisons with one classification the router
/// dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodRole {
    /// The implicit static initializer (`<clinit>`)
    StaticInitializer,
    /// The configured traced method
    Traced,
    /// Any other method
    Ordinary,
}

impl MethodRole {
    /// Classify a method by name against the configured traced-method name.
    #[must_use]
    pub fn classify(method_name: &str, traced_method: &str) -> Self {
        if method_name == STATIC_INITIALIZER_NAME {
            MethodRole::StaticInitializer
        } else if method_name == traced_method {
            MethodRole::Traced
        } else {
            MethodRole::Ordinary
        }
    }
}

/// What the router decided for one method. Computed once, consumed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentationDecision {
    /// Forward every callback unmodified
    NoInstrumentation,
    /// Timed begin- and end-sequences, see
    /// [`crate::instrument::MethodLogInjector`]
    EntryExitLogging,
    /// Untimed end-sequences only, see
    /// [`crate::instrument::StaticInitInjector`]
    StaticInitLogging,
}

impl InstrumentationDecision {
    /// Derive the decision from class eligibility and method role.
    ///
    /// Total over the closed set of roles; an ineligible class always maps to
    /// [`InstrumentationDecision::NoInstrumentation`].
    #[must_use]
    pub fn from_role(class_eligible: bool, role: MethodRole) -> Self {
        if !class_eligible {
            return InstrumentationDecision::NoInstrumentation;
        }
        match role {
            MethodRole::StaticInitializer => InstrumentationDecision::StaticInitLogging,
            MethodRole::Traced => InstrumentationDecision::EntryExitLogging,
            MethodRole::Ordinary => InstrumentationDecision::NoInstrumentation,
        }
    }

    /// The operand-stack cost this decision injects.
    #[must_use]
    pub fn stack_cost(self) -> u16 {
        match self {
            InstrumentationDecision::NoInstrumentation => 0,
            InstrumentationDecision::EntryExitLogging => crate::instrument::ENTRY_EXIT_STACK_COST,
            InstrumentationDecision::StaticInitLogging => crate::instrument::STATIC_INIT_STACK_COST,
        }
    }
}

/// Per-class dispatcher wrapping the downstream emission sink per method.
///
/// Eligibility is decided once when the class visit starts and cached for the
/// whole visit; beyond that boolean the router holds no cross-class state, so
/// separate class visits (including concurrent ones) cannot interfere.
pub struct ClassRouter {
    class_name: String,
    eligible: bool,
    traced_method: String,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ClassRouter {
    /// Start a class visit: decide eligibility once and cache it.
    #[must_use]
    pub fn new(
        options: &InstrumentationOptions,
        diagnostics: Arc<dyn DiagnosticSink>,
        class_name: impl Into<String>,
    ) -> Self {
        let class_name = class_name.into();
        let eligible =
            TargetSelector::new(options.package_prefix.clone()).is_instrumentable(&class_name);
        ClassRouter {
            eligible,
            traced_method: options.traced_method.clone(),
            class_name,
            diagnostics,
        }
    }

    /// The class this router was opened for.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The cached eligibility decision for this class.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// The decision for one method of this class.
    ///
    /// Bodyless methods (abstract, native) are never instrumented; there is no
    /// body visit to decorate.
    #[must_use]
    pub fn decision(
        &self,
        method_name: &str,
        access: MethodAccessFlags,
    ) -> InstrumentationDecision {
        if !access.has_body() {
            return InstrumentationDecision::NoInstrumentation;
        }
        InstrumentationDecision::from_role(
            self.eligible,
            MethodRole::classify(method_name, &self.traced_method),
        )
    }

    /// Offer one method: wrap `inner` according to the decision.
    #[must_use]
    pub fn method<M: MethodSink>(
        &self,
        method_name: &str,
        descriptor: &str,
        access: MethodAccessFlags,
        inner: M,
    ) -> MethodRoute<M> {
        self.diagnostics.message(&format!(
            "method {}.{}{}",
            self.class_name, method_name, descriptor
        ));
        match self.decision(method_name, access) {
            InstrumentationDecision::NoInstrumentation => MethodRoute::PassThrough(inner),
            InstrumentationDecision::EntryExitLogging => {
                MethodRoute::EntryExit(MethodLogInjector::new(
                    self.class_name.clone(),
                    method_name,
                    Arc::clone(&self.diagnostics),
                    inner,
                ))
            }
            InstrumentationDecision::StaticInitLogging => {
                MethodRoute::StaticInit(StaticInitInjector::new(
                    self.class_name.clone(),
                    Arc::clone(&self.diagnostics),
                    inner,
                ))
            }
        }
    }
}

/// The method sink the router hands back: one of the two decorators, or the
/// untouched downstream sink.
pub enum MethodRoute<M> {
    /// Every callback forwarded unmodified
    PassThrough(M),
    /// Wrapped in the timed entry/exit decorator
    EntryExit(MethodLogInjector<M>),
    /// Wrapped in the static-initializer decorator
    StaticInit(StaticInitInjector<M>),
}

impl<M: MethodSink> MethodRoute<M> {
    /// Complete the visit and hand back the downstream sink.
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingFrameDeclaration`] if a decorator's
    /// visit never saw a frame declaration.
    pub fn finish(self) -> Result<M> {
        match self {
            MethodRoute::PassThrough(inner) => Ok(inner),
            MethodRoute::EntryExit(decorator) => decorator.finish(),
            MethodRoute::StaticInit(decorator) => decorator.finish(),
        }
    }
}

impl<M: MethodSink> MethodSink for MethodRoute<M> {
    fn begin_body(&mut self) -> Result<()> {
        match self {
            MethodRoute::PassThrough(inner) => inner.begin_body(),
            MethodRoute::EntryExit(decorator) => decorator.begin_body(),
            MethodRoute::StaticInit(decorator) => decorator.begin_body(),
        }
    }

    fn instruction(&mut self, instruction: Instruction) -> Result<()> {
        match self {
            MethodRoute::PassThrough(inner) => inner.instruction(instruction),
            MethodRoute::EntryExit(decorator) => decorator.instruction(instruction),
            MethodRoute::StaticInit(decorator) => decorator.instruction(instruction),
        }
    }

    fn declare_frames(&mut self, max_stack: u16, max_locals: u16) -> Result<()> {
        match self {
            MethodRoute::PassThrough(inner) => inner.declare_frames(max_stack, max_locals),
            MethodRoute::EntryExit(decorator) => decorator.declare_frames(max_stack, max_locals),
            MethodRoute::StaticInit(decorator) => decorator.declare_frames(max_stack, max_locals),
        }
    }
}
