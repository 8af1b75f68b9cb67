//! The instrumentation engine.
//!
//! Five cooperating pieces, none of which share mutable state:
//!
//! - [`TargetSelector`] - pure predicate deciding class eligibility
//! - [`adjust_frame_budget`] - pure frame-capacity arithmetic
//! - [`MethodLogInjector`] - per-method decorator injecting timed entry/exit
//!   log sequences
//! - [`StaticInitInjector`] - per-method decorator injecting an untimed exit
//!   sequence into `<clinit>`
//! - [`ClassRouter`] - per-class dispatcher choosing one of the above (or
//!   pass-through) for each offered method
//!
//! Decorators are instantiated fresh per method and own the downstream
//! [`crate::bytecode::MethodSink`] directly, so many methods and many classes
//! can be processed without interference, including concurrently.

mod clinit;
mod frames;
mod method;
mod router;
mod selector;

pub use clinit::{StaticInitInjector, STATIC_INIT_STACK_COST};
pub use frames::adjust_frame_budget;
pub use method::{MethodLogInjector, ENTRY_EXIT_STACK_COST};
pub use router::{
    ClassRouter, InstrumentationDecision, MethodRole, MethodRoute, STATIC_INITIALIZER_NAME,
};
pub use selector::TargetSelector;

// Call targets of the injected sequences. Fixed by the runtime the rewritten
// classes execute on, not configurable.
pub(crate) const LOG_OWNER: &str = "android/util/Log";
pub(crate) const LOG_NAME: &str = "e";
pub(crate) const LOG_DESCRIPTOR: &str = "(Ljava/lang/String;Ljava/lang/String;)I";
pub(crate) const CLOCK_OWNER: &str = "java/lang/System";
pub(crate) const CLOCK_NAME: &str = "nanoTime";
pub(crate) const CLOCK_DESCRIPTOR: &str = "()J";
pub(crate) const BOX_OWNER: &str = "java/lang/Long";
pub(crate) const BOX_NAME: &str = "valueOf";
pub(crate) const BOX_DESCRIPTOR: &str = "(J)Ljava/lang/Long;";
pub(crate) const CONCAT_OWNER: &str = "kotlin/jvm/internal/Intrinsics";
pub(crate) const CONCAT_NAME: &str = "stringPlus";
pub(crate) const CONCAT_DESCRIPTOR: &str =
    "(Ljava/lang/String;Ljava/lang/Object;)Ljava/lang/String;";

/// Position of a decorator within one method visit.
///
/// `NotStarted → BodyOpened → Visiting → Closed`; the body-start callback
/// moves past `NotStarted`, the first instruction reaches `Visiting`, and the
/// frame declaration closes the visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VisitState {
    /// No callback received yet
    NotStarted,
    /// Body opened, begin-sequence (if any) already emitted
    BodyOpened,
    /// At least one original instruction forwarded
    Visiting,
    /// Frame capacity declared; the visit is complete
    Closed,
}
