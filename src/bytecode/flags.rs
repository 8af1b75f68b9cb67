//! Method access and property flags.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Access and property flags of a method, as declared in its class file.
    pub struct MethodAccessFlags: u16 {
        /// Accessible from anywhere
        const PUBLIC = 0x0001;
        /// Accessible only within the defining class
        const PRIVATE = 0x0002;
        /// Accessible within subclasses and the package
        const PROTECTED = 0x0004;
        /// No `this`; invoked without an instance
        const STATIC = 0x0008;
        /// Must not be overridden
        const FINAL = 0x0010;
        /// Invocation is wrapped by a monitor use
        const SYNCHRONIZED = 0x0020;
        /// Bridge method, generated by the compiler
        const BRIDGE = 0x0040;
        /// Declared with a variable number of arguments
        const VARARGS = 0x0080;
        /// Implemented in a language other than the JVM's
        const NATIVE = 0x0100;
        /// No implementation is provided
        const ABSTRACT = 0x0400;
        /// Floating-point mode is FP-strict
        const STRICT = 0x0800;
        /// Not present in the source code
        const SYNTHETIC = 0x1000;
    }
}

impl MethodAccessFlags {
    /// Whether the method carries a body the host can traverse.
    ///
    /// Abstract and native methods have no bytecode, so the host never opens a
    /// body for them and there is nothing to instrument.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.intersects(MethodAccessFlags::ABSTRACT | MethodAccessFlags::NATIVE)
    }
}
