//! In-memory class and method units.
//!
//! A [`ClassUnit`] is what the driver walks during one class visit: a
//! fully-qualified name and its methods in file order. A [`MethodUnit`] is one
//! method's structured view: name, descriptor, access flags, the ordered
//! instruction stream, and the declared frame capacity. The engine never
//! retains either past the visit that produced it.

use crate::bytecode::{Instruction, MethodAccessFlags};

/// One method of a class, as offered by the host traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodUnit {
    /// Method name (`hello`, `<init>`, `<clinit>`)
    pub name: String,
    /// Method descriptor (`(Ljava/lang/String;)V`)
    pub descriptor: String,
    /// Access and property flags
    pub access: MethodAccessFlags,
    /// The instruction stream, in program order
    pub instructions: Vec<Instruction>,
    /// Declared upper bound on simultaneous operand-stack depth
    pub max_stack: u16,
    /// Declared number of local-variable slots
    pub max_locals: u16,
}

impl MethodUnit {
    /// Create an empty method with the given name, descriptor, and flags.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        descriptor: impl Into<String>,
        access: MethodAccessFlags,
    ) -> Self {
        MethodUnit {
            name: name.into(),
            descriptor: descriptor.into(),
            access,
            instructions: Vec::new(),
            max_stack: 0,
            max_locals: 0,
        }
    }

    /// Append one instruction to the body.
    #[must_use]
    pub fn instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    /// Declare the frame capacity.
    #[must_use]
    pub fn frames(mut self, max_stack: u16, max_locals: u16) -> Self {
        self.max_stack = max_stack;
        self.max_locals = max_locals;
        self
    }

    /// Whether this method carries a body, see
    /// [`MethodAccessFlags::has_body`].
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.access.has_body()
    }

    /// Number of exit instructions in the body.
    #[must_use]
    pub fn exit_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_exit()).count()
    }
}

/// One compiled class, as offered by the host traversal: a fully-qualified
/// name and its methods in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassUnit {
    /// Fully-qualified class name with `.` separators (`app.Greeter`)
    pub name: String,
    /// The methods, in file order
    pub methods: Vec<MethodUnit>,
}

impl ClassUnit {
    /// Create an empty class unit.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        ClassUnit {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Append one method.
    #[must_use]
    pub fn method(mut self, method: MethodUnit) -> Self {
        self.methods.push(method);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::opcodes;

    #[test]
    fn test_exit_count() {
        let method = MethodUnit::new("f", "()I", MethodAccessFlags::PUBLIC)
            .instruction(Instruction::simple(opcodes::ICONST_0))
            .instruction(Instruction::simple(opcodes::IRETURN))
            .instruction(Instruction::simple(opcodes::ICONST_1))
            .instruction(Instruction::simple(opcodes::IRETURN));
        assert_eq!(method.exit_count(), 2);
    }

    #[test]
    fn test_builder_preserves_order() {
        let class = ClassUnit::new("app.A")
            .method(MethodUnit::new("<init>", "()V", MethodAccessFlags::PUBLIC))
            .method(MethodUnit::new("a", "()V", MethodAccessFlags::PUBLIC))
            .method(MethodUnit::new("b", "()V", MethodAccessFlags::PRIVATE));
        let names: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["<init>", "a", "b"]);
    }
}
