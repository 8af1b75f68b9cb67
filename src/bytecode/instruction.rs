//! The instruction model the engine reads and emits.
//!
//! An [`Instruction`] is an opcode plus its decoded operand. Instructions are
//! immutable as data: decorators only emit new instructions before or after
//! existing ones, they never edit a received instruction's fields.

use std::fmt;

use crate::bytecode::opcodes;

/// A reference to a field or method, as carried by the access and invoke
/// instruction families.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberRef {
    /// Internal name of the owning class (`java/lang/System`)
    pub owner: String,
    /// Member name (`nanoTime`)
    pub name: String,
    /// Field or method descriptor (`()J`)
    pub descriptor: String,
    /// Whether the owner is an interface
    pub interface: bool,
}

impl fmt::Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}:{}", self.owner, self.name, self.descriptor)
    }
}

/// A constant-pool value pushed by the `ldc` family.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// 32-bit integer constant
    Int(i32),
    /// 64-bit integer constant
    Long(i64),
    /// 32-bit float constant
    Float(f32),
    /// 64-bit float constant
    Double(f64),
    /// String constant
    String(String),
    /// Class reference constant (internal name)
    Class(String),
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(value) => write!(f, "{value}"),
            ConstantValue::Long(value) => write!(f, "{value}L"),
            ConstantValue::Float(value) => write!(f, "{value}F"),
            ConstantValue::Double(value) => write!(f, "{value}D"),
            ConstantValue::String(value) => write!(f, "{value:?}"),
            ConstantValue::Class(value) => write!(f, "{value}.class"),
        }
    }
}

/// The decoded operand of an [`Instruction`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// No operand
    None,
    /// Constant-pool value (`ldc`, `ldc_w`, `ldc2_w`)
    Constant(ConstantValue),
    /// Field or method reference (access and invoke families)
    Member(MemberRef),
    /// Local variable index (`iload`, `astore`, ...)
    Local(u16),
    /// Immediate value (`bipush`, `sipush`, `newarray`)
    Immediate(i32),
    /// Relative branch offset
    Branch(i32),
    /// Class or array type reference (`new`, `checkcast`, `instanceof`)
    Type(String),
}

/// One instruction of a method body: opcode plus operand.
///
/// # Examples
///
/// ```rust
/// use classweave::bytecode::{opcodes, Instruction};
///
/// let insn = Instruction::invoke_static("java/lang/System", "nanoTime", "()J");
/// assert_eq!(insn.opcode, opcodes::INVOKESTATIC);
/// assert!(!insn.is_exit());
/// assert!(Instruction::simple(opcodes::RETURN).is_exit());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// The opcode value, see [`crate::bytecode::opcodes`]
    pub opcode: u8,
    /// The decoded operand
    pub operand: Operand,
}

impl Instruction {
    /// An instruction with no operand.
    #[must_use]
    pub fn simple(opcode: u8) -> Self {
        Instruction {
            opcode,
            operand: Operand::None,
        }
    }

    /// An `ldc` pushing a string constant.
    #[must_use]
    pub fn load_string(text: impl Into<String>) -> Self {
        Instruction {
            opcode: opcodes::LDC,
            operand: Operand::Constant(ConstantValue::String(text.into())),
        }
    }

    /// An `invokestatic` of a class (non-interface) method.
    #[must_use]
    pub fn invoke_static(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Instruction {
            opcode: opcodes::INVOKESTATIC,
            operand: Operand::Member(MemberRef {
                owner: owner.into(),
                name: name.into(),
                descriptor: descriptor.into(),
                interface: false,
            }),
        }
    }

    /// The mnemonic for this instruction's opcode, or `None` outside the
    /// standard instruction set.
    #[must_use]
    pub fn mnemonic(&self) -> Option<&'static str> {
        opcodes::mnemonic(self.opcode)
    }

    /// Whether this instruction is a method exit, see
    /// [`opcodes::is_return`].
    #[must_use]
    pub fn is_exit(&self) -> bool {
        opcodes::is_return(self.opcode)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => write!(f, "{name}")?,
            None => write!(f, "op_{}", self.opcode)?,
        }
        match &self.operand {
            Operand::None => Ok(()),
            Operand::Constant(value) => write!(f, " {value}"),
            Operand::Member(member) => write!(f, " {member}"),
            Operand::Local(index) => write!(f, " {index}"),
            Operand::Immediate(value) => write!(f, " {value}"),
            Operand::Branch(offset) => write!(f, " {offset:+}"),
            Operand::Type(name) => write!(f, " {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_simple() {
        assert_eq!(Instruction::simple(opcodes::RETURN).to_string(), "return");
        assert_eq!(Instruction::simple(opcodes::ALOAD_0).to_string(), "aload_0");
        assert_eq!(Instruction::simple(255).to_string(), "op_255");
    }

    #[test]
    fn test_display_operands() {
        assert_eq!(
            Instruction::load_string("app.Greeter").to_string(),
            "ldc \"app.Greeter\""
        );
        assert_eq!(
            Instruction::invoke_static("android/util/Log", "e", "(Ljava/lang/String;Ljava/lang/String;)I")
                .to_string(),
            "invokestatic android/util/Log.e:(Ljava/lang/String;Ljava/lang/String;)I"
        );
    }

    #[test]
    fn test_exit_classification_follows_opcode() {
        assert!(Instruction::simple(opcodes::IRETURN).is_exit());
        assert!(Instruction::simple(opcodes::ARETURN).is_exit());
        assert!(!Instruction::simple(opcodes::GOTO).is_exit());
        assert!(!Instruction::simple(opcodes::ATHROW).is_exit());
    }
}
