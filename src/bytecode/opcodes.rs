//! JVM opcode constants, mnemonics, and classification.
//!
//! The constant values follow the JVM specification's instruction set, one
//! `u8` per opcode. The engine itself only ever emits a handful of these
//! ([`LDC`], [`INVOKESTATIC`]) and classifies the return family, but the full
//! table is what makes trace output and host-supplied streams readable.
//!
//! # Exit classification
//!
//! [`is_return`] answers whether an opcode terminates the current method by
//! returning to the caller. It is a closed numeric range check over
//! [`IRETURN`]`..=`[`RETURN`], which covers every value category plus void.
//! Opcodes outside the known instruction set are conservatively treated as
//! non-exits: under-instrumenting an unknown opcode keeps the emitted stream
//! valid, corrupting it would not. The range check itself is only correct as
//! long as the instruction set keeps the return family contiguous; an
//! enumerated set would survive renumbering, the interval would not.

use strum::Display;

/// Do nothing.
pub const NOP: u8 = 0;
/// Push `null`.
pub const ACONST_NULL: u8 = 1;
/// Push int constant -1.
pub const ICONST_M1: u8 = 2;
/// Push int constant 0.
pub const ICONST_0: u8 = 3;
/// Push int constant 1.
pub const ICONST_1: u8 = 4;
/// Push int constant 2.
pub const ICONST_2: u8 = 5;
/// Push int constant 3.
pub const ICONST_3: u8 = 6;
/// Push int constant 4.
pub const ICONST_4: u8 = 7;
/// Push int constant 5.
pub const ICONST_5: u8 = 8;
/// Push long constant 0.
pub const LCONST_0: u8 = 9;
/// Push long constant 1.
pub const LCONST_1: u8 = 10;
/// Push float constant 0.0.
pub const FCONST_0: u8 = 11;
/// Push float constant 1.0.
pub const FCONST_1: u8 = 12;
/// Push float constant 2.0.
pub const FCONST_2: u8 = 13;
/// Push double constant 0.0.
pub const DCONST_0: u8 = 14;
/// Push double constant 1.0.
pub const DCONST_1: u8 = 15;
/// Push a sign-extended byte.
pub const BIPUSH: u8 = 16;
/// Push a sign-extended short.
pub const SIPUSH: u8 = 17;
/// Push an item from the run-time constant pool (one-byte index).
pub const LDC: u8 = 18;
/// Push an item from the run-time constant pool (two-byte index).
pub const LDC_W: u8 = 19;
/// Push a long or double from the run-time constant pool.
pub const LDC2_W: u8 = 20;
/// Load int from local variable.
pub const ILOAD: u8 = 21;
/// Load long from local variable.
pub const LLOAD: u8 = 22;
/// Load float from local variable.
pub const FLOAD: u8 = 23;
/// Load double from local variable.
pub const DLOAD: u8 = 24;
/// Load reference from local variable.
pub const ALOAD: u8 = 25;
/// Load int from local variable 0.
pub const ILOAD_0: u8 = 26;
/// Load int from local variable 1.
pub const ILOAD_1: u8 = 27;
/// Load int from local variable 2.
pub const ILOAD_2: u8 = 28;
/// Load int from local variable 3.
pub const ILOAD_3: u8 = 29;
/// Load long from local variable 0.
pub const LLOAD_0: u8 = 30;
/// Load long from local variable 1.
pub const LLOAD_1: u8 = 31;
/// Load long from local variable 2.
pub const LLOAD_2: u8 = 32;
/// Load long from local variable 3.
pub const LLOAD_3: u8 = 33;
/// Load float from local variable 0.
pub const FLOAD_0: u8 = 34;
/// Load float from local variable 1.
pub const FLOAD_1: u8 = 35;
/// Load float from local variable 2.
pub const FLOAD_2: u8 = 36;
/// Load float from local variable 3.
pub const FLOAD_3: u8 = 37;
/// Load double from local variable 0.
pub const DLOAD_0: u8 = 38;
/// Load double from local variable 1.
pub const DLOAD_1: u8 = 39;
/// Load double from local variable 2.
pub const DLOAD_2: u8 = 40;
/// Load double from local variable 3.
pub const DLOAD_3: u8 = 41;
/// Load reference from local variable 0.
pub const ALOAD_0: u8 = 42;
/// Load reference from local variable 1.
pub const ALOAD_1: u8 = 43;
/// Load reference from local variable 2.
pub const ALOAD_2: u8 = 44;
/// Load reference from local variable 3.
pub const ALOAD_3: u8 = 45;
/// Load int from array.
pub const IALOAD: u8 = 46;
/// Load long from array.
pub const LALOAD: u8 = 47;
/// Load float from array.
pub const FALOAD: u8 = 48;
/// Load double from array.
pub const DALOAD: u8 = 49;
/// Load reference from array.
pub const AALOAD: u8 = 50;
/// Load byte or boolean from array.
pub const BALOAD: u8 = 51;
/// Load char from array.
pub const CALOAD: u8 = 52;
/// Load short from array.
pub const SALOAD: u8 = 53;
/// Store int into local variable.
pub const ISTORE: u8 = 54;
/// Store long into local variable.
pub const LSTORE: u8 = 55;
/// Store float into local variable.
pub const FSTORE: u8 = 56;
/// Store double into local variable.
pub const DSTORE: u8 = 57;
/// Store reference into local variable.
pub const ASTORE: u8 = 58;
/// Store int into local variable 0.
pub const ISTORE_0: u8 = 59;
/// Store int into local variable 1.
pub const ISTORE_1: u8 = 60;
/// Store int into local variable 2.
pub const ISTORE_2: u8 = 61;
/// Store int into local variable 3.
pub const ISTORE_3: u8 = 62;
/// Store long into local variable 0.
pub const LSTORE_0: u8 = 63;
/// Store long into local variable 1.
pub const LSTORE_1: u8 = 64;
/// Store long into local variable 2.
pub const LSTORE_2: u8 = 65;
/// Store long into local variable 3.
pub const LSTORE_3: u8 = 66;
/// Store float into local variable 0.
pub const FSTORE_0: u8 = 67;
/// Store float into local variable 1.
pub const FSTORE_1: u8 = 68;
/// Store float into local variable 2.
pub const FSTORE_2: u8 = 69;
/// Store float into local variable 3.
pub const FSTORE_3: u8 = 70;
/// Store double into local variable 0.
pub const DSTORE_0: u8 = 71;
/// Store double into local variable 1.
pub const DSTORE_1: u8 = 72;
/// Store double into local variable 2.
pub const DSTORE_2: u8 = 73;
/// Store double into local variable 3.
pub const DSTORE_3: u8 = 74;
/// Store reference into local variable 0.
pub const ASTORE_0: u8 = 75;
/// Store reference into local variable 1.
pub const ASTORE_1: u8 = 76;
/// Store reference into local variable 2.
pub const ASTORE_2: u8 = 77;
/// Store reference into local variable 3.
pub const ASTORE_3: u8 = 78;
/// Store into int array.
pub const IASTORE: u8 = 79;
/// Store into long array.
pub const LASTORE: u8 = 80;
/// Store into float array.
pub const FASTORE: u8 = 81;
/// Store into double array.
pub const DASTORE: u8 = 82;
/// Store into reference array.
pub const AASTORE: u8 = 83;
/// Store into byte or boolean array.
pub const BASTORE: u8 = 84;
/// Store into char array.
pub const CASTORE: u8 = 85;
/// Store into short array.
pub const SASTORE: u8 = 86;
/// Pop the top operand stack value.
pub const POP: u8 = 87;
/// Pop the top one or two operand stack values.
pub const POP2: u8 = 88;
/// Duplicate the top operand stack value.
pub const DUP: u8 = 89;
/// Duplicate the top value and insert it two values down.
pub const DUP_X1: u8 = 90;
/// Duplicate the top value and insert it two or three values down.
pub const DUP_X2: u8 = 91;
/// Duplicate the top one or two operand stack values.
pub const DUP2: u8 = 92;
/// Duplicate the top one or two values and insert them below.
pub const DUP2_X1: u8 = 93;
/// Duplicate the top one or two values and insert them further below.
pub const DUP2_X2: u8 = 94;
/// Swap the top two operand stack values.
pub const SWAP: u8 = 95;
/// Add int.
pub const IADD: u8 = 96;
/// Add long.
pub const LADD: u8 = 97;
/// Add float.
pub const FADD: u8 = 98;
/// Add double.
pub const DADD: u8 = 99;
/// Subtract int.
pub const ISUB: u8 = 100;
/// Subtract long.
pub const LSUB: u8 = 101;
/// Subtract float.
pub const FSUB: u8 = 102;
/// Subtract double.
pub const DSUB: u8 = 103;
/// Multiply int.
pub const IMUL: u8 = 104;
/// Multiply long.
pub const LMUL: u8 = 105;
/// Multiply float.
pub const FMUL: u8 = 106;
/// Multiply double.
pub const DMUL: u8 = 107;
/// Divide int.
pub const IDIV: u8 = 108;
/// Divide long.
pub const LDIV: u8 = 109;
/// Divide float.
pub const FDIV: u8 = 110;
/// Divide double.
pub const DDIV: u8 = 111;
/// Remainder int.
pub const IREM: u8 = 112;
/// Remainder long.
pub const LREM: u8 = 113;
/// Remainder float.
pub const FREM: u8 = 114;
/// Remainder double.
pub const DREM: u8 = 115;
/// Negate int.
pub const INEG: u8 = 116;
/// Negate long.
pub const LNEG: u8 = 117;
/// Negate float.
pub const FNEG: u8 = 118;
/// Negate double.
pub const DNEG: u8 = 119;
/// Shift left int.
pub const ISHL: u8 = 120;
/// Shift left long.
pub const LSHL: u8 = 121;
/// Arithmetic shift right int.
pub const ISHR: u8 = 122;
/// Arithmetic shift right long.
pub const LSHR: u8 = 123;
/// Logical shift right int.
pub const IUSHR: u8 = 124;
/// Logical shift right long.
pub const LUSHR: u8 = 125;
/// Boolean AND int.
pub const IAND: u8 = 126;
/// Boolean AND long.
pub const LAND: u8 = 127;
/// Boolean OR int.
pub const IOR: u8 = 128;
/// Boolean OR long.
pub const LOR: u8 = 129;
/// Boolean XOR int.
pub const IXOR: u8 = 130;
/// Boolean XOR long.
pub const LXOR: u8 = 131;
/// Increment local variable by constant.
pub const IINC: u8 = 132;
/// Convert int to long.
pub const I2L: u8 = 133;
/// Convert int to float.
pub const I2F: u8 = 134;
/// Convert int to double.
pub const I2D: u8 = 135;
/// Convert long to int.
pub const L2I: u8 = 136;
/// Convert long to float.
pub const L2F: u8 = 137;
/// Convert long to double.
pub const L2D: u8 = 138;
/// Convert float to int.
pub const F2I: u8 = 139;
/// Convert float to long.
pub const F2L: u8 = 140;
/// Convert float to double.
pub const F2D: u8 = 141;
/// Convert double to int.
pub const D2I: u8 = 142;
/// Convert double to long.
pub const D2L: u8 = 143;
/// Convert double to float.
pub const D2F: u8 = 144;
/// Convert int to byte.
pub const I2B: u8 = 145;
/// Convert int to char.
pub const I2C: u8 = 146;
/// Convert int to short.
pub const I2S: u8 = 147;
/// Compare long.
pub const LCMP: u8 = 148;
/// Compare float (-1 on NaN).
pub const FCMPL: u8 = 149;
/// Compare float (1 on NaN).
pub const FCMPG: u8 = 150;
/// Compare double (-1 on NaN).
pub const DCMPL: u8 = 151;
/// Compare double (1 on NaN).
pub const DCMPG: u8 = 152;
/// Branch if int is zero.
pub const IFEQ: u8 = 153;
/// Branch if int is not zero.
pub const IFNE: u8 = 154;
/// Branch if int is less than zero.
pub const IFLT: u8 = 155;
/// Branch if int is greater than or equal to zero.
pub const IFGE: u8 = 156;
/// Branch if int is greater than zero.
pub const IFGT: u8 = 157;
/// Branch if int is less than or equal to zero.
pub const IFLE: u8 = 158;
/// Branch if ints are equal.
pub const IF_ICMPEQ: u8 = 159;
/// Branch if ints are not equal.
pub const IF_ICMPNE: u8 = 160;
/// Branch if int is less than the other.
pub const IF_ICMPLT: u8 = 161;
/// Branch if int is greater than or equal to the other.
pub const IF_ICMPGE: u8 = 162;
/// Branch if int is greater than the other.
pub const IF_ICMPGT: u8 = 163;
/// Branch if int is less than or equal to the other.
pub const IF_ICMPLE: u8 = 164;
/// Branch if references are equal.
pub const IF_ACMPEQ: u8 = 165;
/// Branch if references are not equal.
pub const IF_ACMPNE: u8 = 166;
/// Branch always.
pub const GOTO: u8 = 167;
/// Jump subroutine.
pub const JSR: u8 = 168;
/// Return from subroutine.
pub const RET: u8 = 169;
/// Access jump table by index and jump.
pub const TABLESWITCH: u8 = 170;
/// Access jump table by key match and jump.
pub const LOOKUPSWITCH: u8 = 171;
/// Return int from method.
pub const IRETURN: u8 = 172;
/// Return long from method.
pub const LRETURN: u8 = 173;
/// Return float from method.
pub const FRETURN: u8 = 174;
/// Return double from method.
pub const DRETURN: u8 = 175;
/// Return reference from method.
pub const ARETURN: u8 = 176;
/// Return void from method.
pub const RETURN: u8 = 177;
/// Get static field from class.
pub const GETSTATIC: u8 = 178;
/// Set static field in class.
pub const PUTSTATIC: u8 = 179;
/// Fetch field from object.
pub const GETFIELD: u8 = 180;
/// Set field in object.
pub const PUTFIELD: u8 = 181;
/// Invoke instance method, dispatch based on class.
pub const INVOKEVIRTUAL: u8 = 182;
/// Invoke instance method, direct dispatch.
pub const INVOKESPECIAL: u8 = 183;
/// Invoke a class (static) method.
pub const INVOKESTATIC: u8 = 184;
/// Invoke interface method.
pub const INVOKEINTERFACE: u8 = 185;
/// Invoke a dynamically-computed call site.
pub const INVOKEDYNAMIC: u8 = 186;
/// Create new object.
pub const NEW: u8 = 187;
/// Create new array of primitive type.
pub const NEWARRAY: u8 = 188;
/// Create new array of reference type.
pub const ANEWARRAY: u8 = 189;
/// Get length of array.
pub const ARRAYLENGTH: u8 = 190;
/// Throw exception or error.
pub const ATHROW: u8 = 191;
/// Check whether object is of given type.
pub const CHECKCAST: u8 = 192;
/// Determine if object is of given type.
pub const INSTANCEOF: u8 = 193;
/// Enter monitor for object.
pub const MONITORENTER: u8 = 194;
/// Exit monitor for object.
pub const MONITOREXIT: u8 = 195;
/// Extend local variable index by additional bytes.
pub const WIDE: u8 = 196;
/// Create new multidimensional array.
pub const MULTIANEWARRAY: u8 = 197;
/// Branch if reference is null.
pub const IFNULL: u8 = 198;
/// Branch if reference is not null.
pub const IFNONNULL: u8 = 199;
/// Branch always (wide offset).
pub const GOTO_W: u8 = 200;
/// Jump subroutine (wide offset).
pub const JSR_W: u8 = 201;

/// Whether `opcode` terminates the current method by returning to the caller.
///
/// True exactly for the contiguous return family [`IRETURN`]`..=`[`RETURN`]:
/// one typed return per value category plus the void return. `athrow` and
/// `ret` are not method returns and are not classified as exits. Anything
/// outside the known instruction set is conservatively not an exit, which
/// under-instruments rather than corrupting the emitted stream.
#[must_use]
pub fn is_return(opcode: u8) -> bool {
    (IRETURN..=RETURN).contains(&opcode)
}

/// Coarse grouping of the instruction set, used by trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InstructionCategory {
    /// Constant pushes (`aconst_null` through `ldc2_w`)
    Constant,
    /// Local and array loads
    Load,
    /// Local and array stores
    Store,
    /// Raw operand-stack manipulation (`pop`, `dup`, `swap`)
    Stack,
    /// Arithmetic, logic, and `iinc`
    Arithmetic,
    /// Numeric conversions
    Conversion,
    /// Long/float/double comparisons
    Comparison,
    /// Conditional and unconditional branches, subroutines
    Branch,
    /// `tableswitch` / `lookupswitch`
    Switch,
    /// The method-return family
    Return,
    /// Static and instance field access
    Field,
    /// The invoke family
    Invoke,
    /// Object and array creation, casts, `arraylength`
    Object,
    /// `athrow`
    Throw,
    /// `monitorenter` / `monitorexit`
    Monitor,
    /// `nop` and the `wide` prefix
    Misc,
}

/// Classify `opcode` into its [`InstructionCategory`].
///
/// Returns `None` for values outside the standard instruction set.
#[must_use]
pub fn category(opcode: u8) -> Option<InstructionCategory> {
    Some(match opcode {
        NOP | WIDE => InstructionCategory::Misc,
        ACONST_NULL..=LDC2_W => InstructionCategory::Constant,
        ILOAD..=SALOAD => InstructionCategory::Load,
        ISTORE..=SASTORE => InstructionCategory::Store,
        POP..=SWAP => InstructionCategory::Stack,
        IADD..=IINC => InstructionCategory::Arithmetic,
        I2L..=I2S => InstructionCategory::Conversion,
        LCMP..=DCMPG => InstructionCategory::Comparison,
        IFEQ..=RET | IFNULL..=JSR_W => InstructionCategory::Branch,
        TABLESWITCH | LOOKUPSWITCH => InstructionCategory::Switch,
        IRETURN..=RETURN => InstructionCategory::Return,
        GETSTATIC..=PUTFIELD => InstructionCategory::Field,
        INVOKEVIRTUAL..=INVOKEDYNAMIC => InstructionCategory::Invoke,
        NEW..=ARRAYLENGTH | CHECKCAST | INSTANCEOF | MULTIANEWARRAY => InstructionCategory::Object,
        ATHROW => InstructionCategory::Throw,
        MONITORENTER | MONITOREXIT => InstructionCategory::Monitor,
        _ => return None,
    })
}

/// Look up the mnemonic for `opcode`.
///
/// Returns `None` for values outside the standard instruction set.
#[must_use]
pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    MNEMONICS.get(opcode as usize).copied()
}

/// Mnemonics indexed by opcode value, `nop` through `jsr_w`.
static MNEMONICS: [&str; 202] = [
    "nop",
    "aconst_null",
    "iconst_m1",
    "iconst_0",
    "iconst_1",
    "iconst_2",
    "iconst_3",
    "iconst_4",
    "iconst_5",
    "lconst_0",
    "lconst_1",
    "fconst_0",
    "fconst_1",
    "fconst_2",
    "dconst_0",
    "dconst_1",
    "bipush",
    "sipush",
    "ldc",
    "ldc_w",
    "ldc2_w",
    "iload",
    "lload",
    "fload",
    "dload",
    "aload",
    "iload_0",
    "iload_1",
    "iload_2",
    "iload_3",
    "lload_0",
    "lload_1",
    "lload_2",
    "lload_3",
    "fload_0",
    "fload_1",
    "fload_2",
    "fload_3",
    "dload_0",
    "dload_1",
    "dload_2",
    "dload_3",
    "aload_0",
    "aload_1",
    "aload_2",
    "aload_3",
    "iaload",
    "laload",
    "faload",
    "daload",
    "aaload",
    "baload",
    "caload",
    "saload",
    "istore",
    "lstore",
    "fstore",
    "dstore",
    "astore",
    "istore_0",
    "istore_1",
    "istore_2",
    "istore_3",
    "lstore_0",
    "lstore_1",
    "lstore_2",
    "lstore_3",
    "fstore_0",
    "fstore_1",
    "fstore_2",
    "fstore_3",
    "dstore_0",
    "dstore_1",
    "dstore_2",
    "dstore_3",
    "astore_0",
    "astore_1",
    "astore_2",
    "astore_3",
    "iastore",
    "lastore",
    "fastore",
    "dastore",
    "aastore",
    "bastore",
    "castore",
    "sastore",
    "pop",
    "pop2",
    "dup",
    "dup_x1",
    "dup_x2",
    "dup2",
    "dup2_x1",
    "dup2_x2",
    "swap",
    "iadd",
    "ladd",
    "fadd",
    "dadd",
    "isub",
    "lsub",
    "fsub",
    "dsub",
    "imul",
    "lmul",
    "fmul",
    "dmul",
    "idiv",
    "ldiv",
    "fdiv",
    "ddiv",
    "irem",
    "lrem",
    "frem",
    "drem",
    "ineg",
    "lneg",
    "fneg",
    "dneg",
    "ishl",
    "lshl",
    "ishr",
    "lshr",
    "iushr",
    "lushr",
    "iand",
    "land",
    "ior",
    "lor",
    "ixor",
    "lxor",
    "iinc",
    "i2l",
    "i2f",
    "i2d",
    "l2i",
    "l2f",
    "l2d",
    "f2i",
    "f2l",
    "f2d",
    "d2i",
    "d2l",
    "d2f",
    "i2b",
    "i2c",
    "i2s",
    "lcmp",
    "fcmpl",
    "fcmpg",
    "dcmpl",
    "dcmpg",
    "ifeq",
    "ifne",
    "iflt",
    "ifge",
    "ifgt",
    "ifle",
    "if_icmpeq",
    "if_icmpne",
    "if_icmplt",
    "if_icmpge",
    "if_icmpgt",
    "if_icmple",
    "if_acmpeq",
    "if_acmpne",
    "goto",
    "jsr",
    "ret",
    "tableswitch",
    "lookupswitch",
    "ireturn",
    "lreturn",
    "freturn",
    "dreturn",
    "areturn",
    "return",
    "getstatic",
    "putstatic",
    "getfield",
    "putfield",
    "invokevirtual",
    "invokespecial",
    "invokestatic",
    "invokeinterface",
    "invokedynamic",
    "new",
    "newarray",
    "anewarray",
    "arraylength",
    "athrow",
    "checkcast",
    "instanceof",
    "monitorenter",
    "monitorexit",
    "wide",
    "multianewarray",
    "ifnull",
    "ifnonnull",
    "goto_w",
    "jsr_w",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_family_boundaries() {
        // The opcode just below the typed-return range and the one just above
        // the void return are both non-exits.
        assert!(!is_return(LOOKUPSWITCH));
        assert!(!is_return(GETSTATIC));

        for opcode in IRETURN..=RETURN {
            assert!(is_return(opcode), "opcode {opcode} must classify as exit");
        }
    }

    #[test]
    fn test_return_family_is_exactly_six_wide() {
        let exits: Vec<u8> = (0..=u8::MAX).filter(|op| is_return(*op)).collect();
        assert_eq!(
            exits,
            vec![IRETURN, LRETURN, FRETURN, DRETURN, ARETURN, RETURN]
        );
    }

    #[test]
    fn test_mnemonic_lookup() {
        assert_eq!(mnemonic(NOP), Some("nop"));
        assert_eq!(mnemonic(LDC), Some("ldc"));
        assert_eq!(mnemonic(INVOKESTATIC), Some("invokestatic"));
        assert_eq!(mnemonic(RETURN), Some("return"));
        assert_eq!(mnemonic(JSR_W), Some("jsr_w"));
        assert_eq!(mnemonic(202), None);
        assert_eq!(mnemonic(255), None);
    }

    #[test]
    fn test_category_spot_checks() {
        assert_eq!(category(LDC), Some(InstructionCategory::Constant));
        assert_eq!(category(ALOAD_0), Some(InstructionCategory::Load));
        assert_eq!(category(RETURN), Some(InstructionCategory::Return));
        assert_eq!(category(INVOKESTATIC), Some(InstructionCategory::Invoke));
        assert_eq!(category(ATHROW), Some(InstructionCategory::Throw));
        assert_eq!(category(LOOKUPSWITCH), Some(InstructionCategory::Switch));
        assert_eq!(category(WIDE), Some(InstructionCategory::Misc));
        assert_eq!(category(202), None);
    }

    #[test]
    fn test_every_standard_opcode_is_categorized() {
        for opcode in 0..=JSR_W {
            assert!(
                category(opcode).is_some(),
                "opcode {opcode} ({:?}) missing a category",
                mnemonic(opcode)
            );
        }
    }

    #[test]
    fn test_category_display_is_lowercase() {
        assert_eq!(InstructionCategory::Return.to_string(), "return");
        assert_eq!(InstructionCategory::Invoke.to_string(), "invoke");
    }
}
