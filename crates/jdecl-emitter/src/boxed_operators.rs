//! Operator macros for boxed primitive wrapper types.
//!
//! Which macro families apply is decided by the wrapped primitive's
//! one-letter signature, from a table rather than per-operator branches.

use crate::naming::{capitalize, primitive_target_name};
use jdecl_ast::PrimitiveKind;

/// One operator family and the signature characters it applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoxedOperatorFamily {
    pub macro_name: &'static str,
    pub signatures: &'static str,
}

/// Compound-assign and shift families, in print order. `BOXED_INC_AND_DEC` always applies.
pub const BOXED_OPERATOR_FAMILIES: &[BoxedOperatorFamily] = &[
    BoxedOperatorFamily {
        macro_name: "BOXED_COMPOUND_ASSIGN_ARITHMETIC",
        signatures: "DFIJ",
    },
    BoxedOperatorFamily {
        macro_name: "BOXED_COMPOUND_ASSIGN_MOD",
        signatures: "IJ",
    },
    BoxedOperatorFamily {
        macro_name: "BOXED_COMPOUND_ASSIGN_FPMOD",
        signatures: "DF",
    },
    BoxedOperatorFamily {
        macro_name: "BOXED_COMPOUND_ASSIGN_BITWISE",
        signatures: "IJ",
    },
    BoxedOperatorFamily {
        macro_name: "BOXED_SHIFT_ASSIGN_32",
        signatures: "I",
    },
    BoxedOperatorFamily {
        macro_name: "BOXED_SHIFT_ASSIGN_64",
        signatures: "J",
    },
];

/// Primitive wrapped by a boxed wrapper class, if `qualified_name` is one.
pub fn unboxed_primitive(qualified_name: &str) -> Option<PrimitiveKind> {
    match qualified_name {
        "java.lang.Boolean" => Some(PrimitiveKind::Boolean),
        "java.lang.Byte" => Some(PrimitiveKind::Byte),
        "java.lang.Character" => Some(PrimitiveKind::Char),
        "java.lang.Short" => Some(PrimitiveKind::Short),
        "java.lang.Integer" => Some(PrimitiveKind::Int),
        "java.lang.Long" => Some(PrimitiveKind::Long),
        "java.lang.Float" => Some(PrimitiveKind::Float),
        "java.lang.Double" => Some(PrimitiveKind::Double),
        _ => None,
    }
}

/// Name of the wrapper's value accessor. `long` and `byte` follow the
/// runtime's width naming rather than the primitive's name.
pub fn value_method(kind: PrimitiveKind) -> String {
    match kind {
        PrimitiveKind::Long => "longLongValue".to_string(),
        PrimitiveKind::Byte => "charValue".to_string(),
        _ => format!("{}Value", kind.name()),
    }
}

/// Macro invocations for the wrapper type `type_name` boxing `kind`.
pub fn boxed_operator_lines(kind: PrimitiveKind, type_name: &str) -> Vec<String> {
    let cap_name = capitalize(kind.name());
    let value_method = value_method(kind);
    let primitive_type = primitive_target_name(kind);
    let signature = kind.signature_char();

    let mut lines = vec![format!(
        "BOXED_INC_AND_DEC({cap_name}, {value_method}, {type_name})"
    )];
    lines.extend(
        BOXED_OPERATOR_FAMILIES
            .iter()
            .filter(|family| family.signatures.contains(signature))
            .map(|family| {
                format!(
                    "{}({cap_name}, {value_method}, {primitive_type}, {type_name})",
                    family.macro_name
                )
            }),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_families() {
        let lines = boxed_operator_lines(PrimitiveKind::Long, "JavaLangLong");
        assert_eq!(
            lines,
            vec![
                "BOXED_INC_AND_DEC(Long, longLongValue, JavaLangLong)",
                "BOXED_COMPOUND_ASSIGN_ARITHMETIC(Long, longLongValue, jlong, JavaLangLong)",
                "BOXED_COMPOUND_ASSIGN_MOD(Long, longLongValue, jlong, JavaLangLong)",
                "BOXED_COMPOUND_ASSIGN_BITWISE(Long, longLongValue, jlong, JavaLangLong)",
                "BOXED_SHIFT_ASSIGN_64(Long, longLongValue, jlong, JavaLangLong)",
            ]
        );
    }

    #[test]
    fn test_boolean_only_inc_and_dec() {
        let lines = boxed_operator_lines(PrimitiveKind::Boolean, "JavaLangBoolean");
        assert_eq!(
            lines,
            vec!["BOXED_INC_AND_DEC(Boolean, booleanValue, JavaLangBoolean)"]
        );
    }

    #[test]
    fn test_value_method_table() {
        assert_eq!(value_method(PrimitiveKind::Byte), "charValue");
        assert_eq!(value_method(PrimitiveKind::Char), "charValue");
        assert_eq!(value_method(PrimitiveKind::Double), "doubleValue");
        assert_eq!(unboxed_primitive("java.lang.Character"), Some(PrimitiveKind::Char));
        assert_eq!(unboxed_primitive("java.lang.Number"), None);
    }
}
