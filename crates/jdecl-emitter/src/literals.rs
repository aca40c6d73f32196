//! Rendering of compile-time constants as target-notation literals.

use jdecl_ast::ConstantValue;

/// `debug_text` is the shortest round-tripping form of the value at its own width.
fn render_float(value: f64, debug_text: String, suffix: &str) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INFINITY" } else { "-INFINITY" }.to_string();
    }
    let mut text = debug_text;
    if !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text.push_str(suffix);
    text
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 3);
    escaped.push_str("@\"");
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 || (c as u32) > 0x7e => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    escaped.push_str(&format!("\\u{unit:04x}"));
                }
            }
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

/// Literal text for a constant; used by `#define` constant declarations.
pub fn render_literal(value: &ConstantValue) -> String {
    match value {
        ConstantValue::Boolean(b) => b.to_string(),
        ConstantValue::Byte(v) => v.to_string(),
        ConstantValue::Short(v) => v.to_string(),
        ConstantValue::Char(c) => (*c as u32).to_string(),
        ConstantValue::Int(v) => {
            // The most negative int is not expressible as a negated literal.
            if *v == i32::MIN {
                "((jint) 0x80000000)".to_string()
            } else {
                v.to_string()
            }
        }
        ConstantValue::Long(v) => {
            if *v == i64::MIN {
                "((jlong) 0x8000000000000000LL)".to_string()
            } else {
                format!("{v}LL")
            }
        }
        ConstantValue::Float(v) => render_float(f64::from(*v), format!("{v:?}"), "f"),
        ConstantValue::Double(v) => render_float(*v, format!("{v:?}"), ""),
        ConstantValue::String(s) => escape_string(s),
    }
}
