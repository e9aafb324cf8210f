//! Runtime message-template interpolation
//!
//! Substitutes an ordered slice of [`Display`](std::fmt::Display) arguments
//! into `{}` placeholders. `{{` and `}}` are literal-brace escapes; nothing
//! else may appear between braces. Unlike the `format!` macros this path is
//! checked at runtime, so a placeholder/argument mismatch surfaces as a
//! [`FormatError`] instead of failing to compile.

use std::fmt::{self, Write as _};

use crate::error::FormatError;

/// Count `{}` placeholders, rejecting any brace that is not part of a
/// placeholder or an escape pair.
fn count_placeholders(template: &str) -> Result<usize, FormatError> {
    let bytes = template.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => match bytes.get(i + 1) {
                Some(b'{') => i += 2,
                Some(b'}') => {
                    count += 1;
                    i += 2;
                }
                _ => return Err(FormatError::UnmatchedBrace { position: i }),
            },
            b'}' => {
                if bytes.get(i + 1) == Some(&b'}') {
                    i += 2;
                } else {
                    return Err(FormatError::UnmatchedBrace { position: i });
                }
            }
            _ => i += 1,
        }
    }
    Ok(count)
}

/// Render `template`, substituting `args` in order.
///
/// The template is validated before any argument is formatted, so a
/// returned error means nothing was produced.
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
    let placeholders = count_placeholders(template)?;
    if placeholders != args.len() {
        return Err(FormatError::ArgumentCount {
            placeholders,
            args: args.len(),
        });
    }

    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let bytes = template.as_bytes();
    let mut next = 0;
    let mut lit_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            // Validation above guarantees every brace has a partner byte.
            b'{' | b'}' => {
                out.push_str(&template[lit_start..i]);
                if bytes[i] == b'{' && bytes[i + 1] == b'}' {
                    write!(out, "{}", args[next])
                        .map_err(|_| FormatError::ArgumentFailed { index: next })?;
                    next += 1;
                } else {
                    out.push(bytes[i] as char);
                }
                i += 2;
                lit_start = i;
            }
            _ => i += 1,
        }
    }
    out.push_str(&template[lit_start..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_in_order() {
        let rendered = render("x={} y={}", &[&5, &"abc"]).unwrap();
        assert_eq!(rendered, "x=5 y=abc");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(render("plain text", &[]).unwrap(), "plain text");
    }

    #[test]
    fn test_brace_escapes_render_literally() {
        let rendered = render("mask {{{}}} ok", &[&0b110u8]).unwrap();
        assert_eq!(rendered, "mask {6} ok");
    }

    #[test]
    fn test_multibyte_literals_survive() {
        let rendered = render("état: {}°", &[&21]).unwrap();
        assert_eq!(rendered, "état: 21°");
    }

    #[test]
    fn test_too_few_arguments() {
        let err = render("{} {}", &[&1]).unwrap_err();
        assert_eq!(
            err,
            FormatError::ArgumentCount {
                placeholders: 2,
                args: 1
            }
        );
    }

    #[test]
    fn test_too_many_arguments() {
        let err = render("no holes", &[&1]).unwrap_err();
        assert_eq!(
            err,
            FormatError::ArgumentCount {
                placeholders: 0,
                args: 1
            }
        );
    }

    #[test]
    fn test_unmatched_braces() {
        assert_eq!(
            render("oops {", &[]).unwrap_err(),
            FormatError::UnmatchedBrace { position: 5 }
        );
        assert_eq!(
            render("} first", &[]).unwrap_err(),
            FormatError::UnmatchedBrace { position: 0 }
        );
        // Named/indexed placeholders are not supported.
        assert_eq!(
            render("{0}", &[&1]).unwrap_err(),
            FormatError::UnmatchedBrace { position: 0 }
        );
    }
}
