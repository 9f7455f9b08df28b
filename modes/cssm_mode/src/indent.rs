//! Indentation for a line, from the state before it.

use crate::context::ContextStack;
use crate::State;

/// Indentation, in columns, for a line starting with `text_after`.
///
/// The innermost context's indentation applies, except that a line opening
/// with a closing delimiter lines up with the construct it closes:
///
/// - `}` closing a block resumes the enclosing context's indentation;
/// - `)` closing parentheses, or `{` opening the body of an at-rule,
///   dedents one unit.
///
/// Inside a property value, a leading `}` or `)` is judged against the
/// context around the value.
pub(crate) fn indentation(context: &ContextStack, text_after: &str, indent_unit: usize) -> usize {
    let ch = text_after.chars().next();
    let mut level = 0;
    let mut cx = context.current();
    let indent = cx.indent;

    if cx.kind == State::Prop && matches!(ch, Some('}' | ')')) {
        if let Some(parent) = context.ancestor(1) {
            level = 1;
            cx = parent;
        }
    }

    let Some(parent) = context.ancestor(level + 1) else {
        return indent;
    };

    match (ch, cx.kind) {
        (
            Some('}'),
            State::Block | State::Top | State::Interpolation | State::RestrictedAtBlock,
        ) => parent.indent,
        (Some(')'), State::Parens | State::AtBlockParens)
        | (Some('{'), State::At | State::AtBlock) => cx.indent.saturating_sub(indent_unit),
        _ => indent,
    }
}
