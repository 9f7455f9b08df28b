use super::*;
use pretty_assertions::assert_eq;

#[test]
fn root_is_current_when_empty() {
    let stack = ContextStack::new(State::Top, 0);
    assert_eq!(
        *stack.current(),
        Context {
            kind: State::Top,
            indent: 0
        }
    );
    assert_eq!(stack.parent(), None);
}

#[test]
fn push_and_pop() {
    let mut stack = ContextStack::new(State::Top, 0);
    stack.push(State::Block, 2);
    stack.push(State::Prop, 4);
    assert_eq!(stack.depth(), 3);
    assert_eq!(stack.current().kind, State::Prop);
    assert_eq!(stack.parent().map(|cx| cx.kind), Some(State::Block));
    assert_eq!(stack.ancestor(2).map(|cx| cx.kind), Some(State::Top));
    assert_eq!(stack.ancestor(3), None);

    assert!(stack.pop());
    assert_eq!(stack.current().kind, State::Block);
}

#[test]
fn root_is_never_popped() {
    let mut stack = ContextStack::new(State::Block, 8);
    assert!(!stack.pop());
    assert!(!stack.pop());
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.current().indent, 8);
}

#[test]
fn iter_runs_innermost_first() {
    let mut stack = ContextStack::new(State::Top, 0);
    stack.push(State::AtBlock, 2);
    stack.push(State::AtBlockParens, 4);
    let kinds: Vec<State> = stack.iter().map(|cx| cx.kind).collect();
    assert_eq!(kinds, vec![State::AtBlockParens, State::AtBlock, State::Top]);
}
