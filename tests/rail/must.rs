use std::cell::Cell;
use std::collections::HashMap;

use catch_rail::{catch, handler, must, must2, wrap, BoxError, Must, MustExt};

use crate::common::{parse_a, A};

#[test]
fn ok_step_never_invokes_the_chain() {
    let calls = Cell::new(0);
    let counted = || {
        calls.set(calls.get() + 1);
    };

    let result = must(Ok::<(), &str>(())).handle((handler(|err| {
        counted();
        Some(err)
    }),));

    assert!(result.is_ok());
    assert_eq!(calls.get(), 0);
}

#[test]
fn ok_step_returns_value_unmodified() {
    let value = must2(Ok::<_, &str>(vec![1, 2, 3])).handle((handler(|_| None),)).unwrap();
    assert_eq!(value, vec![1, 2, 3]);

    let value = Must::new("kept", None::<&str>).check().unwrap();
    assert_eq!(value, "kept");
}

#[test]
fn unresolved_error_becomes_abort_with_same_error() {
    let abort = must2(parse_a("no")).check().unwrap_err();
    assert_eq!(abort.to_string(), "length must be in range 3-10");
    assert!(abort.error().downcast_ref::<crate::common::RangeError>().is_some());
}

#[test]
fn resolved_error_yields_zero_value_from_result() {
    let value = must2(parse_a("")).handle((handler(|_| None),)).unwrap();
    assert_eq!(value, A::default());
}

#[test]
fn resolved_error_yields_explicit_value_from_new() {
    let value = Must::new(7, Some("soft failure")).handle((handler(|_| None),)).unwrap();
    assert_eq!(value, 7);
}

#[test]
fn is_err_reports_pending_error() {
    assert!(must(Err::<(), _>("x")).is_err());
    assert!(!must(Ok::<(), &str>(())).is_err());
}

#[test]
fn must_ext_matches_must2() {
    let value = parse_a("hello").must().check().unwrap();
    assert_eq!(value, A("hello".to_string()));

    let abort = parse_a("").must().check().unwrap_err();
    assert_eq!(abort.to_string(), "length must be in range 3-10");
}

#[test]
fn first_unresolved_step_skips_all_later_steps() {
    let mut last = None;
    let check = |i: i32| -> Result<(), String> {
        if i >= 3 {
            Err(format!("number {i} not ok"))
        } else {
            Ok(())
        }
    };

    let result: Result<(), BoxError> = catch((), || {
        for i in 0..5 {
            last = Some(i);
            must(check(i)).check()?;
        }
        Ok(())
    });

    assert_eq!(result.unwrap_err().to_string(), "number 3 not ok");
    assert_eq!(last, Some(3));
}

#[derive(Debug, PartialEq)]
struct Handle(u32);

fn open(id: u32) -> Result<Handle, &'static str> {
    if id == 0 {
        Err("no such handle")
    } else {
        Ok(Handle(id))
    }
}

#[test]
fn check_carries_values_without_default() {
    assert_eq!(must2(open(3)).check().unwrap(), Handle(3));
    assert_eq!(open(3).must().check().unwrap(), Handle(3));

    let abort = must2(open(0)).check().unwrap_err();
    assert_eq!(abort.to_string(), "no such handle");
}

#[test]
fn borrowed_values_pass_through() {
    let ports = HashMap::from([("db", 5432_u16)]);

    let port = must2(ports.get("db").ok_or("no port")).check().unwrap();
    assert_eq!(*port, 5432);

    let abort = must2(ports.get("web").ok_or("no port"))
        .handle_or(&80, (wrap!("web: {err}"),))
        .unwrap_err();
    assert_eq!(abort.to_string(), "web: no port");
}

#[test]
fn handle_or_returns_fallback_when_resolved() {
    let value = must2(open(0)).handle_or(Handle(99), (handler(|_| None),)).unwrap();
    assert_eq!(value, Handle(99));

    let value = must2(open(5)).handle_or(Handle(99), (handler(|_| None),)).unwrap();
    assert_eq!(value, Handle(5));
}

#[test]
fn handle_or_else_runs_fallback_only_when_resolved() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        Handle(1)
    };

    let value = must2(open(7)).handle_or_else(fallback, (handler(|_| None),)).unwrap();
    assert_eq!(value, Handle(7));
    assert_eq!(calls.get(), 0);

    let value = must2(open(0)).handle_or_else(fallback, (handler(|_| None),)).unwrap();
    assert_eq!(value, Handle(1));
    assert_eq!(calls.get(), 1);

    let abort = must2(open(0)).handle_or_else(fallback, ()).unwrap_err();
    assert_eq!(abort.to_string(), "no such handle");
    assert_eq!(calls.get(), 1);
}

#[test]
fn value_given_to_new_wins_over_fallback() {
    let value = Must::new(Handle(4), Some("soft failure"))
        .handle_or(Handle(0), (handler(|_| None),))
        .unwrap();
    assert_eq!(value, Handle(4));
}
