use std::cell::Cell;
use std::panic;

use catch_rail::{handler, must, must2, unwind, wrap, Abort, BoxError, Catch};

use crate::common::{parse_a, parse_b, BusinessModel, RangeError, Transport};

fn parse(input: &Transport) -> Result<BusinessModel, BoxError> {
    unwind::catch((), || BusinessModel {
        a: must2(parse_a(&input.a)).unwind((wrap!("a: {err}"),)),
        b: must2(parse_b(input.b)).unwind((wrap!("b: {err}"),)),
    })
}

#[test]
fn end_to_end_messages_match_return_value_tunnel() {
    assert_eq!(
        parse(&Transport::new("", 5)).unwrap_err().to_string(),
        "a: length must be in range 3-10"
    );
    assert_eq!(
        parse(&Transport::new("good", 101)).unwrap_err().to_string(),
        "b: must be in range 5-100"
    );
    assert_eq!(parse(&Transport::new("good", 10)).unwrap().b.0, 10);
}

#[test]
fn later_steps_do_not_run_after_a_raise() {
    let reached = Cell::new(false);
    let result: Result<(), BoxError> = unwind::catch((), || {
        must(Err::<(), _>("stop")).unwind(());
        reached.set(true);
    });

    assert_eq!(result.unwrap_err().to_string(), "stop");
    assert!(!reached.get());
}

#[test]
fn resolved_chain_does_not_unwind() {
    let value = must2(Err::<u8, _>("soft")).unwind((handler(|_| None),));
    assert_eq!(value, 0);
}

#[test]
fn slot_receives_unresolved_error() {
    let mut slot: Option<BoxError> = None;
    let out = Catch::new(&mut slot)
        .handlers((wrap!("job: {err}"),))
        .run_unwind(|| must(Err::<(), _>("crash")).unwind(()));

    assert!(out.is_none());
    assert_eq!(slot.unwrap().to_string(), "job: crash");
}

#[test]
fn slotless_routine_keeps_unwinding_to_outer_routine() {
    let result: Result<(), BoxError> = unwind::catch((wrap!("outer: {err}"),), || {
        unwind::catch_or_raise((wrap!("inner: {err}"),), || {
            must(Err::<(), _>("deep")).unwind(());
        });
    });

    assert_eq!(result.unwrap_err().to_string(), "outer: inner: deep");
}

#[test]
fn unclaimed_signal_carries_original_error() {
    let payload = panic::catch_unwind(|| {
        must(Err::<(), _>(RangeError { message: "escaped" })).unwind(());
    })
    .unwrap_err();

    let abort = payload.downcast_ref::<Abort>().unwrap();
    assert_eq!(abort.error().downcast_ref::<RangeError>().unwrap().message, "escaped");
}

#[test]
fn foreign_panics_are_resumed_with_original_payload() {
    let payload = panic::catch_unwind(|| {
        let _ = unwind::catch::<(), _, _>((handler(|_| None),), || {
            panic::panic_any(42_u32);
        });
    })
    .unwrap_err();

    assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
}

#[derive(Debug)]
struct Port(u16);

#[test]
fn check_unwind_carries_values_without_default() {
    let port = unwind::catch_with((), || Port(0), || Port(must2("8080".parse::<u16>()).check_unwind()));
    assert_eq!(port.unwrap().0, 8080);

    let err = unwind::catch_with((), || Port(0), || Port(must2("x".parse::<u16>()).check_unwind()));
    assert_eq!(err.unwrap_err().to_string(), "invalid digit found in string");
}

#[test]
fn unwind_or_else_and_catch_with_use_their_fallbacks() {
    let port = unwind::catch_with(
        (),
        || Port(1),
        || Port(must2("x".parse::<u16>()).unwind_or_else(|| 80, (handler(|_| None),))),
    );
    assert_eq!(port.unwrap().0, 80);

    let port = unwind::catch_with((handler(|_| None),), || Port(1), || {
        Port(must2("x".parse::<u16>()).check_unwind())
    });
    assert_eq!(port.unwrap().0, 1);
}
