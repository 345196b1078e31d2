use std::cell::RefCell;

use catch_rail::{handler, resolve, BoxError, Handler, HandlerChain};

fn boxed(msg: &str) -> BoxError {
    msg.to_string().into()
}

#[test]
fn empty_chain_returns_input_unchanged() {
    let out = resolve((), boxed("untouched")).unwrap();
    assert_eq!(out.to_string(), "untouched");
}

#[test]
fn chain_runs_left_to_right_feeding_each_output_forward() {
    let seen = RefCell::new(Vec::new());
    let log = &seen;
    let step = move |name: &'static str| {
        handler(move |err: BoxError| {
            log.borrow_mut().push(format!("{name} <- {err}"));
            Some(boxed(name))
        })
    };

    let out = resolve((step("h1"), step("h2"), step("h3")), boxed("start")).unwrap();

    assert_eq!(out.to_string(), "h3");
    assert_eq!(*seen.borrow(), vec!["h1 <- start", "h2 <- h1", "h3 <- h2"]);
}

#[test]
fn chain_stops_at_first_resolving_handler() {
    let second_calls = RefCell::new(0);

    let out = resolve(
        (
            handler(|_| None),
            handler(|err| {
                *second_calls.borrow_mut() += 1;
                Some(err)
            }),
        ),
        boxed("boom"),
    );

    assert!(out.is_none());
    assert_eq!(*second_calls.borrow(), 0);
}

#[test]
fn array_and_vec_chains_follow_the_same_rule() {
    let calls = RefCell::new(0);
    let counter = &calls;
    let count = move || {
        handler(move |err| {
            *counter.borrow_mut() += 1;
            Some(err)
        })
    };

    assert!([count(), count()].resolve(boxed("x")).is_some());
    assert_eq!(*calls.borrow(), 2);

    let chain: Vec<Box<dyn FnMut(BoxError) -> Option<BoxError>>> =
        vec![Box::new(|_: BoxError| None), Box::new(|err: BoxError| Some(err))];
    assert!(chain.resolve(boxed("x")).is_none());
}

#[test]
fn handler_trait_is_implemented_for_closures() {
    let mut upper = handler(|err: BoxError| Some(boxed(&err.to_string().to_uppercase())));
    let out = upper.handle(boxed("quiet")).unwrap();
    assert_eq!(out.to_string(), "QUIET");
}

#[test]
fn eight_handler_tuple_runs_every_handler() {
    let calls = RefCell::new(0);
    let counter = &calls;
    let count = move || {
        handler(move |err| {
            *counter.borrow_mut() += 1;
            Some(err)
        })
    };

    let out = resolve(
        (count(), count(), count(), count(), count(), count(), count(), count()),
        boxed("deep"),
    );

    assert_eq!(out.unwrap().to_string(), "deep");
    assert_eq!(*calls.borrow(), 8);
}
