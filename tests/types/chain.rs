use std::io;

use catch_rail::{error_chain, find_cause, Wrapped};

#[test]
fn chain_of_plain_error_has_one_link() {
    let err = io::Error::new(io::ErrorKind::NotFound, "missing");
    assert_eq!(error_chain(&err).count(), 1);
}

#[test]
fn chain_walks_nested_wrappers_outermost_first() {
    let err = Wrapped::new(
        "load: read: missing",
        Wrapped::new("read: missing", io::Error::new(io::ErrorKind::NotFound, "missing")),
    );

    let messages: Vec<String> = error_chain(&err).map(ToString::to_string).collect();
    assert_eq!(messages, ["load: read: missing", "read: missing", "missing"]);

    let io_err = find_cause::<io::Error>(&err).unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn find_cause_returns_none_when_absent() {
    let err = Wrapped::new("ctx: x", "x");
    assert!(find_cause::<io::Error>(&err).is_none());
}
