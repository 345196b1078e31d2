//! Collecting Example
//!
//! Validates every field of a form and reports all failures at once instead
//! of stopping at the first one.
//!
//! Run with: `cargo run --example collect_fields`

use catch_rail::prelude::*;
use catch_rail::ErrorReport;

struct Form<'a> {
    name: &'a str,
    email: &'a str,
    age: i32,
}

fn non_empty(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("must not be empty")
    } else {
        Ok(())
    }
}

fn contains_at(value: &str) -> Result<(), &'static str> {
    if value.contains('@') {
        Ok(())
    } else {
        Err("must contain '@'")
    }
}

fn adult(age: i32) -> Result<(), &'static str> {
    if age >= 18 {
        Ok(())
    } else {
        Err("must be at least 18")
    }
}

fn validate(form: &Form<'_>) -> Result<(), BoxError> {
    let mut collector = Collector::new();
    catch((), || {
        must(non_empty(form.name)).handle((wrap!("name: {err}"), collector.collect()))?;
        must(contains_at(form.email)).handle((wrap!("email: {err}"), collector.collect()))?;
        must(adult(form.age)).handle((wrap!("age: {err}"), collector.collect()))?;
        Ok(())
    })?;

    match collector.err() {
        Some(joined) => Err(joined.into()),
        None => Ok(()),
    }
}

fn main() {
    let forms = [
        Form { name: "alice", email: "alice@example.com", age: 30 },
        Form { name: "", email: "bob.example.com", age: 12 },
    ];

    for form in &forms {
        match validate(form) {
            Ok(()) => println!("{:?}: ok", form.name),
            Err(err) => println!("{:?}:\n{:#}", form.name, ErrorReport::new(&*err)),
        }
    }
}
