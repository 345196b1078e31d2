//! Parse Example
//!
//! Parses two fields, wrapping each failure with the field name. The top-level
//! recovery routine logs the final error and exits with status 1.
//!
//! Run with: `cargo run --example parse_ab -- <a> <b>`

use std::process;

use catch_rail::prelude::*;

#[derive(Debug, Default)]
struct A(String);

#[derive(Debug, Default)]
struct B(i32);

#[derive(Debug, Default)]
#[allow(dead_code)]
struct Ab {
    a: A,
    b: B,
}

fn parse_a(s: &str) -> Result<A, &'static str> {
    if s.len() < 3 || s.len() > 10 {
        return Err("length must be in range 3-10");
    }
    Ok(A(s.to_string()))
}

fn parse_b(i: i32) -> Result<B, &'static str> {
    if !(5..100).contains(&i) {
        return Err("must be in range 5-100");
    }
    Ok(B(i))
}

fn parse_ab(a: &str, b: i32) -> Result<Ab, BoxError> {
    catch((), || {
        Ok(Ab {
            a: must2(parse_a(a)).handle((wrap!("a: {err}"),))?,
            b: must2(parse_b(b)).handle((wrap!("b: {err}"),))?,
        })
    })
}

fn log_and_exit(err: BoxError) -> Option<BoxError> {
    eprintln!("error: {err}");
    process::exit(1)
}

fn main() {
    let mut args = std::env::args().skip(1);
    let a = args.next().unwrap_or_else(|| "a".to_string());
    let b = args.next().and_then(|b| b.parse().ok()).unwrap_or(0);

    let outcome = Catch::without_slot().run(|| {
        let ab = must2(parse_ab(&a, b)).handle((log_and_exit,))?;
        println!("AB: {ab:?}");
        Ok(())
    });

    if let Err(abort) = outcome {
        eprintln!("unhandled: {abort}");
        process::exit(2);
    }
}
