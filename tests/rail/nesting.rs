use std::cell::RefCell;

use catch_rail::{catch, catch_or_raise, handler, inspect, must, wrap, Abort, BoxError};

fn inner_resolving(seen: &RefCell<Vec<String>>) -> Result<u8, BoxError> {
    catch(
        (inspect(|e| seen.borrow_mut().push(format!("inner saw {e}"))), handler(|_| None)),
        || {
            must(Err::<(), _>("inner failure")).check()?;
            Ok(1)
        },
    )
}

#[test]
fn inner_routine_absorbs_its_own_signal() {
    let seen = RefCell::new(Vec::new());

    let result: Result<u8, BoxError> = catch(
        (inspect(|e| seen.borrow_mut().push(format!("outer saw {e}"))),),
        || {
            let inner = must2_box(inner_resolving(&seen))?;
            Ok(inner + 10)
        },
    );

    assert_eq!(result.unwrap(), 10);
    assert_eq!(*seen.borrow(), vec!["inner saw inner failure".to_string()]);
}

fn must2_box(result: Result<u8, BoxError>) -> Result<u8, Abort> {
    catch_rail::must2(result).check()
}

#[test]
fn inner_error_returned_through_slot_is_raised_again_by_outer_step() {
    fn inner() -> Result<(), BoxError> {
        catch((wrap!("inner: {err}"),), || {
            must(Err::<(), _>("disk")).check()?;
            Ok(())
        })
    }

    let result: Result<(), BoxError> = catch((wrap!("outer: {err}"),), || {
        must(inner()).handle((wrap!("calling inner: {err}"),))?;
        Ok(())
    });

    assert_eq!(result.unwrap_err().to_string(), "outer: calling inner: inner: disk");
}

#[test]
fn slotless_inner_routine_hands_signal_to_outer() {
    fn inner() -> Result<(), Abort> {
        catch_or_raise((wrap!("inner: {err}"),), || {
            must(Err::<(), _>("net")).check()?;
            Ok(())
        })
    }

    let result: Result<(), BoxError> = catch((wrap!("outer: {err}"),), || {
        inner()?;
        Ok(())
    });

    assert_eq!(result.unwrap_err().to_string(), "outer: inner: net");
}

#[test]
fn outer_routine_does_not_see_signals_claimed_below() {
    let outer_calls = RefCell::new(0);

    fn level(depth: u8) -> Result<u8, BoxError> {
        catch((handler(|_| None),), || {
            if depth > 0 {
                let below = catch_rail::must2(level(depth - 1)).check()?;
                return Ok(below + 1);
            }
            must(Err::<(), _>("bottom")).check()?;
            Ok(100)
        })
    }

    let result: Result<u8, BoxError> = catch(
        (inspect(|_| *outer_calls.borrow_mut() += 1),),
        || catch_rail::must2(level(3)).check(),
    );

    assert_eq!(result.unwrap(), 3);
    assert_eq!(*outer_calls.borrow(), 0);
}
