//! Async Tasks Example
//!
//! Each spawned task installs its own recovery routine; a failure in one task
//! never reaches another.
//!
//! Run with: `cargo run --example async_tasks --features async`

use std::time::Duration;

use catch_rail::prelude_async::*;

async fn fetch(id: u64) -> Result<String, &'static str> {
    tokio::time::sleep(Duration::from_millis(10 * id)).await;
    if id % 2 == 0 {
        Err("upstream timed out")
    } else {
        Ok(format!("payload-{id}"))
    }
}

async fn job(id: u64) -> Result<String, BoxError> {
    async move {
        let payload = must2(fetch(id).await).handle((wrap!("job {}: {err}", id),))?;
        Ok::<_, Abort>(payload.to_uppercase())
    }
    .catch(())
    .await
}

#[tokio::main]
async fn main() {
    let handles: Vec<_> = (1..=4).map(|id| tokio::spawn(job(id))).collect();

    for handle in handles {
        match handle.await {
            Ok(Ok(payload)) => println!("ok: {payload}"),
            Ok(Err(err)) => println!("failed: {err}"),
            Err(join) => println!("task panicked: {join}"),
        }
    }
}
