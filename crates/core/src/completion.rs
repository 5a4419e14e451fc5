//! Completion observers
//!
//! Every operation is a single future. Callers that also want a callback can
//! attach an observer: it sees the same output the awaiting caller receives,
//! exactly once, just before the future resolves.

use std::future::Future;

use futures::future::{FutureExt, Inspect};

/// Extension trait attaching a completion observer to any future
pub trait CompletionExt: Future + Sized {
    /// Invoke `observer` with a reference to the output when the future
    /// completes.
    fn on_complete<F>(self, observer: F) -> Inspect<Self, F>
    where
        F: FnOnce(&Self::Output),
    {
        self.inspect(observer)
    }
}

impl<Fut: Future> CompletionExt for Fut {}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[tokio::test]
    async fn observer_sees_the_awaited_result() {
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);

        let result: Result<u32, String> = async { Ok(7) }
            .on_complete(move |out: &Result<u32, String>| {
                *seen_clone.lock().unwrap() = Some(out.clone());
            })
            .await;

        assert_eq!(result, Ok(7));
        assert_eq!(*seen.lock().unwrap(), Some(Ok(7)));
    }

    #[tokio::test]
    async fn observer_also_sees_errors() {
        let calls = Arc::new(Mutex::new(0));
        let calls_clone = Arc::clone(&calls);

        let result: Result<u32, String> = async { Err("boom".to_string()) }
            .on_complete(move |out: &Result<u32, String>| {
                assert!(out.is_err());
                *calls_clone.lock().unwrap() += 1;
            })
            .await;

        assert!(result.is_err());
        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
