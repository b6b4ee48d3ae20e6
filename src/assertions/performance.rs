//! Timed execution assertion
//!
//! The target runs on its own thread so a hung call cannot block the test
//! forever. When the deadline passes the worker is left running in the
//! background; the assertion measures elapsed time, it does not preempt.

use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::probe::{probe_once, Outcome};

const WORKER_NAME: &str = "edgewise-assert-performance";

fn bugged(reason: impl fmt::Display) -> Error {
    Error::assertion(format!(
        "This method is bugged, it is impossible to measure the performance: {}",
        reason
    ))
}

/// Fails when `target` takes longer than `timeout` or raises before finishing
///
/// Use generous timeouts: the measurement includes thread start-up and
/// depends on the machine running the tests.
pub fn assert_performance<F, R, E>(timeout: Duration, target: F) -> Result<()>
where
    F: FnOnce() -> std::result::Result<R, E> + Send + 'static,
    E: fmt::Display,
{
    let (sender, receiver) = mpsc::channel();
    let start = Instant::now();

    thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || {
            // the receiver is gone once the deadline has passed
            let _ = sender.send(probe_once(target));
        })
        .map_err(bugged)?;

    match receiver.recv_timeout(timeout) {
        Ok(Outcome::Returned) => {
            debug!("timed call finished in {:?} (limit {:?})", start.elapsed(), timeout);
            Ok(())
        }
        Ok(Outcome::Raised(raised)) => Err(bugged(raised.message)),
        Err(RecvTimeoutError::Timeout) => {
            let elapsed = start.elapsed();
            warn!("timed call still running after {:?} (limit {:?})", elapsed, timeout);
            Err(Error::assertion(format!("This method is too slow: {:?}", elapsed)))
        }
        Err(RecvTimeoutError::Disconnected) => Err(bugged("the timing thread stopped without a result")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sleeps(millis: u64) -> impl FnOnce() -> std::result::Result<(), String> + Send + 'static {
        move || {
            thread::sleep(Duration::from_millis(millis));
            Ok(())
        }
    }

    #[test]
    fn test_fast_call_passes() {
        assert!(assert_performance(Duration::from_millis(1000), || Ok::<_, String>(13)).is_ok());
    }

    #[test]
    fn test_call_within_budget_passes() {
        assert!(assert_performance(Duration::from_millis(200), sleeps(100)).is_ok());
    }

    #[test]
    fn test_slow_call_fails() {
        let err = assert_performance(Duration::from_millis(200), sleeps(400)).unwrap_err();
        assert!(err.is_assertion_failure());
        assert!(err.to_string().starts_with("This method is too slow: "));
    }

    #[test]
    fn test_failing_call_is_bugged() {
        let err = assert_performance(Duration::from_millis(100), || Err::<(), _>("ops")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "This method is bugged, it is impossible to measure the performance: ops"
        );
    }

    fn borrowed_result_type<'a>(_scope: &'a str) -> Result<()> {
        assert_performance(Duration::from_millis(500), || Ok::<Option<&'a str>, String>(None))
    }

    #[test]
    fn test_result_type_may_borrow() {
        let scope = String::from("caller");
        assert!(borrowed_result_type(&scope).is_ok());
    }

    #[test]
    fn test_spawn_failure_is_bugged() {
        let err = bugged(io::Error::new(io::ErrorKind::Other, "no threads left"));
        assert!(err.is_assertion_failure());
        assert_eq!(
            err.to_string(),
            "This method is bugged, it is impossible to measure the performance: no threads left"
        );
    }

    #[test]
    fn test_panicking_call_is_bugged() {
        let err = assert_performance(Duration::from_millis(500), || -> std::result::Result<(), String> {
            panic!("ops")
        })
        .unwrap_err();
        assert!(err.to_string().ends_with(": ops"));
    }
}
