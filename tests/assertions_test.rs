//! Simple assertions used the way a test suite would use them

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

use edgewise::{
    args, assert_error_message, assert_no_error, assert_not_sorted, assert_performance,
    assert_prototype, assert_singleton, assert_sorted, assert_sorted_with, assert_validation,
    Error, Min, SortOrder, Value,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug)]
struct IllegalArgument(String);

impl fmt::Display for IllegalArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn rejects(message: &str) -> impl FnOnce() -> Result<(), IllegalArgument> + '_ {
    move || Err(IllegalArgument(message.to_string()))
}

#[test]
fn test_no_error_names_the_error_type() {
    init_logging();
    assert_no_error(|| Ok::<_, IllegalArgument>(())).unwrap();

    let err = assert_no_error(rejects("Some msg")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected no error, but got IllegalArgument: Some msg"
    );
}

#[test]
fn test_error_message_with_wildcards() {
    init_logging();
    assert_error_message("some msg: [...]", rejects("some msg: 0.134")).unwrap();
    assert_error_message(
        "some msg: [...] of some method [...]",
        rejects("some msg: 0.134s of some method zzz"),
    )
    .unwrap();

    let err = assert_error_message("some msg2: [...]", rejects("some msg: 0.134")).unwrap_err();
    assert!(err.is_assertion_failure());
    assert_eq!(
        err.to_string(),
        "Expected an error with message 'some msg2: [...]', but received 'some msg: 0.134'"
    );
}

#[test]
fn test_error_message_of_a_failed_validation() {
    init_logging();
    let my_method = |args: &[Value]| -> Result<(), String> {
        match args[0].as_int() {
            Some(n) if n >= 6 => Ok(()),
            _ => Err("too small".to_string()),
        }
    };
    assert_error_message(
        "Unexpected success for the combination of arguments:\n> 6",
        || assert_validation(my_method, &args![Min::new(7)]),
    )
    .unwrap();
}

#[test]
fn test_sorted_lists() {
    assert_sorted(&[1, 2, 3]).unwrap();
    assert_not_sorted(&["b", "a"]).unwrap();

    let err = assert_sorted(&[2, 1, 3]).unwrap_err();
    assert_eq!(err.to_string(), "List is not sorted. Expected list: [1, 2, 3]");

    let descending = SortOrder::natural().reversed();
    assert_sorted_with(&[9, 4, 4, 1], &descending).unwrap();
}

#[test]
fn test_performance_budget() {
    init_logging();
    assert_performance(Duration::from_millis(200), || {
        thread::sleep(Duration::from_millis(100));
        Ok::<_, IllegalArgument>(())
    })
    .unwrap();

    let err = assert_performance(Duration::from_millis(200), || {
        thread::sleep(Duration::from_millis(400));
        Ok::<_, IllegalArgument>(())
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("This method is too slow: "));

    assert_error_message(
        "This method is bugged, it is impossible to measure the performance: [...]",
        || {
            assert_performance(Duration::from_millis(200), || {
                Err::<(), _>(IllegalArgument("broken".to_string()))
            })
        },
    )
    .unwrap();
}

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    retries: u32,
    name: String,
}

fn settings() -> Arc<Settings> {
    static SETTINGS: OnceLock<Arc<Settings>> = OnceLock::new();
    SETTINGS
        .get_or_init(|| {
            Arc::new(Settings {
                retries: 3,
                name: "default".to_string(),
            })
        })
        .clone()
}

#[test]
fn test_singleton_and_prototype() {
    assert_singleton(settings).unwrap();
    assert_prototype(settings().as_ref()).unwrap();

    let err = assert_singleton(|| Arc::new(Settings {
        retries: 0,
        name: String::new(),
    }))
    .unwrap_err();
    assert!(matches!(err, Error::AssertionFailed(_)));
    assert_eq!(err.to_string(), "The type Settings is not a singleton.");
}
