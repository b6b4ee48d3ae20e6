//! Validation driver - boundary sweeps over constrained arguments
//!
//! [`Validator`] takes a target and a positional argument list in which some
//! positions are [`Descriptor`]s and the others are fixed literals, and runs:
//!
//! 1. a **baseline** call with every descriptor replaced by its good value;
//!    if that call fails, the target is broken at its nominal input and the
//!    run stops with [`BASELINE_FAILURE_PREFIX`] in front of the report;
//! 2. a **sweep** over each descriptor in declaration order, substituting its
//!    success values and then its failure values while every other position
//!    keeps its good value;
//! 3. a final verdict: any recorded mismatch becomes an
//!    [`Error::AssertionFailed`] carrying the rendered report.
//!
//! Literal arguments are passed unchanged to every call.

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, log, warn, Level};

use crate::descriptor::{
    Blank, Boundaries, Descriptor, InList, Max, Min, Negative, NonBlank, NotInList, Pattern,
    Positive, Range,
};
use crate::error::{Error, Result};
use crate::probe::{probe, Outcome};
use crate::report::ValidationReport;
use crate::value::{Number, Value};

/// First line of the failure message when the baseline call fails
pub const BASELINE_FAILURE_PREFIX: &str =
    "This method appears to have at least a big validation error, try to fix it:";

/// One positional argument of a validation run
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Passed unchanged to every call
    Literal(Value),
    /// Swept across the descriptor's boundary values
    Constraint(Descriptor),
}

impl Arg {
    pub fn good_value(&self) -> Result<Value> {
        match self {
            Arg::Literal(value) => Ok(value.clone()),
            Arg::Constraint(descriptor) => descriptor.good_value(),
        }
    }

    pub fn descriptor(&self) -> Option<&Descriptor> {
        match self {
            Arg::Constraint(descriptor) => Some(descriptor),
            Arg::Literal(_) => None,
        }
    }
}

impl From<Descriptor> for Arg {
    fn from(descriptor: Descriptor) -> Self {
        Arg::Constraint(descriptor)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Literal(value)
    }
}

macro_rules! impl_from_for_arg {
    (constraint: $($descriptor:ty),*; literal: $($literal:ty),*) => {
        $(
            impl From<$descriptor> for Arg {
                fn from(d: $descriptor) -> Self {
                    Arg::Constraint(d.into())
                }
            }
        )*
        $(
            impl From<$literal> for Arg {
                fn from(v: $literal) -> Self {
                    Arg::Literal(v.into())
                }
            }
        )*
    };
}

impl_from_for_arg!(
    constraint: Min, Max, Positive, Negative, Range, InList, NotInList, Blank, NonBlank, Pattern;
    literal: Number, i64, i32, u32, f64, f32, bool, &str, String
);

/// Configuration for a [`Validator`]
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Log every probe at `info` instead of `trace`
    pub verbose: bool,

    /// Stop sweeping at the first mismatch instead of collecting all of them
    pub fail_fast: bool,
}

/// Statistics about the most recent validation run
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    /// Calls made to the target, baseline included
    pub probes_run: u32,

    /// Sweep calls that were expected to succeed
    pub success_probes: u32,

    /// Sweep calls that were expected to fail
    pub failure_probes: u32,

    pub unexpected_successes: u32,

    pub unexpected_failures: u32,

    /// Whether the all-good-values call succeeded
    pub baseline_passed: bool,

    pub total_runtime: Duration,
}

/// Runs boundary sweeps and keeps statistics about the last run
#[derive(Debug, Default)]
pub struct Validator {
    pub config: ValidationConfig,
    stats: ValidationStats,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            stats: ValidationStats::default(),
        }
    }

    pub fn stats(&self) -> &ValidationStats {
        &self.stats
    }

    /// Validate `target` against `args`, see the module documentation for the algorithm
    pub fn validate<F, R, E>(&mut self, target: F, args: &[Arg]) -> Result<()>
    where
        F: Fn(&[Value]) -> std::result::Result<R, E>,
        E: fmt::Display,
    {
        let start = Instant::now();
        self.stats = ValidationStats::default();

        let result = self.run(&target, args);

        self.stats.total_runtime = start.elapsed();
        debug!(
            "validation finished: {} probes, {} unexpected successes, {} unexpected failures in {:?}",
            self.stats.probes_run,
            self.stats.unexpected_successes,
            self.stats.unexpected_failures,
            self.stats.total_runtime
        );
        result
    }

    fn run<F, R, E>(&mut self, target: &F, args: &[Arg]) -> Result<()>
    where
        F: Fn(&[Value]) -> std::result::Result<R, E>,
        E: fmt::Display,
    {
        let good = args
            .iter()
            .map(Arg::good_value)
            .collect::<Result<Vec<Value>>>()?;
        debug!(
            "validating {} argument(s), {} constrained",
            args.len(),
            args.iter().filter(|arg| arg.descriptor().is_some()).count()
        );

        let mut baseline = ValidationReport::new();
        self.expect_success(&mut baseline, target, &good);
        if baseline.has_failure() {
            warn!("baseline call failed for good values ({})", join(&good));
            return Err(Error::assertion(format!(
                "{}\n{}",
                BASELINE_FAILURE_PREFIX, baseline
            )));
        }
        self.stats.baseline_passed = true;

        let mut report = ValidationReport::new();
        'sweep: for (index, arg) in args.iter().enumerate() {
            let descriptor = match arg.descriptor() {
                Some(descriptor) => descriptor,
                None => continue,
            };
            debug!("sweeping argument {} with {}", index, descriptor.name());

            for value in descriptor.success_values() {
                self.stats.success_probes += 1;
                self.expect_success(&mut report, target, &substitute(&good, index, value));
                if self.config.fail_fast && report.has_failure() {
                    break 'sweep;
                }
            }
            for value in descriptor.failure_values() {
                self.stats.failure_probes += 1;
                self.expect_failure(&mut report, target, &substitute(&good, index, value));
                if self.config.fail_fast && report.has_failure() {
                    break 'sweep;
                }
            }
        }

        if report.has_failure() {
            return Err(Error::assertion(report.to_string()));
        }
        Ok(())
    }

    fn expect_success<F, R, E>(&mut self, report: &mut ValidationReport, target: &F, args: &[Value])
    where
        F: Fn(&[Value]) -> std::result::Result<R, E>,
        E: fmt::Display,
    {
        if let Outcome::Raised(raised) = self.call(target, args) {
            self.stats.unexpected_failures += 1;
            report.record_unexpected_failure(raised.message, args);
        }
    }

    fn expect_failure<F, R, E>(&mut self, report: &mut ValidationReport, target: &F, args: &[Value])
    where
        F: Fn(&[Value]) -> std::result::Result<R, E>,
        E: fmt::Display,
    {
        if !self.call(target, args).is_raised() {
            self.stats.unexpected_successes += 1;
            report.record_unexpected_success(args);
        }
    }

    fn call<F, R, E>(&mut self, target: &F, args: &[Value]) -> Outcome
    where
        F: Fn(&[Value]) -> std::result::Result<R, E>,
        E: fmt::Display,
    {
        self.stats.probes_run += 1;
        let outcome = probe(target, args);
        let level = if self.config.verbose {
            Level::Info
        } else {
            Level::Trace
        };
        log!(level, "probe ({}) -> {:?}", join(args), outcome);
        outcome
    }
}

/// Copy of the good values with one position replaced
fn substitute(good: &[Value], index: usize, value: Value) -> Vec<Value> {
    let mut args = good.to_vec();
    args[index] = value;
    args
}

fn join(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run a boundary sweep with the default configuration
pub fn assert_validation<F, R, E>(target: F, args: &[Arg]) -> Result<()>
where
    F: Fn(&[Value]) -> std::result::Result<R, E>,
    E: fmt::Display,
{
    Validator::default().validate(target, args)
}
