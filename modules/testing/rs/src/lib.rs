//! Check harness comparing a range against an expected sequence.
//!
//! Failures are collected as [`eyre::Report`]s carrying every mismatch found, and logged through
//! the `log` facade as they are recorded.

use std::fmt::{Debug, Display};
use std::panic::Location;

use eyre::{eyre, Report, Result};
use itertools::{EitherOrBoth, Itertools};

use seqview_core_rs::{Position, Range};

type Item<R> = <<R as Range>::Position as Position>::Item;

/// Compare the elements of `actual` against `expected`, in order.
///
/// Every pairwise mismatch is recorded. The walk stops as soon as either side is exhausted; if the
/// other side still has elements, that is recorded as a length mismatch.
pub fn check_equal<R, E>(actual: &R, expected: E) -> Result<()>
where
    R: Range + ?Sized,
    E: IntoIterator,
    E::Item: Debug,
    Item<R>: PartialEq<E::Item> + Debug,
{
    let mut mismatches = Vec::new();
    for (index, pair) in seqview_core_rs::iter(actual)
        .zip_longest(expected)
        .enumerate()
    {
        match pair {
            EitherOrBoth::Both(got, want) => {
                if got != want {
                    mismatches.push(format!("[{index}]: {got:?} != {want:?}"));
                }
            }
            EitherOrBoth::Left(extra) => {
                mismatches.push(format!(
                    "[{index}]: range is longer than expected, next element is {extra:?}"
                ));
                break;
            }
            EitherOrBoth::Right(missing) => {
                mismatches.push(format!(
                    "[{index}]: range ended early, expected {missing:?}"
                ));
                break;
            }
        }
    }

    match mismatches.is_empty() {
        true => Ok(()),
        false => Err(eyre!(
            "{} mismatch(es):\n  {}",
            mismatches.len(),
            mismatches.join("\n  ")
        )),
    }
}

/// Accumulates the outcome of several checks and reports them together.
#[derive(Debug, Default)]
pub struct Checker {
    checks: usize,
    failures: Vec<Report>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure described by `what` unless `condition` holds.
    #[track_caller]
    pub fn check(&mut self, condition: bool, what: impl Display) -> &mut Self {
        self.checks += 1;
        if !condition {
            let failure = eyre!("{}: check failed: {what}", Location::caller());
            self.record(failure);
        }
        self
    }

    /// Record the mismatches of [`check_equal`], if any.
    #[track_caller]
    pub fn check_equal<R, E>(&mut self, actual: &R, expected: E) -> &mut Self
    where
        R: Range + ?Sized,
        E: IntoIterator,
        E::Item: Debug,
        Item<R>: PartialEq<E::Item> + Debug,
    {
        self.checks += 1;
        if let Err(report) = check_equal(actual, expected) {
            let location = Location::caller();
            self.record(report.wrap_err(format!("{location}: range differs from expected")));
        }
        self
    }

    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn failures(&self) -> &[Report] {
        &self.failures
    }

    /// `Ok` when every recorded check passed, otherwise a report listing all failures.
    pub fn finish(self) -> Result<()> {
        log::debug!(
            "{} of {} checks failed",
            self.failures.len(),
            self.checks
        );
        if self.failures.is_empty() {
            return Ok(());
        }
        Err(eyre!(
            "{} of {} checks failed:\n{}",
            self.failures.len(),
            self.checks,
            self.failures.iter().map(|x| format!("{x:?}")).join("\n")
        ))
    }

    fn record(&mut self, failure: Report) {
        log::error!("{failure:?}");
        self.failures.push(failure);
    }
}

/// Panics with the mismatch report unless the range yields exactly the expected elements.
#[macro_export]
macro_rules! assert_range_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        if let Err(report) = $crate::check_equal(&$actual, $expected) {
            panic!(
                "assertion `{} == {}` failed: {:?}",
                stringify!($actual),
                stringify!($expected),
                report
            );
        }
    };
}
