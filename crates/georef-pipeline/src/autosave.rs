//! Background-save scheduling.
//!
//! A component that owns modifiable state implements the [`Autosave`]
//! capability and raises its save-needed flag whenever state changes (and
//! lowers it when a normal save completes). An [`AutosaveScheduler`] composed
//! with the component decides *when* to call [`Autosave::perform_save`],
//! driven by external clock ticks, and retries transient failures after a
//! short delay.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Result of a single save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveOutcome {
    /// Saving succeeded.
    Success,
    /// Saving failed for some persistent reason (e.g. lack of disk space).
    PermanentFailure,
    /// Saving failed for some transient reason (e.g. mid-edit) and shall be
    /// retried soon.
    TemporaryFailure,
}

/// Capability implemented by components whose state can be saved in the
/// background.
///
/// The save-needed flag is owned by the implementing component: it is raised
/// whenever state changes and lowered when a normal (user-triggered) save
/// terminates the need for background saving.
pub trait Autosave {
    /// Perform a background save, if possible.
    fn perform_save(&mut self) -> SaveOutcome;

    /// True if the component has unsaved changes.
    fn is_save_needed(&self) -> bool;

    /// Raise or lower the save-needed flag.
    fn set_save_needed(&mut self, needed: bool);
}

/// Timing configuration for background saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Regular interval between save attempts.
    pub interval: Duration,
    /// Delay before retrying after a temporary failure.
    pub retry_delay: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5 * 60),
            retry_delay: Duration::from_secs(5),
        }
    }
}

/// Tick-driven scheduler for background saves.
///
/// Holds only scheduling state; the component being saved is passed into
/// every [`tick`](Self::tick). Call `tick` from a timer or event loop with
/// the current unix time in seconds:
///
/// - while the target does not need saving, the scheduler idles;
/// - once saving is needed, the first attempt is scheduled one full interval
///   out;
/// - when an attempt is due, [`Autosave::perform_save`] runs. Success and
///   permanent failure schedule the next attempt after the regular interval;
///   temporary failure retries after the short delay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutosaveScheduler {
    config: AutosaveConfig,
    next_attempt: Option<u64>,
    last_outcome: Option<SaveOutcome>,
}

impl AutosaveScheduler {
    /// Scheduler with the given timing configuration.
    pub fn new(config: AutosaveConfig) -> Self {
        Self {
            config,
            next_attempt: None,
            last_outcome: None,
        }
    }

    /// Unix time (seconds) of the pending save attempt, if one is scheduled.
    pub fn next_attempt(&self) -> Option<u64> {
        self.next_attempt
    }

    /// Outcome of the most recent save attempt, if any.
    pub fn last_outcome(&self) -> Option<SaveOutcome> {
        self.last_outcome
    }

    /// Advance the scheduler to time `now` (unix seconds).
    ///
    /// Returns the outcome of a save attempt performed during this tick, or
    /// `None` if no attempt was due.
    pub fn tick<S: Autosave>(&mut self, target: &mut S, now: u64) -> Option<SaveOutcome> {
        if !target.is_save_needed() {
            self.next_attempt = None;
            return None;
        }

        match self.next_attempt {
            None => {
                let at = now + self.config.interval.as_secs();
                debug!("autosave needed, first attempt scheduled at {at}");
                self.next_attempt = Some(at);
                None
            }
            Some(at) if now < at => None,
            Some(_) => {
                let outcome = target.perform_save();
                self.last_outcome = Some(outcome);
                let delay = match outcome {
                    SaveOutcome::Success | SaveOutcome::PermanentFailure => self.config.interval,
                    SaveOutcome::TemporaryFailure => self.config.retry_delay,
                };
                self.next_attempt = Some(now + delay.as_secs());
                debug!("autosave attempt finished with {outcome:?}, next at {:?}", self.next_attempt);
                Some(outcome)
            }
        }
    }
}

/// Current unix time in seconds.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
