//! Client-side prediction of the leave service's auto-approval deadline.
//!
//! A pending request is auto-approved by the service once
//! [`AUTO_APPROVE_WINDOW_SECS`] have passed since it was created. Each
//! pending request gets one [`PendingDeadlineTimer`], anchored the first time
//! the page observes the request. Remaining time is always recomputed from
//! `(anchor, now)`; nothing accumulates between ticks, so a throttled or
//! suspended tab catches up on the next tick instead of drifting.
//!
//! Expiry is only a prediction. The timer emits one signal and the page
//! re-fetches; the status shown comes from the service.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

use crate::api::LeaveRequest;

pub const AUTO_APPROVE_WINDOW_SECS: i64 = 5 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("created_at is missing")]
    Missing,
    #[error("created_at {0:?} is not a recognised timestamp")]
    Unparseable(String),
}

/// Parses an upstream creation timestamp. Offset-less values are read as UTC;
/// bare numbers are epoch milliseconds.
pub fn parse_created_at(raw: Option<&str>) -> Result<DateTime<Utc>, AnchorError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(AnchorError::Missing)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(millis) = raw.parse::<f64>() {
        return epoch_millis(millis).ok_or_else(|| AnchorError::Unparseable(raw.to_string()));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AnchorError::Unparseable(raw.to_string()))
}

fn epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSource {
    CreatedAt,
    /// `created_at` was missing or unparseable; the request is treated as
    /// created at the moment the page first saw it.
    ObservedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlinePhase {
    Counting,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineTick {
    pub remaining_secs: i64,
    pub phase: DeadlinePhase,
    /// True only on the tick that first crossed the deadline.
    pub fired: bool,
}

impl DeadlineTick {
    pub fn is_expired(&self) -> bool {
        self.phase == DeadlinePhase::Expired
    }

    pub fn countdown_label(&self) -> String {
        format_countdown(self.remaining_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeadlineTimer {
    anchor: DateTime<Utc>,
    source: AnchorSource,
    fired: bool,
}

impl PendingDeadlineTimer {
    pub fn observe(created_at: Option<&str>, now: DateTime<Utc>) -> Self {
        match parse_created_at(created_at) {
            Ok(anchor) => Self {
                anchor,
                source: AnchorSource::CreatedAt,
                fired: false,
            },
            Err(err) => {
                log::warn!("Anchoring auto-approval countdown at first observation: {}", err);
                Self {
                    anchor: now,
                    source: AnchorSource::ObservedAt,
                    fired: false,
                }
            }
        }
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn source(&self) -> AnchorSource {
        self.source
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn remaining_secs(&self, now: DateTime<Utc>) -> i64 {
        let elapsed = (now - self.anchor).num_milliseconds().div_euclid(1000);
        (AUTO_APPROVE_WINDOW_SECS - elapsed).max(0)
    }

    /// Read-only view for rendering; never trips the latch.
    pub fn peek(&self, now: DateTime<Utc>) -> DeadlineTick {
        let remaining_secs = if self.fired { 0 } else { self.remaining_secs(now) };
        DeadlineTick {
            remaining_secs,
            phase: if remaining_secs <= 0 {
                DeadlinePhase::Expired
            } else {
                DeadlinePhase::Counting
            },
            fired: false,
        }
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> DeadlineTick {
        let mut tick = self.peek(now);
        if tick.is_expired() && !self.fired {
            self.fired = true;
            tick.fired = true;
        }
        tick
    }
}

/// Timers keyed by request id, owned by the leave page for its lifetime.
#[derive(Debug, Default)]
pub struct DeadlineTimers {
    timers: HashMap<String, PendingDeadlineTimer>,
}

impl DeadlineTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors a timer for a pending request the first time it is seen and
    /// ticks it. Re-observing an id keeps its original anchor.
    pub fn observe(&mut self, request: &LeaveRequest, now: DateTime<Utc>) -> Option<DeadlineTick> {
        if !request.is_pending() {
            return None;
        }
        let timer = self
            .timers
            .entry(request.id.clone())
            .or_insert_with(|| PendingDeadlineTimer::observe(request.created_at.as_deref(), now));
        Some(timer.tick(now))
    }

    /// Adopts a freshly fetched list: observes every pending request, drops
    /// timers whose request is gone or settled, and returns the ids whose
    /// deadline fired during this observation.
    pub fn sync(&mut self, requests: &[LeaveRequest], now: DateTime<Utc>) -> Vec<String> {
        let before = self.timers.len();
        self.timers
            .retain(|id, _| requests.iter().any(|r| r.is_pending() && r.id == *id));
        let retired = before - self.timers.len();
        if retired > 0 {
            log::debug!("Retired {} deadline timer(s)", retired);
        }
        requests
            .iter()
            .filter_map(|request| {
                self.observe(request, now)
                    .filter(|tick| tick.fired)
                    .map(|_| request.id.clone())
            })
            .collect()
    }

    pub fn tick(&mut self, id: &str, now: DateTime<Utc>) -> Option<DeadlineTick> {
        self.timers.get_mut(id).map(|timer| timer.tick(now))
    }

    pub fn peek(&self, id: &str, now: DateTime<Utc>) -> Option<DeadlineTick> {
        self.timers.get(id).map(|timer| timer.peek(now))
    }

    pub fn get(&self, id: &str) -> Option<&PendingDeadlineTimer> {
        self.timers.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.timers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

/// `m:ss`, clamped at zero.
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
