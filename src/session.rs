use std::time::{Duration, Instant};

use serde_json::Value;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::model::AuthSession;
use crate::token;

mod loader;
pub use self::loader::{LoadOutcome, LoadRequest, ProviderCommand, ProviderEvent, ProviderWorker};

/// How long before `exp` the forced refresh fires.
pub const REFRESH_LEAD: Duration = Duration::from_secs(30);

pub fn now_unix_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Delay until the pre-expiry refresh, or `None` when it is already too late.
pub fn refresh_delay(exp: i64, now_ms: i64) -> Option<Duration> {
    let ms = exp
        .saturating_mul(1000)
        .saturating_sub(now_ms)
        .saturating_sub(REFRESH_LEAD.as_millis() as i64);
    (ms > 0).then(|| Duration::from_millis(ms as u64))
}

/// A pending one-shot forced refresh. Owned by the panel; dropping or
/// replacing it cancels it.
#[derive(Debug)]
pub struct ScheduledRefresh {
    exp: i64,
    due_at: Instant,
}

impl ScheduledRefresh {
    pub fn schedule(exp: i64, now_ms: i64, clock: Instant) -> Option<Self> {
        let delay = refresh_delay(exp, now_ms)?;
        tracing::debug!(exp, delay_ms = delay.as_millis() as u64, "scheduled session refresh");
        Some(Self {
            exp,
            due_at: clock + delay,
        })
    }

    pub fn exp(&self) -> i64 {
        self.exp
    }

    pub fn due_at(&self) -> Instant {
        self.due_at
    }

    pub fn is_due(&self, clock: Instant) -> bool {
        clock >= self.due_at
    }

    pub fn cancel(self) {
        tracing::debug!(exp = self.exp, "cancelled session refresh");
    }
}

/// Token pair, decoded claims, and auto-refresh state for the signed-in user.
#[derive(Debug, Default)]
pub struct SessionPanel {
    access_token: Option<String>,
    id_token: Option<String>,
    access_claims: Option<Value>,
    id_claims: Option<Value>,
    loading: bool,
    last_error: Option<String>,

    refresh: Option<ScheduledRefresh>,
    // `exp` the current schedule was computed from.
    tracked_exp: Option<i64>,

    issued: u64,
    // Loads at or below this seq were issued before the last `clear`.
    cleared_through: u64,
}

impl SessionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self, force: bool) -> LoadRequest {
        self.issued += 1;
        self.loading = true;
        LoadRequest {
            seq: self.issued,
            force,
        }
    }

    /// Results are applied in arrival order, even when a newer load is
    /// still in flight. Results issued before the last `clear` are dropped;
    /// returns whether the outcome was applied.
    pub fn apply(&mut self, outcome: LoadOutcome, now_ms: i64, clock: Instant) -> bool {
        if outcome.seq <= self.cleared_through {
            tracing::debug!(seq = outcome.seq, "dropping session result from before sign-out");
            return false;
        }
        if outcome.seq < self.issued {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.issued,
                "applying session result from a superseded load"
            );
        }
        self.loading = false;

        match outcome.result {
            Ok(session) => {
                self.last_error = None;
                self.set_session(session);
            }
            Err(err) => {
                let msg = format!("{:#}", err);
                tracing::warn!(force = outcome.force, error = %msg, "session fetch failed");
                self.last_error = Some(msg);
            }
        }

        self.reschedule(now_ms, clock);
        true
    }

    fn set_session(&mut self, session: AuthSession) {
        let (access, id) = match session.tokens {
            Some(t) => (Some(t.access_token), t.id_token),
            None => (None, None),
        };
        self.access_claims = access.as_deref().and_then(token::claims);
        self.id_claims = id.as_deref().and_then(token::claims);
        self.access_token = access;
        self.id_token = id;
    }

    fn reschedule(&mut self, now_ms: i64, clock: Instant) {
        let exp = self.access_exp();
        if exp == self.tracked_exp {
            return;
        }
        self.tracked_exp = exp;
        if let Some(prev) = self.refresh.take() {
            prev.cancel();
        }
        self.refresh = exp.and_then(|exp| ScheduledRefresh::schedule(exp, now_ms, clock));
    }

    /// Consumes the schedule when its deadline has passed. The caller then
    /// issues a forced load.
    pub fn take_due_refresh(&mut self, clock: Instant) -> bool {
        if self.refresh.as_ref().is_some_and(|r| r.is_due(clock)) {
            self.refresh = None;
            return true;
        }
        false
    }

    /// Sign-out: forget tokens and cancel any pending refresh.
    pub fn clear(&mut self) {
        if let Some(prev) = self.refresh.take() {
            prev.cancel();
        }
        self.tracked_exp = None;
        self.cleared_through = self.issued;
        self.access_token = None;
        self.id_token = None;
        self.access_claims = None;
        self.id_claims = None;
        self.last_error = None;
        self.loading = false;
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    pub fn access_claims(&self) -> Option<&Value> {
        self.access_claims.as_ref()
    }

    pub fn id_claims(&self) -> Option<&Value> {
        self.id_claims.as_ref()
    }

    pub fn access_exp(&self) -> Option<i64> {
        self.access_claims.as_ref().and_then(token::expiry)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn scheduled_refresh(&self) -> Option<&ScheduledRefresh> {
        self.refresh.as_ref()
    }

    pub fn curl_snippet(&self, api_url: &str) -> String {
        self.access_token
            .as_deref()
            .map(|t| curl_snippet(t, api_url))
            .unwrap_or_default()
    }
}

/// Remaining lifetime as `mm:ss`, floored at zero.
pub fn countdown(exp: i64, now_ms: i64) -> String {
    let remain = (exp.saturating_mul(1000).saturating_sub(now_ms)).max(0) / 1000;
    format!("{:02}:{:02}", remain / 60, remain % 60)
}

/// `exp` in the local offset (UTC when the local offset is unknown).
pub fn expires_at_display(exp: i64) -> Option<String> {
    let dt = OffsetDateTime::from_unix_timestamp(exp).ok()?;
    let offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    dt.to_offset(offset)
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
        ))
        .ok()
}

pub fn curl_snippet(access_token: &str, api_url: &str) -> String {
    format!(
        "curl -i \\\n  -H \"Authorization: Bearer {}\" \\\n  \"{}\"",
        access_token, api_url
    )
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
