//! Contact-form submission flow: honeypot trap, cooldown gate, and the
//! status state machine. Delivery itself lives in [`crate::mailer`]; this
//! module decides whether a delivery may happen at all.

use crate::storage::KeyValue;

/// Seconds a visitor must wait between successful submissions.
pub const COOLDOWN_SECONDS: u64 = 60;

/// Storage key holding the millisecond epoch of the last successful send.
pub const LAST_SUBMIT_KEY: &str = "lastContactSubmit";

/// Where the form stands after the last submit attempt. No state is
/// terminal; the form is always resubmittable once the cooldown lapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
    RateLimited,
}

impl SubmitStatus {
    /// Editing any field returns a settled status to `Idle`.
    pub fn on_edit(self) -> Self {
        SubmitStatus::Idle
    }
}

/// The three visitor-typed fields. Mutated on every keystroke, cleared
/// only after a confirmed delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

/// What a submit attempt is allowed to do, decided before any network IO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// The hidden honeypot field was filled. Report success, send nothing.
    Trap,
    /// The cooldown window is still running.
    Cooling { remaining_secs: u64 },
    /// Eligible to attempt delivery.
    Clear,
}

/// Submission gate over an injected persistence backend.
///
/// Field presence and shape are enforced by the input layer; the gate only
/// looks at the honeypot and the persisted cooldown timestamp.
pub struct ContactGate<S> {
    store: S,
}

impl<S: KeyValue> ContactGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decide what this attempt may do. `now_ms` is wall-clock epoch
    /// milliseconds; deltas are not corrected for system clock jumps.
    pub fn check(&self, honeypot: &str, now_ms: f64) -> Gate {
        if !honeypot.is_empty() {
            return Gate::Trap;
        }

        let last_ms = match self
            .store
            .get(LAST_SUBMIT_KEY)
            .and_then(|raw| raw.parse::<f64>().ok())
        {
            Some(ms) => ms,
            // No previous submission, or an unreadable value.
            None => return Gate::Clear,
        };

        let elapsed_secs = (now_ms - last_ms) / 1000.0;
        if elapsed_secs < COOLDOWN_SECONDS as f64 {
            Gate::Cooling {
                remaining_secs: (COOLDOWN_SECONDS as f64 - elapsed_secs).ceil() as u64,
            }
        } else {
            Gate::Clear
        }
    }

    /// Record a confirmed delivery, starting the next cooldown window.
    /// Called only on success; failed deliveries leave the previous
    /// timestamp in place.
    pub fn record_success(&self, now_ms: f64) {
        self.store.set(LAST_SUBMIT_KEY, &format!("{}", now_ms as u64));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const T: f64 = 1_700_000_000_000.0;

    fn gate_with_last_submit(last_ms: f64) -> ContactGate<MemoryStore> {
        let store = MemoryStore::default();
        store.set(LAST_SUBMIT_KEY, &format!("{}", last_ms as u64));
        ContactGate::new(store)
    }

    #[test]
    fn filled_honeypot_is_trapped_before_anything_else() {
        // Even a running cooldown loses to the trap.
        let gate = gate_with_last_submit(T);
        assert_eq!(gate.check("https://spam.example", T + 1_000.0), Gate::Trap);
    }

    #[test]
    fn first_submission_is_clear() {
        let gate = ContactGate::new(MemoryStore::default());
        assert_eq!(gate.check("", T), Gate::Clear);
    }

    #[test]
    fn thirty_seconds_in_reports_thirty_remaining() {
        let gate = gate_with_last_submit(T);
        assert_eq!(
            gate.check("", T + 30_000.0),
            Gate::Cooling { remaining_secs: 30 }
        );
    }

    #[test]
    fn cooldown_lapses_after_sixty_seconds() {
        let gate = gate_with_last_submit(T);
        assert_eq!(gate.check("", T + 60_000.0), Gate::Clear);
        assert_eq!(gate.check("", T + 61_000.0), Gate::Clear);
    }

    #[test]
    fn fractional_elapsed_time_rounds_the_remainder_up() {
        let gate = gate_with_last_submit(T);
        assert_eq!(
            gate.check("", T + 30_500.0),
            Gate::Cooling { remaining_secs: 30 }
        );
        assert_eq!(
            gate.check("", T + 59_999.0),
            Gate::Cooling { remaining_secs: 1 }
        );
    }

    #[test]
    fn unreadable_timestamp_degrades_to_clear() {
        let store = MemoryStore::default();
        store.set(LAST_SUBMIT_KEY, "not-a-number");
        let gate = ContactGate::new(store);
        assert_eq!(gate.check("", T), Gate::Clear);
    }

    #[test]
    fn recording_success_starts_a_full_window() {
        let store = MemoryStore::default();
        let gate = ContactGate::new(store);
        gate.record_success(T);
        assert_eq!(
            gate.check("", T),
            Gate::Cooling {
                remaining_secs: COOLDOWN_SECONDS
            }
        );
    }

    #[test]
    fn recorded_timestamp_is_a_string_encoded_millisecond_epoch() {
        let store = MemoryStore::default();
        store.set(LAST_SUBMIT_KEY, "ignored");
        let gate = ContactGate::new(store);
        gate.record_success(T);
        // Readable back through the same seam the next attempt uses.
        assert_eq!(gate.check("", T + 61_000.0), Gate::Clear);
    }

    #[test]
    fn any_settled_status_returns_to_idle_on_edit() {
        assert_eq!(SubmitStatus::Success.on_edit(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Error.on_edit(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::RateLimited.on_edit(), SubmitStatus::Idle);
        assert_eq!(SubmitStatus::Idle.on_edit(), SubmitStatus::Idle);
    }
}
