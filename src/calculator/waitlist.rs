//! Early-access waitlist: submission flow and capacity figures.
//!
//! Nothing is stored or sent anywhere. A submission only validates the address,
//! waits out the confirmation delay and logs the outcome.
use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// Spots already taken when the waitlist opened.
pub const CURRENT_WAITLIST: u32 = 8247;

/// Total early-access spots.
pub const WAITLIST_CAPACITY: u32 = 10_000;

/// Capacity figures shown next to the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitlistStats {
    pub current: u32,
    pub capacity: u32,
}

impl WaitlistStats {
    pub fn spots_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.current)
    }

    /// Place in line of the next person to sign up.
    pub fn position_after_signup(&self) -> u32 {
        self.current.saturating_add(1)
    }

    /// Share of spots taken, rounded to a whole percent.
    pub fn percentage_filled(&self) -> u32 {
        if self.capacity == 0 {
            return 100;
        }
        (f64::from(self.current) / f64::from(self.capacity) * 100.0).round() as u32
    }
}

impl Default for WaitlistStats {
    fn default() -> Self {
        WaitlistStats {
            current: CURRENT_WAITLIST,
            capacity: WAITLIST_CAPACITY,
        }
    }
}

/// Where a signup form is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// A single signup form.
#[derive(Debug)]
pub struct Waitlist {
    state: SubmissionState,
    confirmation_delay: Duration,
}

impl Waitlist {
    pub fn new(confirmation_delay: Duration) -> Self {
        Waitlist {
            state: SubmissionState::Idle,
            confirmation_delay,
        }
    }

    pub fn get_state(&self) -> SubmissionState {
        self.state
    }

    /// Submits an email address. A dropped submission leaves the form in
    /// `Submitting`, from which it can be submitted again.
    pub async fn submit(&mut self, email: &str) -> Result<(), WaitlistError> {
        if self.state == SubmissionState::Submitted {
            return Err(WaitlistError::AlreadySubmitted);
        }
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(WaitlistError::InvalidEmail(email.to_string()));
        }

        self.state = SubmissionState::Submitting;
        tokio::time::sleep(self.confirmation_delay).await;
        info!(email, "Waitlist email submitted");
        self.state = SubmissionState::Submitted;
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Errors that can occur while joining the waitlist.
#[derive(Error, Debug, PartialEq)]
pub enum WaitlistError {
    #[error("Not a valid email address: {0:?}")]
    InvalidEmail(String),
    #[error("This form has already been submitted")]
    AlreadySubmitted,
}
