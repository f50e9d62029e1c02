use crate::api::{ApiError, LeaveBalance};

pub const LOW_BALANCE_THRESHOLD: u32 = 5;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

pub fn is_low_balance(balance: &LeaveBalance) -> bool {
    balance.remaining_leaves < LOW_BALANCE_THRESHOLD
}

/// Share of the allowance already used, 0..=100. A zero allowance reads as 0.
pub fn usage_percent(balance: &LeaveBalance) -> u32 {
    if balance.total_leaves == 0 {
        return 0;
    }
    let used = u64::from(balance.used_leaves.min(balance.total_leaves));
    ((used * 100) / u64::from(balance.total_leaves)) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageTone {
    Normal,
    Warning,
    Critical,
}

impl UsageTone {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p > 80 => UsageTone::Critical,
            p if p > 60 => UsageTone::Warning,
            _ => UsageTone::Normal,
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            UsageTone::Normal => "bg-blue-500",
            UsageTone::Warning => "bg-amber-500",
            UsageTone::Critical => "bg-red-500",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(total: u32, used: u32, remaining: u32) -> LeaveBalance {
        LeaveBalance {
            total_leaves: total,
            used_leaves: used,
            remaining_leaves: remaining,
        }
    }

    #[test]
    fn message_state_keeps_one_message_at_a_time() {
        let mut state = MessageState::default();
        state.set_success("done");
        assert_eq!(state.success.as_deref(), Some("done"));
        state.set_error(ApiError::unknown("nope"));
        assert!(state.success.is_none());
        assert_eq!(state.error.as_ref().map(|e| e.error.as_str()), Some("nope"));
        state.clear();
        assert_eq!(state, MessageState::default());
    }

    #[test]
    fn low_balance_below_five_days() {
        assert!(is_low_balance(&balance(20, 16, 4)));
        assert!(!is_low_balance(&balance(20, 15, 5)));
        assert!(is_low_balance(&balance(0, 0, 0)));
    }

    #[test]
    fn usage_percent_handles_zero_allowance() {
        assert_eq!(usage_percent(&balance(20, 16, 4)), 80);
        assert_eq!(usage_percent(&balance(0, 0, 0)), 0);
        assert_eq!(usage_percent(&balance(10, 12, 0)), 100);
    }

    #[test]
    fn usage_tone_thresholds() {
        assert_eq!(UsageTone::from_percent(60), UsageTone::Normal);
        assert_eq!(UsageTone::from_percent(61), UsageTone::Warning);
        assert_eq!(UsageTone::from_percent(80), UsageTone::Warning);
        assert_eq!(UsageTone::from_percent(81), UsageTone::Critical);
    }
}
