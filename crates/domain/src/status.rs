//! Arming and alarm statuses.

use serde::{Deserialize, Serialize};

/// Whether the system is monitoring, set by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmingStatus {
    #[default]
    Disarmed,
    ArmedHome,
    ArmedAway,
}

impl ArmingStatus {
    /// Whether alarm rules react to sensor activity in this status.
    #[must_use]
    pub fn is_armed(self) -> bool {
        !matches!(self, Self::Disarmed)
    }
}

impl std::fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disarmed => f.write_str("disarmed"),
            Self::ArmedHome => f.write_str("armed_home"),
            Self::ArmedAway => f.write_str("armed_away"),
        }
    }
}

/// The derived security state.
///
/// Variants are declared in increasing severity, so the derived ordering
/// reads as `NoAlarm < PendingAlarm < Alarm`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    #[default]
    NoAlarm,
    PendingAlarm,
    Alarm,
}

impl std::fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAlarm => f.write_str("no_alarm"),
            Self::PendingAlarm => f.write_str("pending_alarm"),
            Self::Alarm => f.write_str("alarm"),
        }
    }
}
