//! Alarm transition rules.
//!
//! Each function maps the current inputs to the alarm status that must be
//! written, or `None` when no rule fires. They never read or write storage;
//! the security service gathers the inputs from the repository and applies
//! the result.

use crate::status::{AlarmStatus, ArmingStatus};

/// A single sensor update, as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorActivation {
    /// The stored flag before the update.
    pub was_active: bool,
    /// The requested flag.
    pub active: bool,
    /// Whether any sensor in the repository is active after the update.
    pub any_active_after: bool,
}

/// Rule table for a sensor activation or deactivation.
///
/// Evaluated in priority order:
///
/// | Condition | Result |
/// |---|---|
/// | alarm is `Alarm` | none |
/// | armed, activating, `NoAlarm` | `PendingAlarm` |
/// | armed, activating, `PendingAlarm` | `Alarm` |
/// | deactivating an inactive sensor | none |
/// | deactivating, `PendingAlarm`, nothing active after | `NoAlarm` |
/// | anything else | none |
///
/// Activation does not look at `was_active`: activating a sensor that is
/// already active while pending still escalates to `Alarm`.
#[must_use]
pub fn on_sensor_activation(
    arming: ArmingStatus,
    alarm: AlarmStatus,
    activation: SensorActivation,
) -> Option<AlarmStatus> {
    if alarm == AlarmStatus::Alarm {
        return None;
    }

    if activation.active {
        if !arming.is_armed() {
            return None;
        }
        return match alarm {
            AlarmStatus::NoAlarm => Some(AlarmStatus::PendingAlarm),
            AlarmStatus::PendingAlarm => Some(AlarmStatus::Alarm),
            AlarmStatus::Alarm => None,
        };
    }

    if !activation.was_active {
        return None;
    }

    (alarm == AlarmStatus::PendingAlarm && !activation.any_active_after)
        .then_some(AlarmStatus::NoAlarm)
}

/// Rule for a sensor reporting itself inactive.
///
/// The stored flag is not consulted, so a report from a sensor already
/// stored as inactive still clears a pending alarm once nothing is active.
///
/// | Condition | Result |
/// |---|---|
/// | `PendingAlarm`, nothing active after | `NoAlarm` |
/// | anything else | none |
#[must_use]
pub fn on_sensor_reported_inactive(
    alarm: AlarmStatus,
    any_active_after: bool,
) -> Option<AlarmStatus> {
    (alarm == AlarmStatus::PendingAlarm && !any_active_after).then_some(AlarmStatus::NoAlarm)
}

/// Rule table for an image classification result.
///
/// A cat while `ArmedHome` raises `Alarm` whatever the current status. No
/// cat clears the alarm, but only when no sensor is active.
#[must_use]
pub fn on_image_classified(
    arming: ArmingStatus,
    cat_detected: bool,
    any_sensor_active: bool,
) -> Option<AlarmStatus> {
    if cat_detected {
        return (arming == ArmingStatus::ArmedHome).then_some(AlarmStatus::Alarm);
    }
    (!any_sensor_active).then_some(AlarmStatus::NoAlarm)
}

/// Rule table for an arming status change.
///
/// Applied after the sensor reset that arming performs. `cat_detected` is
/// the result of the most recent image classification.
#[must_use]
pub fn on_arming_changed(arming: ArmingStatus, cat_detected: bool) -> Option<AlarmStatus> {
    match arming {
        ArmingStatus::Disarmed => Some(AlarmStatus::NoAlarm),
        ArmingStatus::ArmedHome if cat_detected => Some(AlarmStatus::Alarm),
        ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARMINGS: [ArmingStatus; 3] = [
        ArmingStatus::Disarmed,
        ArmingStatus::ArmedHome,
        ArmingStatus::ArmedAway,
    ];
    const ALARMS: [AlarmStatus; 3] = [
        AlarmStatus::NoAlarm,
        AlarmStatus::PendingAlarm,
        AlarmStatus::Alarm,
    ];

    fn activate(was_active: bool) -> SensorActivation {
        SensorActivation {
            was_active,
            active: true,
            any_active_after: true,
        }
    }

    fn deactivate(was_active: bool, any_active_after: bool) -> SensorActivation {
        SensorActivation {
            was_active,
            active: false,
            any_active_after,
        }
    }

    #[test]
    fn should_go_pending_when_armed_and_sensor_activated_from_no_alarm() {
        for arming in [ArmingStatus::ArmedHome, ArmingStatus::ArmedAway] {
            assert_eq!(
                on_sensor_activation(arming, AlarmStatus::NoAlarm, activate(false)),
                Some(AlarmStatus::PendingAlarm)
            );
        }
    }

    #[test]
    fn should_go_alarm_when_armed_and_sensor_activated_while_pending() {
        for arming in [ArmingStatus::ArmedHome, ArmingStatus::ArmedAway] {
            assert_eq!(
                on_sensor_activation(arming, AlarmStatus::PendingAlarm, activate(false)),
                Some(AlarmStatus::Alarm)
            );
        }
    }

    #[test]
    fn should_go_alarm_when_already_active_sensor_reactivated_while_pending() {
        assert_eq!(
            on_sensor_activation(
                ArmingStatus::ArmedHome,
                AlarmStatus::PendingAlarm,
                activate(true)
            ),
            Some(AlarmStatus::Alarm)
        );
    }

    #[test]
    fn should_ignore_activation_when_disarmed() {
        for alarm in ALARMS {
            assert_eq!(
                on_sensor_activation(ArmingStatus::Disarmed, alarm, activate(false)),
                None
            );
        }
    }

    #[test]
    fn should_go_no_alarm_when_pending_and_last_active_sensor_deactivated() {
        for arming in ARMINGS {
            assert_eq!(
                on_sensor_activation(arming, AlarmStatus::PendingAlarm, deactivate(true, false)),
                Some(AlarmStatus::NoAlarm)
            );
        }
    }

    #[test]
    fn should_stay_pending_when_other_sensors_remain_active() {
        assert_eq!(
            on_sensor_activation(
                ArmingStatus::ArmedAway,
                AlarmStatus::PendingAlarm,
                deactivate(true, true)
            ),
            None
        );
    }

    #[test]
    fn should_never_change_alarm_on_sensor_events() {
        for arming in ARMINGS {
            for was_active in [false, true] {
                for activation in [activate(was_active), deactivate(was_active, false)] {
                    assert_eq!(
                        on_sensor_activation(arming, AlarmStatus::Alarm, activation),
                        None
                    );
                }
            }
        }
    }

    #[test]
    fn should_not_change_when_inactive_sensor_deactivated() {
        for arming in ARMINGS {
            for alarm in ALARMS {
                assert_eq!(
                    on_sensor_activation(arming, alarm, deactivate(false, false)),
                    None
                );
            }
        }
    }

    #[test]
    fn should_go_no_alarm_when_pending_and_report_leaves_nothing_active() {
        assert_eq!(
            on_sensor_reported_inactive(AlarmStatus::PendingAlarm, false),
            Some(AlarmStatus::NoAlarm)
        );
    }

    #[test]
    fn should_ignore_inactivity_report_otherwise() {
        assert_eq!(
            on_sensor_reported_inactive(AlarmStatus::PendingAlarm, true),
            None
        );
        for any_active_after in [false, true] {
            for alarm in [AlarmStatus::NoAlarm, AlarmStatus::Alarm] {
                assert_eq!(on_sensor_reported_inactive(alarm, any_active_after), None);
            }
        }
    }

    #[test]
    fn should_never_lower_severity_on_activation() {
        for arming in ARMINGS {
            for alarm in ALARMS {
                for was_active in [false, true] {
                    if let Some(next) = on_sensor_activation(arming, alarm, activate(was_active)) {
                        assert!(next > alarm);
                    }
                }
            }
        }
    }

    #[test]
    fn should_alarm_when_cat_detected_while_armed_home_regardless_of_status() {
        for any_active in [false, true] {
            assert_eq!(
                on_image_classified(ArmingStatus::ArmedHome, true, any_active),
                Some(AlarmStatus::Alarm)
            );
        }
    }

    #[test]
    fn should_ignore_cat_when_not_armed_home() {
        for arming in [ArmingStatus::Disarmed, ArmingStatus::ArmedAway] {
            assert_eq!(on_image_classified(arming, true, false), None);
        }
    }

    #[test]
    fn should_clear_alarm_when_no_cat_and_no_active_sensor() {
        for arming in ARMINGS {
            assert_eq!(
                on_image_classified(arming, false, false),
                Some(AlarmStatus::NoAlarm)
            );
        }
    }

    #[test]
    fn should_keep_status_when_no_cat_but_sensor_active() {
        for arming in ARMINGS {
            assert_eq!(on_image_classified(arming, false, true), None);
        }
    }

    #[test]
    fn should_clear_alarm_when_disarmed() {
        for cat in [false, true] {
            assert_eq!(
                on_arming_changed(ArmingStatus::Disarmed, cat),
                Some(AlarmStatus::NoAlarm)
            );
        }
    }

    #[test]
    fn should_alarm_when_armed_home_after_cat_seen() {
        assert_eq!(
            on_arming_changed(ArmingStatus::ArmedHome, true),
            Some(AlarmStatus::Alarm)
        );
        assert_eq!(on_arming_changed(ArmingStatus::ArmedHome, false), None);
        assert_eq!(on_arming_changed(ArmingStatus::ArmedAway, true), None);
    }
}
