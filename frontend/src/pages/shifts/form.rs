use crate::api::{ApiError, Shift, WeekDay};
use std::collections::BTreeSet;
use thiserror::Error;

pub const BRANCHES: [&str; 2] = ["dhaka", "gaibandha"];
const DEFAULT_LATE_AFTER: u32 = 0;
const DEFAULT_ABSENT_AFTER: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftFormError {
    #[error("Shift name is required")]
    MissingName,
    #[error("{0} must be a time in HH:MM format")]
    InvalidTime(&'static str),
    #[error("{0} must be a whole number of minutes")]
    InvalidMinutes(&'static str),
}

impl From<ShiftFormError> for ApiError {
    fn from(err: ShiftFormError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// `HH:MM` on a 24 hour clock.
pub fn parse_hhmm(value: &str) -> Option<(u8, u8)> {
    let (hours, minutes) = value.trim().split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u8 = hours.parse().ok()?;
    let minutes: u8 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some((hours, minutes))
}

fn parse_minutes(value: &str, field: &'static str) -> Result<u32, ShiftFormError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ShiftFormError::InvalidMinutes(field))
}

/// Editable copy of a shift as typed into the create/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftForm {
    pub id: Option<String>,
    pub shift_name: String,
    pub branch: String,
    pub start_time: String,
    pub end_time: String,
    pub late_after_minutes: String,
    pub absent_after_minutes: String,
    pub allow_ot: bool,
    pub weekends: BTreeSet<WeekDay>,
}

impl Default for ShiftForm {
    fn default() -> Self {
        Self {
            id: None,
            shift_name: String::new(),
            branch: BRANCHES[0].to_string(),
            start_time: String::new(),
            end_time: String::new(),
            late_after_minutes: DEFAULT_LATE_AFTER.to_string(),
            absent_after_minutes: DEFAULT_ABSENT_AFTER.to_string(),
            allow_ot: true,
            weekends: BTreeSet::new(),
        }
    }
}

impl ShiftForm {
    pub fn from_shift(shift: &Shift) -> Self {
        Self {
            id: shift.id.clone(),
            shift_name: shift.shift_name.clone(),
            branch: shift.branch.clone(),
            start_time: shift.start_time.clone(),
            end_time: shift.end_time.clone(),
            late_after_minutes: shift.late_after_minutes.to_string(),
            absent_after_minutes: shift.absent_after_minutes.to_string(),
            allow_ot: shift.allow_ot,
            weekends: shift.weekends.iter().copied().collect(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn toggle_weekend(&mut self, day: WeekDay) {
        if !self.weekends.remove(&day) {
            self.weekends.insert(day);
        }
    }

    pub fn validate(&self) -> Result<Shift, ShiftFormError> {
        let shift_name = self.shift_name.trim();
        if shift_name.is_empty() {
            return Err(ShiftFormError::MissingName);
        }
        if parse_hhmm(&self.start_time).is_none() {
            return Err(ShiftFormError::InvalidTime("Start time"));
        }
        if parse_hhmm(&self.end_time).is_none() {
            return Err(ShiftFormError::InvalidTime("End time"));
        }
        Ok(Shift {
            id: self.id.clone(),
            shift_name: shift_name.to_string(),
            branch: self.branch.clone(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            late_after_minutes: parse_minutes(&self.late_after_minutes, "Late after")?,
            absent_after_minutes: parse_minutes(&self.absent_after_minutes, "Absent after")?,
            allow_ot: self.allow_ot,
            weekends: self.weekends.iter().copied().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ShiftForm {
        ShiftForm {
            shift_name: " Morning Shift ".into(),
            start_time: "09:00".into(),
            end_time: "18:00".into(),
            ..ShiftForm::default()
        }
    }

    #[test]
    fn defaults_follow_branch_and_thresholds() {
        let form = ShiftForm::default();
        assert_eq!(form.branch, "dhaka");
        assert_eq!(form.late_after_minutes, "0");
        assert_eq!(form.absent_after_minutes, "5");
        assert!(form.allow_ot);
        assert!(!form.is_edit());
    }

    #[test]
    fn hhmm_parsing() {
        assert_eq!(parse_hhmm("09:30"), Some((9, 30)));
        assert_eq!(parse_hhmm("23:59"), Some((23, 59)));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("9:30"), None);
        assert_eq!(parse_hhmm("09:60"), None);
        assert_eq!(parse_hhmm(""), None);
    }

    #[test]
    fn validation_builds_trimmed_shift() {
        let mut form = filled();
        form.toggle_weekend(WeekDay::Saturday);
        form.toggle_weekend(WeekDay::Friday);
        let shift = form.validate().unwrap();
        assert_eq!(shift.shift_name, "Morning Shift");
        assert_eq!(shift.absent_after_minutes, 5);
        assert_eq!(shift.weekends, vec![WeekDay::Friday, WeekDay::Saturday]);
    }

    #[test]
    fn validation_errors() {
        let mut form = filled();
        form.shift_name = "  ".into();
        assert_eq!(form.validate(), Err(ShiftFormError::MissingName));

        let mut form = filled();
        form.end_time = "6pm".into();
        assert_eq!(form.validate(), Err(ShiftFormError::InvalidTime("End time")));

        let mut form = filled();
        form.late_after_minutes = "-3".into();
        assert_eq!(form.validate(), Err(ShiftFormError::InvalidMinutes("Late after")));
        assert!(ApiError::from(ShiftFormError::MissingName).is_validation());
    }

    #[test]
    fn round_trips_existing_shift() {
        let mut shift = filled().validate().unwrap();
        shift.id = Some("s1".into());
        let form = ShiftForm::from_shift(&shift);
        assert!(form.is_edit());
        assert_eq!(form.validate().unwrap(), shift);
    }
}
