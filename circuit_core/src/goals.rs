//! Weekly training goal tracking.
//!
//! The goal is a set of planned weekdays; completed sessions record their
//! date, and the week view reports which planned days were actually hit.
//! Weeks start on Sunday, matching the day picker's layout.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Planned training days plus the dates sessions were completed on
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub planned_days: Vec<Weekday>,
    pub completed_dates: Vec<NaiveDate>,
}

impl WeeklyGoal {
    pub fn new(planned_days: Vec<Weekday>) -> Self {
        Self {
            planned_days,
            completed_dates: Vec::new(),
        }
    }

    /// Add or remove a planned day
    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(pos) = self.planned_days.iter().position(|d| *d == day) {
            self.planned_days.remove(pos);
        } else {
            self.planned_days.push(day);
        }
    }

    /// Record a completed session; at most one entry per date
    pub fn record_completion(&mut self, date: NaiveDate) {
        if !self.completed_dates.contains(&date) {
            tracing::info!("Recording session completion on {}", date);
            self.completed_dates.push(date);
        }
    }

    /// Weekdays with a completed session in the week containing
    /// `reference`, where weeks run Sunday through Saturday
    pub fn completed_days_in_week(&self, reference: NaiveDate) -> Vec<Weekday> {
        let start = week_start(reference);
        let end = start + Duration::days(7);

        self.completed_dates
            .iter()
            .filter(|d| **d >= start && **d < end)
            .map(|d| d.weekday())
            .collect()
    }

    /// How many planned days were hit in the week containing `reference`
    pub fn planned_met_in_week(&self, reference: NaiveDate) -> usize {
        let completed = self.completed_days_in_week(reference);
        self.planned_days
            .iter()
            .filter(|day| completed.contains(day))
            .count()
    }

    pub fn is_met_for_week(&self, reference: NaiveDate) -> bool {
        !self.planned_days.is_empty()
            && self.planned_met_in_week(reference) >= self.planned_days.len()
    }
}

/// The Sunday on or before the given date
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}
