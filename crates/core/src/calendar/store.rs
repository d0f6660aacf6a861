//! Calendar view state
//!
//! The session state one calendar surface owns: selected date, view mode,
//! the visible window derived from both, plus preferences and filters.
//! Transitions are synchronous and infallible, and every mutation that can
//! move the window recomputes it in the same call, so `visible_range` can
//! never go stale.

use chrono::NaiveDate;
use kontor_domain::{
    CalendarFilters, CalendarPreferences, DateRange, FilterUpdate, PreferenceUpdate, ViewMode,
};
use serde::Serialize;
use tracing::debug;

use crate::calendar::range::{navigate_backward, navigate_forward, visible_range};

/// Navigation and filter state for one calendar surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarViewState {
    pub selected_date: NaiveDate,
    pub view_mode: ViewMode,
    pub visible_range: DateRange,
    pub preferences: CalendarPreferences,
    pub filters: CalendarFilters,
    /// False until [`initialize`](Self::initialize) ran; the shell keeps
    /// showing a skeleton while this is unset.
    pub initialized: bool,
}

impl CalendarViewState {
    /// Fresh state centered on `today` with default preferences.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let preferences = CalendarPreferences::default();
        let view_mode = preferences.default_view;
        Self {
            selected_date: today,
            view_mode,
            visible_range: visible_range(today, view_mode, preferences.week_starts_on),
            filters: CalendarFilters {
                sources: preferences.enabled_sources.clone(),
                ..CalendarFilters::default()
            },
            preferences,
            initialized: false,
        }
    }

    /// Applies stored preferences, re-centers on `today`, and marks the
    /// state ready. The preferred view becomes the active one and the
    /// preferred sources seed the filter set. Idempotent: once initialized,
    /// further calls are no-ops.
    pub fn initialize(&mut self, preferences: CalendarPreferences, today: NaiveDate) {
        if self.initialized {
            return;
        }
        self.view_mode = preferences.default_view;
        self.filters.sources = preferences.enabled_sources.clone();
        self.preferences = preferences;
        self.selected_date = today;
        self.initialized = true;
        self.recompute_range();
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.recompute_range();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.recompute_range();
    }

    /// Steps one unit forward for the current mode (month, week, day, or
    /// agenda window).
    pub fn go_forward(&mut self) {
        self.selected_date = navigate_forward(self.selected_date, self.view_mode);
        self.recompute_range();
    }

    /// Mirror of [`go_forward`](Self::go_forward).
    pub fn go_backward(&mut self) {
        self.selected_date = navigate_backward(self.selected_date, self.view_mode);
        self.recompute_range();
    }

    /// Jumps back to the current day without changing the view mode.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.selected_date = today;
        self.recompute_range();
    }

    /// Applies a partial filter change. Filters never move the window.
    pub fn set_filter(&mut self, update: &FilterUpdate) {
        update.apply_to(&mut self.filters);
    }

    /// Restores the documented filter defaults: every source enabled, all
    /// areas and projects, completed work shown.
    pub fn reset_filters(&mut self) {
        self.filters = CalendarFilters::default();
    }

    /// Applies a partial preference change. A new week start realigns the
    /// grid immediately; a new source set replaces the filter's sources; a
    /// new default view is only read at initialization and never flips the
    /// live mode.
    pub fn update_preferences(&mut self, update: &PreferenceUpdate) {
        update.apply_to(&mut self.preferences);
        if let Some(sources) = &update.enabled_sources {
            self.filters.sources = sources.clone();
        }
        self.recompute_range();
    }

    fn recompute_range(&mut self) {
        self.visible_range =
            visible_range(self.selected_date, self.view_mode, self.preferences.week_starts_on);
        debug!(
            mode = ?self.view_mode,
            selected = %self.selected_date,
            start = %self.visible_range.start,
            end = %self.visible_range.end,
            "visible range recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use kontor_domain::{EventSource, WeekStart};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 7, 15)
    }

    #[test]
    fn new_state_opens_the_month_around_today() {
        let state = CalendarViewState::new(today());

        assert_eq!(state.view_mode, ViewMode::Month);
        assert_eq!(state.selected_date, today());
        assert_eq!(state.visible_range.start, date(2025, 6, 30));
        assert_eq!(state.visible_range.end, date(2025, 8, 3));
        assert!(!state.initialized);
    }

    #[test]
    fn initialize_applies_stored_preferences() {
        let mut state = CalendarViewState::new(today());
        let sources: BTreeSet<EventSource> =
            [EventSource::Task, EventSource::Project].into_iter().collect();
        let preferences = CalendarPreferences {
            default_view: ViewMode::Week,
            week_starts_on: WeekStart::Sunday,
            enabled_sources: sources.clone(),
            ..CalendarPreferences::default()
        };

        state.initialize(preferences, today());

        assert!(state.initialized);
        assert_eq!(state.view_mode, ViewMode::Week);
        // AC: Sunday weeks shift the strip to Jul 13..Jul 19
        assert_eq!(state.visible_range.start, date(2025, 7, 13));
        assert_eq!(state.visible_range.end, date(2025, 7, 19));
        assert_eq!(state.filters.sources, sources);
    }

    #[test]
    fn month_navigation_steps_whole_months() {
        let mut state = CalendarViewState::new(today());

        state.go_forward();
        assert_eq!(state.selected_date, date(2025, 8, 15));
        assert_eq!(state.visible_range.start, date(2025, 7, 28));
        assert_eq!(state.visible_range.end, date(2025, 8, 31));

        state.go_backward();
        assert_eq!(state.selected_date, today());
        assert_eq!(state.visible_range.start, date(2025, 6, 30));
    }

    #[test]
    fn week_navigation_steps_seven_days() {
        let mut state = CalendarViewState::new(today());
        state.set_view_mode(ViewMode::Week);

        state.go_forward();

        assert_eq!(state.selected_date, date(2025, 7, 22));
        assert_eq!(state.visible_range.start, date(2025, 7, 21));
        assert_eq!(state.visible_range.end, date(2025, 7, 27));
    }

    #[test]
    fn go_to_today_recenters_without_changing_mode() {
        let mut state = CalendarViewState::new(today());
        state.set_view_mode(ViewMode::Day);
        state.go_forward();
        state.go_forward();

        state.go_to_today(today());

        assert_eq!(state.view_mode, ViewMode::Day);
        assert_eq!(state.selected_date, today());
        assert_eq!(state.visible_range, DateRange::single(today()));
    }

    #[test]
    fn day_mode_shows_a_single_date() {
        let mut state = CalendarViewState::new(today());

        state.set_view_mode(ViewMode::Day);

        assert_eq!(state.visible_range.len_days(), 1);
    }

    #[test]
    fn filters_change_without_moving_the_window() {
        let mut state = CalendarViewState::new(today());
        let before = state.visible_range;

        state.set_filter(&FilterUpdate {
            show_completed: Some(false),
            areas: Some(vec!["business".to_string()]),
            ..FilterUpdate::default()
        });

        assert!(!state.filters.show_completed);
        assert_eq!(state.filters.areas, vec!["business".to_string()]);
        assert_eq!(state.visible_range, before);
    }

    #[test]
    fn reset_filters_restores_the_full_default_set() {
        let mut state = CalendarViewState::new(today());
        state.set_filter(&FilterUpdate {
            sources: Some([EventSource::Task].into_iter().collect()),
            show_completed: Some(false),
            show_time_entries: Some(false),
            areas: Some(vec!["business".to_string()]),
            ..FilterUpdate::default()
        });

        state.reset_filters();

        // AC: the reset re-enables every source, not just the preferred ones
        assert_eq!(state.filters, CalendarFilters::default());
        assert_eq!(state.filters.sources.len(), 9);
        assert!(state.filters.show_completed);
        assert!(state.filters.areas.is_empty());
    }

    #[test]
    fn initialize_applies_only_once() {
        let mut state = CalendarViewState::new(today());
        state.initialize(
            CalendarPreferences { default_view: ViewMode::Week, ..CalendarPreferences::default() },
            today(),
        );
        assert_eq!(state.view_mode, ViewMode::Week);

        // AC: a second initialization is a no-op
        state.initialize(
            CalendarPreferences {
                default_view: ViewMode::Agenda,
                week_starts_on: WeekStart::Sunday,
                ..CalendarPreferences::default()
            },
            date(2025, 8, 1),
        );

        assert_eq!(state.view_mode, ViewMode::Week);
        assert_eq!(state.selected_date, today());
        assert_eq!(state.preferences.week_starts_on, WeekStart::Monday);
    }

    #[test]
    fn week_start_preference_realigns_the_grid() {
        let mut state = CalendarViewState::new(today());

        state.update_preferences(&PreferenceUpdate {
            week_starts_on: Some(WeekStart::Sunday),
            ..PreferenceUpdate::default()
        });

        // AC: July 2025 with Sunday weeks opens on June 29
        assert_eq!(state.visible_range.start, date(2025, 6, 29));
    }

    #[test]
    fn default_view_preference_applies_on_initialize() {
        let mut state = CalendarViewState::new(today());

        state.update_preferences(&PreferenceUpdate {
            default_view: Some(ViewMode::Agenda),
            ..PreferenceUpdate::default()
        });
        assert_eq!(state.view_mode, ViewMode::Month);

        let preferences = state.preferences.clone();
        state.initialize(preferences, today());
        assert_eq!(state.view_mode, ViewMode::Agenda);
    }

    #[test]
    fn preference_source_change_updates_filters() {
        let mut state = CalendarViewState::new(today());
        let sources: BTreeSet<EventSource> =
            [EventSource::Task, EventSource::Invoice].into_iter().collect();

        state.update_preferences(&PreferenceUpdate {
            enabled_sources: Some(sources.clone()),
            ..PreferenceUpdate::default()
        });

        assert_eq!(state.preferences.enabled_sources, sources);
        assert_eq!(state.filters.sources, sources);
    }
}
