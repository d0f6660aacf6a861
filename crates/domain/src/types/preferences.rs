//! Calendar view preferences and runtime filters
//!
//! Preferences are the persisted settings the host shell stores per user;
//! filters are the session-scoped visibility toggles the view state owns.
//! Both deserialize from partial JSON documents, so every field carries a
//! default.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WORKING_HOURS_END, DEFAULT_WORKING_HOURS_START};
use crate::errors::{KontorError, Result};
use crate::types::event::EventSource;
use crate::types::range::WeekStart;

/// Which calendar view is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
    Agenda,
}

fn default_true() -> bool {
    true
}

fn default_work_start() -> u32 {
    DEFAULT_WORKING_HOURS_START
}

fn default_work_end() -> u32 {
    DEFAULT_WORKING_HOURS_END
}

fn all_sources() -> BTreeSet<EventSource> {
    EventSource::all().into_iter().collect()
}

// ============================================================================
// Preferences
// ============================================================================

/// Persisted calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPreferences {
    #[serde(default)]
    pub default_view: ViewMode,
    /// 0 = Sunday, 1 = Monday on the wire.
    #[serde(default)]
    pub week_starts_on: WeekStart,
    /// First hour shown on the day/week time grid.
    #[serde(default = "default_work_start")]
    pub working_hours_start: u32,
    /// Hour the time grid ends on (exclusive).
    #[serde(default = "default_work_end")]
    pub working_hours_end: u32,
    #[serde(default = "default_true")]
    pub show_week_numbers: bool,
    #[serde(default)]
    pub show_workload_heatmap: bool,
    #[serde(default)]
    pub smart_panel_open: bool,
    /// Sources the user wants on the calendar at all; seeds the filter set.
    #[serde(default = "all_sources")]
    pub enabled_sources: BTreeSet<EventSource>,
}

impl Default for CalendarPreferences {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Month,
            week_starts_on: WeekStart::Monday,
            working_hours_start: DEFAULT_WORKING_HOURS_START,
            working_hours_end: DEFAULT_WORKING_HOURS_END,
            show_week_numbers: true,
            show_workload_heatmap: false,
            smart_panel_open: false,
            enabled_sources: all_sources(),
        }
    }
}

impl CalendarPreferences {
    /// Parses preferences from a (possibly partial) JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|err| KontorError::Config(format!("invalid calendar preferences: {err}")))
    }

    /// Serializes preferences for storage.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|err| KontorError::Config(format!("cannot serialize preferences: {err}")))
    }
}

/// Partial preference change; only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_view: Option<ViewMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_starts_on: Option<WeekStart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours_end: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_week_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_workload_heatmap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_panel_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_sources: Option<BTreeSet<EventSource>>,
}

impl PreferenceUpdate {
    /// Overwrites the target's fields with every value present here.
    pub fn apply_to(&self, preferences: &mut CalendarPreferences) {
        if let Some(view) = self.default_view {
            preferences.default_view = view;
        }
        if let Some(week_start) = self.week_starts_on {
            preferences.week_starts_on = week_start;
        }
        if let Some(start) = self.working_hours_start {
            preferences.working_hours_start = start;
        }
        if let Some(end) = self.working_hours_end {
            preferences.working_hours_end = end;
        }
        if let Some(show) = self.show_week_numbers {
            preferences.show_week_numbers = show;
        }
        if let Some(show) = self.show_workload_heatmap {
            preferences.show_workload_heatmap = show;
        }
        if let Some(open) = self.smart_panel_open {
            preferences.smart_panel_open = open;
        }
        if let Some(sources) = &self.enabled_sources {
            preferences.enabled_sources = sources.clone();
        }
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Session-scoped visibility toggles applied by the filter stage.
///
/// Empty allowlists mean "no restriction"; the per-source booleans exist on
/// top of `sources` because the UI exposes quick toggles for the noisier
/// sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFilters {
    #[serde(default = "all_sources")]
    pub sources: BTreeSet<EventSource>,
    /// Life/business area allowlist; empty means all areas.
    #[serde(default)]
    pub areas: Vec<String>,
    /// Project id allowlist; empty means all projects.
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default = "default_true")]
    pub show_completed: bool,
    #[serde(default = "default_true")]
    pub show_time_entries: bool,
    #[serde(default = "default_true")]
    pub show_social_posts: bool,
    #[serde(default = "default_true")]
    pub show_cron_jobs: bool,
    #[serde(default = "default_true")]
    pub show_agent_activity: bool,
}

impl Default for CalendarFilters {
    fn default() -> Self {
        Self {
            sources: all_sources(),
            areas: Vec::new(),
            projects: Vec::new(),
            show_completed: true,
            show_time_entries: true,
            show_social_posts: true,
            show_cron_jobs: true,
            show_agent_activity: true,
        }
    }
}

impl CalendarFilters {
    /// Parses filters from a (possibly partial) JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|err| KontorError::Config(format!("invalid calendar filters: {err}")))
    }

    /// Serializes filters for storage.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|err| KontorError::Config(format!("cannot serialize filters: {err}")))
    }
}

/// Partial filter change; only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<BTreeSet<EventSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_time_entries: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_social_posts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_cron_jobs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_agent_activity: Option<bool>,
}

impl FilterUpdate {
    /// Overwrites the target's fields with every value present here.
    pub fn apply_to(&self, filters: &mut CalendarFilters) {
        if let Some(sources) = &self.sources {
            filters.sources = sources.clone();
        }
        if let Some(areas) = &self.areas {
            filters.areas = areas.clone();
        }
        if let Some(projects) = &self.projects {
            filters.projects = projects.clone();
        }
        if let Some(show) = self.show_completed {
            filters.show_completed = show;
        }
        if let Some(show) = self.show_time_entries {
            filters.show_time_entries = show;
        }
        if let Some(show) = self.show_social_posts {
            filters.show_social_posts = show;
        }
        if let Some(show) = self.show_cron_jobs {
            filters.show_cron_jobs = show;
        }
        if let Some(show) = self.show_agent_activity {
            filters.show_agent_activity = show;
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn defaults_show_everything() {
        let filters = CalendarFilters::default();
        assert_eq!(filters.sources.len(), 9);
        assert!(filters.areas.is_empty());
        assert!(filters.projects.is_empty());
        assert!(filters.show_completed);
        assert!(filters.show_time_entries);
    }

    #[test]
    fn partial_preferences_document_fills_defaults() -> Result<()> {
        let prefs = CalendarPreferences::from_json(r#"{"weekStartsOn": 0}"#)?;
        assert_eq!(prefs.week_starts_on, WeekStart::Sunday);
        assert_eq!(prefs.default_view, ViewMode::Month);
        assert_eq!(prefs.working_hours_start, 8);
        assert_eq!(prefs.working_hours_end, 18);
        assert!(prefs.show_week_numbers);
        assert_eq!(prefs.enabled_sources.len(), 9);
        Ok(())
    }

    #[test]
    fn preferences_round_trip() -> Result<()> {
        let prefs = CalendarPreferences {
            default_view: ViewMode::Week,
            working_hours_start: 9,
            ..CalendarPreferences::default()
        };
        let json = prefs.to_json()?;
        let back = CalendarPreferences::from_json(&json)?;
        assert_eq!(back, prefs);
        Ok(())
    }

    #[test]
    fn invalid_preferences_report_config_error() {
        let err = CalendarPreferences::from_json("{not json").unwrap_err();
        assert!(matches!(err, KontorError::Config(_)));
    }

    #[test]
    fn filter_update_applies_only_present_fields() {
        let mut filters = CalendarFilters::default();
        let update = FilterUpdate {
            areas: Some(vec!["business".to_string()]),
            show_completed: Some(false),
            ..FilterUpdate::default()
        };
        update.apply_to(&mut filters);

        assert_eq!(filters.areas, vec!["business".to_string()]);
        assert!(!filters.show_completed);
        // Untouched fields keep their previous values.
        assert_eq!(filters.sources.len(), 9);
        assert!(filters.show_time_entries);
    }

    #[test]
    fn preference_update_applies_only_present_fields() {
        let mut prefs = CalendarPreferences::default();
        let update = PreferenceUpdate {
            week_starts_on: Some(WeekStart::Sunday),
            smart_panel_open: Some(true),
            ..PreferenceUpdate::default()
        };
        update.apply_to(&mut prefs);

        assert_eq!(prefs.week_starts_on, WeekStart::Sunday);
        assert!(prefs.smart_panel_open);
        assert_eq!(prefs.default_view, ViewMode::Month);
        assert_eq!(prefs.working_hours_end, 18);
    }

    #[test]
    fn view_mode_uses_lowercase_tags() -> Result<()> {
        assert_eq!(serde_json::to_string(&ViewMode::Agenda)?, "\"agenda\"");
        let mode: ViewMode = serde_json::from_str("\"month\"")?;
        assert_eq!(mode, ViewMode::Month);
        Ok(())
    }
}
