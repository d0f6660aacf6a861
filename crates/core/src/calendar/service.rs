//! Calendar service
//!
//! Composes the whole read path behind one calendar surface: normalize the
//! source batch at the injected clock's "now", apply the state's filters,
//! clip to the visible window, then hand back a ready-to-render view with
//! start-day groupings and the workload sums. Stateless apart from its
//! collaborators; every call recomputes from the batch it is given.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use kontor_domain::{CalendarEvent, LoadState, SourceBatch};
use serde::Serialize;
use tracing::debug;

use crate::calendar::normalize::EventNormalizer;
use crate::calendar::query::{
    clip_to_range, events_for_date, filter_events, group_by_date, sorted_by_time,
    workload_by_date,
};
use crate::calendar::store::CalendarViewState;
use crate::clock::{Clock, SystemClock};

/// Everything a calendar surface renders for one window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    /// Visible events in display order, already filtered and clipped.
    pub events: Vec<CalendarEvent>,
    /// The same events grouped under the day they start.
    pub by_date: BTreeMap<NaiveDate, Vec<CalendarEvent>>,
    /// Planned minutes per day, for the workload heatmap.
    pub workload: BTreeMap<NaiveDate, i64>,
    /// True until every source collection has reported in.
    pub is_loading: bool,
}

/// Builds [`CalendarView`]s from source batches.
pub struct CalendarService {
    normalizer: EventNormalizer,
    clock: Arc<dyn Clock>,
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl CalendarService {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { normalizer: EventNormalizer::default(), clock }
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: EventNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Runs the full pipeline for the state's visible window.
    #[must_use]
    pub fn view(
        &self,
        batch: &SourceBatch,
        state: &CalendarViewState,
        loaded: LoadState,
    ) -> CalendarView {
        let now = self.clock.now();
        let events = self.normalizer.normalize(batch, now);
        let total = events.len();

        let visible = filter_events(&events, &state.filters);
        let clipped = sorted_by_time(clip_to_range(&visible, state.visible_range));
        let by_date = group_by_date(&clipped);
        let workload = workload_by_date(&clipped, state.visible_range);
        let is_loading = !loaded.all_loaded();

        debug!(
            total,
            visible = clipped.len(),
            days = by_date.len(),
            is_loading,
            "calendar view built"
        );

        CalendarView { events: clipped, by_date, workload, is_loading }
    }

    /// Filtered events for a single day, regardless of the visible window.
    /// Backs day drill-ins from any view.
    #[must_use]
    pub fn events_for(
        &self,
        batch: &SourceBatch,
        state: &CalendarViewState,
        date: NaiveDate,
    ) -> Vec<CalendarEvent> {
        let events = self.normalizer.normalize(batch, self.clock.now());
        events_for_date(&filter_events(&events, &state.filters), date)
    }
}
