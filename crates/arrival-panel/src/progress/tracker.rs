use arrival_common::LngLat;
use arrival_config::schema::{ProgressConfig, SitesConfig};
use tracing::{debug, info};

use super::proximity::{is_close_to, DEFAULT_THRESHOLD};
use super::ProgressSurface;

/// One step on the arrival timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStep {
    pub id: String,
    pub target: LngLat,
    pub step_element: String,
    pub marker_element: String,
    pub line_percent: f64,
    completed: bool,
}

impl ProgressStep {
    pub fn new(
        id: impl Into<String>,
        target: LngLat,
        step_element: impl Into<String>,
        marker_element: impl Into<String>,
        line_percent: f64,
    ) -> Self {
        Self {
            id: id.into(),
            target,
            step_element: step_element.into(),
            marker_element: marker_element.into(),
            line_percent,
            completed: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Visual changes produced by completing a step.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub step_id: String,
    pub step_element: String,
    pub marker_element: String,
    /// Connector length after this update; never lower than before.
    pub line_percent: f64,
}

/// Tracks which steps are done and how far the connector reaches.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    steps: Vec<ProgressStep>,
    threshold: f64,
    line_element: String,
    line_percent: f64,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, "progress-line")
    }
}

impl ProgressTracker {
    pub fn new(threshold: f64, line_element: impl Into<String>) -> Self {
        Self {
            steps: Vec::new(),
            threshold,
            line_element: line_element.into(),
            line_percent: 0.0,
        }
    }

    /// Build the tracker from config, resolving step targets to site coordinates.
    pub fn from_config(progress: &ProgressConfig, sites: &SitesConfig) -> Self {
        let mut tracker = Self::new(progress.threshold, progress.line_element.clone());
        for step in &progress.steps {
            tracker.push_step(ProgressStep::new(
                step.id.clone(),
                sites.get(step.target).position(),
                step.step_element.clone(),
                step.marker_element.clone(),
                step.line_percent,
            ));
        }
        tracker
    }

    pub fn push_step(&mut self, step: ProgressStep) {
        self.steps.push(step);
    }

    pub fn with_step(mut self, step: ProgressStep) -> Self {
        self.push_step(step);
        self
    }

    pub fn steps(&self) -> &[ProgressStep] {
        &self.steps
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn line_element(&self) -> &str {
        &self.line_element
    }

    pub fn line_percent(&self) -> f64 {
        self.line_percent
    }

    pub fn is_completed(&self, step_id: &str) -> bool {
        self.steps
            .iter()
            .any(|s| s.id == step_id && s.completed)
    }

    pub fn all_completed(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|s| s.completed)
    }

    /// Mark a step complete.
    ///
    /// Returns the update to render the first time only; unknown or
    /// already-completed steps yield `None`.
    pub fn complete(&mut self, step_id: &str) -> Option<ProgressUpdate> {
        let step = self.steps.iter_mut().find(|s| s.id == step_id)?;
        if step.completed {
            debug!(step = step_id, "progress step already completed");
            return None;
        }
        step.completed = true;
        self.line_percent = self.line_percent.max(step.line_percent);

        info!(step = step_id, line_percent = self.line_percent, "progress step completed");
        Some(ProgressUpdate {
            step_id: step.id.clone(),
            step_element: step.step_element.clone(),
            marker_element: step.marker_element.clone(),
            line_percent: self.line_percent,
        })
    }

    /// Complete every pending step whose target is close to `position`.
    pub fn observe(&mut self, position: LngLat) -> Vec<ProgressUpdate> {
        let threshold = self.threshold;
        let arrived: Vec<String> = self
            .steps
            .iter()
            .filter(|s| !s.completed && is_close_to(s.target, position, threshold))
            .map(|s| s.id.clone())
            .collect();

        arrived
            .iter()
            .filter_map(|id| self.complete(id))
            .collect()
    }

    /// Render an update: both elements get the completed style and the
    /// connector is resized.
    pub fn apply(&self, update: &ProgressUpdate, surface: &mut impl ProgressSurface) {
        surface.mark_completed(&update.step_element);
        surface.mark_completed(&update.marker_element);
        surface.set_progress_line(&self.line_element, update.line_percent);
    }

    /// Re-render every completed step, e.g. after a page reload.
    pub fn render(&self, surface: &mut impl ProgressSurface) {
        for step in self.steps.iter().filter(|s| s.completed) {
            surface.mark_completed(&step.step_element);
            surface.mark_completed(&step.marker_element);
        }
        if self.line_percent > 0.0 {
            surface.set_progress_line(&self.line_element, self.line_percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const PARKING: LngLat = LngLat::new(-123.2487763774755, 49.27106955540924);
    const ENTRANCE: LngLat = LngLat::new(-123.25042484166043, 49.270382121434956);

    /// Mirrors what a page would show: a class set plus the line height.
    #[derive(Default, Debug, PartialEq)]
    struct FakePage {
        completed: BTreeSet<String>,
        line: Option<(String, f64)>,
        calls: usize,
    }

    impl ProgressSurface for FakePage {
        fn mark_completed(&mut self, element: &str) {
            self.completed.insert(element.to_string());
            self.calls += 1;
        }

        fn set_progress_line(&mut self, element: &str, percent: f64) {
            self.line = Some((element.to_string(), percent));
            self.calls += 1;
        }
    }

    fn tracker() -> ProgressTracker {
        ProgressTracker::default()
            .with_step(ProgressStep::new(
                "parking",
                PARKING,
                "step-parking",
                "marker-parking",
                50.0,
            ))
            .with_step(ProgressStep::new(
                "entrance",
                ENTRANCE,
                "step-entrance",
                "marker-entrance",
                100.0,
            ))
    }

    #[test]
    fn driver_at_parking_lot_completes_parking_step() {
        let mut tracker = tracker();
        let mut page = FakePage::default();

        let updates = tracker.observe(PARKING);
        assert_eq!(updates.len(), 1);
        tracker.apply(&updates[0], &mut page);

        assert!(page.completed.contains("step-parking"));
        assert!(page.completed.contains("marker-parking"));
        assert_eq!(page.line, Some(("progress-line".to_string(), 50.0)));
        assert!(tracker.is_completed("parking"));
        assert!(!tracker.is_completed("entrance"));
    }

    #[test]
    fn far_position_completes_nothing() {
        let mut tracker = tracker();
        let far = LngLat::new(-123.1, 49.2);
        assert!(tracker.observe(far).is_empty());
        assert_eq!(tracker.line_percent(), 0.0);
    }

    #[test]
    fn completing_twice_yields_same_end_state() {
        let mut once = tracker();
        let mut page_once = FakePage::default();
        if let Some(u) = once.complete("parking") {
            once.apply(&u, &mut page_once);
        }

        let mut twice = tracker();
        let mut page_twice = FakePage::default();
        for _ in 0..2 {
            if let Some(u) = twice.complete("parking") {
                twice.apply(&u, &mut page_twice);
            }
        }

        assert_eq!(page_once, page_twice);
        assert_eq!(once.line_percent(), twice.line_percent());
    }

    #[test]
    fn repeated_observation_is_noop() {
        let mut tracker = tracker();
        assert_eq!(tracker.observe(PARKING).len(), 1);
        assert!(tracker.observe(PARKING).is_empty());
    }

    #[test]
    fn unknown_step_yields_nothing() {
        let mut tracker = tracker();
        assert!(tracker.complete("lobby").is_none());
    }

    #[test]
    fn connector_never_moves_backwards() {
        let mut tracker = tracker();
        let entrance = tracker.complete("entrance").unwrap();
        assert_eq!(entrance.line_percent, 100.0);

        let parking = tracker.complete("parking").unwrap();
        assert_eq!(parking.line_percent, 100.0);
        assert!(tracker.all_completed());
    }

    #[test]
    fn threshold_is_strict() {
        let mut tracker = ProgressTracker::new(5.0, "line").with_step(ProgressStep::new(
            "origin",
            LngLat::new(0.0, 0.0),
            "s",
            "m",
            100.0,
        ));
        assert!(tracker.observe(LngLat::new(3.0, 4.0)).is_empty());
        assert_eq!(tracker.observe(LngLat::new(3.0, 3.9)).len(), 1);
    }

    #[test]
    fn render_replays_completed_steps() {
        let mut tracker = tracker();
        tracker.complete("parking");
        let mut page = FakePage::default();
        tracker.render(&mut page);
        assert!(page.completed.contains("marker-parking"));
        assert_eq!(page.line, Some(("progress-line".to_string(), 50.0)));
    }

    #[test]
    fn render_on_fresh_tracker_touches_nothing() {
        let tracker = tracker();
        let mut page = FakePage::default();
        tracker.render(&mut page);
        assert_eq!(page.calls, 0);
    }

    #[test]
    fn from_config_resolves_site_targets() {
        let tracker = ProgressTracker::from_config(
            &ProgressConfig::default(),
            &SitesConfig::default(),
        );
        assert_eq!(tracker.steps().len(), 2);
        assert_eq!(tracker.steps()[0].target, PARKING);
        assert_eq!(tracker.steps()[1].target, ENTRANCE);
        assert_eq!(tracker.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(tracker.line_element(), "progress-line");
    }
}
