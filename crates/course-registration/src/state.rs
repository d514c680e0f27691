//! Registration form state.
//!
//! [`RegistrationState`] owns the catalog and the selection flags. Every
//! mutation goes through a method that recomputes the
//! [`RegistrationSummary`] before returning, so callers never observe a
//! stale total or status.

use std::collections::BTreeSet;

use tracing::{debug, info};

use course_model::{Course, CreditBounds, StatusSeverity};

use crate::error::{RegistrationError, Result};
use crate::search::filter_courses;
use crate::submit::{Confirmation, RegistrationSink, SubmissionKind, SubmissionRequest};
use crate::summary::RegistrationSummary;

#[derive(Debug, Clone)]
pub struct RegistrationState {
    courses: Vec<Course>,
    bounds: CreditBounds,
    summary: RegistrationSummary,
}

impl RegistrationState {
    /// Take ownership of a catalog. Selection flags already set on the
    /// courses are kept.
    ///
    /// Course ids must be unique; a validated `Catalog` guarantees it.
    /// Duplicates are caught by a debug assertion only, and in release
    /// builds selection by id reaches the first match.
    pub fn new(courses: Vec<Course>, bounds: CreditBounds) -> Self {
        debug_assert!(
            has_unique_ids(&courses),
            "registration state built with duplicate course ids"
        );
        let summary = RegistrationSummary::derive(&courses, bounds);
        Self {
            courses,
            bounds,
            summary,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == *course_id)
    }

    pub fn bounds(&self) -> CreditBounds {
        self.bounds
    }

    pub fn summary(&self) -> &RegistrationSummary {
        &self.summary
    }

    pub fn total_credits(&self) -> u32 {
        self.summary.total_credits()
    }

    pub fn selected_count(&self) -> usize {
        self.summary.selected_count()
    }

    pub fn status_message(&self) -> String {
        self.summary.status_message()
    }

    pub fn status_severity(&self) -> StatusSeverity {
        self.summary.status_severity()
    }

    pub fn can_register(&self) -> bool {
        self.summary.can_register()
    }

    /// Flip the selection flag of `course_id`.
    ///
    /// Unknown ids leave the state untouched; the return value tells the
    /// caller whether anything changed.
    pub fn toggle_selection(&mut self, course_id: &str) -> bool {
        let Some(course) = self.find_mut(course_id) else {
            debug!(course_id, "toggle ignored: unknown course");
            return false;
        };
        course.selected = !course.selected;
        debug!(course_id, selected = course.selected, "course toggled");
        self.recompute();
        true
    }

    /// Set the selection flag of `course_id` to `selected`.
    ///
    /// Returns false only when the id is unknown.
    pub fn set_selected(&mut self, course_id: &str, selected: bool) -> bool {
        let Some(course) = self.find_mut(course_id) else {
            debug!(course_id, "selection ignored: unknown course");
            return false;
        };
        course.selected = selected;
        debug!(course_id, selected, "course selection set");
        self.recompute();
        true
    }

    pub fn clear_selection(&mut self) {
        for course in &mut self.courses {
            course.selected = false;
        }
        self.recompute();
    }

    /// Re-derive totals and status from the current selection.
    pub fn recompute(&mut self) -> &RegistrationSummary {
        self.summary = RegistrationSummary::derive(&self.courses, self.bounds);
        debug!(
            total_credits = self.summary.total_credits(),
            selected_count = self.summary.selected_count(),
            severity = %self.summary.status_severity(),
            "registration summary recomputed"
        );
        &self.summary
    }

    /// Catalog view filtered by `query`; see [`filter_courses`].
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Course> + 'a {
        filter_courses(&self.courses, query)
    }

    pub fn selected_courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter().filter(|course| course.selected)
    }

    pub fn register(&self) -> Confirmation {
        self.submission(SubmissionKind::Registration).confirmation()
    }

    pub fn save_draft(&self) -> Confirmation {
        self.submission(SubmissionKind::Draft).confirmation()
    }

    /// Hand the selection to `sink` as a registration.
    ///
    /// Refused unless the total is within bounds.
    pub fn register_with<S>(&self, sink: &mut S) -> Result<Confirmation>
    where
        S: RegistrationSink + ?Sized,
    {
        if !self.can_register() {
            return Err(RegistrationError::NotEligible {
                total_credits: self.total_credits(),
                status: self.summary.status(),
            });
        }
        self.submit_to(sink, SubmissionKind::Registration)
    }

    /// Hand the selection to `sink` as a draft. Drafts are accepted at any
    /// credit total.
    pub fn save_draft_with<S>(&self, sink: &mut S) -> Result<Confirmation>
    where
        S: RegistrationSink + ?Sized,
    {
        self.submit_to(sink, SubmissionKind::Draft)
    }

    fn submit_to<S>(&self, sink: &mut S, kind: SubmissionKind) -> Result<Confirmation>
    where
        S: RegistrationSink + ?Sized,
    {
        let request = self.submission(kind);
        sink.submit(&request)?;
        info!(
            kind = %kind,
            course_count = request.course_count(),
            total_credits = request.total_credits,
            "selection submitted"
        );
        Ok(request.confirmation())
    }

    fn submission(&self, kind: SubmissionKind) -> SubmissionRequest {
        SubmissionRequest {
            kind,
            course_ids: self
                .selected_courses()
                .map(|course| course.id.clone())
                .collect(),
            total_credits: self.total_credits(),
        }
    }

    fn find_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| course.id == *course_id)
    }
}

fn has_unique_ids(courses: &[Course]) -> bool {
    let mut seen = BTreeSet::new();
    courses.iter().all(|course| seen.insert(course.id.as_str()))
}

#[cfg(test)]
mod tests {
    use course_model::{CourseCategory, CourseId};

    use super::*;

    fn course(id: &str, credits: u32) -> Course {
        Course::new(
            CourseId::new(id).unwrap(),
            id,
            id,
            "Staff",
            "TBA",
            credits,
            CourseCategory::Core,
        )
        .unwrap()
    }

    #[test]
    fn preselected_courses_count_at_construction() {
        let mut picked = course("A-01", 4);
        picked.selected = true;
        let state = RegistrationState::new(vec![picked, course("B-01", 3)], CreditBounds::default());
        assert_eq!(state.total_credits(), 4);
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn set_selected_is_idempotent() {
        let mut state = RegistrationState::new(vec![course("A-01", 3)], CreditBounds::default());
        assert!(state.set_selected("A-01", true));
        assert!(state.set_selected("A-01", true));
        assert_eq!(state.total_credits(), 3);
        assert!(!state.set_selected("missing", true));
    }

    #[test]
    fn clear_selection_resets_status() {
        let mut state = RegistrationState::new(
            vec![course("A-01", 3), course("B-01", 3)],
            CreditBounds::default(),
        );
        state.toggle_selection("A-01");
        state.toggle_selection("B-01");
        state.clear_selection();
        assert_eq!(state.total_credits(), 0);
        assert_eq!(state.status_severity(), StatusSeverity::Information);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate course ids")]
    fn duplicate_ids_are_rejected_in_debug_builds() {
        let _ = RegistrationState::new(
            vec![course("A-01", 3), course("A-01", 3)],
            CreditBounds::default(),
        );
    }
}
