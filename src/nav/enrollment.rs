//! Cached enrollment lookups backed by one coalesced backend fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend exposes the current user's enrollments as a list; individual
//! "am I enrolled in course N?" questions are answered by scanning that
//! list. The list is fetched at most once per cache lifetime, shared by all
//! concurrent askers, and the derived per-course booleans are cached until
//! explicitly invalidated (enroll/unenroll, logout).
//!
//! TRADE-OFFS
//! ==========
//! A failed fetch resolves as an empty list, so every asker gets `false`
//! (fail-open): course links degrade to the catalog view instead of
//! breaking navigation. The failure-derived answer stays cached until the
//! next invalidation, same as a real one.

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::CourseId;
use super::single_flight::SingleFlight;

/// Collaborator that fetches the enrolled course-ID list for the current
/// user. The only boundary this module has; injected so tests can construct
/// isolated instances with stub fetchers.
pub type FetchEnrolledIds = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<Vec<CourseId>, String>>>;

/// Per-course enrollment cache with single-flight fill.
///
/// One instance is constructed at application startup and shared; all
/// reads and writes go through this object.
pub struct EnrollmentCache {
    fetch: FetchEnrolledIds,
    entries: RefCell<HashMap<CourseId, bool>>,
    flight: SingleFlight<(), Rc<Vec<CourseId>>>,
}

impl EnrollmentCache {
    pub fn new(fetch: FetchEnrolledIds) -> Self {
        Self {
            fetch,
            entries: RefCell::new(HashMap::new()),
            flight: SingleFlight::new(),
        }
    }

    /// Whether the current user is enrolled in `course_id`.
    ///
    /// Cache hit: answers without I/O. Miss: triggers the enrolled-ID fetch
    /// (or joins one already in flight). One fetched list answers every
    /// course it names: on settlement each listed ID is cached `true`, and
    /// the queried course additionally gets its membership boolean, so
    /// follow-up lookups for listed courses are pure cache hits.
    /// Never fails; fetch errors resolve as "not enrolled".
    pub async fn is_enrolled(&self, course_id: CourseId) -> bool {
        if let Some(&known) = self.entries.borrow().get(&course_id) {
            return known;
        }

        let fetch = Rc::clone(&self.fetch);
        let ids = self
            .flight
            .run((), move || async move { Rc::new(fetch().await.unwrap_or_default()) })
            .await;

        // An explicit `set_known` while we were in flight wins over the
        // (possibly stale) fetched list, for the queried course and for
        // every listed one (`or_insert` never overwrites).
        if let Some(&known) = self.entries.borrow().get(&course_id) {
            return known;
        }

        let mut entries = self.entries.borrow_mut();
        for &id in ids.iter() {
            entries.entry(id).or_insert(true);
        }
        *entries.entry(course_id).or_insert(false)
    }

    /// Cached answer for `course_id`, if one exists. No I/O.
    pub fn cached(&self, course_id: CourseId) -> Option<bool> {
        self.entries.borrow().get(&course_id).copied()
    }

    /// Record an enrollment change directly (e.g. right after a successful
    /// enroll/unenroll call) and drop any in-flight fetch so a later miss
    /// re-fetches instead of trusting a stale list.
    pub fn set_known(&self, course_id: CourseId, enrolled: bool) {
        self.entries.borrow_mut().insert(course_id, enrolled);
        self.flight.clear();
    }

    /// Forget the cached answer for one course.
    pub fn invalidate(&self, course_id: CourseId) {
        self.entries.borrow_mut().remove(&course_id);
    }

    /// Forget everything, including any in-flight fetch. The next lookup
    /// re-fetches from the backend. Called on logout and bulk enrollment
    /// changes.
    pub fn invalidate_all(&self) {
        self.entries.borrow_mut().clear();
        self.flight.clear();
    }
}
