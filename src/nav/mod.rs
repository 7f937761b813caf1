//! Enrollment-aware navigation core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Course links can point at two route families: the public catalog view
//! (`/app/courses/...`) and the enrolled "my courses" view
//! (`/app/my-courses/...`). Which one a link should use depends on whether
//! the current user is enrolled, which only the backend knows. This module
//! owns that decision: a process-wide enrollment cache filled by a single
//! coalesced fetch, and a resolver that turns course/module/content ids
//! into the right path.
//!
//! ERROR HANDLING
//! ==============
//! Enrollment-fetch failures are absorbed here and degrade to the catalog
//! route (fail-open): navigation always yields a valid path, never an error.

pub mod enrollment;
pub mod paths;
pub mod resolver;
pub mod single_flight;

pub use enrollment::EnrollmentCache;
pub use resolver::NavigationPathResolver;

/// Backend course identifier (integer primary key).
pub type CourseId = i64;
