//! Route-parameter parsing shared by the course/module/content pages.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

/// Parse a numeric route parameter; `None` for absent or malformed values.
pub fn parse_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}

/// Whether the current location is under the enrolled "my courses" family.
/// Pages under both route families use this to pick back-links.
pub fn in_my_courses(pathname: &str) -> bool {
    pathname.starts_with("/app/my-courses/")
}
