//! REST API helpers for communicating with the LMS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with a bearer
//! token attached from local storage. Server-side (SSR): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Certificate, Content, Course, CourseModule, Enrollment, GamificationSummary, LeaderboardEntry, Page, Role,
    TokenPair, User,
};
use crate::nav::CourseId;

#[cfg(any(test, feature = "hydrate"))]
fn course_endpoint(course_id: i64) -> String {
    format!("/api/courses/{course_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn enroll_endpoint(course_id: i64) -> String {
    format!("/api/courses/{course_id}/enroll/")
}

#[cfg(any(test, feature = "hydrate"))]
fn modules_endpoint(course_id: i64) -> String {
    format!("/api/courses/{course_id}/modules/")
}

#[cfg(any(test, feature = "hydrate"))]
fn contents_endpoint(course_id: i64, module_id: i64) -> String {
    format!("/api/courses/{course_id}/modules/{module_id}/content/")
}

#[cfg(any(test, feature = "hydrate"))]
fn content_endpoint(course_id: i64, module_id: i64, content_id: i64) -> String {
    format!("/api/courses/{course_id}/modules/{module_id}/content/{content_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn mark_complete_endpoint(course_id: i64, module_id: i64, content_id: i64) -> String {
    format!("/api/courses/{course_id}/modules/{module_id}/content/{content_id}/mark_complete/")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: i64) -> String {
    format!("/api/users/{user_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_search_endpoint(search: &str, page: u32) -> String {
    let mut url = format!("/api/users/?page={page}");
    if !search.is_empty() {
        url.push_str("&search=");
        url.push_str(&url_encode(search));
    }
    url
}

/// Minimal percent-encoding for query values: everything but unreserved
/// characters is escaped.
#[cfg(any(test, feature = "hydrate"))]
fn url_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// The token endpoint accepts either a username or an email; anything
/// containing `@` is treated as an email.
#[cfg(any(test, feature = "hydrate"))]
fn login_payload(identity: &str, password: &str) -> serde_json::Value {
    if identity.contains('@') {
        serde_json::json!({ "email": identity, "password": password })
    } else {
        serde_json::json!({ "username": identity, "password": password })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(feature = "hydrate")]
fn authorized(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::token::read_access() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = authorized(gloo_net::http::Request::get(url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("request", resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Obtain a JWT pair via `POST /api/token/`. `identity` may be a username
/// or an email address.
///
/// # Errors
///
/// Returns an error string on transport failure or rejected credentials.
pub async fn login(identity: &str, password: &str) -> Result<TokenPair, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/token/")
            .json(&login_payload(identity, password))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        resp.json::<TokenPair>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identity, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/register/`.
///
/// # Errors
///
/// Returns an error string on transport failure or validation rejection
/// (duplicate username/email, password mismatch).
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    role: Role,
) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "confirm_password": confirm_password,
            "role": role,
        });
        let resp = gloo_net::http::Request::post("/api/register/")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("registration", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password, confirm_password, role);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user's profile from `/api/users/profile/`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_profile() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>("/api/users/profile/").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the visible course list from `/api/courses/`.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn fetch_courses() -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/courses/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one course. Returns `None` when missing, inaccessible, or on the
/// server.
pub async fn fetch_course(course_id: i64) -> Option<Course> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Course>(&course_endpoint(course_id)).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// Enroll the current student via `POST /api/courses/{id}/enroll/`.
///
/// # Errors
///
/// Returns an error string on transport failure or rejection (already
/// enrolled, wrong role).
pub async fn enroll(course_id: i64) -> Result<Enrollment, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&enroll_endpoint(course_id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("enroll", resp.status()));
        }
        resp.json::<Enrollment>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the ordered module list of a course.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn fetch_modules(course_id: i64) -> Result<Vec<CourseModule>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&modules_endpoint(course_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the ordered content list of a module.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn fetch_contents(course_id: i64, module_id: i64) -> Result<Vec<Content>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&contents_endpoint(course_id, module_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, module_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch one content item. Returns `None` when missing or on the server.
pub async fn fetch_content(course_id: i64, module_id: i64, content_id: i64) -> Option<Content> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<Content>(&content_endpoint(course_id, module_id, content_id))
            .await
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, module_id, content_id);
        None
    }
}

/// Mark a content item completed for the current student.
///
/// # Errors
///
/// Returns an error string on transport failure or rejection (not enrolled).
pub async fn mark_content_complete(course_id: i64, module_id: i64, content_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&mark_complete_endpoint(
            course_id, module_id, content_id,
        )))
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("mark complete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, module_id, content_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's enrollments (teacher/admin roles see the wider
/// sets the backend scopes for them).
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn fetch_enrollments() -> Result<Vec<Enrollment>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/enrollments/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the IDs of the courses the current user is enrolled in. This is
/// the collaborator behind [`crate::nav::EnrollmentCache`].
///
/// # Errors
///
/// Returns an error string on transport or decode failure; the cache
/// absorbs it (fail-open).
pub async fn fetch_enrolled_course_ids() -> Result<Vec<CourseId>, String> {
    let enrollments = fetch_enrollments().await?;
    Ok(enrollments.into_iter().map(|e| e.course.id).collect())
}

/// Search users with pagination, for the admin multi-select.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn search_users(search: &str, page: u32) -> Result<Page<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&user_search_endpoint(search, page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, page);
        Err("not available on server".to_owned())
    }
}

/// Change a user's role via `PATCH /api/users/{id}/` (admin only).
///
/// # Errors
///
/// Returns an error string on transport failure or rejection.
pub async fn set_user_role(user_id: i64, role: Role) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::patch(&user_endpoint(user_id)))
            .json(&serde_json::json!({ "role": role }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("role change", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        Err("not available on server".to_owned())
    }
}

/// Delete a user via `DELETE /api/users/{id}/` (admin only).
///
/// # Errors
///
/// Returns an error string on transport failure or rejection.
pub async fn delete_user(user_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&user_endpoint(user_id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("user delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Delete a course via `DELETE /api/courses/{id}/` (admin/teacher only).
///
/// # Errors
///
/// Returns an error string on transport failure or rejection.
pub async fn delete_course(course_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&course_endpoint(course_id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("course delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's XP/streak/badge summary. Returns `None` on any
/// failure; gamification widgets simply stay empty.
pub async fn fetch_gamification_summary() -> Option<GamificationSummary> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<GamificationSummary>("/api/gamification/summary/").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the XP leaderboard.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/gamification/leaderboard/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's certificates.
///
/// # Errors
///
/// Returns an error string on transport or decode failure.
pub async fn fetch_certificates() -> Result<Vec<Certificate>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/certificates/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
