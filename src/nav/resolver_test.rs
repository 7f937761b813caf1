use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt as _;
use futures::executor::LocalPool;

use super::*;
use crate::nav::enrollment::FetchEnrolledIds;

fn resolver_with(ids: Result<Vec<CourseId>, String>, calls: Rc<Cell<u32>>) -> NavigationPathResolver {
    let fetch: FetchEnrolledIds = Rc::new(move || {
        calls.set(calls.get() + 1);
        let ids = ids.clone();
        async move { ids }.boxed_local()
    });
    NavigationPathResolver::new(Rc::new(EnrollmentCache::new(fetch)))
}

#[test]
fn enrolled_course_resolves_to_my_courses() {
    let calls = Rc::new(Cell::new(0));
    let resolver = resolver_with(Ok(vec![42]), Rc::clone(&calls));
    let mut pool = LocalPool::new();

    assert_eq!(pool.run_until(resolver.resolve_course(42)), "/app/my-courses/42");
    assert_eq!(
        pool.run_until(resolver.resolve(42, Some(7), None)),
        "/app/my-courses/42/modules/7"
    );
    assert_eq!(
        pool.run_until(resolver.resolve(42, Some(7), Some(3))),
        "/app/my-courses/42/modules/7/content/3"
    );
    assert_eq!(calls.get(), 1, "one fetch serves every resolution");
}

#[test]
fn unenrolled_course_resolves_to_catalog() {
    let calls = Rc::new(Cell::new(0));
    let resolver = resolver_with(Ok(vec![1]), Rc::clone(&calls));
    let mut pool = LocalPool::new();

    assert_eq!(pool.run_until(resolver.resolve_course(42)), "/app/courses/42");
    assert_eq!(
        pool.run_until(resolver.resolve(42, Some(7), None)),
        "/app/courses/42/modules/7"
    );
}

#[test]
fn fetch_failure_falls_back_to_catalog() {
    let calls = Rc::new(Cell::new(0));
    let resolver = resolver_with(Err("502".to_owned()), Rc::clone(&calls));
    let mut pool = LocalPool::new();

    assert_eq!(pool.run_until(resolver.resolve_course(9)), "/app/courses/9");
}

#[test]
fn set_known_switches_template_without_fetch() {
    let calls = Rc::new(Cell::new(0));
    let resolver = resolver_with(Ok(vec![]), Rc::clone(&calls));
    let mut pool = LocalPool::new();

    resolver.cache().set_known(5, true);
    assert_eq!(pool.run_until(resolver.resolve_course(5)), "/app/my-courses/5");
    assert_eq!(calls.get(), 0);
}
