use super::*;

#[test]
fn fresh_generation_is_current() {
    let generations = Generations::new();
    let g = generations.next();
    assert!(generations.is_current(g));
}

#[test]
fn newer_generation_supersedes_older() {
    let generations = Generations::new();
    let first = generations.next();
    let second = generations.next();
    assert!(!generations.is_current(first));
    assert!(generations.is_current(second));
}

#[test]
fn clones_share_the_counter() {
    let generations = Generations::new();
    let handle = generations.clone();
    let g = generations.next();
    assert!(handle.is_current(g));
    let newer = handle.next();
    assert!(!generations.is_current(g));
    assert!(generations.is_current(newer));
}
