//! Hygiene — enforces coding standards at test time.
//!
//! Scans `src/` for antipatterns. Each pattern has a budget; the budget only
//! ratchets down. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

/// (pattern, budget, rationale shown on failure)
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics crash the whole WASM instance; errors surface through signals.
    (".unwrap()", 0, "propagate or default instead of panicking"),
    (".expect(", 0, "propagate or default instead of panicking"),
    ("panic!(", 0, "no panics in production paths"),
    ("unreachable!(", 0, "no panics in production paths"),
    ("todo!(", 0, "no stubs in production paths"),
    ("unimplemented!(", 0, "no stubs in production paths"),
    // `let _ =` is reserved for server-build stubs and fire-and-forget DOM
    // setters; anything new must pay down an existing one.
    ("let _ =", 34, "silent discard baseline"),
    (".ok()", 15, "error-to-option baseline"),
    ("#[allow(dead_code)]", 0, "delete dead code instead"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let name = path.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

#[test]
fn pattern_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; wrong working directory?");

    let mut failures = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let mut hits = Vec::new();
        for (name, content) in &files {
            let count = content.lines().filter(|l| l.contains(pattern)).count();
            if count > 0 {
                hits.push(format!("  {name}: {count}"));
            }
        }
        let total: usize = files
            .iter()
            .map(|(_, c)| c.lines().filter(|l| l.contains(pattern)).count())
            .sum();
        if total > budget {
            failures.push(format!(
                "`{pattern}` over budget: found {total}, max {budget} ({why})\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}
