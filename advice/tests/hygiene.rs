//! Hygiene: source-level budgets for the `advice` crate.
//!
//! `advice` is shared by the browser, the host, and the CLI, so a panic here
//! takes down all three. Every budget is zero and stays zero.

use std::fs;
use std::path::{Path, PathBuf};

/// Production `.rs` files under `src/`, skipping `_test.rs` siblings.
fn production_sources(dir: &Path) -> Vec<(PathBuf, String)> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            out.extend(production_sources(&path));
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
    out
}

fn assert_absent(pattern: &str) {
    let hits: Vec<String> = production_sources(Path::new("src"))
        .into_iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| format!("  {}: {count}", path.display()))
        })
        .collect();
    assert!(hits.is_empty(), "`{pattern}` is not allowed in advice/src:\n{}", hits.join("\n"));
}

#[test]
fn sources_are_found() {
    assert!(!production_sources(Path::new("src")).is_empty());
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent(".expect(");
}

#[test]
fn no_panic_macros() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern);
    }
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =");
    assert_absent(".ok()");
}

#[test]
fn no_dead_code_allowances() {
    assert_absent("#[allow(dead_code)]");
}
