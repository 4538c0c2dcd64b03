//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the client crate's production sources for antipatterns.
//! Each pattern has a budget (zero everywhere today). The budget never grows:
//! to add an occurrence, remove one first.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

/// Panics crash the hydrated app and leave the page inert.
const PANIC_BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, hint: "propagate or match instead" },
    Budget { pattern: ".expect(", max: 0, hint: "propagate or match instead" },
    Budget { pattern: "panic!(", max: 0, hint: "return an error" },
    Budget { pattern: "unreachable!(", max: 0, hint: "make the state unrepresentable" },
    Budget { pattern: "todo!(", max: 0, hint: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" },
];

/// Silent loss discards errors without inspecting them.
const DISCARD_BUDGETS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, hint: "log the error" },
    Budget { pattern: ".ok()", max: 0, hint: "match and log the error" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the code" },
];

/// Only the Supabase client touches the persisted session.
const STORAGE_OWNERS: &[&str] = &["src/net/supabase.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `client/src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if !path.extension().is_some_and(|e| e == "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().replace('\\', "/");
        if path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check_budgets(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the client crate root");

    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing: Vec<String> = found.iter().map(|(path, c)| format!("  {path}: {c}")).collect();
            failures.push(format!(
                "{} budget exceeded: found {count}, max {} ({}).\n{}",
                budget.pattern,
                budget.max,
                budget.hint,
                listing.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check_budgets(PANIC_BUDGETS);
}

#[test]
fn discard_budgets() {
    check_budgets(DISCARD_BUDGETS);
}

#[test]
fn local_storage_only_in_supabase_client() {
    let files = source_files();
    let strays: Vec<String> = hits(&files, "local_storage")
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| !STORAGE_OWNERS.iter().any(|owner| path.ends_with(owner)))
        .collect();
    assert!(strays.is_empty(), "localStorage accessed outside the Supabase client:\n  {}", strays.join("\n  "));
}
