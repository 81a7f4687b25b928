//! Hygiene: source-scan budgets checked at test time.
//!
//! Scans `src/` for patterns that crash the app or drop errors silently, plus
//! two ownership rules specific to the session layer. Budgets only go down.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// A forbidden pattern and how many production lines may contain it.
struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics in the browser" },
    Budget { pattern: ".expect(", max: 0, why: "panics in the browser" },
    Budget { pattern: "panic!(", max: 0, why: "panics in the browser" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics in the browser" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    // The three off-browser stubs in token_store silence their unused key.
    Budget { pattern: "let _ =", max: 3, why: "discards a result unseen" },
    Budget { pattern: ".ok()", max: 0, why: "discards an error unseen" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

/// Production `.rs` files under `src/`, excluding `_test.rs` companions.
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
        let path_str = path.to_string_lossy().replace('\\', "/");
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
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

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("src/lib.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` ({}) found {count}, max {}:\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn local_storage_only_in_token_store() {
    let files = source_files();
    let stray: Vec<_> = hits(&files, "local_storage")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("util/token_store.rs"))
        .collect();
    assert!(stray.is_empty(), "localStorage touched outside token_store:\n{}", format_hits(&stray));
}

#[test]
fn discards_only_in_token_store_stubs() {
    let files = source_files();
    let stray: Vec<_> = hits(&files, "let _ =")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("util/token_store.rs"))
        .collect();
    assert!(stray.is_empty(), "`let _ =` outside the storage stubs:\n{}", format_hits(&stray));
    let stubs = files.iter().find(|f| f.path.ends_with("util/token_store.rs"));
    assert!(stubs.is_some_and(|f| f.content.lines().filter(|l| l.contains("let _ =")).all(|l| {
        let l = l.trim();
        l == "let _ = key;" || l == "let _ = (key, token);"
    })));
}

#[test]
fn session_commits_only_in_provider() {
    let files = source_files();
    let stray: Vec<_> = hits(&files, ".commit(")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("state/provider.rs") && !path.ends_with("state/session.rs"))
        .collect();
    assert!(stray.is_empty(), "session committed outside the provider:\n{}", format_hits(&stray));
}
