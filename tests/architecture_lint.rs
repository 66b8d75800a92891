//! Architecture enforcement tests.
//!
//! The `git` module is the only doorway to libgit2. These tests ensure
//! no other module reaches for `git2` directly.

use std::fs;
use std::path::{Path, PathBuf};

/// Collect every `.rs` file under `dir`.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files
}

#[test]
fn only_git_module_uses_git2() {
    let git_dir = Path::new("src/git");
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src")) {
        if path.starts_with(git_dir) {
            continue;
        }

        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
        if content.contains("git2::") || content.contains("use git2") {
            violations.push(path.display().to_string());
        }
    }

    assert!(
        violations.is_empty(),
        "git2 used outside src/git:\n  {}",
        violations.join("\n  ")
    );
}

#[test]
fn pointer_dispatch_has_no_wildcard() {
    let content = fs::read_to_string("src/git/interface.rs").expect("Failed to read interface.rs");
    let start = content
        .find("pub fn resolve(")
        .expect("resolve() not found");
    let body = &content[start..];
    let end = body.find("\n    }\n").expect("end of resolve() not found");

    assert!(
        !body[..end].contains("_ =>"),
        "resolve() must match every Pointer variant explicitly"
    );
}
