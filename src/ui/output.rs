//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Text output mirrors `git cat-file -p`; when `--json` is enabled, output
//! is machine-readable JSON.

use std::fmt::Display;

use crate::core::object::{Blob, Commit, Object, Tag, Tree};
use crate::core::types::Oid;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// How OIDs are rendered in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OidStyle {
    /// Number of hex digits, `None` for the full OID
    pub abbrev: Option<usize>,
}

impl OidStyle {
    /// Full 40-digit OIDs.
    pub const FULL: OidStyle = OidStyle { abbrev: None };

    /// Render an OID.
    pub fn render(&self, oid: Oid) -> String {
        match self.abbrev {
            Some(len) => oid.short(len),
            None => oid.to_string(),
        }
    }
}

/// Format any object as text.
pub fn format_object(object: &Object, style: OidStyle) -> String {
    match object {
        Object::Blob(blob) => format_blob(blob),
        Object::Commit(commit) => format_commit(commit, style),
        Object::Tag(tag) => format_tag(tag, style),
        Object::Tree(tree) => format_tree(tree, style),
    }
}

/// Blob contents, with invalid UTF-8 replaced.
pub fn format_blob(blob: &Blob) -> String {
    String::from_utf8_lossy(&blob.data).into_owned()
}

/// Format a commit as `git cat-file -p` does.
pub fn format_commit(commit: &Commit, style: OidStyle) -> String {
    let mut lines = vec![format!("tree {}", style.render(commit.tree.oid()))];
    for parent in &commit.parents {
        lines.push(format!("parent {}", style.render(parent.oid())));
    }
    lines.push(format!("author {}", commit.author.to_raw()));
    lines.push(format!("committer {}", commit.committer.to_raw()));
    lines.push(String::new());
    lines.push(commit.message.trim_end().to_string());
    lines.join("\n")
}

/// Format an annotated tag as `git cat-file -p` does.
pub fn format_tag(tag: &Tag, style: OidStyle) -> String {
    let mut lines = vec![
        format!("object {}", style.render(tag.target.oid())),
        format!("type {}", tag.target.kind()),
        format!("tag {}", tag.name),
    ];
    if let Some(tagger) = &tag.tagger {
        lines.push(format!("tagger {}", tagger.to_raw()));
    }
    lines.push(String::new());
    lines.push(tag.message.trim_end().to_string());
    lines.join("\n")
}

/// Format a tree as `git ls-tree` does.
///
/// Entries keep their stored order, where a subtree sorts as if its name
/// ended in `/`.
pub fn format_tree(tree: &Tree, style: OidStyle) -> String {
    tree.entries
        .iter()
        .map(|entry| {
            format!(
                "{} {} {}\t{}",
                entry.mode(),
                entry.object.kind(),
                style.render(entry.object.oid()),
                entry.name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert an object to JSON.
///
/// Blobs carry their size, and their text when it is valid UTF-8.
pub fn object_json(object: &Object) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(object)?;
    if let Object::Blob(blob) = object {
        value["size"] = serde_json::json!(blob.size());
        value["text"] = serde_json::json!(blob.text());
    }
    Ok(value)
}
