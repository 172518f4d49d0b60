//! Footer lookup for both artifacts.
//!
//! All footer reads are non-fatal: a file that exists but cannot be read
//! logs a warning and the run continues with the default text (Markdown)
//! or without the fragment (XML).

use colored::Colorize;
use std::fs;
use std::path::Path;

const DEFAULT_FOOTER: &str = "## Where to get it
You can download this release from [Couchbase.com](http://www.couchbase.com/nosql-databases/downloads#Couchbase_Mobile)";

/// Trailing block for the Markdown artifact: `footer.md`, else
/// `footer.txt`, else the built-in download paragraph.
pub fn markdown_footer(dir: &Path) -> String {
    for name in ["footer.md", "footer.txt"] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(text) => return text,
            Err(e) => {
                eprintln!(
                    "{}",
                    format!(
                        "⚠️  Could not read {}: {} (using the default footer)",
                        path.display(),
                        e
                    )
                    .yellow()
                );
                return DEFAULT_FOOTER.to_string();
            }
        }
    }
    DEFAULT_FOOTER.to_string()
}

/// Optional per-repository XML footer template, `{repository}-footer.xml`,
/// interpolated with the milestone title. `{milestone}` expands to the
/// title as-is, `{milestone_compact}` to the title with dots stripped.
/// Absence is normal.
pub fn xml_footer(dir: &Path, repository: &str, milestone_title: &str) -> Option<String> {
    let path = dir.join(format!("{repository}-footer.xml"));
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(&path) {
        Ok(template) => {
            let compact = milestone_title.replace('.', "");
            Some(
                template
                    .replace("{milestone_compact}", &compact)
                    .replace("{milestone}", milestone_title),
            )
        }
        Err(e) => {
            eprintln!(
                "{}",
                format!("⚠️  Could not read {}: {} (skipping)", path.display(), e).yellow()
            );
            None
        }
    }
}
