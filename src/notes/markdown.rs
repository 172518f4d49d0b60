//! Markdown body assembly: summary sentence, milestone description, and
//! the per-category issue sections.

use super::classify::{Category, ClassifiedIssues};
use super::range::{pluralize, CommitRange};
use crate::config::RepoConfig;
use crate::models::Milestone;

/// Render the body shared by both artifacts: summary line, the milestone
/// description verbatim, a blank line, then the non-empty category
/// sections. The Markdown footer is appended separately.
pub fn render_body(
    config: &RepoConfig,
    target: &Milestone,
    issues: &ClassifiedIssues,
    commits: &CommitRange,
) -> String {
    let mut out = String::new();

    out.push_str(&summary_line(config, target, issues, commits));
    out.push('\n');
    out.push_str(&target.description);
    out.push('\n');
    out.push('\n');

    for category in Category::ALL {
        out.push_str(&section(issues, category));
    }

    out
}

/// The lead sentence; the four forms are mutually exclusive, first match
/// wins, and both counts are hyperlinked.
fn summary_line(
    config: &RepoConfig,
    target: &Milestone,
    issues: &ClassifiedIssues,
    commits: &CommitRange,
) -> String {
    let issue_count = issues.count() as u64;
    let issues_link = format!(
        "https://github.com/{}/{}/issues?milestone={}&state=closed",
        config.owner, config.repository, target.number
    );

    if issue_count > 0 && commits.count > 0 {
        format!(
            "As part of this release we had [{}]({}) which resulted in [{}]({}) being closed.",
            commits.phrase(),
            commits.url,
            pluralize(issue_count, "issue"),
            issues_link
        )
    } else if issue_count > 0 {
        format!(
            "As part of this release we had [{}]({}) closed.",
            pluralize(issue_count, "issue"),
            issues_link
        )
    } else if commits.count > 0 {
        format!(
            "As part of this release we had [{}]({}).",
            commits.phrase(),
            commits.url
        )
    } else {
        String::new()
    }
}

fn section(issues: &ClassifiedIssues, category: Category) -> String {
    let entries = issues.section(category);
    if entries.is_empty() {
        return String::new();
    }

    let mut out = format!("__{}__\n", category.heading());
    for issue in entries {
        out.push_str(&format!(
            "- [#{}]({}) {}\n",
            issue.number,
            issue.html_url,
            capitalize(&issue.title)
        ));
    }
    out.push('\n');
    out
}

/// Uppercase the first letter unless it already is one.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Issue, ItemState};
    use crate::notes::classify::classify;

    fn config() -> RepoConfig {
        RepoConfig {
            owner: "couchbase".to_string(),
            repository: "couchbase-lite-ios".to_string(),
            token: None,
            default_branch: "master".to_string(),
        }
    }

    fn milestone(title: &str, description: &str) -> Milestone {
        Milestone {
            number: 5,
            title: title.to_string(),
            description: description.to_string(),
            state: ItemState::Open,
            html_url: String::new(),
        }
    }

    fn issue(number: u64, title: &str, labels: &[&str], state: ItemState) -> Issue {
        Issue {
            number,
            title: title.to_string(),
            html_url: format!("https://github.com/couchbase/couchbase-lite-ios/issues/{number}"),
            state,
            labels: labels.iter().map(|label| label.to_string()).collect(),
            is_pull_request: false,
        }
    }

    fn range(count: u64) -> CommitRange {
        CommitRange {
            count,
            url: "https://github.com/couchbase/couchbase-lite-ios/compare/1.9.0...2.0.0"
                .to_string(),
        }
    }

    #[test]
    fn test_summary_with_commits_and_issues() {
        let issues = classify(vec![issue(42, "fix crash", &["bug"], ItemState::Closed)]);
        let body = render_body(&config(), &milestone("2.0.0", ""), &issues, &range(3));
        assert!(body.starts_with(
            "As part of this release we had \
             [3 commits](https://github.com/couchbase/couchbase-lite-ios/compare/1.9.0...2.0.0) \
             which resulted in \
             [1 issue](https://github.com/couchbase/couchbase-lite-ios/issues?milestone=5&state=closed) \
             being closed.\n"
        ));
        assert!(body.contains("__Bugs__\n"));
        assert!(body.contains(
            "- [#42](https://github.com/couchbase/couchbase-lite-ios/issues/42) Fix crash\n"
        ));
    }

    #[test]
    fn test_summary_issues_only() {
        let issues = classify(vec![issue(42, "fix crash", &["bug"], ItemState::Closed)]);
        let body = render_body(&config(), &milestone("2.0.0", ""), &issues, &range(0));
        assert!(body.starts_with(
            "As part of this release we had \
             [1 issue](https://github.com/couchbase/couchbase-lite-ios/issues?milestone=5&state=closed) \
             closed.\n"
        ));
    }

    #[test]
    fn test_summary_commits_only_has_no_issue_clause() {
        let issues = classify(Vec::new());
        let body = render_body(&config(), &milestone("2.0.0", ""), &issues, &range(2));
        assert!(body.starts_with(
            "As part of this release we had \
             [2 commits](https://github.com/couchbase/couchbase-lite-ios/compare/1.9.0...2.0.0).\n"
        ));
        assert!(!body.contains("issue"));
    }

    #[test]
    fn test_summary_empty_when_nothing_happened() {
        let issues = classify(Vec::new());
        let body = render_body(&config(), &milestone("2.0.0", "Notes."), &issues, &range(0));
        assert!(body.starts_with("\nNotes.\n\n"));
    }

    #[test]
    fn test_description_rendered_verbatim() {
        let issues = classify(Vec::new());
        let description = "First line.\n\n*Second* block.";
        let body = render_body(&config(), &milestone("2.0.0", description), &issues, &range(0));
        assert!(body.contains(description));
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        let issues = classify(vec![
            issue(1, "slow query", &["performance"], ItemState::Closed),
            issue(2, "crash on start", &["bug"], ItemState::Closed),
            issue(3, "sync hangs", &["known-issue"], ItemState::Open),
            issue(4, "new index type", &["enhancement"], ItemState::Closed),
        ]);
        let body = render_body(&config(), &milestone("2.0.0", ""), &issues, &range(1));

        let performance = body.find("__Performance Improvements__").unwrap();
        let enhancements = body.find("__Enhancements__").unwrap();
        let bugs = body.find("__Bugs__").unwrap();
        let known = body.find("__Known Issues__").unwrap();
        assert!(performance < enhancements && enhancements < bugs && bugs < known);
    }

    #[test]
    fn test_empty_sections_emit_no_heading() {
        let issues = classify(vec![issue(2, "crash", &["bug"], ItemState::Closed)]);
        let body = render_body(&config(), &milestone("2.0.0", ""), &issues, &range(1));
        assert!(!body.contains("__Enhancements__"));
        assert!(!body.contains("__Known Issues__"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let build = || {
            let issues = classify(vec![issue(42, "fix crash", &["bug"], ItemState::Closed)]);
            render_body(&config(), &milestone("2.0.0", "Desc"), &issues, &range(3))
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fix crash"), "Fix crash");
        assert_eq!(capitalize("Fix crash"), "Fix crash");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair bug"), "Éclair bug");
    }
}
