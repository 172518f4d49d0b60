//! Issue validation and bucketing by label.

use crate::models::{Issue, ItemState};

/// Issues carrying this label never appear in the notes, even when they
/// also carry a category label.
pub const EXCLUSION_LABEL: &str = "chore";

/// The fixed category taxonomy, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Performance,
    Enhancement,
    Bug,
    KnownIssue,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Performance,
        Category::Enhancement,
        Category::Bug,
        Category::KnownIssue,
    ];

    /// The label name that puts an issue in this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::Enhancement => "enhancement",
            Category::Bug => "bug",
            Category::KnownIssue => "known-issue",
        }
    }

    /// Section heading in the rendered notes.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Performance => "Performance Improvements",
            Category::Enhancement => "Enhancements",
            Category::Bug => "Bugs",
            Category::KnownIssue => "Known Issues",
        }
    }

    /// State an issue must be in to appear under this heading. Known
    /// issues are the ones still open at release time; everything else
    /// lists work that was finished.
    pub fn rendered_state(self) -> ItemState {
        match self {
            Category::KnownIssue => ItemState::Open,
            _ => ItemState::Closed,
        }
    }
}

/// The retained issue set for one milestone.
#[derive(Debug, Default)]
pub struct ClassifiedIssues {
    retained: Vec<Issue>,
}

impl ClassifiedIssues {
    /// Number of retained issues. This is the count the summary sentence
    /// reports, independent of which sections the issues land in.
    pub fn count(&self) -> usize {
        self.retained.len()
    }

    /// Issues rendered under a category, enforcing both the label and the
    /// section's state. An issue matching several category labels shows up
    /// in every matching section; that duplication is part of the output
    /// contract.
    pub fn section(&self, category: Category) -> Vec<&Issue> {
        self.retained
            .iter()
            .filter(|issue| {
                issue.state == category.rendered_state() && issue.has_label(category.label())
            })
            .collect()
    }
}

/// Validate and retain the issues that belong in the notes.
pub fn classify(issues: Vec<Issue>) -> ClassifiedIssues {
    ClassifiedIssues {
        retained: issues.into_iter().filter(is_valid).collect(),
    }
}

fn is_valid(issue: &Issue) -> bool {
    let mut category_labels = 0;
    for label in &issue.labels {
        if label == EXCLUSION_LABEL {
            return false;
        }
        if Category::ALL.iter().any(|category| category.label() == label) {
            category_labels += 1;
        }
    }
    category_labels > 0 && !issue.is_pull_request
}
