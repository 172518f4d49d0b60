//! Target and predecessor lookup among the repository's milestones.

use super::NotesError;
use crate::models::{Milestone, MilestoneVersion};

/// Locate the milestone whose title matches exactly. Absence is fatal and
/// surfaced to the operator verbatim.
pub fn target<'a>(milestones: &'a [Milestone], title: &str) -> Result<&'a Milestone, NotesError> {
    milestones
        .iter()
        .find(|milestone| milestone.title == title)
        .ok_or_else(|| NotesError::MilestoneNotFound(title.to_string()))
}

/// The milestone immediately preceding `target` by version order, or `None`
/// when the target is the earliest.
///
/// Milestones sharing a version key (renamed or duplicated entries) are
/// collapsed to one representative so they are never treated as distinct
/// predecessors. A target with an unversioned title has no predecessor.
pub fn previous<'a>(milestones: &'a [Milestone], target: &Milestone) -> Option<&'a Milestone> {
    let target_version = target.version();

    let mut ordered: Vec<(MilestoneVersion, &Milestone)> = milestones
        .iter()
        .map(|milestone| (milestone.version(), milestone))
        .collect();
    ordered.sort_by(|a, b| b.0.cmp(&a.0));
    ordered.dedup_by(|a, b| a.0 == b.0);

    ordered
        .into_iter()
        .skip_while(|(version, _)| *version >= target_version)
        .map(|(_, milestone)| milestone)
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemState;

    fn milestone(number: u64, title: &str) -> Milestone {
        Milestone {
            number,
            title: title.to_string(),
            description: String::new(),
            state: ItemState::Closed,
            html_url: format!("https://github.com/couchbase/sync_gateway/milestone/{number}"),
        }
    }

    #[test]
    fn test_target_exact_match() {
        let milestones = vec![milestone(1, "1.0.0"), milestone(2, "2.0.0")];
        assert_eq!(target(&milestones, "2.0.0").unwrap().number, 2);
    }

    #[test]
    fn test_target_missing_is_fatal() {
        let milestones = vec![milestone(1, "1.0.0")];
        let err = target(&milestones, "9.9.9").unwrap_err();
        assert_eq!(err.to_string(), "Could not find milestone for '9.9.9'.");
    }

    #[test]
    fn test_previous_picks_next_lower_version() {
        let milestones = vec![
            milestone(1, "1.8.0"),
            milestone(2, "1.9.0"),
            milestone(3, "2.0.0"),
        ];
        let previous = previous(&milestones, &milestone(3, "2.0.0")).unwrap();
        assert_eq!(previous.title, "1.9.0");
    }

    #[test]
    fn test_previous_none_for_earliest() {
        let milestones = vec![milestone(1, "1.0.0"), milestone(2, "2.0.0")];
        assert!(previous(&milestones, &milestone(1, "1.0.0")).is_none());
    }

    #[test]
    fn test_previous_skips_duplicate_versions() {
        // "2.0" and "2.0.0" share a version key; neither may be chosen as
        // the predecessor of the other.
        let milestones = vec![
            milestone(1, "1.9.0"),
            milestone(2, "2.0"),
            milestone(3, "2.0.0"),
        ];
        let previous = previous(&milestones, &milestone(3, "2.0.0")).unwrap();
        assert_eq!(previous.title, "1.9.0");
    }

    #[test]
    fn test_previous_is_strictly_lower() {
        let milestones = vec![
            milestone(1, "1.9.0"),
            milestone(2, "2.0.0"),
            milestone(3, "2.1.0"),
        ];
        let target = milestone(2, "2.0.0");
        let previous = previous(&milestones, &target).unwrap();
        assert!(previous.version() < target.version());
    }

    #[test]
    fn test_unversioned_target_has_no_predecessor() {
        let milestones = vec![milestone(1, "1.0.0"), milestone(2, "Backlog")];
        assert!(previous(&milestones, &milestone(2, "Backlog")).is_none());
    }

    #[test]
    fn test_unversioned_entries_sink_below_versions() {
        let milestones = vec![
            milestone(1, "Backlog"),
            milestone(2, "1.0.0"),
            milestone(3, "1.1.0"),
        ];
        let previous = previous(&milestones, &milestone(3, "1.1.0")).unwrap();
        assert_eq!(previous.title, "1.0.0");
    }
}
