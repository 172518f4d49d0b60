use crate::models::version::MilestoneVersion;

/// Open/closed lifecycle state shared by milestones and issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Open,
    Closed,
}

impl ItemState {
    /// Map the API's state string; anything that is not "closed" is open.
    pub fn from_api(state: &str) -> Self {
        if state.eq_ignore_ascii_case("closed") {
            ItemState::Closed
        } else {
            ItemState::Open
        }
    }
}

/// A milestone snapshot, fetched read-only for the duration of one run.
#[derive(Debug, Clone)]
pub struct Milestone {
    /// API milestone number, used in the issues-closed link.
    pub number: u64,
    /// Unique within a repository.
    pub title: String,
    /// Free text, may be empty; rendered verbatim into the notes.
    pub description: String,
    pub state: ItemState,
    pub html_url: String,
}

impl Milestone {
    /// Ordering key parsed from the title.
    pub fn version(&self) -> MilestoneVersion {
        MilestoneVersion::parse(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_api() {
        assert_eq!(ItemState::from_api("open"), ItemState::Open);
        assert_eq!(ItemState::from_api("closed"), ItemState::Closed);
        assert_eq!(ItemState::from_api("Closed"), ItemState::Closed);
        // Unknown states degrade to open rather than failing the run.
        assert_eq!(ItemState::from_api("draft"), ItemState::Open);
    }

    #[test]
    fn test_milestone_version_derives_from_title() {
        let milestone = Milestone {
            number: 7,
            title: "2.0.0".to_string(),
            description: String::new(),
            state: ItemState::Open,
            html_url: "https://github.com/couchbase/sync_gateway/milestone/7".to_string(),
        };
        assert_eq!(milestone.version(), MilestoneVersion::parse("2.0"));
    }
}
