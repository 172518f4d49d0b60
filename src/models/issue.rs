use crate::models::milestone::ItemState;

/// An issue snapshot attached to the target milestone.
#[derive(Debug, Clone)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: ItemState,
    /// Label names carried by the issue; order is not significant.
    pub labels: Vec<String>,
    /// True when the API payload carries a pull-request association.
    pub is_pull_request: bool,
}

impl Issue {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }
}
