use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

/// Ordering key derived from a milestone title.
///
/// Milestone titles are loose dotted version strings ("1.2", "2.10.3.1"),
/// not semver, so the key is just the leading run of numeric segments.
/// Parsing is total: a title with no leading numeric segment becomes
/// [`MilestoneVersion::Unversioned`], which orders below every real version
/// so malformed titles sink to the bottom of a descending sort.
#[derive(Debug, Clone)]
pub enum MilestoneVersion {
    /// Title did not start with a numeric segment.
    Unversioned,
    /// Leading dot-separated numeric segments, e.g. "2.10.3" -> [2, 10, 3].
    Numbers(Vec<u64>),
}

impl MilestoneVersion {
    /// Extract the version key from a milestone title. Never fails.
    pub fn parse(title: &str) -> Self {
        let re = VERSION_RE
            .get_or_init(|| Regex::new(r"^(\d+(?:\.\d+)*)").expect("version regex is valid"));

        let Some(caps) = re.captures(title.trim()) else {
            return MilestoneVersion::Unversioned;
        };

        let mut segments = Vec::new();
        for part in caps[1].split('.') {
            match part.parse::<u64>() {
                Ok(n) => segments.push(n),
                // Segment too large for u64; keep what parsed so far.
                Err(_) => break,
            }
        }

        if segments.is_empty() {
            MilestoneVersion::Unversioned
        } else {
            MilestoneVersion::Numbers(segments)
        }
    }
}

impl Ord for MilestoneVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        use MilestoneVersion::{Numbers, Unversioned};

        match (self, other) {
            (Unversioned, Unversioned) => Ordering::Equal,
            (Unversioned, Numbers(_)) => Ordering::Less,
            (Numbers(_), Unversioned) => Ordering::Greater,
            (Numbers(a), Numbers(b)) => {
                // Pad the shorter side with zeros so "1.2" == "1.2.0".
                let len = a.len().max(b.len());
                for i in 0..len {
                    let x = a.get(i).copied().unwrap_or(0);
                    let y = b.get(i).copied().unwrap_or(0);
                    match x.cmp(&y) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
        }
    }
}

impl PartialOrd for MilestoneVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MilestoneVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MilestoneVersion {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_numeric_title() {
        assert_eq!(
            MilestoneVersion::parse("2.10.3"),
            MilestoneVersion::Numbers(vec![2, 10, 3])
        );
    }

    #[test]
    fn test_parse_stops_at_non_numeric_tail() {
        assert_eq!(
            MilestoneVersion::parse("1.4 beta"),
            MilestoneVersion::Numbers(vec![1, 4])
        );
    }

    #[test]
    fn test_parse_is_total_for_malformed_titles() {
        assert_eq!(MilestoneVersion::parse("Backlog"), MilestoneVersion::Unversioned);
        assert_eq!(MilestoneVersion::parse(""), MilestoneVersion::Unversioned);
        assert_eq!(MilestoneVersion::parse("v1.2"), MilestoneVersion::Unversioned);
    }

    #[test]
    fn test_trailing_zeros_compare_equal() {
        assert_eq!(MilestoneVersion::parse("1.2"), MilestoneVersion::parse("1.2.0"));
        assert_eq!(MilestoneVersion::parse("1.2.0.0"), MilestoneVersion::parse("1.2"));
    }

    #[test]
    fn test_ordering() {
        assert!(MilestoneVersion::parse("2.0.0") > MilestoneVersion::parse("1.9.9"));
        assert!(MilestoneVersion::parse("2.10.0") > MilestoneVersion::parse("2.9.0"));
        assert!(MilestoneVersion::parse("1.2.1") > MilestoneVersion::parse("1.2"));
    }

    #[test]
    fn test_unversioned_sorts_below_everything() {
        assert!(MilestoneVersion::Unversioned < MilestoneVersion::parse("0.0.0"));
        assert_eq!(MilestoneVersion::Unversioned, MilestoneVersion::Unversioned);
    }

    #[test]
    fn test_huge_segment_does_not_panic() {
        // 30 digits overflows u64; the parse keeps the leading segments.
        let version = MilestoneVersion::parse("1.999999999999999999999999999999");
        assert_eq!(version, MilestoneVersion::Numbers(vec![1]));
    }
}
