//! Sortable release keys parsed from version strings

use std::cmp::Ordering;

use crate::changelog::text::bare_version;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Number(u64),
    Text(String),
}

/// Chronological sort key for a release version
///
/// `v1.2.0-beta.1+1.21.1` parses into the numeric core `[1, 2, 0]` and the
/// pre-release segments `["beta", 1]`; anything after `+` is ignored. Missing
/// trailing components count as zero, so `1.2` and `1.2.0` compare equal. A
/// pre-release sorts before the release with the same core.
#[derive(Debug, Clone)]
pub struct ReleaseKey {
    core: Vec<u64>,
    pre: Vec<Segment>,
}

impl ReleaseKey {
    /// Parse a version string
    #[must_use]
    pub fn parse(version: &str) -> Self {
        let version = bare_version(version);
        let version = version.split('+').next().unwrap_or(version);
        let (core, pre) = version.split_once('-').unwrap_or((version, ""));

        let core = core.split('.').map(leading_number).collect();
        let pre = pre
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .parse()
                    .map_or_else(|_| Segment::Text(segment.to_lowercase()), Segment::Number)
            })
            .collect();

        Self { core, pre }
    }
}

fn leading_number(component: &str) -> u64 {
    let digits: String = component.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

impl Ord for ReleaseKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.core.len().max(other.core.len());
        for idx in 0..width {
            let left = self.core.get(idx).copied().unwrap_or(0);
            let right = other.core.get(idx).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        match (self.pre.is_empty(), other.pre.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.pre.cmp(&other.pre),
        }
    }
}

impl PartialOrd for ReleaseKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ReleaseKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ReleaseKey {}
