use std::fmt;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::OuiError;

/// Six uppercase hex digits identifying a MAC vendor prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment(String);

impl Assignment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Assignment {
    type Err = OuiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_uppercase();
        let is_valid = normalized.len() == 6
            && normalized
                .chars()
                .all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch));
        if !is_valid {
            return Err(OuiError::InvalidAssignment(value.to_string()));
        }
        Ok(Self(normalized))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OuiEntry {
    pub assignment: Assignment,
    pub org: String,
}

impl OuiEntry {
    pub fn new(assignment: Assignment, org: impl Into<String>) -> Self {
        Self {
            assignment,
            org: org.into(),
        }
    }
}

/// Layout of the source CSV, detected from its header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// `assignment,org`
    Compact,
    /// `Registry,Assignment,Organization Name,Organization Address`
    IeeeFull,
}

impl InputShape {
    pub fn detect(header: &StringRecord) -> Self {
        let mut cells = header.iter().map(|cell| cell.trim().to_lowercase());
        let first = cells.next();
        let second = cells.next();
        match (first.as_deref(), second.as_deref()) {
            (Some("assignment"), Some("org")) => InputShape::Compact,
            _ => InputShape::IeeeFull,
        }
    }

    pub fn min_columns(self) -> usize {
        match self {
            InputShape::Compact => 2,
            InputShape::IeeeFull => 3,
        }
    }

    pub fn assignment_column(self) -> usize {
        match self {
            InputShape::Compact => 0,
            InputShape::IeeeFull => 1,
        }
    }

    pub fn org_column(self) -> usize {
        match self {
            InputShape::Compact => 1,
            InputShape::IeeeFull => 2,
        }
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputShape::Compact => write!(f, "compact"),
            InputShape::IeeeFull => write!(f, "ieee-full"),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_assignment_normalizes_case_and_whitespace() {
        let assignment: Assignment = "  aabbcc ".parse().unwrap();
        assert_eq!(assignment.as_str(), "AABBCC");
    }

    #[test]
    fn parse_assignment_rejects_separators() {
        let err = "  aa:bb:cc ".parse::<Assignment>().unwrap_err();
        assert_matches!(err, OuiError::InvalidAssignment(_));
    }

    #[test]
    fn detect_compact_header() {
        let header = StringRecord::from(vec![" Assignment ", "ORG"]);
        assert_eq!(InputShape::detect(&header), InputShape::Compact);
    }

    #[test]
    fn detect_ieee_header() {
        let header = StringRecord::from(vec![
            "Registry",
            "Assignment",
            "Organization Name",
            "Organization Address",
        ]);
        assert_eq!(InputShape::detect(&header), InputShape::IeeeFull);
    }

    #[test]
    fn single_cell_header_is_ieee() {
        let header = StringRecord::from(vec!["assignment"]);
        assert_eq!(InputShape::detect(&header), InputShape::IeeeFull);
    }
}
