use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of portfolio section kinds. At most one section exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    About,
    Certifications,
    Contact,
    Education,
    Experience,
    Links,
    Projects,
    Skills,
    Volunteering,
}

impl SectionKind {
    /// All kinds, ordered by name.
    pub const ALL: [Self; 9] = [
        Self::About,
        Self::Certifications,
        Self::Contact,
        Self::Education,
        Self::Experience,
        Self::Links,
        Self::Projects,
        Self::Skills,
        Self::Volunteering,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Links => "links",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Volunteering => "volunteering",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known section kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown portfolio section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionKind {
    type Err = UnknownSection;

    /// Matches exact lower-case names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// Review state of a contact submission.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Unread,
    Read,
    Replied,
}

impl ContactStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(Self::Unread),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            other => Err(other.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_their_names() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>(), Ok(kind));
        }
    }

    #[test]
    fn kind_names_are_case_sensitive() {
        assert!("About".parse::<SectionKind>().is_err());
        assert!("resume".parse::<SectionKind>().is_err());
    }

    #[test]
    fn kinds_are_listed_in_name_order() {
        let mut sorted = SectionKind::ALL;
        sorted.sort_by_key(|kind| kind.as_str());
        assert_eq!(sorted, SectionKind::ALL);
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!("replied".parse::<ContactStatus>(), Ok(ContactStatus::Replied));
        assert_eq!("archived".parse::<ContactStatus>(), Err("archived".to_owned()));
        assert_eq!(ContactStatus::default(), ContactStatus::Unread);
    }
}
