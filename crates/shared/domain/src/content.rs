//! Typed view of the portfolio content returned by `GET /api/portfolio`.
//!
//! Every section is optional and every field defaults, so partial or extended
//! payloads still decode. The server itself treats section payloads as opaque
//! JSON; only the terminal client reads them through these types.

use serde::{Deserialize, Serialize};

/// Static copy of the portfolio, in the same shape as the API's `data` field.
pub const BUNDLED_PORTFOLIO: &str = include_str!("../assets/portfolio.json");

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentBundle {
    pub about: Option<About>,
    pub skills: Option<Skills>,
    pub projects: Option<Vec<Project>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub certifications: Option<Vec<Certification>>,
    pub volunteering: Option<Vec<Volunteering>>,
    pub contact: Option<ContactInfo>,
    pub links: Option<Vec<Link>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub contact: ContactInfo,
    pub avatar: Avatar,
    pub about: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Avatar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

impl Avatar {
    /// True when either an image or initials are available.
    #[must_use]
    pub fn is_present(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        filled(&self.image) || filled(&self.initials)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub design: Vec<String>,
    pub development: Vec<String>,
    pub concepts: Vec<String>,
    pub frameworks: Vec<String>,
}

impl Skills {
    /// Every skill in category order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.design
            .iter()
            .chain(&self.development)
            .chain(&self.concepts)
            .chain(&self.frameworks)
            .map(String::as_str)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub desc: String,
    pub url: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub platform: String,
    pub year: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volunteering {
    pub role: String,
    pub company: String,
    pub work: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub icon: String,
    pub href: String,
}
