use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal palette. `Red` is the first value; sessions start in `Green`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Red,
    #[default]
    Green,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Red,
        }
    }

    /// Resolves the argument of `theme <value>`: anything but `green` selects `Red`.
    #[must_use]
    pub fn from_argument(argument: &str) -> Self {
        if argument == "green" { Self::Green } else { Self::Red }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the session's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Loaded from `GET /api/portfolio`; the session is API-connected.
    Api,
    /// The bundled static copy.
    Bundled,
}

impl DataSource {
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Api)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Api => "Backend API",
            Self::Bundled => "Static Data (Fallback)",
        }
    }
}
