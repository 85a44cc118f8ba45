//! The closed set of component categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// UI role of a component.
///
/// Serialised as its kebab-case tag (`form-inputs`, `data-display`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Controls that capture user input (buttons, text fields, toggles).
    FormInputs,
    /// Structural containers (stacks, grids, cards).
    Layout,
    /// Read-only presentation of data (tables, lists, badges).
    DataDisplay,
    /// Status and response surfaces (alerts, toasts, spinners).
    Feedback,
    /// Moving between screens or sections (tabs, breadcrumbs).
    Navigation,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::FormInputs,
        Self::Layout,
        Self::DataDisplay,
        Self::Feedback,
        Self::Navigation,
    ];

    /// Returns the wire tag for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FormInputs => "form-inputs",
            Self::Layout => "layout",
            Self::DataDisplay => "data-display",
            Self::Feedback => "feedback",
            Self::Navigation => "navigation",
        }
    }

    /// Returns the comma-separated list of valid tags, for error messages.
    #[must_use]
    pub fn valid_tags() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Parses an exact wire tag. Tags are lowercase; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        let err = "widgets".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCategory {
                value: "widgets".to_string()
            }
        );
        assert!("Form-Inputs".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Category::DataDisplay).unwrap();
        assert_eq!(json, r#""data-display""#);

        let parsed: Category = serde_json::from_str(r#""form-inputs""#).unwrap();
        assert_eq!(parsed, Category::FormInputs);
    }

    #[test]
    fn valid_tags_lists_everything() {
        let tags = Category::valid_tags();
        assert_eq!(
            tags,
            "form-inputs, layout, data-display, feedback, navigation"
        );
    }
}
