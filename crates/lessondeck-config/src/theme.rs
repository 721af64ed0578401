//! Site theme preference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color theme applied to generated pages via the `data-theme`
/// attribute. Defaults to light, matching the legacy site's stored
/// preference default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value placed in the page's `data-theme` attribute.
    pub fn attr(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        #[derive(Deserialize)]
        struct W {
            theme: Theme,
        }
        let w: W = toml::from_str(r#"theme = "dark""#).unwrap();
        assert_eq!(w.theme, Theme::Dark);
    }

    #[test]
    fn test_attr() {
        assert_eq!(Theme::Dark.attr(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
