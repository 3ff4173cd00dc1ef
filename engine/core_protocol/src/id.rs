// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// The LanguageId enum may be extended with additional languages, such as:
// German,
// Japanese,
// Portuguese,

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum LanguageId {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
}

impl LanguageId {
    /// Picks a language from a tag like `"es-MX"` or `"fr_CA"`, defaulting to English.
    pub fn from_tag(tag: &str) -> Self {
        tag.split(['-', '_'])
            .next()
            .and_then(|primary| primary.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for LanguageId {
    type Err = ();

    /// Parses a primary language subtag, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "en" => Self::English,
            "es" => Self::Spanish,
            "fr" => Self::French,
            _ => return Err(()),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::id::LanguageId;

    #[test]
    fn from_tag() {
        assert_eq!(LanguageId::from_tag("es"), LanguageId::Spanish);
        assert_eq!(LanguageId::from_tag("es-MX"), LanguageId::Spanish);
        assert_eq!(LanguageId::from_tag("fr_CA"), LanguageId::French);
        assert_eq!(LanguageId::from_tag("FR-ca"), LanguageId::French);
        assert_eq!(LanguageId::from_tag("en-US"), LanguageId::English);
        assert_eq!(LanguageId::from_tag("xx"), LanguageId::English);
        assert_eq!(LanguageId::from_tag(""), LanguageId::English);
    }
}
