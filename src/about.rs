//! Product identity: name, version, copyright and homepage

use std::fmt;

use serde::Serialize;

pub const PROJECT: &str = "FauxBase";
pub const APP_NAME: &str = "FauxBase";
pub const API_NAME: &str = "FauxBase API";
pub const VERSION: &str = "0.0.1";
pub const URL: &str = "https://github.com/ytjohn/fauxbase";
pub const COPYRIGHT: &str = "© 2025 ytjohn. Licensed under the MIT License.";

/// Version record for structured output.
///
/// Serializes with exactly four keys: `version`, `appName`, `copyright`, `url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub version: &'static str,
    pub app_name: &'static str,
    pub copyright: &'static str,
    pub url: &'static str,
}

impl Info {
    pub const CURRENT: Info = Info {
        version: VERSION,
        app_name: APP_NAME,
        copyright: COPYRIGHT,
        url: URL,
    };

    pub fn current() -> &'static Info {
        &Self::CURRENT
    }

    /// Compact JSON, keys in declaration order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.app_name, self.version)?;
        writeln!(f, "{}", self.copyright)?;
        write!(f, "{}", self.url)
    }
}
