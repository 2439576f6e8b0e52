//! WebP and AVIF support detection from User-Agent strings.
//!
//! Browsers do not advertise image format support consistently in the
//! `Accept` header, so format selection falls back to identifying the
//! browser and its version from the `User-Agent` header and looking it up
//! against known minimum versions.

#[cfg(test)]
mod tests;

/// A browser identified by a literal token in the User-Agent string,
/// together with the minimum major version at which it supports a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserVersionRule {
    pub token: &'static str,
    pub min_version: u32,
}

impl BrowserVersionRule {
    const fn new(token: &'static str, min_version: u32) -> Self {
        Self { token, min_version }
    }
}

/// Minimum browser versions with WebP support.
pub const WEBP_BROWSER_VERSIONS: [BrowserVersionRule; 8] = [
    BrowserVersionRule::new("Firefox", 65),
    BrowserVersionRule::new("Chrome", 32),
    BrowserVersionRule::new("Edge", 18),
    BrowserVersionRule::new("AppleWebKit", 605), // Safari 14
    BrowserVersionRule::new("OPR", 19),
    BrowserVersionRule::new("UCBrowser", 12),
    BrowserVersionRule::new("SamsungBrowser", 4),
    BrowserVersionRule::new("QQBrowser", 10),
];

/// Minimum browser versions with AVIF support.
pub const AVIF_BROWSER_VERSIONS: [BrowserVersionRule; 6] = [
    BrowserVersionRule::new("Firefox", 93),
    BrowserVersionRule::new("Chrome", 85),
    BrowserVersionRule::new("Edge", 85),
    BrowserVersionRule::new("AppleWebKit", 612), // Safari 16 (macOS 12.3+, iOS 15.4+)
    BrowserVersionRule::new("OPR", 71),
    BrowserVersionRule::new("SamsungBrowser", 14),
];

/// Returns whether the browser identified by `user_agent` can decode WebP.
///
/// A missing, empty, or unrecognized User-Agent yields `false`; untrusted
/// header content never produces an error.
pub fn supports_webp(user_agent: Option<&str>) -> bool {
    check_browser_support(user_agent, &WEBP_BROWSER_VERSIONS)
}

/// Returns whether the browser identified by `user_agent` can decode AVIF.
///
/// A missing, empty, or unrecognized User-Agent yields `false`; untrusted
/// header content never produces an error.
pub fn supports_avif(user_agent: Option<&str>) -> bool {
    check_browser_support(user_agent, &AVIF_BROWSER_VERSIONS)
}

/// Checks a User-Agent string against a table of browser version rules.
///
/// A rule matches when its token occurs anywhere in the string (first
/// occurrence, case-sensitive, no word-boundary requirement) and the first
/// run of digits after that token parses to at least the rule's minimum
/// version. The result is `true` if any rule matches; a rule that fails the
/// version check does not stop later rules from matching, since a User-Agent
/// routinely carries several browser tokens.
fn check_browser_support(user_agent: Option<&str>, rules: &[BrowserVersionRule]) -> bool {
    let Some(user_agent) = user_agent else {
        return false;
    };
    if user_agent.is_empty() {
        return false;
    }

    for rule in rules {
        if let Some(position) = user_agent.find(rule.token) {
            let remainder = &user_agent[position + rule.token.len()..];
            if let Some(version) = extract_leading_version(remainder)
                && version >= rule.min_version
            {
                return true;
            }
        }
    }

    false
}

/// Extracts the first run of ASCII digits in `remainder` as a decimal
/// integer, skipping any non-digit separators before it.
///
/// Only the leading numeric component of a version is considered, so
/// "85.0.4183" yields 85. Returns `None` when no digit occurs at all.
/// Saturates instead of overflowing on absurdly long digit runs.
fn extract_leading_version(remainder: &str) -> Option<u32> {
    let bytes = remainder.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut version: u32 = 0;
    for &byte in &bytes[start..] {
        if !byte.is_ascii_digit() {
            break;
        }
        version = version
            .saturating_mul(10)
            .saturating_add(u32::from(byte - b'0'));
    }

    Some(version)
}
