use super::*;

#[test]
fn missing_or_empty_user_agent_is_unsupported() {
    assert!(!supports_webp(None));
    assert!(!supports_avif(None));
    assert!(!supports_webp(Some("")));
    assert!(!supports_avif(Some("")));
}

#[test]
fn unrecognized_user_agent_is_unsupported() {
    assert!(!supports_webp(Some("SomeBot/1.0")));
    assert!(!supports_avif(Some("SomeBot/1.0")));
    assert!(!supports_webp(Some("curl/8.5.0")));
}

#[test]
fn webp_minimum_versions_are_boundaries() {
    for rule in &WEBP_BROWSER_VERSIONS {
        let at_minimum = format!("{}/{}", rule.token, rule.min_version);
        assert!(
            supports_webp(Some(&at_minimum)),
            "{} should support WebP",
            at_minimum
        );

        if rule.min_version > 0 {
            let below_minimum = format!("{}/{}", rule.token, rule.min_version - 1);
            assert!(
                !supports_webp(Some(&below_minimum)),
                "{} should not support WebP",
                below_minimum
            );
        }
    }
}

#[test]
fn avif_minimum_versions_are_boundaries() {
    for rule in &AVIF_BROWSER_VERSIONS {
        let at_minimum = format!("{}/{}", rule.token, rule.min_version);
        assert!(
            supports_avif(Some(&at_minimum)),
            "{} should support AVIF",
            at_minimum
        );

        let below_minimum = format!("{}/{}", rule.token, rule.min_version - 1);
        assert!(
            !supports_avif(Some(&below_minimum)),
            "{} should not support AVIF",
            below_minimum
        );
    }
}

#[test]
fn token_matching_is_case_sensitive() {
    assert!(!supports_webp(Some("firefox/65")));
    assert!(!supports_avif(Some("chrome/120")));
    assert!(supports_webp(Some("Firefox/65")));
}

#[test]
fn separators_between_token_and_version_are_skipped() {
    assert!(supports_webp(Some("Chrome/32")));
    assert!(supports_webp(Some("Chrome32")));
    assert!(supports_webp(Some("Chrome v32")));
    assert!(supports_webp(Some("Chrome/ v32.0")));
}

#[test]
fn token_without_digits_falls_through_to_later_rules() {
    assert!(!supports_webp(Some("Firefox/xyz")));
    // Chrome fails its version check, but the AppleWebKit token later in
    // the table still matches on its own.
    assert!(supports_webp(Some("Chrome/31 AppleWebKit/605")));
}

#[test]
fn any_qualifying_token_is_sufficient() {
    // Chrome 10 is too old for WebP, but AppleWebKit 605 qualifies.
    let ua = "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 (KHTML, like Gecko) \
              Chrome/10.0 Safari/605.1.15";
    assert!(supports_webp(Some(ua)));
}

#[test]
fn only_the_leading_version_component_is_compared() {
    // 31.9999 must not round up to 32.
    assert!(!supports_webp(Some("Chrome/31.9999")));
    assert!(supports_webp(Some("Chrome/32.0.1700.107")));
}

#[test]
fn chrome_desktop_user_agents() {
    assert!(supports_webp(Some(
        "Mozilla/5.0 (Windows NT 10.0) Chrome/32.0.1700.107"
    )));
    assert!(!supports_webp(Some(
        "Mozilla/5.0 (Windows NT 10.0) Chrome/31.0.1650.63"
    )));

    // Chrome 91: WebP yes, AVIF yes
    let chrome_91 = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
    assert!(supports_webp(Some(chrome_91)));
    assert!(supports_avif(Some(chrome_91)));

    // Chrome 30: neither
    let chrome_30 = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 \
                     (KHTML, like Gecko) Chrome/30.0.1599.101 Safari/537.36";
    assert!(!supports_webp(Some(chrome_30)));
    assert!(!supports_avif(Some(chrome_30)));
}

#[test]
fn firefox_user_agents() {
    // Firefox 89: WebP yes, AVIF no
    let firefox_89 =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0";
    assert!(supports_webp(Some(firefox_89)));
    assert!(!supports_avif(Some(firefox_89)));

    // Firefox 93: both
    let firefox_93 =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:93.0) Gecko/20100101 Firefox/93.0";
    assert!(supports_webp(Some(firefox_93)));
    assert!(supports_avif(Some(firefox_93)));
}

#[test]
fn safari_user_agents() {
    // Safari 16 on WebKit 612: both
    let safari_16 = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/612.1.29 \
                     (KHTML, like Gecko) Version/16.0 Safari/612.1.29";
    assert!(supports_webp(Some(safari_16)));
    assert!(supports_avif(Some(safari_16)));

    // WebKit 605 (Safari 14): WebP only
    let safari_14 = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
                     (KHTML, like Gecko) Version/14.0 Safari/605.1.15";
    assert!(supports_webp(Some(safari_14)));
    assert!(!supports_avif(Some(safari_14)));
}

#[test]
fn extract_leading_version_basic() {
    assert_eq!(extract_leading_version("/32.0.1700"), Some(32));
    assert_eq!(extract_leading_version("32"), Some(32));
    assert_eq!(extract_leading_version(" v32"), Some(32));
    assert_eq!(extract_leading_version(""), None);
    assert_eq!(extract_leading_version("/xyz"), None);
}

#[test]
fn extract_leading_version_leading_zeros() {
    assert_eq!(extract_leading_version("/0032"), Some(32));
    assert_eq!(extract_leading_version("/0"), Some(0));
}

#[test]
fn extract_leading_version_scans_past_separators() {
    // The scan runs to the first digit anywhere in the remainder, not just
    // an adjacent one.
    assert_eq!(extract_leading_version(" (KHTML, like Gecko) 85"), Some(85));
}

#[test]
fn extract_leading_version_saturates_on_huge_runs() {
    assert_eq!(
        extract_leading_version("/99999999999999999999"),
        Some(u32::MAX)
    );
}
