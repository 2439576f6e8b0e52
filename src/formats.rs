use crate::browser_support::{supports_avif, supports_webp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Avif,
    WebP,
    Jpeg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Avif => "avif",
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Avif => "image/avif",
            OutputFormat::WebP => "image/webp",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Determine the best output format for a client based on its User-Agent.
/// AVIF is preferred over WebP for its better compression; JPEG is the
/// universal fallback.
pub fn determine_output_format(user_agent: Option<&str>) -> OutputFormat {
    if supports_avif(user_agent) {
        OutputFormat::Avif
    } else if supports_webp(user_agent) {
        OutputFormat::WebP
    } else {
        OutputFormat::Jpeg
    }
}

/// Formats to try when serving an image, best first. The JPEG fallback is
/// implicit: when no pre-generated variant exists the original file is
/// served as-is.
pub fn format_preference(user_agent: Option<&str>) -> Vec<OutputFormat> {
    let mut formats = Vec::with_capacity(2);
    if supports_avif(user_agent) {
        formats.push(OutputFormat::Avif);
    }
    if supports_webp(user_agent) {
        formats.push(OutputFormat::WebP);
    }
    formats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_chrome_gets_avif() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        assert_eq!(determine_output_format(Some(ua)), OutputFormat::Avif);
        assert_eq!(
            format_preference(Some(ua)),
            vec![OutputFormat::Avif, OutputFormat::WebP]
        );
    }

    #[test]
    fn old_firefox_gets_webp() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) \
                  Gecko/20100101 Firefox/89.0";
        assert_eq!(determine_output_format(Some(ua)), OutputFormat::WebP);
        assert_eq!(format_preference(Some(ua)), vec![OutputFormat::WebP]);
    }

    #[test]
    fn unknown_client_gets_jpeg() {
        assert_eq!(determine_output_format(None), OutputFormat::Jpeg);
        assert_eq!(
            determine_output_format(Some("SomeBot/1.0")),
            OutputFormat::Jpeg
        );
        assert!(format_preference(None).is_empty());
    }

    #[test]
    fn extensions_and_mime_types() {
        assert_eq!(OutputFormat::Avif.extension(), "avif");
        assert_eq!(OutputFormat::WebP.mime_type(), "image/webp");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
    }
}
