const REQUIRED_SCHEME: &str = "https://";
const RECOGNIZED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageUrlConcern {
    SurroundingWhitespace,
    SchemeInvalid,
    ExtensionUnrecognized,
}

impl ImageUrlConcern {
    pub(crate) const fn code(self) -> &'static str {
        match self {
            Self::SurroundingWhitespace => "image_url_whitespace",
            Self::SchemeInvalid => "image_url_scheme_invalid",
            Self::ExtensionUnrecognized => "image_url_extension_unrecognized",
        }
    }

    pub(crate) const fn message(self) -> &'static str {
        match self {
            Self::SurroundingWhitespace => {
                "image url has leading or trailing whitespace; it is sent exactly as written"
            }
            Self::SchemeInvalid => "image url should start with https:// or it will not render",
            Self::ExtensionUnrecognized => {
                "image url does not end in png, jpg, jpeg, gif or webp; verify it is a direct image link"
            }
        }
    }
}

/// An empty URL means "no image" and raises no concerns. Scheme and
/// extension are judged on the trimmed text so padding is reported once.
pub(crate) fn image_url_concerns(url: &str) -> Vec<ImageUrlConcern> {
    if url.is_empty() {
        return Vec::new();
    }

    let trimmed = url.trim();
    let mut concerns = Vec::new();
    if trimmed.len() != url.len() {
        concerns.push(ImageUrlConcern::SurroundingWhitespace);
    }
    if trimmed.is_empty() {
        return concerns;
    }
    if !has_https_scheme(trimmed) {
        concerns.push(ImageUrlConcern::SchemeInvalid);
    }
    if !has_recognized_image_extension(trimmed) {
        concerns.push(ImageUrlConcern::ExtensionUnrecognized);
    }
    concerns
}

pub(crate) fn has_https_scheme(url: &str) -> bool {
    url.len() > REQUIRED_SCHEME.len()
        && url
            .get(..REQUIRED_SCHEME.len())
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case(REQUIRED_SCHEME))
}

pub(crate) fn has_recognized_image_extension(url: &str) -> bool {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let after_scheme = path.split_once("://").map_or(path, |(_, rest)| rest);

    let Some((_, last_segment)) = after_scheme.rsplit_once('/') else {
        return false;
    };
    let Some((_, extension)) = last_segment.rsplit_once('.') else {
        return false;
    };

    RECOGNIZED_IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_direct_https_image_link() {
        assert!(image_url_concerns("https://i.imgur.com/gilgamesh.png").is_empty());
        assert!(image_url_concerns("HTTPS://cdn.example.com/a/b/Karna.WEBP").is_empty());
    }

    #[test]
    fn ignores_query_and_fragment_when_checking_extension() {
        assert!(has_recognized_image_extension(
            "https://cdn.discordapp.com/attachments/1/2/merlin.jpeg?ex=abc&is=def"
        ));
        assert!(has_recognized_image_extension("https://example.com/x.gif#top"));
    }

    #[test]
    fn flags_plain_http_and_page_links() {
        assert_eq!(
            image_url_concerns("http://imgur.com/gallery/abc"),
            vec![
                ImageUrlConcern::SchemeInvalid,
                ImageUrlConcern::ExtensionUnrecognized
            ]
        );
    }

    #[test]
    fn dot_in_host_is_not_an_extension() {
        assert!(!has_recognized_image_extension("https://images.png"));
        assert!(!has_https_scheme("https://"));
    }

    #[test]
    fn empty_url_has_no_concerns() {
        assert!(image_url_concerns("").is_empty());
    }

    #[test]
    fn flags_padding_without_double_reporting() {
        assert_eq!(
            image_url_concerns(" https://i.imgur.com/gilgamesh.png "),
            vec![ImageUrlConcern::SurroundingWhitespace]
        );
        assert_eq!(image_url_concerns("   "), vec![ImageUrlConcern::SurroundingWhitespace]);
    }
}
