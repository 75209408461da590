//! Display unit handed to the messaging platform.
//!
//! The JSON shape matches a Discord embed object so a bot framework can
//! forward a serialized `DisplayUnit` without translation. Limits below are
//! the platform's; the builder truncates instead of failing.

use serde::{Deserialize, Serialize};

pub const EMBED_TITLE_LIMIT: usize = 256;
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;
pub const EMBED_FIELD_NAME_LIMIT: usize = 256;
pub const EMBED_FIELD_VALUE_LIMIT: usize = 1024;
pub const EMBED_FOOTER_LIMIT: usize = 2048;
pub const EMBED_MAX_FIELDS: usize = 25;

const ELLIPSIS: &str = "...";
// Discord rejects empty field values.
const EMPTY_FIELD_PLACEHOLDER: &str = "\u{200b}";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUnit {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl DisplayUnit {
    pub fn new(title: impl AsRef<str>) -> Self {
        Self {
            title: truncate_with_ellipsis(title.as_ref(), EMBED_TITLE_LIMIT),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(truncate_with_ellipsis(
            description.as_ref(),
            EMBED_DESCRIPTION_LIMIT,
        ));
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color & 0x00ff_ffff);
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Appends a field; fields past `EMBED_MAX_FIELDS` are dropped.
    pub fn field(mut self, name: impl AsRef<str>, value: impl AsRef<str>, inline: bool) -> Self {
        if self.fields.len() >= EMBED_MAX_FIELDS {
            return self;
        }

        let value = value.as_ref();
        let value = if value.trim().is_empty() {
            EMPTY_FIELD_PLACEHOLDER.to_string()
        } else {
            truncate_with_ellipsis(value, EMBED_FIELD_VALUE_LIMIT)
        };

        self.fields.push(EmbedField {
            name: truncate_with_ellipsis(name.as_ref(), EMBED_FIELD_NAME_LIMIT),
            value,
            inline,
        });
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(EmbedMedia { url: url.into() });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(EmbedMedia { url: url.into() });
        self
    }

    pub fn footer(mut self, text: impl AsRef<str>) -> Self {
        self.footer = Some(EmbedFooter {
            text: truncate_with_ellipsis(text.as_ref(), EMBED_FOOTER_LIMIT),
        });
        self
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|media| media.url.as_str())
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_ref().map(|media| media.url.as_str())
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out = text.chars().take(keep).collect::<String>();
    out.push_str(&ELLIPSIS[..max_chars.min(ELLIPSIS.len())]);
    out
}
