//! One-shot advisory notices
//!
//! A notice travels with the outcome of a single request: rendered directly
//! into a page, or carried in the query string of a redirect target and
//! rendered once by the page that receives it. Nothing is kept server-side.

use serde::Deserialize;

/// Notice category, used by the presentation layer for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "info" => Some(Self::Info),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Short categorized user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }

    /// Encode as `level=...&notice=...` for a redirect target.
    pub fn to_query(&self) -> String {
        format!(
            "level={}&notice={}",
            self.level.as_str(),
            urlencoding::encode(&self.text)
        )
    }
}

/// Query parameters a list page reads its notice from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticeParams {
    pub level: Option<String>,
    pub notice: Option<String>,
}

impl NoticeParams {
    /// Unknown levels fall back to `info`; a blank text means no notice.
    pub fn into_notice(self) -> Option<Notice> {
        let text = self.notice.filter(|t| !t.trim().is_empty())?;
        let level = self
            .level
            .as_deref()
            .and_then(NoticeLevel::parse)
            .unwrap_or(NoticeLevel::Info);
        Some(Notice::new(level, text))
    }
}
