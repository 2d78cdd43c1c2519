//! Handler outcomes
//!
//! Every page handler answers with either a rendered page or a redirect.
//! A redirect may carry a one-shot `Notice`, encoded into the target URL so
//! the next page renders it exactly once.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::models::Notice;

#[derive(Debug)]
pub enum Outcome {
    Page { status: StatusCode, html: String },
    Redirect { to: &'static str, notice: Option<Notice> },
}

impl Outcome {
    pub fn page(html: Html<String>) -> Self {
        Self::page_with_status(StatusCode::OK, html)
    }

    pub fn page_with_status(status: StatusCode, html: Html<String>) -> Self {
        Self::Page {
            status,
            html: html.0,
        }
    }

    pub fn redirect(to: &'static str) -> Self {
        Self::Redirect { to, notice: None }
    }

    /// Attach a notice to a redirect. Pages render their notice directly.
    pub fn with_notice(self, notice: Notice) -> Self {
        match self {
            Self::Redirect { to, .. } => Self::Redirect {
                to,
                notice: Some(notice),
            },
            page => page,
        }
    }

    /// Redirect target including the encoded notice, if any.
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Redirect { to, notice } => Some(target(to, notice.as_ref())),
            Self::Page { .. } => None,
        }
    }
}

fn target(to: &str, notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => format!("{}?{}", to, notice.to_query()),
        None => to.to_string(),
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Self::Page { status, html } => (status, Html(html)).into_response(),
            Self::Redirect { to, notice } => {
                Redirect::to(&target(to, notice.as_ref())).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn redirect_carries_notice() {
        let response = Outcome::redirect("/courses")
            .with_notice(Notice::info("Course deleted successfully!"))
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            "/courses?level=info&notice=Course%20deleted%20successfully%21"
        );
    }

    #[test]
    fn plain_redirect() {
        let response = Outcome::redirect("/view").into_response();
        assert_eq!(response.headers()[LOCATION], "/view");
    }

    #[test]
    fn page_ignores_notice_and_keeps_status() {
        let outcome = Outcome::page_with_status(StatusCode::CONFLICT, Html("<p>x</p>".into()))
            .with_notice(Notice::error("ignored"));

        assert!(outcome.location().is_none());
        assert_eq!(outcome.into_response().status(), StatusCode::CONFLICT);
    }
}
