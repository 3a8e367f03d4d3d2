use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use folio_models::theme::{ColorMode, ThemePreference};

pub const THEME_COOKIE: &str = "theme";
pub const PREFERS_COLOR_SCHEME_HEADER: &str = "sec-ch-prefers-color-scheme";

/// The theme the browser announced with the `theme` cookie and the
/// `Sec-CH-Prefers-Color-Scheme` client hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeHint {
    pub theme: ThemePreference,
    pub color_mode: ColorMode,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ThemeHint {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

impl ThemeHint {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let stored = stored_theme(headers);
        let prefers_dark = headers
            .get(PREFERS_COLOR_SCHEME_HEADER)
            .and_then(|x| x.to_str().ok())
            .is_some_and(|x| x.trim().trim_matches('"') == "dark");

        Self {
            theme: stored
                .as_deref()
                .and_then(|x| x.parse().ok())
                .unwrap_or_default(),
            color_mode: ColorMode::resolve(stored.as_deref(), prefers_dark),
        }
    }
}

fn stored_theme(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|x| x.to_str().ok())
        .flat_map(|x| x.split(';'))
        .filter_map(|x| x.trim().split_once('='))
        .find(|&(name, _)| name == THEME_COOKIE)
        .map(|(_, value)| value.trim().into())
}
