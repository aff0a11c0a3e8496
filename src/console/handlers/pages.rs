//! Page shells for the console. Each page is an empty document the front-end
//! bundle mounts into; data is fetched client-side through the session API.

use crate::console::guard::GuardConfig;
use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Redirect},
};
use std::sync::Arc;

/// `/` has no content of its own.
pub async fn root(State(config): State<Arc<GuardConfig>>) -> impl IntoResponse {
    Redirect::temporary(config.landing_path())
}

pub async fn login() -> Html<String> {
    Html(shell("Sign in", "login"))
}

/// Shell for any console section, titled after the first path segment.
pub async fn section(uri: Uri) -> Html<String> {
    let section = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    Html(shell(&title(section), section))
}

fn title(section: &str) -> String {
    section
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell(title: &str, page: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title} | Paydesk</title>\n</head>\n<body>\n<div id=\"app\" data-page=\"{page}\"></div>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_the_section_name() {
        assert_eq!(title("time-entries"), "Time Entries");
        assert_eq!(title("payroll"), "Payroll");
        assert_eq!(title(""), "");
    }

    #[tokio::test]
    async fn section_shell_uses_first_segment() {
        let Html(body) = section(Uri::from_static("/employees/EMP001")).await;
        assert!(body.contains("<title>Employees | Paydesk</title>"));
        assert!(body.contains("data-page=\"employees\""));
    }
}
