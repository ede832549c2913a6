//! Page handlers for serving the application shell

use axum::response::Html;

/// Serve the single-page shell; the client router selects the screen
pub async fn shell() -> Html<&'static str> {
    Html(include_str!("../../templates/shell.html"))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_contains_mount_point() {
        let Html(body) = tokio_test::block_on(shell());
        assert!(body.contains("<div id=\"app\">"));
        assert!(body.contains("AI Vision"));
    }
}
