//! Shared helpers for the integration tests.

use recap_render::timestamps::TIMESTAMP_LINK_CLASSES;
use recap_render::Renderer;

pub fn render(input: &str) -> String {
    Renderer::default().render(input)
}

/// The exact anchor markup produced for a timestamp.
pub fn timestamp_anchor(seconds: u64, text: &str) -> String {
    format!(
        "<a href=\"javascript:void(0)\" data-seconds=\"{seconds}\" class=\"{TIMESTAMP_LINK_CLASSES}\">{text}</a>"
    )
}
