//! Plain-text export of a rendered summary

use crate::error::RenderError;
use crate::export::{export_markup_with_options, ExportOptions};
use crate::format::Format;
use crate::render::{RenderOptions, Renderer};

/// Format producing the markdown-like text export
#[derive(Default)]
pub struct TextFormat {
    renderer: Renderer,
    export: ExportOptions,
}

impl TextFormat {
    pub fn new(render: RenderOptions, export: ExportOptions) -> Self {
        TextFormat {
            renderer: Renderer::new(render),
            export,
        }
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Structured plain text reconstructed from the rendered summary"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn convert(&self, summary: &str) -> Result<String, RenderError> {
        let markup = self.renderer.render(summary);
        Ok(export_markup_with_options(&markup, &self.export))
    }
}
