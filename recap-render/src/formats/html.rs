//! Sanitized display markup

use crate::error::RenderError;
use crate::format::Format;
use crate::render::{RenderOptions, Renderer};

/// Format producing the sanitized markup fragment
#[derive(Default)]
pub struct HtmlFormat {
    renderer: Renderer,
}

impl HtmlFormat {
    pub fn new(options: RenderOptions) -> Self {
        HtmlFormat {
            renderer: Renderer::new(options),
        }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Sanitized HTML fragment for display"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn convert(&self, summary: &str) -> Result<String, RenderError> {
        Ok(self.renderer.render(summary))
    }
}
