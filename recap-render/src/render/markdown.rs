//! Base markdown conversion (comrak, CommonMark)

use comrak::{markdown_to_html, ComrakOptions};

use super::RenderOptions;

fn comrak_options(options: &RenderOptions) -> ComrakOptions<'static> {
    let mut comrak = ComrakOptions::default();
    comrak.extension.autolink = options.autolink;
    comrak.render.hardbreaks = options.hard_breaks;
    // Raw HTML (e.g. <details>) reaches the sanitizer, which has the final say.
    comrak.render.unsafe_ = true;
    comrak
}

/// Convert preprocessed summary text to unsanitized markup.
pub fn markdown_to_markup(text: &str, options: &RenderOptions) -> String {
    markdown_to_html(text, &comrak_options(options))
}
