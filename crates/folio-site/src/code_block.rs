//! Code block rendering.
//!
//! Code is HTML-escaped and tagged with a `language-*` class. Languages
//! outside [`SUPPORTED_LANGUAGES`] render as `plaintext`.

use folio_topology::Palette;
use folio_view::svg::escape;
use tracing::warn;

/// Languages that keep their own class.
pub const SUPPORTED_LANGUAGES: [&str; 7] = [
    "python",
    "rust",
    "typescript",
    "javascript",
    "bash",
    "json",
    "plaintext",
];

/// Resolve a requested language, falling back to `plaintext`.
pub fn resolve_language(language: &str) -> &'static str {
    let wanted = language.trim().to_ascii_lowercase();
    match SUPPORTED_LANGUAGES.into_iter().find(|l| *l == wanted) {
        Some(lang) => lang,
        None => {
            warn!(language, "unsupported code block language, using plaintext");
            "plaintext"
        }
    }
}

/// Render a code block.
pub fn render(code: &str, language: &str, palette: Palette) -> String {
    let lang = resolve_language(language);
    format!(
        r#"<pre class="code-block" data-language="{lang}" style="background-color:{bg};color:{fg}"><code class="language-{lang}">{code}</code></pre>"#,
        bg = palette.surface,
        fg = palette.text_primary,
        code = escape(code),
    )
}
