//! HTML span markup
//!
//! Each classified span becomes `<span class="...">text</span>`; spans
//! without a class are written as escaped text only.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::config::HighlightConfig;
use crate::models::{Category, Span};

/// Escape text for embedding in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Category to class name lookup built from a [`HighlightConfig`]
#[derive(Clone, Debug)]
pub struct ClassMap {
    classes: HashMap<Category, String>,
    slur_level_prefix: Option<String>,
    slur_palette_size: usize,
}

impl ClassMap {
    pub fn new(config: &HighlightConfig) -> Self {
        let names = &config.classes;
        let entries = [
            (Category::Comment, &names.comment),
            (Category::MetaKey, &names.meta_key),
            (Category::MetaValue, &names.meta_value),
            (Category::Bar, &names.bar),
            (Category::Accidental, &names.accidental),
            (Category::Slur, &names.slur),
            (Category::Note, &names.note),
            (Category::Duration, &names.duration),
            (Category::Chord, &names.chord),
            (Category::Text, &names.text),
        ];

        let classes = entries
            .into_iter()
            .filter_map(|(category, name)| name.clone().map(|name| (category, name)))
            .collect();

        Self {
            classes,
            slur_level_prefix: config.slur_level_prefix.clone(),
            slur_palette_size: config.slur_palette_size.max(1),
        }
    }

    /// Class attribute for a span, or `None` to emit it unwrapped
    pub fn class_for(&self, span: &Span) -> Option<Cow<'_, str>> {
        let category = span.category?;
        let class = self.classes.get(&category)?;

        match (category, span.slur_depth, &self.slur_level_prefix) {
            (Category::Slur, Some(depth), Some(prefix)) => Some(Cow::Owned(format!(
                "{} {}{}",
                class,
                prefix,
                depth % self.slur_palette_size
            ))),
            _ => Some(Cow::Borrowed(class.as_str())),
        }
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

/// Render spans of `source` as markup, in order
pub fn render_spans(source: &str, spans: &[Span], classes: &ClassMap) -> String {
    let mut html = String::with_capacity(source.len() * 4);

    for span in spans {
        let text = escape_html(span.text(source));
        match classes.class_for(span) {
            Some(class) => {
                html.push_str("<span class=\"");
                html.push_str(&escape_html(&class));
                html.push_str("\">");
                html.push_str(&text);
                html.push_str("</span>");
            }
            None => html.push_str(&text),
        }
    }

    html
}
