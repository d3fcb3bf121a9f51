use std::sync::LazyLock;

use chortle_codec::StoryRecord;
use regex::{Captures, Regex};

use crate::{Error, TemplateCatalog};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_-]+)\}").expect("placeholder pattern"));

pub(crate) fn placeholders(text: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Substitute every `{name}` with its value, verbatim. Placeholders with no
/// value are left as written.
pub fn fill(text: &str, values: &StoryRecord) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Like [`fill`], but produces HTML: prose and values are escaped, each
/// substituted value is wrapped in `<strong class="filled">`, and line
/// breaks become `<br>`.
pub fn fill_html(text: &str, values: &StoryRecord) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_escaped(&mut out, &text[last..whole.start()]);
        match values.get(name.as_str()) {
            Some(value) => {
                out.push_str(r#"<strong class="filled">"#);
                push_escaped(&mut out, &value.to_string());
                out.push_str("</strong>");
            }
            None => push_escaped(&mut out, whole.as_str()),
        }
        last = whole.end();
    }
    push_escaped(&mut out, &text[last..]);

    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<br>"),
            _ => out.push(ch),
        }
    }
}

/// Render `template_id` from `catalog` with `values` as plain text.
pub fn render<C: TemplateCatalog + ?Sized>(
    catalog: &C,
    template_id: &str,
    values: &StoryRecord,
) -> Result<String, Error> {
    let template = catalog
        .get(template_id)
        .ok_or_else(|| Error::UnknownTemplate(template_id.to_string()))?;
    Ok(fill(&template.text, values))
}

/// Render `template_id` from `catalog` with `values` as HTML.
pub fn render_html<C: TemplateCatalog + ?Sized>(
    catalog: &C,
    template_id: &str,
    values: &StoryRecord,
) -> Result<String, Error> {
    let template = catalog
        .get(template_id)
        .ok_or_else(|| Error::UnknownTemplate(template_id.to_string()))?;
    Ok(fill_html(&template.text, values))
}

/// Render a record with the template it names.
pub fn render_story<C: TemplateCatalog + ?Sized>(
    catalog: &C,
    record: &StoryRecord,
) -> Result<String, Error> {
    render(catalog, record.template(), record)
}
