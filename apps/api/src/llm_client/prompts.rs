// Shared prompt constants and prompt-building utilities.
// Each service that needs model calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt for the vision call that reads raw text off a resume image.
pub const IMAGE_READER_SYSTEM: &str = "You are an exact document transcriber. \
    Reproduce the text you see. Do not summarize, reorder, or add commentary.";

/// Common instruction appended to every prompt that writes user-facing prose.
pub const NO_PLACEHOLDER_INSTRUCTION: &str = "\
    CRITICAL: Never emit placeholder text such as 'Lorem ipsum', '[Your Name]', \
    'TBD' or 'Company X'. If a fact is not available, leave the field empty \
    instead of inventing one.";

/// Fills `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so a value that itself contains
/// `{key}` text (user prose, portfolio JSON) is embedded verbatim. Braces that
/// do not name a listed key are left alone.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        let hit = values.iter().find(|(key, _)| {
            tail.strip_prefix(*key)
                .is_some_and(|after| after.starts_with('}'))
        });

        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_keys() {
        let filled = fill_template(
            "Hello {name}, schema: {\"a\": 1} {unknown}",
            &[("name", "Sam")],
        );
        assert_eq!(filled, "Hello Sam, schema: {\"a\": 1} {unknown}");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "doc={doc}\nmsg={msg}",
            &[("doc", "notes about {msg} and {doc}"), ("msg", "DROP ALL")],
        );
        assert_eq!(filled, "doc=notes about {msg} and {doc}\nmsg=DROP ALL");
    }

    #[test]
    fn test_fill_template_repeated_and_adjacent_keys() {
        let filled = fill_template("{a}{a}{b}{", &[("a", "x"), ("b", "")]);
        assert_eq!(filled, "xx{");
    }
}
