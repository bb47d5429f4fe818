//! Theme registry — per-theme feature flags and static styling content.
//!
//! Flags decide which enrichment calls the extractor issues and which optional
//! hero/userInfo fields the assembler emits. Content is an opaque styling
//! payload copied into the `theme` section.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeFlags {
    pub title_prompt: bool,
    pub summary_prompt: bool,
    pub title_prefix_suffix: bool,
    pub badge: bool,
    pub actions: bool,
    pub title: bool,
    pub short_summary_prompt: bool,
    pub long_summary_prompt: bool,
    pub social_links: bool,
}

impl ThemeFlags {
    /// Any title-related flag means the extractor asks the model for a title.
    pub fn wants_title_call(&self) -> bool {
        self.title_prompt || self.title || self.title_prefix_suffix
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    #[serde(default)]
    pub flags: ThemeFlags,
    #[serde(default)]
    pub content: Map<String, Value>,
}

/// A theme as selected for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTheme<'a> {
    pub name: &'a str,
    pub definition: &'a ThemeDefinition,
}

impl ResolvedTheme<'_> {
    pub fn flags(&self) -> &ThemeFlags {
        &self.definition.flags
    }
}

#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    /// Keyed by lowercase theme name.
    themes: BTreeMap<String, ThemeDefinition>,
    default_theme: String,
}

impl ThemeRegistry {
    /// Built-in themes, optionally extended or overridden by a JSON file of
    /// `{ "<name>": { "flags": {...}, "content": {...} } }`.
    pub fn load(path: Option<&Path>, default_theme: &str) -> Result<Self> {
        let mut themes = builtin_themes();

        if let Some(path) = path {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read theme file {}", path.display()))?;
            let overrides: BTreeMap<String, ThemeDefinition> = serde_json::from_str(&raw)
                .with_context(|| format!("Theme file {} is not a valid theme map", path.display()))?;
            info!("Loaded {} theme definitions from {}", overrides.len(), path.display());
            for (name, definition) in overrides {
                themes.insert(name.to_lowercase(), definition);
            }
        }

        let default_theme = default_theme.to_lowercase();
        if !themes.contains_key(&default_theme) {
            bail!("Default theme '{default_theme}' is not registered");
        }

        Ok(Self {
            themes,
            default_theme,
        })
    }

    /// Built-ins only, `classic` as default.
    #[cfg(test)]
    pub fn builtin() -> Self {
        Self {
            themes: builtin_themes(),
            default_theme: "classic".to_string(),
        }
    }

    /// Case-insensitive lookup. Unknown names fall back to the default theme.
    pub fn resolve(&self, requested: &str) -> ResolvedTheme<'_> {
        let key = requested.trim().to_lowercase();
        if let Some((name, definition)) = self.themes.get_key_value(&key) {
            return ResolvedTheme { name, definition };
        }

        warn!(
            "Unknown theme '{}', falling back to '{}'",
            requested, self.default_theme
        );
        let (name, definition) = self
            .themes
            .get_key_value(&self.default_theme)
            .expect("default theme is validated at load");
        ResolvedTheme { name, definition }
    }

    /// Theme names with their flags, in name order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &ThemeFlags)> {
        self.themes
            .iter()
            .map(|(name, definition)| (name.as_str(), &definition.flags))
    }
}

fn builtin_themes() -> BTreeMap<String, ThemeDefinition> {
    let mut themes = BTreeMap::new();

    themes.insert(
        "classic".to_string(),
        ThemeDefinition {
            flags: ThemeFlags::default(),
            content: styling(json!({
                "background": "#ffffff",
                "foreground": "#111827",
                "accent": "#2563eb",
                "font": "Inter",
                "layout": "single-column"
            })),
        },
    );

    themes.insert(
        "modern".to_string(),
        ThemeDefinition {
            flags: ThemeFlags {
                title_prompt: true,
                title_prefix_suffix: true,
                summary_prompt: true,
                badge: true,
                actions: true,
                social_links: true,
                ..ThemeFlags::default()
            },
            content: styling(json!({
                "background": "#0b0f19",
                "foreground": "#e5e7eb",
                "accent": "#a855f7",
                "font": "Space Grotesk",
                "layout": "split-hero"
            })),
        },
    );

    themes.insert(
        "minimal".to_string(),
        ThemeDefinition {
            flags: ThemeFlags {
                title_prompt: true,
                title: true,
                short_summary_prompt: true,
                ..ThemeFlags::default()
            },
            content: styling(json!({
                "background": "#fafaf9",
                "foreground": "#1c1917",
                "accent": "#1c1917",
                "font": "IBM Plex Mono",
                "layout": "single-column"
            })),
        },
    );

    themes.insert(
        "bold".to_string(),
        ThemeDefinition {
            flags: ThemeFlags {
                title_prompt: true,
                title: true,
                summary_prompt: true,
                short_summary_prompt: true,
                long_summary_prompt: true,
                actions: true,
                social_links: true,
                ..ThemeFlags::default()
            },
            content: styling(json!({
                "background": "#fef08a",
                "foreground": "#000000",
                "accent": "#dc2626",
                "font": "Archivo Black",
                "layout": "bento-grid"
            })),
        },
    );

    themes
}

fn styling(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
