//! TechCatalog — the controlled vocabulary of known technologies.
//!
//! Loaded once per process and never mutated. Free-text technology names from
//! the model are resolved here; a miss means the caller drops the item. The
//! catalog never fabricates a logo for a name it does not know.
//!
//! Resolution order: exact normalized key → alias table → substring
//! containment (either direction, first entry in list order wins).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

mod entries;

/// A known technology: canonical display name plus icon URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechEntry {
    pub name: &'static str,
    pub logo: &'static str,
}

/// Shorthand and alternate spellings, raw form → canonical catalog name.
/// Authoritative over substring matching.
const ALIASES: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("es6", "JavaScript"),
    ("ts", "TypeScript"),
    ("py", "Python"),
    ("cpp", "C++"),
    ("csharp", "C#"),
    ("dotnet", ".NET"),
    ("golang", "Go"),
    ("reactjs", "React"),
    ("nextjs", "Next.js"),
    ("nodejs", "Node.js"),
    ("node js", "Node.js"),
    ("expressjs", "Express.js"),
    ("nuxtjs", "Nuxt.js"),
    ("threejs", "Three.js"),
    ("nest", "NestJS"),
    ("postgres", "PostgreSQL"),
    ("psql", "PostgreSQL"),
    ("mongo", "MongoDB"),
    ("shadcnui", "Shadcn UI"),
    ("shadcn", "Shadcn UI"),
    ("mui", "Material UI"),
    ("tailwind", "Tailwind CSS"),
    ("scss", "Sass"),
    ("html5", "HTML"),
    ("css3", "CSS"),
    ("k8s", "Kubernetes"),
    ("kafka", "Apache Kafka"),
    ("gcp", "Google Cloud"),
    ("amazon web services", "AWS"),
    ("rails", "Ruby on Rails"),
    ("spring", "Spring Boot"),
    ("gql", "GraphQL"),
    ("framer", "Framer Motion"),
    ("socketio", "Socket.io"),
    ("tensorflowjs", "TensorFlow"),
];

static CATALOG: Lazy<TechCatalog> = Lazy::new(|| TechCatalog::new(entries::ENTRIES, ALIASES));

/// Normalizes a technology name into a lookup key.
///
/// Lowercases, drops a trailing `.js`, strips whitespace, dots and hyphens,
/// and maps the bare names `react`/`vue`/`angular` to their `js` form. Total
/// and deterministic: every input yields a key, possibly empty.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let without_ext = lowered.strip_suffix(".js").unwrap_or(&lowered);

    let key: String = without_ext
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
        .collect();

    match key.as_str() {
        "react" | "vue" | "angular" => format!("{key}js"),
        _ => key,
    }
}

pub struct TechCatalog {
    entries: &'static [TechEntry],
    /// Normalized key per entry, parallel to `entries`.
    keys: Vec<String>,
    by_key: HashMap<String, usize>,
    aliases: HashMap<String, usize>,
}

impl TechCatalog {
    /// The process-wide catalog.
    pub fn global() -> &'static TechCatalog {
        &CATALOG
    }

    fn new(entries: &'static [TechEntry], aliases: &[(&str, &str)]) -> Self {
        let keys: Vec<String> = entries.iter().map(|e| normalize(e.name)).collect();

        let mut by_key = HashMap::with_capacity(keys.len());
        for (idx, key) in keys.iter().enumerate() {
            // First entry wins on a key collision.
            by_key.entry(key.clone()).or_insert(idx);
        }

        let aliases = aliases
            .iter()
            .filter_map(|(alias, target)| {
                by_key
                    .get(&normalize(target))
                    .map(|&idx| (normalize(alias), idx))
            })
            .collect();

        Self {
            entries,
            keys,
            by_key,
            aliases,
        }
    }

    pub fn entries(&self) -> &'static [TechEntry] {
        self.entries
    }

    /// Resolves a free-text technology name, or `None` if nothing matches.
    pub fn lookup(&self, raw: &str) -> Option<&'static TechEntry> {
        let key = normalize(raw);
        if key.is_empty() {
            return None;
        }

        if let Some(&idx) = self.by_key.get(&key) {
            return Some(&self.entries[idx]);
        }

        if let Some(&idx) = self.aliases.get(&key) {
            return Some(&self.entries[idx]);
        }

        self.keys
            .iter()
            .position(|candidate| key.contains(candidate.as_str()) || candidate.contains(&key))
            .map(|idx| &self.entries[idx])
    }

    /// Canonical names, in list order, for prompts that steer the model toward
    /// catalog spelling.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }
}
