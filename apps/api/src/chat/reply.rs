//! User-facing reply synthesis for chat edits.
//!
//! Two layers, no model call:
//! 1. the first accepted change picks a phrase from an ordered rule table,
//!    plus a count of any further changes;
//! 2. a tone keyword in the user's message replaces that reply outright.

use crate::chat::engine::{ChangeIntent, ChangeRecord};

pub const CLARIFICATION_REPLY: &str = "I couldn't tell what to change. \
    Could you say which section to update and what it should say?";

struct ReplyRule {
    intents: &'static [&'static str],
    sections: &'static [&'static str],
    phrase: &'static str,
}

const ADD: &[&str] = &["add"];
const EDIT: &[&str] = &["update", "change"];
const DROP: &[&str] = &["remove", "delete"];

const PROJECTS: &[&str] = &["projects", "project"];
const EXPERIENCE: &[&str] = &["experience", "experiences", "work", "workexperience", "jobs"];
const TECHNOLOGIES: &[&str] = &["technologies", "technology", "skills", "techstack", "tech"];
const EDUCATION: &[&str] = &["education", "degree", "degrees"];
const HERO: &[&str] = &["hero", "summary", "about", "title", "bio"];
const USER_INFO: &[&str] = &["userinfo", "contact", "personalinfo", "sociallinks"];
const THEME: &[&str] = &["theme"];

/// First match wins.
const RULES: &[ReplyRule] = &[
    ReplyRule { intents: ADD, sections: PROJECTS, phrase: "Added a new project to your portfolio." },
    ReplyRule { intents: ADD, sections: EXPERIENCE, phrase: "Added a new role to your experience." },
    ReplyRule { intents: ADD, sections: TECHNOLOGIES, phrase: "Added that to your technologies." },
    ReplyRule { intents: ADD, sections: EDUCATION, phrase: "Added a new entry to your education." },
    ReplyRule { intents: EDIT, sections: HERO, phrase: "Updated your introduction." },
    ReplyRule { intents: EDIT, sections: USER_INFO, phrase: "Updated your contact details." },
    ReplyRule { intents: EDIT, sections: PROJECTS, phrase: "Updated your project details." },
    ReplyRule { intents: EDIT, sections: EXPERIENCE, phrase: "Updated your experience." },
    ReplyRule { intents: EDIT, sections: TECHNOLOGIES, phrase: "Updated your technologies." },
    ReplyRule { intents: EDIT, sections: EDUCATION, phrase: "Updated your education." },
    ReplyRule { intents: EDIT, sections: THEME, phrase: "Updated your theme." },
    ReplyRule { intents: DROP, sections: PROJECTS, phrase: "Removed that project from your portfolio." },
    ReplyRule { intents: DROP, sections: EXPERIENCE, phrase: "Removed that role from your experience." },
    ReplyRule { intents: DROP, sections: TECHNOLOGIES, phrase: "Removed that from your technologies." },
    ReplyRule { intents: DROP, sections: EDUCATION, phrase: "Removed that entry from your education." },
];

/// Checked in order against the lowercased user message.
const TONE_OVERRIDES: &[(&str, &str)] = &[
    ("shorter", "I've made it shorter while keeping the key points."),
    ("longer", "I've expanded it with more detail."),
    ("professional", "I've given it a more professional tone."),
    ("casual", "I've made it more casual and approachable."),
];

/// Reply for an accepted, non-empty change list. Falls back to the
/// clarification text when `changes` is empty.
pub fn compose_reply(changes: &[ChangeRecord], user_message: &str) -> String {
    let Some(first) = changes.first() else {
        return CLARIFICATION_REPLY.to_string();
    };

    let lowered = user_message.to_lowercase();
    if let Some((_, reply)) = TONE_OVERRIDES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
    {
        return reply.to_string();
    }

    let mut reply = phrase_for(first);
    match changes.len() - 1 {
        0 => {}
        1 => reply.push_str(" I also made 1 other change."),
        n => reply.push_str(&format!(" I also made {n} other changes.")),
    }
    reply
}

fn phrase_for(change: &ChangeRecord) -> String {
    let section = section_key(&change.section_name);

    if let Some(rule) = RULES
        .iter()
        .find(|r| r.intents.contains(&change.intent.as_str()) && r.sections.contains(&section.as_str()))
    {
        return rule.phrase.to_string();
    }

    let name = change.section_name.trim();
    match change.intent {
        ChangeIntent::Add => format!("Added that to your {name} section."),
        ChangeIntent::Update | ChangeIntent::Change => format!("Updated your {name} section."),
        ChangeIntent::Remove | ChangeIntent::Delete => format!("Removed that from your {name} section."),
        ChangeIntent::Other(_) => format!("Made the change to your {name} section."),
    }
}

fn section_key(section_name: &str) -> String {
    section_name
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}
