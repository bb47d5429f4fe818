//! Portfolio assembly — maps a reconciled resume plus enrichment into the
//! ordered section list for one theme.
//!
//! Deterministic and side-effect free. Section order is fixed:
//! theme, userInfo, hero, projects, experience, technologies, education.
//! Some themes index sections by position, so the order must not change.

use crate::extraction::enrichment::Enrichment;
use crate::models::resume::{Experience, PersonalInfo, Project, ResumeDocument};
use crate::portfolio::sections::{
    Badge, ExperienceCard, Hero, HeroAction, PortfolioDocument, PortfolioSection, ProjectCard,
    SectionData, SocialLink, ThemeData, UserInfo,
};
use crate::portfolio::themes::{ResolvedTheme, ThemeFlags};

// Placeholder contact details used when the resume lacks a field.
const DEFAULT_NAME: &str = "Alex Morgan";
const DEFAULT_EMAIL: &str = "alexmorgan@gmail.com";
const DEFAULT_PHONE: &str = "+1 (555) 123-4567";
const DEFAULT_LINKEDIN: &str = "https://www.linkedin.com/in/alexmorgan";
const DEFAULT_GITHUB: &str = "https://github.com/alexmorgan";
const DEFAULT_WEBSITE: &str = "https://alexmorgan.dev";
const DEFAULT_LOCATION: &str = "San Francisco, CA";

const DEFAULT_TITLE: &str = "Software Developer";
const DEFAULT_TITLE_PREFIX: &str = "Software";
const DEFAULT_TITLE_SUFFIX: &str = "Engineer";
const GENERIC_SUMMARY: &str =
    "Passionate developer focused on building reliable, user-friendly software.";
const SUMMARY_SENTENCES: usize = 3;
const SKILLS_IN_SUMMARY: usize = 3;

const DEFAULT_BADGE: &str = "Open to new opportunities";

const DEFAULT_PROJECT_GITHUB: &str = "https://github.com/alexmorgan";
const DEFAULT_PROJECT_LIVE: &str = "https://alexmorgan.dev";
const DEFAULT_PROJECT_IMAGE: &str = "https://placehold.co/600x400?text=Project";
const PROJECT_TITLE_WORDS: usize = 3;

const DEFAULT_EXPERIENCE_LOCATION: &str = "Remote";
const DEFAULT_START_DATE: &str = "01/2023";
const DEFAULT_END_DATE: &str = "Present";

/// Builds the portfolio for `theme`.
pub fn assemble(
    doc: &ResumeDocument,
    enrichment: &Enrichment,
    theme: ResolvedTheme<'_>,
) -> PortfolioDocument {
    let flags = theme.flags();
    let mut sections = Vec::with_capacity(7);

    sections.push(PortfolioSection::new(SectionData::Theme(ThemeData {
        name: theme.name.to_string(),
        styling: theme.definition.content.clone(),
    })));

    let user_info = doc
        .personal_info
        .as_ref()
        .map(|info| build_user_info(info, flags));
    let display_name = user_info
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    if let Some(user_info) = user_info {
        sections.push(PortfolioSection::new(SectionData::UserInfo(user_info)));
    }

    sections.push(PortfolioSection::new(SectionData::Hero(build_hero(
        doc,
        enrichment,
        flags,
        display_name,
    ))));

    if !doc.projects.is_empty() {
        sections.push(PortfolioSection::titled(
            SectionData::Projects(doc.projects.iter().map(project_card).collect()),
            "Projects",
            "A selection of things I have built.",
        ));
    }

    if !doc.experience.is_empty() {
        sections.push(PortfolioSection::titled(
            SectionData::Experience(doc.experience.iter().map(experience_card).collect()),
            "Experience",
            "Where I have worked and what I did there.",
        ));
    }

    if !doc.skills.is_empty() {
        sections.push(PortfolioSection::titled(
            SectionData::Technologies(doc.skills.clone()),
            "Technologies",
            "Languages, frameworks and tools I work with.",
        ));
    }

    if !doc.education.is_empty() {
        sections.push(PortfolioSection::titled(
            SectionData::Education(doc.education.clone()),
            "Education",
            "Academic background.",
        ));
    }

    PortfolioDocument { sections }
}

fn build_user_info(info: &PersonalInfo, flags: &ThemeFlags) -> UserInfo {
    let or_default = |value: &Option<String>, default: &str| {
        value.clone().unwrap_or_else(|| default.to_string())
    };

    let mut user_info = UserInfo {
        name: or_default(&info.name, DEFAULT_NAME),
        email: or_default(&info.email, DEFAULT_EMAIL),
        phone: or_default(&info.phone, DEFAULT_PHONE),
        linkedin: or_default(&info.linkedin, DEFAULT_LINKEDIN),
        github: or_default(&info.github, DEFAULT_GITHUB),
        website: or_default(&info.website, DEFAULT_WEBSITE),
        location: or_default(&info.location, DEFAULT_LOCATION),
        social_links: None,
    };

    if flags.social_links {
        user_info.social_links = Some(vec![
            SocialLink {
                platform: "LinkedIn".to_string(),
                url: user_info.linkedin.clone(),
            },
            SocialLink {
                platform: "GitHub".to_string(),
                url: user_info.github.clone(),
            },
            SocialLink {
                platform: "Website".to_string(),
                url: user_info.website.clone(),
            },
        ]);
    }

    user_info
}

fn build_hero(
    doc: &ResumeDocument,
    enrichment: &Enrichment,
    flags: &ThemeFlags,
    name: String,
) -> Hero {
    Hero {
        name,
        title: compose_title(doc, enrichment, flags),
        summary: hero_summary(doc, enrichment),
        short_summary: enrichment
            .short_summary
            .clone()
            .filter(|_| flags.short_summary_prompt),
        long_summary: enrichment
            .long_summary
            .clone()
            .filter(|_| flags.long_summary_prompt),
        badge: flags.badge.then(|| Badge {
            text: DEFAULT_BADGE.to_string(),
        }),
        actions: flags.actions.then(default_actions),
    }
}

fn compose_title(doc: &ResumeDocument, enrichment: &Enrichment, flags: &ThemeFlags) -> String {
    if flags.title_prefix_suffix {
        let prefix = enrichment
            .title_prefix
            .as_deref()
            .unwrap_or(DEFAULT_TITLE_PREFIX);
        let suffix = enrichment
            .title_suffixes
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_TITLE_SUFFIX);
        return format!("{prefix} {suffix}");
    }

    if flags.title || flags.title_prompt {
        if let Some(title) = &enrichment.title {
            return title.clone();
        }
    }
    if flags.title {
        return DEFAULT_TITLE.to_string();
    }

    doc.experience
        .first()
        .map(|e| e.role.trim())
        .filter(|role| !role.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

/// Generated lines, else the resume summary's first sentences, else a line
/// built from the top skills, else generic filler.
fn hero_summary(doc: &ResumeDocument, enrichment: &Enrichment) -> Vec<String> {
    if !enrichment.summary_lines.is_empty() {
        return enrichment.summary_lines.clone();
    }

    if let Some(summary) = &doc.summary {
        let sentences = first_sentences(summary, SUMMARY_SENTENCES);
        if !sentences.is_empty() {
            return sentences;
        }
    }

    let top_skills: Vec<&str> = doc
        .skills
        .iter()
        .take(SKILLS_IN_SUMMARY)
        .map(|s| s.name.as_str())
        .collect();
    if !top_skills.is_empty() {
        return vec![format!(
            "Developer experienced with {}.",
            join_human(&top_skills)
        )];
    }

    vec![GENERIC_SUMMARY.to_string()]
}

fn first_sentences(text: &str, limit: usize) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        let terminal = matches!(c, '.' | '!' | '?');
        let boundary = chars.peek().map_or(true, |next| next.is_whitespace());
        if terminal && boundary {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
            if sentences.len() == limit {
                return sentences;
            }
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn join_human(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn default_actions() -> Vec<HeroAction> {
    vec![
        HeroAction {
            label: "View Projects".to_string(),
            href: "#projects".to_string(),
        },
        HeroAction {
            label: "Contact Me".to_string(),
            href: "#contact".to_string(),
        },
    ]
}

fn project_card(project: &Project) -> ProjectCard {
    let project_title = project.project_title.clone().unwrap_or_else(|| {
        project
            .project_name
            .split_whitespace()
            .take(PROJECT_TITLE_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    });

    ProjectCard {
        project_name: project.project_name.clone(),
        project_title,
        project_description: project.project_description.clone(),
        github_link: project
            .github_link
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_GITHUB.to_string()),
        live_link: project
            .live_link
            .clone()
            .unwrap_or_else(|| DEFAULT_PROJECT_LIVE.to_string()),
        image: DEFAULT_PROJECT_IMAGE.to_string(),
        tech_stack: project.tech_stack.clone(),
    }
}

fn experience_card(experience: &Experience) -> ExperienceCard {
    ExperienceCard {
        role: experience.role.clone(),
        company_name: experience.company_name.clone(),
        location: experience
            .location
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPERIENCE_LOCATION.to_string()),
        start_date: experience
            .start_date
            .clone()
            .unwrap_or_else(|| DEFAULT_START_DATE.to_string()),
        end_date: experience
            .end_date
            .clone()
            .unwrap_or_else(|| DEFAULT_END_DATE.to_string()),
        description: experience.description.clone(),
        tech_stack: experience.tech_stack.clone(),
    }
}
