//! Portfolio sections — a closed sum type over the known section `type` tags.
//!
//! Wire shape per section: `{ "type", "data", "sectionTitle"?, "sectionDescription"? }`.
//! Sections with an unrecognized tag, or a known tag whose data no longer
//! matches its payload type, are kept verbatim as `SectionData::Unknown`.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::models::resume::{Education, TechItem};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSection")]
pub struct PortfolioSection {
    pub data: SectionData,
    pub section_title: Option<String>,
    pub section_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    Theme(ThemeData),
    UserInfo(UserInfo),
    Hero(Hero),
    Projects(Vec<ProjectCard>),
    Experience(Vec<ExperienceCard>),
    Technologies(Vec<TechItem>),
    Education(Vec<Education>),
    Unknown { kind: String, data: Value },
}

impl SectionData {
    pub fn kind(&self) -> &str {
        match self {
            SectionData::Theme(_) => "theme",
            SectionData::UserInfo(_) => "userInfo",
            SectionData::Hero(_) => "hero",
            SectionData::Projects(_) => "projects",
            SectionData::Experience(_) => "experience",
            SectionData::Technologies(_) => "technologies",
            SectionData::Education(_) => "education",
            SectionData::Unknown { kind, .. } => kind,
        }
    }
}

impl PortfolioSection {
    pub fn new(data: SectionData) -> Self {
        Self {
            data,
            section_title: None,
            section_description: None,
        }
    }

    pub fn titled(data: SectionData, title: &str, description: &str) -> Self {
        Self {
            data,
            section_title: Some(title.to_string()),
            section_description: Some(description.to_string()),
        }
    }

    pub fn kind(&self) -> &str {
        self.data.kind()
    }
}

/// The full section list handed to the rendering boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    pub sections: Vec<PortfolioSection>,
}

impl PortfolioDocument {
    #[cfg(test)]
    pub fn section(&self, kind: &str) -> Option<&PortfolioSection> {
        self.sections.iter().find(|s| s.kind() == kind)
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.kind()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeData {
    pub name: String,
    #[serde(flatten)]
    pub styling: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub summary: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<HeroAction>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub project_name: String,
    pub project_title: String,
    pub project_description: String,
    pub github_link: String,
    pub live_link: String,
    pub image: String,
    pub tech_stack: Vec<TechItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceCard {
    pub role: String,
    pub company_name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub tech_stack: Vec<TechItem>,
}

/// Untyped wire form used for deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    section_title: Option<String>,
    #[serde(default)]
    section_description: Option<String>,
}

impl From<RawSection> for PortfolioSection {
    fn from(raw: RawSection) -> Self {
        fn typed<T: serde::de::DeserializeOwned>(value: &Value) -> Option<T> {
            serde_json::from_value(value.clone()).ok()
        }

        let data = match raw.kind.as_str() {
            "theme" => typed(&raw.data).map(SectionData::Theme),
            "userInfo" => typed(&raw.data).map(SectionData::UserInfo),
            "hero" => typed(&raw.data).map(SectionData::Hero),
            "projects" => typed(&raw.data).map(SectionData::Projects),
            "experience" => typed(&raw.data).map(SectionData::Experience),
            "technologies" => typed(&raw.data).map(SectionData::Technologies),
            "education" => typed(&raw.data).map(SectionData::Education),
            _ => None,
        }
        .unwrap_or(SectionData::Unknown {
            kind: raw.kind,
            data: raw.data,
        });

        Self {
            data,
            section_title: raw.section_title,
            section_description: raw.section_description,
        }
    }
}

impl Serialize for PortfolioSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2
            + usize::from(self.section_title.is_some())
            + usize::from(self.section_description.is_some());
        let mut state = serializer.serialize_struct("PortfolioSection", len)?;
        state.serialize_field("type", self.kind())?;
        match &self.data {
            SectionData::Theme(data) => state.serialize_field("data", data)?,
            SectionData::UserInfo(data) => state.serialize_field("data", data)?,
            SectionData::Hero(data) => state.serialize_field("data", data)?,
            SectionData::Projects(data) => state.serialize_field("data", data)?,
            SectionData::Experience(data) => state.serialize_field("data", data)?,
            SectionData::Technologies(data) => state.serialize_field("data", data)?,
            SectionData::Education(data) => state.serialize_field("data", data)?,
            SectionData::Unknown { data, .. } => state.serialize_field("data", data)?,
        }
        if let Some(title) = &self.section_title {
            state.serialize_field("sectionTitle", title)?;
        }
        if let Some(description) = &self.section_description {
            state.serialize_field("sectionDescription", description)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_type_tag_and_optional_titles() {
        let section = PortfolioSection::titled(
            SectionData::Technologies(vec![TechItem {
                name: "Rust".into(),
                logo: "rust.svg".into(),
            }]),
            "Technologies",
            "Tools I reach for",
        );
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "technologies",
                "data": [{"name": "Rust", "logo": "rust.svg"}],
                "sectionTitle": "Technologies",
                "sectionDescription": "Tools I reach for"
            })
        );

        let untitled = serde_json::to_value(PortfolioSection::new(SectionData::Theme(ThemeData {
            name: "classic".into(),
            styling: Map::new(),
        })))
        .unwrap();
        assert!(untitled.get("sectionTitle").is_none());
        assert_eq!(untitled["data"]["name"], "classic");
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let raw = json!({"type": "testimonials", "data": [{"quote": "Great hire"}]});
        let section: PortfolioSection = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(section.kind(), "testimonials");
        assert!(matches!(section.data, SectionData::Unknown { .. }));
        assert_eq!(serde_json::to_value(&section).unwrap(), raw);
    }

    #[test]
    fn test_known_type_with_mismatched_data_degrades_to_unknown() {
        let section: PortfolioSection =
            serde_json::from_value(json!({"type": "hero", "data": "just a string"})).unwrap();
        assert_eq!(section.kind(), "hero");
        assert!(matches!(section.data, SectionData::Unknown { .. }));
    }

    #[test]
    fn test_typed_section_round_trips() {
        let raw = json!({
            "type": "experience",
            "data": [{
                "role": "SRE",
                "companyName": "Northwind",
                "location": "Remote",
                "startDate": "01/2020",
                "endDate": "Present",
                "description": "On-call lead.",
                "techStack": []
            }],
            "sectionTitle": "Experience"
        });
        let section: PortfolioSection = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(section.data, SectionData::Experience(_)));
        assert_eq!(serde_json::to_value(&section).unwrap(), raw);
    }
}
