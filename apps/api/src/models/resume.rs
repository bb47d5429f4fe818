//! ResumeDocument — the structured resume produced by schema extraction.
//!
//! Deserialization is lenient: the model routinely omits fields, emits `null`,
//! or writes tech stacks as bare strings. Missing lists become empty lists.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<TechItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, deserialize_with = "null_as_blank")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub company_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tech_stack: Vec<TechItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_blank")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub institution: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_blank")]
    pub project_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub project_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_blank")]
    pub project_description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub github_link: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub live_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tech_stack: Vec<TechItem>,
}

/// A technology mention. `logo` is empty until reconciliation fills it from
/// the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechItem {
    pub name: String,
    pub logo: String,
}

impl<'de> Deserialize<'de> for TechItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(String),
            Full {
                #[serde(default)]
                name: Option<String>,
                #[serde(default)]
                logo: Option<String>,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bare(name) => TechItem {
                name,
                logo: String::new(),
            },
            Raw::Full { name, logo } => TechItem {
                name: name.unwrap_or_default(),
                logo: logo.unwrap_or_default(),
            },
        })
    }
}

fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
