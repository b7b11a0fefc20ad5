//! Answers captured by the guided "Get Started" flow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::resource::canonical_user_tag;

/// Audience role chosen in step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patients,
    Carepartners,
    Clinicians,
}

impl Role {
    /// Tag as stored in the feed's `users` array.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Patients => "patients",
            Role::Carepartners => "carepartners",
            Role::Clinicians => "clinicians",
        }
    }

    /// Display label used in result titles.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patients => "Patients",
            Role::Carepartners => "Care Partners",
            Role::Clinicians => "Clinicians",
        }
    }

    pub fn variants() -> &'static [Role] {
        &[Role::Patients, Role::Carepartners, Role::Clinicians]
    }
}

impl FromStr for Role {
    type Err = String;

    /// Accepts canonical tags and spreadsheet shorthands (`pts`, `cps`, `hcps`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = canonical_user_tag(s).to_lowercase();
        Role::variants()
            .iter()
            .copied()
            .find(|role| role.tag() == canonical)
            .ok_or_else(|| format!("unknown role: {}", s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Language preference chosen in step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowLanguage {
    En,
    Es,
    Both,
}

impl FlowLanguage {
    pub fn tag(&self) -> &'static str {
        match self {
            FlowLanguage::En => "en",
            FlowLanguage::Es => "es",
            FlowLanguage::Both => "both",
        }
    }

    /// Label for the title suffix; `Both` adds no suffix.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            FlowLanguage::En => Some("English"),
            FlowLanguage::Es => Some("Spanish"),
            FlowLanguage::Both => None,
        }
    }

    /// Label shown on the quiz button.
    pub fn choice_label(&self) -> &'static str {
        self.label().unwrap_or("Both")
    }

    /// Tag a resource must carry, or `None` when any language is fine.
    pub fn required_tag(&self) -> Option<&'static str> {
        match self {
            FlowLanguage::Both => None,
            other => Some(other.tag()),
        }
    }

    pub fn variants() -> &'static [FlowLanguage] {
        &[FlowLanguage::En, FlowLanguage::Es, FlowLanguage::Both]
    }
}

impl FromStr for FlowLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        FlowLanguage::variants()
            .iter()
            .copied()
            .find(|lang| lang.tag() == lowered)
            .ok_or_else(|| format!("unknown language: {}", s))
    }
}

impl fmt::Display for FlowLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Role/language/category triple scoping the catalog for a session.
///
/// Any subset may be present. The record's presence alone switches the
/// catalog into topic mode, even when every field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowAnswers {
    pub role: Option<Role>,
    pub language: Option<FlowLanguage>,
    pub category: Option<String>,
}

impl FlowAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_language(mut self, language: FlowLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The chosen category, ignoring an empty string.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Language tag a resource must carry, if any.
    pub fn required_language(&self) -> Option<&'static str> {
        self.language.and_then(|lang| lang.required_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_tags_and_shorthands() {
        assert_eq!("patients".parse::<Role>().unwrap(), Role::Patients);
        assert_eq!("CPS".parse::<Role>().unwrap(), Role::Carepartners);
        assert_eq!("hcps".parse::<Role>().unwrap(), Role::Clinicians);
        assert!("admins".parse::<Role>().is_err());
    }

    #[test]
    fn test_language_required_tag() {
        assert_eq!(FlowLanguage::Es.required_tag(), Some("es"));
        assert_eq!(FlowLanguage::Both.required_tag(), None);
        assert_eq!(FlowLanguage::Both.label(), None);
    }

    #[test]
    fn test_answers_deserialize_with_nulls_and_gaps() {
        let answers: FlowAnswers =
            serde_json::from_str(r#"{"role": "patients", "language": null}"#).unwrap();
        assert_eq!(answers.role, Some(Role::Patients));
        assert_eq!(answers.language, None);
        assert_eq!(answers.category(), None);
    }

    #[test]
    fn test_empty_category_is_absent() {
        let answers = FlowAnswers::new().with_category("");
        assert_eq!(answers.category(), None);
    }

    #[test]
    fn test_answers_serialize_to_session_shape() {
        let answers = FlowAnswers::new()
            .with_role(Role::Carepartners)
            .with_language(FlowLanguage::Both);
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "carepartners", "language": "both", "category": null})
        );
    }
}
