//! Data models for form builder documents

use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::generate_form_id;

/// Input type of a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    Email,
    Phone,
    Number,
    Image,
    File,
}

impl FieldType {
    /// True for types whose `options` list is meaningful
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }
}

/// Per-field validation constraints
///
/// Applicability depends on the field type: length and pattern constraints
/// apply to string answers, min/max to numeric answers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// One input definition within a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Unique within the owning form, assigned at creation, immutable
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Choice list for select/radio/checkbox; ignored for other types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    /// Zero-based index into the owning form's step list; present only
    /// while the form is multi-step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
}

/// A named grouping of fields shown together in multi-step mode.
///
/// Membership is carried by each field's `step` index; steps hold no
/// field list of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStep {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Presentation settings attached to a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    pub submit_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    pub show_progress_bar: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_text: crate::DEFAULT_SUBMIT_TEXT.to_string(),
            redirect_url: None,
            show_progress_bar: true,
        }
    }
}

/// The form document under edit or being filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub steps: Vec<FormStep>,
    #[serde(default)]
    pub is_multi_step: bool,
    #[serde(default)]
    pub settings: FormSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// Fields belonging to the given step index.
    ///
    /// A single-step form places every field on the (only) step.
    pub fn fields_for_step(&self, step_index: usize) -> Vec<&FormField> {
        if !self.is_multi_step {
            return self.fields.iter().collect();
        }
        self.fields
            .iter()
            .filter(|f| f.step == Some(step_index))
            .collect()
    }

    /// Number of fill steps; floors at one even with an empty step list
    pub fn total_steps(&self) -> usize {
        if self.is_multi_step {
            self.steps.len().max(1)
        } else {
            1
        }
    }

    /// Look up a field by id
    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == field_id)
    }
}

/// The reusable form shape embedded in a template (no id, no timestamps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateForm {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub steps: Vec<FormStep>,
    #[serde(default)]
    pub is_multi_step: bool,
    #[serde(default)]
    pub settings: FormSettings,
}

/// A reusable form shape instantiable into a new, independent form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub form: TemplateForm,
}

impl Template {
    /// Produce a brand-new form from this template's shape.
    ///
    /// The copy gets a fresh id and fresh timestamps; the template itself
    /// is never touched.
    pub fn instantiate(&self) -> Form {
        let now = Utc::now();
        Form {
            id: generate_form_id(),
            title: self.form.title.clone(),
            description: self.form.description.clone(),
            fields: self.form.fields.clone(),
            steps: self.form.steps.clone(),
            is_multi_step: self.form.is_multi_step,
            settings: self.form.settings.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A collected answer for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    Choices(Vec<String>),
}

impl AnswerValue {
    /// True for answers that count as "not provided" (empty string,
    /// empty choice list)
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Number(_) => false,
            AnswerValue::Choices(c) => c.is_empty(),
        }
    }
}

/// Store database properties and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProperties {
    /// Unique database identifier (32 chars)
    pub database_id: String,
    /// Database schema version
    pub version: String,
    /// Creation timestamp
    pub create_timestamp: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub update_timestamp: Option<DateTime<Utc>>,
}

/// One recorded fill of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub form_id: String,
    pub form_title: String,
    pub data: HashMap<String, AnswerValue>,
    pub submitted_at: DateTime<Utc>,
}

// ============================================================================
// Operation payloads
// ============================================================================

/// Input for adding a field; the store assigns id and step placement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewField {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub validation: Option<ValidationRules>,
}

/// Partial update for an existing field; `None` leaves a property unchanged.
/// The field id is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdate {
    #[serde(default, rename = "type")]
    pub field_type: Option<FieldType>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub validation: Option<ValidationRules>,
    #[serde(default)]
    pub step: Option<usize>,
}

/// Input for adding a step; the store assigns the id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStep {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for an existing step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for form metadata and settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_multi_step: Option<bool>,
    #[serde(default)]
    pub settings: Option<FormSettings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_field(id: &str, step: Option<usize>) -> FormField {
        FormField {
            id: id.to_string(),
            field_type: FieldType::Text,
            label: "Label".to_string(),
            placeholder: None,
            required: false,
            help_text: None,
            options: Vec::new(),
            validation: None,
            step,
        }
    }

    fn sample_form() -> Form {
        let now = Utc::now();
        Form {
            id: "form00001".to_string(),
            title: "Sample".to_string(),
            description: None,
            fields: vec![
                sample_field("f1", Some(0)),
                sample_field("f2", Some(1)),
                sample_field("f3", Some(0)),
            ],
            steps: vec![
                FormStep { id: "s1".to_string(), title: "One".to_string(), description: None },
                FormStep { id: "s2".to_string(), title: "Two".to_string(), description: None },
            ],
            is_multi_step: true,
            settings: FormSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_settings_default() {
        let settings = FormSettings::default();
        assert_eq!(settings.submit_text, "Submit");
        assert!(settings.show_progress_bar);
        assert!(settings.redirect_url.is_none());
    }

    #[test]
    fn test_field_type_has_options() {
        assert!(FieldType::Select.has_options());
        assert!(FieldType::Radio.has_options());
        assert!(FieldType::Checkbox.has_options());
        assert!(!FieldType::Text.has_options());
        assert!(!FieldType::Email.has_options());
        assert!(!FieldType::File.has_options());
    }

    #[test]
    fn test_fields_for_step() {
        let form = sample_form();
        let step0: Vec<&str> = form.fields_for_step(0).iter().map(|f| f.id.as_str()).collect();
        assert_eq!(step0, vec!["f1", "f3"]);
        let step1: Vec<&str> = form.fields_for_step(1).iter().map(|f| f.id.as_str()).collect();
        assert_eq!(step1, vec!["f2"]);
        assert!(form.fields_for_step(5).is_empty());
    }

    #[test]
    fn test_fields_for_step_single_step() {
        let mut form = sample_form();
        form.is_multi_step = false;
        // Every field belongs to the only step, whatever its index says
        assert_eq!(form.fields_for_step(0).len(), 3);
        assert_eq!(form.fields_for_step(7).len(), 3);
    }

    #[test]
    fn test_total_steps() {
        let mut form = sample_form();
        assert_eq!(form.total_steps(), 2);

        form.steps.clear();
        assert_eq!(form.total_steps(), 1);

        form.is_multi_step = false;
        assert_eq!(form.total_steps(), 1);
    }

    #[test]
    fn test_field_type_wire_names() {
        let json = serde_json::to_string(&FieldType::Textarea).unwrap();
        assert_eq!(json, "\"textarea\"");
        let parsed: FieldType = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(parsed, FieldType::Email);
    }

    #[test]
    fn test_form_wire_names() {
        let form = sample_form();
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("\"isMultiStep\":true"));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"type\":\"text\""));
        assert!(!json.contains("field_type"));

        let back: Form = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_field_optional_wire_names() {
        let mut field = sample_field("f1", None);
        field.help_text = Some("hint".to_string());
        field.validation = Some(ValidationRules {
            min_length: Some(2),
            ..Default::default()
        });
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"helpText\":\"hint\""));
        assert!(json.contains("\"minLength\":2"));
        // Absent optionals stay off the wire
        assert!(!json.contains("placeholder"));
        assert!(!json.contains("maxLength"));
    }

    #[test]
    fn test_template_instantiate_identity() {
        let template = Template {
            id: "tmpl".to_string(),
            name: "Sample".to_string(),
            description: "desc".to_string(),
            form: TemplateForm {
                title: "Sample".to_string(),
                description: None,
                fields: vec![sample_field("f1", Some(0))],
                steps: Vec::new(),
                is_multi_step: false,
                settings: FormSettings::default(),
            },
        };

        let a = template.instantiate();
        let b = template.instantiate();
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, b.title);
        assert_eq!(a.fields, b.fields);
        // Source shape untouched
        assert_eq!(template.form.fields.len(), 1);
    }

    #[test]
    fn test_answer_value_is_empty() {
        assert!(AnswerValue::Text(String::new()).is_empty());
        assert!(!AnswerValue::Text("x".to_string()).is_empty());
        assert!(!AnswerValue::Number(0.0).is_empty());
        assert!(AnswerValue::Choices(Vec::new()).is_empty());
        assert!(!AnswerValue::Choices(vec!["a".to_string()]).is_empty());
    }

    #[test]
    fn test_answer_value_untagged_serde() {
        let text: AnswerValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(text, AnswerValue::Text("hello".to_string()));
        let num: AnswerValue = serde_json::from_str("42").unwrap();
        assert_eq!(num, AnswerValue::Number(42.0));
        let many: AnswerValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(many, AnswerValue::Choices(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_form_deserialize_defaults() {
        // Minimal document, as an older store might have written it
        let json = r#"{
            "id": "abc",
            "title": "Bare",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let form: Form = serde_json::from_str(json).unwrap();
        assert!(form.fields.is_empty());
        assert!(form.steps.is_empty());
        assert!(!form.is_multi_step);
        assert_eq!(form.settings.submit_text, "Submit");
    }
}
