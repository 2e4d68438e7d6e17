//! Template registry
//!
//! Built-in starter templates plus user-saved ones. Loading a template
//! instantiates a fresh, independent form; the template is never mutated.

use crate::error::Result;
use crate::storage::models::{
    FieldType, FormField, FormSettings, FormStep, Template, TemplateForm, ValidationRules,
};
use crate::utils::{generate_field_id, generate_step_id, generate_template_id};
use crate::USER_TEMPLATES_KEY;
use super::store::FormStore;

/// The fixed set of starter templates.
///
/// Ids are stable; embedded field and step ids are generated once per
/// store open, so repeated instantiation copies the same shape.
pub fn builtin_templates() -> Vec<Template> {
    vec![contact_us_template(), survey_template()]
}

fn contact_us_template() -> Template {
    Template {
        id: "contact-us".to_string(),
        name: "Contact Us".to_string(),
        description: "Basic contact form template".to_string(),
        form: TemplateForm {
            title: "Contact Us".to_string(),
            description: Some("Get in touch with us".to_string()),
            fields: vec![
                FormField {
                    id: generate_field_id(),
                    field_type: FieldType::Text,
                    label: "Full Name".to_string(),
                    placeholder: Some("Enter your full name".to_string()),
                    required: true,
                    help_text: None,
                    options: Vec::new(),
                    validation: None,
                    step: Some(0),
                },
                FormField {
                    id: generate_field_id(),
                    field_type: FieldType::Email,
                    label: "Email Address".to_string(),
                    placeholder: Some("Enter your email".to_string()),
                    required: true,
                    help_text: None,
                    options: Vec::new(),
                    validation: None,
                    step: Some(0),
                },
                FormField {
                    id: generate_field_id(),
                    field_type: FieldType::Textarea,
                    label: "Message".to_string(),
                    placeholder: Some("Enter your message".to_string()),
                    required: true,
                    help_text: None,
                    options: Vec::new(),
                    validation: Some(ValidationRules {
                        min_length: Some(10),
                        max_length: Some(500),
                        ..Default::default()
                    }),
                    step: Some(0),
                },
            ],
            steps: Vec::new(),
            is_multi_step: false,
            settings: FormSettings {
                submit_text: "Send Message".to_string(),
                redirect_url: None,
                show_progress_bar: true,
            },
        },
    }
}

fn survey_template() -> Template {
    Template {
        id: "survey".to_string(),
        name: "Survey Form".to_string(),
        description: "Multi-step survey template".to_string(),
        form: TemplateForm {
            title: "Customer Survey".to_string(),
            description: Some("Help us improve our services".to_string()),
            fields: vec![
                FormField {
                    id: generate_field_id(),
                    field_type: FieldType::Text,
                    label: "Name".to_string(),
                    placeholder: Some("Your name".to_string()),
                    required: true,
                    help_text: None,
                    options: Vec::new(),
                    validation: None,
                    step: Some(0),
                },
                FormField {
                    id: generate_field_id(),
                    field_type: FieldType::Select,
                    label: "How did you hear about us?".to_string(),
                    placeholder: None,
                    required: true,
                    help_text: None,
                    options: vec![
                        "Google".to_string(),
                        "Social Media".to_string(),
                        "Friend".to_string(),
                        "Advertisement".to_string(),
                        "Other".to_string(),
                    ],
                    validation: None,
                    step: Some(0),
                },
                FormField {
                    id: generate_field_id(),
                    field_type: FieldType::Radio,
                    label: "Overall satisfaction".to_string(),
                    placeholder: None,
                    required: true,
                    help_text: None,
                    options: vec![
                        "Very Satisfied".to_string(),
                        "Satisfied".to_string(),
                        "Neutral".to_string(),
                        "Dissatisfied".to_string(),
                        "Very Dissatisfied".to_string(),
                    ],
                    validation: None,
                    step: Some(1),
                },
                FormField {
                    id: generate_field_id(),
                    field_type: FieldType::Textarea,
                    label: "Additional Comments".to_string(),
                    placeholder: Some("Any additional feedback?".to_string()),
                    required: false,
                    help_text: None,
                    options: Vec::new(),
                    validation: None,
                    step: Some(1),
                },
            ],
            steps: vec![
                FormStep {
                    id: generate_step_id(),
                    title: "Basic Information".to_string(),
                    description: Some("Tell us about yourself".to_string()),
                },
                FormStep {
                    id: generate_step_id(),
                    title: "Feedback".to_string(),
                    description: Some("Share your experience".to_string()),
                },
            ],
            is_multi_step: true,
            settings: FormSettings {
                submit_text: "Submit Survey".to_string(),
                redirect_url: None,
                show_progress_bar: true,
            },
        },
    }
}

impl FormStore {
    /// Instantiate the template matching `template_id` as the current
    /// form, clearing the selection.
    ///
    /// Returns false (leaving the current form untouched) when the id is
    /// unknown.
    pub fn load_template(&mut self, template_id: &str) -> bool {
        let Some(template) = self.templates.iter().find(|t| t.id == template_id) else {
            return false;
        };

        self.current_form = Some(template.instantiate());
        self.selected_field_id = None;
        true
    }

    /// Snapshot the current form's shape as a user template and persist
    /// the user-template collection.
    ///
    /// Returns the new template's id, or `Ok(None)` when there is no
    /// current form. Guarding against empty forms is the caller's job.
    pub fn save_as_template(&mut self, name: &str, description: &str) -> Result<Option<String>> {
        let Some(form) = &self.current_form else {
            return Ok(None);
        };

        let template = Template {
            id: generate_template_id(),
            name: name.to_string(),
            description: description.to_string(),
            form: TemplateForm {
                title: form.title.clone(),
                description: form.description.clone(),
                fields: form.fields.clone(),
                steps: form.steps.clone(),
                is_multi_step: form.is_multi_step,
                settings: form.settings.clone(),
            },
        };
        let template_id = template.id.clone();
        self.templates.push(template);

        let user_templates = &self.templates[self.builtin_template_count..];
        self.storage.store_collection(USER_TEMPLATES_KEY, user_templates)?;
        Ok(Some(template_id))
    }
}
