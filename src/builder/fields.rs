//! Field operations
//!
//! This module provides field management operations on the current form.

use chrono::Utc;
use crate::storage::models::{FieldUpdate, FormField, NewField};
use crate::utils::generate_field_id;
use super::store::FormStore;

impl FormStore {
    /// Append a new field to the current form.
    ///
    /// Assigns a fresh id, places the field on the first step when the
    /// form is multi-step (reassignment is the user's move), selects it,
    /// and returns its id. `None` when there is no current form.
    pub fn add_field(&mut self, field: NewField) -> Option<String> {
        let form = self.current_form.as_mut()?;

        let field_id = generate_field_id();
        let step = if form.is_multi_step { Some(0) } else { None };

        form.fields.push(FormField {
            id: field_id.clone(),
            field_type: field.field_type,
            label: field.label,
            placeholder: field.placeholder,
            required: field.required,
            help_text: field.help_text,
            options: field.options,
            validation: field.validation,
            step,
        });
        form.updated_at = Utc::now();

        self.selected_field_id = Some(field_id.clone());
        self.auto_save();
        Some(field_id)
    }

    /// Merge a partial update into the field matching `field_id`.
    ///
    /// Silently does nothing when the id matches no field.
    pub fn update_field(&mut self, field_id: &str, updates: FieldUpdate) {
        let Some(form) = self.current_form.as_mut() else {
            return;
        };
        let Some(field) = form.fields.iter_mut().find(|f| f.id == field_id) else {
            return;
        };

        if let Some(field_type) = updates.field_type {
            field.field_type = field_type;
        }
        if let Some(label) = updates.label {
            field.label = label;
        }
        if let Some(placeholder) = updates.placeholder {
            field.placeholder = Some(placeholder);
        }
        if let Some(required) = updates.required {
            field.required = required;
        }
        if let Some(help_text) = updates.help_text {
            field.help_text = Some(help_text);
        }
        if let Some(options) = updates.options {
            field.options = options;
        }
        if let Some(validation) = updates.validation {
            field.validation = Some(validation);
        }
        if let Some(step) = updates.step {
            field.step = Some(step);
        }
        form.updated_at = Utc::now();

        self.auto_save();
    }

    /// Remove the field matching `field_id`, clearing the selection if it
    /// pointed there. Removing an absent id is a no-op.
    pub fn remove_field(&mut self, field_id: &str) {
        let Some(form) = self.current_form.as_mut() else {
            return;
        };

        let before = form.fields.len();
        form.fields.retain(|f| f.id != field_id);
        if form.fields.len() == before {
            return;
        }
        form.updated_at = Utc::now();

        if self.selected_field_id.as_deref() == Some(field_id) {
            self.selected_field_id = None;
        }
        self.auto_save();
    }

    /// Move the field at `from_index` to `to_index`, shifting the fields
    /// between them (single-element move, not a swap). Out-of-range
    /// indices are a no-op.
    pub fn reorder_fields(&mut self, from_index: usize, to_index: usize) {
        let Some(form) = self.current_form.as_mut() else {
            return;
        };
        if from_index >= form.fields.len() || to_index >= form.fields.len() {
            return;
        }

        let field = form.fields.remove(from_index);
        form.fields.insert(to_index, field);
        form.updated_at = Utc::now();

        self.auto_save();
    }

    /// Set or clear the field selection.
    ///
    /// The id is not checked against the current form.
    pub fn select_field(&mut self, field_id: Option<String>) {
        self.selected_field_id = field_id;
    }
}
