//! Step operations
//!
//! This module provides step management operations on the current form.

use chrono::Utc;
use crate::storage::models::{FormStep, NewStep, StepUpdate};
use crate::utils::generate_step_id;
use super::store::FormStore;

impl FormStore {
    /// Append a new step and switch the form to multi-step mode.
    ///
    /// Returns the new step's id, `None` when there is no current form.
    pub fn add_step(&mut self, step: NewStep) -> Option<String> {
        let form = self.current_form.as_mut()?;

        let step_id = generate_step_id();
        form.steps.push(FormStep {
            id: step_id.clone(),
            title: step.title,
            description: step.description,
        });
        form.is_multi_step = true;
        form.updated_at = Utc::now();

        self.auto_save();
        Some(step_id)
    }

    /// Merge a partial update into the step matching `step_id`.
    ///
    /// Silently does nothing when the id matches no step.
    pub fn update_step(&mut self, step_id: &str, updates: StepUpdate) {
        let Some(form) = self.current_form.as_mut() else {
            return;
        };
        let Some(step) = form.steps.iter_mut().find(|s| s.id == step_id) else {
            return;
        };

        if let Some(title) = updates.title {
            step.title = title;
        }
        if let Some(description) = updates.description {
            step.description = Some(description);
        }
        form.updated_at = Utc::now();

        self.auto_save();
    }

    /// Remove the step matching `step_id` and reconcile the form.
    ///
    /// The form stays multi-step only while more than one step remains;
    /// dropping to a single step reverts it to single-step mode. Field
    /// step indices are renumbered against the shortened list: indices
    /// past the removed position shift down, fields on the removed step
    /// move to step 0, and all indices clear once no steps remain.
    pub fn remove_step(&mut self, step_id: &str) {
        let Some(form) = self.current_form.as_mut() else {
            return;
        };
        let Some(removed_index) = form.steps.iter().position(|s| s.id == step_id) else {
            return;
        };

        form.steps.remove(removed_index);
        form.is_multi_step = form.steps.len() > 1;

        if form.steps.is_empty() {
            for field in &mut form.fields {
                field.step = None;
            }
        } else {
            for field in &mut form.fields {
                match field.step {
                    Some(index) if index == removed_index => field.step = Some(0),
                    Some(index) if index > removed_index => field.step = Some(index - 1),
                    _ => {}
                }
            }
        }
        form.updated_at = Utc::now();

        self.auto_save();
    }
}
