//! Filler-side fill session
//!
//! Walks one loaded form step by step, collecting and validating answers,
//! then records a submission. Independent of the builder surface; the
//! form is loaded by id from the store and owned by the session.

use std::collections::HashMap;
use chrono::Utc;
use crate::builder::FormStore;
use crate::error::Result;
use crate::storage::models::{AnswerValue, Form, FormField, Submission};
use crate::utils::generate_submission_id;
use crate::validation::validate_field;

/// One end user's walk through a form
pub struct FillSession {
    form: Form,
    current_step: usize,
    answers: HashMap<String, AnswerValue>,
    errors: HashMap<String, String>,
    submitted: bool,
}

impl FillSession {
    /// Start a session at the first step with no answers
    pub fn new(form: Form) -> Self {
        Self {
            form,
            current_step: 0,
            answers: HashMap::new(),
            errors: HashMap::new(),
            submitted: false,
        }
    }

    /// The form being filled
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Zero-based index of the step being shown
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of steps in the walk (always at least one)
    pub fn total_steps(&self) -> usize {
        self.form.total_steps()
    }

    /// Completion percentage for the progress bar
    pub fn progress(&self) -> f64 {
        (self.current_step + 1) as f64 / self.total_steps() as f64 * 100.0
    }

    /// Fields shown on the current step
    pub fn current_fields(&self) -> Vec<&FormField> {
        self.form.fields_for_step(self.current_step)
    }

    /// True once the final step is reached
    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 >= self.total_steps()
    }

    /// True once the session has been submitted
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The collected answer for a field, if any
    pub fn answer(&self, field_id: &str) -> Option<&AnswerValue> {
        self.answers.get(field_id)
    }

    /// Standing validation errors, keyed by field id
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Record an answer, clearing any standing error for that field
    pub fn set_answer(&mut self, field_id: &str, value: AnswerValue) {
        self.answers.insert(field_id.to_string(), value);
        self.errors.remove(field_id);
    }

    /// Validate every field on the current step, replacing the error map.
    ///
    /// Returns true when the step is clean.
    pub fn validate_current_step(&mut self) -> bool {
        let mut step_errors = HashMap::new();
        for field in self.form.fields_for_step(self.current_step) {
            if let Some(message) = validate_field(field, self.answers.get(&field.id)) {
                step_errors.insert(field.id.clone(), message);
            }
        }

        let clean = step_errors.is_empty();
        self.errors = step_errors;
        clean
    }

    /// Advance to the next step if the current one validates.
    ///
    /// Returns true when the step changed.
    pub fn next(&mut self) -> bool {
        if !self.validate_current_step() {
            return false;
        }
        if self.current_step + 1 >= self.total_steps() {
            return false;
        }
        self.current_step += 1;
        true
    }

    /// Step back, keeping answers and clearing nothing.
    ///
    /// Returns true when the step changed.
    pub fn previous(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        true
    }

    /// Validate the current step and record a submission.
    ///
    /// `Ok(None)` when validation fails (the errors are left standing for
    /// the surface to render). A storage failure is the only error path.
    pub fn submit(&mut self, store: &mut FormStore) -> Result<Option<Submission>> {
        if !self.validate_current_step() {
            return Ok(None);
        }

        let submission = Submission {
            id: generate_submission_id(),
            form_id: self.form.id.clone(),
            form_title: self.form.title.clone(),
            data: self.answers.clone(),
            submitted_at: Utc::now(),
        };
        store.record_submission(submission.clone())?;
        self.submitted = true;
        Ok(Some(submission))
    }
}
