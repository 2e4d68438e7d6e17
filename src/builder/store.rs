//! Main FormStore API
//!
//! This module provides the primary interface for editing, saving and
//! loading form documents.

use std::path::{Path, PathBuf};
use chrono::Utc;
use crate::error::{StoreError, Result};
use crate::storage::Storage;
use crate::storage::models::{Form, FormSettings, FormUpdate, StoreProperties, Submission, Template};
use crate::storage::queries::{self, parse_timestamp};
use crate::utils::generate_form_id;
use crate::{DATABASE_FILENAME, DEFAULT_FORM_TITLE, SAVED_FORMS_KEY, SUBMISSIONS_KEY, USER_TEMPLATES_KEY};

/// Single source of truth for the form under edit
///
/// Owns the current form, the field selection, the template registry and
/// the saved-form collection. Every mutating operation replaces the
/// affected document snapshot and triggers an automatic save; operations
/// aimed at a missing target are silent no-ops.
pub struct FormStore {
    /// Path to the store folder
    pub(crate) folder: PathBuf,
    /// Persistence backend
    pub(crate) storage: Storage,
    /// The form being edited, if any
    pub(crate) current_form: Option<Form>,
    /// Field currently open in the configuration panel
    pub(crate) selected_field_id: Option<String>,
    /// Built-in templates followed by user-saved ones
    pub(crate) templates: Vec<Template>,
    /// Number of built-in templates at the head of `templates`
    pub(crate) builtin_template_count: usize,
    /// All persisted forms, loaded at open
    pub(crate) saved_forms: Vec<Form>,
}

impl FormStore {
    /// Open a store in the given folder, creating it on first use.
    ///
    /// Saved forms and user templates are read once here; an empty store
    /// is valid.
    pub fn open(folder: &Path) -> Result<Self> {
        std::fs::create_dir_all(folder)?;

        let storage = Storage::open(&folder.join(DATABASE_FILENAME))?;
        let saved_forms: Vec<Form> = storage.load_collection(SAVED_FORMS_KEY)?;
        let user_templates: Vec<Template> = storage.load_collection(USER_TEMPLATES_KEY)?;

        let mut templates = super::templates::builtin_templates();
        let builtin_template_count = templates.len();
        templates.extend(user_templates);

        Ok(Self {
            folder: folder.to_path_buf(),
            storage,
            current_form: None,
            selected_field_id: None,
            templates,
            builtin_template_count,
            saved_forms,
        })
    }

    /// The form currently being edited
    pub fn current_form(&self) -> Option<&Form> {
        self.current_form.as_ref()
    }

    /// Id of the field open for configuration
    pub fn selected_field_id(&self) -> Option<&str> {
        self.selected_field_id.as_deref()
    }

    /// All templates, built-in first
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// All persisted forms
    pub fn saved_forms(&self) -> &[Form] {
        &self.saved_forms
    }

    /// Get the store folder path
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Replace the current form with a fresh default one and clear the
    /// field selection
    pub fn create_new_form(&mut self) {
        self.current_form = Some(default_form());
        self.selected_field_id = None;
    }

    /// Set an existing form as the one under edit
    pub fn load_form(&mut self, form: Form) {
        self.current_form = Some(form);
        self.selected_field_id = None;
    }

    /// Apply a metadata update to the current form
    pub fn update_form(&mut self, updates: FormUpdate) {
        let Some(form) = self.current_form.as_mut() else {
            return;
        };

        if let Some(title) = updates.title {
            form.title = title;
        }
        if let Some(description) = updates.description {
            form.description = Some(description);
        }
        if let Some(is_multi_step) = updates.is_multi_step {
            form.is_multi_step = is_multi_step;
        }
        if let Some(settings) = updates.settings {
            form.settings = settings;
        }
        form.updated_at = Utc::now();

        self.auto_save();
    }

    /// Upsert the current form into the saved collection and flush it.
    ///
    /// Returns the saved form's id, or `None` when there is nothing to
    /// save. A storage failure here always surfaces.
    pub fn save_form(&mut self) -> Result<Option<String>> {
        let Some(form) = self.current_form.clone() else {
            return Ok(None);
        };

        let form_id = form.id.clone();
        self.upsert_saved(form);
        self.storage.store_collection(SAVED_FORMS_KEY, &self.saved_forms)?;
        Ok(Some(form_id))
    }

    /// Look up a persisted form by id
    pub fn load_form_by_id(&self, form_id: &str) -> Option<&Form> {
        self.saved_forms.iter().find(|f| f.id == form_id)
    }

    /// Persist the current form after a mutation.
    ///
    /// Same upsert as `save_form`, but fire-and-forget: a storage failure
    /// is logged and swallowed so mutations stay infallible. Use
    /// `save_form` when the flush must be observed.
    pub fn auto_save(&mut self) {
        let Some(form) = self.current_form.clone() else {
            return;
        };

        self.upsert_saved(form);
        if let Err(err) = self.storage.store_collection(SAVED_FORMS_KEY, &self.saved_forms) {
            log::warn!("auto-save failed: {err}");
        }
    }

    /// Replace the saved copy with the same id, or append
    pub(crate) fn upsert_saved(&mut self, form: Form) {
        match self.saved_forms.iter_mut().find(|f| f.id == form.id) {
            Some(existing) => *existing = form,
            None => self.saved_forms.push(form),
        }
    }

    /// Get store database properties
    pub fn properties(&self) -> Result<StoreProperties> {
        let conn = self.storage.connection()?;

        let raw_props = queries::get_properties(conn)?
            .ok_or_else(|| StoreError::DatabaseError("Properties not found".to_string()))?;

        Ok(StoreProperties {
            database_id: raw_props.database_id,
            version: raw_props.version,
            create_timestamp: raw_props.create_timestamp.as_deref().and_then(parse_timestamp),
            update_timestamp: raw_props.update_timestamp.as_deref().and_then(parse_timestamp),
        })
    }

    /// Append a submission to the recorded collection and flush it
    pub fn record_submission(&mut self, submission: Submission) -> Result<()> {
        let mut submissions: Vec<Submission> = self.storage.load_collection(SUBMISSIONS_KEY)?;
        submissions.push(submission);
        self.storage.store_collection(SUBMISSIONS_KEY, &submissions)
    }

    /// All recorded submissions
    pub fn submissions(&self) -> Result<Vec<Submission>> {
        self.storage.load_collection(SUBMISSIONS_KEY)
    }
}

/// A fresh form with generated id, default title and settings
fn default_form() -> Form {
    let now = Utc::now();
    Form {
        id: generate_form_id(),
        title: DEFAULT_FORM_TITLE.to_string(),
        description: None,
        fields: Vec::new(),
        steps: Vec::new(),
        is_multi_step: false,
        settings: FormSettings::default(),
        created_at: now,
        updated_at: now,
    }
}
