//! # Formcore
//!
//! Core library for a drag-and-drop form builder: the form document store,
//! per-field validation, a template registry and the filler-side step walk,
//! persisted to a local SQLite store.
//!
//! ## Features
//!
//! - Single-document form editing with field and step CRUD
//! - Automatic persistence after every mutation
//! - Pure per-field validation (required, length, pattern, range, shape)
//! - Built-in and user-saved form templates
//! - Multi-step fill sessions with progress tracking and submissions
//!
//! ## Example
//!
//! ```no_run
//! use formcore::{FormStore, NewField, FieldType};
//! use std::path::Path;
//!
//! let mut store = FormStore::open(Path::new("/path/to/data")).unwrap();
//! store.create_new_form();
//!
//! store.add_field(NewField {
//!     field_type: FieldType::Email,
//!     label: "Email Address".to_string(),
//!     required: true,
//!     ..Default::default()
//! });
//!
//! let form_id = store.save_form().unwrap();
//! println!("saved form {:?}", form_id);
//! ```

pub mod storage;
pub mod builder;
pub mod validation;
pub mod filler;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{StoreError, Result};
pub use storage::models::{
    Form, FormField, FormStep, FormSettings, FieldType, ValidationRules,
    Template, TemplateForm, AnswerValue, Submission, StoreProperties,
    NewField, FieldUpdate, NewStep, StepUpdate, FormUpdate,
};
pub use builder::FormStore;
pub use validation::validate_field;
pub use filler::FillSession;

/// Database schema version constant
pub const DB_VERSION: &str = "1";

/// Entity ID length (forms, fields, steps, templates, submissions)
pub const ENTITY_ID_LENGTH: usize = 9;

/// Database filename
pub const DATABASE_FILENAME: &str = "formbuilder.dat";

/// Storage key for the saved forms collection
pub const SAVED_FORMS_KEY: &str = "formBuilder_savedForms";

/// Storage key for the user template collection
pub const USER_TEMPLATES_KEY: &str = "formBuilder_templates";

/// Storage key for recorded submissions
pub const SUBMISSIONS_KEY: &str = "formSubmissions";

/// Title given to a freshly created form
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

/// Submit button text used by default form settings
pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";
