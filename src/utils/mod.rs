//! Utility functions

pub mod id_gen;

pub use id_gen::{
    generate_id, generate_form_id, generate_field_id, generate_step_id,
    generate_template_id, generate_submission_id, generate_database_id,
};
