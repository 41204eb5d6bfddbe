// src/application/usecase/form_binding.rs
// Form state bound to a record repository

use crate::application::dto::Draft;
use crate::domain::errors::{FormError, FormResult};
use crate::domain::repository::{Record, RecordRepository};

/// A draft plus the id of the record being edited, if any.
///
/// Without an editing id the form is in create mode; a successful submit or
/// a cancel always brings it back there.
#[derive(Debug, Clone, Default)]
pub struct FormBinding<D: Draft> {
    draft: D,
    editing_id: Option<String>,
}

impl<D: Draft> FormBinding<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            editing_id: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn set_field(&mut self, field: D::Field) {
        self.draft.set_field(field);
    }

    /// Load `record` into the draft and switch to edit mode
    pub fn begin_edit(&mut self, record: &D::Record) {
        self.draft = D::from_record(record);
        self.editing_id = Some(record.id().to_string());
    }

    pub fn cancel(&mut self) {
        self.draft = D::default();
        self.editing_id = None;
    }

    /// Commit the draft into `store` and reset the form.
    ///
    /// Returns the id of the inserted or updated record. On any error the
    /// draft and edit mode are left as they were.
    pub fn submit<R>(&mut self, store: &mut R) -> FormResult<String>
    where
        R: RecordRepository<D::Record>,
    {
        let record = self.draft.commit().map_err(|e| {
            log::warn!("Form rejected: {}", e);
            FormError::from(e)
        })?;

        let id = match &self.editing_id {
            Some(id) => {
                store.update(id, record)?;
                log::info!("Updated record {}", id);
                id.clone()
            }
            None => {
                let id = store.insert(record);
                log::info!("Added record {}", id);
                id
            }
        };

        self.cancel();
        Ok(id)
    }
}
