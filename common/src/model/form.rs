//! Local state of the upload form.
//!
//! `FormState` owns the chosen file and the ordered set of selected redaction
//! options. It is generic over the file handle so the browser component can
//! store a `web_sys::File` while tests use plain values.
//!
//! The options set preserves insertion order and cannot hold duplicates. A tag
//! toggled off and back on moves to the end of the set.

use indexmap::IndexSet;

use crate::error::ValidationError;
use crate::model::tag::TagOption;
use crate::requests::UploadPlan;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    file: Option<F>,
    options: IndexSet<TagOption>,
    in_flight: bool,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self {
            file: None,
            options: IndexSet::new(),
            in_flight: false,
        }
    }
}

impl<F> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// Selected options in insertion order.
    pub fn options(&self) -> impl ExactSizeIterator<Item = TagOption> + '_ {
        self.options.iter().copied()
    }

    pub fn is_selected(&self, tag: TagOption) -> bool {
        self.options.contains(&tag)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Replaces the chosen file. `None` clears it (the picker was cancelled).
    pub fn set_file(&mut self, file: Option<F>) {
        self.file = file;
    }

    /// Toggles `tag`: removes it when already selected, otherwise appends it.
    ///
    /// Returns `true` when the tag is selected after the call.
    pub fn select_option(&mut self, tag: TagOption) -> bool {
        if self.options.shift_remove(&tag) {
            false
        } else {
            self.options.insert(tag);
            true
        }
    }

    /// Removes `tag` if present. Returns whether anything changed.
    pub fn remove_tag(&mut self, tag: TagOption) -> bool {
        self.options.shift_remove(&tag)
    }

    /// Validates the form and marks a submission as in flight.
    ///
    /// Checks run in order: pending submission, missing file, empty options.
    /// On success the caller owns an `UploadPlan` and must call
    /// [`FormState::finish_submit`] once the request settles.
    pub fn begin_submit(&mut self) -> Result<UploadPlan<F>, ValidationError>
    where
        F: Clone,
    {
        if self.in_flight {
            return Err(ValidationError::InFlight);
        }
        let file = self.file.clone().ok_or(ValidationError::MissingFile)?;
        if self.options.is_empty() {
            return Err(ValidationError::NoOptions);
        }
        self.in_flight = true;
        Ok(UploadPlan::new(file, self.options().collect()))
    }

    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }
}
