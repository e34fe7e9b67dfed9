//! Component state for the upload form.

use common::model::dropdown::DropdownState;
use common::model::form::FormState;
use common::subscription::Subscription;
use yew::prelude::*;

/// Main state container for the `UploadFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct UploadFormComponent {
    /// Chosen file and selected redaction options.
    pub form: FormState<web_sys::File>,

    /// Whether the options list is expanded.
    pub dropdown: DropdownState,

    /// Wraps the chip area and the options list; presses outside it close the dropdown.
    pub dropdown_ref: NodeRef,

    /// Document `mousedown` listener, held from first render until `destroy`.
    pub outside_click: Option<Subscription>,
}

impl UploadFormComponent {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            dropdown: DropdownState::default(),
            dropdown_ref: NodeRef::default(),
            outside_click: None,
        }
    }
}
