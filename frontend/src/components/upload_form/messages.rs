use common::model::tag::TagOption;

#[derive(Clone)]
pub enum Msg {
    FileChanged(Option<web_sys::File>),
    ToggleDropdown,
    SelectOption(TagOption),
    RemoveTag(TagOption),
    /// Pointer pressed somewhere in the document; `inside` tells whether the
    /// target lies within the dropdown region.
    DocumentPointerDown { inside: bool },
    Submit,
    SubmitSettled,
}
