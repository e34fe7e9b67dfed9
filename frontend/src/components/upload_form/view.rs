//! View rendering for the upload form component.
//!
//! The form stacks three sections: the file picker, the options multi-select
//! and the submit button. The multi-select always shows the selected options
//! as removable chips; when open it also lists every option beneath them,
//! marking the ones already selected.

use common::model::tag::TagOption;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_file_size, option_classes};
use super::messages::Msg;
use super::state::UploadFormComponent;

/// Main view function for the upload form component.
pub fn view(component: &UploadFormComponent, ctx: &Context<UploadFormComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="upload-form" {onsubmit}>
            <h1 class="upload-title">{ ctx.props().title.clone() }</h1>
            { build_file_selector(component, link) }
            { build_tag_select(component, link) }
            { build_submit_button(component) }
        </form>
    }
}

/// File picker plus a line describing the current choice.
fn build_file_selector(component: &UploadFormComponent, link: &Scope<UploadFormComponent>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChanged(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <div class="field">
            <label class="field-label">{"Select File"}</label>
            <input type="file" class="file-input" {onchange} />
            {
                match component.form.file() {
                    Some(file) => html! {
                        <div class="file-summary">
                            { format!("{} ({})", file.name(), format_file_size(file.size() as u64)) }
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

/// Chip area and, when open, the full options list.
fn build_tag_select(component: &UploadFormComponent, link: &Scope<UploadFormComponent>) -> Html {
    let open = component.dropdown.is_open();

    html! {
        <div class="field dropdown" ref={component.dropdown_ref.clone()}>
            <label class="field-label">{"Select Options"}</label>
            <div
                class={classes!("chip-area", open.then_some("open"))}
                onclick={link.callback(|_: MouseEvent| Msg::ToggleDropdown)}
            >
                {
                    if component.form.options().len() == 0 {
                        html! { <span class="placeholder">{"Select options..."}</span> }
                    } else {
                        component.form.options().map(|tag| build_chip(tag, link)).collect::<Html>()
                    }
                }
            </div>
            {
                if open {
                    build_option_list(component, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// One selected option with its delete control.
///
/// The delete click stops propagation so it does not also toggle the dropdown.
fn build_chip(tag: TagOption, link: &Scope<UploadFormComponent>) -> Html {
    let onclick = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::RemoveTag(tag)
    });

    html! {
        <span key={tag.as_str()} class="chip">
            { tag.as_str() }
            <button type="button" class="chip-remove" title="Remove" {onclick}>
                { "×" }
            </button>
        </span>
    }
}

fn build_option_list(component: &UploadFormComponent, link: &Scope<UploadFormComponent>) -> Html {
    html! {
        <div class="dropdown-list">
            {
                for TagOption::ALL.iter().map(|&tag| html! {
                    <div
                        key={tag.as_str()}
                        class={option_classes(component.form.is_selected(tag))}
                        onclick={link.callback(move |_: MouseEvent| Msg::SelectOption(tag))}
                    >
                        { tag.as_str() }
                    </div>
                })
            }
        </div>
    }
}

fn build_submit_button(component: &UploadFormComponent) -> Html {
    let in_flight = component.form.is_in_flight();
    html! {
        <button type="submit" class="submit-btn" disabled={in_flight}>
            { if in_flight { "Sending..." } else { "Submit" } }
        </button>
    }
}
