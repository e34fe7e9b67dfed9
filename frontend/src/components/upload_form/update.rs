//! Update function for the upload form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - File and option changes are pure local state updates.
//! - Presses outside the dropdown region close it; already closed is a no-op.
//! - Submit validates, then posts one multipart request and reports the
//!   outcome with a blocking alert. The button stays disabled while the
//!   request is in flight.

use common::error::ValidationError;
use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::helpers::{alert, outcome_message, send_upload};
use super::messages::Msg;
use super::state::UploadFormComponent;

/// Central update function for the component.
pub fn update(
    component: &mut UploadFormComponent,
    ctx: &Context<UploadFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FileChanged(file) => {
            component.form.set_file(file);
            true
        }
        Msg::ToggleDropdown => component.dropdown.toggle(),
        Msg::SelectOption(tag) => {
            component.form.select_option(tag);
            true
        }
        Msg::RemoveTag(tag) => component.form.remove_tag(tag),
        Msg::DocumentPointerDown { inside } => component.dropdown.pointer_down(inside),
        Msg::Submit => match component.form.begin_submit() {
            Err(ValidationError::InFlight) => false,
            Err(err) => {
                log!("Submit rejected:", err.to_string());
                alert(&err.to_string());
                false
            }
            Ok(plan) => {
                let endpoint = ctx.props().endpoint.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = send_upload(&endpoint, &plan).await;
                    match &outcome {
                        Ok(result) => log!("Response:", result.to_string()),
                        Err(err) => error!("Error:", err.to_string()),
                    }
                    alert(outcome_message(&outcome));
                    // Settles on both branches so the button is re-enabled.
                    link.send_message(Msg::SubmitSettled);
                });
                true
            }
        },
        Msg::SubmitSettled => {
            component.form.finish_submit();
            true
        }
    }
}
