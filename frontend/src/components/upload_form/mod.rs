//! Upload form: a file picker, a multi-select of redaction options and a
//! submit button posting both to the host as `multipart/form-data`.
//!
//! Responsibilities
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Attach the document-level outside-click listener on first render and
//!   release it in `destroy`, so exactly one listener exists per mounted form.

use yew::prelude::*;

mod helpers;
mod messages;
mod outside_click;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadFormProps;
pub use state::UploadFormComponent;

impl Component for UploadFormComponent {
    type Message = Msg;
    type Properties = UploadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.outside_click.is_none() {
            let on_press = ctx
                .link()
                .callback(|inside: bool| Msg::DocumentPointerDown { inside });
            self.outside_click =
                outside_click::listen_pointer_down(self.dropdown_ref.clone(), on_press);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(subscription) = self.outside_click.take() {
            subscription.release();
        }
    }
}
