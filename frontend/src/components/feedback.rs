//! Feedback form shown in the footer modal.

use leptos::*;

use crate::components::Notifier;
use crate::config::{FEEDBACK_BUSY_LABEL, FEEDBACK_LABEL, FEEDBACK_MODAL_ID};
use crate::services::dom::hide_modal;
use crate::services::HttpApi;
use crate::state::feedback::{send_feedback, FeedbackFields};

#[component]
pub fn FeedbackForm(notifier: Notifier) -> impl IntoView {
    let fields = create_rw_signal(FeedbackFields::default());
    let (sending, set_sending) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        set_sending.set(true);
        let current = fields.get_untracked();

        spawn_local(async move {
            let outcome = send_feedback(&HttpApi::default(), &current).await;
            notifier.notify(outcome.notice);
            if outcome.sent {
                fields.set(FeedbackFields::default());
                hide_modal(FEEDBACK_MODAL_ID);
            }
            set_sending.set(false);
        });
    };

    view! {
        <form id="feedbackForm" on:submit=on_submit>
            <div class="mb-3">
                <label for="feedbackName" class="form-label">"Name"</label>
                <input
                    type="text"
                    id="feedbackName"
                    class="form-control"
                    required=true
                    prop:value=move || fields.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        fields.update(|f| f.name = v);
                    }
                />
            </div>
            <div class="mb-3">
                <label for="feedbackEmail" class="form-label">"Email"</label>
                <input
                    type="email"
                    id="feedbackEmail"
                    class="form-control"
                    required=true
                    prop:value=move || fields.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        fields.update(|f| f.email = v);
                    }
                />
            </div>
            <div class="mb-3">
                <label for="feedbackSubject" class="form-label">"Subject"</label>
                <input
                    type="text"
                    id="feedbackSubject"
                    class="form-control"
                    required=true
                    prop:value=move || fields.with(|f| f.subject.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        fields.update(|f| f.subject = v);
                    }
                />
            </div>
            <div class="mb-3">
                <label for="feedbackMessage" class="form-label">"Message"</label>
                <textarea
                    id="feedbackMessage"
                    class="form-control"
                    rows="4"
                    required=true
                    prop:value=move || fields.with(|f| f.message.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        fields.update(|f| f.message = v);
                    }
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                <i class=move || if sending.get() { "fas fa-spinner fa-spin" } else { "fas fa-paper-plane" }></i>
                " "
                {move || if sending.get() { FEEDBACK_BUSY_LABEL } else { FEEDBACK_LABEL }}
            </button>
        </form>
    }
}
