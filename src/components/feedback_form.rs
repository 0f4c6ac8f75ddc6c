use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::feedback::{self, DeliveryError, FeedbackRecord};
use crate::validation;

/// Simulated round-trip before the success banner shows.
const SUBMIT_SETTLE_MS: u32 = 800;
/// How long the success banner stays up before the form is usable again.
const SUCCESS_BANNER_MS: u32 = 5_000;

fn error_slot(field: &'static str, error: Option<&'static str>) -> Html {
    html! {
        <div
            id={format!("{}-error", field)}
            class={classes!("field-error", error.is_some().then(|| "visible"))}
        >
            { error.unwrap_or_default() }
        </div>
    }
}

#[function_component(FeedbackForm)]
pub fn feedback_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let category = use_state(|| "general".to_string());
    let message = use_state(String::new);

    let name_error = use_state(|| None::<&'static str>);
    let email_error = use_state(|| None::<&'static str>);
    let message_error = use_state(|| None::<&'static str>);

    let submitting = use_state(|| false);
    let submitted = use_state(|| false);

    // The select keeps its own DOM selection; a ref lets the reset put it
    // back to the default option.
    let category_ref = use_node_ref();

    // Typing into a field clears its error right away.
    let on_name_input = {
        let name = name.clone();
        let name_error = name_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
            name_error.set(None);
        })
    };
    let on_email_input = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            email_error.set(None);
        })
    };
    let on_message_input = {
        let message = message.clone();
        let message_error = message_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
            message_error.set(None);
        })
    };
    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let category = category.clone();
        let message = message.clone();
        let name_error = name_error.clone();
        let email_error = email_error.clone();
        let message_error = message_error.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let category_ref = category_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting || *submitted {
                return;
            }

            let name_err = validation::validate_field("name", name.as_str());
            let email_err = validation::validate_field("email", email.as_str());
            let message_err = validation::validate_field("message", message.as_str());
            name_error.set(name_err);
            email_error.set(email_err);
            message_error.set(message_err);
            if name_err.is_some() || email_err.is_some() || message_err.is_some() {
                return;
            }

            submitting.set(true);
            let record = FeedbackRecord::from_fields(
                name.as_str(),
                email.as_str(),
                category.as_str(),
                message.as_str(),
            );

            let name = name.clone();
            let email = email.clone();
            let category = category.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            let category_ref = category_ref.clone();
            spawn_local(async move {
                match feedback::deliver(&record).await {
                    Ok(()) => {}
                    Err(DeliveryError::NoEndpoint) => {
                        // No backend yet: compose a mail draft and keep a
                        // local backup copy.
                        feedback::open_mail_draft(&record);
                        feedback::append_submission(record);
                    }
                    Err(e) => {
                        log::error!("Feedback delivery failed: {}", e);
                        feedback::open_mail_draft(&record);
                        feedback::append_submission(record);
                    }
                }

                TimeoutFuture::new(SUBMIT_SETTLE_MS).await;

                submitting.set(false);
                submitted.set(true);
                name.set(String::new());
                email.set(String::new());
                category.set("general".to_string());
                message.set(String::new());
                if let Some(select) = category_ref.cast::<HtmlSelectElement>() {
                    select.set_value("general");
                }

                TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                submitted.set(false);
            });
        })
    };

    html! {
        <form id="feedback-form" class="feedback-form" {onsubmit} novalidate={true}>
            <div class="form-row">
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    type="text"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    class={classes!(name_error.is_some().then(|| "invalid-input"))}
                />
                { error_slot("name", *name_error) }
            </div>
            <div class="form-row">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    oninput={on_email_input}
                    class={classes!(email_error.is_some().then(|| "invalid-input"))}
                />
                { error_slot("email", *email_error) }
            </div>
            <div class="form-row">
                <label for="category">{"Category"}</label>
                <select id="category" ref={category_ref.clone()} onchange={on_category_change}>
                    <option value="general" selected={true}>{"General"}</option>
                    <option value="bug">{"Bug report"}</option>
                    <option value="feature">{"Feature request"}</option>
                    <option value="other">{"Other"}</option>
                </select>
            </div>
            <div class="form-row">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    rows="5"
                    placeholder="What should we know?"
                    value={(*message).clone()}
                    oninput={on_message_input}
                    class={classes!(message_error.is_some().then(|| "invalid-input"))}
                />
                { error_slot("message", *message_error) }
            </div>
            <button
                id="submit-btn"
                type="submit"
                class={classes!("submit-btn", (*submitting).then(|| "loading"))}
                disabled={*submitting || *submitted}
                style={if *submitted { "display: none;" } else { "" }}
            >
                { if *submitting { "Sending..." } else { "Send Feedback" } }
            </button>
            <div id="form-success" class={classes!("form-success", (*submitted).then(|| "visible"))}>
                {"Thanks for the feedback! Your email client should have a draft ready to send."}
            </div>
        </form>
    }
}
