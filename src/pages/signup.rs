//! Signup page whose in-progress values survive reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every edit rewrites the whole draft through `FormDraftStore`; the next
//! visit restores it. Storage problems never reach the user, the form simply
//! starts empty.

use leptos::prelude::*;

use crate::state::signup::{DraftFormRecord, SignupField};
use crate::util::form_storage::FormDraftStore;

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(DraftFormRecord::default());
    let info = RwSignal::new(String::new());

    // Effects only run in the browser, so this restores after hydration.
    Effect::new(move || {
        if let Some(draft) = FormDraftStore::browser().load() {
            leptos::logging::log!("restored signup draft");
            form.set(draft);
        }
    });

    let on_field_input = move |field: SignupField, value: String| {
        form.update(|f| field.set(f, value));
        form.with_untracked(|f| FormDraftStore::browser().save(f));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(missing) = form.with_untracked(DraftFormRecord::first_missing) {
            info.set(format!("{} is required.", missing.label()));
            return;
        }
        FormDraftStore::browser().clear();
        form.set(DraftFormRecord::default());
        info.set("Thanks! Your details were received.".to_owned());
    };

    let on_discard = move |_| {
        FormDraftStore::browser().clear();
        form.set(DraftFormRecord::default());
        info.set(String::new());
    };

    let fields = SignupField::ALL
        .into_iter()
        .map(move |field| {
            view! {
                <label class="signup-field">
                    <span class="signup-field__label">{field.label()}</span>
                    <input
                        class="signup-input"
                        type=field.input_type()
                        name=field.storage_name()
                        prop:value=move || form.with(|f| field.value(f).to_owned())
                        on:input=move |ev| on_field_input(field, event_target_value(&ev))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Create your account"</h1>
                <p class="signup-card__subtitle">"Your progress is saved on this device."</p>
                <form class="signup-form" on:submit=on_submit>
                    {fields}
                    <button class="signup-button" type="submit">
                        "Sign Up"
                    </button>
                </form>
                <button
                    class="signup-button signup-button--secondary"
                    type="button"
                    disabled=move || form.with(DraftFormRecord::is_blank)
                    on:click=on_discard
                >
                    "Discard draft"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="signup-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
