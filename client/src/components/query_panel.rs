//! Question form: captures the four input fields and submits them to `/ask`.

#[cfg(test)]
#[path = "query_panel_test.rs"]
mod query_panel_test;

use advice::{DEFAULT_LANG, FormSnapshot, SUPPORTED_LANGS};
use leptos::prelude::*;

use crate::components::result_panel::ResultPanel;
use crate::state::ask::AskState;

/// Human-readable name for a language code in the selector.
fn lang_label(code: &str) -> &str {
    match code {
        "en" => "English",
        "hi" => "हिन्दी",
        other => other,
    }
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Asking..." } else { "Ask" }
}

/// Question form plus the result region it drives.
///
/// The submit button stays enabled while a request is in flight; a second
/// submission runs alongside the first and the later completion is rendered.
#[component]
pub fn QueryPanel() -> impl IntoView {
    let ask = expect_context::<RwSignal<AskState>>();

    let question = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let crop = RwSignal::new(String::new());
    let lang = RwSignal::new(DEFAULT_LANG.to_owned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = FormSnapshot {
            question: question.get_untracked(),
            district: district.get_untracked(),
            crop: crop.get_untracked(),
            lang: lang.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            let seq = ask.try_update(AskState::begin).unwrap_or_default();
            log::debug!("ask #{seq}: submitting (lang={})", form.lang);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_form(&form).await;
                if let advice::Outcome::Failure(message) = &outcome {
                    log::warn!("ask #{seq}: {message}");
                }
                ask.update(|state| state.complete(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        drop(form);
    };

    view! {
        <section class="query-panel">
            <form id="ask-form" class="ask-form" on:submit=on_submit>
                <label class="ask-form__label" for="question">"Question"</label>
                <textarea
                    id="question"
                    class="ask-form__question"
                    rows="3"
                    placeholder="Should I irrigate my wheat this week?"
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                ></textarea>
                <div class="ask-form__filters">
                    <label class="ask-form__label" for="district">"District"</label>
                    <input
                        id="district"
                        class="ask-form__input"
                        type="text"
                        placeholder="optional"
                        prop:value=move || district.get()
                        on:input=move |ev| district.set(event_target_value(&ev))
                    />
                    <label class="ask-form__label" for="crop">"Crop"</label>
                    <input
                        id="crop"
                        class="ask-form__input"
                        type="text"
                        placeholder="optional"
                        prop:value=move || crop.get()
                        on:input=move |ev| crop.set(event_target_value(&ev))
                    />
                    <label class="ask-form__label" for="lang">"Language"</label>
                    <select
                        id="lang"
                        class="ask-form__input"
                        prop:value=move || lang.get()
                        on:change=move |ev| lang.set(event_target_value(&ev))
                    >
                        {SUPPORTED_LANGS
                            .into_iter()
                            .map(|code| view! { <option value=code>{lang_label(code)}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button class="ask-form__submit" type="submit">
                    {move || submit_label(ask.with(AskState::is_busy))}
                </button>
            </form>
            <ResultPanel/>
        </section>
    }
}
