//! Result region: answer, confidence, reasons, and citations.
//!
//! Lists are rebuilt from the current `ResultView` on every change, never
//! appended to, so the markup always matches the last completed submission.

#[cfg(test)]
#[path = "result_panel_test.rs"]
mod result_panel_test;

use advice::{CitationView, ResultView};
use leptos::either::Either;
use leptos::prelude::*;

use crate::state::ask::AskState;

/// CSS classes for the result container.
fn result_class(view: &ResultView) -> &'static str {
    match (view.visible, view.failed) {
        (false, _) => "result hidden",
        (true, true) => "result result--error",
        (true, false) => "result",
    }
}

/// Anchor attributes for a linked citation: new browsing context, no opener.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CitationAnchor {
    href: String,
    target: &'static str,
    rel: &'static str,
}

fn citation_anchor(citation: &CitationView) -> Option<CitationAnchor> {
    citation.href.clone().map(|href| CitationAnchor { href, target: "_blank", rel: "noopener" })
}

fn citation_item(citation: &CitationView) -> impl IntoView + use<> {
    let label = citation.label.clone();
    match citation_anchor(citation) {
        Some(anchor) => Either::Left(view! {
            <li class="result__citation">
                <a href=anchor.href target=anchor.target rel=anchor.rel>{label}</a>
            </li>
        }),
        None => Either::Right(view! { <li class="result__citation">{label}</li> }),
    }
}

#[component]
pub fn ResultPanel() -> impl IntoView {
    let ask = expect_context::<RwSignal<AskState>>();
    let result = Memo::new(move |_| ask.with(|state| state.result.clone()));

    view! {
        <div id="result" class=move || result.with(result_class)>
            <p id="answer" class="result__answer">{move || result.with(|r| r.answer.clone())}</p>
            <p class="result__confidence">
                "Confidence: "
                <span id="confidence">{move || result.with(|r| r.confidence.clone())}</span>
            </p>
            <h3 class="result__heading">"Why"</h3>
            <ul id="reasons" class="result__reasons">
                {move || {
                    result.with(|r| {
                        r.reasons
                            .iter()
                            .map(|reason| view! { <li>{reason.clone()}</li> })
                            .collect_view()
                    })
                }}
            </ul>
            <h3 class="result__heading">"Sources"</h3>
            <ul id="citations" class="result__citations">
                {move || result.with(|r| r.citations.iter().map(citation_item).collect_view())}
            </ul>
        </div>
    }
}
