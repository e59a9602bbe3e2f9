use crate::triage::TriagePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <TriagePage />
    }
}
