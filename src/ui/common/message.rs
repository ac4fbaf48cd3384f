//! Inline validation and status messages

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Shows the message when Some, hidden when None
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="message-error" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Hint shown while a form is not yet complete
#[component]
pub fn InfoMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="message-info">
                <Icon name=icons::INFO class="w-4 h-4"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
