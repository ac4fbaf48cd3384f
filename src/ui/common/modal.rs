use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-lg)
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(feature = "csr")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div
                class="absolute inset-0 bg-black/40 backdrop-blur-sm"
                on:click=move |_| {
                    if close_on_backdrop {
                        on_close.run(());
                    }
                }
            ></div>
            <div class=format!("relative w-full {} bg-white rounded-3xl shadow-2xl", max_width)>
                <div class="flex items-center justify-between px-6 pt-6">
                    <h3 class="text-xl font-heading font-bold text-foreground">{move || title.get()}</h3>
                    <button
                        class="text-foreground/50 hover:text-foreground transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Simple alert/info modal
#[component]
pub fn AlertDialog(
    /// Dialog title
    #[prop(into)]
    title: Signal<String>,
    /// Dialog message; line breaks are kept
    #[prop(into)]
    message: Signal<String>,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when closed
    on_close: Callback<()>,
    /// Close button text
    #[prop(default = "OK".to_string())]
    button_text: String,
) -> impl IntoView {
    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=on_close
        >
            <div class="space-y-6">
                <p class="text-foreground/80 whitespace-pre-line">{move || message.get()}</p>

                <div class="flex justify-end border-t border-gray-200 pt-4">
                    <button
                        class="btn-base btn-primary"
                        on:click=move |_| on_close.run(())
                    >
                        {button_text}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
