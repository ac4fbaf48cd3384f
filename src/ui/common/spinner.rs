use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4 border-2",
            SpinnerSize::Medium => "w-8 h-8 border-[3px]",
            SpinnerSize::Large => "w-12 h-12 border-4",
        }
    }
}

/// Ring spinner in the current text colour
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    let ring = format!(
        "inline-block rounded-full border-current border-t-transparent animate-spin {} {}",
        size.class(),
        class
    );
    let has_label = !label.is_empty();

    view! {
        <span class="inline-flex items-center gap-2" role="status" aria-live="polite">
            <span class=ring></span>
            <span class="sr-only">"Loading..."</span>
            {has_label.then(|| view! { <span class="text-sm">{label}</span> })}
        </span>
    }
}

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Small class=class />
    }
}
