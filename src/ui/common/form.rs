use leptos::prelude::*;

fn label_view(label: String, required: bool) -> impl IntoView {
    view! {
        <label class="label">
            {label}
            {required.then(|| view! { <span class="text-primary ml-0.5">"*"</span> })}
        </label>
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// `name` attribute of the input
    name: &'static str,
    /// Whether field is required (shows asterisk, sets native `required`)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, date, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Lower bound, for date inputs
    #[prop(optional)]
    min: Option<String>,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {label_view(label, required)}
            <input
                type=input_type
                name=name
                class="input-base"
                placeholder=placeholder
                min=min
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// `name` attribute of the textarea
    name: &'static str,
    /// Whether field is required (shows asterisk, sets native `required`)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {label_view(label, required)}
            <textarea
                name=name
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// `name` attribute of the select
    name: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {label_view(label, false)}
            <select
                name=name
                class="input-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
