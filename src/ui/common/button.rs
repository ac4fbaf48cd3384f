use crate::ui::common::spinner::InlineSpinner;
use crate::ui::icon::Icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Brand gradient fill
    Primary,
    /// Bordered, brand colour text
    Outline,
    /// Bordered in the secondary brand colour
    OutlineSecondary,
    /// White fill, for use on gradient backgrounds
    Inverse,
    /// White border, for use on gradient backgrounds
    InverseOutline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::OutlineSecondary => "btn-outline-secondary",
            ButtonVariant::Inverse => "btn-inverse",
            ButtonVariant::InverseOutline => "btn-inverse-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    [
        "btn-base",
        variant.class(),
        size.class(),
        class,
    ]
    .iter()
    .filter(|c| !c.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// `type` attribute; `submit` inside forms
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Text replacing the content while loading
    #[prop(default = "Loading...")]
    loading_text: &'static str,
    /// Optional icon name to show after text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Button content (text or elements)
    children: ChildrenFn,
) -> impl IntoView {
    let full_classes = button_classes(variant, size, &class);

    view! {
        <button
            type=button_type
            class=full_classes
            on:click=move |_| {
                if !loading.get_untracked() {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            }
            disabled=move || disabled.get() || loading.get()
        >
            {move || if loading.get() {
                view! {
                    <InlineSpinner />
                    <span>{loading_text}</span>
                }.into_any()
            } else {
                view! {
                    {children()}
                    {icon.map(|name| view! { <Icon name=name class="w-4 h-4"/> })}
                }.into_any()
            }}
        </button>
    }
}

/// Client-side navigation link styled as a button
#[component]
pub fn LinkButton(
    /// Route to navigate to
    href: &'static str,
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Optional icon name to show after text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <A href=href attr:class=button_classes(variant, size, &class)>
            {children()}
            {icon.map(|name| view! { <Icon name=name class="w-4 h-4"/> })}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonVariant::Primary, ButtonSize::Medium, ""),
            "btn-base btn-primary"
        );
        assert_eq!(
            button_classes(ButtonVariant::Inverse, ButtonSize::Large, "w-full"),
            "btn-base btn-inverse btn-lg w-full"
        );
    }
}
