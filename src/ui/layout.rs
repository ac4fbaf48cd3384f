//! Page chrome shared across routes
//!
//! The home page uses the fixed [`SiteHeader`] with full navigation; inner
//! pages use the compact [`PageHeader`] with a link back home. Every page ends
//! with [`SiteFooter`].

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::catalog::{
    ADDRESS, BOOKING_PATH, EMAIL, FOOTER_COLUMNS, NAV_LINKS, NavLink, PHONE, SITE_NAME,
};
use crate::ui::common::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::Reveal;

/// Document title and description for a route
#[component]
pub fn PageMeta(
    /// Page name, prefixed to the site name
    #[prop(optional)]
    title: Option<&'static str>,
    description: &'static str,
) -> impl IntoView {
    let full_title = match title {
        Some(title) => format!("{title} | {SITE_NAME}"),
        None => format!("{SITE_NAME} - Flexible Office Space"),
    };

    view! {
        <Title text=full_title.clone() />
        <Meta name="description" content=description />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=full_title />
        <Meta property="og:description" content=description />
    }
}

/// Fixed top navigation with a collapsible mobile menu
#[component]
pub fn SiteHeader() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_: leptos::ev::MouseEvent| set_menu_open.set(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-sm border-b border-gray-200">
            <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="text-2xl font-heading font-bold text-foreground">
                        {SITE_NAME}
                    </A>

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_LINKS.iter().map(|link| view! {
                            <A href=link.href attr:class="nav-link">{link.label}</A>
                        }).collect_view()}
                        <LinkButton href=BOOKING_PATH>"Book Now"</LinkButton>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 text-foreground hover:text-primary transition-colors"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile Navigation
                <Show when=move || menu_open.get()>
                    <div class="md:hidden py-4 border-t border-gray-200">
                        <nav class="flex flex-col space-y-4">
                            {NAV_LINKS.iter().map(|link| view! {
                                <A href=link.href attr:class="nav-link" on:click=close_menu>
                                    {link.label}
                                </A>
                            }).collect_view()}
                            <A href=BOOKING_PATH attr:class="btn-base btn-primary w-full" on:click=close_menu>
                                "Book Now"
                            </A>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// Compact header for inner pages: back link and centred title
#[component]
pub fn PageHeader(
    title: &'static str,
    /// Button on the right; a spacer keeps the title centred without one
    #[prop(optional)]
    action: Option<NavLink>,
) -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm border-b">
            <div class="max-w-[120rem] mx-auto px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="flex items-center gap-3 text-foreground hover:text-primary transition-colors">
                        <Icon name=icons::ARROW_LEFT class="w-5 h-5" />
                        <span class="font-heading font-semibold">"Back to Home"</span>
                    </A>
                    <h1 class="text-2xl font-heading font-bold">{title}</h1>
                    {match action {
                        Some(link) => view! { <LinkButton href=link.href>{link.label}</LinkButton> }.into_any(),
                        None => view! { <div class="w-24"></div> }.into_any(),
                    }}
                </div>
            </div>
        </header>
    }
}

/// Centred section title with an optional lead paragraph
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)]
    lead: Option<&'static str>,
    /// Use light text, for gradient backgrounds
    #[prop(default = false)]
    inverse: bool,
) -> impl IntoView {
    let lead_class = if inverse { "text-lg opacity-80" } else { "text-lg text-foreground/70" };
    let title_class = if inverse {
        "text-4xl md:text-5xl font-heading font-bold mb-4"
    } else {
        "text-4xl md:text-5xl font-heading font-bold text-foreground mb-4"
    };

    view! {
        <Reveal class="text-center max-w-3xl mx-auto mb-16">
            <h2 class=title_class>{title}</h2>
            {lead.map(|lead| view! { <p class=lead_class>{lead}</p> })}
        </Reveal>
    }
}

/// Gradient banner inviting the visitor to book or browse
#[component]
pub fn CallToAction(
    #[prop(default = "Ready to Get Started?")]
    title: &'static str,
    #[prop(default = "Join hundreds of professionals who have found their perfect workspace with us.")]
    lead: &'static str,
    #[prop(default = NavLink { label: "Book Your Space", href: BOOKING_PATH })]
    primary: NavLink,
    #[prop(default = NavLink { label: "Explore Spaces", href: "/office-spaces" })]
    secondary: NavLink,
) -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-primary to-secondary text-white">
            <Reveal class="max-w-[120rem] mx-auto px-6 lg:px-8 text-center">
                <h2 class="text-3xl md:text-4xl font-heading font-bold mb-4">{title}</h2>
                <p class="text-lg opacity-90 mb-8 max-w-2xl mx-auto">{lead}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <LinkButton href=primary.href variant=ButtonVariant::Inverse size=ButtonSize::Large>
                        {primary.label}
                    </LinkButton>
                    <LinkButton href=secondary.href variant=ButtonVariant::InverseOutline size=ButtonSize::Large>
                        {secondary.label}
                    </LinkButton>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer class="bg-foreground text-white py-16 px-6">
            <div class="max-w-[120rem] mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12">
                    <div>
                        <h3 class="text-2xl font-heading font-bold mb-4">{SITE_NAME}</h3>
                        <p class="text-gray-300">
                            "Your premier destination for flexible office solutions in the heart of the city."
                        </p>
                    </div>
                    {FOOTER_COLUMNS.iter().map(|(heading, items)| view! {
                        <div>
                            <h4 class="font-semibold text-lg mb-4">{*heading}</h4>
                            <ul class="space-y-2 text-gray-300">
                                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                    <div>
                        <h4 class="font-semibold text-lg mb-4">"Contact"</h4>
                        <ul class="space-y-2 text-gray-300">
                            <li>{ADDRESS}</li>
                            <li>"Phone: " {PHONE}</li>
                            <li>"Email: " {EMAIL}</li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-700 mt-12 pt-8 text-center text-gray-400">
                    <p>"© " {year} " " {SITE_NAME} ". All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
