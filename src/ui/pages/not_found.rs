//! Not found page component
//!
//! Shown for any path the router does not know.

use leptos::prelude::*;

use crate::core::catalog::SITE_NAME;
use crate::ui::common::{ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PageMeta;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageMeta title="Page Not Found" description="The page you're looking for doesn't exist or has been moved." />

        <div class="min-h-screen bg-background text-foreground font-paragraph flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-gradient-to-br from-primary/20 to-secondary/20 rounded-full flex items-center justify-center text-primary">
                    <Icon name=icons::BUILDING class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-heading font-bold mb-4">"404"</h1>
                <h2 class="text-2xl font-heading font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-foreground/70 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <LinkButton href="/">"Go Home"</LinkButton>
                    <LinkButton href="/office-spaces" variant=ButtonVariant::Outline>"Browse Spaces"</LinkButton>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-foreground/50">"© " {SITE_NAME}</p>
            </div>
        </div>
    }
}
