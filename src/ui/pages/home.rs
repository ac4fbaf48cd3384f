//! Home page
//!
//! Sections, top to bottom:
//! - Hero with the space catalog summary
//! - "Why Choose Us?" about cards
//! - Space listings with pricing and booking links
//! - The two-step booking process
//! - Monthly membership plans
//! - Contact teaser and footer

use leptos::prelude::*;

use crate::core::catalog::{
    ABOUT_CARDS, ADDRESS, BOOKING_PATH, BOOKING_PROCESS, BUSINESS_HOURS, OFFICE_SPACES,
    OfficeSpace, PRICING_PLANS, PricingPlan,
};
use crate::core::reveal::stagger_delay;
use crate::ui::common::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{PageMeta, SectionHeading, SiteFooter, SiteHeader};
use crate::ui::reveal::Reveal;

const HERO_IMAGE: &str = "https://static.wixstatic.com/media/11062b_b687b5a078ef4bb886c0d14af32f0373~mv2.jpg";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageMeta description="Find and book the perfect workspace for your needs. From private offices to collaborative spaces." />

        <div class="min-h-screen bg-background text-foreground font-paragraph overflow-clip">
            <SiteHeader />
            <Hero />

            // About Us Section
            <section class="py-24 sm:py-32 bg-white">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <SectionHeading
                        title="Why Choose Us?"
                        lead="We provide more than just office space - we create an environment where your business can thrive."
                    />
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 items-end">
                        {ABOUT_CARDS.iter().enumerate().map(|(index, card)| {
                            let lift = if index == 1 { "md:-translate-y-10" } else { "" };
                            view! {
                                <Reveal delay_ms=stagger_delay(index) class=lift>
                                    <div class=format!("gradient-card h-full bg-gradient-to-br {}", card.gradient)>
                                        <div class="p-8 md:p-10 flex flex-col h-full">
                                            <div class="w-16 h-16 rounded-2xl bg-white/20 flex items-center justify-center mb-6">
                                                <Icon name=card.icon class="w-10 h-10" />
                                            </div>
                                            <h3 class="text-2xl font-heading font-bold mb-4">{card.title}</h3>
                                            <p class="opacity-80">{card.summary}</p>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Office Spaces Section
            <section class="py-24 sm:py-32">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <SectionHeading
                        title="Choose Your Perfect Space"
                        lead="We offer a variety of office spaces to meet your specific needs and budget."
                    />
                    <div class="space-y-16">
                        {OFFICE_SPACES.iter().enumerate().map(|(index, space)| view! {
                            <Reveal delay_ms=stagger_delay(index)>
                                <SpaceListing space=space />
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // How Booking Works Section
            <section class="py-24 sm:py-32 bg-white">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <SectionHeading
                        title="Simple Booking Process"
                        lead="Get your ideal workspace in just a few simple steps."
                    />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {BOOKING_PROCESS.iter().enumerate().map(|(index, step)| view! {
                            <Reveal delay_ms=stagger_delay(index)>
                                <div class=format!("gradient-card h-full p-8 md:p-12 bg-gradient-to-br {}", step.gradient)>
                                    <div class="w-20 h-20 rounded-2xl bg-white/20 flex items-center justify-center mb-6">
                                        <Icon name=step.icon class="w-10 h-10" />
                                    </div>
                                    <h3 class="text-3xl font-heading font-bold mb-4">{step.title}</h3>
                                    <p class="text-lg opacity-80">{step.description}</p>
                                </div>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <PricingSection />
            <ContactTeaser />
            <SiteFooter />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="w-full min-h-screen lg:h-screen flex items-center pt-32 pb-20 lg:pt-24 lg:pb-0">
            <div class="max-w-[120rem] mx-auto px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-5 gap-12 items-center">
                <div class="lg:col-span-3">
                    <Reveal>
                        <img
                            src=HERO_IMAGE
                            alt="Bright, modern office interior"
                            width="1200"
                            height="1200"
                            class="rounded-3xl object-cover w-full h-full aspect-[4/3] lg:aspect-auto lg:h-[75vh] shadow-2xl"
                        />
                    </Reveal>
                </div>
                <div class="lg:col-span-2 relative z-10">
                    <Reveal class="flex flex-col h-full">
                        <h1 class="text-5xl md:text-6xl lg:text-7xl font-heading font-black text-foreground mb-6">
                            "Your Ideal Office Space"
                        </h1>
                        <p class="text-lg text-foreground/70 mb-10 max-w-md">
                            "Find and book the perfect workspace for your needs. From private offices to collaborative spaces."
                        </p>
                        <div class="space-y-4 mb-10">
                            {OFFICE_SPACES.iter().map(|space| view! {
                                <div class="bg-white/50 border border-foreground/10 p-4 rounded-2xl flex items-center gap-4 transition-all duration-300 hover:bg-white hover:shadow-lg hover:border-primary">
                                    <div class=format!("w-12 h-12 rounded-lg bg-gradient-to-br {} flex-shrink-0", space.gradient)></div>
                                    <div>
                                        <h3 class="font-heading font-semibold text-foreground">{space.title}</h3>
                                        <p class="text-sm text-foreground/60">{space.capacity}</p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                        <LinkButton
                            href="/office-spaces"
                            size=ButtonSize::Large
                            class="gradient-button w-full lg:w-auto".to_string()
                        >
                            "Explore Spaces"
                        </LinkButton>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SpaceListing(space: &'static OfficeSpace) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-16 items-center bg-white p-8 rounded-3xl shadow-lg overflow-clip">
            <img
                src=space.image
                alt=format!("Image of {}", space.title)
                width="800"
                height="600"
                loading="lazy"
                class="rounded-2xl object-cover w-full h-full aspect-[4/3]"
            />
            <div class="flex flex-col">
                <span class=format!(
                    "inline-block text-sm font-bold font-heading px-3 py-1 rounded-full mb-4 text-white bg-gradient-to-r {} w-fit",
                    space.gradient,
                )>{space.capacity}</span>
                <h3 class="text-3xl font-heading font-bold text-foreground mb-3">{space.title}</h3>
                <p class="text-foreground/70 mb-6">{space.description}</p>
                <div class="border-t border-foreground/10 pt-6 space-y-3 mb-8">
                    {space.key_features().iter().map(|feature| view! {
                        <div class="flex items-center gap-3">
                            <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 text-secondary" />
                            <span class="text-foreground/80">{*feature}</span>
                        </div>
                    }).collect_view()}
                </div>
                <div class="mt-auto flex flex-col sm:flex-row items-start sm:items-center justify-between gap-4">
                    <p class="text-4xl font-heading font-extrabold text-foreground">{space.price}</p>
                    <LinkButton href=BOOKING_PATH size=ButtonSize::Large icon=icons::ARROW_RIGHT class="gradient-button".to_string()>
                        "Book Now"
                    </LinkButton>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section class="py-24 sm:py-32 hero-gradient-bg text-white">
            <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                <SectionHeading
                    title="Flexible Pricing Plans"
                    lead="Choose a plan that scales with your business. No hidden fees, no long-term commitments."
                    inverse=true
                />
                <div class="max-w-5xl mx-auto space-y-6">
                    {PRICING_PLANS.iter().enumerate().map(|(index, plan)| view! {
                        <Reveal delay_ms=stagger_delay(index)>
                            <PricingCard plan=plan />
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: &'static PricingPlan) -> impl IntoView {
    view! {
        <div class="bg-white/10 backdrop-blur-md border border-white/20 rounded-2xl p-6 transition-all duration-300 hover:bg-white/20 hover:scale-[1.02]">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6 items-center">
                <div class="md:col-span-2">
                    <h3 class="text-2xl font-heading font-bold">{plan.title}</h3>
                    <p class="opacity-70 mt-1">{plan.description}</p>
                    <ul class="flex flex-wrap gap-2 mt-3">
                        {plan.features.iter().map(|feature| view! {
                            <li class="text-xs bg-white/15 px-2 py-1 rounded-full">{*feature}</li>
                        }).collect_view()}
                    </ul>
                </div>
                <div class="text-left md:text-center">
                    <span class="text-3xl font-bold font-heading">{plan.price}</span>
                    <span class="opacity-70">"/month"</span>
                </div>
                <div class="text-left md:text-right">
                    <LinkButton href="/contact" variant=ButtonVariant::Inverse size=ButtonSize::Large>
                        "Get Started"
                    </LinkButton>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactTeaser() -> impl IntoView {
    let (weekday_days, weekday_hours) = BUSINESS_HOURS[0];

    view! {
        <section class="py-24 sm:py-32 bg-white">
            <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <Reveal>
                        <h2 class="text-4xl md:text-5xl font-heading font-bold text-foreground mb-6">"Get in Touch"</h2>
                        <p class="text-lg text-foreground/70 mb-12">
                            "Have questions about our spaces or need help with your booking? We're here to help."
                        </p>
                        <div class="space-y-8">
                            <div class="flex items-center gap-6">
                                <div class="w-20 h-20 bg-gradient-to-br from-primary to-secondary rounded-full flex items-center justify-center flex-shrink-0 text-white">
                                    <Icon name=icons::MAP_PIN class="w-8 h-8" />
                                </div>
                                <div>
                                    <h4 class="text-xl font-heading font-semibold">"Location"</h4>
                                    <p class="text-foreground/70">{ADDRESS}</p>
                                </div>
                            </div>
                            <div class="flex items-center gap-6">
                                <div class="w-20 h-20 bg-gradient-to-br from-accent-purple to-accent-orange rounded-full flex items-center justify-center flex-shrink-0 text-white">
                                    <Icon name=icons::CLOCK class="w-8 h-8" />
                                </div>
                                <div>
                                    <h4 class="text-xl font-heading font-semibold">"Hours"</h4>
                                    <p class="text-foreground/70">{weekday_days} ": " {weekday_hours}</p>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=stagger_delay(1)>
                        <div class="p-8 md:p-12 rounded-3xl shadow-2xl bg-background">
                            <h3 class="text-2xl font-heading font-semibold mb-4">"Send Us a Message"</h3>
                            <p class="text-foreground/70 mb-8">
                                "Tell us about your team and the space you need. Our full contact form takes a minute and we reply within 24 hours."
                            </p>
                            <div class="flex flex-col sm:flex-row gap-4">
                                <LinkButton href="/contact" icon=icons::SEND class="gradient-button w-full sm:w-auto".to_string()>
                                    "Contact Us"
                                </LinkButton>
                                <LinkButton href=BOOKING_PATH variant=ButtonVariant::Outline class="w-full sm:w-auto".to_string()>
                                    "Book a Space"
                                </LinkButton>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
