use leptos::prelude::*;

use crate::core::catalog::{
    ABOUT_CARDS, BOOKING_PATH, COMPANY_VALUES, NavLink, STATS, STORY_PARAGRAPHS, TEAM_MEMBERS,
};
use crate::core::reveal::stagger_delay;
use crate::ui::common::{ButtonSize, ButtonVariant, LinkButton};
use crate::ui::icon::Icon;
use crate::ui::layout::{CallToAction, PageHeader, PageMeta, SectionHeading, SiteFooter};
use crate::ui::reveal::Reveal;

const HERO_IMAGE: &str =
    "https://static.wixstatic.com/media/41c79f_497bb596ad5942aa8d966a8c6cfb2113~mv2.png?originWidth=576&originHeight=384";
const STORY_IMAGE: &str =
    "https://static.wixstatic.com/media/41c79f_9fd6805538514f949681f0cafa55fdd8~mv2.png?originWidth=576&originHeight=384";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageMeta
            title="About Us"
            description="We believe that great work happens in great spaces. Flexible, professional environments that adapt to your business."
        />

        <div class="min-h-screen bg-background text-foreground font-paragraph">
            <PageHeader title="About Us" />

            // Hero
            <section class="py-20 bg-gradient-to-br from-primary/10 to-secondary/10">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                        <Reveal>
                            <h2 class="text-4xl md:text-5xl lg:text-6xl font-heading font-bold text-foreground mb-6">
                                "Redefining Workspace Excellence"
                            </h2>
                            <p class="text-lg text-foreground/70 mb-8">
                                "We believe that great work happens in great spaces. Our mission is to provide flexible, professional environments that adapt to your business needs and inspire productivity."
                            </p>
                            <div class="flex flex-col sm:flex-row gap-4">
                                <LinkButton href="/office-spaces" size=ButtonSize::Large>"Explore Spaces"</LinkButton>
                                <LinkButton href="/contact" variant=ButtonVariant::Outline size=ButtonSize::Large>
                                    "Contact Us"
                                </LinkButton>
                            </div>
                        </Reveal>
                        <Reveal delay_ms=200>
                            <img
                                src=HERO_IMAGE
                                alt="Modern office space interior"
                                width="600"
                                height="400"
                                class="rounded-3xl object-cover w-full h-full aspect-[3/2] shadow-2xl"
                            />
                        </Reveal>
                    </div>
                </div>
            </section>

            // Stats
            <section class="py-16 bg-white">
                <Reveal class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        {STATS.iter().map(|stat| view! {
                            <div class="text-center">
                                <div class="text-4xl md:text-5xl font-heading font-bold text-primary mb-2">
                                    {stat.number}
                                </div>
                                <div class="text-foreground/70 font-medium">{stat.label}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </Reveal>
            </section>

            // Why choose us, long form
            <section class="py-24 sm:py-32">
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
                                            <p class="opacity-80">{card.description}</p>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Our Story
            <section class="py-24 bg-white">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                        <Reveal>
                            <img
                                src=STORY_IMAGE
                                alt="Our company story"
                                width="600"
                                height="400"
                                loading="lazy"
                                class="rounded-3xl object-cover w-full h-full aspect-[4/3] shadow-lg"
                            />
                        </Reveal>
                        <Reveal delay_ms=200>
                            <h2 class="text-4xl md:text-5xl font-heading font-bold text-foreground mb-6">"Our Story"</h2>
                            <div class="space-y-4 text-foreground/70">
                                {STORY_PARAGRAPHS.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Our Values
            <section class="py-24 bg-gradient-to-br from-primary/5 to-secondary/5">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <SectionHeading
                        title="Our Values"
                        lead="These principles guide everything we do and shape the experience we create for our community."
                    />
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {COMPANY_VALUES.iter().enumerate().map(|(index, value)| view! {
                            <Reveal delay_ms=stagger_delay(index)>
                                <div class="h-full p-8 text-center bg-white shadow-lg rounded-2xl">
                                    <div class="w-20 h-20 bg-gradient-to-br from-primary/20 to-secondary/20 rounded-2xl flex items-center justify-center mx-auto mb-6 text-primary">
                                        <Icon name=value.icon class="w-12 h-12" />
                                    </div>
                                    <h3 class="text-xl font-heading font-bold text-foreground mb-4">{value.title}</h3>
                                    <p class="text-foreground/70">{value.description}</p>
                                </div>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Team
            <section class="py-24 bg-white">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <SectionHeading
                        title="Meet Our Team"
                        lead="The passionate professionals behind your exceptional workspace experience."
                    />
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {TEAM_MEMBERS.iter().enumerate().map(|(index, member)| view! {
                            <Reveal delay_ms=stagger_delay(index)>
                                <div class="h-full bg-white shadow-lg rounded-2xl overflow-hidden">
                                    <div class="aspect-square">
                                        <img
                                            src=member.image
                                            alt=format!("Portrait of {}", member.name)
                                            width="400"
                                            height="400"
                                            loading="lazy"
                                            class="w-full h-full object-cover"
                                        />
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-xl font-heading font-bold text-foreground mb-1">{member.name}</h3>
                                        <p class="text-primary font-medium mb-3">{member.role}</p>
                                        <p class="text-foreground/70 text-sm">{member.description}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <CallToAction
                title="Ready to Join Our Community?"
                lead="Experience the difference that thoughtfully designed workspace can make for your productivity and success."
                primary=NavLink { label: "Explore Spaces", href: "/office-spaces" }
                secondary=NavLink { label: "Book a Tour", href: BOOKING_PATH }
            />
            <SiteFooter />
        </div>
    }
}
