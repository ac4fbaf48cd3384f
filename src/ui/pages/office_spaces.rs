//! Office spaces listing with a category filter

use leptos::prelude::*;

use crate::core::catalog::{BOOKING_PATH, COMMON_AMENITIES, NavLink, OFFICE_SPACES, OfficeSpace};
use crate::core::filter::{SPACE_FILTERS, SpaceFilter, filter_spaces};
use crate::core::reveal::stagger_delay;
use crate::ui::common::{BaseModal, Button, ButtonSize, ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{CallToAction, PageHeader, PageMeta, SiteFooter};
use crate::ui::notifications::use_notifications;
use crate::ui::reveal::Reveal;

#[component]
pub fn OfficeSpacesPage() -> impl IntoView {
    let filter = RwSignal::new(SpaceFilter::default());
    let details = RwSignal::new(None::<&'static OfficeSpace>);

    let visible = move || {
        filter.with(|filter| {
            filter_spaces(OFFICE_SPACES, filter.token())
                .into_iter()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageMeta
            title="Office Spaces"
            description="Choose from private offices, meeting rooms and coworking spaces, bookable by the hour."
        />

        <div class="min-h-screen bg-background text-foreground font-paragraph">
            <PageHeader
                title="Office Spaces"
                action=NavLink { label: "Book Now", href: BOOKING_PATH }
            />

            // Hero
            <section class="bg-gradient-to-br from-primary/10 to-secondary/10 py-16">
                <Reveal class="max-w-[120rem] mx-auto px-6 lg:px-8 text-center">
                    <h2 class="text-4xl md:text-5xl font-heading font-bold text-foreground mb-4">
                        "Find Your Perfect Workspace"
                    </h2>
                    <p class="text-lg text-foreground/70 max-w-2xl mx-auto">
                        "Choose from our variety of professional office spaces designed to meet your specific needs and budget."
                    </p>
                </Reveal>
            </section>

            // Filters
            <section class="py-8 bg-white border-b">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <div class="flex flex-wrap gap-4 justify-center" role="group" aria-label="Filter spaces">
                        {SPACE_FILTERS.iter().map(|option| {
                            let token = option.token;
                            let selected = move || filter.with(|filter| filter.token() == token);
                            view! {
                                <button
                                    class=move || if selected() { "filter-chip filter-chip-active" } else { "filter-chip" }
                                    aria-pressed=move || selected().to_string()
                                    on:click=move |_| filter.set(SpaceFilter::new(token))
                                >
                                    {option.label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Listings
            <section class="py-16">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <div class="space-y-16">
                        <For
                            each=visible
                            key=|(index, space)| (*index, space.id)
                            children=move |(index, space)| view! {
                                <SpaceDetailCard
                                    space=space
                                    index=index
                                    on_details=Callback::new(move |_| details.set(Some(space)))
                                />
                            }
                        />
                        <Show when=move || filter.with(|filter| filter_spaces(OFFICE_SPACES, filter.token()).is_empty())>
                            <p class="text-center text-foreground/60 py-12">"No spaces match this filter."</p>
                        </Show>
                    </div>
                </div>
            </section>

            // Common Amenities
            <section class="py-16 bg-white">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <Reveal class="text-center mb-12">
                        <h2 class="text-3xl md:text-4xl font-heading font-bold text-foreground mb-4">
                            "All Spaces Include"
                        </h2>
                        <p class="text-lg text-foreground/70">"Every workspace comes with these essential amenities"</p>
                    </Reveal>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        {COMMON_AMENITIES.iter().enumerate().map(|(index, amenity)| view! {
                            <Reveal delay_ms=stagger_delay(index) class="text-center">
                                <div class="w-16 h-16 bg-gradient-to-br from-primary/20 to-secondary/20 rounded-2xl flex items-center justify-center mx-auto mb-4 text-primary">
                                    <Icon name=amenity.icon class="w-8 h-8" />
                                </div>
                                <h3 class="font-heading font-semibold text-foreground mb-2">{amenity.title}</h3>
                                <p class="text-sm text-foreground/60">{amenity.description}</p>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <CallToAction
                title="Ready to Book Your Space?"
                primary=NavLink { label: "Book Now", href: BOOKING_PATH }
                secondary=NavLink { label: "Contact Us", href: "/contact" }
            />
            <SiteFooter />

            <SpaceDetailsModal details=details />
        </div>
    }
}

/// Full listing card; odd rows put the image on the right
#[component]
fn SpaceDetailCard(
    space: &'static OfficeSpace,
    index: usize,
    on_details: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let flipped = index % 2 == 1;
    let image_order = if flipped { "lg:order-2" } else { "" };
    let content_order = if flipped { "flex flex-col lg:order-1" } else { "flex flex-col" };

    let book = Callback::new(move |_| {
        tracing::info!(space = space.id, "book this space requested");
        notifications.info("Booking", format!("Redirecting to booking for: {}", space.title));
    });

    view! {
        <Reveal delay_ms=stagger_delay(index)>
            <div class="overflow-hidden bg-white shadow-lg rounded-3xl">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-16 items-center p-8">
                    <div class=image_order>
                        <img
                            src=space.image
                            alt=format!("Image of {}", space.title)
                            width="800"
                            height="600"
                            loading="lazy"
                            class="rounded-2xl object-cover w-full h-full aspect-[4/3]"
                        />
                    </div>

                    <div class=content_order>
                        <div class="flex items-center gap-4 mb-4">
                            <span class=format!(
                                "inline-block text-sm font-bold font-heading px-3 py-1 rounded-full text-white bg-gradient-to-r {}",
                                space.gradient,
                            )>{space.capacity}</span>
                            <span class="text-3xl font-heading font-extrabold text-primary">{space.price}</span>
                        </div>

                        <h3 class="text-3xl font-heading font-bold text-foreground mb-4">{space.title}</h3>
                        <p class="text-foreground/70 mb-6">{space.detailed_description}</p>

                        <div class="mb-6">
                            <h4 class="font-heading font-semibold text-foreground mb-3">"Key Features"</h4>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                                {space.features.iter().map(|feature| view! {
                                    <div class="flex items-center gap-2">
                                        <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-secondary flex-shrink-0" />
                                        <span class="text-sm text-foreground/80">{*feature}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="mb-8">
                            <h4 class="font-heading font-semibold text-foreground mb-3">"Amenities"</h4>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                                {space.amenities.iter().map(|amenity| view! {
                                    <div class="flex items-center gap-2">
                                        <div class="w-2 h-2 bg-primary rounded-full flex-shrink-0"></div>
                                        <span class="text-sm text-foreground/70">{*amenity}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <Button on_click=book size=ButtonSize::Large icon=icons::ARROW_RIGHT class="flex-1".to_string()>
                                "Book This Space"
                            </Button>
                            <Button
                                on_click=on_details
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Large
                                class="flex-1".to_string()
                            >
                                "View Details"
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn SpaceDetailsModal(details: RwSignal<Option<&'static OfficeSpace>>) -> impl IntoView {
    let title = Signal::derive(move || details.get().map(|space| space.title.to_string()).unwrap_or_default());
    let is_open = Signal::derive(move || details.get().is_some());

    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=Callback::new(move |_| details.set(None))
            max_width="max-w-2xl"
        >
            {move || details.get().map(|space| view! {
                <div class="space-y-6">
                    <div class="flex items-center gap-4">
                        <span class="text-2xl font-heading font-extrabold text-primary">{space.price}</span>
                        <span class="flex items-center gap-1 text-sm text-foreground/60">
                            <Icon name=icons::USERS class="w-4 h-4" />
                            {space.capacity}
                        </span>
                    </div>
                    <p class="text-foreground/80">{space.description}</p>
                    <ul class="grid grid-cols-1 sm:grid-cols-2 gap-2 text-sm text-foreground/80">
                        {space.features.iter().chain(space.amenities.iter()).map(|item| view! {
                            <li class="flex items-center gap-2">
                                <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-secondary flex-shrink-0" />
                                {*item}
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="flex justify-end border-t border-gray-200 pt-4">
                        <LinkButton href=BOOKING_PATH icon=icons::ARROW_RIGHT>"Book This Space"</LinkButton>
                    </div>
                </div>
            })}
        </BaseModal>
    }
}
