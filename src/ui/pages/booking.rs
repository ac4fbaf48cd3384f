//! Mock booking flow
//!
//! All state lives in one [`BookingSelection`] behind an `RwSignal`; the view
//! only calls its setters and reads derived values. Confirmation opens a
//! dialog with the summary and leaves the selection as it was.

use leptos::prelude::*;

use crate::core::booking::{
    BookingSelection, DURATION_OPTIONS, TIME_SLOTS, earliest_booking_date, format_booking_date,
};
use crate::core::catalog::{OFFICE_SPACES, find_space};
use crate::ui::common::{AlertDialog, Button, ErrorMessage, InfoMessage};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{PageHeader, PageMeta, SiteFooter};
use crate::ui::reveal::Reveal;

#[component]
pub fn BookingPage() -> impl IntoView {
    let selection = RwSignal::new(BookingSelection::new());
    let confirmation = RwSignal::new(None::<String>);
    let (error, set_error) = signal(None::<String>);

    let confirm = Callback::new(move |_| {
        match selection.with_untracked(|selection| selection.confirm(OFFICE_SPACES)) {
            Ok(confirmed) => {
                tracing::info!(space = %confirmed.space_id, date = %confirmed.date, "booking confirmed");
                set_error.set(None);
                confirmation.set(Some(confirmed.summary()));
            }
            Err(err) => {
                tracing::warn!(%err, "booking rejected");
                set_error.set(Some(err.to_string()));
            }
        }
    });

    view! {
        <PageMeta
            title="Book Your Space"
            description="Pick a space, a date and a time slot, and confirm your booking in under a minute."
        />

        <div class="min-h-screen bg-background text-foreground font-paragraph">
            <PageHeader title="Book Your Space" />

            <div class="py-12">
                <div class="max-w-6xl mx-auto px-6 lg:px-8">
                    <StepProgress selection=selection />

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        <div class="lg:col-span-2">
                            <SpacePicker selection=selection />
                            <Show when=move || selection.with(BookingSelection::shows_schedule_controls)>
                                <ScheduleCard selection=selection />
                            </Show>
                        </div>

                        <div>
                            <BookingSummary selection=selection error=error on_confirm=confirm />
                        </div>
                    </div>
                </div>
            </div>

            <SiteFooter />

            <AlertDialog
                title="Booking Confirmed"
                message=Signal::derive(move || confirmation.get().unwrap_or_default())
                is_open=Signal::derive(move || confirmation.with(Option::is_some))
                on_close=Callback::new(move |_| confirmation.set(None))
                button_text="Done".to_string()
            />
        </div>
    }
}

#[component]
fn StepProgress(selection: RwSignal<BookingSelection>) -> impl IntoView {
    view! {
        <div class="mb-12">
            <div class="flex items-center justify-center space-x-8 mb-8">
                {move || {
                    selection.with(BookingSelection::progress).into_iter().enumerate().map(|(index, step)| {
                        let badge = if step.active {
                            "w-8 h-8 rounded-full flex items-center justify-center font-bold text-sm bg-primary text-white"
                        } else {
                            "w-8 h-8 rounded-full flex items-center justify-center font-bold text-sm bg-gray-300 text-gray-600"
                        };
                        view! {
                            {(index > 0).then(|| view! { <div class="hidden sm:block w-16 h-0.5 bg-gray-300"></div> })}
                            <div class="flex items-center">
                                <div class=badge>{step.number}</div>
                                <span class="ml-2 font-medium">{step.label}</span>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn SpacePicker(selection: RwSignal<BookingSelection>) -> impl IntoView {
    view! {
        <Reveal class="card mb-8">
            <h2 class="card-title">
                <Icon name=icons::USERS class="w-5 h-5" />
                "Select Your Office Space"
            </h2>
            <div class="space-y-4">
                {OFFICE_SPACES.iter().map(|space| {
                    let id = space.id;
                    let selected = move || selection.with(|selection| selection.space_id() == id);
                    view! {
                        <div
                            class=move || if selected() { "choice-card choice-card-active" } else { "choice-card" }
                            role="radio"
                            aria-checked=move || selected().to_string()
                            tabindex="0"
                            on:click=move |_| selection.update(|selection| selection.select_space(id))
                        >
                            <div class="flex items-start justify-between">
                                <div class="flex-1">
                                    <div class="flex flex-wrap items-center gap-3 mb-2">
                                        <div class=format!("w-4 h-4 rounded-full bg-gradient-to-r {}", space.gradient)></div>
                                        <h3 class="font-heading font-semibold text-lg">{space.title}</h3>
                                        <span class="text-2xl font-bold text-primary">{space.price}</span>
                                    </div>
                                    <p class="text-foreground/70 mb-3">{space.description}</p>
                                    <span class="flex items-center gap-1 text-sm text-foreground/60">
                                        <Icon name=icons::USERS class="w-4 h-4" />
                                        {space.capacity}
                                    </span>
                                    <div class="flex flex-wrap gap-2 mt-3">
                                        {space.key_features().iter().map(|feature| view! {
                                            <span class="flex items-center gap-1 text-xs bg-gray-100 px-2 py-1 rounded-full">
                                                <Icon name=icons::CHECK_CIRCLE class="w-3 h-3 text-secondary" />
                                                {*feature}
                                            </span>
                                        }).collect_view()}
                                    </div>
                                </div>
                                <Show when=selected>
                                    <Icon name=icons::CHECK_CIRCLE class="w-6 h-6 text-primary flex-shrink-0" />
                                </Show>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Reveal>
    }
}

#[component]
fn ScheduleCard(selection: RwSignal<BookingSelection>) -> impl IntoView {
    let earliest = earliest_booking_date(chrono::Local::now().date_naive());

    view! {
        <Reveal class="card mb-8">
            <h2 class="card-title">
                <Icon name=icons::CALENDAR class="w-5 h-5" />
                "Select Date & Time"
            </h2>
            <div class="space-y-6">
                <div class="space-y-2">
                    <label class="label" for="booking-date">"Date"</label>
                    <input
                        id="booking-date"
                        type="date"
                        class="input-base"
                        min=earliest
                        prop:value=move || selection.with(|selection| selection.date().to_string())
                        on:input=move |ev| {
                            let date = event_target_value(&ev);
                            selection.update(|selection| selection.set_date(date));
                        }
                    />
                </div>

                <div class="space-y-2">
                    <span class="label">"Time"</span>
                    <div class="grid grid-cols-3 gap-2">
                        {TIME_SLOTS.iter().map(|slot| {
                            let slot = *slot;
                            view! {
                                <OptionButton
                                    label=slot
                                    selected=Signal::derive(move || selection.with(|selection| selection.time_slot() == slot))
                                    on_select=Callback::new(move |_| selection.update(|selection| selection.select_time_slot(slot)))
                                />
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="space-y-2">
                    <span class="label">"Duration"</span>
                    <div class="grid grid-cols-2 gap-2">
                        {DURATION_OPTIONS.iter().map(|option| {
                            let option = *option;
                            view! {
                                <OptionButton
                                    label=option
                                    selected=Signal::derive(move || selection.with(|selection| selection.duration() == option))
                                    on_select=Callback::new(move |_| selection.update(|selection| selection.select_duration(option)))
                                />
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

/// Toggle-style choice for time slots and durations
#[component]
fn OptionButton(label: &'static str, selected: Signal<bool>, on_select: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if selected.get() { "option-button option-button-active" } else { "option-button" }
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_select.run(())
        >
            {label}
        </button>
    }
}

#[component]
fn BookingSummary(
    selection: RwSignal<BookingSelection>,
    error: ReadSignal<Option<String>>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let chosen = move || selection.with(|selection| find_space(OFFICE_SPACES, selection.space_id()));
    let field = move |read: fn(&BookingSelection) -> &str| {
        move || selection.with(|selection| Some(read(selection).to_string()).filter(|value| !value.is_empty()))
    };
    let date = field(BookingSelection::date);
    let time_slot = field(BookingSelection::time_slot);
    let duration = field(BookingSelection::duration);

    view! {
        <div class="card sticky top-8">
            <h2 class="card-title">"Booking Summary"</h2>
            <Show
                when=move || chosen().is_some()
                fallback=|| view! {
                    <p class="text-foreground/60 text-center py-8">"Select an office space to see booking details"</p>
                }
            >
                <div class="space-y-4">
                    {move || chosen().map(|space| view! {
                        <div class="space-y-2">
                            <h4 class="font-semibold">{space.title}</h4>
                            <p class="text-sm text-foreground/70">{space.capacity}</p>
                            <p class="text-lg font-bold text-primary">{space.price}</p>
                        </div>
                    })}

                    {move || date().map(|date| view! {
                        <div class="border-t pt-4 flex items-center gap-2 text-sm">
                            <Icon name=icons::CALENDAR class="w-4 h-4" />
                            <span>{format_booking_date(&date)}</span>
                        </div>
                    })}

                    {move || time_slot().map(|time_slot| view! {
                        <div class="flex items-center gap-2 text-sm">
                            <Icon name=icons::CLOCK class="w-4 h-4" />
                            <span>{time_slot}</span>
                        </div>
                    })}

                    {move || duration().map(|duration| view! {
                        <div class="text-sm">
                            <span class="font-medium">"Duration: "</span>
                            <span>{duration}</span>
                        </div>
                    })}

                    <InfoMessage message=Signal::derive(move || selection.with(BookingSelection::remaining_hint)) />
                    <ErrorMessage error=error />

                    <div class="border-t pt-4">
                        <Button
                            on_click=on_confirm
                            disabled=Signal::derive(move || !selection.with(BookingSelection::is_complete))
                            class="w-full".to_string()
                        >
                            "Confirm Booking"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
