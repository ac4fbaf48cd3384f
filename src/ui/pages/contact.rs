use leptos::prelude::*;

use crate::core::catalog::{ADDRESS, BOOKING_PATH, BUSINESS_HOURS, CONTACT_CHANNELS, FAQS};
use crate::core::contact::{
    BUSY_LABEL, ContactField, ContactForm, INQUIRY_TYPES, InquiryType, SubmissionTicket,
};
use crate::core::reveal::stagger_delay;
use crate::ui::common::{
    Button, ButtonVariant, ErrorMessage, FormField, LinkButton, SelectField, TextAreaField,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{CallToAction, PageHeader, PageMeta, SectionHeading, SiteFooter};
use crate::ui::notifications::{NotificationManager, use_notifications};
use crate::ui::reveal::Reveal;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    view! {
        <PageMeta
            title="Contact Us"
            description="Questions about our spaces or a booking? Send us a message and we'll reply within 24 hours."
        />

        <div class="min-h-screen bg-background text-foreground font-paragraph">
            <PageHeader title="Contact Us" />

            // Hero
            <section class="py-16 bg-gradient-to-br from-primary/10 to-secondary/10">
                <Reveal class="max-w-[120rem] mx-auto px-6 lg:px-8 text-center">
                    <h2 class="text-4xl md:text-5xl font-heading font-bold text-foreground mb-4">"Get in Touch"</h2>
                    <p class="text-lg text-foreground/70 max-w-2xl mx-auto">
                        "Have questions about our spaces or need help with your booking? We're here to help you find the perfect workspace solution."
                    </p>
                </Reveal>
            </section>

            // Contact channels
            <section class="py-16 bg-white">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {CONTACT_CHANNELS.iter().enumerate().map(|(index, channel)| view! {
                            <Reveal delay_ms=stagger_delay(index)>
                                <div class=format!("gradient-card h-full text-center p-6 bg-gradient-to-br {}", channel.gradient)>
                                    <div class="w-16 h-16 bg-white/20 rounded-2xl flex items-center justify-center mx-auto mb-4">
                                        <Icon name=channel.icon class="w-6 h-6" />
                                    </div>
                                    <h3 class="font-heading font-bold text-lg mb-3">{channel.title}</h3>
                                    <div class="space-y-1">
                                        {channel.details.iter().map(|detail| view! {
                                            <p class="text-sm opacity-90">{*detail}</p>
                                        }).collect_view()}
                                    </div>
                                </div>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Form, map and side cards
            <section class="py-16">
                <div class="max-w-[120rem] mx-auto px-6 lg:px-8">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                        <Reveal>
                            <ContactFormCard form=form />
                        </Reveal>
                        <Reveal delay_ms=stagger_delay(1) class="space-y-8">
                            <MapPlaceholder />
                            <QuickActions form=form />
                            <BusinessHoursCard />
                        </Reveal>
                    </div>
                </div>
            </section>

            <FaqSection form=form />
            <CallToAction />
            <SiteFooter />
        </div>
    }
}

#[component]
fn ContactFormCard(form: RwSignal<ContactForm>) -> impl IntoView {
    let notifications = use_notifications();
    let (error, set_error) = signal(None::<String>);

    let value_of = move |field: ContactField| {
        Signal::derive(move || form.with(|form| form.field(field).to_string()))
    };
    let setter = move |field: ContactField| {
        Callback::new(move |value: String| form.update(|form| form.set_field(field, value)))
    };
    let busy = Signal::derive(move || form.with(ContactForm::is_submitting));

    // Redeems the ticket after the simulated network delay
    let deliver = move |ticket: SubmissionTicket| {
        let finish = move || match form.try_update(|form| form.finish_submission(ticket)) {
            Some(Ok(ack)) => notifications.success("Message sent", ack.message),
            Some(Err(err)) => {
                tracing::warn!(%err, "contact acknowledgement dropped");
                notifications.error("Message not sent", err.to_string());
            }
            None => tracing::debug!("contact page left before the message was sent"),
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::core::contact::SUBMISSION_DELAY_MS;
            gloo_timers::future::TimeoutFuture::new(SUBMISSION_DELAY_MS).await;
            finish();
        });

        #[cfg(not(feature = "csr"))]
        finish();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submission) {
            Some(Ok(ticket)) => {
                set_error.set(None);
                deliver(ticket);
            }
            Some(Err(err)) => set_error.set(Some(err.to_string())),
            None => {}
        }
    };

    let inquiry_options = INQUIRY_TYPES
        .iter()
        .map(|kind| (kind.value(), kind.label()))
        .collect::<Vec<_>>();

    view! {
        <div class="card rounded-3xl shadow-xl">
            <div class="pb-6">
                <h2 class="flex items-center gap-3 text-2xl font-heading font-bold mb-2">
                    <Icon name=icons::MESSAGE_SQUARE class="w-6 h-6 text-primary" />
                    "Send us a Message"
                </h2>
                <p class="text-foreground/70">
                    "Fill out the form below and we'll get back to you as soon as possible."
                </p>
            </div>

            <form class="space-y-6" on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <FormField
                        label=ContactField::Name.label().to_string()
                        name=ContactField::Name.name()
                        required=true
                        placeholder="Your full name".to_string()
                        value=value_of(ContactField::Name)
                        on_input=setter(ContactField::Name)
                        disabled=busy
                    />
                    <FormField
                        label=ContactField::Email.label().to_string()
                        name=ContactField::Email.name()
                        required=true
                        input_type="email"
                        placeholder="your@email.com".to_string()
                        value=value_of(ContactField::Email)
                        on_input=setter(ContactField::Email)
                        disabled=busy
                    />
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <FormField
                        label=ContactField::Phone.label().to_string()
                        name=ContactField::Phone.name()
                        input_type="tel"
                        placeholder="(555) 123-4567".to_string()
                        value=value_of(ContactField::Phone)
                        on_input=setter(ContactField::Phone)
                        disabled=busy
                    />
                    <SelectField
                        label=ContactField::InquiryType.label().to_string()
                        name=ContactField::InquiryType.name()
                        value=value_of(ContactField::InquiryType)
                        on_change=setter(ContactField::InquiryType)
                        options=inquiry_options
                        disabled=busy
                    />
                </div>

                <FormField
                    label=ContactField::Subject.label().to_string()
                    name=ContactField::Subject.name()
                    required=true
                    placeholder="Brief subject of your inquiry".to_string()
                    value=value_of(ContactField::Subject)
                    on_input=setter(ContactField::Subject)
                    disabled=busy
                />

                <TextAreaField
                    label=ContactField::Message.label().to_string()
                    name=ContactField::Message.name()
                    required=true
                    placeholder="Please provide details about your inquiry...".to_string()
                    value=value_of(ContactField::Message)
                    on_input=setter(ContactField::Message)
                    disabled=busy
                />

                <ErrorMessage error=error />

                <Button
                    button_type="submit"
                    loading=busy
                    loading_text=BUSY_LABEL
                    icon=icons::SEND
                    class="w-full".to_string()
                >
                    "Send Message"
                </Button>
            </form>
        </div>
    }
}

#[component]
fn MapPlaceholder() -> impl IntoView {
    view! {
        <div class="bg-white shadow-xl rounded-3xl overflow-hidden">
            <div class="h-64 bg-gradient-to-br from-primary/20 to-secondary/20 flex items-center justify-center">
                <div class="text-center">
                    <Icon name=icons::MAP_PIN class="w-12 h-12 text-primary mx-auto mb-2" />
                    <p class="text-foreground/70 font-medium">"Interactive Map"</p>
                    <p class="text-sm text-foreground/50">{ADDRESS}</p>
                </div>
            </div>
        </div>
    }
}

/// Point the form at a topic and tell the visitor to finish it
fn prefill(
    form: RwSignal<ContactForm>,
    notifications: NotificationManager,
    kind: InquiryType,
    subject: &'static str,
) {
    if let Some(Ok(())) = form.try_update(|form| form.prefill(kind, subject)) {
        notifications.info(
            subject,
            "We've started the form for you above. Add your details and send it over.",
        );
    }
}

#[component]
fn QuickActions(form: RwSignal<ContactForm>) -> impl IntoView {
    let notifications = use_notifications();
    let busy = Signal::derive(move || form.with(ContactForm::is_submitting));

    view! {
        <div class="card rounded-3xl shadow-xl">
            <h3 class="card-title">"Quick Actions"</h3>
            <div class="space-y-4">
                <LinkButton href=BOOKING_PATH class="w-full".to_string()>"Book a Space Now"</LinkButton>
                <LinkButton href="/office-spaces" variant=ButtonVariant::Outline class="w-full".to_string()>
                    "View Available Spaces"
                </LinkButton>
                <Button
                    variant=ButtonVariant::OutlineSecondary
                    on_click=Callback::new(move |_| prefill(form, notifications, InquiryType::Booking, "Schedule a Tour"))
                    disabled=busy
                    class="w-full".to_string()
                >
                    "Schedule a Tour"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn BusinessHoursCard() -> impl IntoView {
    view! {
        <div class="gradient-card bg-gradient-to-br from-accent-purple to-accent-orange p-6">
            <div class="flex items-center gap-3 mb-4">
                <Icon name=icons::CLOCK class="w-6 h-6" />
                <h3 class="font-heading font-bold text-lg">"Business Hours"</h3>
            </div>
            <div class="space-y-2 text-sm">
                {BUSINESS_HOURS.iter().map(|(days, hours)| view! {
                    <div class="flex justify-between">
                        <span>{*days}</span>
                        <span>{*hours}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FaqSection(form: RwSignal<ContactForm>) -> impl IntoView {
    let notifications = use_notifications();
    let busy = Signal::derive(move || form.with(ContactForm::is_submitting));

    view! {
        <section class="py-16 bg-white">
            <div class="max-w-4xl mx-auto px-6 lg:px-8">
                <SectionHeading
                    title="Frequently Asked Questions"
                    lead="Quick answers to common questions about our services"
                />
                <div class="space-y-6">
                    {FAQS.iter().enumerate().map(|(index, faq)| view! {
                        <Reveal delay_ms=stagger_delay(index)>
                            <div class="bg-background border border-gray-200 rounded-2xl p-6">
                                <h3 class="font-heading font-semibold text-lg text-foreground mb-3">{faq.question}</h3>
                                <p class="text-foreground/70">{faq.answer}</p>
                            </div>
                        </Reveal>
                    }).collect_view()}
                </div>
                <Reveal class="text-center mt-12">
                    <p class="text-foreground/70 mb-4">"Don't see your question answered?"</p>
                    <Button
                        on_click=Callback::new(move |_| prefill(form, notifications, InquiryType::Support, "Support request"))
                        disabled=busy
                    >
                        "Contact Support"
                    </Button>
                </Reveal>
            </div>
        </section>
    }
}
