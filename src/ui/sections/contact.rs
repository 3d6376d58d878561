use leptos::prelude::*;

use crate::core::contact::{ContactField, ContactForm};
use crate::core::content::{Anchor, CONTACT_CHANNELS};
use crate::core::motion::{Position, Timeline, VisualState};
use crate::ui::common::{FormField, TextAreaField};
use crate::ui::icon::Icon;
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

/// Contact channels and the enquiry form.
///
/// Submitting never leaves the page. The browser's own `required` and
/// `type="email"` checks block an incomplete submit; a form that gets past
/// them is written to the console as one diagnostic line.
#[component]
pub fn Contact() -> impl IntoView {
    let config = use_motion_config();
    let timing = config.reveal;
    let form = RwSignal::new(ContactForm::new());

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let panels = Timeline::new()
        .add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0))
        .add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0));
    let panel_plan = RevealPlan::new(panels, use_reveal(section_ref, config.trigger));

    let cards_ref = NodeRef::<leptos::html::Div>::new();
    let card_plan = RevealPlan::new(
        timing.list(CONTACT_CHANNELS.len(), VisualState::below(30.0).scaled(0.95), timing.stagger),
        use_reveal(cards_ref, config.item_trigger),
    );

    let value_of = move |field: ContactField| Signal::derive(move || form.with(|form| form.get(field).to_string()));
    let update = move |field: ContactField| {
        Callback::new(move |value: String| {
            form.update(|form| form.set(field, value));
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactForm::submit) {
            Ok(submission) => leptos::logging::log!("{}", submission.diagnostic_line()),
            Err(err) => leptos::logging::warn!("contact form rejected: {err}"),
        }
    };

    view! {
        <section
            id=Anchor::Contact.id()
            node_ref=section_ref
            class="py-32 px-6 relative overflow-hidden bg-black"
        >
            <div class="container mx-auto max-w-7xl">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16">
                    <div class="space-y-8" style=panel_plan.style(0)>
                        <h2 class="text-4xl md:text-5xl font-bold mb-8 text-white">"Contact Us"</h2>

                        <div node_ref=cards_ref class="space-y-6">
                            {CONTACT_CHANNELS.iter().enumerate().map(|(index, channel)| view! {
                                <a
                                    href=channel.href
                                    class="group block hover:-translate-y-1 transition-transform"
                                    style=card_plan.style(index)
                                    data-channel=channel.title
                                >
                                    <div class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-6 hover:border-white/20 hover:bg-white/5 transition-all duration-300 relative overflow-hidden">
                                        <div class="relative z-10 flex items-start gap-4">
                                            <div class="p-3 bg-white/5 rounded-lg border border-white/10 flex-shrink-0 group-hover:border-white/20 transition-colors">
                                                <Icon name=channel.icon class="w-5 h-5 text-white"/>
                                            </div>
                                            <div class="flex-1">
                                                <h3 class="text-lg font-semibold mb-1 text-white group-hover:text-purple-200 transition-colors">
                                                    {channel.title}
                                                </h3>
                                                <p class="text-sm text-gray-400 mb-2 leading-relaxed">{channel.description}</p>
                                                <p class="text-white font-medium">{channel.value}</p>
                                            </div>
                                        </div>
                                    </div>
                                </a>
                            }).collect_view()}
                        </div>
                    </div>

                    <div style=panel_plan.style(1)>
                        <p class="text-sm text-gray-400 leading-relaxed text-right mb-8">
                            "No delays, no vague replies. We respond within 24 hours to schedule your personalized discovery call."
                        </p>

                        <form
                            class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-6 md:p-8"
                            on:submit=on_submit
                        >
                            <div class="space-y-6">
                                <FormField
                                    label=ContactField::Name.label()
                                    name="name"
                                    required=true
                                    placeholder=ContactField::Name.placeholder()
                                    value=value_of(ContactField::Name)
                                    on_input=update(ContactField::Name)
                                />
                                <FormField
                                    label=ContactField::Email.label()
                                    name="email"
                                    input_type="email"
                                    required=true
                                    placeholder=ContactField::Email.placeholder()
                                    value=value_of(ContactField::Email)
                                    on_input=update(ContactField::Email)
                                />
                                <TextAreaField
                                    label=ContactField::Message.label()
                                    name="message"
                                    required=true
                                    rows=6
                                    placeholder=ContactField::Message.placeholder()
                                    value=value_of(ContactField::Message)
                                    on_input=update(ContactField::Message)
                                />

                                <button
                                    type="submit"
                                    class="w-full px-6 py-4 bg-white hover:bg-gray-100 rounded-lg font-semibold text-black transition-all duration-300"
                                >
                                    "Send the message"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::sections::testing::{assert_in_order, render};

    #[test]
    fn test_channels_and_empty_form() {
        let html = render(|| view! { <Contact/> });
        assert!(html.contains("id=\"contact\""));
        assert_eq!(html.matches("data-channel=").count(), CONTACT_CHANNELS.len());
        assert_in_order(&html, CONTACT_CHANNELS.iter().map(|c| c.title));

        for field in ContactField::ALL {
            assert!(html.contains(&format!("id=\"contact-{field}\"")));
        }
        assert!(html.contains("Send the message"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_form_keeps_browser_validation() {
        let html = render(|| view! { <Contact/> });
        let form_tag = html.split("<form").nth(1).and_then(|rest| rest.split('>').next()).unwrap();
        assert!(!form_tag.contains("novalidate"));

        assert_eq!(html.matches("required").count(), ContactField::ALL.len());
        assert!(html.contains("type=\"email\""));
    }
}
