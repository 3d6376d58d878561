use leptos::prelude::*;

use crate::core::content::{
    Anchor, CHAT_MESSAGES, CHAT_TABS, ChatMessage, INCOMING_CALLS, TYPING_QUESTIONS,
};
use crate::core::motion::{Position, Ticker, Timeline, VisualState};
use crate::ui::common::SectionHeading;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{
    RevealPlan, use_chat_feed, use_motion_config, use_reveal, use_ticker, use_typewriter,
};

/// Tab highlighted in the simulated chat header
const ACTIVE_TAB: &str = "PLAN";

/// Chatbot and voice assistant showcase
#[component]
pub fn Solutions() -> impl IntoView {
    let config = use_motion_config();
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let revealed = use_reveal(section_ref, config.trigger);
    let timing = config.reveal;
    let panels = Timeline::new()
        .add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0))
        .add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0));
    let plan = RevealPlan::new(panels, revealed);

    view! {
        <section
            id=Anchor::Services.id()
            node_ref=section_ref
            class="py-16 md:py-20 px-4 sm:px-6 relative overflow-hidden bg-black"
        >
            <div class="container mx-auto max-w-7xl">
                <SectionHeading
                    title="AI Solutions"
                    subtitle="Custom chatbots and voice assistants for seamless customer experiences"
                />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4 sm:gap-6 md:gap-8">
                    <div class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-4 sm:p-6 md:p-8 overflow-hidden" style=plan.style(0)>
                        <ChatbotPanel/>
                    </div>
                    <div class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-4 sm:p-6 md:p-8 overflow-hidden" style=plan.style(1)>
                        <VoicePanel/>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn bubble_class(message: &ChatMessage) -> &'static str {
    if message.is_user {
        "max-w-[85%] sm:max-w-[80%] rounded-lg px-3 sm:px-4 py-2 sm:py-3 bg-white/10 text-white border border-white/20"
    } else {
        "max-w-[85%] sm:max-w-[80%] rounded-lg px-3 sm:px-4 py-2 sm:py-3 bg-white/5 text-gray-300 border border-white/10"
    }
}

#[component]
fn ChatbotPanel() -> impl IntoView {
    let config = use_motion_config();
    let feed = use_chat_feed(CHAT_MESSAGES);
    let (typed, typing) = use_typewriter(TYPING_QUESTIONS, config.typewriter);

    view! {
        <div class="mb-4 sm:mb-6">
            <h3 class="text-xl sm:text-2xl font-bold mb-2 text-white">"Custom Chatbots"</h3>
            <p class="text-xs sm:text-sm text-gray-400">
                "We build custom AI chat solutions for instant support and a seamless audience experience."
            </p>
        </div>

        <div class="flex gap-1 sm:gap-2 mb-4 sm:mb-6">
            {CHAT_TABS.iter().map(|tab| {
                let class = if *tab == ACTIVE_TAB {
                    "px-2 sm:px-4 py-1.5 sm:py-2 rounded-lg text-xs sm:text-sm font-medium pointer-events-none bg-white/10 text-white border border-white/20"
                } else {
                    "px-2 sm:px-4 py-1.5 sm:py-2 rounded-lg text-xs sm:text-sm font-medium pointer-events-none text-gray-400"
                };
                view! { <div class=class data-chat-tab=*tab>{*tab}</div> }
            }).collect_view()}
        </div>

        <div class="space-y-3 sm:space-y-4 mb-4 sm:mb-6 min-h-[250px] sm:min-h-[300px]">
            {move || feed.with(|feed| {
                feed.messages().iter().map(|message| {
                    let align = if message.is_user { "flex justify-end bubble-in" } else { "flex justify-start bubble-in" };
                    view! {
                        <div class=align data-chat-message=message.id.to_string()>
                            <div class=bubble_class(message)>
                                <p class="text-xs sm:text-sm leading-relaxed">{message.text}</p>
                            </div>
                        </div>
                    }
                }).collect_view()
            })}

            {move || feed.with(|feed| feed.shows_typing_indicator(CHAT_MESSAGES.len())).then(|| view! {
                <div class="flex gap-1 items-center" data-typing-indicator="">
                    <div class="flex gap-1 px-3 sm:px-4 py-2 sm:py-3 bg-white/5 rounded-lg border border-white/10">
                        {(0..3u8).map(|i| view! {
                            <div
                                class="typing-dot w-1.5 h-1.5 sm:w-2 sm:h-2 bg-white/40 rounded-full"
                                style=format!("animation-delay: {:.1}s;", f64::from(i) * 0.2)
                            ></div>
                        }).collect_view()}
                    </div>
                </div>
            })}
        </div>

        <div class="flex items-center gap-1 sm:gap-2 p-2 sm:p-4 bg-white/5 rounded-lg border border-white/10">
            <div class="flex-1 relative min-w-0">
                <input
                    type="text"
                    readonly=true
                    disabled=true
                    class="w-full bg-transparent text-white placeholder-gray-500 outline-none px-2 sm:px-4 text-xs sm:text-sm pointer-events-none"
                    placeholder="Type your message..."
                    prop:value=move || typed.get()
                />
                {move || typing.get().then(|| view! {
                    <span class="caret-blink absolute right-2 sm:right-4 top-1/2 -translate-y-1/2 text-white text-base sm:text-lg">
                        "|"
                    </span>
                })}
            </div>
            <div class="flex items-center gap-1 sm:gap-2 pointer-events-none">
                <div class="p-1.5 sm:p-2 rounded-lg">
                    <Icon name=icons::MIC class="w-4 h-4 sm:w-5 sm:h-5 text-gray-400"/>
                </div>
                <div class="p-1.5 sm:p-2 rounded-lg">
                    <Icon name=icons::SEND class="w-4 h-4 sm:w-5 sm:h-5 text-white"/>
                </div>
            </div>
        </div>
    }
}

#[component]
fn VoicePanel() -> impl IntoView {
    let config = use_motion_config();
    let ticker = Ticker::new(config.ticker, INCOMING_CALLS.len());
    let scroll_style = use_ticker(config.ticker, INCOMING_CALLS.len());
    let rows = ticker.rows(INCOMING_CALLS);
    let row_height = format!("height: {}px;", config.ticker.item_height);

    view! {
        <div class="mb-4 sm:mb-6">
            <h3 class="text-xl sm:text-2xl font-bold mb-2 text-white">"Voice Assistants"</h3>
            <p class="text-xs sm:text-sm text-gray-400">
                "We build smart voice solutions for effortless control, better access, and engaging user experiences."
            </p>
        </div>

        <div class="relative h-[400px] sm:h-[500px] overflow-hidden">
            <div style=move || scroll_style.get()>
                {rows.into_iter().map(|(index, call)| {
                    let pulse = format!("animation-delay: {:.1}s;", (index % INCOMING_CALLS.len()) as f64 * 0.3);
                    view! {
                        <div class="pb-3" style=row_height.clone() data-call-row=index.to_string()>
                            <div class="flex items-center justify-between p-3 sm:p-4 bg-white/5 rounded-lg border border-white/10 hover:bg-white/10 transition-colors">
                                <div class="flex items-center gap-2 sm:gap-4">
                                    <div class="avatar-pulse text-2xl sm:text-3xl" style=pulse>{call.avatar}</div>
                                    <div>
                                        <p class="text-white font-medium text-sm sm:text-base">{call.name}</p>
                                        <div class="flex items-center gap-1.5 sm:gap-2 mt-1">
                                            <div class="live-dot w-1.5 h-1.5 sm:w-2 sm:h-2 bg-red-500 rounded-full"></div>
                                            <span class="text-xs sm:text-sm text-gray-400">"INCOMING CALL"</span>
                                        </div>
                                    </div>
                                </div>
                                <button class="p-2 sm:p-3 rounded-lg border border-white/20 hover:bg-white/10 transition-colors" aria-label="Answer call">
                                    <Icon name=icons::MIC class="w-4 h-4 sm:w-5 sm:h-5 text-white"/>
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::sections::testing::{assert_in_order, render};

    #[test]
    fn test_first_paint_has_tabs_and_pending_chat() {
        let html = render(|| view! { <Solutions/> });
        assert!(html.contains("id=\"services\""));
        assert_in_order(&html, CHAT_TABS.iter().copied());
        assert_eq!(html.matches("data-chat-tab=").count(), CHAT_TABS.len());

        // No timers run on the server: empty feed, dots showing, no caret
        assert_eq!(html.matches("data-chat-message=").count(), 0);
        assert!(html.contains("data-typing-indicator"));
        assert!(!html.contains("caret-blink"));
    }

    #[test]
    fn test_voice_ticker_renders_three_copies() {
        let html = render(|| view! { <Solutions/> });
        assert_eq!(html.matches("data-call-row=").count(), INCOMING_CALLS.len() * 3);
        assert!(html.contains("translate3d(0, 0px, 0)"));
        assert!(html.contains("height: 90px;"));
    }
}
