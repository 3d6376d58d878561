use leptos::prelude::*;

use crate::core::content::{Anchor, CASE_STUDIES, CaseStudy};
use crate::core::interaction::{ModalEvent, Selection};
use crate::core::motion::{Position, Timeline, VisualState};
use crate::ui::common::DetailModal;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

/// Case study cards; clicking one opens its details in an overlay
#[component]
pub fn CaseStudies() -> impl IntoView {
    let config = use_motion_config();
    let timing = config.reveal;
    let selection = RwSignal::new(Selection::<u32>::new());

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let header = RevealPlan::new(
        Timeline::new().add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0)),
        use_reveal(section_ref, config.trigger),
    );

    let cards_ref = NodeRef::<leptos::html::Div>::new();
    let cards = RevealPlan::new(
        timing.list(CASE_STUDIES.len(), VisualState::below(30.0).scaled(0.95), timing.stagger),
        use_reveal(cards_ref, config.item_trigger),
    );

    let on_event = Callback::new(move |event: ModalEvent| {
        selection.update(|selection| {
            selection.handle(event);
        });
    });

    view! {
        <section
            id=Anchor::CaseStudies.id()
            node_ref=section_ref
            class="py-32 px-6 relative overflow-hidden bg-black"
        >
            <div class="container mx-auto max-w-7xl">
                <div class="text-center mb-16" style=header.style(0)>
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 text-white">"Case Studies"</h2>
                    <p class="text-lg text-gray-400 max-w-2xl mx-auto">
                        "Real results from intelligent automation and AI solutions"
                    </p>
                </div>

                <div node_ref=cards_ref class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {CASE_STUDIES.iter().enumerate().map(|(index, study)| {
                        let id = study.id;
                        view! {
                            <div
                                class="group cursor-pointer hover:-translate-y-2 transition-transform"
                                style=cards.style(index)
                                data-case-card=id.to_string()
                                on:click=move |_| selection.update(|selection| selection.open(id))
                            >
                                <div class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-6 md:p-8 h-full hover:border-white/20 hover:bg-white/5 transition-all duration-300 relative overflow-hidden">
                                    <div class="relative z-10">
                                        <div class="mb-6">
                                            <div class="p-3 bg-white/5 rounded-lg border border-white/10 w-fit group-hover:border-white/20 transition-colors">
                                                <Icon name=study.icon class="w-6 h-6 text-white"/>
                                            </div>
                                        </div>
                                        <div class="mb-6">
                                            <h3 class="text-2xl font-bold mb-3 text-white group-hover:text-purple-200 transition-colors">
                                                {study.title}
                                            </h3>
                                            <p class="text-sm text-gray-400 leading-relaxed">{study.description}</p>
                                        </div>
                                        <div class="flex items-center text-white font-medium group-hover:text-purple-200 transition-colors">
                                            <span>"View Details"</span>
                                            <Icon name=icons::ARROW_RIGHT class="ml-2 w-5 h-5 group-hover:translate-x-2 transition-transform"/>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>

            // Only mounted while the selected id resolves to a study
            {move || {
                selection
                    .with(|selection| selection.resolve(CASE_STUDIES, |study| study.id))
                    .map(|study| view! { <CaseStudyModal study=study on_event=on_event/> })
            }}
        </section>
    }
}

/// Overlay body for one case study
#[component]
pub fn CaseStudyModal(study: &'static CaseStudy, on_event: Callback<ModalEvent>) -> impl IntoView {
    view! {
        <DetailModal title=study.title.to_string() on_event=on_event max_width="max-w-3xl">
            <div class="mb-6">
                <div class="p-4 bg-white/5 rounded-lg border border-white/10 w-fit">
                    <Icon name=study.icon class="w-8 h-8 text-white"/>
                </div>
            </div>
            <p class="text-lg text-gray-300 mb-8 leading-relaxed">{study.description}</p>
            <div class="space-y-3">
                <h4 class="text-xl font-semibold text-white mb-4">"Key Results:"</h4>
                {study.results.iter().enumerate().map(|(index, result)| view! {
                    <div
                        class="slide-in-left flex items-center gap-4 p-4 bg-white/5 rounded-lg border border-white/10 hover:bg-white/10 transition-colors"
                        style=format!("animation-delay: {:.1}s;", index as f64 * 0.1)
                        data-case-result=""
                    >
                        <div class="w-2 h-2 rounded-full bg-purple-400"></div>
                        <span class="text-gray-300">{*result}</span>
                    </div>
                }).collect_view()}
            </div>
        </DetailModal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::content::case_study;
    use crate::ui::sections::testing::{assert_in_order, escaped, render};

    #[test]
    fn test_cards_render_without_overlay() {
        let html = render(|| view! { <CaseStudies/> });
        assert!(html.contains("id=\"case-studies\""));
        assert_eq!(html.matches("data-case-card=").count(), CASE_STUDIES.len());
        assert_in_order(&html, CASE_STUDIES.iter().map(|c| c.title));
        assert!(!html.contains("data-modal-backdrop"));
    }

    #[test]
    fn test_overlay_lists_every_result() {
        let finance = case_study(3).unwrap();
        let html = render(move || view! { <CaseStudyModal study=finance on_event=Callback::new(|_| {})/> });

        assert!(html.contains(&escaped(finance.title)));
        assert!(html.contains("Key Results:"));
        assert_eq!(html.matches("data-case-result").count(), finance.results.len());
        assert_in_order(&html, finance.results.iter().copied());
    }
}
