use leptos::prelude::*;

use crate::core::content::{Anchor, TEAM_MEMBERS};
use crate::core::motion::{Position, Timeline, VisualState};
use crate::ui::common::SectionHeading;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

const MEMBER_LINKS: [&str; 3] = [icons::LINKEDIN, icons::TWITTER, icons::MAIL];

#[component]
pub fn Team() -> impl IntoView {
    let config = use_motion_config();
    let grid_ref = NodeRef::<leptos::html::Div>::new();
    let cards = Timeline::new().add_staggered(
        TEAM_MEMBERS.len(),
        VisualState::below(50.0).scaled(0.95),
        0.8,
        config.reveal.ease,
        config.reveal.stagger,
        Position::At(0.0),
    );
    let plan = RevealPlan::new(cards, use_reveal(grid_ref, config.trigger));

    view! {
        <section id=Anchor::Team.id() class="min-h-screen py-32 px-6 relative overflow-hidden bg-black">
            <div class="container mx-auto">
                <SectionHeading
                    title="Our Team"
                    subtitle="Skilled experts, not generic teams. We craft tailored AI systems that drive success and lasting impact."
                />

                <div node_ref=grid_ref class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 max-w-7xl mx-auto">
                    {TEAM_MEMBERS.iter().enumerate().map(|(index, member)| view! {
                        <div class="group relative hover:-translate-y-2 transition-transform" style=plan.style(index) data-member=member.name>
                            <div class="glass rounded-2xl p-6 border border-white/10 hover:border-neon-cyan/50 transition-all duration-500 relative overflow-hidden">
                                <div class="relative z-10">
                                    <div class="mb-6 flex justify-center">
                                        <div class="relative">
                                            <div class=format!("w-32 h-32 rounded-full bg-gradient-to-br {} p-1 group-hover:scale-110 transition-transform duration-300", member.gradient)>
                                                <div class="w-full h-full rounded-full bg-dark-card flex items-center justify-center text-4xl font-bold text-white" data-initials="">
                                                    {member.initials()}
                                                </div>
                                            </div>
                                            <div class="absolute -bottom-2 -right-2 w-8 h-8 rounded-full bg-gradient-to-br from-neon-cyan to-neon-blue flex items-center justify-center border-2 border-dark-bg">
                                                <div class="w-3 h-3 rounded-full bg-neon-green animate-pulse"></div>
                                            </div>
                                        </div>
                                    </div>

                                    <h3 class="text-xl font-bold mb-1 text-white text-center group-hover:text-neon-cyan transition-colors">
                                        {member.name}
                                    </h3>
                                    <p class="text-neon-cyan text-sm font-semibold mb-3 text-center">{member.role}</p>
                                    <p class="text-gray-400 text-sm text-center leading-relaxed mb-4">{member.description}</p>

                                    <div class="flex justify-center gap-3">
                                        {MEMBER_LINKS.iter().map(|icon| view! {
                                            <a href="#" class="w-8 h-8 rounded-full glass border border-white/10 flex items-center justify-center hover:border-neon-cyan transition-colors">
                                                <Icon name=*icon class="w-4 h-4 text-gray-400 group-hover:text-neon-cyan transition-colors"/>
                                            </a>
                                        }).collect_view()}
                                    </div>
                                </div>
                            </div>
                        </div>
                    }).collect_view()}
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
    fn test_members_show_initials() {
        let html = render(|| view! { <Team/> });
        assert!(html.contains("id=\"team\""));
        assert_eq!(html.matches("data-member=").count(), TEAM_MEMBERS.len());
        assert_in_order(&html, TEAM_MEMBERS.iter().map(|m| m.name));
        assert!(html.contains(">LH<"));
        assert!(html.contains(">SM<"));
    }
}
