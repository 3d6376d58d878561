use leptos::prelude::*;

use crate::core::content::{Anchor, HERO_VIDEO_URL};
use crate::core::motion::{
    Ease, HERO_PARTICLE_SEED, ParticleTone, Position, Timeline, VisualState, particle_field,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_reveal_on_mount};

/// Headline entrance shared by the hero and the closing call to action.
///
/// Tween 0 is the title, 1 the subtitle, 2 and 3 the buttons, 4 the
/// optional pill above the title.
pub fn headline_timeline(delay: f64) -> Timeline {
    Timeline::new()
        .with_delay(delay)
        .add(VisualState::below(50.0), 1.0, Ease::Power3Out, Position::At(0.0))
        .add(VisualState::below(30.0), 0.8, Ease::Power3Out, Position::Overlap(0.5))
        .add_staggered(2, VisualState::below(20.0), 0.6, Ease::Power3Out, 0.1, Position::Overlap(0.4))
        .add(VisualState::below(20.0), 0.8, Ease::Power3Out, Position::At(0.0))
}

/// Particle dots, grid and gradient layered behind a headline
#[component]
pub fn ParticleBackdrop(seed: u64, white: usize, purple: usize) -> impl IntoView {
    let particles = particle_field(seed, white, purple);

    view! {
        <div class="absolute inset-0 bg-gradient-to-b from-purple-800/10 via-black/10 to-black/20 z-10"></div>
        <div class="absolute inset-0 opacity-10 z-10 grid-backdrop"></div>
        <div class="absolute inset-0 overflow-hidden z-10" aria-hidden="true">
            {particles.into_iter().map(|particle| {
                let class = match particle.tone {
                    ParticleTone::White => "particle bg-white/40",
                    ParticleTone::Purple => "particle bg-purple-400/40",
                };
                view! { <div class=class style=particle.style() data-particle=""></div> }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let mounted = use_reveal_on_mount();
    let plan = RevealPlan::new(headline_timeline(0.2), mounted);

    view! {
        <section class="relative min-h-screen w-full overflow-hidden">
            <video
                class="absolute inset-0 w-full h-full object-cover z-0 pointer-events-none hero-video"
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            >
                <source src=HERO_VIDEO_URL/>
            </video>

            <ParticleBackdrop seed=HERO_PARTICLE_SEED white=50 purple=30/>

            <div class="relative z-20 flex h-screen items-center justify-center">
                <div class="container mx-auto px-6 text-center">
                    <div
                        class="inline-flex items-center gap-2 px-4 py-2 mb-8 border border-white/20 rounded-full bg-black/50 backdrop-blur-sm"
                        style=plan.style(4)
                    >
                        <Icon name=icons::SPARKLES class="w-4 h-4 text-white"/>
                        <span class="text-sm text-white uppercase tracking-wider font-medium">
                            "Cutting-Edge AI Solutions"
                        </span>
                    </div>

                    <h1 class="text-5xl md:text-7xl lg:text-8xl font-bold mb-6 leading-tight text-white" style=plan.style(0)>
                        "Fuel Your Growth"
                        <br/>
                        <span class="bg-gradient-to-r from-white to-purple-200 bg-clip-text text-transparent">
                            "With Next-Gen AI"
                        </span>
                    </h1>

                    <p class="text-lg md:text-xl lg:text-2xl text-gray-300 mb-12 leading-relaxed max-w-2xl mx-auto" style=plan.style(1)>
                        "Unlock new levels of productivity with intelligent automation."
                    </p>

                    <div class="flex flex-wrap justify-center gap-4">
                        <a href=Anchor::Pricing.href() class="btn-light px-6 py-3 flex items-center gap-2" style=plan.style(2)>
                            <Icon name=icons::DOLLAR_SIGN class="w-5 h-5"/>
                            "See our pricing"
                        </a>
                        <a href=Anchor::Contact.href() class="btn-ghost px-6 py-3 flex items-center gap-2" style=plan.style(3)>
                            "Book a free call"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5"/>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_headline_timeline_offsets() {
        let timeline = headline_timeline(0.2);
        let delays: Vec<f64> = timeline.tweens().iter().map(|t| t.delay).collect();

        assert_eq!(timeline.len(), 5);
        assert!(close(delays[0], 0.2));
        assert!(close(delays[1], 0.7));
        assert!(close(delays[2], 1.1));
        assert!(close(delays[3], 1.2));
        assert!(close(delays[4], 0.2));
    }

    #[test]
    fn test_scroll_variant_starts_immediately() {
        let timeline = headline_timeline(0.0);
        assert!(close(timeline.tweens()[0].delay, 0.0));
        assert!(close(timeline.tweens()[1].delay, 0.5));
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::ui::sections::testing::{assert_in_order, render};

    #[test]
    fn test_hero_ships_hidden_and_with_all_particles() {
        let html = render(|| view! { <Hero/> });
        assert_eq!(html.matches("data-particle").count(), 80);
        assert!(html.contains("Fuel Your Growth"));
        assert!(html.contains(HERO_VIDEO_URL));
        // Server markup is the pre-animation state
        assert!(html.contains("opacity: 0;"));
        assert!(html.contains("transition: none;"));
    }

    #[test]
    fn test_buttons_link_to_pricing_and_contact() {
        let html = render(|| view! { <Hero/> });
        let targets = [Anchor::Pricing, Anchor::Contact].map(|anchor| format!("href=\"{}\"", anchor.href()));
        assert_in_order(&html, targets.iter().map(String::as_str));
    }

    #[test]
    fn test_particle_markup_is_deterministic() {
        let first = render(|| view! { <ParticleBackdrop seed=7 white=3 purple=2/> });
        let second = render(|| view! { <ParticleBackdrop seed=7 white=3 purple=2/> });
        assert_eq!(first, second);
    }
}
