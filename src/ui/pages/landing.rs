//! Landing page
//!
//! The whole site is this one scrolling page. Sections are stacked in a
//! fixed order and link to each other through fragment anchors.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{SITE_DESCRIPTION, SITE_NAME, SITE_TITLE};
use crate::ui::sections::{
    Automation, CaseStudies, Companies, Contact, Faq, FinalCta, Footer, Hero, Navigation, Pricing,
    Process, Solutions, Stats, Team, Testimonials,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta/>
        <LandingSections/>
    }
}

/// Every section of the page in scroll order
#[component]
pub fn LandingSections() -> impl IntoView {
    view! {
        <main class="relative bg-black overflow-x-hidden">
            <Navigation/>
            <Hero/>
            <Companies/>
            <Solutions/>
            <Automation/>
            <Process/>
            <Stats/>
            <CaseStudies/>
            <Testimonials/>
            <Pricing/>
            <FinalCta/>
            <Team/>
            <Faq/>
            <Contact/>
            <Footer/>
        </main>
    }
}

/// Title, description and social preview tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=SITE_TITLE/>

        <Meta name="description" content=SITE_DESCRIPTION/>
        <Meta name="keywords" content="AI agency, AI agents, automation, chatbots, voice assistants, RAG, LangChain, CrewAI, vector databases"/>

        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content=SITE_NAME/>
        <Meta property="og:title" content=SITE_TITLE/>
        <Meta property="og:description" content=SITE_DESCRIPTION/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=SITE_TITLE/>
        <Meta name="twitter:description" content=SITE_DESCRIPTION/>

        <Link rel="icon" type_="image/svg+xml" href="/logo.svg"/>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::content::Anchor;
    use crate::ui::sections::testing::render;

    #[test]
    fn test_every_anchor_target_exists_once() {
        let html = render(|| view! { <LandingSections/> });

        for anchor in Anchor::ALL {
            let id = format!("id=\"{}\"", anchor.id());
            assert_eq!(html.matches(&id).count(), 1, "section {} missing or duplicated", anchor.id());
        }
    }

    #[test]
    fn test_sections_in_page_order() {
        let html = render(|| view! { <LandingSections/> });

        let positions: Vec<usize> = Anchor::ALL
            .iter()
            .map(|anchor| html.find(&format!("id=\"{}\"", anchor.id())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
