use leptos::prelude::*;

/// Stroke icon drawn inline so it inherits `currentColor`
#[component]
pub fn Icon(
    /// Icon key, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
            inner_html=glyph(name)
        ></svg>
    }
}

/// SVG body for `name`; unknown keys draw an empty box instead of failing
pub fn glyph(name: &str) -> &'static str {
    match name {
        icons::ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
        icons::AWARD => r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
        icons::BOT => r#"<path d="M12 8V4H8"/><rect width="16" height="12" x="4" y="8" rx="2"/><path d="M2 14h2M20 14h2M15 13v2M9 13v2"/>"#,
        icons::BRIEFCASE => r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
        icons::CHECK => r#"<path d="M20 6 9 17l-5-5"/>"#,
        icons::CHECK_CIRCLE => r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#,
        icons::CHEVRON_DOWN => r#"<path d="m6 9 6 6 6-6"/>"#,
        icons::CPU => r#"<rect x="4" y="4" width="16" height="16" rx="2"/><rect x="9" y="9" width="6" height="6"/><path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"/>"#,
        icons::DATABASE => r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5V19A9 3 0 0 0 21 19V5"/><path d="M3 12A9 3 0 0 0 21 12"/>"#,
        icons::DOLLAR_SIGN => r#"<line x1="12" x2="12" y1="2" y2="22"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#,
        icons::FILE_TEXT => r#"<path d="M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z"/><polyline points="14 2 14 8 20 8"/><line x1="16" x2="8" y1="13" y2="13"/><line x1="16" x2="8" y1="17" y2="17"/>"#,
        icons::LINKEDIN => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
        icons::MAIL => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        icons::MAP_PIN => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
        icons::MENU => r#"<line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
        icons::MESSAGE => r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#,
        icons::MIC => r#"<path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z"/><path d="M19 10v2a7 7 0 0 1-14 0v-2"/><line x1="12" x2="12" y1="19" y2="22"/>"#,
        icons::NETWORK => r#"<rect x="16" y="16" width="6" height="6" rx="1"/><rect x="2" y="16" width="6" height="6" rx="1"/><rect x="9" y="2" width="6" height="6" rx="1"/><path d="M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3"/><path d="M12 12V8"/>"#,
        icons::PHONE => r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
        icons::PLAY => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
        icons::ROCKET => r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#,
        icons::SEND => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
        icons::SPARKLES => r#"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z"/>"#,
        icons::STAR => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
        icons::TARGET => r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#,
        icons::TRENDING_UP => r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#,
        icons::TWITTER => r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
        icons::USERS => r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        icons::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        icons::YOUTUBE => r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><path d="m10 15 5-3-5-3z"/>"#,
        icons::ZAP => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
        _ => r#"<rect x="4" y="4" width="16" height="16" rx="2"/>"#,
    }
}

/// Icon keys shared by the content tables and the components
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const AWARD: &str = "award";
    pub const BOT: &str = "bot";
    pub const BRIEFCASE: &str = "briefcase";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CPU: &str = "cpu";
    pub const DATABASE: &str = "database";
    pub const DOLLAR_SIGN: &str = "dollar-sign";
    pub const FILE_TEXT: &str = "file-text";
    pub const LINKEDIN: &str = "linkedin";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MESSAGE: &str = "message-square";
    pub const MIC: &str = "mic";
    pub const NETWORK: &str = "network";
    pub const PHONE: &str = "phone";
    pub const PLAY: &str = "play";
    pub const ROCKET: &str = "rocket";
    pub const SEND: &str = "send";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const TARGET: &str = "target";
    pub const TRENDING_UP: &str = "trending-up";
    pub const TWITTER: &str = "twitter";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const YOUTUBE: &str = "youtube";
    pub const ZAP: &str = "zap";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{
        AI_AGENTS, AUTOMATION_WORKFLOWS, CASE_STUDIES, CONTACT_CHANNELS, FOOTER_SOCIAL,
        PROCESS_STEPS, STATS,
    };

    const FALLBACK: &str = r#"<rect x="4" y="4" width="16" height="16" rx="2"/>"#;

    #[test]
    fn test_every_content_icon_has_a_glyph() {
        let keys = AUTOMATION_WORKFLOWS
            .iter()
            .chain(AI_AGENTS)
            .map(|o| o.icon)
            .chain(PROCESS_STEPS.iter().map(|s| s.icon))
            .chain(STATS.iter().map(|s| s.icon))
            .chain(CASE_STUDIES.iter().map(|c| c.icon))
            .chain(CONTACT_CHANNELS.iter().map(|c| c.icon))
            .chain(FOOTER_SOCIAL.iter().map(|s| s.icon));

        for key in keys {
            assert_ne!(glyph(key), FALLBACK, "missing glyph for {key}");
        }
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(glyph("no-such-icon"), FALLBACK);
    }
}
