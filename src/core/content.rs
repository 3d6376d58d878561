//! Static page content
//!
//! Every list on the landing page is defined here once and never mutated.
//! Items carry display strings plus an icon reference (a key into
//! [`crate::ui::icon`]); list position is the only ordering.

/// In-page fragment anchors.
///
/// The navigation bar and footer link into these; they must stay stable when
/// sections are reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Services,
    Automation,
    Process,
    Results,
    CaseStudies,
    Pricing,
    Cta,
    Team,
    Faqs,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 10] = [
        Anchor::Services,
        Anchor::Automation,
        Anchor::Process,
        Anchor::Results,
        Anchor::CaseStudies,
        Anchor::Pricing,
        Anchor::Cta,
        Anchor::Team,
        Anchor::Faqs,
        Anchor::Contact,
    ];

    /// Element id of the section
    pub const fn id(&self) -> &'static str {
        match self {
            Anchor::Services => "services",
            Anchor::Automation => "automation",
            Anchor::Process => "process",
            Anchor::Results => "results",
            Anchor::CaseStudies => "case-studies",
            Anchor::Pricing => "pricing",
            Anchor::Cta => "cta",
            Anchor::Team => "team",
            Anchor::Faqs => "faqs",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment link pointing at the section
    pub const fn href(&self) -> &'static str {
        match self {
            Anchor::Services => "#services",
            Anchor::Automation => "#automation",
            Anchor::Process => "#process",
            Anchor::Results => "#results",
            Anchor::CaseStudies => "#case-studies",
            Anchor::Pricing => "#pricing",
            Anchor::Cta => "#cta",
            Anchor::Team => "#team",
            Anchor::Faqs => "#faqs",
            Anchor::Contact => "#contact",
        }
    }
}

pub const SITE_NAME: &str = "Enigma Studio AI";
pub const SITE_TITLE: &str = "Enigma Studio AI - Intelligent Automations & AI Agents";
pub const SITE_DESCRIPTION: &str = "Cutting-edge AI systems, custom automations, and smart workflows powered by LangChain, CrewAI, RAG, and Vector Databases.";
pub const LOGO_PATH: &str = "/logo.svg";
pub const HERO_VIDEO_URL: &str =
    "https://res.cloudinary.com/dxrr3gb42/video/upload/v1764920792/HomePage_bfheru.mp4";

/// Link with a label and a target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", href: Anchor::Services.href() },
    NavLink { label: "Process", href: Anchor::Process.href() },
    NavLink { label: "Case Studies", href: Anchor::CaseStudies.href() },
    NavLink { label: "Pricing", href: Anchor::Pricing.href() },
    NavLink { label: "FAQs", href: Anchor::Faqs.href() },
    NavLink { label: "Contact", href: Anchor::Contact.href() },
];

// ============================================================================
// AI Solutions: chatbot + voice assistant panels
// ============================================================================

pub const CHAT_TABS: &[&str] = &["PLAN", "ANALYZE", "FORECAST"];

/// One simulated chat bubble, shown `delay_ms` after mount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: &'static str,
    pub is_user: bool,
    pub delay_ms: u32,
}

pub const CHAT_MESSAGES: &[ChatMessage] = &[
    ChatMessage {
        id: 1,
        text: "How do I reset my password?",
        is_user: true,
        delay_ms: 0,
    },
    ChatMessage {
        id: 2,
        text: "I can help you reset your password. Let me guide you through the process.",
        is_user: false,
        delay_ms: 1000,
    },
    ChatMessage {
        id: 3,
        text: "First, click on the \"Forgot Password\" link on the login page...",
        is_user: false,
        delay_ms: 2000,
    },
];

/// Questions cycled through by the chatbot input typewriter
pub const TYPING_QUESTIONS: &[&str] = &[
    "how do i forget my password?",
    "how can i refund my amount?",
    "how do i contact support?",
    "how can i update my profile?",
    "how do i cancel my subscription?",
    "how can i change my email?",
    "how do i reset my account?",
    "how can i get a refund?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncomingCall {
    pub id: u32,
    pub name: &'static str,
    pub avatar: &'static str,
}

pub const INCOMING_CALLS: &[IncomingCall] = &[
    IncomingCall { id: 1, name: "Potential Buyer", avatar: "👤" },
    IncomingCall { id: 2, name: "Potential Buyer", avatar: "👨" },
    IncomingCall { id: 3, name: "Potential Buyer", avatar: "👩" },
    IncomingCall { id: 4, name: "Potential Buyer", avatar: "🧑" },
    IncomingCall { id: 5, name: "Potential Buyer", avatar: "👴" },
    IncomingCall { id: 6, name: "Potential Buyer", avatar: "👵" },
];

// ============================================================================
// Automation + agents
// ============================================================================

/// Generic titled entry used by the workflow and agent lists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offering {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const AUTOMATION_WORKFLOWS: &[Offering] = &[
    Offering {
        id: 1,
        title: "CRM Automation",
        description: "HubSpot, Zoho, Salesforce",
        icon: "users",
    },
    Offering {
        id: 2,
        title: "Email & WhatsApp",
        description: "Automated messaging & follow-ups",
        icon: "mail",
    },
    Offering {
        id: 3,
        title: "Lead Qualification",
        description: "Automatic follow-ups & scoring",
        icon: "zap",
    },
    Offering {
        id: 4,
        title: "Finance & Invoicing",
        description: "Automated billing & payments",
        icon: "dollar-sign",
    },
    Offering {
        id: 5,
        title: "HR Onboarding",
        description: "Streamlined employee setup",
        icon: "briefcase",
    },
];

pub const AUTOMATION_TOOLS: &[&str] = &["n8n", "Make", "Zapier", "LangChain", "CrewAI"];

pub const AI_AGENTS: &[Offering] = &[
    Offering {
        id: 1,
        title: "Generative Content Agent",
        description: "AI-powered content creation and generation",
        icon: "file-text",
    },
    Offering {
        id: 2,
        title: "Predictive Analytics Agent",
        description: "Data-driven insights and forecasting",
        icon: "trending-up",
    },
    Offering {
        id: 3,
        title: "Recommendation Engine Agent",
        description: "Personalized recommendations and suggestions",
        icon: "sparkles",
    },
    Offering {
        id: 4,
        title: "Multi-Agent Collaboration System",
        description: "Coordinated multi-agent workflows",
        icon: "network",
    },
];

// ============================================================================
// Process
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub id: u32,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: 1,
        number: "01",
        title: "Define Objectives and Use Cases",
        description: "We begin by identifying specific challenges or workflows where AI agents can add value. Clear goals are defined to align the AI solution with your business objectives, ensuring measurable outcomes.",
        icon: "target",
    },
    ProcessStep {
        id: 2,
        number: "02",
        title: "Collect and Prepare Data",
        description: "Data is the foundation of AI. We gather, clean, and refine data to ensure its quality and relevance for training and deploying AI agents. This step ensures accuracy and reliability in decision-making.",
        icon: "database",
    },
    ProcessStep {
        id: 3,
        number: "03",
        title: "Design and Train the AI Agent",
        description: "Using advanced tools and algorithms, we design and train the AI agent to perform tasks autonomously. This includes equipping the agent with memory, reasoning capabilities, and access to relevant systems and data sources.",
        icon: "cpu",
    },
    ProcessStep {
        id: 4,
        number: "04",
        title: "Test and Validate Performance",
        description: "The AI agent undergoes rigorous testing in real-world scenarios to validate its accuracy and functionality. Feedback loops are used to refine the agent's performance and address any issues before full deployment.",
        icon: "check-circle",
    },
    ProcessStep {
        id: 5,
        number: "05",
        title: "Deploy, Monitor, and Optimize",
        description: "Once validated, the AI agent is deployed into your operations. Continuous monitoring ensures the agent adapts to new data and evolving business needs. Regular updates and optimizations keep the system running smoothly and effectively.",
        icon: "rocket",
    },
];

// ============================================================================
// Stats + companies
// ============================================================================

/// Headline number; `target` is what the count-up animation lands on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub is_percentage: bool,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        target: 500,
        is_percentage: false,
        label: "Project success",
        description: "Delivered across 20+ countries, from startups to top corporations.",
        icon: "trending-up",
        color: "text-neon-cyan",
    },
    Stat {
        target: 95,
        is_percentage: true,
        label: "Client efficiency",
        description: "Clients reporting enhanced efficiency with our custom strategies.",
        icon: "users",
        color: "text-neon-blue",
    },
    Stat {
        target: 10_000,
        is_percentage: false,
        label: "AI innovation",
        description: "Hours spent crafting smart AI tools to optimize workflows across key industries.",
        icon: "zap",
        color: "text-neon-teal",
    },
    Stat {
        target: 50,
        is_percentage: false,
        label: "Industry recognition",
        description: "Recognized for design, tech, and sustainability over the past five years.",
        icon: "award",
        color: "text-neon-pink",
    },
];

pub const COMPANIES: &[&str] = &[
    "Brand", "Brand", "Brand", "Brand", "Brand", "Brand", "Brand", "Brand", "Brand", "Brand",
    "Brand", "Brand",
];

// ============================================================================
// Case studies
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub results: &'static [&'static str],
    pub icon: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        title: "Real Estate AI Agent",
        description: "Automated lead qualification, instant property matching, and intelligent client communication.",
        results: &[
            "4× faster closing",
            "90% lead qualification accuracy",
            "24/7 automated responses",
        ],
        icon: "trending-up",
    },
    CaseStudy {
        id: 2,
        title: "E-commerce Automation Engine",
        description: "Complete automation system for inventory management, customer support, and personalized marketing.",
        results: &[
            "Real-time inventory sync",
            "AI-powered support chatbot",
            "Automated customer segmentation",
        ],
        icon: "zap",
    },
    CaseStudy {
        id: 3,
        title: "Finance Document Intelligence",
        description: "Advanced RAG system for document processing, extraction, and compliance monitoring.",
        results: &[
            "Vector-based document search",
            "Automated data extraction",
            "Real-time compliance alerts",
        ],
        icon: "file-text",
    },
];

/// Look up a case study by id
pub fn case_study(id: u32) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.id == id)
}

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "CEO, TechFlow Inc.",
        content: "Enigma Studio transformed our operations with intelligent automation. Our team now focuses on strategy while AI handles the routine tasks. The results exceeded our expectations.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "CTO, DataVault Solutions",
        content: "The RAG system they built for us revolutionized how we access and use our knowledge base. Search times dropped by 90%, and accuracy improved dramatically.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Watson",
        role: "Operations Director, RealEstate Pro",
        content: "Their AI agent handles lead qualification so well that our sales team can focus on closing deals. We've seen a 4x increase in conversion rates.",
        rating: 5,
    },
    Testimonial {
        name: "David Kim",
        role: "Founder, EcomBoost",
        content: "The automation engine they created runs our entire e-commerce operation. Inventory, customer service, marketing, all automated and working flawlessly.",
        rating: 5,
    },
];

// ============================================================================
// Pricing
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl PricingPlan {
    /// Suffix shown after the price; quoted plans have none
    pub fn period_label(&self) -> Option<String> {
        (self.price != "Custom").then(|| format!("/{}", self.period))
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter Automation",
        price: "$5,000",
        period: "one-time",
        description: "Perfect for small businesses looking to automate key processes",
        features: &[
            "Basic workflow automation",
            "CRM integration",
            "Email automation",
            "Up to 5 workflows",
            "3 months support",
        ],
        popular: false,
    },
    PricingPlan {
        name: "Business AI Package",
        price: "$15,000",
        period: "one-time",
        description: "Comprehensive AI solution for growing businesses",
        features: &[
            "Custom AI agent development",
            "RAG knowledge base",
            "Advanced automation workflows",
            "Unlimited workflows",
            "6 months support",
            "Performance analytics",
        ],
        popular: true,
    },
    PricingPlan {
        name: "Enterprise AI Transformation",
        price: "Custom",
        period: "project-based",
        description: "Complete AI transformation for large organizations",
        features: &[
            "Multi-agent AI systems",
            "Enterprise RAG + Vector DB",
            "Full-stack AI applications",
            "Custom integrations",
            "12 months support",
            "Dedicated AI team",
            "Ongoing optimization",
        ],
        popular: false,
    },
];

// ============================================================================
// Team
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

impl TeamMember {
    /// First letter of every name part, e.g. "LH" for "Lucas Harris"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Lucas Harris",
        role: "AI Expert",
        description: "12+ years building intelligent systems and automation workflows.",
        gradient: "from-neon-cyan to-neon-blue",
    },
    TeamMember {
        name: "Peter Johnson",
        role: "Founder of Enigma",
        description: "Visionary leader transforming businesses through AI innovation.",
        gradient: "from-neon-blue to-neon-teal",
    },
    TeamMember {
        name: "Daniel Lee",
        role: "Full-Stack Developer",
        description: "Crafting seamless AI applications with cutting-edge technology.",
        gradient: "from-neon-teal to-neon-cyan",
    },
    TeamMember {
        name: "Sofia Martin",
        role: "Project Manager",
        description: "Ensuring flawless execution and client satisfaction.",
        gradient: "from-neon-pink to-neon-teal",
    },
];

// ============================================================================
// FAQ
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

/// FAQ entry expanded when the page loads
pub const INITIAL_OPEN_FAQ: u32 = 1;

pub const FAQS: &[Faq] = &[
    Faq {
        id: 1,
        question: "What does the membership include?",
        answer: "The membership gives you unlimited access to our AI tools, regular updates, priority support, and expert resources to help you achieve your business goals.",
    },
    Faq {
        id: 2,
        question: "How do I get started with your services?",
        answer: "Getting started is simple. Book a free strategy session with our team, and we'll assess your needs, create a custom roadmap, and begin implementation within days.",
    },
    Faq {
        id: 3,
        question: "Can I cancel my membership anytime?",
        answer: "Yes, you can cancel your membership at any time. There are no long-term contracts or cancellation fees. Your access continues until the end of your billing period.",
    },
    Faq {
        id: 4,
        question: "Do I need technical expertise to use your tools?",
        answer: "Not at all. Our AI solutions are designed to be user-friendly and intuitive. We provide comprehensive training and support to ensure your team can leverage the full power of our tools.",
    },
    Faq {
        id: 5,
        question: "Are there additional costs?",
        answer: "Our pricing is transparent with no hidden fees. The plans include all core features, updates, and support. Custom integrations or enterprise features may have additional costs, which we discuss upfront.",
    },
    Faq {
        id: 6,
        question: "How often do you release updates?",
        answer: "We release updates monthly with new features, improvements, and security patches. Major updates are released quarterly, and all updates are included in your membership at no extra cost.",
    },
];

// ============================================================================
// Contact + footer
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Chat to sales",
        description: "Contact our sales team.",
        value: "sales@enigmastudio.ai",
        href: "mailto:sales@enigmastudio.ai",
        icon: "send",
    },
    ContactChannel {
        title: "Call Us",
        description: "Get instant help.",
        value: "+923407005883",
        href: "tel:+923407005883",
        icon: "phone",
    },
    ContactChannel {
        title: "Office:",
        description: "Reach out to us any time for questions, support, or inquiries.",
        value: "C-1 Block B-17, Islamabad, Pakistan",
        href: "#",
        icon: "map-pin",
    },
];

pub const FOOTER_NAVIGATION: &[NavLink] = &[
    NavLink { label: "About", href: "#" },
    NavLink { label: "Services", href: Anchor::Services.href() },
    NavLink { label: "Plans", href: Anchor::Pricing.href() },
    NavLink { label: "Team", href: Anchor::Team.href() },
];

pub const FOOTER_LEGAL: &[NavLink] = &[
    NavLink { label: "Terms of service", href: "#" },
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "FAQs", href: Anchor::Faqs.href() },
];

/// Social profile link with its glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const FOOTER_SOCIAL: &[SocialLink] = &[
    SocialLink { label: "X/Twitter", href: "#", icon: "twitter" },
    SocialLink { label: "Linkedin", href: "#", icon: "linkedin" },
    SocialLink { label: "YouTube", href: "#", icon: "youtube" },
];
