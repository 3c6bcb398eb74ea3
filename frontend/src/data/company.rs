/// One card of the scroll-driven services carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
    pub chips: &'static [&'static str],
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        id: "web-dev",
        title: "Web Development",
        description: "Design-engineered sites and web apps built for speed, clarity, and long-term maintainability. No template feel, no brittle hacks.",
        bullets: &["Modern framework builds", "Performance budgets", "Design fidelity in code"],
        chips: &["Web apps", "Landing pages", "CMS builds"],
    },
    ServiceCard {
        id: "custom-software",
        title: "Custom Software",
        description: "Purpose-built internal tools and product features that reduce manual work, unify data, and scale with your process.",
        bullets: &["Workflow tools", "Dashboards & portals", "Third-party integrations"],
        chips: &["B2B", "Automation", "Systems"],
    },
    ServiceCard {
        id: "ecommerce",
        title: "E-Commerce Solutions",
        description: "Conversion-first storefronts and product flows: clean UX, fast pages, and the operational edges covered.",
        bullets: &["Storefront UX", "Checkout optimization", "Analytics that make sense"],
        chips: &["Shopify", "Headless", "CRO"],
    },
    ServiceCard {
        id: "seo-content",
        title: "SEO & Content Strategy",
        description: "Technical SEO and content architecture that makes your product discoverable: structured pages, intentional linking, measurable wins.",
        bullets: &["Technical audits", "Content systems", "Information architecture"],
        chips: &["SEO", "Content", "IA"],
    },
    ServiceCard {
        id: "digital-marketing",
        title: "Digital Marketing",
        description: "Campaigns built like products: clear positioning, disciplined creative, and tracking you can actually trust.",
        bullets: &["Campaign strategy", "Creative direction", "Measurement setup"],
        chips: &["Paid social", "Search", "Analytics"],
    },
    ServiceCard {
        id: "social",
        title: "Social Media Management",
        description: "A consistent system for your presence: cadence, creative templates, and content that compounds instead of random posts.",
        bullets: &["Content cadence", "Creative systems", "Brand consistency"],
        chips: &["Brand voice", "Content", "Community"],
    },
];

/// Services offered as toggle chips in the contact form.
pub const SERVICE_OPTIONS: &[&str] = &[
    "Web Development",
    "AI & ML Solutions",
    "Custom Software (B2B & SaaS)",
    "E-Commerce Solutions",
    "Digital Marketing",
    "Web Design",
];

pub const HERO_MARQUEE: &[&str] = &[
    "WEB DEVELOPMENT",
    "DIGITAL MARKETING",
    "SOCIAL MEDIA MANAGEMENT",
    "SEO & CONTENT STRATEGY",
    "E-COMMERCE SOLUTIONS",
    "CUSTOM SOFTWARE DEVELOPMENT",
];

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Discovery",
        description: "We dive deep into your business goals, target audience, and technical requirements through research and stakeholder interviews.",
        bullets: &[
            "Market research and competitive analysis",
            "Stakeholder interviews on objectives and pain points",
            "Technical audit of existing systems",
            "Clear scope and success metrics",
        ],
    },
    ProcessStep {
        step: "02",
        title: "Strategy & Design",
        description: "A tailored strategy and designs that align with your vision, built to scale and centred on the people who use them.",
        bullets: &[
            "Strategy aligned with business goals",
            "UX design focused on conversions",
            "Scalable technical architecture",
            "Interactive prototypes for approval",
        ],
    },
    ProcessStep {
        step: "03",
        title: "Development & Launch",
        description: "We bring the plan to life with disciplined engineering, rigorous testing, and a calm deployment.",
        bullets: &[
            "Iterative sprints with regular updates",
            "Peer review and automated testing",
            "Zero-downtime deployment",
            "Post-launch monitoring and tuning",
        ],
    },
];

pub struct Difference {
    pub keyword: &'static str,
    pub others: &'static str,
    pub us: &'static str,
}

pub const DIFFERENCES: &[Difference] = &[
    Difference { keyword: "Custom", others: "Generic templates and one-size-fits-all solutions", us: "Bespoke solutions tailored to your unique business needs" },
    Difference { keyword: "Speed", others: "Slow response times and delayed project delivery", us: "Fast turnaround with agile development" },
    Difference { keyword: "Results", others: "Vague metrics and unclear ROI tracking", us: "Data-driven strategies with transparent results" },
    Difference { keyword: "Partnership", others: "Distant teams with limited communication", us: "Dedicated partners as an extension of your team" },
    Difference { keyword: "Experience", others: "Limited experience across industries", us: "Proven track record from startups to enterprise" },
    Difference { keyword: "Complete", others: "Fragmented services requiring multiple vendors", us: "End-to-end solutions from concept to deployment" },
];

pub struct CoreValue {
    pub number: &'static str,
    pub keyword: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[CoreValue] = &[
    CoreValue { number: "01", keyword: "PRECISION", title: "Craft over shortcuts", description: "We don't ship 80%. Button states, hover effects, response times and edge cases are all deliberate." },
    CoreValue { number: "02", keyword: "CANDOR", title: "Radical transparency", description: "We tell you hard truths early. Uncomfortable conversations now beat expensive problems later." },
    CoreValue { number: "03", keyword: "OWNERSHIP", title: "Full commitment", description: "When we take something on, it's ours to make right. We stay invested long after launch." },
    CoreValue { number: "04", keyword: "IMPACT", title: "Results that last", description: "Beautiful products that perform. We care about conversions, load times and real retention." },
];

pub const STATS: &[(&str, &str)] = &[
    ("150+", "Projects Delivered"),
    ("50+", "Enterprise Clients"),
    ("99.9%", "Uptime Guaranteed"),
    ("24/7", "Support Available"),
];

pub const TECHNOLOGIES: &[&str] = &[
    "React", "Next.js", "TypeScript", "Node.js", "Python", "Go", "Rust",
    "AWS", "GCP", "Azure", "Kubernetes", "Docker", "Terraform",
    "PostgreSQL", "MongoDB", "Redis", "GraphQL", "REST", "gRPC",
];

pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Email", value: "flamixtechnologies@gmail.com", href: "mailto:flamixtechnologies@gmail.com" },
    ContactDetail { label: "Phone", value: "+977 9843928450", href: "tel:+9779843928450" },
    ContactDetail { label: "Location", value: "Kathmandu, Nepal", href: "https://maps.app.goo.gl/BDF7o4yNrnuXKhoT9" },
];

pub const NEXT_STEPS: &[(&str, &str, &str)] = &[
    ("01", "We read everything", "Every message lands with a real person. No bots, no auto-replies."),
    ("02", "We respond fast", "Expect a considered reply within 24 hours. Usually a lot sooner."),
    ("03", "We build together", "If it's a fit, we move without bureaucracy. Straight to scoping, straight to work."),
];
