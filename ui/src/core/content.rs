//! Static page content.
//!
//! Every table here is read-only for the life of the process. Human-readable
//! text is stored as Fluent message ids (resolved with `i18n::tr`); contact
//! details and asset references are literal.

/// Glyphs drawn by `components::Icon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    MessageCircle,
    Users,
    BarChart,
    Globe,
    Download,
    Menu,
    Close,
}

/// One marketed capability shown in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
}

pub const FEATURES: [FeatureDescriptor; 4] = [
    FeatureDescriptor {
        icon: IconKind::MessageCircle,
        title: "feature-direct-title",
        description: "feature-direct-description",
        stat: "feature-direct-stat",
    },
    FeatureDescriptor {
        icon: IconKind::Users,
        title: "feature-team-title",
        description: "feature-team-description",
        stat: "feature-team-stat",
    },
    FeatureDescriptor {
        icon: IconKind::BarChart,
        title: "feature-analytics-title",
        description: "feature-analytics-description",
        stat: "feature-analytics-stat",
    },
    FeatureDescriptor {
        icon: IconKind::Globe,
        title: "feature-global-title",
        description: "feature-global-description",
        stat: "feature-global-stat",
    },
];

/// A primary navigation entry.
///
/// The full layout links to in-page anchors; the simple header links to routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
    pub route: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "nav-features",
        anchor: "#features",
        route: "/features",
    },
    NavLink {
        label: "nav-pricing",
        anchor: "#pricing",
        route: "/pricing",
    },
    NavLink {
        label: "nav-about",
        anchor: "#about",
        route: "/about",
    },
    NavLink {
        label: "nav-contact",
        anchor: "#contact",
        route: "/contact",
    },
];

/// Label + route pair for footer link lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLink {
    pub label: &'static str,
    pub route: &'static str,
}

pub const LEGAL_LINKS: [RouteLink; 3] = [
    RouteLink {
        label: "legal-terms",
        route: "/terms",
    },
    RouteLink {
        label: "legal-privacy",
        route: "/privacy",
    },
    RouteLink {
        label: "legal-cookies",
        route: "/cookies",
    },
];

pub const SIMPLE_FOOTER_LINKS: [RouteLink; 3] = [
    RouteLink {
        label: "legal-terms",
        route: "/terms",
    },
    RouteLink {
        label: "legal-privacy",
        route: "/privacy",
    },
    RouteLink {
        label: "nav-contact",
        route: "/contact",
    },
];

pub const PROMO_IMAGE_SRC: &str = "/api/placeholder/400/600";

pub const PROMO_POINTS: [&str; 4] = [
    "promo-point-notifications",
    "promo-point-documents",
    "promo-point-actions",
    "promo-point-offline",
];

/// A rollout phase in the implementation strategy panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyPhase {
    pub title: &'static str,
    /// Number shown next to the first step; later steps count up from here.
    pub first_step: usize,
    pub steps: &'static [&'static str],
}

impl StrategyPhase {
    /// Steps paired with their display number.
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(move |(offset, step)| (self.first_step + offset, *step))
    }
}

pub const STRATEGY_PHASES: [StrategyPhase; 2] = [
    StrategyPhase {
        title: "strategy-launch-title",
        first_step: 1,
        steps: &[
            "strategy-launch-beta",
            "strategy-launch-core",
            "strategy-launch-training",
            "strategy-launch-feedback",
        ],
    },
    StrategyPhase {
        title: "strategy-expansion-title",
        first_step: 5,
        steps: &[
            "strategy-expansion-analytics",
            "strategy-expansion-routing",
            "strategy-expansion-languages",
            "strategy-expansion-compliance",
        ],
    },
];

pub const CONTACT_EMAIL: &str = "support@hrplatform.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

pub const SITE_COPYRIGHT_YEAR: u16 = 2024;
pub const SIMPLE_COPYRIGHT_YEAR: u16 = 2023;

/// Secondary page reachable from the simple header/footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const INFO_PAGES: [InfoPage; 6] = [
    InfoPage {
        slug: "pricing",
        title: "nav-pricing",
        body: "page-pricing-body",
    },
    InfoPage {
        slug: "about",
        title: "nav-about",
        body: "footer-about-body",
    },
    InfoPage {
        slug: "contact",
        title: "nav-contact",
        body: "page-contact-body",
    },
    InfoPage {
        slug: "terms",
        title: "legal-terms",
        body: "page-terms-body",
    },
    InfoPage {
        slug: "privacy",
        title: "legal-privacy",
        body: "page-privacy-body",
    },
    InfoPage {
        slug: "cookies",
        title: "legal-cookies",
        body: "page-cookies-body",
    },
];

pub fn find_info_page(slug: &str) -> Option<&'static InfoPage> {
    INFO_PAGES.iter().find(|page| page.slug == slug)
}

/// Every message id referenced from the tables above.
pub fn message_ids() -> Vec<&'static str> {
    let mut ids = Vec::new();
    for feature in &FEATURES {
        ids.extend([feature.title, feature.description, feature.stat]);
    }
    ids.extend(NAV_LINKS.iter().map(|link| link.label));
    ids.extend(LEGAL_LINKS.iter().map(|link| link.label));
    ids.extend(SIMPLE_FOOTER_LINKS.iter().map(|link| link.label));
    ids.extend(PROMO_POINTS);
    for phase in &STRATEGY_PHASES {
        ids.push(phase.title);
        ids.extend(phase.steps.iter().copied());
    }
    for page in &INFO_PAGES {
        ids.extend([page.title, page.body]);
    }
    ids
}
