//! Static copy for the site. Ids are unique within each table; they double
//! as route parameters and list keys.

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub year: u16,
    pub summary: &'static str,
    pub description: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub services: &'static [&'static str],
    pub results: &'static [(&'static str, &'static str)],
    pub accent: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub deliverables: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ProcessStep {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub id: &'static str,
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// A home page section reachable from the navigation.
#[derive(Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const STUDIO_NAME: &str = "Halcyon";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "services", label: "Services" },
    NavItem { id: "process", label: "Process" },
    NavItem { id: "work", label: "Work" },
    NavItem { id: "testimonials", label: "Clients" },
    NavItem { id: "contact", label: "Contact" },
];

pub const STATS: &[Stat] = &[
    Stat { id: "projects", value: 50, suffix: "+", label: "Projects shipped" },
    Stat { id: "years", value: 12, suffix: "", label: "Years in practice" },
    Stat { id: "retention", value: 98, suffix: "%", label: "Clients who return" },
    Stat { id: "awards", value: 24, suffix: "", label: "Industry awards" },
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "brand",
        title: "Brand Identity",
        tagline: "Names, marks and systems people remember.",
        description: "We shape how a company looks, sounds and behaves, from the first workshop to a living guideline your team can actually use.",
        deliverables: &["Brand strategy", "Naming", "Logo & visual system", "Tone of voice", "Guidelines"],
    },
    Service {
        id: "digital",
        title: "Digital Products",
        tagline: "Interfaces that feel inevitable.",
        description: "Research-led product design and front-end engineering for web and mobile, shipped in small increments and measured against real use.",
        deliverables: &["UX research", "Product design", "Design systems", "Web development", "Prototyping"],
    },
    Service {
        id: "motion",
        title: "Motion & 3D",
        tagline: "Movement with intent.",
        description: "Animation that explains, guides and delights, from interface micro-interactions to launch films and real-time 3D.",
        deliverables: &["Motion design", "3D & CGI", "Launch films", "Interaction design"],
    },
    Service {
        id: "campaigns",
        title: "Campaigns",
        tagline: "Ideas that travel.",
        description: "Integrated campaigns built around one clear idea and carried across every channel where your audience already spends time.",
        deliverables: &["Creative direction", "Content production", "Social", "Out of home"],
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: "discover",
        number: "01",
        title: "Discover",
        description: "Workshops, interviews and audits to understand the business, the audience and what success looks like.",
    },
    ProcessStep {
        id: "define",
        number: "02",
        title: "Define",
        description: "A sharp brief, a clear strategy and a plan everyone signs off before a single pixel is pushed.",
    },
    ProcessStep {
        id: "design",
        number: "03",
        title: "Design",
        description: "Concepts explored wide, then narrowed and refined with you in short, visible iterations.",
    },
    ProcessStep {
        id: "deliver",
        number: "04",
        title: "Deliver",
        description: "Production, launch and hand-over, with the tools and documentation your team needs to keep going.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "aurora-bank",
        title: "Aurora Bank",
        client: "Aurora Financial",
        category: "Brand Identity",
        year: 2024,
        summary: "A calmer identity for a bank that wanted to stop shouting.",
        description: &[
            "Aurora came to us after a merger left them with two logos, three colour palettes and no shared voice.",
            "We rebuilt the identity around a single luminous gradient and a typographic system that scales from app icons to branch signage.",
        ],
        tags: &["Branding", "Guidelines", "Signage"],
        services: &["Brand strategy", "Visual identity", "Tone of voice"],
        results: &[("+38%", "brand recall"), ("3 months", "to full rollout")],
        accent: "#7c5cff",
    },
    Project {
        id: "tidal-app",
        title: "Tidal Routines",
        client: "Tidal Health",
        category: "Digital Product",
        year: 2024,
        summary: "A habit tracker that feels like a conversation, not a checklist.",
        description: &[
            "Tidal wanted their wellbeing app to keep people coming back without guilt-driven notifications.",
            "We designed a gentle, motion-rich interface where progress is shown as a tide rising over the week.",
        ],
        tags: &["Product design", "iOS", "Android"],
        services: &["UX research", "Product design", "Motion"],
        results: &[("4.8", "App Store rating"), ("2x", "30-day retention")],
        accent: "#00c2a8",
    },
    Project {
        id: "north-coffee",
        title: "North Coffee",
        client: "North Roasters",
        category: "Packaging",
        year: 2023,
        summary: "Packaging that turns every bag into a map of where the beans came from.",
        description: &[
            "North sources from small farms and wanted each origin to feel distinct on the shelf.",
            "Each bag carries a contour illustration of its farm, printed with a single spot colour per region.",
        ],
        tags: &["Packaging", "Illustration"],
        services: &["Packaging design", "Illustration", "Print production"],
        results: &[("12", "origins launched"), ("+54%", "wholesale orders")],
        accent: "#e0a458",
    },
    Project {
        id: "atlas-launch",
        title: "Atlas Launch Film",
        client: "Atlas Robotics",
        category: "Motion & 3D",
        year: 2023,
        summary: "A ninety-second film introducing a warehouse robot to the world.",
        description: &[
            "Atlas needed to explain a complex product to buyers who had never seen it move.",
            "We built a real-time 3D pipeline so the film and the sales configurator share the same assets.",
        ],
        tags: &["3D", "Film", "Launch"],
        services: &["Creative direction", "3D & CGI", "Sound design"],
        results: &[("1.2M", "views in a week"), ("40%", "shorter sales cycle")],
        accent: "#ff6b4a",
    },
    Project {
        id: "verde-market",
        title: "Verde Market",
        client: "Verde Grocers",
        category: "E-commerce",
        year: 2022,
        summary: "A grocery storefront that puts the season first.",
        description: &[
            "Verde's old shop listed thousands of products with no sense of what was good this week.",
            "The new storefront leads with seasonal produce, recipes and the growers behind them.",
        ],
        tags: &["E-commerce", "Web", "Content"],
        services: &["Product design", "Web development", "Content strategy"],
        results: &[("+27%", "average basket"), ("-45%", "bounce rate")],
        accent: "#3fa34d",
    },
    Project {
        id: "echo-festival",
        title: "Echo Festival",
        client: "Echo Live",
        category: "Campaign",
        year: 2022,
        summary: "A festival identity that reacts to sound.",
        description: &[
            "Echo wanted a campaign that felt as loud as the lineup.",
            "Every poster, post and screen uses a generative system driven by the headliners' own tracks.",
        ],
        tags: &["Campaign", "Generative", "Social"],
        services: &["Campaign", "Generative design", "Social"],
        results: &[("Sold out", "in 9 days"), ("6M", "social impressions")],
        accent: "#ff3d7f",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "maya",
        quote: "They listened more than any agency we've worked with, and it shows in every detail of the final work.",
        author: "Maya Lindqvist",
        role: "CMO",
        company: "Aurora Financial",
    },
    Testimonial {
        id: "daniel",
        quote: "Our retention doubled after the redesign. The team treated our product like it was their own.",
        author: "Daniel Okafor",
        role: "Head of Product",
        company: "Tidal Health",
    },
    Testimonial {
        id: "sofia",
        quote: "The launch film did more for our pipeline than a year of trade shows.",
        author: "Sofia Marin",
        role: "VP Marketing",
        company: "Atlas Robotics",
    },
    Testimonial {
        id: "tom",
        quote: "Fast, honest and genuinely creative. We've already booked the next project.",
        author: "Tom Becker",
        role: "Founder",
        company: "North Roasters",
    },
];

pub const CLIENTS: &[&str] = &[
    "Aurora Financial",
    "Tidal Health",
    "North Roasters",
    "Atlas Robotics",
    "Verde Grocers",
    "Echo Live",
    "Lumen Labs",
    "Harbor & Co",
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Previous and next projects around `id`, wrapping at both ends.
pub fn neighbours(id: &str) -> Option<(&'static Project, &'static Project)> {
    let index = PROJECTS.iter().position(|project| project.id == id)?;
    let count = PROJECTS.len();
    let previous = &PROJECTS[(index + count - 1) % count];
    let next = &PROJECTS[(index + 1) % count];
    Some((previous, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {}", id);
        }
    }

    #[test]
    fn ids_are_unique_per_collection() {
        assert_unique(PROJECTS.iter().map(|p| p.id));
        assert_unique(SERVICES.iter().map(|s| s.id));
        assert_unique(TESTIMONIALS.iter().map(|t| t.id));
        assert_unique(PROCESS_STEPS.iter().map(|s| s.id));
        assert_unique(NAV_ITEMS.iter().map(|n| n.id));
        assert_unique(STATS.iter().map(|s| s.id));
    }

    #[test]
    fn every_project_is_found_by_id() {
        for project in PROJECTS {
            let found = find_project(project.id).map(|p| p.title);
            assert_eq!(found, Some(project.title));
        }
    }

    #[test]
    fn unknown_project_is_not_found() {
        assert!(find_project("does-not-exist").is_none());
        assert!(find_project("").is_none());
        assert!(find_project("AURORA-BANK").is_none());
    }

    #[test]
    fn neighbours_wrap_around() {
        let first = PROJECTS[0].id;
        let last = PROJECTS[PROJECTS.len() - 1].id;

        let (previous, next) = neighbours(first).expect("first project exists");
        assert_eq!(previous.id, last);
        assert_eq!(next.id, PROJECTS[1].id);

        let (_, next) = neighbours(last).expect("last project exists");
        assert_eq!(next.id, first);

        assert!(neighbours("nope").is_none());
    }

    #[test]
    fn stats_include_the_projects_counter() {
        let projects = STATS.iter().find(|s| s.id == "projects").expect("projects stat");
        assert_eq!((projects.value, projects.suffix), (50, "+"));
    }
}
