//! Static portfolio content.
//!
//! Everything the page displays that is not animation state lives here as
//! plain constants: copy, project cards, skills, links. Element id
//! prefixes for staggered groups are derived from these arrays, so their
//! lengths drive how many targets the section timelines declare.

/// One entry in the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tech: [&'static str; 4],
}

/// One skill card in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

/// An outbound social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// A navigation entry pointing at a section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const SITE_NAME: &str = "Hammami Mohamed Moetez";
pub const SITE_LOGO: &str = "HMM";

pub const HERO_TITLE: &str = "Hi, I'm Hammami Mohamed Moetez";
pub const HERO_ROLE: &str = "Web Developer";
pub const HERO_SUBTITLE: &str = "Crafting digital experiences that inspire and engage \
                                 through innovative design and cutting-edge technology.";
pub const HERO_CTA_PRIMARY: &str = "View My Work";
pub const HERO_CTA_SECONDARY: &str = "Hire Me";

pub const LOADING_TITLE: &str = "Hammami Mohamed Moetez";
pub const LOADING_SUBTITLE: &str = "Web Developer & Digital Creator";
pub const LOADING_CAPTION: &str = "Loading Experience...";

pub const ABOUT_HEADING: &str = "About Me";
pub const SKILLS_HEADING: &str = "Skills & Expertise";
pub const PROJECTS_HEADING: &str = "Featured Projects";
pub const CONTACT_HEADING: &str = "Get In Touch";
pub const FOOTER_COPYRIGHT: &str = "© 2024 Hammami Mohamed Moetez. All rights reserved.";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", anchor: "hero" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub const SKILLS: [Skill; 6] = [
    Skill { name: "Frontend", icon: "code" },
    Skill { name: "UI/UX", icon: "palette" },
    Skill { name: "React", icon: "globe" },
    Skill { name: "Performance", icon: "lightning" },
    Skill { name: "Backend", icon: "database" },
    Skill { name: "Mobile", icon: "device-mobile" },
];

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "3D Interactive Web Experience",
        summary: "Immersive 3D web application with holographic elements and smooth animations.",
        tech: ["React", "Three.js", "GSAP", "WebGL"],
    },
    Project {
        title: "Modern E-Commerce Platform",
        summary: "Sleek e-commerce solution with advanced filtering and mobile-first design.",
        tech: ["Next.js", "TypeScript", "Stripe", "Tailwind"],
    },
    Project {
        title: "Analytics Dashboard",
        summary: "Real-time analytics dashboard with interactive charts and data visualizations.",
        tech: ["React", "D3.js", "Node.js", "Socket.io"],
    },
    Project {
        title: "Social Media App",
        summary: "Modern social platform with real-time messaging and post sharing.",
        tech: ["React Native", "Firebase", "Redux", "TypeScript"],
    },
    Project {
        title: "Creative Portfolio Template",
        summary: "Portfolio template with creative layouts and a strong typography focus.",
        tech: ["Vue.js", "Nuxt", "SCSS", "Framer Motion"],
    },
    Project {
        title: "Real Estate Platform",
        summary: "Property listings with map integration and advanced search filters.",
        tech: ["React", "Node.js", "PostgreSQL", "Mapbox"],
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "GitHub", href: "https://github.com" },
    SocialLink { name: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { name: "Email", href: "mailto:contact@example.com" },
];
