// Static content registry. Every page maps one of these fixed record sets
// straight to markup; nothing here is created, filtered, or reordered at
// runtime. Array index order is display order.

pub mod articles;

pub use articles::{article_by_slug, PhaseArticle, ARTICLES};

use serde::Serialize;

pub const SITE_TITLE: &str = "My Portfolio";
pub const SITE_DESCRIPTION: &str = "A portfolio to showcase my skills and projects.";
pub const FOOTER_TEXT: &str = "My Portfolio ©2024 Created by Yoojun Kim";

pub const ABOUT_HEADING: &str = "Story of My Life";
pub const PROJECTS_HEADING: &str = "My Projects";
pub const RESUME_HEADING: &str = "Here's my resume:";

/// Fixed path of the embedded resume document, served from the public
/// asset tree.
pub const RESUME_PDF: &str = "/resume/Resume.pdf";

/// A single header navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// The five links the layout shell renders on every page: the brand link
/// first, then the four menu entries.
pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: SITE_TITLE,
        href: "/",
    },
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Projects",
        href: "/projects",
    },
    NavLink {
        label: "About Me",
        href: "/about",
    },
    NavLink {
        label: "My Resume",
        href: "/resume",
    },
];

/// Hero record for the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub greeting: &'static str,
    pub intro: &'static str,
    pub portrait: &'static str,
    pub portrait_alt: &'static str,
}

pub const PROFILE: Profile = Profile {
    greeting: "Hello, I’m Yoojun Kim.",
    intro: "Inspired by the creativity of Disney and Nintendo, I pursued computer science \
            to develop innovative technologies. My focus is on using AI to make creativity \
            more accessible, empowering people to bring their stories and ideas to life.",
    portrait: "/images/logo.png",
    portrait_alt: "Yoojun Kim",
};

/// One card on the about page, linking to its full phase article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub alt: &'static str,
}

pub static PHASES: [PhaseCard; 4] = [
    PhaseCard {
        title: "Phase 1: Elementary Years",
        description: "Setting a goal of being in the US",
        image: "/images/phase1.jpg",
        link: "/about/phase1",
        alt: "Image representing Phase 1: Elementary Years",
    },
    PhaseCard {
        title: "Phase 2: High School Life",
        description: "Finding my dream",
        image: "/images/phase2.jpg",
        link: "/about/phase2",
        alt: "Image representing Phase 2: High School Life",
    },
    PhaseCard {
        title: "Phase 3: University Life",
        description: "How I determined to be a programmer",
        image: "/images/phase3.jpg",
        link: "/about/phase3",
        alt: "Image representing Phase 3: University Life",
    },
    PhaseCard {
        title: "Phase 4: Army Experience",
        description: "Finding my insight more deeply",
        image: "/images/phase4.jpg",
        link: "/about/phase4",
        alt: "Image representing Phase 4: Army Experience",
    },
];

/// One card in the projects gallery. `alt` falls back to `name` at render
/// time when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub github_link: &'static str,
    pub alt: Option<&'static str>,
}

pub static PROJECTS: [ProjectCard; 3] = [
    ProjectCard {
        name: "Tetris",
        description: "A classic Tetris game built with Pygame, featuring block rotation, \
                      line clearing, and increasing difficulty.",
        image: "/images/tetris.jpg",
        github_link: "https://github.com/yjk82693/Pygame/blob/main/Tetris/Tetris.py",
        alt: None,
    },
    ProjectCard {
        name: "Snake Game",
        description: "A modern twist on the classic Snake game, where players navigate a \
                      growing snake to eat food while avoiding collisions.",
        image: "/images/snake.jpg",
        github_link: "https://github.com/yjk82693/Pygame/tree/main/Snake",
        alt: None,
    },
    ProjectCard {
        name: "Orca's Rush",
        description: "A Flappy Bird-inspired game with an Orca navigating underwater \
                      obstacles while collecting points.",
        image: "/images/orca.jpg",
        github_link: "https://github.com/yjk82693/Pygame/tree/main/OrcasRush",
        alt: None,
    },
];
