//! Static page content — the records rendered verbatim by the page.
//!
//! Everything here is defined at build time and never mutated.  Order in each
//! slice is the order on screen.

// ───────────────────────────────────────── records ───────────

/// A titled group of related skills, rendered as a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub description: &'static str,
}

/// A portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tech_stack: &'static str,
    pub bullet_points: &'static [&'static str],
}

/// One entry on the experience & education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role_title: &'static str,
    pub organization: &'static str,
    /// Free-form period (or grade, for education).
    pub date_range: &'static str,
    /// Optional blurb shown under the date; empty when there is none.
    pub description: &'static str,
}

/// Who the page is about, plus the external resources it links to.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub about: &'static [&'static str],
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    /// Resume file name, resolved against the assets directory.
    pub resume_file: &'static str,
    /// Portrait file name, resolved against the assets directory.
    pub portrait_file: &'static str,
    pub portrait_alt: &'static str,
}

/// The outbound affordances offered by the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    Resume,
    GitHub,
    LinkedIn,
}

impl LinkTarget {
    /// Display order of the hero buttons.
    pub const ALL: &[LinkTarget] = &[LinkTarget::Resume, LinkTarget::GitHub, LinkTarget::LinkedIn];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            LinkTarget::Resume => "Download Resume",
            LinkTarget::GitHub => "GitHub",
            LinkTarget::LinkedIn => "LinkedIn",
        }
    }
}

// ───────────────────────────────────────── data ──────────────

pub static PROFILE: Profile = Profile {
    name: "Saaqib A",
    headline: "Aspiring Software Engineer",
    intro: "I build scalable web applications and AI-driven solutions with a \
            strong foundation in SDLC, distributed systems, and modern \
            software engineering practices.",
    about: &[
        "I am an aspiring Associate Software Engineer with strong exposure \
         to SDLC, distributed systems, and scalable web applications.",
        "With hands-on experience in web development, AI-based projects, \
         and mentoring roles, I focus on continuous learning and building \
         production-ready solutions.",
    ],
    github_url: "https://github.com/devsaaqib",
    linkedin_url: "https://www.linkedin.com/in/saaqib-veltech/",
    resume_file: "Saaqib_Resume.pdf",
    portrait_file: "profile.jpg",
    portrait_alt: "Saaqib A",
};

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup { title: "Programming", description: "Python, Java, C" },
    SkillGroup { title: "Web Technologies", description: "HTML, CSS, JavaScript" },
    SkillGroup { title: "AI & ML", description: "TensorFlow, Scikit-learn, Pandas" },
    SkillGroup { title: "Tools & IDEs", description: "Git, GitHub, VS Code, Eclipse" },
    SkillGroup { title: "Soft Skills", description: "Leadership, Mentoring, Communication" },
    SkillGroup { title: "Other Skills", description: "Agile, SDLC, Cybersecurity Awareness" },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "MindWellCare",
        tech_stack: "Python, HTML, CSS, JavaScript",
        bullet_points: &[
            "Scalable mental healthcare platform",
            "Secure, data-driven workflows",
            "Research-based development",
        ],
    },
    Project {
        title: "MedAdh",
        tech_stack: "Python, LSTM, Machine Learning",
        bullet_points: &[
            "AI-based medical adherence system",
            "Optimized accuracy & efficiency",
            "Deep learning prediction model",
        ],
    },
    Project {
        title: "CommuneVerse",
        tech_stack: "Python, Node.js, Web",
        bullet_points: &[
            "AI-powered social bot",
            "Node.js interactive UI",
            "Professional networking logic",
        ],
    },
];

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role_title: "Web Development Tutor",
        organization: "Go Girl Organisation",
        date_range: "Apr 2025 – Present",
        description: "",
    },
    ExperienceEntry {
        role_title: "Frontend Developer Trainee",
        organization: "Eagle Tech IT Solutions",
        date_range: "May 2024 – Jun 2024",
        description: "",
    },
    ExperienceEntry {
        role_title: "Python Instructor",
        organization: "Cybeorg Education Technology",
        date_range: "Sep 2024 – Present",
        description: "",
    },
    ExperienceEntry {
        role_title: "B.Tech Computer Science",
        organization: "Vel Tech University",
        date_range: "GPA: 8.5",
        description: "",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_lists_are_complete() {
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(EXPERIENCE.len(), 4);
        assert!(PROJECTS.iter().all(|p| p.bullet_points.len() == 3));
    }

    #[test]
    fn skill_titles_are_unique() {
        for (i, a) in SKILLS.iter().enumerate() {
            for b in &SKILLS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
