//! Static site content. Everything in this module is literal data fixed
//! at build time; nothing here is mutated at runtime.

/// A single portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "A personal portfolio built with React, Vite, and Tailwind CSS.",
        image: "/images/projects/portfolio.webp",
        tags: &["React", "Frontend"],
        link: None,
    },
    Project {
        title: "Admin Dashboard",
        description: "CRUD-based admin panel using React, Express, MongoDB, and JWT.",
        image: "/images/projects/admin-dashboard.webp",
        tags: &["React", "Full Stack", "MongoDB"],
        link: None,
    },
    Project {
        title: "Photo Booth App",
        description: "A web-based photo booth with camera capture and image filters.",
        image: "/images/projects/photo-booth.webp",
        tags: &["React", "Frontend"],
        link: None,
    },
    Project {
        title: "Event Registration System",
        description: "Online registration system with form validation and database storage.",
        image: "/images/projects/event-registration.webp",
        tags: &["React", "Full Stack"],
        link: None,
    },
    Project {
        title: "Blog CMS",
        description: "Content management system with Cloudinary image uploads.",
        image: "/images/projects/blog-cms.webp",
        tags: &["React", "Full Stack", "MongoDB"],
        link: None,
    },
    Project {
        title: "POS System",
        description: "Coffee shop POS system with cart, receipt, and transaction history.",
        image: "/images/projects/pos-system.webp",
        tags: &["React", "Frontend"],
        link: None,
    },
];

/// Fixed platform → URI mapping for the social icon links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLinks {
    pub github: &'static str,
    pub email: &'static str,
    pub discord: &'static str,
}

pub const SOCIALS: SocialLinks = SocialLinks {
    github: "https://github.com/Timqtzy",
    email: "mailto:timothytenido@gmail.com",
    discord: "https://discord.com/users/844586000163536906",
};

pub const TECHNOLOGIES: &[&str] = &[
    "React (Vite)",
    "Tailwind CSS",
    "JavaScript (ES6+)",
    "TypeScript",
    "MongoDB",
    "n8n Automation",
    "Supabase",
    "Node.js",
    "RESTful APIs",
    "Git & GitHub",
];

/// An entry in the experience list of the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub context: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Frontend Developer",
        context: "Academic & Personal Projects",
        summary: "Developed responsive and interactive web applications using React, Vite, \
                  and Tailwind CSS. Built reusable components, implemented dynamic data \
                  rendering, and focused on clean UI, accessibility, and performance across \
                  devices.",
    },
    Experience {
        role: "Full-Stack & Admin Dashboard Projects",
        context: "React • Express • MongoDB • Cloudinary",
        summary: "Built admin dashboards with full CRUD functionality, authentication, and \
                  image uploads. Integrated REST APIs and managed media storage using \
                  Cloudinary.",
    },
    Experience {
        role: "Automation & Workflow Optimization",
        context: "n8n • API Integrations",
        summary: "Designed automation workflows using n8n to connect APIs, process data, and \
                  eliminate repetitive manual tasks with a focus on reliability and \
                  maintainability.",
    },
];

pub const PORTRAIT: &str = "/images/portrait.webp";
pub const RESUME_PATH: &str = "/resume.pdf";

/// The filter option that shows every project.
pub const ALL_TAG: &str = "All";

/// Filter options for the gallery: `"All"` first, then every project tag
/// in first-seen order, deduplicated.
pub fn project_tags() -> Vec<&'static str> {
    let mut tags = vec![ALL_TAG];
    for project in PROJECTS {
        for &tag in project.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Projects visible under `tag`, in their original order. `"All"` keeps
/// the full list; any other tag keeps exactly the projects carrying it.
pub fn filter_projects(tag: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|project| tag == ALL_TAG || project.tags.contains(&tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_set_starts_with_all_and_dedups_in_first_seen_order() {
        assert_eq!(
            project_tags(),
            vec!["All", "React", "Frontend", "Full Stack", "MongoDB"]
        );
    }

    #[test]
    fn all_filter_returns_every_project_unchanged() {
        let filtered = filter_projects(ALL_TAG);
        assert_eq!(filtered.len(), PROJECTS.len());
        for (kept, original) in filtered.iter().zip(PROJECTS) {
            assert_eq!(kept.title, original.title);
        }
    }

    #[test]
    fn tag_filter_returns_exactly_the_tagged_subset_in_order() {
        for tag in project_tags().into_iter().skip(1) {
            let filtered = filter_projects(tag);
            assert!(!filtered.is_empty(), "tag {tag} should match something");
            assert!(filtered.iter().all(|p| p.tags.contains(&tag)));

            let expected: Vec<&str> = PROJECTS
                .iter()
                .filter(|p| p.tags.contains(&tag))
                .map(|p| p.title)
                .collect();
            let actual: Vec<&str> = filtered.iter().map(|p| p.title).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn active_filter_is_always_a_member_of_the_tag_set() {
        let tags = project_tags();
        for project in PROJECTS {
            for tag in project.tags {
                assert!(tags.contains(tag));
            }
        }
    }
}
