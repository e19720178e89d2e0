//! Static copy and records rendered by the page views.
//!
//! Everything here is a compile-time constant; nothing is created or
//! destroyed at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub greeting: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub photo_url: &'static str,
    pub about: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub demo: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    pub duration: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    /// Font Awesome class list
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Instagram,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub kind: ContactKind,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub const PROFILE: Profile = Profile {
    name: "Boppanapally Shekhar",
    first_name: "Shekhar",
    greeting: "Hi there, I'm",
    role: "Software Engineer at Honeywell",
    summary: "Full Stack Developer with expertise in building scalable applications using \
              React.js, Java, Spring Boot, and NestJS. Passionate about creating innovative \
              solutions and delivering high-quality software products.",
    photo_url: "https://media.licdn.com/dms/image/v2/C5603AQHTiWwEAZmo-Q/profile-displayphoto-shrink_800_800/profile-displayphoto-shrink_800_800/0/1657694491150?e=1752105600&v=beta&t=tGcwZ195J1hLE8kkAMz9rvkcXWMMIHysQOWWyCWcVcs",
    about: &[
        "I'm a detail-oriented Full Stack Developer with over 2 years of experience building \
         scalable applications using Python, React.js, Java, Spring Boot, and NestJS.",
        "Currently at Honeywell, I work on the NGOSS initiative in the aerospace sector, \
         enhancing in-flight digital experiences. I'm proficient in Python and Java, with a \
         strong foundation in Data Structures, Algorithms, and OOP principles.",
        "I have a 5-star rating in Problem Solving on HackerRank and recognition in the \
         Ideation Competition hosted by BME, BVRIT.",
    ],
};

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

macro_rules! skill {
    ($name:literal, $path:literal) => {
        Skill {
            name: $name,
            icon: concat!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/", $path),
        }
    };
}

pub const SKILLS: &[Skill] = &[
    skill!("JavaScript", "javascript/javascript-original.svg"),
    skill!("React.js", "react/react-original.svg"),
    skill!("Java", "java/java-original.svg"),
    skill!("Spring Boot", "spring/spring-original.svg"),
    skill!("NestJS", "nestjs/nestjs-plain.svg"),
    skill!("Python", "python/python-original.svg"),
    skill!("TypeScript", "typescript/typescript-original.svg"),
    skill!("Node.js", "nodejs/nodejs-original.svg"),
    skill!("HTML5", "html5/html5-original.svg"),
    skill!("CSS3", "css3/css3-original.svg"),
    skill!("MongoDB", "mongodb/mongodb-original.svg"),
    skill!("PostgreSQL", "postgresql/postgresql-original.svg"),
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Honeywell Internationals",
        position: "Software Engineer",
        duration: "June 2023 - Present",
        responsibilities: &[
            "Contributing to the NGOSS project in the aerospace sector, focused on delivering \
             seamless in-flight internet services to enhance customer experience.",
            "Developing and maintaining full-stack applications using React.js, Spring Boot, and \
             NestJS for both front-end and back-end functionalities.",
            "Executing functional and performance testing while designing automation test scripts \
             to ensure system reliability and efficiency.",
            "Writing and optimizing high-performance scripts to enhance application responsiveness \
             and streamline automated test execution.",
            "Managing production support by monitoring live systems, resolving critical issues, \
             and ensuring continuous service availability.",
            "Collaborating with cross-functional teams, including developers, testers, and product \
             owners, to align on project goals, resolve technical challenges, and deliver \
             high-quality software solutions.",
        ],
    },
    Experience {
        company: "ThoughtClan Technologies",
        position: "Software Engineer Intern",
        duration: "Nov 2022 - June 2023",
        responsibilities: &[
            "Completed training on Java, Spring Boot, and ReactJS, focusing on building and \
             integrating scalable full stack web applications.",
            "Developed front-end and back-end components of projects, ensuring seamless \
             functionality, code efficiency, and alignment with best practices.",
            "Collaborated with cross-functional teams and leveraged online resources to enhance \
             technical knowledge, complete assigned tasks, participate in code reviews, and deepen \
             understanding of the SDLC.",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Kisaan Help Desk",
        description: "A machine learning-based web application designed to assist farmers by \
                      providing comprehensive information on soil testing centers across India. \
                      The platform recommends the most suitable crops to cultivate, suggests \
                      appropriate fertilizers, and identifies potential diseases affecting crops \
                      to support informed agricultural decisions.",
        image: "https://user-images.githubusercontent.com/71584572/125457055-cb49cb8c-6795-4e25-b835-de878a950257.png",
        tech: &["Machine Learning", "Web Development", "Python", "Data Analysis"],
        demo: "#",
        code: "#",
    },
    Project {
        title: "3D Portfolio Website",
        description: "A modern portfolio website built with Rust, Leptos, and WebAssembly \
                      featuring an animated starfield and smooth transitions to showcase \
                      professional skills and projects in an engaging way.",
        image: "https://via.placeholder.com/600x400/1e293b/ffffff?text=3D+Portfolio",
        tech: &["Rust", "Leptos", "WebAssembly", "Canvas"],
        demo: "#",
        code: "#",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/shekharboppanapally/",
        icon: "fab fa-github",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/shekhar-boppanapally-647a281bb/",
        icon: "fab fa-linkedin",
    },
    SocialLink {
        label: "LeetCode",
        url: "https://leetcode.com/u/shekharboppanapally944/",
        icon: "fas fa-code",
    },
    SocialLink {
        label: "HackerRank",
        url: "https://www.hackerrank.com/profile/shekharboppanap1",
        icon: "fab fa-hackerrank",
    },
    SocialLink {
        label: "CodeChef",
        url: "https://www.codechef.com/users/shekharb_12",
        icon: "fas fa-code",
    },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        kind: ContactKind::Email,
        text: "shekhar.boppanapally@gmail.com",
        href: Some("mailto:shekhar.boppanapally@gmail.com"),
    },
    ContactDetail {
        kind: ContactKind::Instagram,
        text: "@soulwithhelmet",
        href: Some("https://instagram.com/soulwithhelmet"),
    },
    ContactDetail {
        kind: ContactKind::Phone,
        text: "+91 6309402919",
        href: None,
    },
    ContactDetail {
        kind: ContactKind::Location,
        text: "Hyderabad, India",
        href: None,
    },
];

/// Footer copyright line for the given calendar year.
pub fn copyright(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.name)
}

/// Base URL the skill icons are served from.
pub fn icon_cdn() -> &'static str {
    DEVICON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_icons_point_at_cdn() {
        assert_eq!(SKILLS.len(), 12);
        for skill in SKILLS {
            assert!(skill.icon.starts_with(icon_cdn()), "{}", skill.name);
            assert!(skill.icon.ends_with(".svg"));
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2025),
            "© 2025 Boppanapally Shekhar. All rights reserved."
        );
    }

    #[test]
    fn test_records_are_populated() {
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
        assert!(EXPERIENCES.iter().all(|e| !e.responsibilities.is_empty()));
        assert!(SOCIAL_LINKS.iter().all(|s| s.url.starts_with("https://")));
        assert_eq!(CONTACT_DETAILS[0].kind, ContactKind::Email);
    }
}
