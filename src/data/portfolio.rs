//! Fixed portfolio content: biography, projects and contact links.
//!
//! Everything here is compile-time constant. Order is declaration order and
//! is what the pages show.

/// Opaque handle to an image resource
///
/// The data layer never interprets it; frontends resolve it to whatever they
/// can draw (the terminal frontend maps it to a glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle(pub &'static str);

impl ResourceHandle {
    pub const PHOTO: ResourceHandle = ResourceHandle("eu");
    pub const GITHUB: ResourceHandle = ResourceHandle("githubicon");
    pub const EMAIL: ResourceHandle = ResourceHandle("emailicon");
    pub const PHONE: ResourceHandle = ResourceHandle("telefoneicon");
    pub const INSTAGRAM: ResourceHandle = ResourceHandle("instaicon");
    pub const LINKEDIN: ResourceHandle = ResourceHandle("linkedinicon");

    pub fn name(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biography {
    pub name: &'static str,
    pub photo: ResourceHandle,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: ResourceHandle,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub icon: ResourceHandle,
    pub label: &'static str,
    pub url: &'static str,
}

pub const BIOGRAPHY: Biography = Biography {
    name: "Caio Braga",
    photo: ResourceHandle::PHOTO,
    text: "Full Stack Software Engineer with a strong background in designing, developing, and deploying innovative web applications and services. Proficient in utilizing a wide range of technologies to create efficient and scalable solutions. Skilled in both front-end and back-end development, with a keen eye for creating seamless user experiences.\n\
\n\
Technologies:\n\
- .NET Core(C#) | Spring Boot | Java | JavaScript \n\
- Microservices | RESTful APIs\n\
- SQL | PostgreSQL \n\
- Git | Docker \n\
\n\
Passionate about tackling complex challenges and collaborating with cross-functional teams to bring projects from conception to successful implementation. Committed to continuous learning and staying up-to-date with industry trends. Open to new opportunities that allow me to contribute my expertise to impactful projects.",
};

const PROJECT_BLURB: &str = "Clique para saber mais.";

pub const PROJECTS: [Project; 7] = [
    Project {
        title: "Portfolio WEB",
        description: PROJECT_BLURB,
        image: ResourceHandle::GITHUB,
        url: "https://github.com/caiotbraga/Portfolio",
    },
    Project {
        title: "ScheduleAPI",
        description: PROJECT_BLURB,
        image: ResourceHandle::GITHUB,
        url: "https://github.com/caiotbraga/ScheduleAPI",
    },
    Project {
        title: "Schedule",
        description: PROJECT_BLURB,
        image: ResourceHandle::GITHUB,
        url: "https://github.com/caiotbraga/Schedule",
    },
    Project {
        title: "Biografia",
        description: PROJECT_BLURB,
        image: ResourceHandle::GITHUB,
        url: "https://github.com/caiotbraga/Biography",
    },
    Project {
        title: "WEB-System",
        description: PROJECT_BLURB,
        image: ResourceHandle::GITHUB,
        url: "https://github.com/caiotbraga/PROJECT-WebSystem",
    },
    Project {
        title: "Compiler",
        description: PROJECT_BLURB,
        image: ResourceHandle::GITHUB,
        url: "https://github.com/caiotbraga/Compiler",
    },
    Project {
        title: "ChessGame",
        description: PROJECT_BLURB,
        image: ResourceHandle::GITHUB,
        url: "https://github.com/caiotbraga/PROJECT-chess-game",
    },
];

pub const CONTACTS: [ContactEntry; 5] = [
    ContactEntry {
        icon: ResourceHandle::EMAIL,
        label: "E-mail: contatocaiobraga@gmail.com",
        url: "mailto:contatocaiobraga@gmail.com",
    },
    ContactEntry {
        icon: ResourceHandle::PHONE,
        label: "Tel.: +55 81 997002021",
        url: "tel:+5581997002021",
    },
    ContactEntry {
        icon: ResourceHandle::INSTAGRAM,
        label: "Instagram",
        url: "https://www.instagram.com/caiotbraga/",
    },
    ContactEntry {
        icon: ResourceHandle::GITHUB,
        label: "GitHub",
        url: "https://github.com/caiotbraga",
    },
    ContactEntry {
        icon: ResourceHandle::LINKEDIN,
        label: "Linkedin",
        url: "https://www.linkedin.com/in/caiotbraga",
    },
];

/// The content set a router renders from
#[derive(Debug, Clone, Copy)]
pub struct Content {
    pub biography: &'static Biography,
    pub projects: &'static [Project],
    pub contacts: &'static [ContactEntry],
}

impl Content {
    pub const PORTFOLIO: Content = Content {
        biography: &BIOGRAPHY,
        projects: &PROJECTS,
        contacts: &CONTACTS,
    };
}

impl Default for Content {
    fn default() -> Self {
        Self::PORTFOLIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_order() {
        let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Portfolio WEB",
                "ScheduleAPI",
                "Schedule",
                "Biografia",
                "WEB-System",
                "Compiler",
                "ChessGame",
            ]
        );
    }

    #[test]
    fn test_contact_urls() {
        let urls: Vec<&str> = CONTACTS.iter().map(|c| c.url).collect();
        assert_eq!(
            urls,
            vec![
                "mailto:contatocaiobraga@gmail.com",
                "tel:+5581997002021",
                "https://www.instagram.com/caiotbraga/",
                "https://github.com/caiotbraga",
                "https://www.linkedin.com/in/caiotbraga",
            ]
        );
    }

    #[test]
    fn test_biography_lists_technologies() {
        assert_eq!(BIOGRAPHY.name, "Caio Braga");
        assert_eq!(BIOGRAPHY.photo.name(), "eu");
        assert!(BIOGRAPHY.text.contains("\nTechnologies:\n"));
        assert!(BIOGRAPHY.text.lines().any(|l| l == "- Git | Docker "));
    }

    #[test]
    fn test_biography_text_is_verbatim() {
        let technologies: Vec<&str> = BIOGRAPHY
            .text
            .lines()
            .filter(|l| l.starts_with("- "))
            .collect();
        assert_eq!(
            technologies,
            vec![
                "- .NET Core(C#) | Spring Boot | Java | JavaScript ",
                "- Microservices | RESTful APIs",
                "- SQL | PostgreSQL ",
                "- Git | Docker ",
            ]
        );
    }
}
