/// One anchor-addressable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }

    /// In-page link target, e.g. `#about`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const HOME: Section = Section::new("home", "Home");
pub const ABOUT: Section = Section::new("about", "About");
pub const SKILLS: Section = Section::new("skills", "Skills");
pub const PROJECTS: Section = Section::new("projects", "Projects");
pub const EXPERIENCE: Section = Section::new("experience", "Experience");
pub const CONTACT: Section = Section::new("contact", "Contact");

/// Navigable sections in document order.
pub const SECTIONS: [Section; 6] = [HOME, ABOUT, SKILLS, PROJECTS, EXPERIENCE, CONTACT];

pub fn find_section(id: &str) -> Option<Section> {
    let id = id.strip_prefix('#').unwrap_or(id);
    SECTIONS.iter().copied().find(|s| s.id == id)
}
