use reqwest::Url;

use crate::content::digits_only;

static QR_CODE_API: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Expertise,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// Document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Expertise,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Expertise => "expertise",
            SectionId::Experience => "work-experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "#home",
            SectionId::Expertise => "#expertise",
            SectionId::Experience => "#work-experience",
            SectionId::Projects => "#projects",
            SectionId::Contact => "#contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub display_name: &'static str,
    pub target_anchor: &'static str,
    pub section_id: SectionId,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        display_name: "Home",
        target_anchor: "#home",
        section_id: SectionId::Home,
    },
    NavLink {
        display_name: "Expertise",
        target_anchor: "#expertise",
        section_id: SectionId::Expertise,
    },
    NavLink {
        display_name: "Experience",
        target_anchor: "#work-experience",
        section_id: SectionId::Experience,
    },
    NavLink {
        display_name: "Projects",
        target_anchor: "#projects",
        section_id: SectionId::Projects,
    },
    NavLink {
        display_name: "Contact",
        target_anchor: "#contact",
        section_id: SectionId::Contact,
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Overlay state owned by the navbar: the small-screen menu and the
/// "Let's Talk" chat dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub chat_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    /// A nav link was chosen. Returns the section to scroll to.
    pub fn select(&mut self, link: &NavLink) -> SectionId {
        self.menu = MenuState::Closed;
        link.section_id
    }

    pub fn open_chat(&mut self) {
        self.menu = MenuState::Closed;
        self.chat_open = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }
}

/// WhatsApp links derived from a human-formatted phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatContact {
    pub number: String,
}

impl ChatContact {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn chat_link(&self) -> String {
        format!("https://wa.me/{}", digits_only(&self.number))
    }

    pub fn qr_code_url(&self) -> Option<String> {
        Url::parse_with_params(
            QR_CODE_API,
            &[("size", "200x200"), ("data", self.chat_link().as_str())],
        )
        .ok()
        .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_follow_document_order() {
        let order = NAV_LINKS.map(|l| l.section_id);
        assert_eq!(order, SectionId::ALL);
        for link in NAV_LINKS {
            assert_eq!(link.section_id.anchor(), link.target_anchor);
            assert_eq!(link.section_id.anchor(), format!("#{}", link.section_id.id()));
        }
    }

    #[test]
    fn test_menu_starts_closed_and_toggles() {
        let mut nav = NavState::default();
        assert_eq!(nav.menu, MenuState::Closed);
        nav.toggle_menu();
        assert!(nav.menu.is_open());
        nav.toggle_menu();
        assert!(!nav.menu.is_open());
    }

    #[test]
    fn test_selecting_link_closes_menu() {
        for link in NAV_LINKS.iter() {
            let mut nav = NavState::default();
            nav.toggle_menu();
            assert_eq!(nav.select(link), link.section_id);
            assert_eq!(nav.menu, MenuState::Closed);
        }

        // already closed stays closed
        let mut nav = NavState::default();
        nav.select(&NAV_LINKS[2]);
        assert_eq!(nav.menu, MenuState::Closed);
    }

    #[test]
    fn test_chat_action_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        nav.open_chat();
        assert_eq!(nav.menu, MenuState::Closed);
        assert!(nav.chat_open);
        nav.close_chat();
        assert!(!nav.chat_open);
    }

    #[test]
    fn test_chat_links() {
        let chat = ChatContact::new("+92-315-4909017");
        assert_eq!(chat.chat_link(), "https://wa.me/923154909017");

        let qr = chat.qr_code_url().expect("qr url should build");
        assert!(qr.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data="));
        assert!(qr.contains("wa.me%2F923154909017"));
    }
}
