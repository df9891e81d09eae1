use std::fmt;
use std::str::FromStr;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Services,
    Fleet,
    Pricing,
    Faq,
    Contact,
}

impl Section {
    /// Entries shown in the navigation menu, in display order.
    pub fn menu() -> &'static [Section] {
        &[
            Self::About,
            Self::Fleet,
            Self::Services,
            Self::Pricing,
            Self::Contact,
        ]
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Services => "services",
            Self::Fleet => "fleet",
            Self::Pricing => "pricing",
            Self::Faq => "faq",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "about" => Ok(Self::About),
            "services" => Ok(Self::Services),
            "fleet" => Ok(Self::Fleet),
            "pricing" => Ok(Self::Pricing),
            "faq" => Ok(Self::Faq),
            "contact" => Ok(Self::Contact),
            _ => Err(invalid_input_error()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navbar {
    menu_open: bool,
    scrolled: bool,
}

impl Navbar {
    /// Scroll offset, in pixels, past which the bar switches to its solid style.
    pub const SCROLL_THRESHOLD: f64 = 50.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > Self::SCROLL_THRESHOLD;
    }

    /// Navigating always collapses the mobile menu.
    pub fn scroll_to(&mut self, section: Section) -> Section {
        self.menu_open = false;
        section
    }
}
