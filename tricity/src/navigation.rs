//! Navigation state: the mobile menu and the scroll-tracked active section.

/// Link target highlighted while no section has been reached yet.
pub const HOME_TARGET: &str = "home";

/// Whether the mobile menu is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn menu_hidden(self) -> bool {
        !self.is_open()
    }

    /// The "menu" icon shows while the menu is closed.
    pub fn menu_icon_hidden(self) -> bool {
        self.is_open()
    }

    /// The "close" icon shows while the menu is open.
    pub fn close_icon_hidden(self) -> bool {
        !self.is_open()
    }
}

/// The section currently scrolled to.
///
/// `sections` are `(id, top offset)` pairs in document order. The current
/// section is the last one whose top, pulled up by `lookahead`, is at or
/// above `scroll_y`. Document order decides, not the largest offset.
pub fn current_section<'a, I>(sections: I, scroll_y: f64, lookahead: f64) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - lookahead)
        .last()
        .map(|(id, _)| id.to_owned())
}

/// How a navigation link is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTone {
    /// The link points at the current section.
    Active,
    /// The home link before any section is reached.
    Home,
    Muted,
}

impl LinkTone {
    pub fn for_link(target: &str, current: Option<&str>) -> Self {
        match current {
            Some(current) if current == target => LinkTone::Active,
            None if target == HOME_TARGET => LinkTone::Home,
            _ => LinkTone::Muted,
        }
    }

    /// CSS colour value for the link.
    pub fn color(self) -> &'static str {
        match self {
            LinkTone::Active => "var(--primary)",
            LinkTone::Home => "var(--foreground)",
            LinkTone::Muted => "var(--muted-foreground)",
        }
    }
}
