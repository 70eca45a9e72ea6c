use tricity::Signal;
use tricity::config::SiteConfig;
use tricity::navigation::{LinkTone, MenuState, current_section};
use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::dom;

pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";
pub const MENU_ID: &str = "mobileMenu";
pub const MENU_ICON_ID: &str = "menuIcon";
pub const CLOSE_ICON_ID: &str = "closeIcon";

const SCROLL_TARGET_ATTR: &str = "data-scroll";
const SCROLL_LINK_SELECTOR: &str = "[data-scroll]";
const SECTION_SELECTOR: &str = "section[id]";
const NAV_LINK_SELECTOR: &str = ".nav-link[data-scroll], .nav-link-mobile[data-scroll]";

/// Mobile menu and active-link state bound to the page.
#[derive(Debug, Clone)]
pub struct NavigationController {
    menu: Signal<MenuState>,
    current_section: Signal<Option<String>>,
}

impl NavigationController {
    pub fn menu(&self) -> &Signal<MenuState> {
        &self.menu
    }

    pub fn current_section(&self) -> &Signal<Option<String>> {
        &self.current_section
    }

    /// Bind every navigation listener on `document`.
    pub fn attach(window: &Window, document: &Document, config: &SiteConfig) -> Result<Self, JsValue> {
        let controller = Self {
            menu: Self::bind_menu(document)?,
            current_section: Signal::new(None),
        };

        controller.bind_scroll_links(document)?;
        controller.bind_active_section(window, document, config.scroll_lookahead_px)?;

        Ok(controller)
    }

    fn bind_menu(document: &Document) -> Result<Signal<MenuState>, JsValue> {
        let menu_element = document.get_element_by_id(MENU_ID);
        let menu_icon = document.get_element_by_id(MENU_ICON_ID);
        let close_icon = document.get_element_by_id(CLOSE_ICON_ID);

        let initial = match &menu_element {
            Some(menu) if !dom::is_hidden(menu) => MenuState::Open,
            _ => MenuState::Closed,
        };
        let menu = Signal::new(initial);

        menu.subscribe(move |state| {
            if let Some(element) = &menu_element {
                dom::set_hidden(element, state.menu_hidden());
            }
            if let Some(icon) = &menu_icon {
                dom::set_hidden(icon, state.menu_icon_hidden());
            }
            if let Some(icon) = &close_icon {
                dom::set_hidden(icon, state.close_icon_hidden());
            }
        });

        if let Some(button) = document.get_element_by_id(MENU_BUTTON_ID) {
            let menu = menu.clone();
            dom::listen(&button, "click", move |_event| {
                menu.update(|state| state.toggled());
            })?;
        }

        Ok(menu)
    }

    fn bind_scroll_links(&self, document: &Document) -> Result<(), JsValue> {
        for link in dom::query_all::<Element>(document, SCROLL_LINK_SELECTOR)? {
            let menu = self.menu.clone();
            let document = document.clone();
            let target_id = link.get_attribute(SCROLL_TARGET_ATTR).unwrap_or_default();

            dom::listen(&link, "click", move |event| {
                event.prevent_default();

                let Some(target) = document.get_element_by_id(&target_id) else {
                    return;
                };

                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);

                if menu.get().is_open() {
                    menu.set(MenuState::Closed);
                }
            })?;
        }

        Ok(())
    }

    fn bind_active_section(
        &self,
        window: &Window,
        document: &Document,
        lookahead: f64,
    ) -> Result<(), JsValue> {
        let sections = dom::query_all::<HtmlElement>(document, SECTION_SELECTOR)?;
        let links = dom::query_all::<HtmlElement>(document, NAV_LINK_SELECTOR)?;

        let targets: Vec<(HtmlElement, String)> = links
            .into_iter()
            .map(|link| {
                let target = link.get_attribute(SCROLL_TARGET_ATTR).unwrap_or_default();
                (link, target)
            })
            .collect();

        self.current_section
            .set_if_changed(section_in_view(window, &sections, lookahead));

        self.current_section.subscribe(move |current| {
            for (link, target) in &targets {
                let tone = LinkTone::for_link(target, current.as_deref());
                let _ = link.style().set_property("color", tone.color());
            }
        });

        let current = self.current_section.clone();
        let scroll_window = window.clone();
        dom::listen(window, "scroll", move |_event| {
            current.set_if_changed(section_in_view(&scroll_window, &sections, lookahead));
        })?;

        Ok(())
    }
}

fn section_in_view(window: &Window, sections: &[HtmlElement], lookahead: f64) -> Option<String> {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let offsets: Vec<(String, f64)> = sections
        .iter()
        .map(|section| (section.id(), f64::from(section.offset_top())))
        .collect();

    current_section(
        offsets.iter().map(|(id, top)| (id.as_str(), *top)),
        scroll_y,
        lookahead,
    )
}

/// Wire up the mobile menu, smooth scrolling and active-link highlighting.
pub fn init_navigation(config: &SiteConfig) -> Result<NavigationController, JsValue> {
    let window = dom::window()?;
    let document = window.document().ok_or("No document object")?;

    NavigationController::attach(&window, &document, config)
}
