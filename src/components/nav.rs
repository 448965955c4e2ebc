use yew::prelude::*;

use crate::config;
use crate::i18n::{translate, Locale};
use crate::screen::SizeClass;

pub const CONTACT_HREF: &str = "#contact";

const MENU_ENTRIES: [(&str, &str); 4] = [
    ("menuItems.about", "#about"),
    ("menuItems.prices", "#prices"),
    ("menuItems.portfolio", "#portfolio"),
    ("menuItems.contact", CONTACT_HREF),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl MenuItem {
    pub fn is_contact(&self) -> bool {
        self.href == CONTACT_HREF
    }
}

/// The four menu entries, always in the same order, labelled for `locale`.
pub fn menu_items(locale: Locale) -> Vec<MenuItem> {
    MENU_ENTRIES
        .iter()
        .map(|&(key, href)| MenuItem {
            label: translate(locale, key),
            href,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    ToggleDrawer,
    CloseDrawer,
    ToggleLanguage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub drawer_open: bool,
    pub locale: Locale,
}

impl NavState {
    /// The drawer only exists on compact layouts; growing into the desktop
    /// layout drops it closed.
    pub fn resized(self, size_class: SizeClass) -> Self {
        if size_class.is_compact() {
            self
        } else {
            Self {
                drawer_open: false,
                ..self
            }
        }
    }

    /// Switching language from inside the drawer also flips the drawer,
    /// which on compact layouts is the only place the switch lives.
    pub fn apply(self, size_class: SizeClass, action: NavAction) -> Self {
        match action {
            NavAction::ToggleDrawer => Self {
                drawer_open: !self.drawer_open,
                ..self
            },
            NavAction::CloseDrawer => Self {
                drawer_open: false,
                ..self
            },
            NavAction::ToggleLanguage => {
                let drawer_open = match size_class {
                    SizeClass::Mobile | SizeClass::Tablet => !self.drawer_open,
                    SizeClass::Desktop => self.drawer_open,
                };
                Self {
                    drawer_open,
                    locale: self.locale.toggled(),
                }
            }
        }
    }
}

/// Per size class layout decisions for the bar and drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLayout {
    pub top_px: u32,
    pub boxed: bool,
    pub padding_x_px: u32,
    pub group_gap_px: u32,
    pub logo_max_height_px: u32,
    pub brand_font_px: u32,
    pub link_font_px: u32,
    pub inline_links: bool,
    pub inline_language: bool,
    pub contact_button: bool,
    pub menu_icon: bool,
    pub menu_icon_max_height_px: u32,
    pub drawer_enabled: bool,
    pub drawer_width_px: u32,
    pub drawer_font: &'static str,
}

impl NavLayout {
    pub fn for_size_class(size_class: SizeClass) -> Self {
        match size_class {
            SizeClass::Mobile => Self {
                top_px: 0,
                boxed: false,
                padding_x_px: 8,
                group_gap_px: 16,
                logo_max_height_px: 40,
                brand_font_px: 28,
                link_font_px: 14,
                inline_links: false,
                inline_language: false,
                contact_button: false,
                menu_icon: true,
                menu_icon_max_height_px: 36,
                drawer_enabled: true,
                drawer_width_px: 200,
                drawer_font: "0.9rem",
            },
            SizeClass::Tablet => Self {
                top_px: 0,
                boxed: false,
                padding_x_px: 16,
                group_gap_px: 32,
                logo_max_height_px: 48,
                brand_font_px: 32,
                link_font_px: 16,
                inline_links: false,
                inline_language: false,
                contact_button: true,
                menu_icon: true,
                menu_icon_max_height_px: 40,
                drawer_enabled: true,
                drawer_width_px: 250,
                drawer_font: "1rem",
            },
            SizeClass::Desktop => Self {
                top_px: 16,
                boxed: true,
                padding_x_px: 24,
                group_gap_px: 32,
                logo_max_height_px: 48,
                brand_font_px: 36,
                link_font_px: 18,
                inline_links: true,
                inline_language: true,
                contact_button: true,
                menu_icon: false,
                menu_icon_max_height_px: 44,
                drawer_enabled: false,
                drawer_width_px: 250,
                drawer_font: "1rem",
            },
        }
    }

    fn bar_style(&self) -> String {
        let frame = if self.boxed {
            "margin: 0 16px; max-width: min(1200px, calc(100% - 32px)); border-radius: 8px; \
             border: 1px solid rgba(255, 255, 255, 0.1);"
        } else {
            "margin: 0; max-width: 1200px; border-radius: 0; \
             border-bottom: 1px solid rgba(255, 255, 255, 0.1);"
        };
        format!("{} padding-left: {}px; padding-right: {}px;", frame, self.padding_x_px, self.padding_x_px)
    }
}

/// What the bar shows for one combination of inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub layout: NavLayout,
    pub inline_links: Vec<MenuItem>,
    pub inline_language: Option<&'static str>,
    pub contact_cta: Option<MenuItem>,
    pub menu_icon: bool,
    pub drawer_open: bool,
    pub drawer_language: &'static str,
    pub drawer_items: Vec<MenuItem>,
}

impl NavView {
    pub fn build(size_class: SizeClass, locale: Locale, drawer_open: bool) -> Self {
        let layout = NavLayout::for_size_class(size_class);
        let items = menu_items(locale);
        // The switch always offers the language that is not active.
        let language_label = locale.toggled().short_label();

        let inline_links = if layout.inline_links {
            items.iter().copied().filter(|item| !item.is_contact()).collect()
        } else {
            Vec::new()
        };
        let contact_cta = if layout.contact_button {
            items.iter().copied().find(MenuItem::is_contact)
        } else {
            None
        };

        Self {
            layout,
            inline_links,
            inline_language: layout.inline_language.then_some(language_label),
            contact_cta,
            menu_icon: layout.menu_icon,
            drawer_open: layout.drawer_enabled && drawer_open,
            drawer_language: language_label,
            drawer_items: items,
        }
    }
}

/// A closed drawer is hidden once its slide-out finishes so its controls
/// leave the tab order.
const NAV_STYLES: &str = r#"
    .app-bar {
        position: absolute;
        left: 0;
        right: 0;
        display: grid;
        place-items: center;
        background-color: transparent;
        color: var(--off-white);
        box-shadow: none;
        z-index: 1100;
    }
    .app-bar-box {
        backdrop-filter: blur(10px);
        -webkit-backdrop-filter: blur(10px);
        width: 100%;
        padding-top: 4px;
        padding-bottom: 4px;
        display: flex;
        box-sizing: border-box;
    }
    .app-bar-toolbar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 16px;
        width: 100%;
        min-height: 64px;
    }
    .nav-group {
        display: flex;
        flex-direction: row;
        flex-wrap: nowrap;
        align-items: center;
    }
    .nav-logo {
        height: auto;
        width: auto;
        max-width: 120px;
        user-select: none;
    }
    .nav-brand {
        margin: 0;
        font-weight: bold;
        font-family: AccentFont;
        letter-spacing: 2px;
        line-height: 0.85;
        user-select: none;
    }
    .nav-links {
        width: 280px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-link, .nav-language {
        text-decoration: none;
        text-align: center;
        color: var(--off-white);
        will-change: font-weight, color, text-shadow;
        transition: color 0.3s ease, text-shadow 0.3s ease, font-weight 0.1s ease;
    }
    .nav-language {
        cursor: pointer;
        user-select: none;
        font-weight: 200;
    }
    .nav-link:hover, .nav-language:hover {
        color: var(--primary);
        text-shadow: 0 0 8px var(--primary), 0 0 32px var(--primary), 0 0 48px var(--primary), 0 0 100px var(--primary);
        filter: brightness(2);
        font-weight: bold;
    }
    .accent-button {
        display: inline-block;
        padding: 8px 20px;
        border: 1px solid var(--primary);
        border-radius: 8px;
        color: var(--off-white);
        text-decoration: none;
        white-space: nowrap;
        transition: background-color 0.3s ease, box-shadow 0.3s ease;
    }
    .accent-button:hover {
        background-color: var(--primary);
        box-shadow: 0 0 16px var(--primary);
    }
    .menu-icon {
        height: auto;
        width: auto;
        max-width: 40px;
        cursor: pointer;
        user-select: none;
    }
    .drawer-backdrop {
        position: fixed;
        inset: 0;
        background-color: rgba(0, 0, 0, 0.5);
        opacity: 0;
        pointer-events: none;
        transition: opacity 225ms ease;
        z-index: 1200;
    }
    .drawer-paper {
        position: fixed;
        top: 0;
        right: 0;
        height: 100%;
        overflow-y: auto;
        transform: translateX(100%);
        visibility: hidden;
        transition: transform 225ms cubic-bezier(0, 0, 0.2, 1), visibility 0s linear 225ms;
        backdrop-filter: blur(10px);
        -webkit-backdrop-filter: blur(10px);
        background-color: rgba(0, 0, 0, 0.02);
        color: var(--off-white);
        border: 1px solid rgba(255, 255, 255, 0.1);
        z-index: 1201;
    }
    .drawer.open .drawer-backdrop {
        opacity: 1;
        pointer-events: auto;
    }
    .drawer.open .drawer-paper {
        transform: translateX(0);
        visibility: visible;
        transition: transform 225ms cubic-bezier(0, 0, 0.2, 1), visibility 0s;
    }
    .drawer-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 16px;
        margin-top: 8px;
    }
    .drawer-back {
        display: flex;
        padding: 0;
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
    }
    .drawer-divider {
        height: 1px;
        width: calc(100% - 16px);
        margin-left: 16px;
        background: linear-gradient(-45deg, transparent 0%, var(--off-white) 100%);
    }
    .drawer-list {
        list-style: none;
        margin: 0;
        padding: 16px 0;
    }
    .drawer-item, .drawer-language {
        color: var(--off-white);
        text-decoration: none;
        user-select: none;
        cursor: pointer;
        transition: color 0.2s ease, text-shadow 0.2s ease;
        will-change: color, text-shadow, filter;
    }
    .drawer-item {
        display: block;
        padding: 8px 16px;
    }
    .drawer-item:hover, .drawer-item:active,
    .drawer-language:hover, .drawer-language:active {
        color: var(--primary);
        text-shadow: 0 0 8px var(--primary), 0 0 32px var(--primary), 0 0 48px var(--primary), 0 0 100px var(--primary);
        filter: brightness(2);
    }
"#;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub size_class: SizeClass,
    pub locale: Locale,
    pub on_locale_change: Callback<Locale>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        size_class,
        locale,
        on_locale_change,
    } = props;
    let size_class = *size_class;
    let locale = *locale;
    let drawer_open = use_state(|| false);

    {
        let drawer_open = drawer_open.clone();
        use_effect_with_deps(
            move |size_class| {
                let current = NavState {
                    drawer_open: *drawer_open,
                    locale,
                };
                let next = current.resized(*size_class);
                if next.drawer_open != current.drawer_open {
                    log::debug!("Closing drawer on {} layout", size_class.name());
                    drawer_open.set(next.drawer_open);
                }
                || ()
            },
            size_class,
        );
    }

    let dispatch = {
        let drawer_open = drawer_open.clone();
        let on_locale_change = on_locale_change.clone();
        Callback::from(move |action: NavAction| {
            let current = NavState {
                drawer_open: *drawer_open,
                locale,
            };
            let next = current.apply(size_class, action);
            log::debug!("Nav {:?} on {}: {:?} -> {:?}", action, size_class.name(), current, next);
            if next.drawer_open != current.drawer_open {
                drawer_open.set(next.drawer_open);
            }
            if next.locale != current.locale {
                on_locale_change.emit(next.locale);
            }
        })
    };

    let toggle_drawer = dispatch.reform(|_: MouseEvent| NavAction::ToggleDrawer);
    let close_drawer = dispatch.reform(|_: MouseEvent| NavAction::CloseDrawer);
    let toggle_language = dispatch.reform(|_: MouseEvent| NavAction::ToggleLanguage);

    let view = NavView::build(size_class, locale, *drawer_open);
    let layout = view.layout;

    html! {
        <>
            <style>{NAV_STYLES}</style>
            <header class="app-bar" style={format!("top: {}px;", layout.top_px)}>
                <div class="app-bar-box" style={layout.bar_style()}>
                    <div class="app-bar-toolbar">
                        <div class="nav-group" style={format!("gap: {}px;", layout.group_gap_px)}>
                            <a href="#intro" class="nav-group" draggable="false"
                                style={format!("gap: {}px; text-decoration: none; color: inherit;", layout.group_gap_px / 2)}>
                                <img
                                    class="nav-logo"
                                    src={config::LOGO_SRC}
                                    alt="Logo"
                                    draggable="false"
                                    style={format!("max-height: {}px;", layout.logo_max_height_px)}
                                />
                                <h6 class="nav-brand" style={format!("font-size: {}px;", layout.brand_font_px)}>
                                    {config::BRAND_NAME}
                                </h6>
                            </a>
                            {
                                if view.inline_links.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <nav class="nav-links">
                                            { for view.inline_links.iter().map(|item| html! {
                                                <a
                                                    key={item.href}
                                                    class="nav-link"
                                                    href={item.href}
                                                    draggable="false"
                                                    style={format!("font-size: {}px;", layout.link_font_px)}
                                                >
                                                    {item.label}
                                                </a>
                                            }) }
                                        </nav>
                                    }
                                }
                            }
                        </div>

                        <div class="nav-group" style={format!("gap: {}px;", layout.group_gap_px)}>
                            {
                                if let Some(label) = view.inline_language {
                                    html! {
                                        <span
                                            class="nav-language"
                                            tabindex="0"
                                            onclick={toggle_language.clone()}
                                            style={format!("font-size: {}px;", layout.link_font_px)}
                                        >
                                            {label}
                                        </span>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if let Some(contact) = view.contact_cta {
                                    html! {
                                        <a class="accent-button" href={contact.href}>{contact.label}</a>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                if view.menu_icon {
                                    html! {
                                        <img
                                            class="menu-icon"
                                            src={config::MENU_ICON_SRC}
                                            alt="Menu"
                                            draggable="false"
                                            onclick={toggle_drawer.clone()}
                                            style={format!("max-height: {}px;", layout.menu_icon_max_height_px)}
                                        />
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                </div>
            </header>

            <div
                class={classes!("drawer", view.drawer_open.then_some("open"))}
                style={if layout.drawer_enabled { "display: block;" } else { "display: none;" }}
                aria-hidden={(!view.drawer_open).to_string()}
            >
                <div class="drawer-backdrop" onclick={close_drawer.clone()}></div>
                <aside class="drawer-paper">
                    <div class="drawer-header">
                        <button class="drawer-back" aria-label="Back" onclick={toggle_drawer.clone()}>
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
                                <path d="M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z" />
                            </svg>
                        </button>
                        <span
                            class="drawer-language"
                            onclick={toggle_language.clone()}
                            style={format!("font-size: {};", layout.drawer_font)}
                        >
                            {view.drawer_language}
                        </span>
                    </div>
                    <div class="drawer-divider"></div>
                    <ul class="drawer-list" style={format!("width: {}px;", layout.drawer_width_px)}>
                        { for view.drawer_items.iter().map(|item| html! {
                            <li key={item.href}>
                                <a
                                    class="drawer-item"
                                    href={item.href}
                                    draggable="false"
                                    onclick={toggle_drawer.clone()}
                                    style={format!("font-size: {};", layout.drawer_font)}
                                >
                                    {item.label}
                                </a>
                            </li>
                        }) }
                    </ul>
                </aside>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: [SizeClass; 2] = [SizeClass::Mobile, SizeClass::Tablet];

    impl NavState {
        fn new(locale: Locale) -> Self {
            Self {
                drawer_open: false,
                locale,
            }
        }
    }

    fn hrefs(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.href).collect()
    }

    #[test]
    fn menu_has_four_items_in_fixed_order() {
        for locale in [Locale::En, Locale::Fi] {
            let items = menu_items(locale);
            assert_eq!(hrefs(&items), vec!["#about", "#prices", "#portfolio", "#contact"]);
        }
        assert_eq!(menu_items(Locale::Fi)[0].label, "Meistä");
    }

    #[test]
    fn drawer_starts_closed_and_toggles_in_pairs() {
        for class in COMPACT {
            let state = NavState::new(Locale::En);
            assert!(!state.drawer_open);
            let once = state.apply(class, NavAction::ToggleDrawer);
            assert!(once.drawer_open);
            let twice = once.apply(class, NavAction::ToggleDrawer);
            assert_eq!(twice, state);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let state = NavState::new(Locale::Fi);
        let closed = state.apply(SizeClass::Mobile, NavAction::CloseDrawer);
        assert_eq!(closed, state);
        let opened = state.apply(SizeClass::Mobile, NavAction::ToggleDrawer);
        assert!(!opened.apply(SizeClass::Mobile, NavAction::CloseDrawer).drawer_open);
    }

    #[test]
    fn language_toggle_flips_locale_and_back() {
        for class in [SizeClass::Mobile, SizeClass::Tablet, SizeClass::Desktop] {
            let state = NavState::new(Locale::En);
            let once = state.apply(class, NavAction::ToggleLanguage);
            assert_eq!(once.locale, Locale::Fi);
            let twice = once.apply(class, NavAction::ToggleLanguage);
            assert_eq!(twice.locale, Locale::En);
        }
    }

    #[test]
    fn language_toggle_from_open_drawer_closes_it() {
        for class in COMPACT {
            let open = NavState {
                drawer_open: true,
                locale: Locale::Fi,
            };
            let next = open.apply(class, NavAction::ToggleLanguage);
            assert!(!next.drawer_open);
            assert_eq!(next.locale, Locale::En);
        }
    }

    #[test]
    fn language_toggle_on_desktop_leaves_drawer_alone() {
        let state = NavState::new(Locale::En);
        let next = state.apply(SizeClass::Desktop, NavAction::ToggleLanguage);
        assert!(!next.drawer_open);
    }

    #[test]
    fn resizing_to_desktop_closes_drawer() {
        for class in COMPACT {
            let open = NavState::new(Locale::En).apply(class, NavAction::ToggleDrawer);
            let resized = open.resized(SizeClass::Desktop);
            assert!(!resized.drawer_open);
            assert_eq!(resized.locale, Locale::En);
        }
    }

    #[test]
    fn resizing_between_compact_layouts_keeps_drawer() {
        let open = NavState::new(Locale::Fi).apply(SizeClass::Mobile, NavAction::ToggleDrawer);
        assert_eq!(open.resized(SizeClass::Tablet), open);
        assert_eq!(open.resized(SizeClass::Tablet).resized(SizeClass::Mobile), open);
        let closed = NavState::new(Locale::Fi);
        assert_eq!(closed.resized(SizeClass::Desktop), closed);
    }

    #[test]
    fn closed_drawer_is_hidden_after_slide_out() {
        assert!(NAV_STYLES.contains("visibility: hidden;"));
        assert!(NAV_STYLES.contains("visibility 0s linear 225ms"));
        let open_rule = NAV_STYLES.find(".drawer.open .drawer-paper").unwrap();
        assert!(NAV_STYLES[open_rule..].contains("visibility: visible;"));
    }

    #[test]
    fn desktop_never_presents_drawer() {
        for drawer_open in [false, true] {
            for locale in [Locale::En, Locale::Fi] {
                let view = NavView::build(SizeClass::Desktop, locale, drawer_open);
                assert!(!view.drawer_open);
                assert!(!view.menu_icon);
            }
        }
    }

    #[test]
    fn desktop_english_view() {
        let view = NavView::build(SizeClass::Desktop, Locale::En, false);
        assert_eq!(hrefs(&view.inline_links), vec!["#about", "#prices", "#portfolio"]);
        assert_eq!(view.inline_language, Some("FIN"));
        let contact = view.contact_cta.unwrap();
        assert_eq!(contact.href, "#contact");
        assert_eq!(contact.label, "Contact");
        assert_eq!(view.layout.top_px, 16);
        assert!(view.layout.boxed);
    }

    #[test]
    fn finnish_offers_english_switch() {
        let view = NavView::build(SizeClass::Desktop, Locale::Fi, false);
        assert_eq!(view.inline_language, Some("ENG"));
        assert_eq!(view.drawer_language, "ENG");
    }

    #[test]
    fn mobile_uses_menu_icon_and_drawer() {
        let state = NavState::new(Locale::En);
        let closed = NavView::build(SizeClass::Mobile, state.locale, state.drawer_open);
        assert!(closed.inline_links.is_empty());
        assert_eq!(closed.inline_language, None);
        assert_eq!(closed.contact_cta, None);
        assert!(closed.menu_icon);
        assert!(!closed.drawer_open);
        assert_eq!(closed.layout.top_px, 0);

        let state = state.apply(SizeClass::Mobile, NavAction::ToggleDrawer);
        let open = NavView::build(SizeClass::Mobile, state.locale, state.drawer_open);
        assert!(open.drawer_open);
        assert_eq!(open.drawer_language, "FIN");
        assert_eq!(
            hrefs(&open.drawer_items),
            vec!["#about", "#prices", "#portfolio", "#contact"]
        );
    }

    #[test]
    fn tablet_keeps_contact_button() {
        let view = NavView::build(SizeClass::Tablet, Locale::En, false);
        assert!(view.inline_links.is_empty());
        assert_eq!(view.inline_language, None);
        assert!(view.menu_icon);
        assert_eq!(view.contact_cta.map(|item| item.href), Some(CONTACT_HREF));
    }
}
