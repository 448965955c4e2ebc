use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewports narrower than this are laid out as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 600.0;
/// Viewports narrower than this (and not mobile) are laid out as tablet.
pub const TABLET_MAX_WIDTH: f64 = 900.0;

pub const BRAND_NAME: &str = "SOMESANKARIT";
pub const LOGO_SRC: &str = "/img/vite.svg";
pub const MENU_ICON_SRC: &str = "/img/menu.svg";
pub const INTRO_VIDEO_SRC: &str = "/video/intro-bg.mp4";
pub const INTRO_VIDEO_TYPE: &str = "video/mp4";

pub const CONTACT_EMAIL: &str = "info@somesankarit.fi";

/// Local storage key holding the visitor's chosen language.
pub const LANGUAGE_STORAGE_KEY: &str = "lang";
