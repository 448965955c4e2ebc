use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// Layout bucket for the current viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl SizeClass {
    pub fn from_width(width: f64) -> Self {
        // NaN (no window) raises neither flag and lands on desktop.
        let is_mobile = width < config::MOBILE_MAX_WIDTH;
        let is_tablet = !is_mobile && width < config::TABLET_MAX_WIDTH;
        Self::from_flags(is_mobile, is_tablet)
    }

    pub fn from_flags(is_mobile: bool, is_tablet: bool) -> Self {
        match (is_mobile, is_tablet) {
            (true, _) => SizeClass::Mobile,
            (false, true) => SizeClass::Tablet,
            (false, false) => SizeClass::Desktop,
        }
    }

    /// Mobile and tablet share the drawer based navigation.
    pub fn is_compact(self) -> bool {
        match self {
            SizeClass::Mobile | SizeClass::Tablet => true,
            SizeClass::Desktop => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SizeClass::Mobile => "mobile",
            SizeClass::Tablet => "tablet",
            SizeClass::Desktop => "desktop",
        }
    }
}

/// Tracks the window width and re-renders the caller when the size class changes.
#[hook]
pub fn use_size_class() -> SizeClass {
    let (width, _height) = use_window_size();
    let size_class = SizeClass::from_width(width);

    use_effect_with_deps(
        move |size_class| {
            log::debug!("Size class is now {}", size_class.name());
            || ()
        },
        size_class,
    );

    size_class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_breakpoints() {
        assert_eq!(SizeClass::from_width(320.0), SizeClass::Mobile);
        assert_eq!(SizeClass::from_width(599.9), SizeClass::Mobile);
        assert_eq!(SizeClass::from_width(600.0), SizeClass::Tablet);
        assert_eq!(SizeClass::from_width(899.0), SizeClass::Tablet);
        assert_eq!(SizeClass::from_width(900.0), SizeClass::Desktop);
        assert_eq!(SizeClass::from_width(2560.0), SizeClass::Desktop);
    }

    #[test]
    fn unknown_width_is_desktop() {
        assert_eq!(SizeClass::from_width(f64::NAN), SizeClass::Desktop);
        assert_eq!(SizeClass::default(), SizeClass::Desktop);
    }

    #[test]
    fn flags_without_mobile_or_tablet_mean_desktop() {
        assert_eq!(SizeClass::from_flags(false, false), SizeClass::Desktop);
        assert_eq!(SizeClass::from_flags(false, true), SizeClass::Tablet);
        assert_eq!(SizeClass::from_flags(true, false), SizeClass::Mobile);
        assert_eq!(SizeClass::from_flags(true, true), SizeClass::Mobile);
    }

    #[test]
    fn flags_agree_with_variant() {
        for class in [SizeClass::Mobile, SizeClass::Tablet, SizeClass::Desktop] {
            let is_mobile = class == SizeClass::Mobile;
            let is_tablet = class == SizeClass::Tablet;
            assert_eq!(SizeClass::from_flags(is_mobile, is_tablet), class);
            assert_eq!(class.is_compact(), class != SizeClass::Desktop);
        }
    }
}
