//! Shared look of the form controls (labels, outlined inputs, dividers).
//!
//! [`ThemeConfig::for_size_class`] is a pure function of the size class; the
//! [`ThemeProvider`] component turns it into a global stylesheet and swaps it
//! whenever the size class changes.

use stylist::GlobalStyle;
use yew::prelude::*;

use crate::error::Result;
use crate::screen::SizeClass;

pub const FONT_FAMILY: &str = "'Oxanium', 'Montserrat', Arial, Helvetica, sans-serif";
pub const TEXT_COLOR: &str = "var(--off-white)";

/// Component style slots the theme fills in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    InputLabel,
    Divider,
    OutlinedInput,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: &'static str,
    pub declarations: Vec<(&'static str, String)>,
}

impl StyleRule {
    fn new(selector: &'static str, declarations: &[(&'static str, &str)]) -> Self {
        Self {
            selector,
            declarations: declarations
                .iter()
                .map(|(property, value)| (*property, value.to_string()))
                .collect(),
        }
    }

    fn to_css(&self) -> String {
        let body: String = self
            .declarations
            .iter()
            .map(|(property, value)| format!(" {}: {};", property, value))
            .collect();
        format!("{} {{{} }}\n", self.selector, body)
    }
}

/// Slot name to ordered rules. Order is kept because later rules override
/// earlier ones with the same specificity (hover after focus).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub font_family: &'static str,
    pub text_color: &'static str,
    pub slots: Vec<(Slot, Vec<StyleRule>)>,
}

/// Control font size tier.
pub fn control_font_size(size_class: SizeClass) -> &'static str {
    match size_class {
        SizeClass::Mobile => "0.8rem",
        SizeClass::Tablet => "0.9rem",
        SizeClass::Desktop => "1rem",
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::for_size_class(SizeClass::default())
    }
}

impl ThemeConfig {
    pub fn for_size_class(size_class: SizeClass) -> Self {
        let font_size = control_font_size(size_class);

        let input_label = vec![
            StyleRule::new(
                ".input-label",
                &[
                    ("transition", "all 0.2s ease"),
                    ("color", TEXT_COLOR),
                    ("opacity", "0.5"),
                    ("font-size", font_size),
                ],
            ),
            StyleRule::new(
                ".text-field:focus-within .input-label",
                &[("color", TEXT_COLOR), ("opacity", "0.8")],
            ),
        ];

        let divider = vec![StyleRule::new(
            ".divider",
            &[
                ("background-color", TEXT_COLOR),
                ("opacity", "0.2"),
                ("border", "none"),
                ("height", "1px"),
            ],
        )];

        let outlined_input = vec![
            StyleRule::new(
                ".outlined-input",
                &[
                    ("position", "relative"),
                    ("font-size", font_size),
                    ("border-radius", "8px"),
                ],
            ),
            StyleRule::new(
                ".outlined-input .notched-outline",
                &[
                    ("position", "absolute"),
                    ("inset", "0"),
                    ("margin", "0"),
                    ("pointer-events", "none"),
                    ("border-radius", "inherit"),
                    ("transition", "all 0.2s ease"),
                    ("opacity", "0.5"),
                    ("border", "1px solid var(--off-white)"),
                ],
            ),
            StyleRule::new(
                ".outlined-input:focus-within .notched-outline",
                &[("border", "1px solid var(--off-white)"), ("opacity", "1")],
            ),
            StyleRule::new(
                ".outlined-input:hover .notched-outline",
                &[
                    ("opacity", "0.75"),
                    ("border", "1px solid var(--off-white) !important"),
                ],
            ),
            StyleRule::new(
                ".outlined-input .outlined-input-field",
                &[
                    ("color", TEXT_COLOR),
                    ("background", "transparent"),
                    ("border", "none"),
                    ("outline", "none"),
                    ("font", "inherit"),
                    ("padding", "16.5px 14px"),
                    ("width", "100%"),
                    ("box-sizing", "border-box"),
                ],
            ),
            StyleRule::new(
                ".outlined-input .outlined-input-field:-webkit-autofill",
                &[
                    ("box-shadow", "0 0 0 100px transparent inset !important"),
                    ("-webkit-text-fill-color", "var(--off-white) !important"),
                    ("transition", "background-color 5000s ease-in-out 0s"),
                ],
            ),
        ];

        Self {
            font_family: FONT_FAMILY,
            text_color: TEXT_COLOR,
            slots: vec![
                (Slot::InputLabel, input_label),
                (Slot::Divider, divider),
                (Slot::OutlinedInput, outlined_input),
            ],
        }
    }

    pub fn to_css(&self) -> String {
        let body = format!(
            "body {{ font-family: {}; color: {}; }}\n",
            self.font_family, self.text_color
        );
        self.slots
            .iter()
            .flat_map(|(_, rules)| rules.iter())
            .fold(body, |mut css, rule| {
                css.push_str(&rule.to_css());
                css
            })
    }
}

fn mount_theme(size_class: SizeClass) -> Result<GlobalStyle> {
    let css = ThemeConfig::for_size_class(size_class).to_css();
    Ok(GlobalStyle::new(css)?)
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub size_class: SizeClass,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    use_effect_with_deps(
        move |size_class| {
            let mounted = match mount_theme(*size_class) {
                Ok(style) => {
                    log::debug!("Theme mounted for {}", size_class.name());
                    Some(style)
                }
                Err(err) => {
                    log::warn!("Theme stylesheet not applied: {}", err);
                    None
                }
            };
            move || {
                if let Some(style) = mounted {
                    style.unregister();
                }
            }
        },
        props.size_class,
    );

    html! { <>{ for props.children.iter() }</> }
}
