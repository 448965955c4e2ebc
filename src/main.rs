use yew::prelude::*;
use log::{info, warn};

mod config;
mod error;
mod i18n;
mod screen;
mod theme;
mod components {
    pub mod nav;
    pub mod text_field;
}
mod sections {
    pub mod contact;
    pub mod intro;
    pub mod page_section;
}

use components::nav::Nav;
use i18n::{translate, Locale};
use screen::use_size_class;
use sections::{contact::Contact, intro::Intro, page_section::PageSection};
use theme::ThemeProvider;

#[function_component]
fn App() -> Html {
    let size_class = use_size_class();
    let locale = use_state(i18n::initial_locale);

    {
        use_effect_with_deps(
            move |locale| {
                if let Err(err) = i18n::apply_document_language(*locale) {
                    warn!("Could not set document language: {}", err);
                }
                || ()
            },
            *locale,
        );
    }

    let on_locale_change = {
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            info!("Switching language to {}", next.code());
            if let Err(err) = i18n::store_locale(next) {
                warn!("Language choice not saved: {}", err);
            }
            locale.set(next);
        })
    };

    let current = *locale;

    html! {
        <ThemeProvider size_class={size_class}>
            <Nav size_class={size_class} locale={current} on_locale_change={on_locale_change} />
            <main>
                <Intro size_class={size_class} locale={current} />
                <PageSection
                    id="about"
                    title={translate(current, "menuItems.about")}
                    text={translate(current, "about.text")}
                />
                <PageSection
                    id="prices"
                    title={translate(current, "menuItems.prices")}
                    text={translate(current, "prices.text")}
                />
                <PageSection
                    id="portfolio"
                    title={translate(current, "menuItems.portfolio")}
                    text={translate(current, "portfolio.text")}
                />
                <Contact locale={current} />
            </main>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
