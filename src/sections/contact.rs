use yew::prelude::*;

use crate::components::text_field::TextField;
use crate::config;
use crate::i18n::{translate, Locale};
use crate::sections::page_section::PageSection;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub locale: Locale,
}

/// Contact form. There is no backend; the form hands off to the visitor's
/// mail client.
#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let locale = props.locale;

    html! {
        <PageSection
            id="contact"
            title={translate(locale, "menuItems.contact")}
            text={translate(locale, "contact.text")}
        >
            <hr class="divider" />
            <form
                action={format!("mailto:{}", config::CONTACT_EMAIL)}
                method="post"
                enctype="text/plain"
                style="display: flex; flex-direction: column; gap: 24px; max-width: 560px;"
            >
                <TextField id="contact-name" name="name" label={translate(locale, "contact.name")} required=true />
                <TextField
                    id="contact-email"
                    name="email"
                    input_type="email"
                    label={translate(locale, "contact.email")}
                    required=true
                />
                <TextField
                    id="contact-message"
                    name="message"
                    label={translate(locale, "contact.message")}
                    multiline=true
                />
                <button type="submit" class="accent-button" style="align-self: flex-start; background: none; cursor: pointer; font: inherit;">
                    {translate(locale, "contact.send")}
                </button>
            </form>
        </PageSection>
    }
}
