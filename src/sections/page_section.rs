use yew::prelude::*;

/// Anchor target for one menu entry.
#[derive(Properties, PartialEq)]
pub struct PageSectionProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub text: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageSection)]
pub fn page_section(props: &PageSectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class="page-section"
            style="max-width: 1200px; margin: 0 auto; padding: 96px 16px; box-sizing: border-box;"
        >
            <h2 style="margin-top: 0;">{props.title.clone()}</h2>
            <p style="opacity: 0.8;">{props.text.clone()}</p>
            { for props.children.iter() }
        </section>
    }
}
