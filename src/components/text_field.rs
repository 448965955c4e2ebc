use yew::prelude::*;

/// Labelled outlined input. Looks come from the theme stylesheet.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let field = if props.multiline {
        html! {
            <textarea
                id={props.id.clone()}
                name={props.name.clone()}
                class="outlined-input-field"
                rows="5"
                required={props.required}
            />
        }
    } else {
        html! {
            <input
                id={props.id.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                class="outlined-input-field"
                required={props.required}
            />
        }
    };

    html! {
        <div class="text-field" style="display: flex; flex-direction: column; gap: 8px;">
            <label class="input-label" for={props.id.clone()}>{props.label.clone()}</label>
            <div class="outlined-input">
                {field}
                <fieldset class="notched-outline" aria-hidden="true"></fieldset>
            </div>
        </div>
    }
}
