use shared::view::SelectOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(true)]
    pub visible: bool,
}

/// Labelled `<select>`; hidden groups stay in the DOM and keep their value
#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    let style = if props.visible { "display: block" } else { "display: none" };

    html! {
        <div class="form-group" id={format!("{}-group", props.id)} {style}>
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <select id={props.id.clone()} class="form-select" onchange={on_change}>
                {for props.options.iter().map(|option| {
                    html! {
                        <option value={option.value.clone()} selected={option.value == props.value}>
                            {&option.label}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
