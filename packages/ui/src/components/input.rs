use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

/// Inline message under a form field. Renders nothing without a message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}

/// A labelled input with its validation message.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    #[props(default)] placeholder: String,
    error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            FieldError { message: error }
        }
    }
}
