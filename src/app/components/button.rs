use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Ghost,
    Confirm,
    Cancel,
}

/// Round icon-only button
#[component]
pub fn IconButton(
    glyph: String,
    title: String,
    variant: Option<ButtonVariant>,
    extra_class: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Ghost);
    let extra_class = extra_class.unwrap_or_default();

    let variant_class = match variant {
        ButtonVariant::Ghost => "c-icon-button--ghost",
        ButtonVariant::Confirm => "c-icon-button--confirm",
        ButtonVariant::Cancel => "c-icon-button--cancel",
    };

    rsx! {
        button {
            class: "c-icon-button {variant_class} {extra_class}",
            title: "{title}",
            aria_label: "{title}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            "{glyph}"
        }
    }
}
