//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and by clickable cards.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_busy: bool,
    #[props(default)] test_id: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            aria_busy: if aria_busy || loading { Some("true") } else { None },
            "data-testid": test_id,
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - for primary actions
    Primary,
    /// Gray background - for secondary actions
    Secondary,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let base = match size {
        ButtonSize::Small => "inline-flex items-center gap-2 text-sm rounded-lg transition-colors",
        ButtonSize::Medium => "inline-flex items-center gap-2 rounded-lg transition-colors",
    };

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    match extra {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    }
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] busy: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] test_id: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = button_class(variant, size, class.as_deref());

    rsx! {
        ChromelessButton {
            disabled,
            aria_busy: busy,
            class: Some(computed_class),
            test_id,
            onclick,
            {children}
        }
    }
}
