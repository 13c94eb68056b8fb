//! Reusable building blocks shared by the style guide sections.

use yew::prelude::*;

const CARD_CLASS: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";
const CARD_HEADER_CLASS: &str = "flex flex-col space-y-1.5 p-6";
const CARD_TITLE_CLASS: &str = "font-semibold leading-none tracking-tight text-2xl";
const CARD_DESCRIPTION_CLASS: &str = "text-sm text-muted-foreground";
const CARD_CONTENT_CLASS: &str = "p-6 pt-0";

/// Inline code chip used in info blocks.
pub const CODE_CHIP: &str = "bg-gray-100 px-2 py-1 rounded";
/// Tighter code chip used inside lists.
pub const CODE_CHIP_TIGHT: &str = "bg-gray-100 px-1 rounded";

/// Properties for [`Card`].
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Title shown in the card header.
    pub title: AttrValue,
    /// Optional line under the title.
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Extra classes for the card container.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes for the content area.
    #[prop_or_default]
    pub content_class: Classes,
    /// Content area children.
    #[prop_or_default]
    pub children: Children,
}

/// Card with a titled header and a content area.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!(CARD_CLASS, props.class.clone())}>
            <div class={CARD_HEADER_CLASS}>
                <h3 class={CARD_TITLE_CLASS}>{props.title.clone()}</h3>
                {props.description.clone().map(|description| html! {
                    <p class={CARD_DESCRIPTION_CLASS}>{description}</p>
                }).unwrap_or_default()}
            </div>
            <div class={classes!(CARD_CONTENT_CLASS, props.content_class.clone())}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Properties for [`CodeChip`].
#[derive(Properties, PartialEq)]
pub struct CodeChipProps {
    /// Literal text shown in the chip.
    pub text: AttrValue,
    /// Chip classes; defaults to [`CODE_CHIP`].
    #[prop_or(Classes::from(CODE_CHIP))]
    pub class: Classes,
}

/// `<code>` chip showing a literal value.
#[function_component(CodeChip)]
pub fn code_chip(props: &CodeChipProps) -> Html {
    html! { <code class={props.class.clone()}>{props.text.clone()}</code> }
}

/// Properties for [`LabeledField`].
#[derive(Properties, PartialEq)]
pub struct LabeledFieldProps {
    /// Label rendered in bold before the colon.
    pub label: AttrValue,
    /// Value shown after the label.
    #[prop_or_default]
    pub children: Children,
}

/// Paragraph rendering `Label: value` with a bold label.
#[function_component(LabeledField)]
pub fn labeled_field(props: &LabeledFieldProps) -> Html {
    html! {
        <p>
            <span class="font-semibold">{format!("{}:", props.label)}</span>
            {" "}
            { for props.children.iter() }
        </p>
    }
}

/// Properties for [`ExampleBlock`].
#[derive(Properties, PartialEq)]
pub struct ExampleBlockProps {
    /// Heading above the example.
    pub title: AttrValue,
    /// Muted footnote under the example.
    #[prop_or_default]
    pub note: Html,
    /// The example itself.
    #[prop_or_default]
    pub children: Children,
}

/// Titled usage example followed by a muted note.
#[function_component(ExampleBlock)]
pub fn example_block(props: &ExampleBlockProps) -> Html {
    html! {
        <div>
            <h3 class="font-bold text-lg mb-3">{props.title.clone()}</h3>
            { for props.children.iter() }
            <div class="mt-3 text-sm text-gray-600">{props.note.clone()}</div>
        </div>
    }
}
