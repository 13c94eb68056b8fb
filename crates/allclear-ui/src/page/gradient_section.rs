use yew::prelude::*;

use super::{ENTRY_BLOCK_CLASS, ENTRY_NAME_CLASS, INFO_LIST_CLASS};
use crate::components::{Card, CodeChip, LabeledField};
use crate::palette::GradientEntry;

const GRADIENT_SWATCH_CLASS: &str =
    "h-32 rounded-lg shadow-lg border-2 border-gray-200 relative overflow-hidden";
const GRADIENT_CAPTION_CLASS: &str =
    "absolute inset-0 flex items-center justify-center text-white font-bold text-lg";
const GRADIENT_CODE_CLASS: &str = "bg-gray-100 px-2 py-1 rounded text-xs";

/// Caption drawn over every gradient swatch.
pub const GRADIENT_CAPTION: &str = "Gradient Preview";

/// Properties for [`GradientSection`].
#[derive(Properties, PartialEq)]
pub struct GradientSectionProps {
    /// Gradient entries in display order.
    pub entries: &'static [GradientEntry],
}

/// Card listing every gradient entry, keyed by position.
#[function_component(GradientSection)]
pub fn gradient_section(props: &GradientSectionProps) -> Html {
    html! {
        <Card
            title="Gradients"
            description="Gradient overlays and effects used in the design"
            class="mb-8"
        >
            <div class="space-y-6">
                { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <GradientEntryBlock key={index} entry={*entry} />
                }) }
            </div>
        </Card>
    }
}

/// Properties for [`GradientEntryBlock`].
#[derive(Properties, PartialEq)]
pub struct GradientEntryBlockProps {
    /// Entry to display.
    pub entry: GradientEntry,
}

/// Captioned swatch plus info block for one gradient entry.
#[function_component(GradientEntryBlock)]
pub fn gradient_entry_block(props: &GradientEntryBlockProps) -> Html {
    let entry = props.entry;
    html! {
        <div class={ENTRY_BLOCK_CLASS}>
            <div class={GRADIENT_SWATCH_CLASS} style={format!("background: {}", entry.gradient)}>
                <div class={GRADIENT_CAPTION_CLASS}>{GRADIENT_CAPTION}</div>
            </div>
            <div>
                <h3 class={ENTRY_NAME_CLASS}>{entry.name}</h3>
                <div class={INFO_LIST_CLASS}>
                    <LabeledField label="Tailwind">
                        <CodeChip text={entry.css} class={GRADIENT_CODE_CLASS} />
                    </LabeledField>
                    <LabeledField label="Usage">{entry.usage}</LabeledField>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::palette::GRADIENTS;
    use crate::render::render_to_html;

    #[test]
    fn gradient_entry_block_uses_inline_background_and_caption() {
        let html =
            render_to_html::<GradientEntryBlock>(GradientEntryBlockProps { entry: GRADIENTS[0] });
        assert!(html.starts_with(
            "<div class=\"space-y-3\"><div style=\"background: linear-gradient(to right, rgba(0, 0, 0, 0.6), transparent)\" class=\"h-32 rounded-lg shadow-lg border-2 border-gray-200 relative overflow-hidden\"><div class=\"absolute inset-0 flex items-center justify-center text-white font-bold text-lg\">Gradient Preview</div></div>"
        ));
        assert!(html.contains("<span class=\"font-semibold\">Usage:</span> Hero section overlay"));
    }

    #[test]
    fn gradient_section_renders_one_block_per_entry() {
        let html = render_to_html::<GradientSection>(GradientSectionProps { entries: GRADIENTS });
        assert_eq!(html.matches(GRADIENT_CAPTION).count(), GRADIENTS.len());
        assert!(html.contains("Gradient overlays and effects used in the design"));
    }
}
