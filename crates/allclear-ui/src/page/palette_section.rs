use yew::prelude::*;

use super::{ENTRY_BLOCK_CLASS, ENTRY_NAME_CLASS, INFO_LIST_CLASS};
use crate::components::{Card, CodeChip, LabeledField};
use crate::palette::ColorEntry;

const COLOR_SWATCH_CLASS: &str = "h-32 rounded-lg shadow-lg flex items-center justify-center font-mono text-lg font-bold border-2 border-gray-200";

/// Properties for [`PaletteSection`].
#[derive(Properties, PartialEq)]
pub struct PaletteSectionProps {
    /// Palette entries in display order.
    pub entries: &'static [ColorEntry],
}

/// Card listing every palette entry, keyed by hex code.
#[function_component(PaletteSection)]
pub fn palette_section(props: &PaletteSectionProps) -> Html {
    html! {
        <Card
            title="Brand Color Palette"
            description="Core colors used throughout the marketplace application"
            class="mb-8"
        >
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for props.entries.iter().map(|entry| html! {
                    <ColorEntryBlock key={entry.hex} entry={*entry} />
                }) }
            </div>
        </Card>
    }
}

/// Properties for [`ColorEntryBlock`].
#[derive(Properties, PartialEq)]
pub struct ColorEntryBlockProps {
    /// Entry to display.
    pub entry: ColorEntry,
}

/// Swatch plus info block for one palette entry.
#[function_component(ColorEntryBlock)]
pub fn color_entry_block(props: &ColorEntryBlockProps) -> Html {
    let entry = props.entry;
    html! {
        <div class={ENTRY_BLOCK_CLASS}>
            <div
                class={COLOR_SWATCH_CLASS}
                style={format!("background-color: {}; color: {}", entry.hex, entry.text_color.as_str())}
            >
                {entry.hex}
            </div>
            <div>
                <h3 class={ENTRY_NAME_CLASS}>{entry.name}</h3>
                <div class={INFO_LIST_CLASS}>
                    <LabeledField label="Hex"><CodeChip text={entry.hex} /></LabeledField>
                    <LabeledField label="Variable"><CodeChip text={entry.variable} /></LabeledField>
                    <LabeledField label="Usage">{entry.usage}</LabeledField>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::palette::TextColor;
    use crate::render::render_to_html;

    const GRAY_800: ColorEntry = ColorEntry {
        name: "Gray 800",
        hex: "#1F2937",
        usage: "Secondary text, borders",
        variable: "gray-800",
        text_color: TextColor::White,
    };

    #[test]
    fn color_entry_block_sets_swatch_colors_from_entry() {
        let html = render_to_html::<ColorEntryBlock>(ColorEntryBlockProps { entry: GRAY_800 });
        assert!(html.starts_with(
            "<div class=\"space-y-3\"><div style=\"background-color: #1F2937; color: white\" class=\"h-32 rounded-lg shadow-lg flex items-center justify-center font-mono text-lg font-bold border-2 border-gray-200\">#1F2937</div>"
        ));
    }

    #[test]
    fn color_entry_block_shows_fields_in_order() {
        let html = render_to_html::<ColorEntryBlock>(ColorEntryBlockProps { entry: GRAY_800 });
        assert!(html.contains(
            "<div class=\"space-y-1 text-sm text-gray-600\"><p><span class=\"font-semibold\">Hex:</span> <code class=\"bg-gray-100 px-2 py-1 rounded\">#1F2937</code></p><p><span class=\"font-semibold\">Variable:</span> <code class=\"bg-gray-100 px-2 py-1 rounded\">gray-800</code></p><p><span class=\"font-semibold\">Usage:</span> Secondary text, borders</p></div>"
        ));
        assert!(html.contains("<h3 class=\"font-bold text-lg mb-1\">Gray 800</h3>"));
    }

    #[test]
    fn palette_section_handles_empty_table() {
        let html = render_to_html::<PaletteSection>(PaletteSectionProps { entries: &[] });
        assert!(html.contains("Brand Color Palette"));
        assert!(html.contains("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\"></div>"));
        assert!(!html.contains("<code"));
    }
}
