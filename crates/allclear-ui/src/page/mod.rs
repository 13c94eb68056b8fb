//! Style guide page composition.
//!
//! The palette and gradient tables are rendered entry by entry in declaration
//! order. Everything else on the page is authored content and stays fixed.

mod developer_notes;
mod gradient_section;
mod palette_section;
mod usage_examples;

use yew::prelude::*;

use crate::palette::{COLOR_PALETTE, GRADIENTS};

pub use developer_notes::DeveloperNotes;
pub use gradient_section::{
    GRADIENT_CAPTION, GradientEntryBlock, GradientEntryBlockProps, GradientSection,
    GradientSectionProps,
};
pub use palette_section::{
    ColorEntryBlock, ColorEntryBlockProps, PaletteSection, PaletteSectionProps,
};
pub use usage_examples::UsageExamples;

#[cfg(not(target_arch = "wasm32"))]
use crate::render::render_to_html;

const ENTRY_BLOCK_CLASS: &str = "space-y-3";
const ENTRY_NAME_CLASS: &str = "font-bold text-lg mb-1";
const INFO_LIST_CLASS: &str = "space-y-1 text-sm text-gray-600";

/// The full style guide page.
#[function_component(StyleGuidePage)]
pub fn style_guide_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 p-8">
            <div class="max-w-7xl mx-auto">
                <div class="mb-12">
                    <h1 class="text-4xl font-bold mb-4">{"All Clear Gear Marketplace"}</h1>
                    <h2 class="text-3xl font-bold mb-2">{"Color Style Guide"}</h2>
                    <p class="text-gray-600 text-lg">{"Brand colors and usage guidelines for developers"}</p>
                </div>
                <PaletteSection entries={COLOR_PALETTE} />
                <GradientSection entries={GRADIENTS} />
                <UsageExamples />
                <DeveloperNotes />
            </div>
        </div>
    }
}

/// Renders the style guide to HTML.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn render_page() -> String {
    render_to_html::<StyleGuidePage>(())
}
