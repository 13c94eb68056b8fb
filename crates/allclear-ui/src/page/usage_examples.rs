use yew::prelude::*;

use crate::components::{Card, CodeChip, ExampleBlock};
use crate::palette::PRIMARY_YELLOW;

/// Card showing buttons, active states, and typography in brand colors.
#[function_component(UsageExamples)]
pub fn usage_examples() -> Html {
    html! {
        <Card
            title="Color Usage Examples"
            description="Common patterns and component styling"
            class="mb-8"
            content_class="space-y-6"
        >
            <ButtonExamples />
            <ActiveStateExamples />
            <TypographyExample />
        </Card>
    }
}

#[function_component(ButtonExamples)]
fn button_examples() -> Html {
    let note = html! {
        <>
            <p><CodeChip text="bg-[#FFD809] text-black" />{" - Primary actions"}</p>
            <p><CodeChip text="bg-black text-white" />{" - Secondary actions"}</p>
        </>
    };
    html! {
        <ExampleBlock title="Buttons" note={note}>
            <div class="flex gap-4 flex-wrap">
                <button
                    class="px-6 py-3 rounded font-bold text-black hover:opacity-90 transition"
                    style={format!("background-color: {PRIMARY_YELLOW}")}
                >
                    {"Primary Button"}
                </button>
                <button class="px-6 py-3 rounded font-bold bg-black text-white hover:bg-gray-800 transition">
                    {"Secondary Button"}
                </button>
                <button class="px-6 py-3 rounded font-bold bg-white text-black border-2 border-black hover:bg-gray-100 transition">
                    {"Outline Button"}
                </button>
            </div>
        </ExampleBlock>
    }
}

#[function_component(ActiveStateExamples)]
fn active_state_examples() -> Html {
    let note = html! {
        <p>
            {"Use "}
            <CodeChip text={PRIMARY_YELLOW} />
            {" for selected/active checkbox labels on dark backgrounds"}
        </p>
    };
    html! {
        <ExampleBlock title="Active/Selected States" note={note}>
            <div class="space-y-2">
                <div class="flex items-center gap-3">
                    <input type="checkbox" class="w-4 h-4" />
                    <span style={format!("color: {PRIMARY_YELLOW}")}>
                        {format!("Active/Selected Item (Yellow {PRIMARY_YELLOW})")}
                    </span>
                </div>
                <div class="flex items-center gap-3">
                    <input type="checkbox" class="w-4 h-4" />
                    <span class="text-white">{"Inactive Item (White)"}</span>
                </div>
            </div>
        </ExampleBlock>
    }
}

#[function_component(TypographyExample)]
fn typography_example() -> Html {
    let note = html! {
        <p>
            {"Logo uses "}
            <CodeChip text={PRIMARY_YELLOW} />
            {" for \"ALL CLEAR GEAR\" and white for \"MARKETPLACE\""}
        </p>
    };
    html! {
        <ExampleBlock title="Typography on Dark Backgrounds" note={note}>
            <div class="bg-black p-6 rounded-lg space-y-2">
                <h2 class="text-2xl font-bold" style={format!("color: {PRIMARY_YELLOW}")}>
                    {"ALL CLEAR GEAR"}
                </h2>
                <h3 class="text-2xl font-bold text-white">{"MARKETPLACE"}</h3>
                <p class="text-gray-400">{"Secondary text uses gray-400"}</p>
            </div>
        </ExampleBlock>
    }
}
