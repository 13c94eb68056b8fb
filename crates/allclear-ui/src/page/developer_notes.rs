use yew::prelude::*;

use crate::components::{CODE_CHIP_TIGHT, Card, CodeChip};
use crate::palette::PRIMARY_YELLOW;

const NOTE_HEADING_CLASS: &str = "font-semibold mb-2";
const NOTE_LIST_CLASS: &str = "list-disc pl-5 space-y-1";

/// Card with layout guidance and the utility classes developers reach for.
#[function_component(DeveloperNotes)]
pub fn developer_notes() -> Html {
    html! {
        <Card title="Developer Notes" content_class="space-y-4 text-gray-700">
            <div>
                <h3 class={NOTE_HEADING_CLASS}>{"\u{26a0}\u{fe0f} Important Guidelines:"}</h3>
                <ul class={NOTE_LIST_CLASS}>
                    <li>{"Get as close as you can to amazon.com's layout. The goal is to capture the overall feel and structure of Amazon's marketplace, while using our brand colors and style."}</li>
                    <li>
                        {"Always use "}
                        <CodeChip text={PRIMARY_YELLOW} class={CODE_CHIP_TIGHT} />
                        {" (not #FFD804) for the primary yellow"}
                    </li>
                    <li>
                        {"Use inline styles for brand colors: "}
                        <CodeChip text="style={{ color: \"#FFD809\" }}" class={CODE_CHIP_TIGHT} />
                    </li>
                    <li>{"Primary yellow should always have black text for contrast"}</li>
                    <li>{"Active/selected states on dark backgrounds use yellow (#FFD809)"}</li>
                    <li>{"Use gray-400 for placeholder text and disabled states"}</li>
                </ul>
            </div>
            <div>
                <h3 class={NOTE_HEADING_CLASS}>{"\u{1f4e6} Tailwind Classes:"}</h3>
                <ul class={NOTE_LIST_CLASS}>
                    <li>
                        {"Primary button: "}
                        <CodeChip text="bg-[#FFD809] hover:bg-[#FFD809]/90 text-black" class={CODE_CHIP_TIGHT} />
                    </li>
                    <li>
                        {"Dark backgrounds: "}
                        <CodeChip text="bg-black text-white" class={CODE_CHIP_TIGHT} />
                    </li>
                    <li>
                        {"Page background: "}
                        <CodeChip text="bg-gray-100" class={CODE_CHIP_TIGHT} />
                    </li>
                </ul>
            </div>
        </Card>
    }
}
