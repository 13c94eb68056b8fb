//! Browser mount for the style guide page.

use gloo::console;

use crate::page::StyleGuidePage;

/// Mount the style guide into `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StyleGuidePage>::with_root(root).render();
    } else {
        console::warn!("no #root element; mounting style guide on <body>");
        yew::Renderer::<StyleGuidePage>::new().render();
    }
}
