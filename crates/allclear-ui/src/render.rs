//! Native HTML rendering through Yew's server renderer.

use futures::executor::block_on;
use yew::ServerRenderer;
use yew::html::BaseComponent;

/// Renders `C` with `props` to HTML without hydration markers.
///
/// Blocks the calling thread until Yew's local worker pool finishes the render.
#[must_use]
pub fn render_to_html<C>(props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send + 'static,
{
    block_on(
        ServerRenderer::<C>::with_props(move || props)
            .hydratable(false)
            .render(),
    )
}
