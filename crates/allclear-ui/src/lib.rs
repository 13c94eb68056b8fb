#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! All Clear Gear marketplace style guide.
//!
//! The page is a tree of Yew function components driven by the literal tables
//! in [`palette`]. It mounts in the browser on wasm32 and renders to HTML
//! natively through Yew's server renderer.

pub mod components;
pub mod page;
pub mod palette;
pub mod tokens;

#[cfg(not(target_arch = "wasm32"))]
pub mod render;

pub use page::StyleGuidePage;
pub use palette::{COLOR_PALETTE, ColorEntry, GRADIENTS, GradientEntry, TextColor};

#[cfg(not(target_arch = "wasm32"))]
pub use page::render_page;
#[cfg(not(target_arch = "wasm32"))]
pub use render::render_to_html;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn render_page_matches_generic_renderer() {
        assert_eq!(render_to_html::<StyleGuidePage>(()), render_page());
    }

    #[test]
    fn rendered_page_has_no_hydration_markers() {
        assert!(!render_page().contains("<!--"));
    }
}
