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
//! Style guide entry point.
//!
//! On wasm32 the page is mounted in the browser. Native builds print the
//! server-rendered page to stdout as a quick preview; `page_export` covers
//! the other artifact formats and snapshot checks.

#[cfg(target_arch = "wasm32")]
fn main() {
    allclear_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    print_page(&mut std::io::stdout().lock())
}

#[cfg(not(target_arch = "wasm32"))]
fn print_page(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(allclear_ui::render_page().as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_preview_prints_rendered_style_guide() -> std::io::Result<()> {
        let mut out = Vec::new();
        print_page(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("<div class=\"min-h-screen bg-gray-50 p-8\">"));
        assert!(text.contains("Color Style Guide"));
        assert!(text.ends_with("</div>\n"));
        Ok(())
    }
}
