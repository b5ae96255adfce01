//! Viewport class detection.
//!
//! The old mobile variant truncated the probability chart to five rows;
//! instead of a second page, one media-query probe decides the chart limit
//! at mount time.

/// Breakpoint matching the original mobile stylesheet.
#[cfg(feature = "hydrate")]
const NARROW_QUERY: &str = "(max-width: 768px)";

/// Whether the viewport is currently narrow. Always false on the server.
pub fn is_narrow() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.match_media(NARROW_QUERY).ok().flatten())
            .map_or(false, |query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
