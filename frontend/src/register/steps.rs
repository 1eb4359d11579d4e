/// Fraction of the viewport height a section has to cross to become active.
pub const ACTIVE_LINE: f64 = 0.55;
/// Gap left above a section after jumping to it.
pub const SCROLL_OFFSET: f64 = 50.0;

/// Index of the section whose viewport-relative `[top, bottom)` straddles the
/// activation line. `None` between sections; callers keep the previous step.
pub fn active_step(viewport_height: f64, section_bounds: &[(f64, f64)]) -> Option<usize> {
    let line = viewport_height * ACTIVE_LINE;
    section_bounds
        .iter()
        .position(|&(top, bottom)| top <= line && bottom > line)
}

/// Absolute scroll position that puts a section (at viewport-relative `top`)
/// just below the top edge.
pub fn scroll_target(section_top: f64, scroll_y: f64) -> f64 {
    (scroll_y + section_top - SCROLL_OFFSET).max(0.0)
}
