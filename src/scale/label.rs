//! Human-readable grid scale labels.

/// Format a grid scale in meters using the most natural metric unit.
///
/// Sub-picometer scales and scales of a million kilometers and beyond fall
/// back to scientific notation in meters.
///
/// ```
/// use cosmic_scales::scale::format_grid_scale;
///
/// assert_eq!(format_grid_scale(1e-9), "1.0 nm");
/// assert_eq!(format_grid_scale(0.01), "1 cm");
/// ```
pub fn format_grid_scale(meters: f32) -> String {
    // Thresholds compare in f32 so literal boundaries (1e-9 etc.) match
    // exactly; arithmetic is done in f64 for formatting.
    let m = f64::from(meters);
    if meters >= 1e9 {
        format!("{m:.2e} m")
    } else if meters >= 1e3 {
        format!("{:.0} km", m / 1e3)
    } else if meters >= 1.0 {
        format!("{m:.0} m")
    } else if meters >= 1e-2 {
        format!("{:.0} cm", m * 1e2)
    } else if meters >= 1e-3 {
        format!("{:.0} mm", m * 1e3)
    } else if meters >= 1e-6 {
        format!("{:.0} µm", m * 1e6)
    } else if meters >= 1e-9 {
        format!("{:.1} nm", m * 1e9)
    } else if meters >= 1e-12 {
        format!("{:.1} pm", m * 1e12)
    } else {
        format!("{m:.2e} m")
    }
}
