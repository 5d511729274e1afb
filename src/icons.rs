//! Inline SVG icon set for service cards. Name lookup with a deterministic,
//! position-indexed fallback cycle so re-renders pick the same icon.

/// Inner markup (24x24 viewBox, stroked) keyed by icon name.
const ICON_SET: &[(&str, &str)] = &[
    (
        "Wrench",
        r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>"#,
    ),
    (
        "Shield",
        r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
    ),
    ("Zap", r#"<path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z"/>"#),
    (
        "Star",
        r#"<path d="m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/>"#,
    ),
    (
        "Settings",
        r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33h.09a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82v.09a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#,
    ),
    (
        "Flame",
        r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#,
    ),
    (
        "Droplets",
        r#"<path d="M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z"/><path d="M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97"/>"#,
    ),
    (
        "CheckCircle",
        r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#,
    ),
    (
        "Phone",
        r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
    ),
    (
        "Clock",
        r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
    ),
    (
        "Home",
        r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#,
    ),
    (
        "Truck",
        r#"<path d="M10 17h4V5H2v12h3"/><path d="M20 17h2v-3.34a4 4 0 0 0-1.17-2.83L19 9h-5v8h1"/><circle cx="7.5" cy="17.5" r="2.5"/><circle cx="17.5" cy="17.5" r="2.5"/>"#,
    ),
    (
        "Heart",
        r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z"/>"#,
    ),
    (
        "Award",
        r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
    ),
    (
        "BarChart3",
        r#"<path d="M3 3v18h18"/><path d="M18 17V9"/><path d="M13 17V5"/><path d="M8 17v-3"/>"#,
    ),
    (
        "Layers",
        r#"<polygon points="12 2 2 7 12 12 22 7 12 2"/><polyline points="2 17 12 22 22 17"/><polyline points="2 12 12 17 22 12"/>"#,
    ),
];

/// Positional defaults used when a service names no icon, or an unknown one.
const FALLBACK_CYCLE: [&str; 6] = ["Wrench", "Shield", "Zap", "Settings", "Flame", "Droplets"];

fn lookup(name: &str) -> Option<&'static str> {
    ICON_SET
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, markup)| *markup)
}

/// Resolve the icon for the service at `index`, falling back to the cycle.
pub fn service_icon(name: Option<&str>, index: usize) -> &'static str {
    name.and_then(lookup)
        .unwrap_or_else(|| lookup(FALLBACK_CYCLE[index % FALLBACK_CYCLE.len()]).unwrap_or(""))
}

/// Render a full `<svg>` element for the service at `index`.
pub fn service_icon_svg(name: Option<&str>, index: usize, class: &str) -> String {
    format!(
        r#"<svg class="{class}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{inner}</svg>"#,
        class = class,
        inner = service_icon(name, index),
    )
}

/// Icon by exact name, empty when unknown. Used by the fixed sections whose
/// icons are not data-driven.
pub fn named_icon_svg(name: &str, class: &str) -> String {
    format!(
        r#"<svg class="{class}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{inner}</svg>"#,
        class = class,
        inner = lookup(name).unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_icons_resolve() {
        assert!(service_icon(Some("Droplets"), 0).contains("M7 16.3"));
        assert!(service_icon(Some("Zap"), 3).contains("M13 2"));
    }

    #[test]
    fn unknown_or_missing_names_fall_back_by_position() {
        // Index decides, not the unrecognized name.
        assert_eq!(service_icon(Some("NoSuchIcon"), 1), lookup("Shield").unwrap());
        assert_eq!(service_icon(None, 0), lookup("Wrench").unwrap());
        assert_eq!(service_icon(None, 6), lookup("Wrench").unwrap());
        assert_eq!(service_icon(None, 11), lookup("Droplets").unwrap());
    }

    #[test]
    fn fallback_is_stable_across_renders() {
        let first = service_icon(None, 4);
        let second = service_icon(None, 4);
        assert_eq!(first, second);
    }
}
