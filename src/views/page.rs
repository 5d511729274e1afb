//! Page composition: the document shell, the fixed section order, the
//! optional brand-style fragment, the interest card, and the view pixel.

use v_htmlescape::escape;

use super::{sections, widget as widget_views};
use crate::links;
use crate::record::{BrandColors, PreviewRecord};
use crate::widget::{self, InterestCard};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Page-scoped brand overrides. Emitted only when the record carries a
/// primary color; each custom property is emitted only when its component
/// color is present. No colors, no fragment.
pub fn render_brand_style(colors: Option<&BrandColors>) -> String {
    let Some(colors) = colors else {
        return String::new();
    };
    let mut props = format!("--brand-primary:{};", escape(&colors.primary));
    if let Some(secondary) = &colors.secondary {
        props.push_str(&format!("--brand-secondary:{};", escape(secondary)));
    }
    if let Some(accent) = &colors.accent {
        props.push_str(&format!("--brand-accent:{};", escape(accent)));
    }
    format!("<style>:root{{{props}}}</style>")
}

pub fn render_preview_page(record: &PreviewRecord, upstream_base: &str) -> String {
    let card = InterestCard::new(
        record.business_name.clone(),
        record.prospect_id.clone(),
        record.decision_maker_name.clone(),
    );

    let pixel = match record.prospect_id.as_deref() {
        Some(prospect_id) => format!(
            r#"<img class="view-pixel" src="{src}" alt="" width="1" height="1" aria-hidden="true">"#,
            src = escape(&links::view_pixel_url(upstream_base, prospect_id)),
        ),
        None => String::new(),
    };

    let body = [
        sections::render_navbar(record),
        sections::render_hero(record),
        sections::render_stats(record),
        sections::render_services(record),
        sections::render_how_it_works(record),
        sections::render_team(record),
        sections::render_testimonials(record),
        sections::render_contact(record),
        sections::render_footer(record),
    ]
    .concat();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} &mdash; Website Preview</title>
    <meta name="description" content="{tagline}">
    <script src="{htmx}"></script>
    <style>{css}</style>
    {brand_style}
</head>
<body>
{body}
{card}
{pixel}
{script}
</body>
</html>"##,
        title = escape(&record.business_name),
        tagline = escape(&record.tagline),
        htmx = HTMX_SRC,
        css = PAGE_CSS,
        brand_style = render_brand_style(record.colors.as_ref()),
        body = body,
        card = widget_views::render_interest_card(&card),
        pixel = pixel,
        script = render_page_script(),
    )
}

/// The generic response for any slug with no matching or parseable record.
pub fn render_not_found() -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Preview Not Found</title>
    <style>{css}</style>
</head>
<body>
<section class="hero">
  <div class="hero-content">
    <div class="hero-badge"><span>404</span></div>
    <h1><span class="hero-name">Preview Not Found</span></h1>
    <p class="hero-description">This link doesn't match any preview we've built. The page may have moved, or the address may be mistyped.</p>
    <div class="hero-actions">
      <a class="btn-primary" href="{site}">Visit AZ Labs</a>
    </div>
  </div>
</section>
</body>
</html>"##,
        css = PAGE_CSS,
        site = links::STUDIO_SITE,
    )
}

// Reveal timing, scroll threshold, and exit duration all come from the
// widget module so the script and the state machine cannot drift apart.
fn render_page_script() -> String {
    format!(
        r##"<script>
(function () {{
  var nav = document.getElementById('site-nav');
  var onNavScroll = function () {{
    if (nav) nav.classList.toggle('scrolled', window.scrollY > 20);
  }};
  window.addEventListener('scroll', onNavScroll, {{ passive: true }});
  onNavScroll();

  var card = document.getElementById('interest-card');
  if (!card) return;
  var dismissed = false;
  var revealed = false;
  var reveal = function () {{
    if (dismissed || revealed) return;
    revealed = true;
    card.removeAttribute('hidden');
  }};
  var timer = setTimeout(reveal, {reveal_ms});
  var onScroll = function () {{
    var total = document.documentElement.scrollHeight - window.innerHeight;
    if (total > 0 && window.scrollY / total >= {scroll_fraction}) {{
      reveal();
      window.removeEventListener('scroll', onScroll);
    }}
  }};
  window.addEventListener('scroll', onScroll, {{ passive: true }});
  card.addEventListener('click', function (event) {{
    if (!event.target.closest('[data-dismiss]')) return;
    dismissed = true;
    clearTimeout(timer);
    window.removeEventListener('scroll', onScroll);
    card.classList.add('exiting');
    setTimeout(function () {{ card.remove(); }}, {exit_ms});
  }});
}})();
</script>"##,
        reveal_ms = widget::REVEAL_DELAY.as_millis(),
        scroll_fraction = widget::SCROLL_REVEAL_FRACTION,
        exit_ms = widget::EXIT_ANIMATION.as_millis(),
    )
}

const PAGE_CSS: &str = r#"
:root {
    color-scheme: dark;
    --brand-primary: #a1a1aa;
    --brand-secondary: #71717a;
    --brand-accent: #6366f1;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: #09090b;
    color: #e4e4e7;
}
a { color: inherit; }
.icon { width: 20px; height: 20px; }
.icon-sm { width: 16px; height: 16px; vertical-align: -3px; }
#site-nav {
    position: fixed;
    top: 0; left: 0; right: 0;
    z-index: 50;
    padding: 1.25rem 0;
    transition: all 0.3s ease;
}
#site-nav.scrolled {
    background: rgba(9, 9, 11, 0.95);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(39, 39, 42, 0.5);
    padding: 0.75rem 0;
}
.nav-inner {
    width: min(1024px, 94vw);
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-brand { font-weight: 700; font-size: 1.125rem; letter-spacing: -0.01em; }
.nav-links { display: flex; gap: 1.5rem; }
.nav-links a { font-size: 0.875rem; color: #a1a1aa; text-decoration: none; }
.nav-links a:hover { color: #f4f4f5; }
.nav-cta {
    padding: 0.5rem 1rem;
    border-radius: 999px;
    background: #f4f4f5;
    color: #18181b;
    font-size: 0.875rem;
    font-weight: 600;
    text-decoration: none;
}
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 6rem 1.5rem 5rem;
    position: relative;
    overflow: hidden;
}
.hero-glow {
    position: absolute;
    top: 0; left: 50%;
    transform: translateX(-50%);
    width: 800px; height: 600px;
    border-radius: 50%;
    opacity: 0.06;
    filter: blur(64px);
}
.hero-content { position: relative; text-align: center; max-width: 48rem; margin: 0 auto; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 999px;
    background: rgba(24, 24, 27, 0.8);
    border: 1px solid #27272a;
    margin-bottom: 2rem;
    font-size: 0.875rem;
    color: #a1a1aa;
}
.pulse-dot { width: 8px; height: 8px; border-radius: 50%; background: #34d399; }
.hero h1 { margin: 0 0 1.5rem; line-height: 1.05; letter-spacing: -0.02em; }
.hero-name { display: block; font-size: clamp(2.5rem, 6vw, 4.5rem); color: #f4f4f5; }
.hero-tagline {
    display: block;
    margin-top: 0.5rem;
    font-size: clamp(1.75rem, 4vw, 3rem);
    background: linear-gradient(90deg, #71717a, #d4d4d8, #71717a);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-description { font-size: 1.125rem; color: #71717a; max-width: 42rem; margin: 0 auto 2.5rem; line-height: 1.7; }
.hero-actions { display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 1rem; }
.btn-primary {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border-radius: 999px;
    border: none;
    background: #f4f4f5;
    color: #18181b;
    font-weight: 600;
    font-size: 0.875rem;
    text-decoration: none;
    cursor: pointer;
}
.btn-primary:hover { background: #ffffff; }
.btn-block { width: 100%; justify-content: center; }
.hero-phone { display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: #a1a1aa; text-decoration: none; }
.hero-phone:hover { color: #f4f4f5; }
.hero-stats { margin-top: 5rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.hero-stat { padding: 1rem; border-radius: 1rem; background: rgba(24, 24, 27, 0.5); border: 1px solid rgba(39, 39, 42, 0.5); }
.hero-stat-value { font-size: 1.5rem; font-weight: 700; color: #f4f4f5; }
.hero-stat-label { font-size: 0.75rem; color: #71717a; margin-top: 0.25rem; }
section { padding: 6rem 1.5rem; }
.band { background: rgba(24, 24, 27, 0.2); }
.section-inner { width: min(1024px, 94vw); margin: 0 auto; }
.section-heading { text-align: center; margin-bottom: 3rem; }
.eyebrow { font-size: 0.875rem; font-weight: 500; color: #71717a; text-transform: uppercase; letter-spacing: 0.08em; margin-bottom: 1rem; }
.section-heading h2 { font-size: clamp(1.875rem, 4vw, 2.5rem); color: #f4f4f5; margin: 0 0 1rem; letter-spacing: -0.01em; }
.section-sub { color: #71717a; max-width: 36rem; margin: 0 auto; }
.pill { display: inline-block; border: 1px solid #27272a; padding: 0.375rem 1rem; border-radius: 999px; font-size: 0.875rem; color: #a1a1aa; margin-bottom: 1.5rem; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; }
.stat-card { padding: 1.5rem; border-radius: 1rem; background: rgba(24, 24, 27, 0.5); border: 1px solid rgba(39, 39, 42, 0.5); text-align: center; }
.stat-card:hover { border-color: rgba(63, 63, 70, 0.5); }
.stat-value { font-size: 2rem; font-weight: 700; color: #f4f4f5; margin: 0 0 0.25rem; }
.stat-label { font-size: 0.875rem; color: #a1a1aa; margin: 0 0 0.25rem; }
.stat-note { font-size: 0.75rem; color: #52525b; margin: 0; }
.services-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 0.75rem; }
.span-2 { grid-column: span 2; }
.span-3 { grid-column: span 3; }
.service-card { border: 1px solid rgba(39, 39, 42, 0.5); background: rgba(24, 24, 27, 0.5); border-radius: 1rem; padding: 1.5rem; }
.service-card:hover { border-color: rgba(63, 63, 70, 0.5); }
.service-head { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; }
.service-icon { width: 40px; height: 40px; border-radius: 0.75rem; background: #27272a; display: flex; align-items: center; justify-content: center; color: #a1a1aa; flex-shrink: 0; }
.service-name { font-weight: 600; color: #f4f4f5; margin: 0; }
.service-description { color: #71717a; font-size: 0.875rem; line-height: 1.6; margin: 0; }
.steps-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 2rem; }
.step { position: relative; }
.step-connector { display: none; }
.step-card { padding: 2rem; border-radius: 1rem; border: 1px solid rgba(39, 39, 42, 0.5); background: rgba(24, 24, 27, 0.5); }
.step-head { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
.step-icon { width: 48px; height: 48px; border-radius: 1rem; background: #27272a; display: flex; align-items: center; justify-content: center; color: #a1a1aa; }
.step-number { width: 32px; height: 32px; border-radius: 50%; background: #18181b; border: 1px solid #27272a; display: flex; align-items: center; justify-content: center; font-size: 0.875rem; font-weight: 700; color: #71717a; }
.step-card h3 { color: #f4f4f5; margin: 0 0 0.5rem; font-size: 1.125rem; }
.step-card p { color: #71717a; font-size: 0.875rem; line-height: 1.6; margin: 0; }
.team-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; }
.member-card { display: flex; flex-direction: column; align-items: center; text-align: center; padding: 1.5rem; border-radius: 1rem; border: 1px solid rgba(39, 39, 42, 0.5); background: rgba(24, 24, 27, 0.5); }
.member-photo { width: 80px; height: 80px; border-radius: 50%; object-fit: cover; margin-bottom: 1rem; }
.member-initials { width: 80px; height: 80px; border-radius: 50%; background: #27272a; display: flex; align-items: center; justify-content: center; margin-bottom: 1rem; font-size: 1.25rem; font-weight: 700; color: #d4d4d8; }
.member-name { font-weight: 600; color: #f4f4f5; font-size: 0.875rem; }
.member-title { font-size: 0.75rem; color: #71717a; margin-top: 0.25rem; }
.quotes-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
.quote-card { padding: 1.5rem; border-radius: 1rem; border: 1px solid rgba(39, 39, 42, 0.5); background: rgba(24, 24, 27, 0.5); display: flex; flex-direction: column; gap: 1rem; }
.stars { display: flex; gap: 0.125rem; }
.star { width: 16px; height: 16px; }
.quote-text { color: #d4d4d8; font-size: 0.875rem; line-height: 1.6; margin: 0; flex: 1; }
.quote-author { display: flex; align-items: center; gap: 0.75rem; padding-top: 0.5rem; border-top: 1px solid #27272a; }
.quote-avatar { width: 32px; height: 32px; border-radius: 50%; background: #3f3f46; display: flex; align-items: center; justify-content: center; font-size: 0.75rem; font-weight: 700; color: #d4d4d8; }
.quote-name { font-size: 0.75rem; font-weight: 600; color: #e4e4e7; }
.quote-role { font-size: 0.6875rem; color: #71717a; }
.contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: start; }
.contact-grid h2 { font-size: clamp(2rem, 4vw, 3rem); color: #f4f4f5; margin: 0 0 1.5rem; }
.channels { display: flex; flex-direction: column; gap: 1rem; margin-top: 2.5rem; }
.channel { display: flex; align-items: center; gap: 1rem; padding: 1rem; border-radius: 1rem; border: 1px solid rgba(39, 39, 42, 0.5); background: rgba(24, 24, 27, 0.5); text-decoration: none; }
.channel-icon { width: 40px; height: 40px; border-radius: 0.75rem; background: #27272a; display: flex; align-items: center; justify-content: center; color: #a1a1aa; flex-shrink: 0; }
.channel-label { font-size: 0.6875rem; color: #71717a; text-transform: uppercase; letter-spacing: 0.08em; }
.channel-value { font-size: 0.875rem; font-weight: 500; color: #f4f4f5; }
.quote-form { padding: 2rem; border-radius: 1rem; border: 1px solid rgba(39, 39, 42, 0.5); background: rgba(24, 24, 27, 0.5); }
.quote-form h3 { color: #f4f4f5; margin: 0 0 1.5rem; font-size: 1.25rem; }
.quote-form label { display: block; font-size: 0.6875rem; font-weight: 600; color: #71717a; text-transform: uppercase; letter-spacing: 0.08em; margin-bottom: 1rem; }
.quote-form input, .quote-form textarea {
    display: block;
    width: 100%;
    margin-top: 0.5rem;
    border-radius: 0.75rem;
    border: 1px solid #27272a;
    background: #18181b;
    padding: 0.75rem 1rem;
    font-size: 0.875rem;
    color: #f4f4f5;
    resize: none;
}
.quote-form input:focus, .quote-form textarea:focus { outline: none; border-color: #52525b; }
.form-note { text-align: center; font-size: 0.75rem; color: #52525b; margin: 0.75rem 0 0; }
footer { padding: 4rem 1.5rem; border-top: 1px solid rgba(24, 24, 27, 0.5); }
.footer-inner { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 2rem; align-items: end; }
.footer-brand { font-weight: 700; color: #f4f4f5; font-size: 1.125rem; }
.footer-tagline { color: #71717a; margin: 0.5rem 0 0.25rem; }
.footer-meta { color: #52525b; font-size: 0.875rem; margin: 0; }
.footer-site { display: inline-block; margin-top: 0.5rem; font-size: 0.875rem; color: #a1a1aa; }
.footer-credit { color: #52525b; font-size: 0.75rem; }
.footer-credit a { color: #71717a; }
.interest-card {
    position: fixed;
    bottom: 1.5rem; right: 1.5rem;
    z-index: 9999;
    max-width: 24rem;
    width: calc(100vw - 3rem);
    border-radius: 1rem;
    background: #ffffff;
    color: #18181b;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
    overflow: hidden;
    transition: all 0.3s ease-out;
}
.interest-card.exiting { opacity: 0; transform: translateY(1rem) scale(0.95); }
.card-accent { height: 4px; background: linear-gradient(90deg, #6366f1, #8b5cf6, #4f46e5); }
.card-body { padding: 1rem 1.25rem 1.25rem; }
.card-head { display: flex; align-items: flex-start; justify-content: space-between; gap: 0.75rem; margin-bottom: 0.75rem; }
.card-kicker { font-size: 0.6875rem; font-weight: 600; color: #4f46e5; text-transform: uppercase; letter-spacing: 0.05em; margin: 0 0 0.125rem; }
.card-kicker.confirmed { color: #059669; }
.card-headline { font-size: 0.875rem; font-weight: 700; color: #18181b; margin: 0; }
.card-dismiss { flex-shrink: 0; width: 24px; height: 24px; border: none; border-radius: 50%; background: transparent; color: #a1a1aa; cursor: pointer; padding: 4px; }
.card-dismiss:hover { color: #52525b; background: #f4f4f5; }
.card-copy { font-size: 0.875rem; color: #52525b; line-height: 1.5; margin: 0 0 1rem; }
.card-cta {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    width: 100%;
    padding: 0.625rem 1rem;
    border: none;
    border-radius: 0.75rem;
    background: #4f46e5;
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    margin-bottom: 0.5rem;
}
.card-cta:hover { background: #6366f1; }
.card-cta:disabled { opacity: 0.7; cursor: not-allowed; }
.card-cta-secondary { background: transparent; border: 1px solid #e4e4e7; color: #3f3f46; }
.card-cta-secondary:hover { background: #fafafa; }
.card-footnote { text-align: center; font-size: 0.6875rem; color: #a1a1aa; margin: 0.5rem 0 0; }
.spinner {
    width: 14px; height: 14px;
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-top-color: #ffffff;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.view-pixel { position: absolute; width: 1px; height: 1px; opacity: 0; }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero-stats { grid-template-columns: repeat(2, 1fr); }
    .services-grid { grid-template-columns: 1fr; }
    .span-2, .span-3 { grid-column: span 1; }
    .contact-grid { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(extra: &str) -> PreviewRecord {
        let raw = format!(
            r#"{{
                "slug": "smith-plumbing",
                "businessName": "Smith Plumbing",
                "tagline": "Fast, honest plumbing",
                "description": "Serving Austin since 1998.",
                "category": "Plumbing",
                "location": "Austin, TX",
                "services": [{{"name": "Leak Repair", "description": "Any leak, fixed."}}],
                "stats": [{{"value": "25+", "label": "Years"}}]
                {extra}
            }}"#
        );
        serde_json::from_str(&raw).expect("record")
    }

    #[test]
    fn sections_render_in_the_fixed_order() {
        let html = render_preview_page(
            &record(r#", "testimonials": [{"text": "Great", "author": "Dana"}]"#),
            links::DEFAULT_UPSTREAM_BASE,
        );
        let order = [
            r#"id="site-nav""#,
            r#"class="hero""#,
            r#"id="stats""#,
            r#"id="services""#,
            r#"id="how-it-works""#,
            r#"id="team""#,
            r#"id="testimonials""#,
            r#"id="contact""#,
            "<footer>",
            r#"id="interest-card""#,
        ];
        let mut last = 0;
        for marker in order {
            let at = html.find(marker).unwrap_or_else(|| panic!("missing {marker}"));
            assert!(at > last, "{marker} out of order");
            last = at;
        }
    }

    #[test]
    fn missing_testimonials_omit_the_section_entirely() {
        let html = render_preview_page(&record(""), links::DEFAULT_UPSTREAM_BASE);
        assert!(!html.contains(r#"id="testimonials""#));
    }

    #[test]
    fn pixel_rendered_only_with_a_prospect_id() {
        let without = render_preview_page(&record(""), links::DEFAULT_UPSTREAM_BASE);
        assert!(!without.contains("view-pixel"));

        let with = render_preview_page(
            &record(r#", "prospectId": "p-123""#),
            links::DEFAULT_UPSTREAM_BASE,
        );
        assert!(with.contains(r#"src="https://smb.azlabs.ai/api/preview/p-123/view""#));
    }

    #[test]
    fn page_title_names_the_business() {
        let html = render_preview_page(&record(""), links::DEFAULT_UPSTREAM_BASE);
        assert!(html.contains("<title>Smith Plumbing &mdash; Website Preview</title>"));
        assert!(html.contains(r#"content="Fast, honest plumbing""#));
    }

    #[test]
    fn widget_timing_constants_reach_the_page_script() {
        let html = render_preview_page(&record(""), links::DEFAULT_UPSTREAM_BASE);
        assert!(html.contains("setTimeout(reveal, 8000)"));
        assert!(html.contains(">= 0.35"));
        assert!(html.contains("}, 300)"));
    }

    #[test]
    fn brand_style_emits_only_present_components() {
        let primary_only: BrandColors =
            serde_json::from_str(r##"{"primary": "#1a56db"}"##).expect("colors");
        let fragment = render_brand_style(Some(&primary_only));
        assert!(fragment.contains("--brand-primary:#1a56db;"));
        assert_eq!(fragment.matches("--brand-").count(), 1);

        let full: BrandColors = serde_json::from_str(
            r##"{"primary": "#1a56db", "secondary": "#111827", "accent": "#f59e0b"}"##,
        )
        .expect("colors");
        let fragment = render_brand_style(Some(&full));
        assert_eq!(fragment.matches("--brand-").count(), 3);
        assert!(fragment.contains("--brand-accent:#f59e0b;"));
    }

    #[test]
    fn no_primary_color_means_no_fragment() {
        assert_eq!(render_brand_style(None), "");
        let html = render_preview_page(&record(""), links::DEFAULT_UPSTREAM_BASE);
        assert!(!html.contains("--brand-primary:#"));
    }

    #[test]
    fn brand_fragment_lands_in_the_page_head() {
        let html = render_preview_page(
            &record(r##", "colors": {"primary": "#1a56db"}"##),
            links::DEFAULT_UPSTREAM_BASE,
        );
        assert!(html.contains("<style>:root{--brand-primary:#1a56db;}</style>"));
    }

    #[test]
    fn not_found_page_leaks_no_record_content() {
        let html = render_not_found();
        assert!(html.contains("Preview Not Found"));
        assert!(!html.contains("Smith Plumbing"));
        assert!(!html.contains(r#"id="interest-card""#));
    }
}
