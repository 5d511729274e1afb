//! Stateless section renderers: each takes the record and returns one HTML
//! fragment. Order of composition lives in `page.rs`, not here.

use v_htmlescape::escape;

use crate::icons;
use crate::record::{PreviewRecord, TeamMember};

/// How many services the bento grid holds.
pub const MAX_SERVICES: usize = 6;
/// How many stats the stats band holds.
pub const MAX_STATS: usize = 4;

// Bento column spans, indexed by service position.
const GRID_SPANS: [&str; 6] = ["span-3", "span-2", "span-2", "span-3", "span-2", "span-3"];

pub fn render_navbar(record: &PreviewRecord) -> String {
    format!(
        r##"<header id="site-nav">
  <div class="nav-inner">
    <span class="nav-brand">{name}</span>
    <nav class="nav-links">
      <a href="#services">Services</a>
      <a href="#stats">About</a>
      <a href="#testimonials">Testimonials</a>
      <a href="#contact">Contact</a>
    </nav>
    <a class="nav-cta" href="#contact">{cta}</a>
  </div>
</header>"##,
        name = escape(&record.business_name),
        cta = escape(record.cta_label.as_deref().unwrap_or("Get a Quote")),
    )
}

pub fn render_hero(record: &PreviewRecord) -> String {
    let glow = record
        .colors
        .as_ref()
        .map(|c| c.primary.as_str())
        .unwrap_or("#3b82f6");

    let phone = match &record.phone {
        Some(phone) => format!(
            r#"<a class="hero-phone" href="tel:{phone}">{icon} {phone}</a>"#,
            phone = escape(phone),
            icon = icons::named_icon_svg("Phone", "icon-sm"),
        ),
        None => String::new(),
    };

    let stat_cards: String = record
        .stats
        .iter()
        .take(MAX_STATS)
        .map(|stat| {
            format!(
                r#"<div class="hero-stat"><div class="hero-stat-value">{value}</div><div class="hero-stat-label">{label}</div></div>"#,
                value = escape(&stat.value),
                label = escape(&stat.label),
            )
        })
        .collect();
    let stats_grid = if stat_cards.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="hero-stats">{stat_cards}</div>"#)
    };

    format!(
        r##"<section class="hero">
  <div class="hero-glow" style="background:{glow}"></div>
  <div class="hero-content">
    <div class="hero-badge"><span class="pulse-dot"></span><span>{category} · {location}</span></div>
    <h1><span class="hero-name">{name}</span><span class="hero-tagline">{tagline}</span></h1>
    <p class="hero-description">{description}</p>
    <div class="hero-actions">
      <a class="btn-primary" href="#contact">{cta} {arrow}</a>
      {phone}
    </div>
    {stats_grid}
  </div>
</section>"##,
        glow = escape(glow),
        category = escape(&record.category),
        location = escape(&record.location),
        name = escape(&record.business_name),
        tagline = escape(&record.tagline),
        description = escape(&record.description),
        cta = escape(record.cta_label.as_deref().unwrap_or("Get a Free Quote")),
        arrow = arrow_svg(),
        phone = phone,
        stats_grid = stats_grid,
    )
}

pub fn render_stats(record: &PreviewRecord) -> String {
    let cards: String = record
        .stats
        .iter()
        .take(MAX_STATS)
        .map(|stat| {
            let description = match &stat.description {
                Some(text) => format!(r#"<p class="stat-note">{}</p>"#, escape(text)),
                None => String::new(),
            };
            format!(
                r#"<div class="stat-card"><p class="stat-value">{value}</p><p class="stat-label">{label}</p>{description}</div>"#,
                value = escape(&stat.value),
                label = escape(&stat.label),
            )
        })
        .collect();

    format!(
        r##"<section id="stats" class="band">
  <div class="section-inner">
    <div class="section-heading">
      <p class="eyebrow">By the Numbers</p>
      <h2>Trusted across {location}</h2>
      <p class="section-sub">Our track record speaks for itself.</p>
    </div>
    <div class="stats-grid">{cards}</div>
  </div>
</section>"##,
        location = escape(&record.location),
        cards = cards,
    )
}

pub fn render_services(record: &PreviewRecord) -> String {
    let cards: String = record
        .services
        .iter()
        .take(MAX_SERVICES)
        .enumerate()
        .map(|(i, service)| {
            format!(
                r#"<div class="service-card {span}"><div class="service-head"><div class="service-icon">{icon}</div><p class="service-name">{name}</p></div><p class="service-description">{description}</p></div>"#,
                span = GRID_SPANS.get(i).copied().unwrap_or("span-2"),
                icon = icons::service_icon_svg(service.icon.as_deref(), i, "icon"),
                name = escape(&service.name),
                description = escape(&service.description),
            )
        })
        .collect();

    format!(
        r##"<section id="services">
  <div class="section-inner">
    <div class="section-heading">
      <p class="eyebrow">Services</p>
      <h2>Everything you need, done right</h2>
      <p class="section-sub">{name} offers a full range of professional {category} services in {location}.</p>
    </div>
    <div class="services-grid">{cards}</div>
  </div>
</section>"##,
        name = escape(&record.business_name),
        category = escape(&record.category.to_lowercase()),
        location = escape(&record.location),
        cards = cards,
    )
}

const STEPS: [(&str, &str, &str); 3] = [
    (
        "Phone",
        "Call or Request a Quote",
        "Reach us by phone or fill out our quick form. We'll get back to you within the hour.",
    ),
    (
        "Settings",
        "We Assess &amp; Plan",
        "Our technician arrives on time, evaluates the job, and gives you a transparent upfront price.",
    ),
    (
        "CheckCircle",
        "We Get It Done",
        "Work is completed to code, cleaned up, and tested before we leave. Your satisfaction is guaranteed.",
    ),
];

pub fn render_how_it_works(record: &PreviewRecord) -> String {
    let cards: String = STEPS
        .iter()
        .enumerate()
        .map(|(i, &(icon, title, description))| {
            let connector = if i < STEPS.len() - 1 {
                r#"<div class="step-connector"></div>"#
            } else {
                ""
            };
            format!(
                r#"<div class="step">{connector}<div class="step-card"><div class="step-head"><div class="step-icon">{icon}</div><div class="step-number">{number}</div></div><h3>{title}</h3><p>{description}</p></div></div>"#,
                connector = connector,
                icon = icons::named_icon_svg(icon, "icon"),
                number = i + 1,
            )
        })
        .collect();

    format!(
        r##"<section id="how-it-works" class="band">
  <div class="section-inner">
    <div class="section-heading">
      <p class="eyebrow">How It Works</p>
      <h2>Simple. Fast. Done right.</h2>
      <p class="section-sub">Working with {name} is hassle-free from start to finish.</p>
    </div>
    <div class="steps-grid">{cards}</div>
  </div>
</section>"##,
        name = escape(&record.business_name),
        cards = cards,
    )
}

fn render_member_card(member: &TeamMember) -> String {
    let portrait = match &member.photo_url {
        Some(url) => format!(
            r#"<img class="member-photo" src="{url}" alt="{name}">"#,
            url = escape(url),
            name = escape(&member.name),
        ),
        None => format!(
            r#"<div class="member-initials">{}</div>"#,
            escape(&member.initials())
        ),
    };
    let title = match &member.title {
        Some(title) => format!(r#"<div class="member-title">{}</div>"#, escape(title)),
        None => String::new(),
    };
    format!(
        r#"<div class="member-card">{portrait}<div class="member-name">{name}</div>{title}</div>"#,
        name = escape(&member.name),
    )
}

pub fn render_team(record: &PreviewRecord) -> String {
    let (heading, sub) = if record.has_real_team() {
        (
            "Meet the team".to_string(),
            format!("The people behind {}.", escape(&record.business_name)),
        )
    } else {
        (
            "Experienced professionals".to_string(),
            format!(
                "Skilled, certified, and dedicated to serving {}.",
                escape(&record.location)
            ),
        )
    };

    let cards: String = record.team().iter().map(render_member_card).collect();

    format!(
        r##"<section id="team">
  <div class="section-inner">
    <div class="section-heading">
      <span class="pill">Our Team</span>
      <h2>{heading}</h2>
      <p class="section-sub">{sub}</p>
    </div>
    <div class="team-grid">{cards}</div>
  </div>
</section>"##,
    )
}

fn star_rating() -> String {
    let star = r##"<svg class="star" viewBox="0 0 24 24" fill="#facc15" stroke="#facc15" stroke-width="1" aria-hidden="true"><path d="m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/></svg>"##;
    format!(r#"<div class="stars">{}</div>"#, star.repeat(5))
}

/// Empty string when the record has no testimonials: the section is omitted,
/// never rendered hollow.
pub fn render_testimonials(record: &PreviewRecord) -> String {
    let testimonials = match &record.testimonials {
        Some(testimonials) if !testimonials.is_empty() => testimonials,
        _ => return String::new(),
    };

    let cards: String = testimonials
        .iter()
        .map(|t| {
            let role = match &t.role {
                Some(role) => format!(r#"<div class="quote-role">{}</div>"#, escape(role)),
                None => String::new(),
            };
            format!(
                r#"<div class="quote-card">{stars}<p class="quote-text">&ldquo;{text}&rdquo;</p><div class="quote-author"><div class="quote-avatar">{initial}</div><div><div class="quote-name">{author}</div>{role}</div></div></div>"#,
                stars = star_rating(),
                text = escape(&t.text),
                initial = escape(&t.author.chars().next().map(String::from).unwrap_or_default()),
                author = escape(&t.author),
            )
        })
        .collect();

    format!(
        r##"<section id="testimonials">
  <div class="section-inner">
    <div class="section-heading">
      <span class="pill">Testimonials</span>
      <h2>What our customers say</h2>
      <p class="section-sub">Real reviews from real {location} residents and businesses.</p>
    </div>
    <div class="quotes-grid">{cards}</div>
  </div>
</section>"##,
        location = escape(&record.location),
        cards = cards,
    )
}

fn contact_channel(icon: &str, label: &str, value: &str, href: Option<String>) -> String {
    let inner = format!(
        r#"<div class="channel-icon">{icon}</div><div><div class="channel-label">{label}</div><div class="channel-value">{value}</div></div>"#,
        icon = icons::named_icon_svg(icon, "icon"),
        label = label,
        value = escape(value),
    );
    match href {
        Some(href) => format!(
            r#"<a class="channel" href="{href}">{inner}</a>"#,
            href = escape(&href),
        ),
        None => format!(r#"<div class="channel">{inner}</div>"#),
    }
}

pub fn render_contact(record: &PreviewRecord) -> String {
    let mut channels = String::new();
    if let Some(phone) = &record.phone {
        channels.push_str(&contact_channel(
            "Phone",
            "Phone",
            phone,
            Some(format!("tel:{phone}")),
        ));
    }
    if let Some(email) = &record.email {
        channels.push_str(&contact_channel(
            "Heart",
            "Email",
            email,
            Some(format!("mailto:{email}")),
        ));
    }
    if let Some(address) = &record.address {
        channels.push_str(&contact_channel("Home", "Address", address, None));
    }

    format!(
        r##"<section id="contact" class="band">
  <div class="section-inner contact-grid">
    <div>
      <p class="eyebrow">Contact Us</p>
      <h2>Ready to get started?</h2>
      <p class="section-sub">{name} is ready to help. Reach out today and get a free quote from {contact_person}.</p>
      <div class="channels">{channels}</div>
    </div>
    <div class="quote-form">
      <h3>Request a Free Quote</h3>
      <label>Your Name<input type="text" placeholder="John Smith"></label>
      <label>Phone or Email<input type="text" placeholder="(512) 555-0100 or you@email.com"></label>
      <label>What do you need?<textarea rows="4" placeholder="Briefly describe what {category} service you need&hellip;"></textarea></label>
      <button type="button" class="btn-primary btn-block">{cta}</button>
      <p class="form-note">We'll respond within 1 hour during business hours.</p>
    </div>
  </div>
</section>"##,
        name = escape(&record.business_name),
        contact_person = escape(record.decision_maker_name.as_deref().unwrap_or("our team")),
        channels = channels,
        category = escape(&record.category.to_lowercase()),
        cta = escape(record.cta_label.as_deref().unwrap_or("Get a Free Quote")),
    )
}

pub fn render_footer(record: &PreviewRecord) -> String {
    let tagline = match &record.footer_tagline {
        Some(tagline) => escape(tagline).to_string(),
        None => format!("Proudly serving {}.", escape(&record.location)),
    };
    let website = match &record.website {
        Some(website) => format!(
            r#"<a class="footer-site" href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#,
            url = escape(website),
        ),
        None => String::new(),
    };

    format!(
        r##"<footer>
  <div class="section-inner footer-inner">
    <div>
      <div class="footer-brand">{name}</div>
      <p class="footer-tagline">{tagline}</p>
      <p class="footer-meta">{category} · {location}</p>
      {website}
    </div>
    <p class="footer-credit">&copy; {year} {name}. Website preview by <a href="https://azlabs.ai" target="_blank" rel="noopener noreferrer">AZ Labs</a>.</p>
  </div>
</footer>"##,
        name = escape(&record.business_name),
        tagline = tagline,
        category = escape(&record.category),
        location = escape(&record.location),
        website = website,
        year = chrono::Utc::now().format("%Y"),
    )
}

fn arrow_svg() -> String {
    r#"<svg class="icon-sm" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M17 8l4 4m0 0l-4 4m4-4H3"/></svg>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PreviewRecord, Service, Stat, Testimonial};

    fn record() -> PreviewRecord {
        serde_json::from_str(
            r#"{
                "slug": "smith-plumbing",
                "businessName": "Smith Plumbing",
                "tagline": "Fast, honest plumbing",
                "description": "Serving Austin since 1998.",
                "category": "Plumbing",
                "location": "Austin, TX",
                "phone": "(512) 555-0100",
                "services": [
                    {"name": "Leak Repair", "description": "Any leak, fixed."},
                    {"name": "Drains", "description": "Cleared fast."}
                ],
                "stats": [
                    {"value": "25+", "label": "Years"},
                    {"value": "4.9", "label": "Rating", "description": "Google reviews"}
                ]
            }"#,
        )
        .expect("record")
    }

    #[test]
    fn services_truncate_to_six_in_input_order() {
        let mut r = record();
        r.services = (0..9)
            .map(|i| Service {
                name: format!("Service {i}"),
                description: "d".into(),
                icon: None,
            })
            .collect();
        let html = render_services(&r);
        for i in 0..6 {
            assert!(html.contains(&format!("Service {i}")));
        }
        assert!(!html.contains("Service 6"));
        let s0 = html.find("Service 0").unwrap();
        let s5 = html.find("Service 5").unwrap();
        assert!(s0 < s5);
    }

    #[test]
    fn stats_truncate_to_four_in_input_order() {
        let mut r = record();
        r.stats = (0..6)
            .map(|i| Stat {
                value: format!("{i}00+"),
                label: format!("Stat {i}"),
                description: None,
            })
            .collect();
        let html = render_stats(&r);
        assert!(html.contains("Stat 3"));
        assert!(!html.contains("Stat 4"));
        assert!(html.find("Stat 0").unwrap() < html.find("Stat 3").unwrap());
    }

    #[test]
    fn stat_description_is_optional() {
        let html = render_stats(&record());
        assert!(html.contains("Google reviews"));
        assert_eq!(html.matches("stat-note").count(), 1);
    }

    #[test]
    fn testimonials_section_omitted_when_empty() {
        let mut r = record();
        assert_eq!(render_testimonials(&r), "");
        r.testimonials = Some(vec![]);
        assert_eq!(render_testimonials(&r), "");

        r.testimonials = Some(vec![Testimonial {
            text: "Great work".into(),
            author: "Dana R.".into(),
            role: Some("Homeowner".into()),
            avatar: None,
        }]);
        let html = render_testimonials(&r);
        assert!(html.contains("Great work"));
        assert!(html.contains("Homeowner"));
        assert!(html.contains(r#"id="testimonials""#));
    }

    #[test]
    fn team_renders_placeholders_without_members() {
        let html = render_team(&record());
        assert!(html.contains("Experienced professionals"));
        assert!(html.contains("Lead Technician"));
        assert!(html.contains("Customer Support"));
        // Placeholder initials derive like any other member.
        assert!(html.contains(">LT<"));
    }

    #[test]
    fn team_renders_given_members_in_order() {
        let mut r = record();
        r.team_members = serde_json::from_str(
            r#"[{"name": "Maria Lopez", "title": "Owner"}, {"name": "Sam Ortiz"}]"#,
        )
        .ok();
        let html = render_team(&r);
        assert!(html.contains("Meet the team"));
        assert!(html.contains("Maria Lopez"));
        assert!(!html.contains("Lead Technician"));
        assert!(html.find("Maria Lopez").unwrap() < html.find("Sam Ortiz").unwrap());
    }

    #[test]
    fn hero_interpolates_and_escapes() {
        let mut r = record();
        r.business_name = "Smith & Sons <Plumbing>".into();
        let html = render_hero(&r);
        assert!(html.contains("Smith &amp; Sons &lt;Plumbing&gt;"));
        assert!(!html.contains("<Plumbing>"));
        assert!(html.contains("tel:(512) 555-0100"));
    }

    #[test]
    fn hero_omits_phone_when_absent() {
        let mut r = record();
        r.phone = None;
        assert!(!render_hero(&r).contains("tel:"));
    }

    #[test]
    fn contact_channels_follow_the_record() {
        let mut r = record();
        r.email = Some("info@smithplumbing.com".into());
        r.address = None;
        let html = render_contact(&r);
        assert!(html.contains("mailto:info@smithplumbing.com"));
        assert!(!html.contains("Address"));
        assert!(html.contains("our team"));

        r.decision_maker_name = Some("John Smith".into());
        assert!(render_contact(&r).contains("free quote from John Smith"));
    }

    #[test]
    fn footer_falls_back_to_location_tagline() {
        let mut r = record();
        let html = render_footer(&r);
        assert!(html.contains("Proudly serving Austin, TX."));
        assert!(!html.contains("footer-site"));

        r.footer_tagline = Some("Pipes you can trust".into());
        r.website = Some("https://smithplumbing.com".into());
        let html = render_footer(&r);
        assert!(html.contains("Pipes you can trust"));
        assert!(html.contains("https://smithplumbing.com"));
    }

    #[test]
    fn navbar_uses_cta_label_override() {
        let mut r = record();
        assert!(render_navbar(&r).contains("Get a Quote"));
        r.cta_label = Some("Book Now".into());
        assert!(render_navbar(&r).contains("Book Now"));
    }
}
