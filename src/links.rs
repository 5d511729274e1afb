//! URL construction: upstream tracking endpoints and the direct-contact
//! fallback links that work without any network dependency on our side.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Base of the upstream tracking API, overridable via `UPSTREAM_BASE_URL`.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://smb.azlabs.ai";
/// Studio site, used when a card has no correlation id to notify against.
pub const STUDIO_SITE: &str = "https://azlabs.ai";
pub const STUDIO_EMAIL: &str = "hello@azlabs.ai";
const STUDIO_WHATSAPP: &str = "27812527098";

// encodeURIComponent leaves the unreserved marks alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn interested_url(base: &str, prospect_id: &str) -> String {
    format!("{}/api/preview/{}/interested", base.trim_end_matches('/'), prospect_id)
}

pub fn view_pixel_url(base: &str, prospect_id: &str) -> String {
    format!("{}/api/preview/{}/view", base.trim_end_matches('/'), prospect_id)
}

/// Prefilled email composition link for the interest fallback.
pub fn mailto_interest(business_name: &str, decision_maker_name: Option<&str>) -> String {
    let subject = format!("Interested in a website — {business_name}");
    let body = format!(
        "Hi Aubrey,\n\nI just saw the preview you built for {business_name} and I'm interested.\n\nLet's chat.\n\n— {}",
        decision_maker_name.unwrap_or(business_name)
    );
    format!(
        "mailto:{STUDIO_EMAIL}?subject={}&body={}",
        encode(&subject),
        encode(&body)
    )
}

/// Prefilled WhatsApp link for the interest fallback.
pub fn whatsapp_interest(business_name: &str, decision_maker_name: Option<&str>) -> String {
    let mut text = format!("Hi Aubrey, I'm interested in a website for {business_name}.");
    if let Some(name) = decision_maker_name {
        text.push_str(&format!(" This is {name}."));
    }
    format!("https://wa.me/{STUDIO_WHATSAPP}?text={}", encode(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_urls_embed_the_prospect_id() {
        assert_eq!(
            interested_url("https://smb.azlabs.ai", "p-123"),
            "https://smb.azlabs.ai/api/preview/p-123/interested"
        );
        assert_eq!(
            view_pixel_url("https://smb.azlabs.ai/", "p-123"),
            "https://smb.azlabs.ai/api/preview/p-123/view"
        );
    }

    #[test]
    fn mailto_link_is_component_encoded() {
        let href = mailto_interest("Smith & Sons", Some("John Smith"));
        assert!(href.starts_with("mailto:hello@azlabs.ai?subject="));
        assert!(href.contains("Smith%20%26%20Sons"));
        assert!(!href.contains('\n'));
        assert!(href.contains("body="));
        assert!(href.contains("John%20Smith"));
    }

    #[test]
    fn mailto_signs_off_with_business_name_when_no_decision_maker() {
        let href = mailto_interest("Smith Plumbing", None);
        assert!(href.contains("%E2%80%94%20Smith%20Plumbing"));
    }

    #[test]
    fn whatsapp_text_mentions_the_decision_maker_only_when_known() {
        let with = whatsapp_interest("Smith Plumbing", Some("John Smith"));
        assert!(with.starts_with("https://wa.me/27812527098?text="));
        assert!(with.contains("This%20is%20John%20Smith."));

        let without = whatsapp_interest("Smith Plumbing", None);
        assert!(!without.contains("This%20is"));
    }
}
