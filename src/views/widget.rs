//! Interest-card markup. The outer shell renders once per page; the body is
//! the htmx swap target that the interested endpoint replaces with the
//! confirmed or error pane.

use v_htmlescape::escape;

use crate::links;
use crate::widget::{CardState, InterestCard, Visibility};

const DISMISS_BUTTON: &str = r#"<button type="button" class="card-dismiss" data-dismiss aria-label="Dismiss"><svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M6 18L18 6M6 6l12 12"/></svg></button>"#;

pub fn render_interest_card(card: &InterestCard) -> String {
    if card.visibility() == Visibility::Dismissed {
        return String::new();
    }
    let hidden = if card.visibility() == Visibility::Hidden {
        " hidden"
    } else {
        ""
    };
    let exiting = if card.visibility() == Visibility::Exiting {
        " exiting"
    } else {
        ""
    };
    format!(
        r##"<div id="interest-card" class="interest-card{exiting}" role="dialog" aria-label="Preview interest prompt"{hidden}>
  <div class="card-accent"></div>
  <div id="interest-card-body" class="card-body">{body}</div>
</div>"##,
        body = render_card_body(card),
    )
}

/// The swap-target content for the card's current state. `Idle` and
/// `Loading` share a pane; exactly one pane is ever rendered.
pub fn render_card_body(card: &InterestCard) -> String {
    match card.state() {
        CardState::Idle | CardState::Loading => idle_pane(card),
        CardState::Confirmed => confirmed_pane(card),
        CardState::Error => error_pane(card),
    }
}

fn idle_pane(card: &InterestCard) -> String {
    let action = match &card.prospect_id {
        Some(prospect_id) => {
            let loading = card.state() == CardState::Loading;
            let decision_maker = match &card.decision_maker_name {
                Some(name) => format!(
                    r#"<input type="hidden" name="decision_maker_name" value="{}">"#,
                    escape(name)
                ),
                None => String::new(),
            };
            let label = if loading {
                r#"<span class="spinner" aria-hidden="true"></span> Sending..."#.to_string()
            } else {
                "Yes, I'm interested".to_string()
            };
            let disabled = if loading { " disabled" } else { "" };
            format!(
                r##"<form hx-post="/api/preview/{prospect_id}/interested" hx-target="#interest-card-body" hx-swap="innerHTML" hx-disabled-elt="find button">
      <input type="hidden" name="business_name" value="{business_name}">
      {decision_maker}
      <button type="submit" class="card-cta"{disabled}>{label}</button>
    </form>"##,
                prospect_id = escape(prospect_id),
                business_name = escape(&card.business_name),
            )
        }
        // No correlation id: a plain external link, no network call.
        None => format!(
            r#"<a class="card-cta" href="{site}" target="_blank" rel="noopener noreferrer">Yes, I'm interested</a>"#,
            site = links::STUDIO_SITE,
        ),
    };

    format!(
        r##"<div class="card-head">
      <div class="card-title">
        <p class="card-kicker">AZ Labs Preview</p>
        <p class="card-headline">Like what you see?</p>
      </div>
      {dismiss}
    </div>
    <p class="card-copy">We built this preview specifically for <strong>{business_name}</strong> &mdash; for free. If you want a site like this live and working for your business, let's chat.</p>
    {action}
    <p class="card-footnote">No commitment. Just a conversation.</p>"##,
        dismiss = DISMISS_BUTTON,
        business_name = escape(&card.business_name),
        action = action,
    )
}

fn confirmed_pane(card: &InterestCard) -> String {
    let thanks = match card.first_name() {
        Some(first) => format!("Thanks, {}!", escape(first)),
        None => "Got it &mdash; thanks!".to_string(),
    };
    format!(
        r##"<div class="card-head">
      <div class="card-title">
        <p class="card-kicker confirmed">You're on the list</p>
        <p class="card-headline">{thanks}</p>
      </div>
      {dismiss}
    </div>
    <p class="card-copy">Aubrey from AZ Labs will be in touch within <strong>24 hours</strong>. Want to connect sooner?</p>
    {fallbacks}
    <p class="card-footnote">hello@azlabs.ai &middot; azlabs.ai</p>"##,
        dismiss = DISMISS_BUTTON,
        fallbacks = fallback_links(card),
    )
}

fn error_pane(card: &InterestCard) -> String {
    format!(
        r##"<div class="card-head">
      <p class="card-headline">Something went wrong</p>
      {dismiss}
    </div>
    <p class="card-copy">No worries &mdash; reach us directly:</p>
    {fallbacks}"##,
        dismiss = DISMISS_BUTTON,
        fallbacks = fallback_links(card),
    )
}

// Direct-contact paths that bypass the network call entirely.
fn fallback_links(card: &InterestCard) -> String {
    let mailto = links::mailto_interest(&card.business_name, card.decision_maker_name.as_deref());
    let whatsapp = links::whatsapp_interest(&card.business_name, card.decision_maker_name.as_deref());
    format!(
        r#"<a class="card-cta" href="{mailto}">Email Aubrey</a>
    <a class="card-cta card-cta-secondary" href="{whatsapp}" target="_blank" rel="noopener noreferrer">WhatsApp</a>"#,
        mailto = escape(&mailto),
        whatsapp = escape(&whatsapp),
    )
}
