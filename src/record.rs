//! The JSON record shape written by the enrichment pipeline and consumed by
//! this app. One document per prospect, stored as `data/{slug}.json`.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub description: String,
    /// Icon name from the shared icon set, e.g. "Wrench", "Shield", "Star".
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub role: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub title: Option<String>,
    pub photo_url: Option<String>,
}

impl TeamMember {
    /// First letter of up to the first two whitespace-separated name tokens,
    /// uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Brand colours. Pages fall back to the built-in neutral palette when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub primary: String,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRecord {
    /// URL slug. Must match the filename: `data/{slug}.json`.
    pub slug: String,
    pub business_name: String,
    /// One-liner value proposition for the hero.
    pub tagline: String,
    /// Sub-tagline / hero description paragraph.
    pub description: String,
    /// Business category, e.g. "Plumbing", "Dental Practice".
    pub category: String,
    /// City, State.
    pub location: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    /// Primary decision maker, used in personalized messaging.
    pub decision_maker_name: Option<String>,
    /// Up to 6 are rendered in the bento grid.
    pub services: Vec<Service>,
    /// Up to 4 are rendered.
    pub stats: Vec<Stat>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub team_members: Option<Vec<TeamMember>>,
    pub colors: Option<BrandColors>,
    /// Call-to-action label in hero and navbar.
    pub cta_label: Option<String>,
    pub footer_tagline: Option<String>,
    /// Correlation id for the interest and view tracking endpoints.
    pub prospect_id: Option<String>,
}

impl PreviewRecord {
    /// Team members to render: the record's own, or the three placeholder
    /// entries when none are given.
    pub fn team(&self) -> Vec<TeamMember> {
        match &self.team_members {
            Some(members) if !members.is_empty() => members.clone(),
            _ => placeholder_team(),
        }
    }

    pub fn has_real_team(&self) -> bool {
        self.team_members
            .as_ref()
            .is_some_and(|members| !members.is_empty())
    }
}

pub fn placeholder_team() -> Vec<TeamMember> {
    [
        ("Lead Technician", "Senior Specialist"),
        ("Project Manager", "Operations"),
        ("Customer Support", "Client Relations"),
    ]
    .into_iter()
    .map(|(name, title)| TeamMember {
        name: name.to_string(),
        title: Some(title.to_string()),
        photo_url: None,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record_from_camel_case_json() {
        let raw = r##"{
            "slug": "smith-plumbing",
            "businessName": "Smith Plumbing",
            "tagline": "Fast, honest plumbing",
            "description": "Serving Austin since 1998.",
            "category": "Plumbing",
            "location": "Austin, TX",
            "phone": "(512) 555-0100",
            "decisionMakerName": "John Smith",
            "services": [{"name": "Leak Repair", "description": "Any leak, fixed.", "icon": "Droplets"}],
            "stats": [{"value": "25+", "label": "Years in business"}],
            "colors": {"primary": "#1a56db"},
            "prospectId": "p-123"
        }"##;
        let record: PreviewRecord = serde_json::from_str(raw).expect("record");
        assert_eq!(record.slug, "smith-plumbing");
        assert_eq!(record.business_name, "Smith Plumbing");
        assert_eq!(record.services[0].icon.as_deref(), Some("Droplets"));
        assert_eq!(record.colors.as_ref().unwrap().primary, "#1a56db");
        assert!(record.colors.as_ref().unwrap().secondary.is_none());
        assert_eq!(record.prospect_id.as_deref(), Some("p-123"));
        assert!(record.testimonials.is_none());
    }

    #[test]
    fn placeholder_team_used_only_when_members_absent_or_empty() {
        let mut record: PreviewRecord = serde_json::from_str(minimal()).expect("record");
        assert!(!record.has_real_team());
        assert_eq!(record.team().len(), 3);
        assert_eq!(record.team()[0].name, "Lead Technician");

        record.team_members = Some(vec![]);
        assert!(!record.has_real_team());
        assert_eq!(record.team().len(), 3);

        record.team_members = Some(vec![TeamMember {
            name: "Maria Lopez".into(),
            title: None,
            photo_url: None,
        }]);
        assert!(record.has_real_team());
        let team = record.team();
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].name, "Maria Lopez");
    }

    #[test]
    fn initials_take_first_two_name_tokens_uppercased() {
        let member = |name: &str| TeamMember {
            name: name.into(),
            title: None,
            photo_url: None,
        };
        assert_eq!(member("maria lopez").initials(), "ML");
        assert_eq!(member("Cher").initials(), "C");
        assert_eq!(member("Jean claude van Damme").initials(), "JC");
        assert_eq!(member("  padded   name ").initials(), "PN");
    }

    fn minimal() -> &'static str {
        r#"{
            "slug": "a",
            "businessName": "A",
            "tagline": "t",
            "description": "d",
            "category": "c",
            "location": "l",
            "services": [],
            "stats": []
        }"#
    }
}
