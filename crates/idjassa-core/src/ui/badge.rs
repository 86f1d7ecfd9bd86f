use std::fmt;

/// Seller trust level shown next to listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTier {
    Gold,
    Silver,
    #[default]
    Bronze,
}

impl BadgeTier {
    /// Unknown or missing tiers display as bronze
    pub fn parse(value: &str) -> Self {
        match value {
            "gold" => BadgeTier::Gold,
            "silver" => BadgeTier::Silver,
            _ => BadgeTier::Bronze,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            BadgeTier::Gold => "🥇",
            BadgeTier::Silver => "🥈",
            BadgeTier::Bronze => "🥉",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BadgeTier::Gold => "Certifié",
            BadgeTier::Silver => "Vérifié",
            BadgeTier::Bronze => "Bronze",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTier::Gold => "badge-gold",
            BadgeTier::Silver => "badge-silver",
            BadgeTier::Bronze => "badge-bronze",
        }
    }

    pub fn html(&self) -> String {
        format!(
            r#"<span class="badge-pill {}">{} {}</span>"#,
            self.css_class(),
            self.emoji(),
            self.label()
        )
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Badge pill markup for a tier name as sent by the API
pub fn badge_html(badge: &str) -> String {
    BadgeTier::parse(badge).html()
}
