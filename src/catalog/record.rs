//! The full listing record behind each card.

use crate::filter::Card;

/// One imported directory listing.
///
/// Optional fields stay `None` when the source row left them blank; the
/// render layer substitutes placeholder copy, and the filterable
/// projection ([`card`](Self::card)) degrades them to empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Build-unique, URL-safe identifier.
    pub slug: String,
    pub name: String,
    pub map_url: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub category: String,
    pub address: String,
    pub status: Option<String>,
    pub hours: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub features: Vec<String>,
}

impl Listing {
    /// The filterable projection of this listing.
    ///
    /// These five values are exactly what the index page serializes into
    /// the card's `data-*` attributes, with features space-joined and a
    /// missing status reading as empty.
    pub fn card(&self) -> Card {
        Card::new(
            self.name.as_str(),
            self.address.as_str(),
            self.category.as_str(),
            self.features.join(" "),
            self.status.as_deref().unwrap_or(""),
        )
    }

    /// CSS class for the status badge.
    ///
    /// Missing status reads as neutral. A status mentioning "24" gets the
    /// round-the-clock accent. A status containing one of the configured
    /// open markers keeps the default open styling (no extra class).
    /// Everything else is neutral.
    pub fn status_class(&self, open_markers: &[String]) -> &'static str {
        match &self.status {
            None => "neutral",
            Some(status) if status.contains("24") => "open-24",
            Some(status) if open_markers.iter().any(|m| status.contains(m.as_str())) => "",
            Some(_) => "neutral",
        }
    }

    /// Human rating line, `--` when no rating was imported.
    ///
    /// One star glyph per rounded rating point, with the review count
    /// appended when it is known and non-zero.
    pub fn formatted_rating(&self) -> String {
        let Some(rating) = self.rating else {
            return "--".to_string();
        };
        let stars = "★".repeat(rating.round().max(0.0) as usize);
        let reviews = match self.review_count {
            Some(count) if count > 0 => format!("({count} reviews)"),
            _ => String::new(),
        };
        format!("{rating:.1} {stars} {reviews}").trim().to_string()
    }
}
