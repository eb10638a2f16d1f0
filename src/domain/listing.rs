use serde::{Deserialize, Serialize};

/// A bookable hotel. Immutable once loaded into a working set; the set
/// itself is replaced wholesale when a new combined list arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub price_per_night: f64,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_recommended: bool,
}

impl std::fmt::Display for Hotel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (${:.0}/night, {:.1}*",
            self.name, self.location, self.price_per_night, self.rating
        )?;
        if self.is_recommended {
            write!(f, " | Recommended")?;
        }
        write!(f, ")")
    }
}

/// The static catalog every session starts from. Recommended listings from
/// the feed are unioned ahead of these.
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "1".into(),
            name: "Grand Plaza Hotel".into(),
            location: "New York, USA".into(),
            rating: 4.8,
            price_per_night: 250.0,
            image_url: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800".into(),
            description: None,
            is_recommended: false,
        },
        Hotel {
            id: "2".into(),
            name: "Ocean View Resort".into(),
            location: "Miami, USA".into(),
            rating: 4.6,
            price_per_night: 180.0,
            image_url: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800".into(),
            description: None,
            is_recommended: false,
        },
        Hotel {
            id: "3".into(),
            name: "Mountain Lodge".into(),
            location: "Aspen, USA".into(),
            rating: 4.9,
            price_per_night: 320.0,
            image_url: "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=800".into(),
            description: None,
            is_recommended: false,
        },
    ]
}
