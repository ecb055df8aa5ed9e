/// Curated names used to fill an itinerary for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationProfile {
    pub activities: &'static [&'static str],
    pub restaurants: &'static [&'static str],
    pub hotels: &'static [&'static str],
    pub themes: &'static [&'static str],
}

static PARIS: DestinationProfile = DestinationProfile {
    activities: &[
        "Louvre Museum",
        "Eiffel Tower",
        "Notre-Dame",
        "Champs-Élysées",
        "Montmartre",
        "Seine River Cruise",
    ],
    restaurants: &[
        "Le Comptoir du Relais",
        "L'As du Fallafel",
        "Bistrot Paul Bert",
        "Le Procope",
        "Café de Flore",
    ],
    hotels: &[
        "Hotel des Grands Boulevards",
        "Hotel des Grands Hommes",
        "Hotel des Saints-Pères",
    ],
    themes: &[
        "Romantic Paris",
        "Art & Culture",
        "Food & Wine",
        "Historic Paris",
        "Fashion & Shopping",
    ],
};

static TOKYO: DestinationProfile = DestinationProfile {
    activities: &[
        "Senso-ji Temple",
        "Tokyo Skytree",
        "Shibuya Crossing",
        "Tsukiji Fish Market",
        "Meiji Shrine",
        "Harajuku District",
    ],
    restaurants: &[
        "Sukiyabashi Jiro",
        "Narisawa",
        "Tsuta",
        "Nakamura",
        "Sushi Dai",
    ],
    hotels: &["The Ritz-Carlton Tokyo", "Aman Tokyo", "Park Hyatt Tokyo"],
    themes: &[
        "Modern Tokyo",
        "Traditional Culture",
        "Food Adventure",
        "Shopping & Fashion",
        "Technology & Innovation",
    ],
};

static NEW_YORK: DestinationProfile = DestinationProfile {
    activities: &[
        "Central Park",
        "Statue of Liberty",
        "Times Square",
        "Brooklyn Bridge",
        "High Line",
        "Metropolitan Museum",
    ],
    restaurants: &[
        "Le Bernardin",
        "Eleven Madison Park",
        "Peter Luger",
        "Katz's Delicatessen",
        "Joe's Pizza",
    ],
    hotels: &["The Plaza", "The St. Regis New York", "The Carlyle"],
    themes: &[
        "City That Never Sleeps",
        "Art & Culture",
        "Food Scene",
        "Broadway & Entertainment",
        "Shopping & Fashion",
    ],
};

static GENERIC: DestinationProfile = DestinationProfile {
    activities: &[
        "City Walking Tour",
        "Local Market Visit",
        "Historic District",
        "Scenic Viewpoint",
        "Cultural Center",
    ],
    restaurants: &[
        "Local Bistro",
        "Traditional Restaurant",
        "Popular Cafe",
        "Fine Dining",
        "Street Food",
    ],
    hotels: &["City Center Hotel", "Boutique Hotel", "Business Hotel"],
    themes: &[
        "City Discovery",
        "Cultural Experience",
        "Local Life",
        "Historic Tour",
        "Modern Exploration",
    ],
};

const DEFAULT_FLIGHT_DURATION: &str = "6-8 hours";

pub struct DestinationCatalog;

impl DestinationCatalog {
    /// Case-insensitive exact match, generic profile otherwise.
    pub fn lookup(name: &str) -> &'static DestinationProfile {
        Self::find(name).unwrap_or(&GENERIC)
    }

    /// Curated profile only, without the generic fallback.
    pub fn find(name: &str) -> Option<&'static DestinationProfile> {
        match name.trim().to_lowercase().as_str() {
            "paris" => Some(&PARIS),
            "tokyo" => Some(&TOKYO),
            "new york" => Some(&NEW_YORK),
            _ => None,
        }
    }

    pub fn generic() -> &'static DestinationProfile {
        &GENERIC
    }

    /// Typical one-way flight time from the US.
    pub fn flight_duration(name: &str) -> &'static str {
        match name.trim().to_lowercase().as_str() {
            "paris" => "8-10 hours",
            "london" => "7-9 hours",
            "tokyo" => "12-14 hours",
            "sydney" => "15-17 hours",
            "new york" => "5-7 hours",
            _ => DEFAULT_FLIGHT_DURATION,
        }
    }
}
