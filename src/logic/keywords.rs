//! Disaster Category Keyword Table
//!
//! Ordered keyword table plus the first-match tagger. Matching is plain
//! lowercase substring containment, so "fire" inside "firearm" counts as a
//! hit. That permissiveness is part of the tagging contract, as is the
//! declaration order of the table: the first category with any matching
//! trigger phrase wins, so earlier entries take precedence for ambiguous
//! text.

// ============================================================================
// CATEGORY TABLE
// ============================================================================

/// Ordered disaster category table: (category, trigger phrases).
///
/// Overlap across categories is allowed ("avalanche" sits under both
/// `landslide` and `avalanche`); precedence is resolved purely by position.
pub static DISASTER_CATEGORIES: &[(&str, &[&str])] = &[
    // Natural Disasters
    ("earthquake", &["earthquake", "quake", "tremor", "seismic", "aftershock", "quake swarm", "ground shaking", "temblor"]),
    ("flood", &["flood", "flooding", "inundation", "deluge", "flash flood", "overflow", "torrential rain", "rainstorm"]),
    ("drought", &["drought", "dry spell", "water scarcity", "water shortage", "aridification", "desiccation"]),
    ("landslide", &["landslide", "mudslide", "rockslide", "avalanche", "rockfall", "mudflow", "landslip"]),
    ("wildfire", &["wildfire", "fire", "blaze", "inferno", "forest fire", "brush fire", "bushfire"]),
    ("hurricane", &["hurricane", "typhoon", "cyclone", "storm surge", "tropical storm", "severe storm"]),
    ("tornado", &["tornado", "twister", "whirlwind", "funnel cloud", "rotating storm"]),
    ("storm", &["storm", "thunderstorm", "gale", "tempest", "squall", "windstorm"]),
    ("tsunami", &["tsunami", "tidal wave", "seismic sea wave", "ocean surge"]),
    ("volcanic eruption", &["volcano", "eruption", "lava flow", "pyroclastic flow", "volcanic ash"]),
    ("heatwave", &["heatwave", "heat wave", "temperature rise", "warm spell", "hot spell"]),
    ("blizzard", &["blizzard", "snowstorm", "ice storm", "snowsquall", "winter storm"]),
    ("ice storm", &["ice storm", "freezing rain", "glaze", "black ice"]),
    ("dust storm", &["dust storm", "sandstorm", "haboob", "dust devil"]),
    ("fog", &["fog", "smog", "haze", "mist"]),
    ("avalanche", &["avalanche", "snowslide", "rockslide", "landslide"]),
    ("cyclone", &["cyclone", "tropical cyclone", "low pressure", "depression"]),
    ("flash flood", &["flash flood", "sudden flood", "torrential rain", "rapid flooding"]),
    // Environmental Disasters
    ("water pollution", &["water pollution", "oil spill", "marine pollution", "water contamination"]),
    ("oil spill", &["oil spill", "marine pollution", "petroleum spill", "crude oil leak"]),
    ("chemical spill", &["chemical spill", "hazardous material", "toxic leak", "chemical contamination"]),
    ("nuclear accident", &["nuclear accident", "radiation leak", "meltdown", "nuclear fallout"]),
    // Health Disasters
    ("pandemic", &["pandemic", "epidemic", "outbreak", "plague", "infection"]),
    // Infrastructure Disasters
    ("power outage", &["power outage", "blackout", "electricity failure", "power failure"]),
    ("building collapse", &["building collapse", "structural failure", "collapse", "crash"]),
    ("plane crash", &["plane crash", "aviation disaster", "aircraft accident", "airplane crash"]),
    ("train crash", &["train crash", "railway accident", "derailment", "train wreck"]),
    ("ship sinking", &["ship sinking", "maritime disaster", "shipwreck", "vessel sinking"]),
    // Economic Disasters
    ("economic crisis", &["economic crisis", "recession", "financial crisis", "economic downturn"]),
    ("food shortage", &["food shortage", "famine", "starvation", "hunger"]),
    ("water shortage", &["water shortage", "drought", "water crisis", "water scarcity"]),
    // Other Disasters
    ("terrorist attack", &["terrorist attack", "bombing", "attack", "terrorism"]),
    ("cyber attack", &["cyber attack", "data breach", "hacking", "cybersecurity threat"]),
    ("heavy rainfall", &["heavy rainfall", "torrential rain", "downpour", "rainstorm", "heavy rain"]),
    ("low pressure", &["low pressure", "depression", "storm system", "atmospheric pressure"]),
    ("thunderstorm", &["thunderstorm", "electrical storm", "lightning storm", "thunder"]),
    ("gale", &["gale", "strong wind", "gust", "windstorm"]),
    ("hail storm", &["hail storm", "hail", "ice pellets", "sleet"]),
    ("sandstorm", &["sandstorm", "dust storm", "haboob", "dust devil", "sandstorm surge"]),
    ("smog", &["smog", "air pollution", "haze", "fog", "atmospheric pollution"]),
    ("heat stress", &["heat stress", "heat exhaustion", "heat stroke", "hyperthermia"]),
    ("cold wave", &["cold wave", "cold snap", "chill", "freezing temperatures"]),
    ("windstorm", &["windstorm", "gale", "storm", "strong winds", "gusts"]),
    ("winter storm", &["winter storm", "blizzard", "snowstorm", "ice storm", "freezing rain"]),
    ("tropical storm", &["tropical storm", "cyclone", "hurricane", "typhoon", "severe storm"]),
    ("ice jam", &["ice jam", "ice blockage", "river ice", "frozen river"]),
    ("fog bank", &["fog bank", "thick fog", "dense fog", "foggy conditions"]),
    ("snow avalanche", &["snow avalanche", "snowslide", "snowslip", "avalanche"]),
    ("mudflow", &["mudflow", "mudslide", "mud avalanche", "lahar"]),
    ("rockfall", &["rockfall", "rockslide", "boulder fall", "stonefall"]),
    ("forest fire", &["forest fire", "wildfire", "brush fire", "bushfire"]),
    ("brush fire", &["brush fire", "bushfire", "grass fire", "wildfire"]),
    ("wildland fire", &["wildland fire", "wildfire", "forest fire", "brush fire"]),
    ("tsunami warning", &["tsunami warning", "tsunami alert", "seismic sea wave warning"]),
    ("flash flood warning", &["flash flood warning", "flood warning", "rapid flooding warning"]),
    ("severe thunderstorm warning", &["severe thunderstorm warning", "thunderstorm alert", "tornado warning"]),
    ("tornado warning", &["tornado warning", "tornado alert", "twister warning"]),
    ("hurricane warning", &["hurricane warning", "hurricane alert", "tropical storm warning"]),
    ("blizzard warning", &["blizzard warning", "blizzard alert", "winter storm warning"]),
    ("ice storm warning", &["ice storm warning", "ice alert", "freezing rain warning"]),
    ("flood warning", &["flood warning", "flood alert", "overflow warning"]),
    ("drought warning", &["drought warning", "drought alert", "water scarcity warning"]),
    ("heat wave warning", &["heat wave warning", "heat alert", "temperature rise warning"]),
    ("cold wave warning", &["cold wave warning", "cold alert", "freezing temperatures warning"]),
    ("windstorm warning", &["windstorm warning", "wind alert", "gale warning"]),
    ("smog warning", &["smog warning", "air pollution alert", "haze warning"]),
    ("fog warning", &["fog warning", "fog alert", "thick fog warning"]),
];

// ============================================================================
// TAGGING
// ============================================================================

/// Tag the text with the first matching category, in table order.
///
/// Returns `None` when no trigger phrase is found. Total over any input,
/// including the empty string.
pub fn tag_category(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();

    for (category, phrases) in DISASTER_CATEGORIES {
        if phrases.iter().any(|p| lowered.contains(p)) {
            return Some(category);
        }
    }

    None
}

/// Every category that matched, with the trigger phrases that hit.
///
/// Unlike [`tag_category`] this does not stop at the first match; the result
/// preserves table order.
pub fn matched_categories(text: &str) -> Vec<(&'static str, Vec<&'static str>)> {
    let lowered = text.to_lowercase();
    let mut found = Vec::new();

    for (category, phrases) in DISASTER_CATEGORIES {
        let hits: Vec<&'static str> = phrases
            .iter()
            .filter(|p| lowered.contains(*p))
            .copied()
            .collect();
        if !hits.is_empty() {
            found.push((*category, hits));
        }
    }

    found
}

/// Display form of a category: first letter uppercased, rest untouched
/// (table entries are already lowercase).
pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
