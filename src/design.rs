//! Static design vocabulary the instruction payload is built around.
//!
//! Mirrors the archetype and palette tables in the payload so callers can
//! work with them programmatically, for example to enrich a parsed
//! `ARCHETYPE:` decision line.

/// One row of the design-archetype table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub characteristics: &'static str,
    pub fonts: &'static [&'static str],
    pub colors: &'static str,
}

pub const ARCHETYPES: [Archetype; 6] = [
    Archetype {
        name: "SaaS/Tech",
        characteristics: "Clean, systematic, trust-building",
        fonts: &["Space Grotesk", "Plus Jakarta Sans", "Geist"],
        colors: "Cool neutrals, single accent",
    },
    Archetype {
        name: "Luxury/Editorial",
        characteristics: "High contrast, refined, unhurried",
        fonts: &["Playfair Display", "Cormorant", "Fraunces"],
        colors: "Muted earth tones, cream/charcoal",
    },
    Archetype {
        name: "Brutalist/Dev",
        characteristics: "Raw, intentional ugliness, monospace",
        fonts: &["JetBrains Mono", "IBM Plex Mono"],
        colors: "High contrast, primary colors",
    },
    Archetype {
        name: "Playful/Consumer",
        characteristics: "Rounded, bouncy, approachable",
        fonts: &["Outfit", "Nunito", "Quicksand"],
        colors: "Saturated, multi-color palettes",
    },
    Archetype {
        name: "Corporate/Enterprise",
        characteristics: "Conservative, authoritative, accessible",
        fonts: &["Source Sans 3", "Noto Sans"],
        colors: "Navy, forest, burgundy anchors",
    },
    Archetype {
        name: "Creative/Portfolio",
        characteristics: "Experimental, asymmetric, memorable",
        fonts: &["Syne", "Clash Display", "Cabinet Grotesk"],
        colors: "Bold or monochrome extremes",
    },
];

/// Looks up an archetype by name, case-insensitively.
///
/// Accepts a raw decision-line value such as
/// `"SaaS/Tech — clean and trustworthy"`: anything after the table name is
/// ignored, so parsed decisions resolve directly.
pub fn find_archetype(value: &str) -> Option<&'static Archetype> {
    let value = value.trim();
    ARCHETYPES.iter().find(|archetype| {
        value
            .get(..archetype.name.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(archetype.name))
    })
}

/// One of the committed palette directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteDirection {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

pub const PALETTE_DIRECTIONS: [PaletteDirection; 4] = [
    PaletteDirection {
        name: "Warm minimal",
        background: "#FBF9F7",
        text: "#1C1917",
        accent: "#C2410C",
    },
    PaletteDirection {
        name: "Cool tech",
        background: "#0F172A",
        text: "#F8FAFC",
        accent: "#06B6D4",
    },
    PaletteDirection {
        name: "Paper/Editorial",
        background: "#FEFDFB",
        text: "#0A0A0A",
        accent: "#DC2626",
    },
    PaletteDirection {
        name: "Dark mode",
        background: "#0C0C0C",
        text: "#FAFAFA",
        accent: "#10B981",
    },
];

pub const WARM_OFF_WHITES: &[&str] = &["#FAFAFA", "#F5F5F4", "#FBF9F7"];
pub const COOL_OFF_WHITES: &[&str] = &["#F8FAFC"];
pub const OFF_BLACKS: &[&str] = &["#0A0A0A", "#171717", "#1C1917"];
