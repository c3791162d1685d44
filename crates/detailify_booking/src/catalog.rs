// --- File: crates/detailify_booking/src/catalog.rs ---
//! The service catalog: process-wide immutable configuration.
//!
//! Five entries, in display order. Tiered entries offer named packages,
//! flat entries are a single price. Prices are euro cents so aggregation
//! stays exact integer arithmetic.

use serde::Serialize;

/// Selection sentinel for flat catalog entries, which have no tiers.
pub const FLAT_SELECTION: &str = "default";

/// One package of a tiered service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOption {
    pub name: &'static str,
    pub price_cents: i64,
    pub duration_minutes: i64,
    pub features: &'static [&'static str],
}

/// A catalog entry is either tiered or flat, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Tiered {
        title: &'static str,
        options: &'static [ServiceOption],
    },
    Flat {
        title: &'static str,
        price_cents: i64,
        duration_minutes: i64,
        description: &'static str,
    },
}

impl CatalogEntry {
    pub fn title(&self) -> &'static str {
        match self {
            CatalogEntry::Tiered { title, .. } => title,
            CatalogEntry::Flat { title, .. } => title,
        }
    }
}

pub static SERVICE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry::Tiered {
        title: "Exterieur Reiniging",
        options: &[
            ServiceOption {
                name: "Basis",
                price_cents: 4999,
                duration_minutes: 60,
                features: &["Handwas", "Velgen reinigen", "Ramen wassen"],
            },
            ServiceOption {
                name: "Premium",
                price_cents: 7999,
                duration_minutes: 90,
                features: &["Alles van Basis", "Kleibehandeling", "Waxen"],
            },
            ServiceOption {
                name: "Deluxe",
                price_cents: 11999,
                duration_minutes: 120,
                features: &["Alles van Premium", "Dieptereiniging", "Keramische coating"],
            },
        ],
    },
    CatalogEntry::Tiered {
        title: "Interieur Reiniging",
        options: &[
            ServiceOption {
                name: "Basis",
                price_cents: 3999,
                duration_minutes: 45,
                features: &["Stofzuigen", "Oppervlakken reinigen", "Ramen van binnen"],
            },
            ServiceOption {
                name: "Premium",
                price_cents: 6999,
                duration_minutes: 75,
                features: &["Alles van Basis", "Diepte reiniging stoelen", "Luchtverfrisser"],
            },
            ServiceOption {
                name: "Deluxe",
                price_cents: 9999,
                duration_minutes: 105,
                features: &["Alles van Premium", "Leder behandeling", "Ozonbehandeling"],
            },
        ],
    },
    CatalogEntry::Tiered {
        title: "Auto Polijsten",
        options: &[
            ServiceOption {
                name: "Basis",
                price_cents: 8999,
                duration_minutes: 90,
                features: &[
                    "Eénstaps polijstproces",
                    "Lichte krasjes verwijderen",
                    "Basis glans",
                ],
            },
            ServiceOption {
                name: "Premium",
                price_cents: 14999,
                duration_minutes: 150,
                features: &[
                    "Tweestaps polijstproces",
                    "Diepere krassen behandelen",
                    "Hoge glans",
                ],
            },
            ServiceOption {
                name: "Deluxe",
                price_cents: 19999,
                duration_minutes: 210,
                features: &[
                    "Driestaps polijstproces",
                    "Zware oxidatie verwijderen",
                    "Showroom finish",
                ],
            },
        ],
    },
    CatalogEntry::Flat {
        title: "Koplampen Polijsten",
        price_cents: 5999,
        duration_minutes: 45,
        description: "Herstel de helderheid van uw koplampen voor betere zichtbaarheid.",
    },
    CatalogEntry::Flat {
        title: "Maandelijkse Reiniging",
        price_cents: 12999,
        duration_minutes: 120,
        description: "Regelmatige basis- en interieurreiniging om uw auto in topconditie te houden.",
    },
];

/// Look up a catalog entry by its title.
pub fn find_entry(title: &str) -> Option<&'static CatalogEntry> {
    SERVICE_CATALOG.iter().find(|entry| entry.title() == title)
}
