// ---------------------------------------------------------------------------
// Sector scorecard
// ---------------------------------------------------------------------------

/// One row of the sector opportunity scorecard. Sub-scores are 0–10.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRating {
    pub sector: &'static str,
    pub macro_resilience: u8,
    pub policy_support: u8,
    pub export_scale: u8,
    pub overall: f64,
}

/// Column headings for the scorecard table, in display order.
pub const SCORECARD_COLUMNS: [&str; 5] = [
    "Sector",
    "Macro Resilience",
    "Policy Support",
    "Export/Scale",
    "Overall",
];

const RATINGS: [SectorRating; 4] = [
    SectorRating {
        sector: "Healthcare & Life Sciences (Health 2030)",
        macro_resilience: 9,
        policy_support: 9,
        export_scale: 7,
        overall: 8.5,
    },
    SectorRating {
        sector: "Aerospace & Défense",
        macro_resilience: 8,
        policy_support: 8,
        export_scale: 9,
        overall: 8.5,
    },
    SectorRating {
        sector: "Luxury & High-End Tourism",
        macro_resilience: 6,
        policy_support: 7,
        export_scale: 9,
        overall: 7.5,
    },
    SectorRating {
        sector: "Agri-Food Tech",
        macro_resilience: 8,
        policy_support: 8,
        export_scale: 7,
        overall: 7.8,
    },
];

/// The fixed ratings, highest `overall` first. Ties keep table order.
pub fn build_scorecard() -> Vec<SectorRating> {
    let mut ratings = RATINGS.to_vec();
    ratings.sort_by(|a, b| b.overall.total_cmp(&a.overall));
    ratings
}

// ---------------------------------------------------------------------------
// Pitch cards
// ---------------------------------------------------------------------------

/// Narrative shown under the scorecard: Macro → Opportunity → Risk → Policy.
#[derive(Debug, Clone, Copy)]
pub struct PitchCard {
    pub sector: &'static str,
    pub macro_link: &'static str,
    pub opportunity: &'static str,
    pub risks: &'static str,
    pub policy_support: &'static str,
}

impl PitchCard {
    /// `(heading, text)` bullets in display order.
    pub fn bullets(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Macro link:", self.macro_link),
            ("Opportunity:", self.opportunity),
            ("Risks:", self.risks),
            ("Policy support:", self.policy_support),
        ]
    }
}

/// Cards laid out as two columns of two.
pub const PITCH_CARDS: [[PitchCard; 2]; 2] = [
    [
        PitchCard {
            sector: "Healthcare & Life Sciences (Health 2030)",
            macro_link: "demand is stable even in slow growth; inflation affects costs; rates affect R&D capital",
            opportunity: "biotech, diagnostics, med-tech, digital health, ageing-care solutions",
            risks: "regulation, long approval cycles",
            policy_support: "mission-driven ecosystem funding + healthcare demand anchor",
        },
        PitchCard {
            sector: "Aerospace & Défense",
            macro_link: "export driven; long contracts; supply chain sensitive to inflation",
            opportunity: "avionics, dual-use tech, space systems, MRO recurring revenue",
            risks: "tender cycles, certification delays",
            policy_support: "strategic autonomy & procurement demand stability",
        },
    ],
    [
        PitchCard {
            sector: "Luxury & High-End Tourism",
            macro_link: "global income cycles matter; pricing power helps inflation",
            opportunity: "premium experiences, hospitality, sustainable tourism, luxury retail",
            risks: "global shocks (travel), reputational risk",
            policy_support: "infrastructure & destination investment; brand moat",
        },
        PitchCard {
            sector: "Agri-Food Tech",
            macro_link: "input-cost inflation; rate-sensitive CAPEX; productivity focus matters",
            opportunity: "precision farming, climate-smart tech, automation, premium processing",
            risks: "climate volatility, commodity cycles",
            policy_support: "sustainability and modernization incentives",
        },
    ],
];
