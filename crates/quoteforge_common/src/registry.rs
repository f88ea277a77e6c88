//! Canonical plan registry - the static knowledge base.
//!
//! Six health-insurance plans, each with a value for every feature in
//! [`FEATURES`], plus curated advisory highlights and logo slugs. The data
//! is `'static` and read-only, so it is safe to share across requests
//! without locking.

/// One row of the feature matrix: a display icon and the lookup name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub name: &'static str,
}

impl Feature {
    /// Row label as shown in the feature matrix.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// A canonical plan with its ordered feature values.
#[derive(Debug)]
pub struct PlanRecord {
    pub name: &'static str,
    pub logo_slug: &'static str,
    features: &'static [(&'static str, &'static str)],
}

impl PlanRecord {
    /// Value for a feature, or `None` when the record lacks it.
    pub fn feature(&self, name: &str) -> Option<&'static str> {
        self.features
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }
}

/// All canonical plans in registry declaration order.
pub fn all_plans() -> &'static [PlanRecord] {
    PLANS
}

/// Exact-name lookup.
pub fn find_plan(name: &str) -> Option<&'static PlanRecord> {
    PLANS.iter().find(|p| p.name == name)
}

/// Curated advisory bullet points per plan.
pub fn highlights(name: &str) -> Option<&'static [&'static str]> {
    HIGHLIGHTS
        .iter()
        .find(|(plan, _)| *plan == name)
        .map(|(_, points)| *points)
}

/// Fixed feature vocabulary; defines the row order of the feature matrix.
pub const FEATURES: &[Feature] = &[
    Feature { icon: "🔄", name: "Restoration Benefit" },
    Feature { icon: "💰", name: "NCB Benefit" },
    Feature { icon: "🏠", name: "Room Rent" },
    Feature { icon: "🏥", name: "Pre-Hospitalization" },
    Feature { icon: "🩹", name: "Post-Hospitalization" },
    Feature { icon: "🌞", name: "Day Care Treatments" },
    Feature { icon: "🛠️", name: "Non-Consumables" },
    Feature { icon: "🏡", name: "Hospitalization @ Home" },
    Feature { icon: "🚑", name: "Ambulance" },
    Feature { icon: "✈️", name: "Air Ambulance" },
    Feature { icon: "🌿", name: "AYUSH" },
    Feature { icon: "❤️", name: "Organ Donor" },
    Feature { icon: "🔬", name: "Modern Treatments" },
    Feature { icon: "⏰", name: "2-Hour Hospitalization" },
    Feature { icon: "📱", name: "E-Consultation" },
    Feature { icon: "✅", name: "Preventive Health Check-up" },
    Feature { icon: "🤰", name: "Maternity" },
    Feature { icon: "👶", name: "New Born Cover" },
    Feature { icon: "🌍", name: "Worldwide Cover" },
    Feature { icon: "🔒", name: "Lock-the-Clock Premium Freeze" },
    Feature { icon: "💊", name: "OPD Cover" },
    Feature { icon: "🤝", name: "Priority Claim Desk" },
    Feature { icon: "💳", name: "Cash+ Wallet" },
    Feature { icon: "✨", name: "Unique Features" },
];

/// Feature row that gets the highlighted fill in the matrix.
pub const HIGHLIGHTED_FEATURE: &str = "Unique Features";

static PLANS: &[PlanRecord] = &[
    PlanRecord {
        name: "ICICI Lombard – Elevate",
        logo_slug: "icici_lombard",
        features: &[
            ("Restoration Benefit", "Unlimited (including for same illness)"),
            ("NCB Benefit", "Unlimited 100% yearly (No Cap)"),
            ("Room Rent", "Single Private AC"),
            ("Pre-Hospitalization", "90 Days"),
            ("Post-Hospitalization", "180 Days"),
            ("Day Care Treatments", "All covered"),
            ("Non-Consumables", "All covered"),
            ("Hospitalization @ Home", "Up to Sum Assured"),
            ("Ambulance", "Up to Sum Assured"),
            ("Air Ambulance", "Up to Sum Assured"),
            ("AYUSH", "Up to Sum Assured"),
            ("Organ Donor", "Up to Sum Assured"),
            ("Modern Treatments", "Up to Sum Assured"),
            ("2-Hour Hospitalization", "Covered"),
            ("E-Consultation", "Unlimited"),
            ("Preventive Health Check-up", "All covered (But Optional)"),
            (
                "Maternity",
                "Optional Rider – 10% Of SA & Max 1 Lakh allowed; waiting period 2 yrs (reducible to 1 yr with rider). Newborn Day 1 (10% SA).",
            ),
            ("New Born Cover", "Day 1 (10% SA)"),
            ("Worldwide Cover", "Not Available"),
            ("Lock-the-Clock Premium Freeze", "Not Applicable"),
            ("OPD Cover", "Optional Rider – can be added"),
            ("Priority Claim Desk", "Not Available"),
            ("Cash+ Wallet", "—"),
            (
                "Unique Features",
                "Unlimited NCB (100% SA increase yearly, no cap), 2-hr hospitalization, child cover till 30 yrs, newborn Day-1 (10% SA)",
            ),
        ],
    },
    PlanRecord {
        name: "Niva Bupa – ReAssure 3.0",
        logo_slug: "niva_reassure3",
        features: &[
            (
                "Restoration Benefit",
                "Unlimited Sum Reinstatement — Same illness covered multiple times; cover never ends.",
            ),
            ("NCB Benefit", "Not Applicable – This is an Unlimited Cover Plan."),
            ("Room Rent", "Any Room including Suite – No Limit."),
            ("Pre-Hospitalization", "60 Days"),
            ("Post-Hospitalization", "180 Days"),
            ("Day Care Treatments", "All Day-Care Procedures covered (no limit)."),
            ("Non-Consumables", "Yes – All Covered."),
            ("Hospitalization @ Home", "Covered up to Sum Insured — if medically advised."),
            ("Ambulance", "Covered up to Sum Insured — no per-event cap."),
            ("Air Ambulance", "Covered up to ₹5 Lakh."),
            ("AYUSH", "Covered up to Sum Assured."),
            ("Organ Donor", "Covered up to Sum Assured."),
            ("Modern Treatments", "Covered up to Sum Assured."),
            ("2-Hour Hospitalization", "Covered — short-stay admission eligible."),
            ("E-Consultation", "Unlimited online doctor consultations."),
            ("Preventive Health Check-up", "Annual health check-up available."),
            ("Maternity", "Not Available"),
            ("New Born Cover", "Not Available"),
            (
                "Worldwide Cover",
                "Worldwide cover with rider; no India-diagnosis rule when opted.",
            ),
            (
                "Lock-the-Clock Premium Freeze",
                "Premium will not increase until a claim occurs — premium stays locked.",
            ),
            (
                "OPD Cover",
                "Optional Rider – ₹1 Lakh annual OPD (Dental, tests, visits, medicines, gym & physio sessions).",
            ),
            ("Priority Claim Desk", "Optional Rider – Priority claim handling (HNI/Prime)."),
            (
                "Cash+ Wallet",
                "Cashback reward every claim-free year — usable for renewal, co-pay, OPD.",
            ),
            (
                "Unique Features",
                "Unlimited Sum Insured, Worldwide Cover (no India rule), Prime Member service, No-Claim Discounts added to wallet.",
            ),
        ],
    },
    PlanRecord {
        name: "Niva Bupa – Aspire Platinum",
        logo_slug: "niva_aspire",
        features: &[
            ("Restoration Benefit", "Unlimited (including for same illness)"),
            ("NCB Benefit", "Up to 5X (300%)"),
            ("Room Rent", "Single Private AC"),
            ("Pre-Hospitalization", "60 Days"),
            ("Post-Hospitalization", "90 Days"),
            ("Day Care Treatments", "All covered"),
            ("Non-Consumables", "All covered"),
            ("Hospitalization @ Home", "Up to Sum Assured"),
            ("Ambulance", "Up to Sum Assured"),
            ("Air Ambulance", "Up to Sum Assured"),
            ("AYUSH", "Up to Sum Assured"),
            ("Organ Donor", "Up to Sum Assured"),
            ("Modern Treatments", "Up to Sum Assured"),
            ("2-Hour Hospitalization", "—"),
            ("E-Consultation", "Unlimited"),
            ("Preventive Health Check-up", "Standard Available"),
            ("Maternity", "Standard ₹12k yearly"),
            ("New Born Cover", "Available"),
            ("Worldwide Cover", "Not Available"),
            (
                "Lock-the-Clock Premium Freeze",
                "Premium will not increase until a claim occurs — your premium stays locked.",
            ),
            ("OPD Cover", "Optional Rider – can be added"),
            ("Priority Claim Desk", "—"),
            ("Cash+ Wallet", "—"),
            ("Unique Features", "Premium lock, child cover up to 60 yrs, NCB up to 5X"),
        ],
    },
    PlanRecord {
        name: "Tata AIG – Medicare Select",
        logo_slug: "tata_aig",
        features: &[
            ("Restoration Benefit", "Unlimited (including for same illness)"),
            (
                "NCB Benefit",
                "Sum Assured will increase 100% every year, up to 500% (Super NCB).",
            ),
            ("Room Rent", "Single Private AC"),
            ("Pre-Hospitalization", "60 Days"),
            ("Post-Hospitalization", "90 Days"),
            ("Day Care Treatments", "All covered"),
            ("Non-Consumables", "All covered"),
            ("Hospitalization @ Home", "Up to Sum Assured"),
            ("Ambulance", "Up to Sum Assured"),
            ("Air Ambulance", "Up to Sum Assured"),
            ("AYUSH", "Up to Sum Assured"),
            ("Organ Donor", "Up to Sum Assured"),
            ("Modern Treatments", "Up to Sum Assured"),
            ("2-Hour Hospitalization", "—"),
            ("E-Consultation", "Unlimited"),
            ("Preventive Health Check-up", "All covered"),
            (
                "Maternity",
                "Optional Rider – 10% of SA and Max Up to 1 Lakh; waiting period 2 yrs (reducible to 1 yr with rider).",
            ),
            ("New Born Cover", "Available with rider"),
            ("Worldwide Cover", "Not Available"),
            ("Lock-the-Clock Premium Freeze", "Not Applicable"),
            ("OPD Cover", "Optional Rider – can be added"),
            ("Priority Claim Desk", "—"),
            ("Cash+ Wallet", "—"),
            (
                "Unique Features",
                "Salary-linked discounts for salaried persons (7.5%), Super NCB up to 500%",
            ),
        ],
    },
    PlanRecord {
        name: "HDFC ERGO – Optima Secure",
        logo_slug: "hdfc_ergo",
        features: &[
            ("Restoration Benefit", "Unlimited (including for same illness)"),
            ("NCB Benefit", "2X Day 1 (e.g., 10 Lakh SA becomes 20 Lakh from day 1)"),
            ("Room Rent", "Single Private AC"),
            ("Pre-Hospitalization", "60 Days"),
            ("Post-Hospitalization", "180 Days"),
            ("Day Care Treatments", "All covered"),
            ("Non-Consumables", "All covered"),
            ("Hospitalization @ Home", "Up to Sum Assured"),
            ("Ambulance", "Up to Sum Assured"),
            ("Air Ambulance", "Up to Sum Assured"),
            ("AYUSH", "Up to Sum Assured"),
            ("Organ Donor", "Up to Sum Assured"),
            ("Modern Treatments", "Up to Sum Assured"),
            ("2-Hour Hospitalization", "—"),
            ("E-Consultation", "Unlimited"),
            ("Preventive Health Check-up", "Standard Available"),
            ("Maternity", "Not Available"),
            ("New Born Cover", "Not Available"),
            ("Worldwide Cover", "Not Available"),
            ("Lock-the-Clock Premium Freeze", "Not Applicable"),
            ("OPD Cover", "Optional Rider – can be added"),
            ("Priority Claim Desk", "—"),
            ("Cash+ Wallet", "—"),
            (
                "Unique Features",
                "2X Cover from Day 1, deductible on 1st claim, health check-up included",
            ),
        ],
    },
    PlanRecord {
        name: "Care Health – Supreme",
        logo_slug: "care_health",
        features: &[
            ("Restoration Benefit", "Unlimited (including for same illness)"),
            ("NCB Benefit", "yearly 100% SA increase up to 600% (6X)"),
            ("Room Rent", "Single Private AC"),
            ("Pre-Hospitalization", "60 Days"),
            ("Post-Hospitalization", "180 Days"),
            ("Day Care Treatments", "All covered"),
            ("Non-Consumables", "All covered"),
            ("Hospitalization @ Home", "Up to Sum Assured"),
            ("Ambulance", "Up to Sum Assured"),
            ("Air Ambulance", "Up to Sum Assured"),
            ("AYUSH", "Up to Sum Assured"),
            ("Organ Donor", "Up to Sum Assured"),
            ("Modern Treatments", "Up to Sum Assured"),
            ("2-Hour Hospitalization", "—"),
            ("E-Consultation", "Unlimited"),
            ("Preventive Health Check-up", "All covered"),
            ("Maternity", "Not Available"),
            ("New Born Cover", "Not Available"),
            ("Worldwide Cover", "Not Available"),
            ("Lock-the-Clock Premium Freeze", "Not Applicable"),
            ("OPD Cover", "Optional Rider – can be added"),
            ("Priority Claim Desk", "—"),
            ("Cash+ Wallet", "—"),
            (
                "Unique Features",
                "NCB up to 600% (6X), all non-consumables covered, health check-up rider",
            ),
        ],
    },
];

static HIGHLIGHTS: &[(&str, &[&str])] = &[
    (
        "ICICI Lombard – Elevate",
        &[
            "Unlimited NCB growth (no cap)",
            "Newborn Day-1 cover (10% SA)",
            "2-hour hospitalization covered",
        ],
    ),
    (
        "Niva Bupa – ReAssure 3.0",
        &[
            "Truly Unlimited Sum Insured",
            "Worldwide cover (rider)",
            "Lock-the-Clock premium freeze",
        ],
    ),
    (
        "Niva Bupa – Aspire Platinum",
        &["Premium lock", "Child cover up to 60 yrs", "NCB up to 5X"],
    ),
    (
        "Tata AIG – Medicare Select",
        &[
            "Salary-linked discount (7.5%)",
            "Super NCB up to 500%",
            "Optional maternity/newborn rider",
        ],
    ),
    (
        "HDFC ERGO – Optima Secure",
        &["2X cover from Day 1", "Health check-up included"],
    ),
    (
        "Care Health – Supreme",
        &[
            "NCB up to 600% (6X)",
            "Non-consumables covered",
            "Health check-up rider",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_plan_defines_every_feature() {
        for plan in all_plans() {
            for feature in FEATURES {
                assert!(
                    plan.feature(feature.name).is_some(),
                    "{} is missing a value for '{}'",
                    plan.name,
                    feature.name
                );
            }
        }
    }

    #[test]
    fn test_plan_names_unique() {
        for (i, a) in all_plans().iter().enumerate() {
            for b in &all_plans()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_every_plan_has_highlights() {
        for plan in all_plans() {
            assert!(highlights(plan.name).is_some(), "{}", plan.name);
        }
    }

    #[test]
    fn test_find_plan_exact_match_only() {
        assert!(find_plan("HDFC ERGO – Optima Secure").is_some());
        assert!(find_plan("hdfc ergo – optima secure").is_none());
        assert!(find_plan("").is_none());
    }
}
