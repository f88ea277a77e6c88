//! Free-text plan label resolution.
//!
//! Maps an arbitrary spreadsheet label ("HDFC ERGO Optima Secure 10L",
//! "Niva ReAssure v3.0", ...) to a canonical [`PlanRecord`]. Ordered
//! keyword rules evaluated first-match-wins, with a token-substring
//! fallback over the registry. Rule order is the tie-break contract:
//! "reassure" beats "aspire" because the ReAssure rule runs first.
//!
//! No match is not an error; callers keep the raw label as display text.

use crate::registry::{self, PlanRecord};

/// Resolve a free-text label to a canonical plan.
///
/// Case-insensitive and whitespace-trimmed. Empty or whitespace-only
/// input returns `None` without evaluating any rule.
pub fn resolve(label: &str) -> Option<&'static PlanRecord> {
    let n = label.trim().to_lowercase();
    if n.is_empty() {
        return None;
    }

    if let Some(plan) = match_reassure(&n) {
        return Some(plan);
    }
    if let Some(plan) = match_aspire(&n) {
        return Some(plan);
    }
    if let Some(plan) = match_icici(&n) {
        return Some(plan);
    }
    if let Some(plan) = match_tata(&n) {
        return Some(plan);
    }
    if let Some(plan) = match_hdfc(&n) {
        return Some(plan);
    }
    if let Some(plan) = match_care(&n) {
        return Some(plan);
    }

    match_by_token(&n)
}

/// ReAssure triggers: the "Black variant" marketing name, the plan name
/// itself, and the 3.0 version tokens. Mixed on purpose - this mirrors
/// how the plan is actually labelled in agent spreadsheets.
fn match_reassure(n: &str) -> Option<&'static PlanRecord> {
    let hit = (n.contains("black") && n.contains("variant"))
        || n.contains("reassure")
        || n.contains("v3.0")
        || n.contains("v 3.0")
        || (n.contains("3.0") && n.contains("niva"));
    hit.then(|| registry::find_plan("Niva Bupa – ReAssure 3.0"))
        .flatten()
}

fn match_aspire(n: &str) -> Option<&'static PlanRecord> {
    n.contains("aspire")
        .then(|| registry::find_plan("Niva Bupa – Aspire Platinum"))
        .flatten()
}

fn match_icici(n: &str) -> Option<&'static PlanRecord> {
    let patterns = ["icici", "lombard", "elevate"];
    patterns
        .iter()
        .any(|p| n.contains(p))
        .then(|| registry::find_plan("ICICI Lombard – Elevate"))
        .flatten()
}

fn match_tata(n: &str) -> Option<&'static PlanRecord> {
    let patterns = ["tata", "aig", "medicare"];
    patterns
        .iter()
        .any(|p| n.contains(p))
        .then(|| registry::find_plan("Tata AIG – Medicare Select"))
        .flatten()
}

fn match_hdfc(n: &str) -> Option<&'static PlanRecord> {
    let patterns = ["hdfc", "ergo", "optima"];
    patterns
        .iter()
        .any(|p| n.contains(p))
        .then(|| registry::find_plan("HDFC ERGO – Optima Secure"))
        .flatten()
}

fn match_care(n: &str) -> Option<&'static PlanRecord> {
    let patterns = ["care", "supreme"];
    patterns
        .iter()
        .any(|p| n.contains(p))
        .then(|| registry::find_plan("Care Health – Supreme"))
        .flatten()
}

/// Fallback: any input token that is a substring of a canonical plan name
/// (lower-cased) wins. First registry entry in declaration order wins.
fn match_by_token(n: &str) -> Option<&'static PlanRecord> {
    let tokens: Vec<&str> = n
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    for plan in registry::all_plans() {
        let canonical = plan.name.to_lowercase();
        if tokens.iter().any(|t| canonical.contains(t)) {
            return Some(plan);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casing_is_irrelevant() {
        let upper = resolve("ICICI LOMBARD").unwrap();
        let lower = resolve("icici lombard").unwrap();
        assert_eq!(upper.name, lower.name);
        assert_eq!(upper.name, "ICICI Lombard – Elevate");
    }

    #[test]
    fn test_reassure_triggers() {
        for label in [
            "Niva Bupa ReAssure 3.0",
            "reassure family floater",
            "Black Variant 50L",
            "niva v3.0",
            "niva v 3.0",
            "Niva 3.0 bronze",
        ] {
            let plan = resolve(label).unwrap_or_else(|| panic!("no match for {label:?}"));
            assert_eq!(plan.name, "Niva Bupa – ReAssure 3.0", "label: {label:?}");
        }
    }

    #[test]
    fn test_reassure_rule_runs_before_aspire() {
        // Rule order is the contract when triggers co-occur.
        let plan = resolve("reassure aspire combo").unwrap();
        assert_eq!(plan.name, "Niva Bupa – ReAssure 3.0");
    }

    #[test]
    fn test_insurer_keywords() {
        assert_eq!(resolve("aspire gold").unwrap().name, "Niva Bupa – Aspire Platinum");
        assert_eq!(resolve("tata aig quote").unwrap().name, "Tata AIG – Medicare Select");
        assert_eq!(resolve("Medicare").unwrap().name, "Tata AIG – Medicare Select");
        assert_eq!(
            resolve("HDFC ERGO Optima Secure 10L").unwrap().name,
            "HDFC ERGO – Optima Secure"
        );
        assert_eq!(resolve("supreme 25 lakh").unwrap().name, "Care Health – Supreme");
    }

    #[test]
    fn test_token_fallback_matches_registry_substring() {
        // "niva" is no keyword in any ordered rule but is a substring of
        // two canonical names; the first registry entry wins.
        let plan = resolve("niva quotation").unwrap();
        assert_eq!(plan.name, "Niva Bupa – ReAssure 3.0");
    }

    #[test]
    fn test_blank_and_unknown_input() {
        assert!(resolve("").is_none());
        assert!(resolve("   ").is_none());
        assert!(resolve("XYZ Insurance Unknown Plan").is_none());
    }
}
