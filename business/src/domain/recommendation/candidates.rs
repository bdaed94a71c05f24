use super::model::CandidatePool;
use crate::domain::product::model::Product;

/// Upper bound on the candidate pool. Independent of the caller's limit and
/// larger than it in practice, so the selector keeps real choice beyond the
/// final cut.
pub const CANDIDATE_POOL_CAP: usize = 30;

const PHONE_FIT_CATEGORIES: &[&str] = &["phone_case", "screen_protector"];
const PHONE_POWER_CATEGORIES: &[&str] = &["charger", "cable"];
const UNIVERSAL_BRAND: &str = "universal";

/// Category-specific matching rule. Rules are looked up by the primary
/// product's category; a primary with no rule gets the generic complement
/// rule only.
struct CategoryRule {
    category: &'static str,
    matches: fn(&Product, &Product) -> bool,
}

fn category_rules() -> &'static [CategoryRule] {
    &[CategoryRule {
        category: "phone",
        matches: phone_complements,
    }]
}

/// Cases and screen protectors must declare the phone's exact model and
/// brand; chargers and cables must match its port type and be compatible
/// with its brand or universal.
fn phone_complements(primary: &Product, candidate: &Product) -> bool {
    if PHONE_FIT_CATEGORIES.contains(&candidate.category.as_str()) {
        let model_matches = primary
            .model
            .as_deref()
            .is_some_and(|m| candidate.attribute("compatible_model") == Some(m));
        let brand_matches = primary
            .brand
            .as_deref()
            .is_some_and(|b| candidate.attribute("compatible_brand") == Some(b));
        return model_matches && brand_matches;
    }

    if PHONE_POWER_CATEGORIES.contains(&candidate.category.as_str()) {
        let port_matches = primary
            .attribute("port_type")
            .is_some_and(|port| candidate.attribute("port_type") == Some(port));
        let brand_compatible = candidate
            .attribute("compatible_brand")
            .is_some_and(|b| b == UNIVERSAL_BRAND || primary.brand.as_deref() == Some(b));
        return port_matches && brand_compatible;
    }

    false
}

/// Generic complement rule, applied regardless of the primary's category:
/// shared brand or overlapping tags.
fn generic_complement(primary: &Product, candidate: &Product) -> bool {
    let same_brand = match (&candidate.brand, &primary.brand) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    same_brand || candidate.tags.iter().any(|t| primary.tags.contains(t))
}

/// Builds the candidate pool for `primary` from the full catalog, excluding
/// the primary itself. Deduplicated by id, first-seen order, capped.
pub fn build_candidates(primary: &Product, catalog: &[Product], limit: usize) -> CandidatePool {
    let cap = CANDIDATE_POOL_CAP.max(limit);
    let rule = category_rules()
        .iter()
        .find(|r| r.category == primary.category);

    let mut pool = CandidatePool::new();
    for item in catalog {
        if pool.len() >= cap {
            break;
        }
        if item.id == primary.id {
            continue;
        }
        let matched = rule.is_some_and(|r| (r.matches)(primary, item))
            || generic_complement(primary, item);
        if matched {
            pool.push(item.clone());
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn product(
        id: i64,
        name: &str,
        category: &str,
        brand: Option<&str>,
        model: Option<&str>,
        attributes: &[(&str, &str)],
        tags: &[&str],
    ) -> Product {
        let mut map = Map::new();
        for (key, value) in attributes {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }
        Product::from_repository(
            id,
            name.to_string(),
            category.to_string(),
            brand.map(str::to_string),
            model.map(str::to_string),
            map,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn samsung_phone() -> Product {
        product(
            101,
            "Samsung Galaxy A57",
            "phone",
            Some("Samsung"),
            Some("A57"),
            &[("port_type", "usb_c")],
            &["phone", "android"],
        )
    }

    fn pool_ids(pool: &CandidatePool) -> Vec<i64> {
        pool.products().iter().map(|p| p.id).collect()
    }

    #[test]
    fn should_select_matching_case_and_charger_but_not_unrelated_item() {
        let case = product(
            201,
            "A57 Shockproof Case",
            "phone_case",
            Some("Generic"),
            None,
            &[("compatible_model", "A57"), ("compatible_brand", "Samsung")],
            &[],
        );
        let charger = product(
            202,
            "25W USB-C Charger",
            "charger",
            Some("Generic"),
            None,
            &[("port_type", "usb_c"), ("compatible_brand", "universal")],
            &[],
        );
        let earbuds = product(
            301,
            "Random Earbuds",
            "earbuds",
            Some("Nobrand"),
            None,
            &[],
            &["audio"],
        );

        let pool = build_candidates(&samsung_phone(), &[case, charger, earbuds], 5);

        assert_eq!(pool_ids(&pool), vec![201, 202]);
    }

    #[test]
    fn should_reject_case_for_a_different_model() {
        let wrong_case = product(
            201,
            "A55 Case",
            "phone_case",
            Some("Generic"),
            None,
            &[("compatible_model", "A55"), ("compatible_brand", "Samsung")],
            &[],
        );

        let pool = build_candidates(&samsung_phone(), &[wrong_case], 5);

        assert!(pool.is_empty());
    }

    #[test]
    fn should_reject_charger_with_wrong_port_or_foreign_brand() {
        let wrong_port = product(
            202,
            "Micro-USB Charger",
            "charger",
            None,
            None,
            &[("port_type", "micro_usb"), ("compatible_brand", "universal")],
            &[],
        );
        let foreign_brand = product(
            203,
            "Pixel Charger",
            "cable",
            None,
            None,
            &[("port_type", "usb_c"), ("compatible_brand", "Google")],
            &[],
        );

        let pool = build_candidates(&samsung_phone(), &[wrong_port, foreign_brand], 5);

        assert!(pool.is_empty());
    }

    #[test]
    fn should_accept_cable_matching_primary_brand() {
        let cable = product(
            204,
            "Samsung USB-C Cable",
            "cable",
            None,
            None,
            &[("port_type", "usb_c"), ("compatible_brand", "Samsung")],
            &[],
        );

        let pool = build_candidates(&samsung_phone(), &[cable], 5);

        assert_eq!(pool_ids(&pool), vec![204]);
    }

    #[test]
    fn should_not_match_accessory_when_primary_lacks_model() {
        let modelless_phone = product(
            100,
            "Unbranded Phone",
            "phone",
            None,
            None,
            &[],
            &[],
        );
        let attributeless_case = product(
            201,
            "Bare Case",
            "phone_case",
            None,
            None,
            &[],
            &[],
        );

        let pool = build_candidates(&modelless_phone, &[attributeless_case], 5);

        assert!(pool.is_empty());
    }

    #[test]
    fn should_apply_generic_rule_additively_for_phones() {
        let same_brand_earbuds = product(
            302,
            "Samsung Buds",
            "earbuds",
            Some("Samsung"),
            None,
            &[],
            &[],
        );
        let tag_overlap_mount = product(
            401,
            "Android Car Mount",
            "car_mount",
            Some("Nobrand"),
            None,
            &[],
            &["android"],
        );

        let pool = build_candidates(&samsung_phone(), &[same_brand_earbuds, tag_overlap_mount], 5);

        assert_eq!(pool_ids(&pool), vec![302, 401]);
    }

    #[test]
    fn should_use_generic_rule_only_for_unrecognized_category() {
        let speaker = product(
            301,
            "Bluetooth Speaker",
            "speaker",
            Some("Generic"),
            None,
            &[],
            &["speaker", "bluetooth"],
        );
        let same_tag = product(
            303,
            "Bluetooth Transmitter",
            "adapter",
            Some("Nobrand"),
            None,
            &[],
            &["bluetooth"],
        );
        // A case declaring compatibility attributes means nothing without a
        // category rule for "speaker".
        let case = product(
            201,
            "Universal Case",
            "phone_case",
            Some("Nobrand"),
            None,
            &[("compatible_model", "X"), ("compatible_brand", "Generic")],
            &[],
        );

        let pool = build_candidates(&speaker, &[same_tag, case], 5);

        assert_eq!(pool_ids(&pool), vec![303]);
    }

    #[test]
    fn should_exclude_the_primary_itself() {
        let primary = samsung_phone();
        let pool = build_candidates(&primary, &[primary.clone()], 5);

        assert!(pool.is_empty());
    }

    #[test]
    fn should_return_empty_pool_for_empty_catalog() {
        let pool = build_candidates(&samsung_phone(), &[], 5);

        assert!(pool.is_empty());
    }

    #[test]
    fn should_cap_the_pool_independently_of_limit() {
        let catalog: Vec<Product> = (0..CANDIDATE_POOL_CAP as i64 + 10)
            .map(|i| {
                product(
                    1000 + i,
                    &format!("Samsung Accessory {}", i),
                    "earbuds",
                    Some("Samsung"),
                    None,
                    &[],
                    &[],
                )
            })
            .collect();

        let pool = build_candidates(&samsung_phone(), &catalog, 5);

        assert_eq!(pool.len(), CANDIDATE_POOL_CAP);
    }

    #[test]
    fn should_not_duplicate_item_matching_both_rules() {
        // Same brand AND a valid charger match.
        let charger = product(
            203,
            "Samsung 25W Charger",
            "charger",
            Some("Samsung"),
            None,
            &[("port_type", "usb_c"), ("compatible_brand", "Samsung")],
            &[],
        );

        let pool = build_candidates(&samsung_phone(), &[charger], 5);

        assert_eq!(pool_ids(&pool), vec![203]);
    }
}
