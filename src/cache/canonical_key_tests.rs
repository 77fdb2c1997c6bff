use proptest::prelude::*;

use super::*;

#[test]
fn test_key_orders_titles() {
    assert_eq!(canonical_key("Heal", "Fireball"), "Fireball + Heal");
    assert_eq!(canonical_key("Fireball", "Heal"), "Fireball + Heal");
}

#[test]
fn test_self_pair_key() {
    assert_eq!(canonical_key("Heal", "Heal"), "Heal + Heal");
}

#[test]
fn test_ordering_is_bytewise() {
    // Uppercase sorts before lowercase under byte ordering
    assert_eq!(canonical_key("apple", "Zebra"), "Zebra + apple");
    assert_eq!(canonical_key("éclair", "zest"), "zest + éclair");
}

#[test]
fn test_separator_collision_is_not_disambiguated() {
    assert_eq!(canonical_key("A + B", "C"), canonical_key("A", "B + C"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_key_is_order_independent(a in "\\PC{0,20}", b in "\\PC{0,20}") {
        prop_assert_eq!(canonical_key(&a, &b), canonical_key(&b, &a));
    }

    #[test]
    fn prop_key_starts_with_smaller_title(a in "[a-zA-Z ]{1,12}", b in "[a-zA-Z ]{1,12}") {
        let key = canonical_key(&a, &b);
        let low = if a <= b { &a } else { &b };
        prop_assert!(key.starts_with(low.as_str()));
    }
}
