use super::*;

fn heal_item() -> CanvasItem {
    CanvasItem::from_skill(&Skill::new("Heal", "🩹", "Heals a target."), 100.0, 40.0)
}

#[test]
fn test_new_registry_holds_default_item() {
    let registry = CanvasItemRegistry::new();

    assert_eq!(registry.len(), 1);
    let item = registry.get(DEFAULT_ITEM_ID).unwrap();
    assert_eq!(item.title, "Fireball");
    assert_eq!(item.top, 20.0);
    assert_eq!(item.left, 80.0);
    assert!(!item.loading);
}

#[test]
fn test_add_with_caller_supplied_id() {
    let mut registry = CanvasItemRegistry::new();

    let id = registry.add(heal_item(), Some("heal-1".to_string()));

    assert_eq!(id, "heal-1");
    assert_eq!(registry.get("heal-1"), Some(&heal_item()));
}

#[test]
fn test_add_generates_distinct_ids() {
    let mut registry = CanvasItemRegistry::new();

    let first = registry.add(heal_item(), None);
    let second = registry.add(heal_item(), None);

    assert_ne!(first, second);
    assert!(!first.is_empty());
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_add_existing_id_replaces_item() {
    let mut registry = CanvasItemRegistry::new();

    registry.add(heal_item(), Some(DEFAULT_ITEM_ID.to_string()));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(DEFAULT_ITEM_ID).unwrap().title, "Heal");
}

#[test]
fn test_remove() {
    let mut registry = CanvasItemRegistry::new();
    let id = registry.add(heal_item(), None);

    assert_eq!(registry.remove(&id), Some(heal_item()));
    assert!(registry.get(&id).is_none());
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut registry = CanvasItemRegistry::new();
    assert!(registry.remove("missing").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_reset_restores_only_default_item() {
    let mut registry = CanvasItemRegistry::new();
    registry.add(heal_item(), None);
    registry.add(heal_item(), Some(DEFAULT_ITEM_ID.to_string()));
    registry.remove("def");

    registry.reset_to_defaults();

    assert_eq!(registry.snapshot().keys().collect::<Vec<_>>(), vec![DEFAULT_ITEM_ID]);
    assert_eq!(registry.get(DEFAULT_ITEM_ID).unwrap().title, "Fireball");
}

#[test]
fn test_set_loading() {
    let mut registry = CanvasItemRegistry::new();

    assert!(registry.set_loading(DEFAULT_ITEM_ID, true));
    assert!(registry.get(DEFAULT_ITEM_ID).unwrap().loading);
    assert!(!registry.set_loading("missing", true));
}

#[test]
fn test_item_skill_view() {
    let item = heal_item();
    assert_eq!(item.skill(), Skill::new("Heal", "🩹", "Heals a target."));
}
