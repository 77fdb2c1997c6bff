use crate::error::Result;
use crate::skill::Skill;
use crate::storage::{self, KeyValueStore};

pub const RESOURCES_STORAGE_KEY: &str = "opencraft/resources";

/// The templates a fresh catalog starts with, in display order
pub fn default_resources() -> Vec<Skill> {
    vec![
        Skill::new(
            "Alter Skill",
            "🎲",
            "Alters an existing skill in unexpected ways (e.g. changing some property, adding a cost for a stronger effect, etc - not something to do with randomness or surprise, unexpected here means the AI decides).",
        ),
        Skill::new(
            "Corrupt Skill",
            "🕳️",
            "Twists an existing skill into something radically new, which could be construed as evil and corrupted (do not use the words evil or corrupted, be creative).",
        ),
        Skill::new(
            "Skill Level Up",
            "⬆️",
            "Improves an existing skill, turning it into a starkly more powerful variant.",
        ),
        Skill::new(
            "Skill Elemental Change",
            "🍃",
            "Alters a skill by changing what element it uses as well as slightly changing its effects.",
        ),
        Skill::new("Heal", "🩹", "Heals a target."),
        Skill::new("Fireball", "🔥", "Launches a fireball."),
        Skill::new("Rock Bullet", "🪨", "Shoots a rock bullet."),
        Skill::new("Wind Blade", "💨", "Sends a sharp wind blade."),
        Skill::new("Beginner Swordmanship", "⚔️", "Bestows basic sword skills."),
    ]
}

/// Ordered, persisted list of skill templates available for placement
#[derive(Debug)]
pub struct ResourceCatalog<S: KeyValueStore> {
    store: S,
    resources: Vec<Skill>,
}

impl<S: KeyValueStore> ResourceCatalog<S> {
    pub fn open(store: S) -> Result<Self> {
        let resources = storage::load_or_default(&store, RESOURCES_STORAGE_KEY, default_resources)?;
        Ok(ResourceCatalog { store, resources })
    }

    pub fn all(&self) -> &[Skill] {
        &self.resources
    }

    /// First template with exactly this title
    pub fn find(&self, title: &str) -> Option<&Skill> {
        self.resources.iter().find(|r| r.title == title)
    }

    pub fn add(&mut self, resource: Skill) -> Result<()> {
        self.resources.push(resource);
        if let Err(e) = self.save() {
            self.resources.pop();
            return Err(e);
        }
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) -> Result<()> {
        let previous = std::mem::replace(&mut self.resources, default_resources());
        if let Err(e) = self.save() {
            self.resources = previous;
            return Err(e);
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        storage::save(&self.store, RESOURCES_STORAGE_KEY, &self.resources)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_fresh_catalog_has_defaults() {
        let catalog = ResourceCatalog::open(MemoryStore::new()).unwrap();

        let titles: Vec<&str> = catalog.all().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles.len(), 9);
        assert_eq!(titles[0], "Alter Skill");
        assert_eq!(titles[8], "Beginner Swordmanship");
    }

    #[test]
    fn test_find_by_title() {
        let catalog = ResourceCatalog::open(MemoryStore::new()).unwrap();
        assert_eq!(catalog.find("Heal").unwrap().emoji, "🩹");
        assert!(catalog.find("heal").is_none());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let store = MemoryStore::new();
        let mut catalog = ResourceCatalog::open(store.clone()).unwrap();

        catalog
            .add(Skill::new("Frost Nova", "❄️", "Freezes everything nearby."))
            .unwrap();

        assert_eq!(catalog.all().last().unwrap().title, "Frost Nova");
        let reloaded = ResourceCatalog::open(store).unwrap();
        assert_eq!(reloaded.all().len(), 10);
        assert_eq!(reloaded.all()[9].title, "Frost Nova");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = MemoryStore::new();
        let mut catalog = ResourceCatalog::open(store.clone()).unwrap();
        catalog.add(Skill::titled("Frost Nova")).unwrap();

        catalog.reset_to_defaults().unwrap();

        assert_eq!(catalog.all(), default_resources().as_slice());
        let reloaded = ResourceCatalog::open(store).unwrap();
        assert_eq!(reloaded.all(), default_resources().as_slice());
    }

    #[test]
    fn test_malformed_storage_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.insert_raw(RESOURCES_STORAGE_KEY, json!({"not": "a list"}));

        let catalog = ResourceCatalog::open(store).unwrap();
        assert_eq!(catalog.all(), default_resources().as_slice());
    }

    #[test]
    fn test_persisted_empty_list_is_kept() {
        let store = MemoryStore::new();
        store.insert_raw(RESOURCES_STORAGE_KEY, json!([]));

        let catalog = ResourceCatalog::open(store).unwrap();
        assert!(catalog.all().is_empty());
    }

    #[test]
    fn test_failed_add_is_rolled_back() {
        let store = MemoryStore::new();
        let mut catalog = ResourceCatalog::open(store.clone()).unwrap();
        store.set_fail_writes(true);

        assert!(catalog.add(Skill::titled("Frost Nova")).is_err());
        assert!(catalog.find("Frost Nova").is_none());
    }
}
