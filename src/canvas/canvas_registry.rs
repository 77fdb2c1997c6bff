use std::collections::BTreeMap;

use uuid::Uuid;

use crate::skill::Skill;

pub const DEFAULT_ITEM_ID: &str = "def";

/// A skill placed on the canvas at a pixel offset
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasItem {
    pub top: f64,
    pub left: f64,
    pub title: String,
    pub emoji: String,
    pub description: String,
    /// Set while a combination involving this item is being generated
    pub loading: bool,
}

impl CanvasItem {
    pub fn from_skill(skill: &Skill, top: f64, left: f64) -> Self {
        CanvasItem {
            top,
            left,
            title: skill.title.clone(),
            emoji: skill.emoji.clone(),
            description: skill.description.clone(),
            loading: false,
        }
    }

    pub fn skill(&self) -> Skill {
        Skill::new(&self.title, &self.emoji, &self.description)
    }
}

fn default_items() -> BTreeMap<String, CanvasItem> {
    let fireball = Skill::new("Fireball", "🔥", "Launches a fireball.");
    BTreeMap::from([(
        DEFAULT_ITEM_ID.to_string(),
        CanvasItem::from_skill(&fireball, 20.0, 80.0),
    )])
}

/// Id to placed item. Starts with the default item.
#[derive(Debug, Clone)]
pub struct CanvasItemRegistry {
    items: BTreeMap<String, CanvasItem>,
}

impl Default for CanvasItemRegistry {
    fn default() -> Self {
        CanvasItemRegistry {
            items: default_items(),
        }
    }
}

impl CanvasItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `item` under `id`, or under a fresh id when none is given.
    /// An existing item with the same id is replaced.
    pub fn add(&mut self, item: CanvasItem, id: Option<String>) -> String {
        let id = id.unwrap_or_else(|| self.generate_id());
        self.items.insert(id.clone(), item);
        id
    }

    /// Unknown ids are ignored
    pub fn remove(&mut self, id: &str) -> Option<CanvasItem> {
        self.items.remove(id)
    }

    pub fn reset_to_defaults(&mut self) {
        self.items = default_items();
    }

    pub fn get(&self, id: &str) -> Option<&CanvasItem> {
        self.items.get(id)
    }

    /// Returns false if there is no item with this id
    pub fn set_loading(&mut self, id: &str, loading: bool) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                item.loading = loading;
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> &BTreeMap<String, CanvasItem> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn generate_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if !self.items.contains_key(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
#[path = "canvas_registry_tests.rs"]
mod canvas_registry_tests;
