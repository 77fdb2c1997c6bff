use std::fmt;

use serde::{Deserialize, Serialize};

/// A combinable capability. Only `title` identifies a skill for caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub description: String,
}

impl Skill {
    pub fn new(
        title: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Skill {
            title: title.into(),
            emoji: emoji.into(),
            description: description.into(),
        }
    }

    /// A skill known only by its title
    pub fn titled(title: impl Into<String>) -> Self {
        Skill::new(title, "", "")
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.emoji.is_empty() {
            write!(f, "{} ", self.emoji)?;
        }
        write!(f, "{}", self.title)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}
