//! Merge prompt rendering
//!
//! Fills a merge template with the two skills being combined. The result is
//! what the caller sends to the generative provider on a cache miss.

use super::templates::{SKILL1_PLACEHOLDER, SKILL2_PLACEHOLDER};
use crate::skill::Skill;

/// `Title (description)`, or just the title when there is no description
pub fn describe_skill(skill: &Skill) -> String {
    if skill.description.trim().is_empty() {
        skill.title.clone()
    } else {
        format!("{} ({})", skill.title, skill.description)
    }
}

/// Single pass over the template; placeholder text inside the substituted
/// skills is left alone.
pub fn render_merge_prompt(template: &str, first: &Skill, second: &Skill) -> String {
    let first_text = describe_skill(first);
    let second_text = describe_skill(second);

    let mut rendered = String::with_capacity(template.len() + first_text.len() + second_text.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(SKILL1_PLACEHOLDER) {
            rendered.push_str(&first_text);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(SKILL2_PLACEHOLDER) {
            rendered.push_str(&second_text);
            rest = after;
        } else {
            rendered.push_str("{{");
            rest = &tail[2..];
        }
    }

    rendered.push_str(rest);
    rendered
}
