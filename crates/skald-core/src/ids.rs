//! Prefixed ulid identifiers for stories and achievements.

/// Story id format: `sty_<ulid>`
pub fn new_story_id() -> String {
    format!("sty_{}", ulid::Ulid::new().to_string().to_lowercase())
}

/// Achievement id format: `ach_<ulid>`
pub fn new_achievement_id() -> String {
    format!("ach_{}", ulid::Ulid::new().to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_prefixes() {
        assert!(new_story_id().starts_with("sty_"));
        assert!(new_achievement_id().starts_with("ach_"));
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(new_story_id(), new_story_id());
    }
}
