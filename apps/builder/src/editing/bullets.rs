//! Bullet list operations shared by experience entries, project entries and the two
//! flat lists (activities, certifications).
//!
//! Indices come from the rendered list, so an out-of-range index should not happen.
//! When one does, the list is returned unchanged.

use serde::{Deserialize, Serialize};

/// Which bullet list an edit applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "list", rename_all = "snake_case")]
pub enum BulletTarget {
    Experience { id: String },
    Project { id: String },
    Activities,
    Certifications,
}

/// Appends an empty bullet.
pub fn push_bullet(bullets: &[String]) -> Vec<String> {
    let mut next = bullets.to_vec();
    next.push(String::new());
    next
}

/// Replaces the bullet at `index`.
pub fn set_bullet(bullets: &[String], index: usize, value: &str) -> Vec<String> {
    let mut next = bullets.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = value.to_string();
    }
    next
}

/// Removes the bullet at `index`, shifting later bullets down.
pub fn remove_bullet(bullets: &[String], index: usize) -> Vec<String> {
    bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, b)| b.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_push_appends_empty_string() {
        assert_eq!(push_bullet(&list(&["a"])), list(&["a", ""]));
        assert_eq!(push_bullet(&[]), list(&[""]));
    }

    #[test]
    fn test_set_replaces_only_target_index() {
        let next = set_bullet(&list(&["a", "b", "c"]), 1, "B");
        assert_eq!(next, list(&["a", "B", "c"]));
    }

    #[test]
    fn test_remove_shifts_following_items() {
        let next = remove_bullet(&list(&["a", "b", "c"]), 0);
        assert_eq!(next, list(&["b", "c"]));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let bullets = list(&["a", "b"]);
        assert_eq!(set_bullet(&bullets, 5, "x"), bullets);
        assert_eq!(remove_bullet(&bullets, 2), bullets);
        assert!(remove_bullet(&[], 0).is_empty());
    }

    #[test]
    fn test_push_then_remove_last_round_trips() {
        for start in [list(&[]), list(&["one"]), list(&["one", "two", ""])] {
            let pushed = push_bullet(&start);
            let restored = remove_bullet(&pushed, start.len());
            assert_eq!(restored, start);
        }
    }

    #[test]
    fn test_target_wire_format() {
        let target = BulletTarget::Experience { id: "abc".to_string() };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["list"], "experience");
        assert_eq!(json["id"], "abc");

        let flat: BulletTarget = serde_json::from_str(r#"{"list":"activities"}"#).unwrap();
        assert_eq!(flat, BulletTarget::Activities);
    }
}
