//! Tag chip row model.
//!
//! One "all" chip followed by one chip per distinct tag. Exactly one chip is
//! active: the one whose value equals the current tag filter.

use crate::labels::ALL_TAGS;

/// A single toggle button in the chip row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    /// Tag selected by this chip; `None` for the "all" chip.
    pub value: Option<String>,
    pub active: bool,
}

impl Chip {
    /// Value as written into the tag dropdown. Unique within a row, so it
    /// also keys the chip's button.
    pub fn select_value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

/// Build the chip row for `tags` with `active` as the selected tag.
///
/// With no tags there is no row at all, not even the "all" chip.
pub fn chip_row(tags: &[String], active: Option<&str>) -> Vec<Chip> {
    if tags.is_empty() {
        return Vec::new();
    }

    let mut chips = Vec::with_capacity(tags.len() + 1);
    chips.push(Chip {
        label: ALL_TAGS.to_string(),
        value: None,
        active: active.is_none(),
    });
    chips.extend(tags.iter().map(|tag| Chip {
        label: tag.clone(),
        value: Some(tag.clone()),
        active: active == Some(tag.as_str()),
    }));
    chips
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn tags() -> Vec<String> {
        vec!["aksiyon".to_string(), "bulmaca".to_string()]
    }

    #[test]
    fn test_no_tags_no_chips() {
        assert!(chip_row(&[], None).is_empty());
    }

    #[test]
    fn test_all_chip_active_by_default() {
        let chips = chip_row(&tags(), None);
        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0].label, "Tümü");
        assert!(chips[0].active);
        assert_eq!(chips.iter().filter(|c| c.active).count(), 1);
    }

    #[test]
    fn test_selected_tag_is_the_only_active_chip() {
        let chips = chip_row(&tags(), Some("bulmaca"));
        let active: Vec<_> = chips.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].select_value(), "bulmaca");
    }

    #[test]
    fn test_all_chip_select_value_is_empty() {
        let chips = chip_row(&tags(), None);
        assert_eq!(chips[0].select_value(), "");
    }

    #[test]
    fn test_tag_named_like_all_chip_keeps_distinct_values() {
        let tags = vec!["Tümü".to_string(), "aksiyon".to_string()];
        let chips = chip_row(&tags, Some("Tümü"));
        let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Tümü", "Tümü", "aksiyon"]);

        let values: HashSet<_> = chips.iter().map(Chip::select_value).collect();
        assert_eq!(values.len(), chips.len());
        assert!(!chips[0].active);
        assert!(chips[1].active);
    }
}
