//! Summary reporting over a contact set.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Contact;

/// Number of contacts carrying one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    /// Display form of the tag (casing of its first appearance).
    pub tag: String,
    /// How many contacts carry it.
    pub count: usize,
}

/// Counts contacts per tag, case-insensitively.
///
/// Results are sorted by descending count, then alphabetically by the
/// display form. Contacts without tags contribute nothing.
#[must_use]
pub fn tag_stats(contacts: &[Contact]) -> Vec<TagCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut display: HashMap<String, String> = HashMap::new();

    for contact in contacts {
        for tag in &contact.tags {
            let normalized = tag.normalized();
            display
                .entry(normalized.clone())
                .or_insert_with(|| tag.as_str().to_string());
            *counts.entry(normalized).or_insert(0) += 1;
        }
    }

    let mut out: Vec<TagCount> = counts
        .into_iter()
        .map(|(normalized, count)| TagCount {
            tag: display[&normalized].clone(),
            count,
        })
        .collect();
    out.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.tag.to_lowercase().cmp(&b.tag.to_lowercase()))
    });
    out
}
