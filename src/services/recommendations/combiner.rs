use std::collections::HashMap;
use uuid::Uuid;

use super::context::ScoredPlace;

/// Merges per-source scored lists into one ranked, deduplicated list
///
/// The first occurrence of a place fixes its position in the merge order and later
/// occurrences add to its score. The final sort is stable, so equal totals keep the
/// merge order: sources are walked in the order given, entries within a source in
/// the order that source produced them.
pub fn combine<'a, I>(sources: I) -> Vec<ScoredPlace<'a>>
where
    I: IntoIterator<Item = Vec<ScoredPlace<'a>>>,
{
    let mut merged: Vec<ScoredPlace<'a>> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for source in sources {
        for scored in source {
            match index.get(&scored.id()) {
                Some(&position) => merged[position].score += scored.score,
                None => {
                    index.insert(scored.id(), merged.len());
                    merged.push(scored);
                }
            }
        }
    }

    merged.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged
}
