use std::collections::HashMap;

use crate::models::SubUtterance;

const ENABLE_LOGS: bool = true;

/// Reorder records so each recording is contiguous (in order of first
/// appearance) and sorted by `(start, end)` within the recording.
///
/// The sort is stable, so records that are already in order keep their
/// relative position and the merge sees exactly what it would have seen.
pub fn group_and_sort(records: Vec<SubUtterance>) -> Vec<SubUtterance> {
    let mut order: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<SubUtterance>> = Vec::new();

    for record in records {
        let index = match order.get(&record.recording) {
            Some(index) => *index,
            None => {
                order.insert(record.recording.clone(), groups.len());
                groups.push(Vec::new());
                groups.len() - 1
            }
        };
        groups[index].push(record);
    }

    let mut reordered = 0usize;
    let mut result = Vec::new();
    for mut group in groups {
        let was_sorted = group
            .windows(2)
            .all(|pair| (pair[0].start, pair[0].end) <= (pair[1].start, pair[1].end));
        if !was_sorted {
            reordered += 1;
            group.sort_by_key(|record| (record.start, record.end));
        }
        result.extend(group);
    }

    if reordered > 0 {
        crate::log_warn!("{reordered} recording(s) had sub-utterances out of start-time order");
    }

    result
}
