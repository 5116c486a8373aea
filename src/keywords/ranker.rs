// Frequency ranker: count candidates, order by count, keep the top N.
//
// Equal counts keep the order in which each word first appeared, so the
// output is fully determined by the input sequence.

use std::collections::HashMap;

/// Rank candidate words by descending frequency and return at most `top_n`.
pub fn rank<S: AsRef<str>>(candidates: &[S], top_n: usize) -> Vec<String> {
    if top_n == 0 {
        return Vec::new();
    }

    // word -> (count, index of first occurrence)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, word) in candidates.iter().enumerate() {
        counts
            .entry(word.as_ref())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, i));
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, _, _)| word.to_string())
        .collect()
}
