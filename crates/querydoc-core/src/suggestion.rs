/// Finds the candidate closest to `provided` by edit distance.
///
/// Candidates are only considered "close enough" when their distance is
/// below both `provided.len() * 1.1` and three times the candidate's own
/// length; the first candidate wins among equally close ones.
pub fn closest_match<'a>(
    provided: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let candidates: Vec<&'a str> = candidates.into_iter().collect();
    let mut best_distance = candidates.iter()
        .map(|candidate| candidate.chars().count() as f64 * 3.0)
        .fold(provided.chars().count() as f64 * 1.1, f64::min);
    let mut best_match = None;
    for candidate in candidates {
        let distance = edit_distance(provided, candidate) as f64;
        if distance < best_distance {
            best_distance = distance;
            best_match = Some(candidate);
        }
    }
    best_match
}

/// Levenshtein distance between two strings, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row = vec![0; b_chars.len() + 1];
    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution_cost = usize::from(a_char != *b_char);
            curr_row[j + 1] = (prev_row[j] + substitution_cost)
                .min(prev_row[j + 1] + 1)
                .min(curr_row[j] + 1);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b_chars.len()]
}
