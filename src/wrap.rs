/// Reflows `input` at word boundaries so no line grows past `limit` characters.
///
/// Each word counts its length plus one separator. A word that alone exceeds
/// `limit` is kept whole on its own line. A non-positive `limit` only
/// normalizes whitespace.
pub fn wrap(input: &str, limit: i64) -> String {
    let mut words = input.split_whitespace();
    if limit <= 0 {
        return words.collect::<Vec<_>>().join(" ");
    }

    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let mut result = String::with_capacity(input.len());
    let mut count = 0usize;

    if let Some(first) = words.next() {
        result.push_str(first);
        count = first.chars().count() + 1;
    }

    for word in words {
        let len = word.chars().count();
        if count + len > limit {
            result.push('\n');
            count = 0;
        } else {
            result.push(' ');
        }
        result.push_str(word);
        count += len + 1;
    }

    result
}
