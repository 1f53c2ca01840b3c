/// Greedy line fill at a fixed column width.
///
/// Words are taken in input order and appended to the current line while
/// the line plus the next word stays within `width`; otherwise the line is
/// closed and the word starts a new one. The final partial line is always
/// emitted. Words are never split, so a single word longer than `width`
/// lands on a line of its own.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.len() + word.len() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(line.trim().to_owned());
            line = word.to_owned();
        }
    }
    lines.push(line.trim().to_owned());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 10, "")]
    #[case("Hi there", 60, "Hi there")]
    #[case("one two three four", 8, "one two\nthree\nfour")]
    #[case("a bb ccc", 3, "a\nbb\nccc")]
    #[case("aa bb", 5, "aa bb")]
    #[case("hello\n  world\tfoo", 60, "hello world foo")]
    // a line opened by a break may run one past the width
    #[case("onetwoo three ab", 7, "onetwoo\nthree ab")]
    // an oversized first word closes the empty opening line
    #[case("averyverylongword ok", 5, "\naveryverylongword\nok")]
    fn wraps_greedily(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(wrap(text, width), expected);
    }

    #[rstest]
    #[case("the quick brown fox jumps over the lazy dog", 10)]
    #[case("the quick brown fox jumps over the lazy dog", 1)]
    #[case("indistinguishable counterrevolutionaries", 8)]
    #[case("  leading and   trailing   whitespace  ", 12)]
    #[case("short", 80)]
    fn keeps_every_word_in_order(#[case] text: &str, #[case] width: usize) {
        let wrapped = wrap(text, width);

        let original: Vec<&str> = text.split_whitespace().collect();
        let rejoined: Vec<&str> = wrapped.split_whitespace().collect();
        assert_eq!(original, rejoined);

        for line in wrapped.lines() {
            let single_word = !line.trim().contains(' ');
            assert!(
                line.len() <= width + 1 || single_word,
                "line {line:?} is too wide for width {width}"
            );
        }
    }
}
