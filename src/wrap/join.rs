use super::LineEnding;

/// Concatenates lines, terminating every one of them (the last included).
pub fn join_lines<S: AsRef<str>>(lines: &[S], line_ending: LineEnding) -> String {
    let newline = line_ending.as_str();
    let capacity = lines
        .iter()
        .map(|line| line.as_ref().len() + newline.len())
        .sum();

    let mut joined = String::with_capacity(capacity);
    for line in lines {
        joined.push_str(line.as_ref());
        joined.push_str(newline);
    }
    joined
}
