use log::debug;

/// Leading token that marks a day with no activity.
pub const NONE_TOKEN: &str = "No";

/// Read the contribution count from an annotation such as
/// "5 contributions on March 3rd". Unreadable text counts as 0.
pub fn extract_count(text: &str) -> u32 {
    let text = text.trim_start();
    let token = text.split_whitespace().next().unwrap_or("");
    if token == NONE_TOKEN {
        return 0;
    }

    let digits: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| *c != ',')
        .collect();

    if digits.is_empty() {
        debug!("No count in annotation {:?}", text);
        return 0;
    }
    match digits.parse::<u64>() {
        Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
        // more digits than u64 holds
        Err(_) => u32::MAX,
    }
}
