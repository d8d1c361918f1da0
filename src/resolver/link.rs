/// Presentation-only processing of a reference's title and target.
///
/// When the author supplied no explicit title, two modifiers apply:
/// - a leading `:` in the title only has meaning for the target and is
///   stripped from the displayed text
/// - a leading `~` in the target suppresses module qualification in the
///   displayed text: only the part after the last `:` is shown
///
/// These conventions are independent of whether the reference resolves.
pub fn process_link(title: &str, target: &str, has_explicit_title: bool) -> (String, String) {
    if has_explicit_title {
        return (title.to_string(), target.to_string());
    }

    let mut title = title.trim_start_matches(':').to_string();
    let target = target.trim_start_matches('~').to_string();
    if let Some(rest) = title.strip_prefix('~') {
        title = match rest.rfind(':') {
            Some(colon) => rest[colon + 1..].to_string(),
            None => rest.to_string(),
        };
    }
    (title, target)
}
