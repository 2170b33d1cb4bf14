/// Returns `input` in uppercase when `to_upper` is set, lowercase otherwise.
pub fn format_string(input: &str, to_upper: bool) -> String {
    if to_upper {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}
