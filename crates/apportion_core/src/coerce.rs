/// Coerce the vote text of the entry form to a number.
///
/// Blank text counts as zero votes. Anything that does not parse becomes
/// NaN so that engine validation reports it as an invalid vote count.
pub fn coerce_votes(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
