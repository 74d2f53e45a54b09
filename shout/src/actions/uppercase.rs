use crate::command::CommandError;
use shout_text::Document;
use shout_transform::to_uppercase;

/// Convert every line of the active document to uppercase, in place.
///
/// Lines are processed in ascending index order with one replacement write
/// per line. Iterations are independent: a conversion failure on line `i`
/// propagates immediately, leaving lines `0..i` converted and lines past
/// `i` untouched.
pub fn convert_document(document: &mut Document) -> Result<(), CommandError> {
    tracing::debug!(lines = document.line_count(), "uppercasing document");
    for index in 0..document.line_count() {
        let converted = match document.line(index) {
            Some(line) => to_uppercase(line)?,
            None => continue,
        };
        document.set_line(index, converted);
    }
    Ok(())
}
