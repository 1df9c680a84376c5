use std::io::Write;

use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::ReportError;

/// Render an envelope as 2-space indented JSON with a trailing newline.
pub fn render_envelope<R: Serialize>(envelope: &Envelope<R>) -> Result<String, ReportError> {
    let mut rendered = serde_json::to_string_pretty(envelope)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the rendered envelope to `writer` and flush it.
pub fn write_envelope<R: Serialize, W: Write>(
    envelope: &Envelope<R>,
    writer: &mut W,
) -> Result<(), ReportError> {
    let rendered = render_envelope(envelope)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
