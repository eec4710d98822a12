use std::io::Write;

use anyhow::{Context, Result};

use crate::alfred::protocol::Feedback;
use crate::case::registry::Conversion;

/// Write the feedback document as a single JSON line.
pub fn write_feedback<W: Write>(out: &mut W, feedback: &Feedback) -> Result<()> {
    serde_json::to_writer(&mut *out, feedback).context("Failed to write feedback JSON")?;
    writeln!(out).context("Failed to write feedback JSON")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Write one converted string exactly as is, without a trailing newline,
/// so the launcher can paste it directly.
pub fn write_converted<W: Write>(out: &mut W, converted: &str) -> Result<()> {
    out.write_all(converted.as_bytes())
        .context("Failed to write converted text")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// One `name<TAB>identifier` line per known conversion; `-` marks
/// conversions that are not listed in the launcher feedback.
pub fn write_conversion_names<W: Write>(out: &mut W) -> Result<()> {
    for conversion in Conversion::ALL {
        let uid = conversion.listing().map_or("-", |l| l.uid);
        writeln!(out, "{}\t{}", conversion.function_name(), uid)
            .context("Failed to write conversion list")?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
