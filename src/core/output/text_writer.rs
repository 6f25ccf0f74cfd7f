//! Plain text transcript writer.
//!
//! Mirrors the viewer layout: a header per calendar date, then one entry per
//! message with avatar initials, sender, 12-hour time and body.
//!
//! ```text
//! ### 15 Jan 2024
//!
//! [AS] Alice Smith  09:05 PM
//!     Hello!
//!
//! -- End of Chat --
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Message;
use crate::core::display::{display_time, group_by_date, initials};
use crate::error::ChatviewError;

/// Rendered instead of a transcript when there is nothing to show.
pub const NO_MATCHES: &str = "No messages match filters or search.";

/// Footer written after the last message.
pub const END_OF_CHAT: &str = "-- End of Chat --";

/// Writes a transcript to a file.
pub fn write_text(
    messages: &[Message],
    output_path: impl AsRef<Path>,
) -> Result<(), ChatviewError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_text(messages).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders a transcript as a string.
pub fn to_text(messages: &[Message]) -> String {
    if messages.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let mut out = String::new();

    for group in group_by_date(messages) {
        out.push_str(&format!("### {}\n\n", group.label()));

        for msg in group.messages {
            out.push_str(&format!(
                "[{}] {}  {}\n",
                initials(&msg.sender),
                msg.sender,
                display_time(&msg.timestamp)
            ));
            out.push_str(&format!("    {}\n\n", msg.body));
        }
    }

    out.push_str(END_OF_CHAT);
    out.push('\n');
    out
}
