use std::io::{BufRead, Write};

use crate::adapter::PromptAdapter;
use crate::error::{Error, Result};

use super::Event;

/// Drive the plugin against a host: one JSON event per line in, one JSON
/// render action per line out.
///
/// Blank lines are skipped. A line that does not decode into an [`Event`]
/// is logged and dropped so host garbage cannot kill the plugin; the loop
/// ends at EOF.
pub fn serve(reader: impl BufRead, mut writer: impl Write, adapter: &PromptAdapter) -> Result<()> {
    tracing::info!("prompt relay started");

    for line in reader.lines() {
        let line = line.map_err(|source| Error::ReadEvent { source })?;
        if line.trim().is_empty() {
            continue;
        }

        let event: Event = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(%err, line, "dropping undecodable event");
                continue;
            }
        };

        let render = adapter.handle_query(&event);
        let encoded =
            serde_json::to_string(&render).map_err(|source| Error::EncodeRender { source })?;
        writeln!(writer, "{encoded}").map_err(|source| Error::WriteRender { source })?;
        writer.flush().map_err(|source| Error::WriteRender { source })?;
    }

    Ok(())
}
