//! Newline-delimited JSON encoding.

use std::io::Write;

use serde::Serialize;

/// Write each item as one compact JSON object followed by `\n`.
///
/// Non-ASCII characters are emitted as UTF-8, never `\u` escaped.
pub fn write_ndjson<'a, W, T, I>(mut writer: W, items: I) -> serde_json::Result<()>
where
  W: Write,
  T: Serialize + 'a,
  I: IntoIterator<Item = &'a T>,
{
  for item in items {
    serde_json::to_writer(&mut writer, item)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
  }
  writer.flush().map_err(serde_json::Error::io)
}
