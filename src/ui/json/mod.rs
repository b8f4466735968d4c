//! NDJSON output for `--json` mode.
//!
//! Every command emits `start`, then zero or more `data` events, then
//! `complete` (or `error`). One JSON object per line on stdout.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::*;

    #[test]
    fn typed_event_is_one_json_line() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("hunt")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["event"], "start");
        assert_eq!(parsed["command"], "hunt");
    }

    #[test]
    fn events_form_ndjson_stream() {
        let mut buffer = Vec::new();

        write_typed_event(&mut buffer, &StartEvent::new("classify")).unwrap();
        write_typed_event(
            &mut buffer,
            &DataEvent::new("classify", serde_json::json!({"year": 2000, "leap": true})),
        )
        .unwrap();
        write_typed_event(&mut buffer, &CompleteEvent::success("classify")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        let data: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(data["event"], "data");
        assert_eq!(data["leap"], true);
    }
}
