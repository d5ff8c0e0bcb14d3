//! Subprocess-backed engine session.
//!
//! The platform installer stages a `gnubg-cli` executable next to this
//! program and normalizes its name. The bridge drives it line-by-line
//! over stdin; query replies come back through the engine's embedded
//! Python interpreter as single JSON documents bracketed by sentinel
//! markers, so they can be picked out of the engine's ordinary chatter.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde_json::Value;
use tracing::{debug, info};

use crate::session::{EngineError, EngineSession, Query};

const REPLY_BEGIN: &str = "<<gnubg-bridge:begin>>";
const REPLY_END: &str = "<<gnubg-bridge:end>>";

/// Resolve the engine executable path.
///
/// `GNUBG_BIN` wins when set; otherwise the installer contract applies:
/// the executable is co-located with the current binary under the name
/// `gnubg-cli`.
pub fn engine_binary() -> PathBuf {
    if let Ok(path) = std::env::var("GNUBG_BIN") {
        return PathBuf::from(path);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("gnubg-cli")))
        .unwrap_or_else(|| PathBuf::from("gnubg-cli"))
}

pub struct CliEngine {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl CliEngine {
    /// Spawn the engine in quiet text mode with piped stdio.
    pub fn spawn(binary: &Path) -> Result<Self, EngineError> {
        let mut child = Command::new(binary)
            .arg("--tty")
            .arg("--quiet")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        let stdin = child.stdin.take().ok_or(EngineError::Closed)?;
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or(EngineError::Closed)?;
        info!(binary = %binary.display(), "engine session started");
        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }

    fn send(&mut self, line: &str) -> Result<(), EngineError> {
        debug!(command = line, "engine command");
        self.stdin.write_all(line.as_bytes())?;
        self.stdin.write_all(b"\n")?;
        self.stdin.flush()?;
        Ok(())
    }
}

impl EngineSession for CliEngine {
    fn command(&mut self, line: &str) -> Result<(), EngineError> {
        self.send(line)
    }

    fn query(&mut self, query: Query) -> Result<Value, EngineError> {
        let function = query.function();
        // The end marker is issued as a separate command: if the query
        // call raises inside the interpreter, the marker still arrives
        // and the empty reply surfaces as a per-query failure rather
        // than a stuck read.
        self.send(&format!(
            "python \"print('{REPLY_BEGIN}'); import json, gnubg; print(json.dumps(gnubg.{function}()))\""
        ))?;
        self.send(&format!("python \"print('{REPLY_END}')\""))?;
        let body = collect_reply(&mut self.stdout)?;
        serde_json::from_str(&body).map_err(|e| EngineError::MalformedReply {
            query: function,
            reason: e.to_string(),
        })
    }
}

impl Drop for CliEngine {
    fn drop(&mut self) {
        let _ = self.send("quit");
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Read lines until the sentinel-bracketed reply body has been seen.
/// Lines outside the markers are engine chatter and are discarded.
fn collect_reply<R: BufRead>(reader: &mut R) -> Result<String, EngineError> {
    let mut body = String::new();
    let mut in_reply = false;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(EngineError::Closed);
        }
        let trimmed = line.trim_end();
        if trimmed == REPLY_BEGIN {
            in_reply = true;
            continue;
        }
        if trimmed == REPLY_END {
            return Ok(body);
        }
        if in_reply {
            body.push_str(trimmed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn collect_reply_extracts_bracketed_body() {
        let stream = format!(
            "gnubg version banner\n{REPLY_BEGIN}\n{{\"equity\": 0.12}}\n{REPLY_END}\ntrailing\n"
        );
        let body = collect_reply(&mut Cursor::new(stream)).expect("reply");
        assert_eq!(body, "{\"equity\": 0.12}");
    }

    #[test]
    fn collect_reply_returns_empty_body_when_query_raised() {
        let stream = format!("{REPLY_BEGIN}\n{REPLY_END}\n");
        let body = collect_reply(&mut Cursor::new(stream)).expect("reply");
        assert!(body.is_empty());
    }

    #[test]
    fn collect_reply_reports_closed_stream() {
        let result = collect_reply(&mut Cursor::new("no markers here\n"));
        assert!(matches!(result, Err(EngineError::Closed)));
    }

    #[test]
    fn engine_binary_defaults_to_colocated_cli() {
        // Only meaningful when GNUBG_BIN is unset in the test run.
        if std::env::var("GNUBG_BIN").is_err() {
            let path = engine_binary();
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("gnubg-cli"));
        }
    }
}
