pub mod payload;
pub mod sink;
pub mod state;
pub mod transport;

use crate::error::{DecodeError, Result};
use payload::info::Sample;
use serde::Serialize;
use serde_json::Value;
use sink::Sink;
use state::StationState;
use std::net::IpAddr;
use std::path::Path;
use tracing::{debug, info, warn};
use transport::udp;

// A decoded sample as emitted: its fields, its "type" tag and the sender address
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Record {
    #[serde(flatten)]
    pub sample: Sample,
    pub src: IpAddr,
}

/// Decodes one raw datagram.
///
/// `Ok(None)` means a well formed message of a type with no decoder.
pub fn decode_datagram(raw: &[u8], src: IpAddr) -> Result<Option<Record>> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| DecodeError::MalformedPayload(format!("invalid UTF-8: {e}")))?;
    let msg: Value = serde_json::from_str(text.trim())
        .map_err(|e| DecodeError::MalformedPayload(format!("invalid JSON: {e}")))?;
    let record = payload::route(&msg)?.map(|sample| Record { sample, src });
    Ok(record)
}

pub struct Collector {
    state: StationState,
    sinks: Vec<Sink>,
    summary: bool, // also emit the display summary after each merge
}

impl Collector {
    pub fn new(sinks: Vec<Sink>, summary: bool) -> Self {
        Self {
            state: StationState::empty(),
            sinks,
            summary,
        }
    }

    pub fn state(&self) -> &StationState {
        &self.state
    }

    /// Handles one datagram. Decode failures are logged and swallowed,
    /// only sink errors are returned.
    pub async fn handle(&mut self, raw: &[u8], src: IpAddr) -> anyhow::Result<()> {
        match decode_datagram(raw, src) {
            Ok(Some(record)) => {
                self.state.apply(&record.sample);
                let line = serde_json::to_string(&record)?;
                self.emit(&line).await?;
                if self.summary {
                    let line = serde_json::to_string(&self.state.summary())?;
                    self.emit(&line).await?;
                }
            }
            Ok(None) => debug!("Message type not handled from {src}"),
            Err(e) => warn!("Discarding datagram from {src}: {e}"),
        }
        Ok(())
    }

    async fn emit(&mut self, line: &str) -> anyhow::Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.emit(line).await?;
        }
        Ok(())
    }
}

pub async fn task(port: u16, collector: &mut Collector) -> anyhow::Result<()> {
    let mut transport = udp::Transport::new(port).await?;
    info!("Listening for Tempest datagrams on {}", transport.local_addr()?);
    loop {
        let datagram = transport.reading().await?;
        debug!(
            "{} bytes from {} at {}",
            datagram.payload.len(),
            datagram.src,
            datagram.tstamp.format("%H:%M:%S%.3f")
        );
        if datagram.truncated {
            warn!(
                "Datagram from {} filled the {} byte buffer and was cut short",
                datagram.src,
                datagram.payload.len()
            );
        }
        collector.handle(&datagram.payload, datagram.src.ip()).await?;
    }
}

// Feeds a capture file, one datagram per line, through the collector
pub async fn replay(path: &Path, src: IpAddr, collector: &mut Collector) -> anyhow::Result<usize> {
    let contents = tokio::fs::read_to_string(path).await?;
    let mut count = 0;
    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        collector.handle(line.as_bytes(), src).await?;
        count += 1;
    }
    info!("Replayed {count} datagrams from {}", path.display());
    Ok(count)
}
