use crate::event::Event;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Longest line the decoder keeps buffering before discarding it.\
/// A legitimate event line is tens of bytes; anything near this limit is garbage input.
const MAX_LINE_LEN: usize = 64 * 1024;

/// Serializes an event as a single `\n`-terminated JSON line.
pub fn encode_line(event: &Event) -> serde_json::Result<Vec<u8>> {
    let mut line = serde_json::to_vec(event)?;
    line.push(b'\n');
    Ok(line)
}

/// Incremental decoder for the newline-delimited JSON event stream.\
/// Raw bytes go in as they arrive from the socket; complete lines come out as events.
/// Lines that fail to decode are logged and skipped, partial lines stay buffered
/// until the rest of them shows up.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buf: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Appends raw bytes received from the peer.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Pops the next decodable event, skipping lines that are not valid events.\
    /// Returns `None` once no complete line remains buffered.
    pub fn next_event(&mut self) -> Option<Event> {
        while let Some(line) = self.next_line() {
            if line.is_empty() {
                continue;
            }
            match serde_json::from_slice::<Event>(&line) {
                Ok(event) => {
                    log::trace!("Decoded event: {:?}", event);
                    return Some(event);
                }
                Err(err) => {
                    log::warn!(
                        "Dropping malformed event line ({}): {:?}",
                        err,
                        String::from_utf8_lossy(&line)
                    );
                }
            }
        }
        None
    }

    fn next_line(&mut self) -> Option<Vec<u8>> {
        if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let mut line = std::mem::replace(&mut self.buf, rest);
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            return Some(line);
        }
        if self.buf.len() > MAX_LINE_LEN {
            log::warn!(
                "Dropping oversized partial line ({} bytes buffered)",
                self.buf.len()
            );
            self.buf.clear();
        }
        None
    }
}

/// A bidirectional event codec over any async byte stream.
#[derive(Debug)]
pub struct EventStream<S: AsyncRead + AsyncWrite + Send + Unpin> {
    /// The underlying reader and writer stream.
    stream: S,
    decoder: LineDecoder,
}

impl<S: AsyncRead + AsyncWrite + Send + Unpin> EventStream<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            decoder: LineDecoder::new(),
        }
    }

    pub fn get_stream(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Writes one event as a single line and flushes it out immediately.\
    /// Every event is its own line; there is no other framing.
    pub async fn send(&mut self, event: &Event) -> std::io::Result<()> {
        let line =
            encode_line(event).map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        self.stream.write_all(&line).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Reads the next event from the stream, skipping lines that fail to decode.\
    /// Returns `UnexpectedEof` once the peer closes the connection.
    pub async fn receive(&mut self) -> std::io::Result<Event> {
        loop {
            if let Some(event) = self.decoder.next_event() {
                return Ok(event);
            }
            let mut chunk = [0u8; 4096];
            let read = self.stream.read(&mut chunk).await?;
            if read == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "connection closed",
                ));
            }
            self.decoder.push_bytes(&chunk[..read]);
        }
    }
}
