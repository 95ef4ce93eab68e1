use crate::codec::EventStream;
use crate::event::Event;
use crate::Result;
use std::net::SocketAddr;
use tokio::net::{TcpSocket, TcpStream};
use tokio::sync::mpsc;

/// Port the drawing wire protocol runs on.
pub const DEFAULT_PORT: u16 = 12345;

/// Bound on decoded events waiting for the render loop.\
/// A full feed pushes back through TCP instead of growing without limit.
const FEED_CAPACITY: usize = 256;

/// What a [`SessionFeed`] yields to its consumer, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A client connected; stroke continuity starts clean.
    Connected(SocketAddr),
    /// One decoded drawing event.
    Event(Event),
    /// The client went away; the canvas keeps its contents.
    Disconnected(SocketAddr),
}

/// Accepts drawing clients one at a time and forwards their decoded event
/// stream into a bounded channel.
///
/// Sessions are strictly serial: with a one-slot listen backlog a second
/// client may queue while a session runs, but it is only accepted once the
/// current client goes away. The consumer therefore never sees interleaved
/// sessions and per-session state needs no locking.
#[derive(Debug)]
pub struct EventServer {
    listener: tokio::net::TcpListener,
}

impl EventServer {
    /// Binds `0.0.0.0:port` with a one-slot backlog.
    pub async fn bind(port: u16) -> Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let socket = TcpSocket::new_v4()?;
        socket.bind(addr)?;
        let listener = socket.listen(1)?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Spawns the accept loop and hands back the feed it fills.\
    /// The loop ends when the feed is dropped.
    pub fn spawn(self) -> SessionFeed {
        let (tx, rx) = mpsc::channel(FEED_CAPACITY);
        tokio::spawn(self.serve(tx));
        SessionFeed { rx }
    }

    async fn serve(self, feed: mpsc::Sender<SessionEvent>) {
        loop {
            let (stream, addr) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(err) => {
                    log::error!("Accept failed: {}", err);
                    break;
                }
            };
            log::info!("+ Client connected from {}", addr);
            if feed.send(SessionEvent::Connected(addr)).await.is_err() {
                break;
            }
            Self::handle_client(EventStream::new(stream), &feed).await;
            log::info!("- Client disconnected from {}", addr);
            if feed.send(SessionEvent::Disconnected(addr)).await.is_err() {
                break;
            }
        }
    }

    /// Reads one session's events until the peer goes away or the feed closes.
    async fn handle_client(mut messages: EventStream<TcpStream>, feed: &mpsc::Sender<SessionEvent>) {
        loop {
            match messages.receive().await {
                Ok(event) => {
                    if feed.send(SessionEvent::Event(event)).await.is_err() {
                        break;
                    }
                }
                Err(err) => match err.kind() {
                    std::io::ErrorKind::UnexpectedEof
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::NotConnected => {
                        log::trace!("Client disconnected!");
                        break;
                    }
                    _ => {
                        log::error!("Error reading event: {}", err);
                        break;
                    }
                },
            }
        }
    }
}

/// Consumer handle for the session channel filled by [`EventServer::spawn`].
#[derive(Debug)]
pub struct SessionFeed {
    rx: mpsc::Receiver<SessionEvent>,
}

impl SessionFeed {
    /// Non-blocking poll, for draining inside a render loop tick.
    pub fn try_next(&mut self) -> Option<SessionEvent> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next session event; `None` once the server task is gone.
    pub async fn next(&mut self) -> Option<SessionEvent> {
        self.rx.recv().await
    }
}
