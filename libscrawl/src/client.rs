use crate::codec::EventStream;
use crate::Result;
use tokio::net::TcpStream;

/// Event codec over the drawing client's connection to a viewer.
pub type ServerStream = EventStream<TcpStream>;

/// Connects to a viewer and wraps the socket in an [`EventStream`].\
/// There is no handshake: the first bytes on the wire are already events.
pub async fn connect(host: &str, port: u16) -> Result<ServerStream> {
    let stream = TcpStream::connect((host, port)).await?;
    log::info!("Connected to {}:{}", host, port);
    Ok(EventStream::new(stream))
}
