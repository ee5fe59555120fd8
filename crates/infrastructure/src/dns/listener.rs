use super::handler::DnsRequestHandler;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Largest datagram accepted from a client (EDNS(0) sized)
const MAX_DATAGRAM_SIZE: usize = 4096;

/// Binds a UDP socket on `addr` and answers queries until `shutdown` fires.
///
/// The bind result is reported on `ready` before any datagram is read, so the
/// caller learns about `AddrInUse` or permission errors without guessing from
/// a delay. If nobody is waiting on `ready` anymore the socket is dropped
/// straight away.
pub async fn serve_udp(
    addr: SocketAddr,
    handler: Arc<DnsRequestHandler>,
    shutdown: CancellationToken,
    ready: oneshot::Sender<io::Result<SocketAddr>>,
) {
    let socket = match UdpSocket::bind(addr).await {
        Ok(socket) => socket,
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    let local_addr = match socket.local_addr() {
        Ok(local_addr) => local_addr,
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    if ready.send(Ok(local_addr)).is_err() {
        debug!(%local_addr, "Startup abandoned before listener became ready");
        return;
    }

    info!(protocol = "UDP", %local_addr, "DNS server listening");

    let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!(%local_addr, "DNS listener shutting down");
                break;
            }
            result = socket.recv_from(&mut buf) => {
                match result {
                    Ok((len, peer)) => {
                        let Some(reply) = handler.handle_datagram(&buf[..len]) else {
                            continue;
                        };
                        if let Err(e) = socket.send_to(&reply, peer).await {
                            warn!(error = %e, %peer, "Failed to send DNS reply");
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to receive datagram");
                    }
                }
            }
        }
    }
}
