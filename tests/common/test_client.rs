use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// Minimal UDP DNS client
pub struct TestClient {
    server: SocketAddr,
    timeout: Duration,
}

impl TestClient {
    pub fn new(server: SocketAddr) -> Self {
        Self {
            server,
            timeout: Duration::from_secs(2),
        }
    }

    /// Sends one question and returns the decoded reply.
    pub async fn exchange(&self, name: &str, record_type: RecordType) -> io::Result<Message> {
        let mut query = Query::new();
        query.set_name(Name::from_str(name).map_err(io::Error::other)?);
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut request = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        request.set_recursion_desired(true);
        request.add_query(query);

        let mut wire = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut wire);
        request.emit(&mut encoder).map_err(io::Error::other)?;

        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        socket.send_to(&wire, self.server).await?;

        let mut buf = vec![0u8; 4096];
        let (len, _) = tokio::time::timeout(self.timeout, socket.recv_from(&mut buf))
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "no reply"))??;

        let reply = Message::from_vec(&buf[..len]).map_err(io::Error::other)?;
        if reply.id() != request.id() {
            return Err(io::Error::other("reply id does not match the query"));
        }
        Ok(reply)
    }

    /// Addresses carried in the answer section of a `NOERROR` reply.
    pub async fn query(&self, name: &str, record_type: RecordType) -> io::Result<Vec<IpAddr>> {
        let reply = self.exchange(name, record_type).await?;
        if reply.response_code() != ResponseCode::NoError {
            return Err(io::Error::other(format!(
                "unexpected response code {:?}",
                reply.response_code()
            )));
        }

        Ok(reply
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                _ => None,
            })
            .collect())
    }
}
