//! DNS wire handling
//!
//! Decodes datagrams with `hickory-proto`, asks the [`QueryResolver`] about
//! every question and encodes the reply. Only `OpCode::Query` messages get
//! answers; other op codes are echoed back with an empty answer section.

use super::record_type_map::RecordTypeMapper;
use dattebayo_application::QueryResolver;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct DnsRequestHandler {
    resolver: Arc<QueryResolver>,
    answer_ttl: u32,
}

impl DnsRequestHandler {
    pub fn new(resolver: Arc<QueryResolver>, answer_ttl: u32) -> Self {
        Self {
            resolver,
            answer_ttl,
        }
    }

    /// Handles one raw datagram; `None` means nothing is sent back.
    pub fn handle_datagram(&self, bytes: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, len = bytes.len(), "Dropping undecodable datagram");
                return None;
            }
        };

        let response = self.handle_message(&request)?;

        match Self::serialize_message(&response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, id = response.id(), "Failed to serialize DNS reply");
                None
            }
        }
    }

    /// Builds the reply for a decoded message.
    ///
    /// Messages that are themselves responses are ignored. Every question is
    /// resolved independently; misses simply leave no answer behind, so a
    /// reply may carry an empty answer section with `NOERROR`.
    pub fn handle_message(&self, request: &Message) -> Option<Message> {
        if request.message_type() != MessageType::Query {
            debug!(id = request.id(), "Ignoring non-query message");
            return None;
        }

        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        for query in request.queries() {
            response.add_query(query.clone());
        }

        if request.op_code() != OpCode::Query {
            return Some(response);
        }

        for query in request.queries() {
            let kind = RecordTypeMapper::to_query_kind(query.query_type());
            if let Some(address) = self.resolver.resolve(&query.name().to_ascii(), kind) {
                response.add_answer(self.answer_record(query.name().clone(), address));
            }
        }

        Some(response)
    }

    fn answer_record(&self, name: Name, address: IpAddr) -> Record {
        let rdata = match address {
            IpAddr::V4(v4) => RData::A(A(v4)),
            IpAddr::V6(v6) => RData::AAAA(AAAA(v6)),
        };
        Record::from_rdata(name, self.answer_ttl, rdata)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, String> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).map_err(|e| e.to_string())?;
        Ok(buf)
    }
}
