use dattebayo_domain::QueryKind;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert hickory question type → domain QueryKind
    pub fn to_query_kind(record_type: HickoryRecordType) -> QueryKind {
        match record_type {
            HickoryRecordType::A => QueryKind::A,
            HickoryRecordType::AAAA => QueryKind::Aaaa,
            _ => QueryKind::Other,
        }
    }
}
