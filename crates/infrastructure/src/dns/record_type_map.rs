use hickory_proto::rr::RecordType as HickoryRecordType;
use sitegate_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// `None` for query types we never hold custom records for.
    pub fn from_hickory(record_type: HickoryRecordType) -> Option<RecordType> {
        match record_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::MX => Some(RecordType::MX),
            _ => None,
        }
    }
}
