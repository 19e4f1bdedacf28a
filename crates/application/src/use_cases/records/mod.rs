mod create_record;
mod get_records;

pub use create_record::CreateDnsRecordUseCase;
pub use get_records::GetDnsRecordsUseCase;
