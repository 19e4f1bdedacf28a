//! Converts stored records into wire resource records.

use hickory_proto::rr::rdata::{A, CNAME, MX, TXT};
use hickory_proto::rr::{Name, RData, Record};
use sitegate_domain::{DnsRecord, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::warn;

/// TTL of the synthesized A record pointing a site at the proxy.
pub const SITE_RECORD_TTL: u32 = 300;

/// Fully-qualified owner name for a normalized query name.
pub fn owner_name(query_name: &str) -> Option<Name> {
    Name::from_ascii(format!("{}.", query_name)).ok()
}

pub fn proxy_a_record(owner: Name, proxy_ip: Ipv4Addr) -> Record {
    Record::from_rdata(owner, SITE_RECORD_TTL, RData::A(A(proxy_ip)))
}

/// Builds the answer for one stored record; `None` if its content does not
/// fit the record type.
pub fn custom_record(owner: &Name, record: &DnsRecord) -> Option<Record> {
    let rdata = match record.record_type {
        RecordType::A => RData::A(A(Ipv4Addr::from_str(&record.content).ok()?)),
        RecordType::CNAME => RData::CNAME(CNAME(parse_target(&record.content)?)),
        RecordType::TXT => RData::TXT(TXT::new(vec![record.content.to_string()])),
        RecordType::MX => RData::MX(MX::new(record.priority, parse_target(&record.content)?)),
    };

    Some(Record::from_rdata(owner.clone(), record.ttl, rdata))
}

pub fn custom_records(owner: &Name, records: &[DnsRecord]) -> Vec<Record> {
    records
        .iter()
        .filter_map(|record| {
            let rr = custom_record(owner, record);
            if rr.is_none() {
                warn!(
                    record_id = ?record.id,
                    record_type = %record.record_type,
                    content = %record.content,
                    "Skipping malformed DNS record"
                );
            }
            rr
        })
        .collect()
}

fn parse_target(content: &str) -> Option<Name> {
    let fqdn = if content.ends_with('.') {
        content.to_string()
    } else {
        format!("{}.", content)
    };
    Name::from_ascii(fqdn).ok()
}
