use async_trait::async_trait;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::{Record, RecordType as HickoryRecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use sitegate_application::ports::{DnsRecordRepository, SiteRepository};
use sitegate_application::services::{DecisionEngine, TelemetryPipeline};
use sitegate_domain::net::normalize_query_name;
use sitegate_domain::{Action, TelemetryEvent};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::answer;
use super::record_type_map::RecordTypeMapper;

/// Outcome of one query, before it is encoded.
#[derive(Debug, Clone)]
pub struct DnsResolution {
    pub response_code: ResponseCode,
    pub answers: Vec<Record>,
}

impl DnsResolution {
    fn answer(answers: Vec<Record>) -> Self {
        Self {
            response_code: ResponseCode::NoError,
            answers,
        }
    }

    fn code(response_code: ResponseCode) -> Self {
        Self {
            response_code,
            answers: Vec::new(),
        }
    }
}

/// Authoritative handler for site names and their custom records.
///
/// Every query for an existing site passes through the decision engine
/// first; a block short-circuits to REFUSED before any record lookup.
#[derive(Clone)]
pub struct DnsServerHandler {
    sites: Arc<dyn SiteRepository>,
    records: Arc<dyn DnsRecordRepository>,
    engine: Arc<DecisionEngine>,
    telemetry: Arc<TelemetryPipeline>,
    proxy_ip: Ipv4Addr,
}

impl DnsServerHandler {
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        records: Arc<dyn DnsRecordRepository>,
        engine: Arc<DecisionEngine>,
        telemetry: Arc<TelemetryPipeline>,
        proxy_ip: Ipv4Addr,
    ) -> Self {
        Self {
            sites,
            records,
            engine,
            telemetry,
            proxy_ip,
        }
    }

    /// Decides and answers one question, recording exactly one telemetry
    /// event whatever the outcome.
    pub async fn resolve(
        &self,
        client_ip: &str,
        query_name: &str,
        query_type: HickoryRecordType,
    ) -> DnsResolution {
        let name = normalize_query_name(query_name);
        let qtype = query_type.to_string();

        let site = match self.sites.get_by_name(&name).await {
            Ok(site) => site,
            Err(e) => {
                error!(error = %e, query = %name, "Site lookup failed");
                self.record(0, client_ip, &name, &qtype, Action::Block);
                return DnsResolution::code(ResponseCode::ServFail);
            }
        };

        let site_id = site.as_ref().map(|s| s.id_or_zero()).unwrap_or(0);

        if let Some(site) = &site {
            let decision = self.engine.analyze_ip(client_ip, site_id, &site.name).await;
            if decision.is_blocked() {
                debug!(query = %name, client = %client_ip, reason = %decision.reason, "DNS query refused");
                self.record(site_id, client_ip, &name, &qtype, Action::Block);
                return DnsResolution::code(ResponseCode::Refused);
            }
        }

        let answers = self.answers(&name, query_type, site.as_ref().is_some_and(|s| s.active)).await;
        self.record(site_id, client_ip, &name, &qtype, Action::Allow);

        DnsResolution::answer(answers)
    }

    async fn answers(&self, name: &str, query_type: HickoryRecordType, active_site: bool) -> Vec<Record> {
        let Some(owner) = answer::owner_name(name) else {
            return Vec::new();
        };

        if query_type == HickoryRecordType::A && active_site {
            return vec![answer::proxy_a_record(owner, self.proxy_ip)];
        }

        let Some(record_type) = RecordTypeMapper::from_hickory(query_type) else {
            return Vec::new();
        };

        match self.records.find_active(name, record_type).await {
            Ok(records) => answer::custom_records(&owner, &records),
            Err(e) => {
                warn!(error = %e, query = %name, "Custom record lookup failed");
                Vec::new()
            }
        }
    }

    fn record(&self, site_id: i64, client_ip: &str, name: &str, qtype: &str, action: Action) {
        self.telemetry
            .record(TelemetryEvent::dns(site_id, client_ip, name, qtype, action));
    }
}

#[async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let client_ip = request.src().ip().to_string();

        // Messages without exactly one question never reach the handler.
        let query = request.query();
        let resolution = self
            .resolve(&client_ip, &query.name().to_string(), query.query_type())
            .await;

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        header.set_response_code(resolution.response_code);

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(header, resolution.answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, client = %client_ip, "Failed to send DNS response");
                let mut header = Header::new();
                header.set_response_code(ResponseCode::ServFail);
                header.into()
            }
        }
    }
}
