//! Host and address normalisation shared by the HTTP and DNS front-ends.

/// Strips a trailing `:port` from a host header or socket address.
///
/// Bracketed IPv6 literals lose their brackets (`[::1]:80` → `::1`). Values
/// without a port, including bare IPv6 addresses, are returned unchanged.
pub fn strip_port(value: &str) -> &str {
    if let Some(rest) = value.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => &rest[..end],
            None => value,
        };
    }

    match value.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') && port.bytes().all(|b| b.is_ascii_digit()) => {
            host
        }
        _ => value,
    }
}

/// Lowercases a DNS query name and removes the trailing root dot.
pub fn normalize_query_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Builds the counter-store key for a `(site, client)` rate-limit window.
pub fn rate_limit_key(site_id: i64, client_ip: &str) -> String {
    format!("ratelimit:{}:{}", site_id, client_ip)
}
