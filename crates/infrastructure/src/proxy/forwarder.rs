use axum::body::Body;
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderMap, HeaderValue, Request, Response};
use futures::TryStreamExt;
use reqwest::Client;
use std::net::IpAddr;
use std::time::Duration;
use url::Url;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Connection-level headers that must not be relayed by a proxy.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Streams requests to a site's upstream and streams the response back.
#[derive(Clone)]
pub struct UpstreamForwarder {
    client: Client,
}

impl UpstreamForwarder {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;
        Ok(Self { client })
    }

    pub async fn forward(
        &self,
        target: &Url,
        req: Request<Body>,
        client_ip: Option<IpAddr>,
    ) -> Result<Response<Body>, reqwest::Error> {
        let (parts, body) = req.into_parts();
        let url = upstream_url(target, parts.uri.path(), parts.uri.query());

        let mut builder = self.client.request(parts.method, url);
        builder = copy_request_headers(builder, &parts.headers);

        if let Some(ip) = client_ip {
            let forwarded = match parts
                .headers
                .get(X_FORWARDED_FOR)
                .and_then(|v| v.to_str().ok())
            {
                Some(prior) => format!("{}, {}", prior, ip),
                None => ip.to_string(),
            };
            builder = builder.header(X_FORWARDED_FOR, forwarded);
        }

        let stream = TryStreamExt::map_err(body.into_data_stream(), |e| {
            std::io::Error::other(format!("Body stream error: {e}"))
        });

        let upstream = builder
            .body(reqwest::Body::wrap_stream(stream))
            .send()
            .await?;

        let status = upstream.status();
        let mut headers = HeaderMap::with_capacity(upstream.headers().len());
        for (name, value) in upstream.headers() {
            if !is_hop_by_hop(name) {
                headers.append(name.clone(), value.clone());
            }
        }

        let stream = TryStreamExt::map_err(upstream.bytes_stream(), |e| {
            std::io::Error::other(format!("Body stream error: {e}"))
        });

        let mut response = Response::new(Body::from_stream(stream));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Joins the request path onto the target's base path and carries the
/// query string over unchanged.
pub fn upstream_url(target: &Url, path: &str, query: Option<&str>) -> Url {
    let mut url = target.clone();
    let base = target.path().trim_end_matches('/');
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    url.set_path(&format!("{}{}", base, path));
    url.set_query(query);
    url
}

fn copy_request_headers(
    builder: reqwest::RequestBuilder,
    headers: &HeaderMap<HeaderValue>,
) -> reqwest::RequestBuilder {
    let mut out = builder;
    for (name, value) in headers.iter() {
        if name == header::HOST || name.as_str() == X_FORWARDED_FOR || is_hop_by_hop(name) {
            continue;
        }
        out = out.header(name.clone(), value.clone());
    }
    out
}
