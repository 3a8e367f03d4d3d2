//! Best-effort inference of the caller's address from proxy headers.

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::{from_fn, Next},
    Router,
};
use folio_models::client_address::ClientAddressInfo;
use tracing::trace;

/// How the value of an address header is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderValuePolicy {
    /// The whole (trimmed) value is the address.
    Single,
    /// Comma separated proxy chain, the first entry is the client.
    FirstOfList,
    /// RFC 7239 `Forwarded` list, the `for` parameter of the first element.
    Forwarded,
}

use HeaderValuePolicy::{FirstOfList, Forwarded, Single};

/// Address headers in order of priority. The first non-empty match wins.
pub const ADDRESS_HEADERS: &[(&str, HeaderValuePolicy)] = &[
    // hosting provider edge
    ("x-vercel-ip", Single),
    ("x-vercel-forwarded-for", FirstOfList),
    // generic proxies, load balancers and CDNs
    ("x-forwarded-for", FirstOfList),
    ("x-real-ip", Single),
    ("cf-connecting-ip", Single),
    ("true-client-ip", Single),
    ("x-client-ip", Single),
    ("forwarded", Forwarded),
    ("x-forwarded", Single),
    ("x-cluster-client-ip", Single),
    ("fastly-client-ip", Single),
    ("x-forwarded-host", Single),
    ("appengine-user-ip", Single),
    ("x-appengine-user-ip", Single),
    // client hint, rarely populated
    ("sec-ch-ua-client-ip", Single),
];

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(|mut request: Request, next: Next| {
        let client_address = infer_client_address(request.headers());
        request.extensions_mut().insert(client_address);
        next.run(request)
    }))
}

pub fn infer_client_address(headers: &HeaderMap) -> ClientAddressInfo {
    ADDRESS_HEADERS
        .iter()
        .find_map(|&(name, policy)| {
            let value = headers.get(name)?.to_str().ok()?;
            let address = match policy {
                Single => value.trim(),
                FirstOfList => first_of_list(value),
                Forwarded => forwarded_for(first_of_list(value)),
            };
            (!address.is_empty()).then(|| ClientAddressInfo {
                address: address.into(),
                source: name,
            })
        })
        .unwrap_or_else(|| {
            trace!("no address header present");
            ClientAddressInfo::unknown()
        })
}

fn first_of_list(value: &str) -> &str {
    value.split(',').next().unwrap_or_default().trim()
}

/// `for=1.2.3.4;proto=https` -> `1.2.3.4`. Elements without a `for`
/// parameter are used as they are.
fn forwarded_for(element: &str) -> &str {
    element
        .split(';')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("for")
                .then(|| value.trim().trim_matches('"'))
        })
        .unwrap_or(element)
}
