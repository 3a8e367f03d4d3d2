use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use folio_core_contact_contracts::MockContactFeatureService;
use folio_templates_contracts::{MockTemplateService, SocialLink};
use tower::ServiceExt;

use crate::{RestServer, RestServerConfig, RestServerSiteConfig};


type Sut = RestServer<MockContactFeatureService, MockTemplateService>;

fn make_router(contact: MockContactFeatureService, template: MockTemplateService) -> Router<()> {
    Sut {
        config: RestServerConfig {
            addr: ([127, 0, 0, 1], 0).into(),
            site: Arc::new(site_config()),
        },
        contact,
        template,
    }
    .router()
}

fn site_config() -> RestServerSiteConfig {
    RestServerSiteConfig {
        owner: "Max Mustermann".into(),
        title: "Max Mustermann".into(),
        description: "Personal website of Max Mustermann".into(),
        open_to_work: true,
        bio: vec!["Hello World!".into()],
        about: vec!["More about me.".into()],
        links: vec![SocialLink {
            label: "github".into(),
            href: "https://github.com/maxmustermann".into(),
        }],
    }
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

async fn send(router: Router<()>, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, headers: &[(&str, &str)], body: impl Into<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    for &(name, value) in headers {
        builder = builder.header(name, value);
    }
    builder.body(Body::from(body.into())).unwrap()
}
