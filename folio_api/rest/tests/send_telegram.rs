use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use folio_api_rest::{RestServer, RestServerConfig, RestServerSiteConfig, CONTACT_ENDPOINT};
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl, ContactRelayCredentials};
use folio_di::{provider, Provide};
use folio_extern_impl::telegram::{TelegramApiServiceConfig, TelegramApiServiceImpl};
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;
use folio_testing::telegram::FakeTelegram;
use serde_json::{json, Value};
use tower::ServiceExt;

const BOT_TOKEN: &str = "123456:test-token";
const CHAT_ID: &str = "4242";

type Contact = ContactFeatureServiceImpl<TimeServiceImpl, TelegramApiServiceImpl>;
type Server = RestServer<Contact, TemplateServiceImpl>;

provider! {
    Provider {
        rest_server_config: RestServerConfig,
        contact_feature_config: ContactFeatureConfig,
        telegram_api_service_config: TelegramApiServiceConfig,
    }
}

#[tokio::test]
async fn relayed() {
    let fake = FakeTelegram::spawn(BOT_TOKEN, CHAT_ID).await.unwrap();
    let router = make_router(&fake, Some(credentials(BOT_TOKEN, CHAT_ID)));

    let (status, body) = submit(router).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let messages = fake.messages();
    assert_eq!(messages.len(), 1);
    let message = &messages[0];
    assert_eq!(message.chat_id, CHAT_ID);
    assert_eq!(message.parse_mode.as_deref(), Some("HTML"));
    assert!(message.text.contains("Max Mustermann"));
    assert!(message.text.contains("203.0.113.7"));
    assert!(message.text.contains("x-forwarded-for"));
    assert!(message.text.contains("https://ipapi.co/203.0.113.7/json/"));
}

#[tokio::test]
async fn rejected_by_telegram() {
    let fake = FakeTelegram::spawn(BOT_TOKEN, CHAT_ID).await.unwrap();
    let router = make_router(&fake, Some(credentials(BOT_TOKEN, "1337")));

    let (status, body) = submit(router).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error sending to Telegram");
    assert_eq!(body["details"]["error_code"], 400);
    assert_eq!(body["details"]["description"], "Bad Request: chat not found");
    assert!(fake.messages().is_empty());
}

#[tokio::test]
async fn not_configured() {
    let fake = FakeTelegram::spawn(BOT_TOKEN, CHAT_ID).await.unwrap();
    let router = make_router(&fake, None);

    let (status, body) = submit(router).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Telegram configuration missing"}));
    assert!(fake.messages().is_empty());
}

async fn submit(router: Router<()>) -> (StatusCode, Value) {
    let body = json!({
        "name": "Max Mustermann",
        "email": "max.mustermann@example.de",
        "subject": "Project inquiry",
        "message": "Hello World! Let's build something together.",
        "userAgent": "Mozilla/5.0 (X11; Linux x86_64)",
        "language": "en-US",
    });
    let request = Request::post(CONTACT_ENDPOINT)
        .header(CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn credentials(bot_token: &str, chat_id: &str) -> Arc<ContactRelayCredentials> {
    Arc::new(ContactRelayCredentials {
        bot_token: bot_token.to_owned().into(),
        chat_id: chat_id.into(),
    })
}

fn make_router(fake: &FakeTelegram, credentials: Option<Arc<ContactRelayCredentials>>) -> Router<()> {
    let mut provider = Provider {
        _cache: Default::default(),
        rest_server_config: RestServerConfig {
            addr: ([127, 0, 0, 1], 0).into(),
            site: Arc::new(RestServerSiteConfig {
                owner: "Max Mustermann".into(),
                title: "Max Mustermann".into(),
                description: "Personal website".into(),
                open_to_work: false,
                bio: Vec::new(),
                about: Vec::new(),
                links: Vec::new(),
            }),
        },
        contact_feature_config: ContactFeatureConfig { credentials },
        telegram_api_service_config: TelegramApiServiceConfig::new(Some(fake.endpoint())),
    };

    let server: Server = provider.provide();
    server.router()
}
