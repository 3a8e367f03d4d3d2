use folio_di::{provider, Provide};
use folio_extern_contracts::telegram::{
    TelegramApiService, TelegramMessage, TelegramParseMode, TelegramSendMessageError,
};
use folio_extern_impl::telegram::{TelegramApiServiceConfig, TelegramApiServiceImpl};
use folio_testing::telegram::{FakeTelegram, SentMessage};
use folio_utils::assert_matches;

const BOT_TOKEN: &str = "123456:test-token";
const CHAT_ID: &str = "4242";

#[tokio::test]
async fn ok() {
    let (sut, fake) = make_sut().await;

    sut.send_message(BOT_TOKEN, message(CHAT_ID, "Hello World!"))
        .await
        .unwrap();

    assert_eq!(
        fake.messages(),
        [SentMessage {
            chat_id: CHAT_ID.into(),
            text: "Hello World!".into(),
            parse_mode: Some("HTML".into()),
        }]
    );
}

#[tokio::test]
async fn invalid_token() {
    let (sut, fake) = make_sut().await;

    let result = sut
        .send_message("wrong-token", message(CHAT_ID, "Hello World!"))
        .await;

    assert_matches!(
        result,
        Err(TelegramSendMessageError::Rejected { status: 401, body })
            if body["description"] == "Unauthorized"
    );
    assert!(fake.messages().is_empty());
}

#[tokio::test]
async fn unknown_chat() {
    let (sut, fake) = make_sut().await;

    let result = sut
        .send_message(BOT_TOKEN, message("1337", "Hello World!"))
        .await;

    assert_matches!(
        result,
        Err(TelegramSendMessageError::Rejected { status: 400, body })
            if body["error_code"] == 400
    );
    assert!(fake.messages().is_empty());
}

#[tokio::test]
async fn unreachable() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let endpoint = format!("http://127.0.0.1:{port}/").parse().unwrap();
    let sut = build(TelegramApiServiceConfig::new(Some(endpoint)));

    let result = sut
        .send_message(BOT_TOKEN, message(CHAT_ID, "Hello World!"))
        .await;

    assert_matches!(result, Err(TelegramSendMessageError::Other(_)));
}

fn message(chat_id: &str, text: &str) -> TelegramMessage {
    TelegramMessage {
        chat_id: chat_id.into(),
        text: text.into(),
        parse_mode: TelegramParseMode::Html,
    }
}

async fn make_sut() -> (TelegramApiServiceImpl, FakeTelegram) {
    let fake = FakeTelegram::spawn(BOT_TOKEN, CHAT_ID).await.unwrap();
    let sut = build(TelegramApiServiceConfig::new(Some(fake.endpoint())));
    (sut, fake)
}

fn build(config: TelegramApiServiceConfig) -> TelegramApiServiceImpl {
    provider! {
        Provider { telegram_api_service_config: TelegramApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        telegram_api_service_config: config,
    };

    provider.provide()
}
