//! Database dump and restore through the admin and the API client.

#![allow(clippy::unwrap_used)]

use luxe_admin::api::AdminApiClient;
use luxe_integration_tests::{Catalog, FakeApi, browser, start_admin};
use reqwest::{
    StatusCode,
    multipart::{Form, Part},
};

fn dump_part() -> Part {
    Part::bytes(vec![b'P', b'G', b'D', b'M', b'P', 0, 1, 2])
        .file_name("nightly.dump")
        .mime_str("application/octet-stream")
        .unwrap()
}

#[tokio::test]
async fn test_dump_page_shows_result() {
    let api = FakeApi::start(Catalog::sample()).await;
    let admin = start_admin(&api).await;

    let response = browser()
        .post(format!("{admin}/database/dump"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("dump_20241115_103000.dump"));
    assert!(body.contains("3.00 MB"));
    assert_eq!(api.writes(), vec!["POST /admin/db/dump".to_string()]);
}

#[tokio::test]
async fn test_restore_without_confirmation_never_calls_api() {
    let api = FakeApi::start(Catalog::sample()).await;
    let admin = start_admin(&api).await;

    let form = Form::new().part("dump", dump_part());
    let response = browser()
        .post(format!("{admin}/database/restore"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(api.writes().is_empty());
    assert!(api.catalog().restores.is_empty());
}

#[tokio::test]
async fn test_restore_without_file_never_calls_api() {
    let api = FakeApi::start(Catalog::sample()).await;
    let admin = start_admin(&api).await;

    let form = Form::new().text("confirm", "true");
    let response = browser()
        .post(format!("{admin}/database/restore"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(api.writes().is_empty());
}

#[tokio::test]
async fn test_confirmed_restore_forwards_the_file() {
    let api = FakeApi::start(Catalog::sample()).await;
    let admin = start_admin(&api).await;

    let form = Form::new()
        .text("confirm", "true")
        .part("dump", dump_part());
    let response = browser()
        .post(format!("{admin}/database/restore"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .text()
            .await
            .unwrap()
            .contains("Database restored successfully")
    );
    assert_eq!(api.writes(), vec!["POST /admin/db/restore".to_string()]);
    assert_eq!(api.catalog().restores, vec![8]);
}

#[tokio::test]
async fn test_client_dump_and_health() {
    let api = FakeApi::start(Catalog::default()).await;
    let client = AdminApiClient::new(&api.api_url()).unwrap();

    client.health().await.unwrap();
    let dump = client.create_dump().await.unwrap();
    assert_eq!(dump.status, "success");
    assert!(dump.telegram_sent);
}

#[tokio::test]
async fn test_client_reports_unreachable_api() {
    let api = FakeApi::start(Catalog::default()).await;
    let mut url = api.api_url();
    url.set_port(Some(1)).unwrap();

    let client = AdminApiClient::new(&url).unwrap();
    let err = client.health().await.unwrap_err();
    assert_eq!(err.user_message(), "The catalog API is unreachable.");
}
