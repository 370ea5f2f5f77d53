//! Admin screens driven end to end against the fake catalog API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use luxe_core::{PlaceholderId, ProductId};
use luxe_integration_tests::{Catalog, FakeApi, browser, start_admin};
use reqwest::{
    StatusCode,
    header::LOCATION,
    multipart::{Form, Part},
};

async fn setup() -> (FakeApi, String) {
    let api = FakeApi::start(Catalog::sample()).await;
    let admin = start_admin(&api).await;
    (api, admin)
}

async fn page(admin: &str, path: &str) -> (StatusCode, String) {
    let response = browser().get(format!("{admin}{path}")).send().await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

async fn post(admin: &str, path: &str) -> reqwest::Response {
    browser().post(format!("{admin}{path}")).send().await.unwrap()
}

fn location(response: &reqwest::Response) -> &str {
    response.headers()[LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn test_dashboard_counts() {
    let (_api, admin) = setup().await;

    let (status, body) = page(&admin, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<span class=\"metric-value\">3</span>"));
    assert!(body.contains("<span class=\"metric-value\">2</span>"));
    assert!(body.contains("<span class=\"metric-value\">1</span>"));
}

#[tokio::test]
async fn test_list_screens_render() {
    let (_api, admin) = setup().await;

    for (path, expected) in [
        ("/products", "Velvet lounge chair"),
        ("/categories", "Seating"),
        ("/collections", "Hotel lobby"),
        ("/faqs", "Do you deliver?"),
        ("/placeholders", "/portfolio"),
        ("/contacts", "anna@hotel.ru"),
    ] {
        let (status, body) = page(&admin, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(expected), "{path} lists {expected}");
    }
}

#[tokio::test]
async fn test_contacts_newest_first() {
    let (_api, admin) = setup().await;

    let (_, body) = page(&admin, "/contacts").await;
    let oleg = body.find("oleg@cafe.ru").unwrap();
    let anna = body.find("anna@hotel.ru").unwrap();
    assert!(oleg < anna);
    assert!(body.contains("10.11.2024 15:30"));
}

#[tokio::test]
async fn test_delete_redirects_after_success() {
    let (api, admin) = setup().await;

    let response = post(&admin, "/products/2/delete").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/products");

    assert_eq!(api.writes(), vec!["DELETE /admin/products/2".to_string()]);
    assert!(
        !api.catalog()
            .products
            .iter()
            .any(|p| p.id == ProductId::new(2))
    );
}

#[tokio::test]
async fn test_failed_delete_keeps_item_and_shows_error() {
    let (api, admin) = setup().await;
    api.catalog().fail_deletes = true;

    let response = post(&admin, "/products/2/delete").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get(LOCATION).is_none());

    let body = response.text().await.unwrap();
    assert!(body.contains("Could not delete product 2"));
    assert!(body.contains("Velvet lounge chair"), "list is still shown");
    assert_eq!(api.catalog().products.len(), 3);
}

#[tokio::test]
async fn test_delete_of_missing_item_is_not_found() {
    let (_api, admin) = setup().await;

    let response = post(&admin, "/faqs/77/delete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(body.contains("Could not delete FAQ 77"));
}

#[tokio::test]
async fn test_product_validation_never_reaches_api() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "Walnut bench")
        .text("category", "Seating")
        .text("price", "");

    let response = browser()
        .post(format!("{admin}/products"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("Walnut bench"));
    assert!(api.writes().is_empty());
}

#[tokio::test]
async fn test_product_create_uploads_images_and_reports_skipped_files() {
    let (api, admin) = setup().await;

    let photo = Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .file_name("bench.jpg")
        .mime_str("image/jpeg")
        .unwrap();
    let notes = Part::bytes(b"dimensions".to_vec())
        .file_name("notes.txt")
        .mime_str("text/plain")
        .unwrap();

    let form = Form::new()
        .text("name", "Walnut bench")
        .text("category", "Seating")
        .text("price", "12990")
        .text("features", "Solid walnut, Oiled")
        .text("featured", "on")
        .part("images", photo)
        .part("images", notes);

    let response = browser()
        .post(format!("{admin}/products"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Skipped: notes.txt is not an image"));

    assert_eq!(
        api.writes(),
        vec![
            "POST /admin/upload".to_string(),
            "POST /admin/products".to_string()
        ]
    );

    let catalog = api.catalog();
    let created = catalog.products.last().unwrap();
    assert_eq!(created.name, "Walnut bench");
    assert_eq!(created.images, vec!["/uploads/1731660000_bench.jpg".to_string()]);
    assert_eq!(created.image, "/uploads/1731660000_bench.jpg");
    assert_eq!(created.features, vec!["Solid walnut".to_string(), "Oiled".to_string()]);
    assert!(created.featured);
}

#[tokio::test]
async fn test_product_update_keeps_selected_images() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "Oak dining table")
        .text("category", "Tables")
        .text("price", "1399")
        .text("keep_images", "/uploads/oak-3.jpg")
        .text("keep_images", "/uploads/oak-1.jpg");

    let response = browser()
        .post(format!("{admin}/products/1"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(api.writes(), vec!["PUT /admin/products/1".to_string()]);

    let catalog = api.catalog();
    let product = &catalog.products[0];
    assert_eq!(product.image, "/uploads/oak-3.jpg");
    assert_eq!(product.images.len(), 2);
}

#[tokio::test]
async fn test_collection_membership_removes_before_adding() {
    let (api, admin) = setup().await;

    // Collection 1 holds products 1 and 3.
    let response = browser()
        .post(format!("{admin}/collections/1/products"))
        .form(&[("product_ids", "2"), ("product_ids", "3")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/collections/1/edit");
    assert_eq!(
        api.writes(),
        vec![
            "DELETE /admin/collections/1/products/1".to_string(),
            "POST /admin/collections/1/products".to_string(),
        ]
    );
    assert_eq!(
        api.catalog().collections[0].members,
        vec![ProductId::new(3), ProductId::new(2)]
    );
}

#[tokio::test]
async fn test_collection_membership_unchanged_sends_nothing() {
    let (api, admin) = setup().await;

    let response = browser()
        .post(format!("{admin}/collections/1/products"))
        .form(&[("product_ids", "3"), ("product_ids", "1")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(api.writes().is_empty());
}

#[tokio::test]
async fn test_collection_membership_stops_at_first_failure() {
    let (api, admin) = setup().await;
    api.catalog().fail_deletes = true;

    let response = browser()
        .post(format!("{admin}/collections/1/products"))
        .form(&[("product_ids", "2")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(
        response
            .text()
            .await
            .unwrap()
            .contains("Products were not fully saved")
    );
    assert_eq!(
        api.writes(),
        vec!["DELETE /admin/collections/1/products/1".to_string()]
    );
}

#[tokio::test]
async fn test_collection_toggle_adds_and_removes() {
    let (api, admin) = setup().await;

    let response = post(&admin, "/collections/1/products/2/toggle").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(api.catalog().collections[0].members.contains(&ProductId::new(2)));

    let response = post(&admin, "/collections/1/products/1/toggle").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(!api.catalog().collections[0].members.contains(&ProductId::new(1)));

    assert_eq!(
        api.writes(),
        vec![
            "POST /admin/collections/1/products".to_string(),
            "DELETE /admin/collections/1/products/1".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_collection_edit_marks_members() {
    let (_api, admin) = setup().await;

    let (status, body) = page(&admin, "/collections/1/edit").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"product-1\" name=\"product_ids\" type=\"checkbox\" value=\"1\" checked"));
    assert!(body.contains("id=\"product-2\" name=\"product_ids\" type=\"checkbox\" value=\"2\">"));

    let (status, _) = page(&admin, "/collections/9/edit").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_faq_create_and_validation() {
    let (api, admin) = setup().await;

    let response = browser()
        .post(format!("{admin}/faqs"))
        .form(&[("question", ""), ("answer", "Yes"), ("order", "3")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(api.writes().is_empty());

    let response = browser()
        .post(format!("{admin}/faqs"))
        .form(&[
            ("question", "Is assembly included?"),
            ("answer", "Yes"),
            ("order", "3"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(api.writes(), vec!["POST /admin/faqs".to_string()]);
    assert_eq!(api.catalog().faqs.len(), 3);
}

#[tokio::test]
async fn test_placeholder_toggle_flips_active_flag() {
    let (api, admin) = setup().await;

    let response = post(&admin, "/placeholders/2/toggle").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/placeholders");
    assert_eq!(api.writes(), vec!["PUT /admin/placeholders/2".to_string()]);

    let catalog = api.catalog();
    let about = catalog
        .placeholders
        .iter()
        .find(|p| p.id == PlaceholderId::new(2))
        .unwrap();
    assert!(about.is_active);
    assert_eq!(about.path, "/about");
}

#[tokio::test]
async fn test_admin_responses_are_not_cached() {
    let (_api, admin) = setup().await;

    let response = browser().get(format!("{admin}/products")).send().await.unwrap();
    assert_eq!(response.headers()["cache-control"], "no-store");
    assert!(response.headers().contains_key("x-request-id"));
}

fn png(name: &str) -> Part {
    Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name(name.to_string())
        .mime_str("image/png")
        .unwrap()
}

async fn post_multipart(admin: &str, path: &str, form: Form) -> reqwest::Response {
    browser()
        .post(format!("{admin}{path}"))
        .multipart(form)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_collection_create_uploads_then_adds_selected_products() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "Restaurant terrace")
        .text("description", "Outdoor dining")
        .text("image", "")
        .text("product_ids", "1")
        .text("product_ids", "2")
        .part("image_file", png("terrace.png"));

    let response = post_multipart(&admin, "/collections", form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/collections");

    assert_eq!(
        api.writes(),
        vec![
            "POST /admin/upload".to_string(),
            "POST /admin/collections".to_string(),
            "POST /admin/collections/101/products".to_string(),
            "POST /admin/collections/101/products".to_string(),
        ]
    );

    let catalog = api.catalog();
    let created = catalog.collections.last().unwrap();
    assert_eq!(created.input.name, "Restaurant terrace");
    assert_eq!(created.input.image, "/uploads/1731660000_terrace.png");
    assert_eq!(created.members, vec![ProductId::new(1), ProductId::new(2)]);
}

#[tokio::test]
async fn test_collection_create_reports_products_not_added() {
    let (api, admin) = setup().await;
    api.catalog().fail_member_adds = true;

    let form = Form::new()
        .text("name", "Restaurant terrace")
        .text("image", "/uploads/terrace.jpg")
        .text("product_ids", "1")
        .text("product_ids", "2");

    let response = post_multipart(&admin, "/collections", form).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get(LOCATION).is_none());

    let body = response.text().await.unwrap();
    assert!(body.contains("The collection was created but not all products were added"));
    assert!(body.contains("Edit collection #101"));

    assert_eq!(
        api.writes(),
        vec![
            "POST /admin/collections".to_string(),
            "POST /admin/collections/101/products".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_collection_create_without_image_never_reaches_api() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "Restaurant terrace")
        .text("image", "")
        .text("product_ids", "1");

    let response = post_multipart(&admin, "/collections", form).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("Restaurant terrace"));
    assert!(api.writes().is_empty());
}

#[tokio::test]
async fn test_category_create_with_image_upload() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "Lighting")
        .text("description", "Lamps and pendants")
        .text("icon", "lamp")
        .text("href", "")
        .text("image", "")
        .part("image_file", png("lamps.png"));

    let response = post_multipart(&admin, "/categories", form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/categories");
    assert_eq!(
        api.writes(),
        vec![
            "POST /admin/upload".to_string(),
            "POST /admin/categories".to_string()
        ]
    );

    let catalog = api.catalog();
    let created = catalog.categories.last().unwrap();
    assert_eq!(created.name, "Lighting");
    assert_eq!(created.icon, "lamp");
    assert_eq!(created.image, "/uploads/1731660000_lamps.png");
}

#[tokio::test]
async fn test_category_update_keeps_existing_image_without_upload() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "Chairs and sofas")
        .text("description", "Everything to sit on")
        .text("icon", "chair")
        .text("href", "")
        .text("image", "/uploads/seating.jpg");

    let response = post_multipart(&admin, "/categories/2", form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(api.writes(), vec!["PUT /admin/categories/2".to_string()]);

    let catalog = api.catalog();
    let updated = &catalog.categories[1];
    assert_eq!(updated.name, "Chairs and sofas");
    assert_eq!(updated.image, "/uploads/seating.jpg");
}

#[tokio::test]
async fn test_category_update_replaces_image_with_upload() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "Seating")
        .text("image", "/uploads/seating.jpg")
        .part("image_file", png("seating-new.png"));

    let response = post_multipart(&admin, "/categories/2", form).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        api.writes(),
        vec![
            "POST /admin/upload".to_string(),
            "PUT /admin/categories/2".to_string()
        ]
    );
    assert_eq!(
        api.catalog().categories[1].image,
        "/uploads/1731660000_seating-new.png"
    );
}

#[tokio::test]
async fn test_category_without_name_never_reaches_api() {
    let (api, admin) = setup().await;

    let form = Form::new()
        .text("name", "  ")
        .text("description", "Lamps")
        .part("image_file", png("lamps.png"));

    let response = post_multipart(&admin, "/categories", form).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(api.writes().is_empty());
}
