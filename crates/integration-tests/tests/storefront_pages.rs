//! Storefront pages rendered against the fake catalog API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use luxe_integration_tests::{Catalog, FakeApi, browser, start_storefront};
use reqwest::StatusCode;

async fn setup() -> (FakeApi, String) {
    let api = FakeApi::start(Catalog::sample()).await;
    let site = start_storefront(&api).await;
    (api, site)
}

async fn page(site: &str, path: &str) -> (StatusCode, String) {
    let response = browser().get(format!("{site}{path}")).send().await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_home_shows_featured_collections_and_ordered_faqs() {
    let (_api, site) = setup().await;

    let (status, body) = page(&site, "/").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("Oak dining table"));
    assert!(body.contains("Linen sofa"));
    assert!(body.contains("Hotel lobby"));
    assert!(body.contains("2 products"));

    let custom = body.find("Can I order custom sizes?").unwrap();
    let delivery = body.find("Do you deliver?").unwrap();
    assert!(custom < delivery, "FAQs follow their display order");
}

#[tokio::test]
async fn test_home_renders_when_catalog_is_empty() {
    let api = FakeApi::start(Catalog::default()).await;
    let site = start_storefront(&api).await;

    let (status, body) = page(&site, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Frequently asked questions"));
}

#[tokio::test]
async fn test_catalog_filters_by_category() {
    let (_api, site) = setup().await;

    let (status, body) = page(&site, "/catalog?category=Seating").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Velvet lounge chair"));
    assert!(body.contains("Linen sofa"));
    assert!(!body.contains("Oak dining table"));
    assert!(body.contains("2 products"));
}

#[tokio::test]
async fn test_catalog_sorts_by_price() {
    let (_api, site) = setup().await;

    let (_, body) = page(&site, "/catalog?sort=price-high").await;
    let sofa = body.find("Linen sofa").unwrap();
    let table = body.find("Oak dining table").unwrap();
    let chair = body.find("Velvet lounge chair").unwrap();
    assert!(sofa < table && table < chair);

    let (_, body) = page(&site, "/catalog?sort=price-low").await;
    let sofa = body.find("Linen sofa").unwrap();
    let chair = body.find("Velvet lounge chair").unwrap();
    assert!(chair < sofa);
}

#[tokio::test]
async fn test_catalog_unknown_category_is_empty() {
    let (_api, site) = setup().await;

    let (status, body) = page(&site, "/catalog?category=Lighting").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No products in this category yet."));
}

#[tokio::test]
async fn test_product_page_resolves_upload_urls() {
    let (api, site) = setup().await;

    let (status, body) = page(&site, "/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Oak dining table"));
    assert!(body.contains("Extendable"));

    let origin = api.api_url().as_str().trim_end_matches("/api").to_string();
    assert!(body.contains(&format!("{origin}/uploads/oak-1.jpg")));
}

#[tokio::test]
async fn test_product_carousel_index_wraps() {
    let (api, site) = setup().await;
    let origin = api.api_url().as_str().trim_end_matches("/api").to_string();

    // Three images: index 4 lands on the second one.
    let (status, body) = page(&site, "/products/1?image=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&format!(
        "class=\"carousel-image\" src=\"{origin}/uploads/oak-2.jpg\""
    )));
    assert!(body.contains("href=\"/products/1?image=0\""));
    assert!(body.contains("href=\"/products/1?image=2\""));
}

#[tokio::test]
async fn test_product_without_gallery_has_no_controls() {
    let (_api, site) = setup().await;

    let (status, body) = page(&site, "/products/3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("carousel-next"));
    assert!(body.contains("210cm x 95cm"));

    let (_, body) = page(&site, "/products/2").await;
    assert!(body.contains("Not specified"), "empty dimensions get a default");
}

#[tokio::test]
async fn test_missing_product_is_not_found() {
    let (_api, site) = setup().await;

    let (status, _) = page(&site, "/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = page(&site, "/products/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_collection_page_lists_members() {
    let (_api, site) = setup().await;

    let (status, body) = page(&site, "/collections/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Hotel lobby"));
    assert!(body.contains("Oak dining table"));
    assert!(body.contains("Linen sofa"));
    assert!(!body.contains("Velvet lounge chair"));

    let (status, _) = page(&site, "/collections/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_active_placeholder_replaces_page() {
    let (api, site) = setup().await;

    let (status, body) = page(&site, "/portfolio").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Portfolio is coming"));
    assert!(body.contains("We are working on this page. It will be available soon!"));

    assert!(
        api.requests()
            .contains(&"GET /placeholder/check?path=%2Fportfolio".to_string())
    );
}

#[tokio::test]
async fn test_inactive_placeholder_is_ignored() {
    let (_api, site) = setup().await;

    let (status, body) = page(&site, "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("We are working on this page"));
}

#[tokio::test]
async fn test_health_skips_placeholder_check() {
    let (api, site) = setup().await;

    let (status, _) = page(&site, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        !api.requests()
            .iter()
            .any(|r| r.starts_with("GET /placeholder/check"))
    );
}

#[tokio::test]
async fn test_contact_validation_never_reaches_api() {
    let (api, site) = setup().await;

    let response = browser()
        .post(format!("{site}/contact"))
        .form(&[
            ("name", "Irina"),
            ("email", "not-an-email"),
            ("phone", ""),
            ("message", "Hello"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.unwrap();
    assert!(body.contains("Please check the form"));
    assert!(body.contains("Irina"), "entered values are kept");
    assert!(api.writes().is_empty());
}

#[tokio::test]
async fn test_contact_submission_is_stored() {
    let (api, site) = setup().await;

    let response = browser()
        .post(format!("{site}/contact"))
        .form(&[
            ("name", " Irina "),
            ("email", "Irina@Restaurant.RU"),
            ("phone", "+7 912 345 67 89"),
            ("message", "Twelve tables for a terrace"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(api.writes(), vec!["POST /contacts".to_string()]);

    let catalog = api.catalog();
    let stored = catalog.contacts.last().unwrap();
    assert_eq!(stored.name, "Irina");
    assert_eq!(stored.email, "irina@restaurant.ru");
    assert_eq!(stored.message, "Twelve tables for a terrace");
}

#[tokio::test]
async fn test_malformed_image_query_shows_first_image() {
    let (api, site) = setup().await;
    let origin = api.api_url().as_str().trim_end_matches("/api").to_string();

    for query in ["abc", "-1", "", "1.5"] {
        let (status, body) = page(&site, &format!("/products/1?image={query}")).await;
        assert_eq!(status, StatusCode::OK, "?image={query}");
        assert!(body.contains(&format!(
            "class=\"carousel-image\" src=\"{origin}/uploads/oak-1.jpg\""
        )));
    }
}

#[tokio::test]
async fn test_unknown_path_renders_error_page() {
    let (_api, site) = setup().await;

    let (status, body) = page(&site, "/showroom").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_placeholder_covers_path_without_a_page() {
    let mut catalog = Catalog::sample();
    catalog.placeholders[1].path = "/showroom".to_string();
    catalog.placeholders[1].title = "Showroom opening".to_string();
    catalog.placeholders[1].is_active = true;
    let api = FakeApi::start(catalog).await;
    let site = start_storefront(&api).await;

    let (status, body) = page(&site, "/showroom").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showroom opening"));
}
