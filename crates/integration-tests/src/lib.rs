//! Integration tests for Luxe.
//!
//! Both front-ends are served in-process against [`FakeApi`], an axum
//! stand-in for the catalog API that keeps its data in memory and records
//! every request it receives.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p luxe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Storefront pages, placeholders, contact form
//! - `admin_screens` - Admin lists, deletes, forms, collection membership
//! - `database_maintenance` - Dump and restore through the admin and client

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use luxe_core::{
    AddProductRequest, Category, CategoryId, CategoryInput, Collection, CollectionId,
    CollectionInput, Contact, ContactId, ContactInput, DumpInfo, Faq, FaqId, FaqInput,
    Placeholder, PlaceholderId, PlaceholderInput, Product, ProductId, ProductInput,
    RestoreResult, UploadedImage,
};
use serde::Deserialize;
use serde_json::json;
use url::Url;

/// A collection as stored by the fake API: metadata plus member ids.
#[derive(Debug, Clone)]
pub struct StoredCollection {
    pub id: CollectionId,
    pub input: CollectionInput,
    pub members: Vec<ProductId>,
}

/// In-memory catalog behind [`FakeApi`].
#[derive(Debug, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub collections: Vec<StoredCollection>,
    pub contacts: Vec<Contact>,
    pub faqs: Vec<Faq>,
    pub placeholders: Vec<Placeholder>,
    /// `METHOD /path?query` for every request, `/api` prefix stripped.
    pub requests: Vec<String>,
    /// Sizes of restored dumps.
    pub restores: Vec<usize>,
    /// Make every `DELETE` answer 500.
    pub fail_deletes: bool,
    /// Make every `POST /admin/collections/{id}/products` answer 500.
    pub fail_member_adds: bool,
    next_id: i32,
}

fn from_json<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("valid sample entity")
}

impl Catalog {
    /// A small furniture catalog.
    ///
    /// Products 1-3, categories "Tables" and "Seating", collection 1
    /// ("Hotel lobby", products 1 and 3), two FAQs, an active placeholder on
    /// `/portfolio` and an inactive one on `/about`, two contact submissions.
    #[must_use]
    pub fn sample() -> Self {
        let products = vec![
            from_json(json!({
                "id": 1, "name": "Oak dining table", "category": "Tables", "price": 1499,
                "rating": 4.5, "reviews": 31, "description": "Solid oak, seats eight",
                "image": "/uploads/oak-1.jpg",
                "images": ["/uploads/oak-1.jpg", "/uploads/oak-2.jpg", "/uploads/oak-3.jpg"],
                "color": "Natural oak", "dimensions": "220cm x 100cm x 76cm",
                "material": "Oak", "features": ["Oiled finish", "Extendable"], "featured": true
            })),
            from_json(json!({
                "id": 2, "name": "Velvet lounge chair", "category": "Seating", "price": 899,
                "rating": 4.8, "reviews": 89, "description": "Deep seat, brass legs",
                "image": "/velvet-chair.png", "images": null,
                "color": "Emerald", "dimensions": "", "material": "Velvet",
                "features": null, "featured": false
            })),
            from_json(json!({
                "id": 3, "name": "Linen sofa", "category": "Seating", "price": 2499,
                "rating": 4.2, "reviews": 12, "description": "Three seats, washable covers",
                "image": "", "images": [], "color": "Sand", "dimensions": "210cm x 95cm",
                "material": "Linen", "features": ["Removable covers"], "featured": true
            })),
        ];

        let categories = vec![
            from_json(json!({"id": 1, "name": "Tables", "description": "Dining and coffee tables", "icon": "table", "href": "", "image": ""})),
            from_json(json!({"id": 2, "name": "Seating", "description": "Chairs and sofas", "icon": "chair", "href": "", "image": "/uploads/seating.jpg"})),
        ];

        let collections = vec![StoredCollection {
            id: CollectionId::new(1),
            input: CollectionInput {
                name: "Hotel lobby".to_string(),
                description: "Pieces for a welcoming lobby".to_string(),
                image: "/uploads/lobby.jpg".to_string(),
            },
            members: vec![ProductId::new(1), ProductId::new(3)],
        }];

        let faqs = vec![
            from_json(json!({"id": 1, "question": "Do you deliver?", "answer": "Across the country.", "order": 2})),
            from_json(json!({"id": 2, "question": "Can I order custom sizes?", "answer": "Yes, for most tables.", "order": 1})),
        ];

        let placeholders = vec![
            from_json(json!({"id": 1, "path": "/portfolio", "title": "Portfolio is coming", "message": "", "is_active": true, "created_at": "2024-11-01T10:00:00Z"})),
            from_json(json!({"id": 2, "path": "/about", "title": "About us", "message": "Soon", "is_active": false, "created_at": "2024-11-02T10:00:00Z"})),
        ];

        let contacts = vec![
            from_json(json!({"id": 1, "name": "Anna", "email": "anna@hotel.ru", "phone": "", "message": "Need 40 beds", "created_at": "2024-11-03T09:00:00Z"})),
            from_json(json!({"id": 2, "name": "Oleg", "email": "oleg@cafe.ru", "phone": "+7 900 000 00 00", "message": "Bar stools?", "created_at": "2024-11-10T15:30:00Z"})),
        ];

        Self {
            products,
            categories,
            collections,
            contacts,
            faqs,
            placeholders,
            next_id: 100,
            ..Self::default()
        }
    }

    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn collection_view(&self, stored: &StoredCollection, with_products: bool) -> Collection {
        let products = if with_products {
            stored
                .members
                .iter()
                .filter_map(|id| self.products.iter().find(|p| p.id == *id).cloned())
                .collect()
        } else {
            Vec::new()
        };

        Collection {
            id: stored.id,
            name: stored.input.name.clone(),
            description: stored.input.description.clone(),
            image: stored.input.image.clone(),
            count: i32::try_from(stored.members.len()).unwrap_or(i32::MAX),
            products,
        }
    }
}

type Shared = Arc<Mutex<Catalog>>;

fn lock(shared: &Shared) -> MutexGuard<'_, Catalog> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Lists are `null` when empty, as the real API encodes them.
fn list<T: serde::Serialize>(items: Vec<T>) -> Json<Option<Vec<T>>> {
    Json((!items.is_empty()).then_some(items))
}

fn not_found(what: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("{what} not found\n")).into_response()
}

fn deleted(shared: &Shared, removed: bool, what: &str) -> Response {
    if lock(shared).fail_deletes {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database is locked\n").into_response();
    }
    if removed {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found(what)
    }
}

/// The fake catalog API, served on an ephemeral local port.
#[derive(Clone)]
pub struct FakeApi {
    addr: SocketAddr,
    catalog: Shared,
}

impl FakeApi {
    /// Serve `catalog` on `127.0.0.1:0`.
    pub async fn start(catalog: Catalog) -> Self {
        let catalog = Arc::new(Mutex::new(catalog));
        let addr = serve(router(catalog.clone())).await;
        Self { addr, catalog }
    }

    /// Base URL including the `/api` prefix.
    #[must_use]
    pub fn api_url(&self) -> Url {
        Url::parse(&format!("http://{}/api", self.addr)).expect("valid fake API URL")
    }

    /// Lock the catalog for inspection or tweaking.
    pub fn catalog(&self) -> MutexGuard<'_, Catalog> {
        lock(&self.catalog)
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.catalog().requests.clone()
    }

    /// Requests received so far, reads excluded.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| !r.starts_with("GET "))
            .collect()
    }

    /// Forget recorded requests.
    pub fn clear_requests(&self) {
        self.catalog().requests.clear();
    }
}

/// Serve `app` on an ephemeral local port and return its address.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });
    addr
}

/// Serve the storefront against `api`; returns its base URL.
pub async fn start_storefront(api: &FakeApi) -> String {
    let config = luxe_storefront::config::StorefrontConfig::for_api(api.api_url());
    let state = luxe_storefront::state::AppState::new(config).expect("storefront state");
    let addr = serve(luxe_storefront::app(state)).await;
    format!("http://{addr}")
}

/// Serve the admin against `api`; returns its base URL.
pub async fn start_admin(api: &FakeApi) -> String {
    let config = luxe_admin::config::AdminConfig::for_api(api.api_url());
    let state = luxe_admin::state::AppState::new(config).expect("admin state");
    let addr = serve(luxe_admin::app(state)).await;
    format!("http://{addr}")
}

/// HTTP client that does not follow redirects, so tests can assert on them.
#[must_use]
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("HTTP client")
}

// =============================================================================
// Fake API routes
// =============================================================================

async fn record(State(shared): State<Shared>, request: Request, next: Next) -> Response {
    let uri = request.uri();
    let path = uri.path().strip_prefix("/api").unwrap_or(uri.path());
    let entry = match uri.query() {
        Some(query) => format!("{} {path}?{query}", request.method()),
        None => format!("{} {path}", request.method()),
    };
    lock(&shared).requests.push(entry);
    next.run(request).await
}

fn router(shared: Shared) -> Router {
    let api = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/products", get(list_products))
        .route("/products/featured", get(featured_products))
        .route("/products/{id}", get(get_product))
        .route("/categories", get(list_categories))
        .route("/collections", get(list_collections))
        .route("/collections/{id}", get(get_collection))
        .route("/faqs", get(list_faqs))
        .route("/contacts", post(create_contact))
        .route("/placeholder/check", get(check_placeholder))
        .route("/admin/products", post(create_product))
        .route("/admin/products/{id}", put(update_product).delete(delete_product))
        .route("/admin/categories", post(create_category))
        .route(
            "/admin/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .route("/admin/collections", post(create_collection))
        .route(
            "/admin/collections/{id}",
            put(update_collection).delete(delete_collection),
        )
        .route("/admin/collections/{id}/products", post(add_member))
        .route(
            "/admin/collections/{id}/products/{product_id}",
            axum::routing::delete(remove_member),
        )
        .route("/admin/contacts", get(list_contacts))
        .route("/admin/contacts/{id}", axum::routing::delete(delete_contact))
        .route("/admin/faqs", post(create_faq))
        .route(
            "/admin/faqs/{id}",
            get(get_faq).put(update_faq).delete(delete_faq),
        )
        .route(
            "/admin/placeholders",
            get(list_placeholders).post(create_placeholder),
        )
        .route(
            "/admin/placeholders/{id}",
            get(get_placeholder)
                .put(update_placeholder)
                .delete(delete_placeholder),
        )
        .route("/admin/upload", post(upload))
        .route("/admin/db/dump", post(dump))
        .route("/admin/db/restore", post(restore));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(shared.clone(), record))
        .with_state(shared)
}

// Products

async fn list_products(State(shared): State<Shared>) -> Json<Option<Vec<Product>>> {
    list(lock(&shared).products.clone())
}

async fn featured_products(State(shared): State<Shared>) -> Json<Option<Vec<Product>>> {
    list(lock(&shared).products.iter().filter(|p| p.featured).cloned().collect())
}

async fn get_product(State(shared): State<Shared>, Path(id): Path<ProductId>) -> Response {
    let catalog = lock(&shared);
    catalog.products.iter().find(|p| p.id == id).map_or_else(
        || not_found("Product"),
        |p| Json(p.clone()).into_response(),
    )
}

fn product_from(id: ProductId, input: ProductInput) -> Product {
    Product {
        id,
        name: input.name,
        category: input.category,
        price: input.price,
        rating: input.rating,
        reviews: input.reviews,
        description: input.description,
        image: input.image,
        images: input.images,
        color: input.color,
        dimensions: input.dimensions,
        material: input.material,
        features: input.features,
        featured: input.featured,
    }
}

async fn create_product(
    State(shared): State<Shared>,
    Json(input): Json<ProductInput>,
) -> Response {
    let mut catalog = lock(&shared);
    let id = ProductId::new(catalog.next_id());
    let product = product_from(id, input);
    catalog.products.push(product.clone());
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn update_product(
    State(shared): State<Shared>,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Response {
    let mut catalog = lock(&shared);
    match catalog.products.iter_mut().find(|p| p.id == id) {
        Some(slot) => {
            *slot = product_from(id, input);
            Json(slot.clone()).into_response()
        }
        None => not_found("Product"),
    }
}

async fn delete_product(State(shared): State<Shared>, Path(id): Path<ProductId>) -> Response {
    let removed = {
        let mut catalog = lock(&shared);
        let before = catalog.products.len();
        if !catalog.fail_deletes {
            catalog.products.retain(|p| p.id != id);
        }
        catalog.products.len() != before
    };
    deleted(&shared, removed, "Product")
}

// Categories

async fn list_categories(State(shared): State<Shared>) -> Json<Option<Vec<Category>>> {
    list(lock(&shared).categories.clone())
}

fn category_from(id: CategoryId, input: CategoryInput) -> Category {
    Category {
        id,
        name: input.name,
        description: input.description,
        icon: input.icon,
        href: input.href,
        image: input.image,
    }
}

async fn create_category(
    State(shared): State<Shared>,
    Json(input): Json<CategoryInput>,
) -> Response {
    let mut catalog = lock(&shared);
    let category = category_from(CategoryId::new(catalog.next_id()), input);
    catalog.categories.push(category.clone());
    (StatusCode::CREATED, Json(category)).into_response()
}

async fn update_category(
    State(shared): State<Shared>,
    Path(id): Path<CategoryId>,
    Json(input): Json<CategoryInput>,
) -> Response {
    let mut catalog = lock(&shared);
    match catalog.categories.iter_mut().find(|c| c.id == id) {
        Some(slot) => {
            *slot = category_from(id, input);
            Json(slot.clone()).into_response()
        }
        None => not_found("Category"),
    }
}

async fn delete_category(State(shared): State<Shared>, Path(id): Path<CategoryId>) -> Response {
    let removed = {
        let mut catalog = lock(&shared);
        let before = catalog.categories.len();
        if !catalog.fail_deletes {
            catalog.categories.retain(|c| c.id != id);
        }
        catalog.categories.len() != before
    };
    deleted(&shared, removed, "Category")
}

// Collections

async fn list_collections(State(shared): State<Shared>) -> Json<Option<Vec<Collection>>> {
    let catalog = lock(&shared);
    list(
        catalog
            .collections
            .iter()
            .map(|c| catalog.collection_view(c, false))
            .collect(),
    )
}

async fn get_collection(State(shared): State<Shared>, Path(id): Path<CollectionId>) -> Response {
    let catalog = lock(&shared);
    catalog.collections.iter().find(|c| c.id == id).map_or_else(
        || not_found("Collection"),
        |c| Json(catalog.collection_view(c, true)).into_response(),
    )
}

async fn create_collection(
    State(shared): State<Shared>,
    Json(input): Json<CollectionInput>,
) -> Response {
    let mut catalog = lock(&shared);
    let stored = StoredCollection {
        id: CollectionId::new(catalog.next_id()),
        input,
        members: Vec::new(),
    };
    let view = catalog.collection_view(&stored, false);
    catalog.collections.push(stored);
    (StatusCode::CREATED, Json(view)).into_response()
}

async fn update_collection(
    State(shared): State<Shared>,
    Path(id): Path<CollectionId>,
    Json(input): Json<CollectionInput>,
) -> Response {
    let mut catalog = lock(&shared);
    let Some(stored) = catalog.collections.iter_mut().find(|c| c.id == id) else {
        return not_found("Collection");
    };
    stored.input = input;
    let stored = stored.clone();
    Json(catalog.collection_view(&stored, false)).into_response()
}

async fn delete_collection(
    State(shared): State<Shared>,
    Path(id): Path<CollectionId>,
) -> Response {
    let removed = {
        let mut catalog = lock(&shared);
        let before = catalog.collections.len();
        if !catalog.fail_deletes {
            catalog.collections.retain(|c| c.id != id);
        }
        catalog.collections.len() != before
    };
    deleted(&shared, removed, "Collection")
}

async fn add_member(
    State(shared): State<Shared>,
    Path(id): Path<CollectionId>,
    Json(body): Json<AddProductRequest>,
) -> Response {
    let mut catalog = lock(&shared);
    if catalog.fail_member_adds {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to add product\n").into_response();
    }
    let Some(stored) = catalog.collections.iter_mut().find(|c| c.id == id) else {
        return not_found("Collection");
    };
    if !stored.members.contains(&body.product_id) {
        stored.members.push(body.product_id);
    }
    Json(json!({"status": "success"})).into_response()
}

async fn remove_member(
    State(shared): State<Shared>,
    Path((id, product_id)): Path<(CollectionId, ProductId)>,
) -> Response {
    let removed = {
        let mut catalog = lock(&shared);
        let fail = catalog.fail_deletes;
        catalog
            .collections
            .iter_mut()
            .find(|c| c.id == id)
            .is_some_and(|stored| {
                let before = stored.members.len();
                if !fail {
                    stored.members.retain(|m| *m != product_id);
                }
                stored.members.len() != before
            })
    };
    deleted(&shared, removed, "Product in collection")
}

// Contacts

async fn create_contact(
    State(shared): State<Shared>,
    Json(input): Json<ContactInput>,
) -> Response {
    let mut catalog = lock(&shared);
    let contact = Contact {
        id: ContactId::new(catalog.next_id()),
        name: input.name,
        email: input.email.into_inner(),
        phone: input.phone,
        message: input.message,
        created_at: Utc::now(),
    };
    catalog.contacts.push(contact.clone());
    (StatusCode::CREATED, Json(contact)).into_response()
}

async fn list_contacts(State(shared): State<Shared>) -> Json<Option<Vec<Contact>>> {
    list(lock(&shared).contacts.clone())
}

async fn delete_contact(State(shared): State<Shared>, Path(id): Path<ContactId>) -> Response {
    let removed = {
        let mut catalog = lock(&shared);
        let before = catalog.contacts.len();
        if !catalog.fail_deletes {
            catalog.contacts.retain(|c| c.id != id);
        }
        catalog.contacts.len() != before
    };
    deleted(&shared, removed, "Contact")
}

// FAQs

async fn list_faqs(State(shared): State<Shared>) -> Json<Option<Vec<Faq>>> {
    list(lock(&shared).faqs.clone())
}

async fn get_faq(State(shared): State<Shared>, Path(id): Path<FaqId>) -> Response {
    let catalog = lock(&shared);
    catalog.faqs.iter().find(|f| f.id == id).map_or_else(
        || not_found("FAQ"),
        |f| Json(f.clone()).into_response(),
    )
}

fn faq_from(id: FaqId, input: FaqInput) -> Faq {
    Faq {
        id,
        question: input.question,
        answer: input.answer,
        order: input.order,
    }
}

async fn create_faq(State(shared): State<Shared>, Json(input): Json<FaqInput>) -> Response {
    let mut catalog = lock(&shared);
    let faq = faq_from(FaqId::new(catalog.next_id()), input);
    catalog.faqs.push(faq.clone());
    (StatusCode::CREATED, Json(faq)).into_response()
}

async fn update_faq(
    State(shared): State<Shared>,
    Path(id): Path<FaqId>,
    Json(input): Json<FaqInput>,
) -> Response {
    let mut catalog = lock(&shared);
    match catalog.faqs.iter_mut().find(|f| f.id == id) {
        Some(slot) => {
            *slot = faq_from(id, input);
            Json(slot.clone()).into_response()
        }
        None => not_found("FAQ"),
    }
}

async fn delete_faq(State(shared): State<Shared>, Path(id): Path<FaqId>) -> Response {
    let removed = {
        let mut catalog = lock(&shared);
        let before = catalog.faqs.len();
        if !catalog.fail_deletes {
            catalog.faqs.retain(|f| f.id != id);
        }
        catalog.faqs.len() != before
    };
    deleted(&shared, removed, "FAQ")
}

// Placeholders

#[derive(Deserialize)]
struct CheckQuery {
    #[serde(default)]
    path: String,
}

async fn check_placeholder(
    State(shared): State<Shared>,
    Query(query): Query<CheckQuery>,
) -> Json<serde_json::Value> {
    let catalog = lock(&shared);
    let found = catalog.placeholders.iter().find(|p| p.path == query.path);
    Json(match found {
        Some(placeholder) => json!({"exists": true, "placeholder": placeholder}),
        None => json!({"exists": false}),
    })
}

async fn list_placeholders(State(shared): State<Shared>) -> Json<Option<Vec<Placeholder>>> {
    list(lock(&shared).placeholders.clone())
}

async fn get_placeholder(
    State(shared): State<Shared>,
    Path(id): Path<PlaceholderId>,
) -> Response {
    let catalog = lock(&shared);
    catalog.placeholders.iter().find(|p| p.id == id).map_or_else(
        || not_found("Placeholder"),
        |p| Json(p.clone()).into_response(),
    )
}

async fn create_placeholder(
    State(shared): State<Shared>,
    Json(input): Json<PlaceholderInput>,
) -> Response {
    let mut catalog = lock(&shared);
    if catalog.placeholders.iter().any(|p| p.path == input.path) {
        return (StatusCode::CONFLICT, "Placeholder for this path already exists\n").into_response();
    }
    let placeholder = Placeholder {
        id: PlaceholderId::new(catalog.next_id()),
        path: input.path,
        title: input.title,
        message: input.message,
        is_active: input.is_active,
        created_at: Utc::now(),
    };
    catalog.placeholders.push(placeholder.clone());
    (StatusCode::CREATED, Json(placeholder)).into_response()
}

async fn update_placeholder(
    State(shared): State<Shared>,
    Path(id): Path<PlaceholderId>,
    Json(input): Json<PlaceholderInput>,
) -> Response {
    let mut catalog = lock(&shared);
    match catalog.placeholders.iter_mut().find(|p| p.id == id) {
        Some(slot) => {
            slot.path = input.path;
            slot.title = input.title;
            slot.message = input.message;
            slot.is_active = input.is_active;
            Json(slot.clone()).into_response()
        }
        None => not_found("Placeholder"),
    }
}

async fn delete_placeholder(
    State(shared): State<Shared>,
    Path(id): Path<PlaceholderId>,
) -> Response {
    let removed = {
        let mut catalog = lock(&shared);
        let before = catalog.placeholders.len();
        if !catalog.fail_deletes {
            catalog.placeholders.retain(|p| p.id != id);
        }
        catalog.placeholders.len() != before
    };
    deleted(&shared, removed, "Placeholder")
}

// Maintenance

async fn upload(mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        return Json(UploadedImage {
            url: format!("/uploads/1731660000_{filename}"),
            filename,
        })
        .into_response();
    }
    (StatusCode::BAD_REQUEST, "Error retrieving file\n").into_response()
}

async fn dump() -> Json<DumpInfo> {
    Json(DumpInfo {
        status: "success".to_string(),
        filename: "dump_20241115_103000.dump".to_string(),
        path: "/dumps/dump_20241115_103000.dump".to_string(),
        size: 3_145_728,
        telegram_sent: true,
    })
}

async fn restore(State(shared): State<Shared>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("dump") {
            continue;
        }
        let Ok(data) = field.bytes().await else {
            break;
        };
        lock(&shared).restores.push(data.len());
        return Json(RestoreResult {
            status: "success".to_string(),
            message: "Database restored successfully".to_string(),
        })
        .into_response();
    }
    (StatusCode::BAD_REQUEST, "Error retrieving file\n").into_response()
}
