//! End-to-end tests: build the real route table, drive it with built
//! requests, assert on the responses and on the upload directory.

use std::path::Path;
use std::sync::Arc;

use skillet::auth::Validator;
use skillet::{Method, Request, Response, Router, app, urls};
use tempfile::TempDir;

const URLENCODED: &str = "application/x-www-form-urlencoded";

fn demo_validator() -> Validator {
    Arc::new(|username: &str, password: &str| username == "chef" && password == "butter")
}

fn site(upload_dir: &Path) -> Router {
    app::router(demo_validator(), upload_dir)
}

async fn get(router: &Router, target: &str) -> Response {
    router
        .respond(Request::builder(Method::Get, target).build())
        .await
}

async fn post_form(router: &Router, target: &str, body: &'static str) -> Response {
    let req = Request::builder(Method::Post, target)
        .header("content-type", URLENCODED)
        .body(body)
        .build();
    router.respond(req).await
}

fn body_text(resp: &Response) -> String {
    String::from_utf8_lossy(resp.body()).into_owned()
}

#[tokio::test]
async fn home_page_renders() {
    let dir = TempDir::new().unwrap();
    let resp = get(&site(dir.path()), "/").await;
    assert_eq!(resp.status_code(), 200);
    assert!(body_text(&resp).contains("Welcome to the recipe box!"));
}

#[tokio::test]
async fn recipe_pages_answer_their_literals() {
    let dir = TempDir::new().unwrap();
    let router = site(dir.path());

    let resp = get(&router, "/desserts/").await;
    assert_eq!(body_text(&resp), "Here are some delicious dessert recipes!");

    let resp = get(&router, "/appetizers/").await;
    assert_eq!(body_text(&resp), "Check out these tasty appetizer recipes!");

    let resp = get(&router, "/main-courses/").await;
    assert_eq!(
        body_text(&resp),
        "Discover a variety of flavorful main course recipes!"
    );
}

#[tokio::test]
async fn profile_url_round_trips_an_encoded_username() {
    let dir = TempDir::new().unwrap();
    let url = urls::profile("Pineapple Jack");
    assert_eq!(url, "/user/Pineapple%20Jack");

    let resp = get(&site(dir.path()), &url).await;
    assert_eq!(body_text(&resp), "Pineapple Jack's profile");
}

#[tokio::test]
async fn greet_answers_by_name_or_falls_back() {
    let dir = TempDir::new().unwrap();
    let router = site(dir.path());

    let resp = get(&router, "/greet/?name=Jack").await;
    assert_eq!(body_text(&resp), "Hello, Jack!");

    let resp = get(&router, "/greet/").await;
    assert_eq!(body_text(&resp), "Hello, anonymous user!");

    let resp = get(&router, "/greet/?name=").await;
    assert_eq!(body_text(&resp), "Hello, anonymous user!");
}

#[tokio::test]
async fn login_get_always_shows_the_clean_form() {
    let dir = TempDir::new().unwrap();
    let router = site(dir.path());

    // A failed attempt first — the GET after it must still be clean.
    post_form(&router, "/login/", "username=chef&password=margarine").await;

    let resp = get(&router, "/login/").await;
    assert_eq!(resp.status_code(), 200);
    assert!(!body_text(&resp).contains("Invalid username/password"));
}

#[tokio::test]
async fn login_accepts_the_demo_credentials() {
    let dir = TempDir::new().unwrap();
    let resp = post_form(&site(dir.path()), "/login/", "username=chef&password=butter").await;
    assert_eq!(resp.status_code(), 200);
    assert_eq!(body_text(&resp), "Welcome, chef! Login successful.");
}

#[tokio::test]
async fn login_rejects_bad_credentials_inline() {
    let dir = TempDir::new().unwrap();
    let resp = post_form(&site(dir.path()), "/login/", "username=chef&password=margarine").await;
    assert_eq!(resp.status_code(), 200);
    let body = body_text(&resp);
    assert!(body.contains("Invalid username/password"));
    assert!(!body.contains("Login successful"));
}

#[tokio::test]
async fn login_without_a_password_field_is_a_bad_request() {
    let dir = TempDir::new().unwrap();
    let resp = post_form(&site(dir.path()), "/login/", "username=chef").await;
    assert_eq!(resp.status_code(), 400);
}

#[tokio::test]
async fn upload_form_and_storage_round_trip() {
    let dir = TempDir::new().unwrap();
    let router = site(dir.path());

    let resp = get(&router, "/upload").await;
    assert!(body_text(&resp).contains("multipart/form-data"));

    let body = concat!(
        "--XBOUND\r\n",
        "Content-Disposition: form-data; name=\"file\"; filename=\"menu.txt\"\r\n",
        "Content-Type: text/plain\r\n",
        "\r\n",
        "braised leeks\r\n",
        "--XBOUND--\r\n",
    );
    let req = Request::builder(Method::Post, "/upload")
        .header("content-type", "multipart/form-data; boundary=XBOUND")
        .body(body)
        .build();
    let resp = router.respond(req).await;
    assert_eq!(resp.status_code(), 200);
    assert_eq!(body_text(&resp), "File 'menu.txt' uploaded successfully.");
    assert_eq!(
        std::fs::read(dir.path().join("menu.txt")).unwrap(),
        b"braised leeks"
    );
}

#[tokio::test]
async fn upload_with_a_traversal_name_stays_inside_the_directory() {
    let dir = TempDir::new().unwrap();
    let router = site(dir.path());

    let body = concat!(
        "--XBOUND\r\n",
        "Content-Disposition: form-data; name=\"file\"; filename=\"../../etc/passwd\"\r\n",
        "Content-Type: text/plain\r\n",
        "\r\n",
        "root:x:0:0\r\n",
        "--XBOUND--\r\n",
    );
    let req = Request::builder(Method::Post, "/upload")
        .header("content-type", "multipart/form-data; boundary=XBOUND")
        .body(body)
        .build();
    let resp = router.respond(req).await;
    assert_eq!(resp.status_code(), 200);
    assert!(dir.path().join("etc_passwd").exists());
    assert!(!dir.path().parent().unwrap().join("etc").exists());
}

#[tokio::test]
async fn upload_without_a_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let router = site(dir.path());

    let body = concat!(
        "--XBOUND\r\n",
        "Content-Disposition: form-data; name=\"file\"; filename=\"\"\r\n",
        "Content-Type: application/octet-stream\r\n",
        "\r\n",
        "\r\n",
        "--XBOUND--\r\n",
    );
    let req = Request::builder(Method::Post, "/upload")
        .header("content-type", "multipart/form-data; boundary=XBOUND")
        .body(body)
        .build();
    let resp = router.respond(req).await;
    assert_eq!(body_text(&resp), "No file selected.");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn unknown_paths_are_404() {
    let dir = TempDir::new().unwrap();
    let resp = get(&site(dir.path()), "/soups/").await;
    assert_eq!(resp.status_code(), 404);
}

#[tokio::test]
async fn wrong_method_is_405_with_allow() {
    let dir = TempDir::new().unwrap();
    let resp = site(dir.path())
        .respond(Request::builder(Method::Post, "/desserts/").build())
        .await;
    assert_eq!(resp.status_code(), 405);
    assert_eq!(resp.header("allow"), Some("GET"));
}

#[tokio::test]
async fn slashless_branch_routes_redirect_and_keep_the_query() {
    let dir = TempDir::new().unwrap();
    let router = site(dir.path());

    let resp = get(&router, "/greet?name=Jack").await;
    assert_eq!(resp.status_code(), 308);
    assert_eq!(resp.header("location"), Some("/greet/?name=Jack"));

    // `/upload` is a leaf: its slashed spelling is simply unregistered.
    let resp = get(&router, "/upload/").await;
    assert_eq!(resp.status_code(), 404);
}
