use std::sync::Arc;

use skillet::auth::Validator;
use skillet::{Server, app};
use tracing::error;

const ADDR: &str = "0.0.0.0:3000";
const UPLOAD_DIR: &str = "uploads";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Demo credentials. A real deployment injects its own validator here;
    // nothing else in the app knows how credentials are checked.
    let validator: Validator =
        Arc::new(|username: &str, password: &str| username == "chef" && password == "butter");

    let router = app::router(validator, UPLOAD_DIR);
    if let Err(e) = Server::bind(ADDR).serve(router).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
