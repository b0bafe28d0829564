use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tokio::net::TcpListener;
use reqwest::StatusCode as HttpStatusCode;

use catalog::{memory::MemCatalog, service::Catalog};
use server::routes;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

/// Boot the app on an ephemeral port against a freshly seeded in-memory
/// catalog. No external infrastructure needed.
async fn start_server() -> anyhow::Result<TestApp> {
    let catalog = Catalog::new(Arc::new(MemCatalog::seeded().await));

    let app: Router = routes::build_router(catalog, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_list_endpoints_return_seeded_content() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let services = c.get(format!("{}/api/services", app.base_url))
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(services.len(), 4);
    assert_eq!(services[0]["id"], 1);
    assert!(services[0].get("bgPattern").is_some());

    let team = c.get(format!("{}/api/team", app.base_url))
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(team.len(), 3);

    let testimonials = c.get(format!("{}/api/testimonials", app.base_url))
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(testimonials.len(), 2);
    for t in &testimonials {
        let rating = t["rating"].as_i64().expect("rating is an integer");
        assert!((1..=5).contains(&rating));
    }
    Ok(())
}

#[tokio::test]
async fn e2e_projects_category_filter() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let branding = c.get(format!("{}/api/projects?category=Branding", app.base_url))
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(branding.len(), 1);
    assert_eq!(branding[0]["title"], "Brand Identity Package");

    // unknown category filters everything out
    let none = c.get(format!("{}/api/projects?category=nonexistent", app.base_url))
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert!(none.is_empty());

    // absent or empty category falls back to the full list
    let all = c.get(format!("{}/api/projects", app.base_url))
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(all.len(), 4);
    let all_again = c.get(format!("{}/api/projects?category=", app.base_url))
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(all_again.len(), 4);
    Ok(())
}

#[tokio::test]
async fn e2e_single_resource_lookup_and_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/api/services/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Web Development");

    let res = c.get(format!("{}/api/services/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(format!("{}/api/team/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
