//! Database setup script: run migrations against the configured PostgreSQL
//! instance and insert the default dataset. The in-memory backend seeds
//! itself on startup and does not need this.

use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{error, info};

use catalog::db;
use catalog::seed::default_dataset;

fn init_logging() {
    dotenv().ok();
    common::utils::logging::init_logging_default();
}

async fn seed_database() -> anyhow::Result<()> {
    // 缺少连接串时立即失败，而不是回退到内存存储
    let url = models::db::database_url()?;
    let conn = models::db::connect(&url).await?;

    info!(event = "migrate", "applying migrations");
    migration::Migrator::up(&conn, None).await?;

    let data = default_dataset();
    let (services, team_members, projects, testimonials) = (
        data.services.len(),
        data.team_members.len(),
        data.projects.len(),
        data.testimonials.len(),
    );

    for s in data.services {
        db::services::create_service(&conn, s).await?;
    }
    for t in data.team_members {
        db::team_members::create_team_member(&conn, t).await?;
    }
    for p in data.projects {
        db::projects::create_project(&conn, p).await?;
    }
    for t in data.testimonials {
        db::testimonials::create_testimonial(&conn, t).await?;
    }

    info!(
        event = "seeded",
        services,
        team_members,
        projects,
        testimonials,
        "default dataset inserted"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    init_logging();

    match seed_database().await {
        Ok(()) => {
            info!(event = "done", "database seed complete");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "seed_failed", error = %e, "database seed failed");
            std::process::ExitCode::FAILURE
        }
    }
}
