//! Yaamod development server.
//!
//! Serves a read-only roster under `/api` and the built front-end, so the
//! UI can be run locally without the real backend.

mod routes;
mod state;

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use routes::{list_members, list_synagogues, login, logout, synagogue_members};
use state::{AppState, Roster};

/// yaamod-server: development API for the roster front-end
#[derive(Parser, Debug)]
#[command(name = "yaamod-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "YAAMOD_ADDR", default_value = "0.0.0.0:5970")]
    addr: SocketAddr,

    /// Roster fixture (JSON); the built-in demo roster when omitted
    #[arg(long, env = "YAAMOD_ROSTER")]
    roster: Option<PathBuf>,

    /// Directory holding the built front-end
    #[arg(long, env = "YAAMOD_DIST", default_value = "crates/frontend/dist")]
    dist: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    let roster = match &args.roster {
        Some(path) => Roster::from_file(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => Roster::builtin().context("loading built-in roster")?,
    };
    tracing::info!(
        synagogues = roster.synagogues().len(),
        members = roster.all_members().len(),
        "Loaded roster"
    );

    let app = build_router(AppState::new(roster), &args.dist);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("binding {}", args.addr))?;
    tracing::info!("Server listening on http://{}", args.addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// API routes plus static files.
fn build_router(state: AppState, dist: &Path) -> Router {
    // Requests carry credentials, so origins are mirrored rather than `*`
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/members", get(list_members))
        .route("/synagogues", get(list_synagogues))
        .route("/synagogues/:id/members", get(synagogue_members))
        .route("/login", post(login))
        .route("/logout", post(logout));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(dist).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_router_builds() {
        let state = AppState::new(Roster::builtin().unwrap());
        let _router = build_router(state, Path::new("dist"));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["yaamod-server"]).unwrap();

        assert_eq!(args.addr.port(), 5970);
        assert!(args.roster.is_none());
        assert_eq!(args.dist, PathBuf::from("crates/frontend/dist"));
    }

    #[test]
    fn test_args_override() {
        let args = Args::try_parse_from([
            "yaamod-server",
            "--addr",
            "127.0.0.1:8080",
            "--roster",
            "roster.json",
        ])
        .unwrap();

        assert_eq!(args.addr.port(), 8080);
        assert_eq!(args.roster, Some(PathBuf::from("roster.json")));
    }
}
