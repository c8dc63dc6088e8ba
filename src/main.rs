mod config;
mod dictionary;
mod error;
mod game;
mod models;
mod order;
mod routes;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use dashmap::DashMap;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::{
    config::Config,
    dictionary::{Dictionary, Lexicon, WordList},
    game::{GameSession, WordValidator},
};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub word_list: WordList,
    pub validator: WordValidator,
    pub sessions: DashMap<Uuid, GameSession>,
}

impl AppState {
    pub fn new(config: Config, word_list: WordList, lexicon: Arc<dyn Lexicon>) -> Self {
        let validator = WordValidator::new(lexicon, &config.game.language)
            .with_min_length(config.game.min_word_length);

        Self {
            config,
            word_list,
            validator,
            sessions: DashMap::new(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordscramble_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Scramble backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Root words are required; there is no game without them
    let word_list = WordList::load(&config.game.word_list_path)
        .await
        .with_context(|| {
            format!(
                "Could not load root words from {}",
                config.game.word_list_path
            )
        })?;

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path, &config.game.language)
        .await
    {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully ({})", dict.language());
            if dict.is_empty() {
                tracing::warn!("Dictionary is empty; every submitted word will be rejected");
            }
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty(&config.game.language)
        }
    };

    // Create application state
    let state = Arc::new(AppState::new(config.clone(), word_list, Arc::new(dictionary)));
    tracing::info!(
        "Words must be longer than {} letters",
        state.validator.min_length()
    );

    // Spawn background task to drop sessions nobody is playing anymore
    let cleanup_state = state.clone();
    tokio::spawn(async move {
        session_cleanup_task(cleanup_state).await;
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Game API: http://{}/api/games", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Background task that periodically removes idle game sessions
async fn session_cleanup_task(state: Arc<AppState>) {
    let mut interval =
        tokio::time::interval(Duration::from_secs(state.config.game.reap_interval_secs));

    loop {
        interval.tick().await;
        let removed = reap_idle_sessions(&state, Instant::now());
        if removed > 0 {
            tracing::info!(
                "Removed {} idle game sessions ({} active)",
                removed,
                state.sessions.len()
            );
        }
    }
}

/// Drop every session idle for longer than the configured timeout
fn reap_idle_sessions(state: &AppState, now: Instant) -> usize {
    let timeout = Duration::from_secs(state.config.game.session_idle_timeout_secs);

    let stale: Vec<Uuid> = state
        .sessions
        .iter()
        .filter(|entry| entry.idle_for(now) > timeout)
        .map(|entry| *entry.key())
        .collect();

    let mut removed = 0;
    for session_id in stale {
        // A request may have touched the session since the scan
        if state
            .sessions
            .remove_if(&session_id, |_, session| session.idle_for(now) > timeout)
            .is_some()
        {
            tracing::debug!("Session {} expired after {:?} idle", session_id, timeout);
            removed += 1;
        }
    }

    removed
}
