//! election-bot entry point.
//!
//! Scrapes the election, joins the chat room, arms the phase announcements
//! and serves the dashboard while answering chat events.

use std::sync::Arc;

use anyhow::{Context as _, anyhow};
use chrono::Utc;
use tokio::sync::{Mutex, mpsc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use election_bot::api;
use election_bot::app_state::AppState;
use election_bot::chat::{self, ChatRoom, SeChatRoom};
use election_bot::config::BotConfig;
use election_bot::context::BotContext;
use election_bot::scrape::{ElectionSource, HttpElectionSource, RetryPolicy, initial_scrape};
use election_bot::service::{Dispatcher, Rescraper, RescraperHandle, ScheduledAnnouncer};

const EVENT_BUFFER: usize = 256;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = BotConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
    if config.debug {
        tracing::warn!("debug mode is on");
    }

    // Initial scrape
    let source = Arc::new(HttpElectionSource::new(&config).context("failed to build HTTP client")?);
    tracing::info!(url = %source.page_url(), "fetching election page");
    let election = initial_scrape(source.as_ref(), RetryPolicy::from_config(&config))
        .await
        .context("initial election scrape failed")?;
    tracing::info!(phase = ?election.phase, title = %election.title, "election loaded");

    // Join the room
    let room = Arc::new(
        SeChatRoom::connect(&config)
            .await
            .context("failed to join chat room")?,
    );
    let listen_addr = config.listen_addr;
    let room_url = config.chat_room_url();

    // Build context
    let ctx = BotContext::new(
        config,
        election,
        Arc::clone(&room) as Arc<dyn ChatRoom>,
        source as Arc<dyn ElectionSource>,
        Utc::now(),
    );

    // Arm phase announcements
    let rescraper_handle = RescraperHandle::new();
    let mut announcer = ScheduledAnnouncer::new(ctx.clone(), rescraper_handle.clone());
    let now = Utc::now();
    let armed = announcer.init_all(&ctx.election().await, now);
    if ctx.config.debug {
        announcer.init_test(now);
    }
    tracing::info!(armed, "phase announcements scheduled");
    let announcer = Arc::new(Mutex::new(announcer));

    // Start periodic rescrape
    let rescraper_task = Rescraper::new(
        ctx.clone(),
        Arc::clone(&announcer),
        rescraper_handle.clone(),
        ctx.election().await,
    )
    .spawn();

    // Listen for chat events, reconnecting when the socket drops
    let (tx, mut events) = mpsc::channel(EVENT_BUFFER);
    let watch_room = Arc::clone(&room);
    let watch_task = tokio::spawn(chat::keep_watching(
        move |tx| {
            let room = Arc::clone(&watch_room);
            async move { room.watch(tx).await }
        },
        tx,
        RetryPolicy::from_config(&ctx.config),
    ));
    tracing::info!(room = %room_url, "initialized and standing by");

    // Serve the dashboard
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            ctx: ctx.clone(),
            announcer,
        });
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    tracing::info!(addr = %listen_addr, "dashboard listening");
    let server_task = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!(error = %err, "dashboard server stopped");
        }
    });

    // Answer chat events until shutdown
    let mut dispatcher = Dispatcher::new(ctx.clone()).context("failed to build dispatcher")?;
    let result = loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    tracing::error!("chat event stream closed");
                    break Err(anyhow!("chat event stream closed"));
                };
                let outcome = dispatcher.handle(&event, Utc::now()).await;
                tracing::debug!(?outcome, user_id = event.user_id, "event handled");
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(err) = signal {
                    tracing::error!(error = %err, "failed to listen for shutdown signal");
                }
                tracing::info!("shutting down");
                ctx.farewell().await;
                break Ok(());
            }
        }
    };

    rescraper_handle.stop();
    watch_task.abort();
    server_task.abort();
    rescraper_task.abort();
    result
}
