use std::net::SocketAddr;
use std::sync::Arc;

use ticketgrid_api::{app, AppState};
use ticketgrid_booking::BookingService;
use ticketgrid_store::{populate, CustomerGrid, TicketGrid};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticketgrid_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ticketgrid_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting ticketgrid API on port {}", config.server.port);

    // Grids are the single shared mutable state; everything else borrows
    // them through Arcs handed out here.
    let tickets: Arc<TicketGrid> = Arc::new(TicketGrid::with_shards(config.store.shards));
    let customers: Arc<CustomerGrid> = Arc::new(CustomerGrid::with_shards(config.store.shards));

    // Population runs to completion before any booking traffic is accepted.
    populate::seed_tickets(&tickets, config.seed.tickets);
    populate::seed_customers(&customers, config.seed.customers);
    tracing::info!(
        tickets = config.seed.tickets,
        customers = config.seed.customers,
        "grids populated"
    );

    let booking = Arc::new(BookingService::new(Arc::clone(&tickets)));

    let app_state = AppState {
        booking,
        tickets,
        customers,
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
