//! HTTP router mapping the external JSON API onto the gRPC backends.

use crate::cli::Cli;
use crate::dto::{
    EventDto, ListEventsBody, ListEventsReply, ListRacesBody, ListRacesReply, RaceDto,
};
use crate::error::{ApiError, Result};
use crate::proto::racing::racing_client::RacingClient;
use crate::proto::racing::{GetRaceRequest, ListRacesRequest};
use crate::proto::sports::sports_client::SportsClient;
use crate::proto::sports::ListEventsRequest;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tonic::transport::Endpoint;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct Server {
    addr: SocketAddr,
    state: AppState,
}

impl Server {
    /// Channels are lazy: backends may come up after the gateway.
    pub fn new(cli: Cli) -> anyhow::Result<Self> {
        let racing = Endpoint::from_shared(cli.racing_endpoint)?.connect_lazy();
        let sports = Endpoint::from_shared(cli.sports_endpoint)?.connect_lazy();
        let state = AppState::new(RacingClient::new(racing), SportsClient::new(sports));

        Ok(Self {
            addr: cli.api_endpoint,
            state,
        })
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/healthz", get(Self::health))
            .route("/v1/list-races", post(Self::list_races))
            .route("/v1/races/:id", get(Self::get_race))
            .route("/v1/list-events", post(Self::list_events))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        info!(addr = %self.addr, "API gateway listening");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }

    async fn health() -> Json<serde_json::Value> {
        Json(json!({ "status": "ok" }))
    }

    async fn list_races(
        State(state): State<AppState>,
        Json(body): Json<ListRacesBody>,
    ) -> Result<Json<ListRacesReply>> {
        let request = ListRacesRequest {
            filter: body.filter.map(|filter| filter.into_proto()),
            order_by: body.order_by,
        };

        let mut client = state.racing.clone();
        let response = client.list_races(request).await?.into_inner();
        let races = response
            .races
            .into_iter()
            .map(RaceDto::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Json(ListRacesReply { races }))
    }

    async fn get_race(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<RaceDto>> {
        let mut client = state.racing.clone();
        let response = client.get_race(GetRaceRequest { id }).await?.into_inner();

        // The backend reports absence as an empty response, not an
        // error; the gateway is where that becomes a 404.
        let race = response.race.ok_or(ApiError::NotFound)?;
        Ok(Json(RaceDto::try_from(race)?))
    }

    async fn list_events(
        State(state): State<AppState>,
        Json(body): Json<ListEventsBody>,
    ) -> Result<Json<ListEventsReply>> {
        let request = ListEventsRequest {
            filter: body.filter.map(|filter| filter.into_proto()),
        };

        let mut client = state.sports.clone();
        let response = client.list_events(request).await?.into_inner();
        let events = response
            .events
            .into_iter()
            .map(EventDto::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Json(ListEventsReply { events }))
    }
}
