//! gRPC service layer over the events repository.

use crate::db::EventsRepo;
use crate::proto::sports_server::{Sports, SportsServer};
use crate::proto::{ListEventsRequest, ListEventsResponse};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tonic_health::server::health_reporter;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

pub struct SportsService {
    events: Arc<EventsRepo>,
}

impl SportsService {
    pub fn new(events: Arc<EventsRepo>) -> Self {
        Self { events }
    }
}

#[tonic::async_trait]
impl Sports for SportsService {
    async fn list_events(
        &self,
        request: Request<ListEventsRequest>,
    ) -> Result<Response<ListEventsResponse>, Status> {
        let request = request.into_inner();
        let repo = Arc::clone(&self.events);
        let events = task::spawn_blocking(move || repo.list(request.filter.as_ref()))
            .await
            .map_err(|_| Status::internal("repository worker failed"))??;

        Ok(Response::new(ListEventsResponse { events }))
    }
}

pub async fn serve(addr: SocketAddr, events: Arc<EventsRepo>) -> anyhow::Result<()> {
    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<SportsServer<SportsService>>()
        .await;

    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(crate::proto::FILE_DESCRIPTOR_SET)
        .build_v1alpha()?;

    info!(%addr, "sports gRPC server listening");

    Server::builder()
        .add_service(health_service)
        .add_service(SportsServer::new(SportsService::new(events)))
        .add_service(reflection_service)
        .serve(addr)
        .await?;

    Ok(())
}
