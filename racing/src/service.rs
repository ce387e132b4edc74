//! gRPC service layer over the races repository.
//!
//! The service adds no interpretation of its own: repository failures
//! map onto `Status` unchanged, and store calls run on the blocking
//! thread pool.

use crate::db::RacesRepo;
use crate::proto::racing_server::{Racing, RacingServer};
use crate::proto::{GetRaceRequest, GetRaceResponse, ListRacesRequest, ListRacesResponse};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tonic_health::server::health_reporter;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;

pub struct RacingService {
    races: Arc<RacesRepo>,
}

impl RacingService {
    pub fn new(races: Arc<RacesRepo>) -> Self {
        Self { races }
    }
}

#[tonic::async_trait]
impl Racing for RacingService {
    async fn list_races(
        &self,
        request: Request<ListRacesRequest>,
    ) -> Result<Response<ListRacesResponse>, Status> {
        let request = request.into_inner();
        let repo = Arc::clone(&self.races);
        let races =
            task::spawn_blocking(move || repo.list(request.filter.as_ref(), request.order_by.as_deref()))
                .await
                .map_err(|_| Status::internal("repository worker failed"))??;

        Ok(Response::new(ListRacesResponse { races }))
    }

    async fn get_race(
        &self,
        request: Request<GetRaceRequest>,
    ) -> Result<Response<GetRaceResponse>, Status> {
        let id = request.into_inner().id;
        let repo = Arc::clone(&self.races);
        let race = task::spawn_blocking(move || repo.get(id))
            .await
            .map_err(|_| Status::internal("repository worker failed"))??;

        Ok(Response::new(GetRaceResponse { race }))
    }
}

pub async fn serve(addr: SocketAddr, races: Arc<RacesRepo>) -> anyhow::Result<()> {
    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<RacingServer<RacingService>>()
        .await;

    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(crate::proto::FILE_DESCRIPTOR_SET)
        .build_v1alpha()?;

    info!(%addr, "racing gRPC server listening");

    Server::builder()
        .add_service(health_service)
        .add_service(RacingServer::new(RacingService::new(races)))
        .add_service(reflection_service)
        .serve(addr)
        .await?;

    Ok(())
}
