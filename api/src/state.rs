use crate::proto::racing::racing_client::RacingClient;
use crate::proto::sports::sports_client::SportsClient;
use tonic::transport::Channel;

#[derive(Clone)]
pub struct AppState {
    pub racing: RacingClient<Channel>,
    pub sports: SportsClient<Channel>,
}

impl AppState {
    pub fn new(racing: RacingClient<Channel>, sports: SportsClient<Channel>) -> Self {
        Self { racing, sports }
    }
}
