//! JSON shapes of the external API, mirrored from the proto messages.
//!
//! Timestamps cross the gateway as RFC 3339 strings; the proto side
//! carries `google.protobuf.Timestamp`.

use crate::error::ApiError;
use crate::proto::{racing, sports};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListRacesBody {
    #[serde(default)]
    pub filter: Option<RaceFilterDto>,
    #[serde(default)]
    pub order_by: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RaceFilterDto {
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    #[serde(default)]
    pub visible: Option<bool>,
}

impl RaceFilterDto {
    pub fn into_proto(self) -> racing::ListRacesRequestFilter {
        racing::ListRacesRequestFilter {
            meeting_ids: self.meeting_ids,
            visible: self.visible,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListRacesReply {
    pub races: Vec<RaceDto>,
}

#[derive(Debug, Serialize)]
pub struct RaceDto {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: String,
}

impl TryFrom<racing::Race> for RaceDto {
    type Error = ApiError;

    fn try_from(race: racing::Race) -> Result<Self, ApiError> {
        let advertised_start_time = race
            .advertised_start_time
            .and_then(from_timestamp)
            .ok_or_else(|| {
                ApiError::Internal(anyhow::anyhow!(
                    "race {} carried an invalid advertised start time",
                    race.id
                ))
            })?;

        Ok(Self {
            id: race.id,
            meeting_id: race.meeting_id,
            name: race.name,
            number: race.number,
            visible: race.visible,
            advertised_start_time,
            status: race.status,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListEventsBody {
    #[serde(default)]
    pub filter: Option<EventFilterDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventFilterDto {
    #[serde(default)]
    pub competition_ids: Vec<i64>,
    #[serde(default)]
    pub sport: Option<String>,
}

impl EventFilterDto {
    pub fn into_proto(self) -> sports::ListEventsRequestFilter {
        sports::ListEventsRequestFilter {
            competition_ids: self.competition_ids,
            sport: self.sport,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListEventsReply {
    pub events: Vec<EventDto>,
}

#[derive(Debug, Serialize)]
pub struct EventDto {
    pub id: i64,
    pub name: String,
    pub advertised_start_time: DateTime<Utc>,
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub competition_id: i64,
    pub competition_name: String,
}

impl TryFrom<sports::Event> for EventDto {
    type Error = ApiError;

    fn try_from(event: sports::Event) -> Result<Self, ApiError> {
        let advertised_start_time = event
            .advertised_start_time
            .and_then(from_timestamp)
            .ok_or_else(|| {
                ApiError::Internal(anyhow::anyhow!(
                    "event {} carried an invalid advertised start time",
                    event.id
                ))
            })?;

        Ok(Self {
            id: event.id,
            name: event.name,
            advertised_start_time,
            sport: event.sport,
            home_team: event.home_team,
            away_team: event.away_team,
            competition_id: event.competition_id,
            competition_name: event.competition_name,
        })
    }
}

fn from_timestamp(ts: prost_types::Timestamp) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(ts.seconds, u32::try_from(ts.nanos).ok()?)
        .single()
}
