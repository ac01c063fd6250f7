//! Mock arrivals feed.
//!
//! Serves fixed boards as if they were live predictions. Boards come either
//! from the built-in sample or from `{station}.json` files on disk.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::BusType;

use super::error::ArrivalsError;
use super::feed::ArrivalsFeed;
use super::types::{BusArrival, Congestion, Direction, StationBoard, SubwayArrival, SubwayTrainType};

/// Station served by the built-in sample board.
pub const SAMPLE_STATION: &str = "홍대입구역";

/// Arrivals feed backed by in-memory boards.
#[derive(Clone)]
pub struct MockArrivalsFeed {
    boards: Arc<RwLock<HashMap<String, StationBoard>>>,
}

impl MockArrivalsFeed {
    /// Create a feed from explicit boards, keyed by station id.
    pub fn new(boards: HashMap<String, StationBoard>) -> Self {
        Self {
            boards: Arc::new(RwLock::new(boards)),
        }
    }

    /// The built-in sample: one busy Seoul station.
    pub fn sample() -> Self {
        let mut boards = HashMap::new();
        boards.insert(SAMPLE_STATION.to_string(), sample_board(SAMPLE_STATION));
        Self::new(boards)
    }

    /// Load boards from a directory of `{station}.json` files.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, ArrivalsError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ArrivalsError::Load {
            message: format!("failed to read mock data directory {:?}: {e}", data_dir),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ArrivalsError::Load {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let station = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ArrivalsError::Load {
                    message: format!("invalid filename: {:?}", path),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| ArrivalsError::Load {
                message: format!("failed to read {:?}: {e}", path),
            })?;

            let board: StationBoard =
                serde_json::from_str(&json).map_err(|e| ArrivalsError::Load {
                    message: format!("failed to parse {:?}: {e}", path),
                })?;

            debug!(
                %station,
                buses = board.bus.len(),
                trains = board.subway.len(),
                "loaded mock board"
            );
            boards.insert(station, board);
        }

        if boards.is_empty() {
            return Err(ArrivalsError::Load {
                message: format!("no mock board files found in {:?}", data_dir),
            });
        }

        Ok(Self::new(boards))
    }

    /// Stations with a board.
    pub async fn available_stations(&self) -> Vec<String> {
        let boards = self.boards.read().await;
        let mut stations: Vec<String> = boards.keys().cloned().collect();
        stations.sort();
        stations
    }

    /// Simulate the passage of time: every prediction counts down by `secs`.
    pub async fn advance(&self, secs: u32) {
        let mut boards = self.boards.write().await;
        for board in boards.values_mut() {
            board.advance(secs);
        }
    }

    async fn board(&self, station_id: &str) -> Result<StationBoard, ArrivalsError> {
        let boards = self.boards.read().await;
        boards
            .get(station_id)
            .cloned()
            .ok_or_else(|| ArrivalsError::StationNotFound(station_id.to_string()))
    }
}

impl ArrivalsFeed for MockArrivalsFeed {
    async fn bus_arrivals(&self, station_id: &str) -> Result<Vec<BusArrival>, ArrivalsError> {
        Ok(self.board(station_id).await?.bus)
    }

    async fn subway_arrivals(&self, station_id: &str) -> Result<Vec<SubwayArrival>, ArrivalsError> {
        Ok(self.board(station_id).await?.subway)
    }
}

fn sample_board(station: &str) -> StationBoard {
    let bus = |number: &str, secs, stops, bus_type, low_floor| BusArrival {
        bus_number: number.to_string(),
        remaining_secs: secs,
        remaining_stops: stops,
        bus_type,
        low_floor,
        station_name: station.to_string(),
    };
    let train = |destination: &str, secs, congestion, direction| SubwayArrival {
        line: "2호선".to_string(),
        destination: destination.to_string(),
        remaining_secs: secs,
        train_type: SubwayTrainType::Regular,
        congestion,
        direction,
        station_name: station.to_string(),
    };

    StationBoard {
        bus: vec![
            bus("273", 120, 3, BusType::Regular, true),
            bus("273", 480, 8, BusType::Regular, false),
            bus("6002", 300, 5, BusType::Express, true),
            bus("7016", 600, 7, BusType::Local, false),
        ],
        subway: vec![
            train("강남", 60, Congestion::High, Direction::Up),
            train("강남", 300, Congestion::Medium, Direction::Up),
            train("시청", 120, Congestion::Medium, Direction::Down),
            train("시청", 420, Congestion::Low, Direction::Down),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn sample_board_has_four_of_each() {
        let feed = MockArrivalsFeed::sample();

        let buses = feed.bus_arrivals(SAMPLE_STATION).await.unwrap();
        let trains = feed.subway_arrivals(SAMPLE_STATION).await.unwrap();

        assert_eq!(buses.len(), 4);
        assert_eq!(trains.len(), 4);
        assert_eq!(buses[2].bus_number, "6002");
        assert_eq!(buses[2].bus_type, BusType::Express);
        assert!(trains.iter().all(|t| t.line == "2호선"));
    }

    #[tokio::test]
    async fn unknown_station_returns_error() {
        let feed = MockArrivalsFeed::sample();
        match feed.bus_arrivals("없는역").await {
            Err(ArrivalsError::StationNotFound(s)) => assert_eq!(s, "없는역"),
            other => panic!("expected StationNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn advance_counts_down() {
        let feed = MockArrivalsFeed::sample();
        feed.advance(30).await;

        let buses = feed.bus_arrivals(SAMPLE_STATION).await.unwrap();
        assert_eq!(buses[0].remaining_secs, 90);

        feed.advance(1000).await;
        let trains = feed.subway_arrivals(SAMPLE_STATION).await.unwrap();
        assert!(trains.iter().all(|t| t.remaining_secs == 0));
    }

    #[tokio::test]
    async fn load_from_dir() {
        let dir = tempdir().unwrap();
        let board = sample_board("신촌역");
        std::fs::write(
            dir.path().join("신촌역.json"),
            serde_json::to_string(&board).unwrap(),
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let feed = MockArrivalsFeed::from_dir(dir.path()).unwrap();
        assert_eq!(feed.available_stations().await, vec!["신촌역".to_string()]);

        let buses = feed.bus_arrivals("신촌역").await.unwrap();
        assert_eq!(buses[0].station_name, "신촌역");
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            MockArrivalsFeed::from_dir(dir.path()),
            Err(ArrivalsError::Load { .. })
        ));
    }

    #[test]
    fn malformed_board_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
        assert!(MockArrivalsFeed::from_dir(dir.path()).is_err());
    }
}
