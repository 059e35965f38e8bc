use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::data::Cell;

/// Cells go over the wire as single-character strings.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Unopened => serializer.serialize_str(" "),
            Cell::Revealed(n) => {
                debug_assert!(*n <= 8, "cell has {} adjacent mines", n);
                serializer.collect_str(n)
            }
            Cell::RevealedMine => serializer.serialize_str("X"),
            Cell::FlaggedMine => serializer.serialize_str("M"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NewGameRequest {
    pub width: i32,
    pub height: i32,
    pub mines_count: i32,
}

impl Default for NewGameRequest {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            mines_count: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    pub game_id: String,
    pub col: i32,
    pub row: i32,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub game_id: Uuid,
    pub completed: bool,
    pub width: usize,
    pub height: usize,
    pub mines_count: usize,
    pub field: Vec<Vec<Cell>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_serialize_as_display_strings() {
        let row = vec![
            Cell::Unopened,
            Cell::Revealed(0),
            Cell::Revealed(8),
            Cell::RevealedMine,
            Cell::FlaggedMine,
        ];

        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"[" ","0","8","X","M"]"#
        );
    }

    #[test]
    fn every_neighbour_count_keeps_its_digit() {
        for n in 0..=8u8 {
            assert_eq!(
                serde_json::to_string(&Cell::Revealed(n)).unwrap(),
                format!("\"{}\"", n)
            );
        }
    }

    #[test]
    fn response_uses_snake_case_keys() {
        let response = GameResponse {
            game_id: Uuid::nil(),
            completed: false,
            width: 2,
            height: 1,
            mines_count: 1,
            field: vec![vec![Cell::Unopened, Cell::Revealed(1)]],
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "game_id": "00000000-0000-0000-0000-000000000000",
                "completed": false,
                "width": 2,
                "height": 1,
                "mines_count": 1,
                "field": [[" ", "1"]],
            })
        );
    }

    #[test]
    fn turn_request_accepts_negative_coordinates() {
        let request: TurnRequest =
            serde_json::from_str(r#"{"game_id":"abc","col":-1,"row":3}"#).unwrap();
        assert_eq!((request.col, request.row), (-1, 3));
    }
}
