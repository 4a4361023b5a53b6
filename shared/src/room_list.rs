use std::collections::{HashMap, HashSet};

use crate::shared_prediction_game::{GameRoom, RoomStatus};

/// Merges a freshly fetched room list into the one on screen.
///
/// Rooms already shown keep their position and take the incoming values,
/// new rooms are appended in server order, and rooms that disappeared or
/// completed are dropped.
pub fn merge_rooms(current: &[GameRoom], incoming: Vec<GameRoom>) -> Vec<GameRoom> {
    let known: HashSet<&str> = current.iter().map(|room| room.id.as_str()).collect();
    let mut updates: HashMap<String, GameRoom> = HashMap::new();
    let mut fresh = Vec::new();
    let mut seen = HashSet::new();

    for room in incoming {
        if room.status == RoomStatus::Completed || !seen.insert(room.id.clone()) {
            continue;
        }
        if known.contains(room.id.as_str()) {
            updates.insert(room.id.clone(), room);
        } else {
            fresh.push(room);
        }
    }

    let removed = current.len() - updates.len();
    if removed > 0 {
        log::info!("{} room(s) closed or completed since the last refresh", removed);
    }

    current
        .iter()
        .filter_map(|room| updates.remove(&room.id))
        .chain(fresh)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn room(id: &str, current: u32, status: &str) -> GameRoom {
        serde_json::from_value(json!({
            "_id": id, "status": status, "currentPlayers": current, "maxPlayers": 5
        }))
        .unwrap()
    }

    fn ids(rooms: &[GameRoom]) -> Vec<&str> {
        rooms.iter().map(|room| room.id.as_str()).collect()
    }

    #[test]
    fn test_known_rooms_keep_their_position() {
        let current = vec![room("a", 1, "waiting"), room("b", 1, "waiting")];
        let incoming = vec![room("c", 0, "waiting"), room("b", 3, "waiting"), room("a", 2, "waiting")];
        let merged = merge_rooms(&current, incoming);
        assert_eq!(ids(&merged), vec!["a", "b", "c"]);
        assert_eq!(merged[0].current_players, 2);
        assert_eq!(merged[1].current_players, 3);
    }

    #[test]
    fn test_missing_and_completed_rooms_are_dropped() {
        let current = vec![room("a", 1, "waiting"), room("b", 5, "in_progress"), room("c", 2, "waiting")];
        let incoming = vec![room("b", 5, "completed"), room("c", 2, "waiting")];
        assert_eq!(ids(&merge_rooms(&current, incoming)), vec!["c"]);
    }

    #[test]
    fn test_first_load_takes_server_order() {
        let incoming = vec![room("z", 0, "waiting"), room("y", 0, "waiting"), room("z", 1, "waiting")];
        assert_eq!(ids(&merge_rooms(&[], incoming)), vec!["z", "y"]);
    }

    #[test]
    fn test_merging_same_list_is_stable() {
        let current = vec![room("a", 1, "waiting"), room("b", 2, "waiting")];
        let merged = merge_rooms(&current, current.clone());
        assert_eq!(merged, current);
    }
}
