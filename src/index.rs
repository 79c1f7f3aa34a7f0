//! Room-type index.
//!
//! Maps every room number to its type tag. Built once from the whole
//! document before rendering and only read afterwards; a link's own record
//! does not carry its destination's type, so renderers resolve it here.

use std::collections::HashMap;

use crate::document::{Room, RoomNumber, TypeTag};
use crate::error::{MazeError, Result};

#[derive(Debug, Clone, Default)]
pub struct RoomTypeIndex {
    types: HashMap<RoomNumber, TypeTag>,
}

impl RoomTypeIndex {
    /// Build the index from all rooms.
    ///
    /// Duplicate numbers are not an error here: the last record wins.
    /// Duplicates are rejected earlier, during validation.
    pub fn build<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        let types = rooms
            .into_iter()
            .map(|room| (room.number, room.kind.clone()))
            .collect();

        Self { types }
    }

    pub fn get(&self, number: RoomNumber) -> Option<&TypeTag> {
        self.types.get(&number)
    }

    /// Resolve the type of the room a link from `from` points at.
    pub fn resolve(&self, from: RoomNumber, dir: RoomNumber) -> Result<&TypeTag> {
        self.get(dir).ok_or(MazeError::UnknownRoom {
            room: from.get(),
            dir: dir.get(),
        })
    }

    pub fn contains(&self, number: RoomNumber) -> bool {
        self.types.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_index() {
        let rooms = vec![Room::new(1, "cave", "", ""), Room::new(2, "hall", "", "")];
        let index = RoomTypeIndex::build(&rooms);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(RoomNumber::new(1)), Some(&TypeTag::new("cave")));
        assert_eq!(index.get(RoomNumber::new(2)), Some(&TypeTag::new("hall")));
        assert!(index.get(RoomNumber::new(3)).is_none());
    }

    #[test]
    fn test_duplicate_last_wins() {
        let rooms = vec![Room::new(1, "cave", "", ""), Room::new(1, "hall", "", "")];
        let index = RoomTypeIndex::build(&rooms);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(RoomNumber::new(1)), Some(&TypeTag::new("hall")));
    }

    #[test]
    fn test_resolve_unknown_room() {
        let rooms = vec![Room::new(1, "cave", "", "")];
        let index = RoomTypeIndex::build(&rooms);

        match index.resolve(RoomNumber::new(1), RoomNumber::new(9)) {
            Err(MazeError::UnknownRoom { room, dir }) => {
                assert_eq!(room, 1);
                assert_eq!(dir, 9);
            }
            other => panic!("expected unknown room, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_index() {
        let index = RoomTypeIndex::build(&[]);
        assert!(index.is_empty());
    }
}
