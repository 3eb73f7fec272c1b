use std::collections::HashMap;

use crate::domain::id::{EquipmentName, RoomName};
use crate::domain::model::{Capability, Equipment, Room};

/// The equipment a room actually provides, after resolving its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEquipment {
    pub name: EquipmentName,
    pub capability: Capability,
}

/// Rooms partitioned by the capability of the equipment they host.
///
/// Every partition keeps the order of the room roster; the allocator relies
/// on that order when it picks the first free room.
#[derive(Debug, Clone, Default)]
pub struct RoomClassification {
    pub no_equipment: Vec<RoomName>,
    pub simple_capable: Vec<RoomName>,
    pub advanced_capable: Vec<RoomName>,
    equipment_by_room: HashMap<RoomName, Option<RoomEquipment>>,
}

impl RoomClassification {
    /// Follows each room's equipment reference into the equipment roster.
    ///
    /// A room without a reference, or whose reference names no known
    /// equipment, counts as a room without equipment.
    pub fn classify(equipment: &[Equipment], rooms: &[Room]) -> Self {
        let capability_by_name: HashMap<&EquipmentName, Capability> =
            equipment.iter().map(|e| (&e.name, e.capability)).collect();

        let mut classification = RoomClassification::default();

        for room in rooms {
            let resolved = match &room.equipment {
                Some(reference) => match capability_by_name.get(reference) {
                    Some(capability) => Some(RoomEquipment { name: reference.clone(), capability: *capability }),
                    None => {
                        log::warn!(
                            "Room '{}' references unknown equipment '{}'. Treating it as a room without equipment.",
                            room.name,
                            reference
                        );
                        None
                    }
                },
                None => None,
            };

            match resolved.as_ref().map(|e| e.capability) {
                Some(Capability::Simple) => classification.simple_capable.push(room.name.clone()),
                Some(Capability::Advanced) => classification.advanced_capable.push(room.name.clone()),
                None => classification.no_equipment.push(room.name.clone()),
            }

            classification.equipment_by_room.insert(room.name.clone(), resolved);
        }

        log::debug!(
            "Classified {} rooms: {} without equipment, {} simple, {} advanced.",
            rooms.len(),
            classification.no_equipment.len(),
            classification.simple_capable.len(),
            classification.advanced_capable.len()
        );

        classification
    }

    /// Equipment hosted by `room`, or `None` if the room has none (or is unknown).
    pub fn equipment_of(&self, room: &RoomName) -> Option<&RoomEquipment> {
        self.equipment_by_room.get(room).and_then(|e| e.as_ref())
    }
}
