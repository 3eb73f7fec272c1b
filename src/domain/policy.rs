use crate::domain::classifier::RoomClassification;
use crate::domain::id::RoomName;
use crate::domain::model::{Condition, Role, Topography};

/// One partition of the room roster, as produced by [`RoomClassification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomTier {
    NoEquipment,
    SimpleCapable,
    AdvancedCapable,
}

impl RoomTier {
    fn rooms<'a>(&self, classification: &'a RoomClassification) -> &'a [RoomName] {
        match self {
            RoomTier::NoEquipment => &classification.no_equipment,
            RoomTier::SimpleCapable => &classification.simple_capable,
            RoomTier::AdvancedCapable => &classification.advanced_capable,
        }
    }
}

/// What a condition asks of the schedule: who may treat it and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPolicy {
    pub required_role: Role,
    /// Tiers in preference order; a later tier is only tried when every room
    /// of the earlier ones is taken.
    pub room_tiers: Vec<RoomTier>,
}

impl AllocationPolicy {
    pub fn for_condition(condition: Condition) -> Self {
        match condition {
            Condition::Flu => AllocationPolicy { required_role: Role::GeneralPractitioner, room_tiers: vec![RoomTier::NoEquipment] },
            Condition::Cancer(Topography::Breast) => AllocationPolicy {
                required_role: Role::Oncologist,
                room_tiers: vec![RoomTier::SimpleCapable, RoomTier::AdvancedCapable],
            },
            Condition::Cancer(Topography::HeadAndNeck) => {
                AllocationPolicy { required_role: Role::Oncologist, room_tiers: vec![RoomTier::AdvancedCapable] }
            }
        }
    }

    /// Every eligible room, ordered by tier and then by roster order.
    pub fn eligible_rooms<'a>(&self, classification: &'a RoomClassification) -> Vec<&'a RoomName> {
        self.room_tiers.iter().flat_map(|tier| tier.rooms(classification)).collect()
    }
}
