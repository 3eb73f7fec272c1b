use serde::Deserialize;

use crate::domain::id::{EquipmentName, RoomName, StaffName};
use crate::domain::model::{Equipment, Room, Staff};
use crate::error::Error;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StaffRosterDto {
    pub staff: Vec<StaffDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRosterDto {
    pub equipment: Vec<EquipmentDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDto {
    pub name: String,
    pub capability: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomRosterDto {
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub name: String,
    /// Name of the equipment installed in the room; absent or empty for none.
    #[serde(default)]
    pub equipment: Option<String>,
}

impl TryFrom<StaffDto> for Staff {
    type Error = Error;

    fn try_from(dto: StaffDto) -> Result<Self, Self::Error> {
        if dto.name.trim().is_empty() {
            return Err(Error::ConversionError("Staff member without a name.".to_string()));
        }
        Ok(Staff { name: StaffName::new(dto.name), roles: dto.roles })
    }
}

impl TryFrom<EquipmentDto> for Equipment {
    type Error = Error;

    fn try_from(dto: EquipmentDto) -> Result<Self, Self::Error> {
        let capability = dto.capability.parse()?;
        Ok(Equipment { name: EquipmentName::new(dto.name), capability })
    }
}

impl From<RoomDto> for Room {
    fn from(dto: RoomDto) -> Self {
        let equipment = dto.equipment.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()).map(EquipmentName::new);
        Room { name: RoomName::new(dto.name), equipment }
    }
}

impl StaffRosterDto {
    pub fn into_domain(self) -> Result<Vec<Staff>, Error> {
        self.staff.into_iter().map(Staff::try_from).collect()
    }
}

impl EquipmentRosterDto {
    /// Equipment whose capability is neither `Simple` nor `Advanced` is left
    /// out, so rooms hosting it count as rooms without equipment.
    pub fn into_domain(self) -> Vec<Equipment> {
        self.equipment
            .into_iter()
            .filter_map(|dto| {
                let name = dto.name.clone();
                match Equipment::try_from(dto) {
                    Ok(equipment) => Some(equipment),
                    Err(e) => {
                        log::warn!("Ignoring equipment '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect()
    }
}

impl RoomRosterDto {
    pub fn into_domain(self) -> Vec<Room> {
        self.rooms.into_iter().map(Room::from).collect()
    }
}
