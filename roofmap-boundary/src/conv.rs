use super::*;
use roofmap_entities as e;

impl TryFrom<LocationRecord> for e::record::LocationRecord {
    type Error = RecordError;
    fn try_from(from: LocationRecord) -> Result<Self, Self::Error> {
        let LocationRecord {
            id,
            name,
            address,
            lat,
            lng,
            tile_type,
            description,
            images,
            google_maps_url,
        } = from;
        let category = e::category::Category::try_from_name(&tile_type)?;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(RecordError::Position { lat, lng })?;
        Ok(Self {
            id: id.into(),
            name,
            address,
            pos,
            category,
            description,
            images,
            map_link: google_maps_url,
        })
    }
}

impl From<e::record::LocationRecord> for LocationRecord {
    fn from(from: e::record::LocationRecord) -> Self {
        let e::record::LocationRecord {
            id,
            name,
            address,
            pos,
            category,
            description,
            images,
            map_link,
        } = from;
        Self {
            id: id.into(),
            name,
            address,
            lat: pos.lat(),
            lng: pos.lng(),
            tile_type: category.name().to_owned(),
            description,
            images,
            google_maps_url: map_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::{builders::*, category::Category, geo::MapPoint};

    #[test]
    fn serialize_entity_with_authored_field_names() {
        let record = e::record::LocationRecord::build()
            .id("premion-1")
            .category(Category::Premion)
            .pos(MapPoint::from_lat_lng_deg(51.3429, 16.1503))
            .finish();
        let json = serde_json::to_value(LocationRecord::from(record)).unwrap();
        assert_eq!(json["tileType"], "PREMION");
        assert_eq!(json["lat"], 51.3429);
        assert!(json.get("googleMapsUrl").is_none());
    }
}
