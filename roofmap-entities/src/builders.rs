pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::record_builder::*;

pub mod record_builder {

    use super::*;
    use crate::{category::*, geo::*, record::*};

    #[derive(Debug)]
    pub struct LocationRecordBuild {
        record: LocationRecord,
    }

    impl LocationRecordBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.record.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.record.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.record.pos = pos;
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.record.category = category;
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.record.description = desc.into();
            self
        }
        pub fn images(mut self, images: Vec<impl Into<String>>) -> Self {
            self.record.images = images.into_iter().map(Into::into).collect();
            self
        }
        pub fn map_link(mut self, link: Option<&str>) -> Self {
            self.record.map_link = link.map(Into::into);
            self
        }
        pub fn finish(self) -> LocationRecord {
            self.record
        }
    }

    impl Builder for LocationRecord {
        type Build = LocationRecordBuild;
        fn build() -> LocationRecordBuild {
            LocationRecordBuild {
                record: LocationRecord {
                    id: "".into(),
                    name: "".into(),
                    address: "".into(),
                    pos: MapPoint::default(),
                    category: Category::Koda,
                    description: "".into(),
                    images: vec![],
                    map_link: None,
                },
            }
        }
    }
}
