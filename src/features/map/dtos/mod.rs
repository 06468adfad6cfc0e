mod map_dto;

pub use map_dto::{MapCenterDto, MapQuery, MapViewDto};
