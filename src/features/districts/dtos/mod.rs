mod district_dto;

pub use district_dto::{DistrictResponseDto, DivisionListResponseDto};
