mod district_service;

pub use district_service::{match_reference, AreaResolution, DistrictService};
