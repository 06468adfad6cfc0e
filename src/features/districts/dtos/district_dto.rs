use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// District with its Divisional Secretariat divisions, in selector order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistrictResponseDto {
    pub name: String,
    pub divisions: Vec<String>,
}

impl From<&(&'static str, &'static [&'static str])> for DistrictResponseDto {
    fn from((name, divisions): &(&'static str, &'static [&'static str])) -> Self {
        Self {
            name: name.to_string(),
            divisions: divisions.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Options for the division selector of one district
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DivisionListResponseDto {
    pub district: String,
    pub divisions: Vec<String>,
}
