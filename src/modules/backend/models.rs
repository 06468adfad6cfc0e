use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Alert published by the backend (`GET /Alerts/all`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Alert {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Approved aid request published by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AidRequest {
    pub aid_id: i64,
    pub full_name: String,
    pub type_support: String,
    pub district: String,
    pub divisional_secretariat: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of `POST /Symptoms/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SymptomReport {
    pub reporter_name: String,
    pub contact_no: String,
    pub district: String,
    pub ds_division: String,
    /// Absolute instant, serialized as ISO-8601 UTC with milliseconds
    #[serde(with = "iso_millis")]
    pub date_time: DateTime<Utc>,
    pub description: String,
    /// Local preview reference of the attached image, or empty.
    /// Not a transferable upload; the backend contract only accepts a string here.
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Always "Pending" for new reports
    pub action: String,
}

/// Accepted submission as reported by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub message: Option<String>,
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
