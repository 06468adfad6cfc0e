//! Event reducer for [`ReportForm`]

use crate::core::error::{AppError, Result};
use crate::features::districts::DistrictService;
use crate::features::report_form::models::{FormEvent, FormField, ReportForm};
use crate::features::report_form::services::validation::validate_field;
use crate::shared::constants::{
    CONTACT_NO_LENGTH, MSG_GEOLOCATION_FAILED_PREFIX, MSG_GEOLOCATION_UNSUPPORTED,
};
use crate::shared::validation::DIGITS_REGEX;

impl ReportForm {
    /// Next form state after `event`.
    ///
    /// Rejected input (a non-digit or 11th digit in the contact number, a
    /// second GPS request while one is outstanding) leaves the state as is.
    /// Selecting a district or division that is not in the reference table
    /// is an error.
    pub fn apply(self, event: FormEvent, districts: &DistrictService) -> Result<Self> {
        let form = match event {
            FormEvent::EditName { value } => Self {
                reporter_name: value,
                ..self
            }
            .without_error(FormField::ReporterName),
            FormEvent::EditContactNo { value } => {
                if value.len() > CONTACT_NO_LENGTH || !DIGITS_REGEX.is_match(&value) {
                    return Ok(self);
                }
                Self {
                    contact_no: value,
                    ..self
                }
                .without_error(FormField::ContactNo)
            }
            FormEvent::EditDescription { value } => Self {
                description: value,
                ..self
            }
            .without_error(FormField::Description),
            FormEvent::EditDateTime { value } => Self {
                date_time: value,
                ..self
            }
            .without_error(FormField::DateTime),
            FormEvent::Blur { field } => {
                let mut form = self;
                match validate_field(&form, field, districts) {
                    Some(message) => form.errors.set(field, message),
                    None => form.errors.clear(field),
                }
                form
            }
            FormEvent::SelectDistrict { district } => self.select_district(&district, districts)?,
            FormEvent::SelectDivision { ds_division } => {
                self.select_division(&ds_division, districts)?
            }
            FormEvent::SelectFile {
                file_name,
                mime_type,
                preview_url,
            } => {
                let image = if mime_type.starts_with("image/") {
                    preview_url
                } else {
                    String::new()
                };
                Self {
                    file_name,
                    image,
                    ..self
                }
            }
            FormEvent::RemoveFile => Self {
                file_name: String::new(),
                image: String::new(),
                ..self
            },
            FormEvent::GpsRequested => {
                if self.locating {
                    return Ok(self);
                }
                Self {
                    locating: true,
                    location_error: String::new(),
                    ..self
                }
            }
            FormEvent::GpsUnsupported => Self {
                locating: false,
                location_error: MSG_GEOLOCATION_UNSUPPORTED.to_string(),
                ..self
            },
            FormEvent::GpsFailed { message } => Self {
                locating: false,
                location_error: format!("{}{}", MSG_GEOLOCATION_FAILED_PREFIX, message),
                ..self
            },
            FormEvent::DismissConfirmation => Self {
                show_success: false,
                ..self
            },
            FormEvent::Clear => self.cleared(),
        };

        Ok(form)
    }

    fn without_error(mut self, field: FormField) -> Self {
        self.errors.clear(field);
        self
    }

    fn select_district(self, district: &str, districts: &DistrictService) -> Result<Self> {
        if district.trim().is_empty() {
            return Ok(Self {
                district: String::new(),
                ds_division: String::new(),
                ..self
            });
        }

        let canonical = districts
            .canonical_district(district)
            .ok_or_else(|| AppError::Validation(format!("Unknown district '{}'", district)))?;

        if canonical == self.district {
            return Ok(self);
        }

        Ok(Self {
            district: canonical.to_string(),
            ds_division: String::new(),
            ..self
        }
        .without_error(FormField::District))
    }

    fn select_division(self, ds_division: &str, districts: &DistrictService) -> Result<Self> {
        if ds_division.is_empty() {
            return Ok(Self {
                ds_division: String::new(),
                ..self
            });
        }

        if !self.division_enabled() {
            return Err(AppError::Validation(
                "Select a district before choosing a division".to_string(),
            ));
        }

        if !districts.is_valid_division(&self.district, ds_division) {
            return Err(AppError::Validation(format!(
                "'{}' is not a division of {}",
                ds_division, self.district
            )));
        }

        Ok(Self {
            ds_division: ds_division.to_string(),
            ..self
        }
        .without_error(FormField::DsDivision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{MSG_CONTACT_NO_LENGTH, MSG_NAME_CHARSET};

    fn apply_all(events: Vec<FormEvent>) -> ReportForm {
        let districts = DistrictService::new();
        events
            .into_iter()
            .try_fold(ReportForm::new(), |form, event| form.apply(event, &districts))
            .unwrap()
    }

    fn type_contact(text: &str) -> ReportForm {
        // one keystroke at a time, like the input field
        let districts = DistrictService::new();
        let mut form = ReportForm::new();
        for ch in text.chars() {
            let value = format!("{}{}", form.contact_no, ch);
            form = form
                .apply(FormEvent::EditContactNo { value }, &districts)
                .unwrap();
        }
        form
    }

    #[test]
    fn test_contact_no_stays_digits_and_bounded() {
        let inputs = [
            "0771234567",
            "077123456789",
            "07a7-123 456",
            "٠١٢٣٤",
            "+94771234567",
            "",
        ];
        for input in inputs {
            let form = type_contact(input);
            assert!(form.contact_no.len() <= CONTACT_NO_LENGTH, "{:?}", input);
            assert!(
                form.contact_no.chars().all(|c| c.is_ascii_digit()),
                "{:?}",
                input
            );
        }
        assert_eq!(type_contact("077123456789").contact_no, "0771234567");
        assert_eq!(type_contact("07a7-123 456").contact_no, "077123456");
    }

    #[test]
    fn test_contact_no_paste_rejected_whole() {
        let form = apply_all(vec![
            FormEvent::EditContactNo {
                value: "077".to_string(),
            },
            FormEvent::EditContactNo {
                value: "07712345678".to_string(),
            },
        ]);
        assert_eq!(form.contact_no, "077");

        // deleting is always allowed
        let form = form
            .apply(
                FormEvent::EditContactNo {
                    value: String::new(),
                },
                &DistrictService::new(),
            )
            .unwrap();
        assert_eq!(form.contact_no, "");
    }

    #[test]
    fn test_blur_sets_and_edit_clears_error() {
        let form = apply_all(vec![
            FormEvent::EditName {
                value: "R2D2".to_string(),
            },
            FormEvent::Blur {
                field: FormField::ReporterName,
            },
            FormEvent::Blur {
                field: FormField::ContactNo,
            },
        ]);
        assert_eq!(form.errors.get(FormField::ReporterName), Some(MSG_NAME_CHARSET));
        assert_eq!(form.errors.get(FormField::ContactNo), Some(MSG_CONTACT_NO_LENGTH));

        let form = form
            .apply(
                FormEvent::EditName {
                    value: "R".to_string(),
                },
                &DistrictService::new(),
            )
            .unwrap();
        assert_eq!(form.errors.get(FormField::ReporterName), None);
        assert_eq!(form.errors.get(FormField::ContactNo), Some(MSG_CONTACT_NO_LENGTH));
    }

    #[test]
    fn test_blur_on_valid_field_clears_error() {
        let form = apply_all(vec![
            FormEvent::Blur {
                field: FormField::Description,
            },
            FormEvent::EditDescription {
                value: "Headache and fever".to_string(),
            },
            FormEvent::Blur {
                field: FormField::Description,
            },
        ]);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_changing_district_clears_division() {
        let form = apply_all(vec![
            FormEvent::SelectDistrict {
                district: "Colombo".to_string(),
            },
            FormEvent::SelectDivision {
                ds_division: "Dehiwala".to_string(),
            },
        ]);
        assert_eq!(form.ds_division, "Dehiwala");

        let districts = DistrictService::new();
        let same = form
            .clone()
            .apply(
                FormEvent::SelectDistrict {
                    district: "colombo".to_string(),
                },
                &districts,
            )
            .unwrap();
        assert_eq!(same.ds_division, "Dehiwala");

        let changed = form
            .apply(
                FormEvent::SelectDistrict {
                    district: "Gampaha".to_string(),
                },
                &districts,
            )
            .unwrap();
        assert_eq!(changed.district, "Gampaha");
        assert_eq!(changed.ds_division, "");
        assert!(changed.division_enabled());

        let none = changed
            .apply(
                FormEvent::SelectDistrict {
                    district: String::new(),
                },
                &districts,
            )
            .unwrap();
        assert!(!none.division_enabled());
        assert_eq!(none.ds_division, "");
    }

    #[test]
    fn test_division_requires_listed_district() {
        let districts = DistrictService::new();
        let err = ReportForm::new()
            .apply(
                FormEvent::SelectDivision {
                    ds_division: "Dehiwala".to_string(),
                },
                &districts,
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let gampaha = ReportForm::new()
            .apply(
                FormEvent::SelectDistrict {
                    district: "Gampaha".to_string(),
                },
                &districts,
            )
            .unwrap();
        assert!(gampaha
            .apply(
                FormEvent::SelectDivision {
                    ds_division: "Dehiwala".to_string(),
                },
                &districts,
            )
            .is_err());
    }

    #[test]
    fn test_unknown_district_rejected() {
        let err = ReportForm::new()
            .apply(
                FormEvent::SelectDistrict {
                    district: "Atlantis".to_string(),
                },
                &DistrictService::new(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_file_selection() {
        let form = apply_all(vec![FormEvent::SelectFile {
            file_name: "rash.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            preview_url: "blob:http://localhost/1234".to_string(),
        }]);
        assert_eq!(form.file_name, "rash.jpg");
        assert_eq!(form.image, "blob:http://localhost/1234");

        let form = form
            .apply(
                FormEvent::SelectFile {
                    file_name: "notes.pdf".to_string(),
                    mime_type: "application/pdf".to_string(),
                    preview_url: "blob:http://localhost/5678".to_string(),
                },
                &DistrictService::new(),
            )
            .unwrap();
        assert_eq!(form.file_name, "notes.pdf");
        assert_eq!(form.image, "");

        let form = form
            .apply(FormEvent::RemoveFile, &DistrictService::new())
            .unwrap();
        assert_eq!(form.file_name, "");
    }

    #[test]
    fn test_gps_guard_and_failures() {
        let districts = DistrictService::new();
        let form = ReportForm {
            location_error: "old".to_string(),
            ..ReportForm::new()
        }
        .apply(FormEvent::GpsRequested, &districts)
        .unwrap();
        assert!(form.locating);
        assert!(!form.gps_enabled());
        assert_eq!(form.location_error, "");

        let again = form.clone().apply(FormEvent::GpsRequested, &districts).unwrap();
        assert_eq!(again, form);

        let failed = form
            .apply(
                FormEvent::GpsFailed {
                    message: "User denied Geolocation".to_string(),
                },
                &districts,
            )
            .unwrap();
        assert!(!failed.locating);
        assert_eq!(
            failed.location_error,
            "Failed to get GPS location: User denied Geolocation"
        );

        let unsupported = ReportForm::new()
            .apply(FormEvent::GpsUnsupported, &districts)
            .unwrap();
        assert_eq!(unsupported.location_error, MSG_GEOLOCATION_UNSUPPORTED);
        assert_eq!(unsupported.district, "");
    }

    #[test]
    fn test_clear_and_dismiss() {
        let form = apply_all(vec![
            FormEvent::EditName {
                value: "Kamal".to_string(),
            },
            FormEvent::SelectDistrict {
                district: "Kandy".to_string(),
            },
            FormEvent::Clear,
        ]);
        assert_eq!(form, ReportForm::new());

        let shown = ReportForm {
            show_success: true,
            ..ReportForm::new()
        };
        let dismissed = shown
            .apply(FormEvent::DismissConfirmation, &DistrictService::new())
            .unwrap();
        assert!(!dismissed.show_success);
    }
}
