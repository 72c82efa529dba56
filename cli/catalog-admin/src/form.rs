//! The catalog form and its client-side validation.
//!
//! Validation mirrors the backend's rules so most mistakes are caught
//! before a round-trip. The backend remains canonical: its 400
//! `details` text is routed back onto the form with
//! [`route_backend_detail`].

use std::collections::BTreeMap;
use std::str::FromStr;

use catalog_client::{CatalogRecord, CatalogStatus, CatalogSubmission};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const NAME_MAX_CHARS: usize = 30;
pub const DESCRIPTION_MAX_CHARS: usize = 50;

/// One input of the catalog form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Description,
    StartDate,
    EndDate,
    Status,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::StartDate => "Start Date",
            FormField::EndDate => "End Date",
            FormField::Status => "Status",
        }
    }
}

/// Per-field validation messages.
///
/// Every rule is evaluated independently, so several fields can carry
/// errors at once.
#[derive(Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn for_field(field: FormField, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.set(field, message);
        errors
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Raw form input, exactly as the user entered it.
#[derive(Debug, Default, Clone)]
pub struct CatalogForm {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

impl CatalogForm {
    /// Prefill the form from an existing record, for editing.
    pub fn from_record(record: &CatalogRecord) -> Self {
        CatalogForm {
            name: record.name.clone(),
            description: record.description.clone(),
            start_date: record.start_date.format(DATE_FORMAT).to_string(),
            end_date: record.end_date.format(DATE_FORMAT).to_string(),
            status: record.status.to_string(),
        }
    }

    /// Validate the form against today's date.
    ///
    /// Pure function, no network access; `today` is injected so the
    /// date rules are deterministic under test. Returns the normalized
    /// submission, or the full set of field errors.
    pub fn validate(&self, today: NaiveDate) -> Result<CatalogSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.set(FormField::Name, "Name is required.");
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.set(
                FormField::Name,
                format!("Name cannot exceed {NAME_MAX_CHARS} characters."),
            );
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.set(FormField::Description, "Description is required.");
        } else if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.set(
                FormField::Description,
                format!("Description cannot exceed {DESCRIPTION_MAX_CHARS} characters."),
            );
        }

        let start_date = match parse_date_field(&self.start_date, FormField::StartDate, today) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.set(FormField::StartDate, message);
                None
            },
        };
        let end_date = match parse_date_field(&self.end_date, FormField::EndDate, today) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.set(FormField::EndDate, message);
                None
            },
        };

        // Checked whenever both dates parse; overwrites an
        // end-date-in-past message so the ordering error wins.
        if let (Some(start), Some(end)) = (
            parse_date(&self.start_date),
            parse_date(&self.end_date),
        ) {
            if end < start {
                errors.set(FormField::EndDate, "End Date cannot be before Start Date.");
            }
        }

        let status_input = self.status.trim();
        let status = if status_input.is_empty() {
            errors.set(FormField::Status, "Status is required.");
            None
        } else {
            match CatalogStatus::from_str(status_input) {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.set(
                        FormField::Status,
                        "Invalid status. Allowed: active, inactive, upcoming, expired.",
                    );
                    None
                },
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CatalogSubmission {
            name: name.to_string(),
            description: description.to_string(),
            start_date: start_date.expect("validated above"),
            end_date: end_date.expect("validated above"),
            status: status.expect("validated above"),
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn parse_date_field(
    value: &str,
    field: FormField,
    today: NaiveDate,
) -> Result<NaiveDate, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} is required.", field.label()));
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD.".to_string())?;
    if date < today {
        return Err(format!("{} cannot be in the past.", field.label()));
    }
    Ok(date)
}

// ---------------------------------------------------------------------------
// Backend error routing
// ---------------------------------------------------------------------------

/// Keyword table for routing backend validation details to fields.
/// First match wins; "End Date" precedes "Start Date" so the ordering
/// message ("End Date cannot be before Start Date.") lands on the end
/// date slot, where client-side validation reports it too.
const KEYWORD_ROUTES: &[(&str, FormField)] = &[
    ("Name", FormField::Name),
    ("Description", FormField::Description),
    ("End Date", FormField::EndDate),
    ("Start Date", FormField::StartDate),
    ("Status", FormField::Status),
];

/// Route a backend validation `details` message to form fields.
///
/// A date message naming neither endpoint lands on both date fields.
/// Returns `None` when no keyword matches; callers degrade to a
/// general error message.
pub fn route_backend_detail(detail: &str) -> Option<FieldErrors> {
    for (keyword, field) in KEYWORD_ROUTES {
        if detail.contains(keyword) {
            return Some(FieldErrors::for_field(*field, detail));
        }
    }

    if detail.contains("Date") || detail.contains("date") {
        let mut errors = FieldErrors::default();
        errors.set(FormField::StartDate, detail);
        errors.set(FormField::EndDate, detail);
        return Some(errors);
    }

    None
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_form() -> CatalogForm {
        CatalogForm {
            name: "Spring Sale".to_string(),
            description: "Seasonal discounts".to_string(),
            start_date: "2025-07-01".to_string(),
            end_date: "2025-07-31".to_string(),
            status: "Active".to_string(),
        }
    }

    #[test]
    fn valid_input_produces_normalized_submission() {
        let submission = valid_form().validate(today()).unwrap();
        assert_eq!(submission.name, "Spring Sale");
        assert_eq!(submission.status, CatalogStatus::Active);
        assert_eq!(
            submission.start_date,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
    }

    #[test]
    fn dates_today_are_not_in_the_past() {
        let mut form = valid_form();
        form.start_date = "2025-06-15".to_string();
        form.end_date = "2025-06-15".to_string();
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn overlong_name_populates_only_the_name_error() {
        let mut form = valid_form();
        form.name = "x".repeat(31);
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Name),
            Some("Name cannot exceed 30 characters.")
        );
    }

    #[test]
    fn overlong_description_populates_only_the_description_error() {
        let mut form = valid_form();
        form.description = "y".repeat(51);
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description cannot exceed 50 characters.")
        );
    }

    #[test]
    fn past_start_date_is_rejected() {
        let mut form = valid_form();
        form.start_date = "2025-06-14".to_string();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::StartDate),
            Some("Start Date cannot be in the past.")
        );
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let mut form = valid_form();
        form.end_date = "31/07/2025".to_string();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(
            errors.get(FormField::EndDate),
            Some("Invalid date format. Use YYYY-MM-DD.")
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut form = valid_form();
        form.status = "retired".to_string();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Status),
            Some("Invalid status. Allowed: active, inactive, upcoming, expired.")
        );
    }

    #[test]
    fn end_before_start_reports_the_ordering_error() {
        let mut form = valid_form();
        form.start_date = "2025-07-31".to_string();
        form.end_date = "2025-07-01".to_string();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::EndDate),
            Some("End Date cannot be before Start Date.")
        );
    }

    #[test]
    fn ordering_error_overrides_end_date_in_past() {
        let mut form = valid_form();
        form.start_date = "2025-07-01".to_string();
        form.end_date = "2025-06-01".to_string();
        let errors = form.validate(today()).unwrap_err();
        assert_eq!(
            errors.get(FormField::EndDate),
            Some("End Date cannot be before Start Date.")
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = CatalogForm::default().validate(today()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(FormField::Name), Some("Name is required."));
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description is required.")
        );
        assert_eq!(
            errors.get(FormField::StartDate),
            Some("Start Date is required.")
        );
        assert_eq!(errors.get(FormField::EndDate), Some("End Date is required."));
        assert_eq!(errors.get(FormField::Status), Some("Status is required."));
    }

    #[test]
    fn round_trips_an_existing_record() {
        let record = CatalogRecord::new_mock(9, "Spring Sale");
        let form = CatalogForm::from_record(&record);
        let submission = form
            .validate(NaiveDate::from_ymd_opt(2999, 1, 1).unwrap())
            .unwrap();
        assert_eq!(submission.name, record.name);
        assert_eq!(submission.start_date, record.start_date);
        assert_eq!(submission.status, record.status);
    }

    #[test]
    fn backend_details_route_to_the_matching_field() {
        let cases = [
            ("Name cannot exceed 30 characters.", FormField::Name),
            ("Description cannot be empty.", FormField::Description),
            ("Start Date cannot be in the past.", FormField::StartDate),
            (
                "End Date cannot be before Start Date.",
                FormField::EndDate,
            ),
            (
                "Status must be one of: active, inactive, upcoming, expired.",
                FormField::Status,
            ),
        ];
        for (detail, field) in cases {
            let errors = route_backend_detail(detail).unwrap();
            assert_eq!(errors.get(field), Some(detail), "detail: {detail}");
            assert_eq!(errors.len(), 1, "detail: {detail}");
        }
    }

    #[test]
    fn anonymous_date_details_land_on_both_date_fields() {
        let errors = route_backend_detail("Invalid date format. Use YYYY-MM-DD.").unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.get(FormField::StartDate).is_some());
        assert!(errors.get(FormField::EndDate).is_some());
    }

    #[test]
    fn unrecognized_details_are_not_routed() {
        assert_eq!(route_backend_detail("Invalid JSON data in request body."), None);
    }

    proptest! {
        /// The name rule accepts exactly the 1..=30 character range.
        #[test]
        fn name_length_rule(name in "[a-zA-Z ]{0,40}") {
            let mut form = valid_form();
            form.name = name.clone();
            let trimmed = name.trim().chars().count();
            let result = form.validate(today());
            if trimmed == 0 || trimmed > NAME_MAX_CHARS {
                let errors = result.expect_err("name should be rejected");
                prop_assert!(errors.get(FormField::Name).is_some());
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }
}
