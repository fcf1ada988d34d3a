//! Broker registration request form.
//!
//! Errors are computed on every change and shown only for fields the user
//! has touched, plus all of them after a submit attempt.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::util::validation::{INVALID_EMAIL, is_valid_email};

pub const TITLE_OPTIONS: &[&str] = &["Mr.", "Mrs.", "Ms."];
pub const COUNTRY_CODE_OPTIONS: &[&str] = &["+971", "+966", "+965", "+973", "+974"];
pub const DEFAULT_COUNTRY_CODE: &str = "+971";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    Title,
    FirstName,
    MiddleName,
    LastName,
    Email,
    CountryCode,
    MobileNumber,
    CompanyName,
    Department,
    Position,
    InsuranceAuthNumber,
}

impl RegistrationField {
    pub const ALL: [Self; 11] = [
        Self::Title,
        Self::FirstName,
        Self::MiddleName,
        Self::LastName,
        Self::Email,
        Self::CountryCode,
        Self::MobileNumber,
        Self::CompanyName,
        Self::Department,
        Self::Position,
        Self::InsuranceAuthNumber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title *",
            Self::FirstName => "First Name *",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name *",
            Self::Email => "Email Address *",
            Self::CountryCode => "Country Code *",
            Self::MobileNumber => "Mobile Number *",
            Self::CompanyName => "Company Name *",
            Self::Department => "Department *",
            Self::Position => "Position *",
            Self::InsuranceAuthNumber => "Insurance Authorization Registration Number *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Select title",
            Self::FirstName => "First name",
            Self::MiddleName => "Middle name",
            Self::LastName => "Last name",
            Self::Email => "Enter your email",
            Self::CountryCode => "Code",
            Self::MobileNumber => "Mobile number",
            Self::CompanyName => "Company name",
            Self::Department => "Department",
            Self::Position => "Your position",
            Self::InsuranceAuthNumber => "Enter your authorization number",
        }
    }

    /// Message for an empty value; `None` for optional fields.
    fn missing_message(self) -> Option<&'static str> {
        match self {
            Self::Title => Some("Title is required"),
            Self::FirstName => Some("First name is required"),
            Self::MiddleName => None,
            Self::LastName => Some("Last name is required"),
            Self::Email => Some(INVALID_EMAIL),
            Self::CountryCode => Some("Country code is required"),
            Self::MobileNumber => Some("Mobile number is required"),
            Self::CompanyName => Some("Company name is required"),
            Self::Department => Some("Department is required"),
            Self::Position => Some("Position is required"),
            Self::InsuranceAuthNumber => Some("Insurance authorization number is required"),
        }
    }

    /// Error for `value` in this field, if any.
    pub fn check(self, value: &str) -> Option<&'static str> {
        if value.trim().is_empty() {
            return self.missing_message();
        }
        (self == Self::Email && !is_valid_email(value)).then_some(INVALID_EMAIL)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub title: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub country_code: String,
    pub mobile_number: String,
    pub company_name: String,
    pub department: String,
    pub position: String,
    pub insurance_auth_number: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            mobile_number: String::new(),
            company_name: String::new(),
            department: String::new(),
            position: String::new(),
            insurance_auth_number: String::new(),
        }
    }
}

impl RegistrationForm {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Title => &self.title,
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::MiddleName => &self.middle_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Email => &self.email,
            RegistrationField::CountryCode => &self.country_code,
            RegistrationField::MobileNumber => &self.mobile_number,
            RegistrationField::CompanyName => &self.company_name,
            RegistrationField::Department => &self.department,
            RegistrationField::Position => &self.position,
            RegistrationField::InsuranceAuthNumber => &self.insurance_auth_number,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Title => &mut self.title,
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::MiddleName => &mut self.middle_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::CountryCode => &mut self.country_code,
            RegistrationField::MobileNumber => &mut self.mobile_number,
            RegistrationField::CompanyName => &mut self.company_name,
            RegistrationField::Department => &mut self.department,
            RegistrationField::Position => &mut self.position,
            RegistrationField::InsuranceAuthNumber => &mut self.insurance_auth_number,
        };
        *slot = value;
    }

    /// Every failing field with its message.
    pub fn validate(&self) -> BTreeMap<RegistrationField, &'static str> {
        RegistrationField::ALL
            .into_iter()
            .filter_map(|field| field.check(self.get(field)).map(|message| (field, message)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Form plus which fields have shown their errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    pub phase: SubmissionPhase,
    touched: BTreeSet<RegistrationField>,
    attempted: bool,
}

impl RegistrationState {
    pub fn edit(&mut self, field: RegistrationField, value: String) {
        self.form.set(field, value);
        self.touched.insert(field);
    }

    /// Error to render under `field`.
    pub fn visible_error(&self, field: RegistrationField) -> Option<&'static str> {
        if self.attempted || self.touched.contains(&field) {
            field.check(self.form.get(field))
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Editing && self.form.is_valid()
    }

    /// Start submitting. Returns `false` and reveals every error when the
    /// form is invalid.
    pub fn begin_submit(&mut self) -> bool {
        self.attempted = true;
        if !self.can_submit() {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        true
    }

    pub fn finish_submit(&mut self) {
        self.phase = SubmissionPhase::Submitted;
    }
}
