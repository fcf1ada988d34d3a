use super::*;

fn filled() -> RegistrationForm {
    RegistrationForm {
        title: "Ms.".to_owned(),
        first_name: "Layla".to_owned(),
        last_name: "Haddad".to_owned(),
        email: "layla@brokers.ae".to_owned(),
        mobile_number: "501234567".to_owned(),
        company_name: "Gulf Brokers".to_owned(),
        department: "Sales".to_owned(),
        position: "Broker".to_owned(),
        insurance_auth_number: "IA-2291".to_owned(),
        ..RegistrationForm::default()
    }
}

#[test]
fn default_country_code_is_uae() {
    assert_eq!(RegistrationForm::default().country_code, "+971");
}

#[test]
fn empty_form_reports_each_required_message() {
    let errors = RegistrationForm::default().validate();
    assert_eq!(errors.get(&RegistrationField::Title), Some(&"Title is required"));
    assert_eq!(errors.get(&RegistrationField::FirstName), Some(&"First name is required"));
    assert_eq!(errors.get(&RegistrationField::LastName), Some(&"Last name is required"));
    assert_eq!(errors.get(&RegistrationField::Email), Some(&"Please enter a valid email address"));
    assert_eq!(errors.get(&RegistrationField::MobileNumber), Some(&"Mobile number is required"));
    assert_eq!(errors.get(&RegistrationField::CompanyName), Some(&"Company name is required"));
    assert_eq!(errors.get(&RegistrationField::Department), Some(&"Department is required"));
    assert_eq!(errors.get(&RegistrationField::Position), Some(&"Position is required"));
    assert_eq!(
        errors.get(&RegistrationField::InsuranceAuthNumber),
        Some(&"Insurance authorization number is required")
    );
    assert!(!errors.contains_key(&RegistrationField::MiddleName));
    assert!(!errors.contains_key(&RegistrationField::CountryCode));
}

#[test]
fn cleared_country_code_is_required() {
    let mut form = filled();
    form.country_code.clear();
    assert_eq!(form.validate().get(&RegistrationField::CountryCode), Some(&"Country code is required"));
}

#[test]
fn middle_name_is_optional() {
    let form = filled();
    assert!(form.middle_name.is_empty());
    assert!(form.is_valid());
}

#[test]
fn malformed_email_is_rejected() {
    let mut form = filled();
    form.email = "layla.brokers.ae".to_owned();
    assert_eq!(form.validate().len(), 1);
    assert_eq!(RegistrationField::Email.check(&form.email), Some(INVALID_EMAIL));
}

#[test]
fn errors_hidden_until_touched() {
    let mut state = RegistrationState::default();
    assert_eq!(state.visible_error(RegistrationField::FirstName), None);

    state.edit(RegistrationField::FirstName, String::new());
    assert_eq!(state.visible_error(RegistrationField::FirstName), Some("First name is required"));
    assert_eq!(state.visible_error(RegistrationField::LastName), None);
}

#[test]
fn failed_submit_reveals_all_errors() {
    let mut state = RegistrationState::default();
    assert!(!state.begin_submit());
    assert_eq!(state.phase, SubmissionPhase::Editing);
    assert_eq!(state.visible_error(RegistrationField::Position), Some("Position is required"));
}

#[test]
fn valid_submit_moves_through_phases() {
    let mut state = RegistrationState { form: filled(), ..RegistrationState::default() };
    assert!(state.can_submit());
    assert!(state.begin_submit());
    assert_eq!(state.phase, SubmissionPhase::Submitting);
    assert!(!state.can_submit());
    state.finish_submit();
    assert_eq!(state.phase, SubmissionPhase::Submitted);
}
