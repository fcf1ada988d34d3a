use super::*;

use time::macros::date;

use crate::util::validation::{INVALID_EMAIL, INVALID_MOBILE, INVALID_NUMBER, PAST_START_DATE};

const TODAY: Date = date!(2026 - 10 - 17);

fn census() -> UploadedFileRef {
    UploadedFileRef::new("census.xlsx", 2048, "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", 1)
}

fn tob() -> UploadedFileRef {
    UploadedFileRef::new("tob.pdf", 1536, "application/pdf", 2)
}

fn complete_wizard() -> WizardState {
    let mut wizard = WizardState::default();
    let values = [
        (CaseField::ClaimHandler, "MEDNET"),
        (CaseField::ProductLine, "SME"),
        (CaseField::Reference, "Direct"),
        (CaseField::ClientName, "TechCorp Solutions"),
        (CaseField::ClientEmail, "hr@techcorp.ae"),
        (CaseField::ClientLocation, "Dubai"),
        (CaseField::AccountHandlerName, "Omar Saleh"),
        (CaseField::AccountHandlerMobile, "0501234567"),
        (CaseField::PolicyStartDate, "2026-10-17"),
        (CaseField::PremiumFrequency, "Annually"),
        (CaseField::CurrentInsurer, "AXA"),
        (CaseField::QuotationFor, "SME"),
        (CaseField::PolicyHolderType, "Corporate"),
    ];
    for (field, value) in values {
        wizard.set_field(field, value.to_owned());
    }
    wizard.assign_file(FileSlot::Census, census());
    wizard.assign_file(FileSlot::TermsOfBenefit, tob());
    wizard
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn field_rules_dispatch_by_field() {
    assert_eq!(validate_field(CaseField::ClientEmail, "nope", TODAY), Some(INVALID_EMAIL));
    assert_eq!(validate_field(CaseField::AccountHandlerEmail, "a@b", TODAY), Some(INVALID_EMAIL));
    assert_eq!(validate_field(CaseField::AccountHandlerMobile, "0612345678", TODAY), Some(INVALID_MOBILE));
    assert_eq!(validate_field(CaseField::PolicyStartDate, "2026-10-16", TODAY), Some(PAST_START_DATE));
    assert_eq!(validate_field(CaseField::TargetPremium, "12k", TODAY), Some(INVALID_NUMBER));
}

#[test]
fn fields_without_rules_always_pass() {
    assert_eq!(validate_field(CaseField::ClientName, "", TODAY), None);
    assert_eq!(validate_field(CaseField::ClaimHandler, "anything", TODAY), None);
}

#[test]
fn draft_defaults() {
    let draft = CaseDraft::default();
    assert_eq!(draft.get(CaseField::Currency), "AED");
    assert_eq!(draft.get(CaseField::TargetPremium), "0");
    assert_eq!(draft.get(CaseField::ClientName), "");
}

#[test]
fn required_set_excludes_optional_fields() {
    let required: Vec<_> = CaseField::ALL.into_iter().filter(|f| f.is_required()).collect();
    assert_eq!(required.len(), 13);
    assert!(!CaseField::AccountHandlerEmail.is_required());
    assert!(!CaseField::TargetPremium.is_required());
}

// =============================================================
// Editing and blur
// =============================================================

#[test]
fn blur_records_format_error() {
    let mut wizard = WizardState::default();
    wizard.set_field(CaseField::ClientEmail, "broker@".to_owned());
    wizard.blur(CaseField::ClientEmail, TODAY);
    assert_eq!(wizard.error(CaseField::ClientEmail), Some(INVALID_EMAIL));
}

#[test]
fn editing_clears_that_field_error_only() {
    let mut wizard = WizardState::default();
    assert!(!wizard.next(TODAY));
    assert!(wizard.error(CaseField::ClientName).is_some());
    assert!(wizard.error(CaseField::ClientEmail).is_some());

    wizard.set_field(CaseField::ClientName, "A".to_owned());
    assert_eq!(wizard.error(CaseField::ClientName), None);
    assert!(wizard.error(CaseField::ClientEmail).is_some());
}

#[test]
fn blur_on_empty_value_adds_nothing() {
    let mut wizard = WizardState::default();
    wizard.blur(CaseField::AccountHandlerMobile, TODAY);
    assert!(wizard.errors.is_empty());
}

// =============================================================
// Advancement
// =============================================================

#[test]
fn complete_step_one_advances_to_two() {
    let mut wizard = complete_wizard();
    assert!(wizard.next(TODAY));
    assert_eq!(wizard.step, WizardStep::PreviewCensus);
    assert_eq!(wizard.step.number(), 2);
    assert!(wizard.errors.is_empty());
}

#[test]
fn missing_required_field_blocks() {
    let mut wizard = complete_wizard();
    wizard.set_field(CaseField::PolicyHolderType, String::new());
    assert!(!wizard.next(TODAY));
    assert_eq!(wizard.step, WizardStep::ClientPlan);
    assert_eq!(wizard.error(CaseField::PolicyHolderType), Some(REQUIRED));
}

#[test]
fn whitespace_only_required_field_counts_as_present() {
    let mut wizard = complete_wizard();
    wizard.set_field(CaseField::ClientName, "   ".to_owned());
    assert!(wizard.next(TODAY));
    assert_eq!(wizard.error(CaseField::ClientName), None);
}

#[test]
fn invalid_required_field_blocks() {
    let mut wizard = complete_wizard();
    wizard.set_field(CaseField::AccountHandlerMobile, "501234567".to_owned());
    assert!(!wizard.next(TODAY));
    assert_eq!(wizard.error(CaseField::AccountHandlerMobile), Some(INVALID_MOBILE));
}

#[test]
fn invalid_optional_field_blocks() {
    let mut wizard = complete_wizard();
    wizard.set_field(CaseField::AccountHandlerEmail, "not-an-email".to_owned());
    assert!(!wizard.next(TODAY));
    assert_eq!(wizard.error(CaseField::AccountHandlerEmail), Some(INVALID_EMAIL));

    wizard.set_field(CaseField::AccountHandlerEmail, String::new());
    wizard.set_field(CaseField::TargetPremium, "lots".to_owned());
    assert!(!wizard.next(TODAY));
    assert_eq!(wizard.error(CaseField::TargetPremium), Some(INVALID_NUMBER));
}

#[test]
fn past_start_date_blocks() {
    let mut wizard = complete_wizard();
    wizard.set_field(CaseField::PolicyStartDate, "2026-10-16".to_owned());
    assert!(!wizard.next(TODAY));
    assert_eq!(wizard.error(CaseField::PolicyStartDate), Some(PAST_START_DATE));
}

#[test]
fn each_mandatory_file_blocks() {
    for slot in [FileSlot::Census, FileSlot::TermsOfBenefit] {
        let mut wizard = complete_wizard();
        wizard.remove_file(slot);
        assert!(!wizard.next(TODAY));
        assert_eq!(wizard.missing_files, vec![slot]);
        assert!(wizard.errors.is_empty());
    }
}

#[test]
fn claims_report_is_optional() {
    let mut wizard = complete_wizard();
    assert!(wizard.file(FileSlot::ClaimsReport).is_none());
    assert!(wizard.next(TODAY));
}

#[test]
fn later_steps_pass_and_saturate() {
    let mut wizard = complete_wizard();
    assert!(wizard.next(TODAY));
    assert!(wizard.next(TODAY));
    assert!(wizard.next(TODAY));
    assert_eq!(wizard.step, WizardStep::AssignVariations);
    assert!(wizard.next(TODAY));
    assert_eq!(wizard.step, WizardStep::AssignVariations);
}

#[test]
fn later_steps_ignore_step_one_state() {
    let mut wizard = WizardState { step: WizardStep::PreviewCensus, ..WizardState::default() };
    assert!(wizard.next(TODAY));
    assert_eq!(wizard.step, WizardStep::AssignPlan);
}

#[test]
fn previous_saturates_at_first() {
    let mut wizard = WizardState { step: WizardStep::AssignPlan, ..WizardState::default() };
    wizard.previous();
    assert_eq!(wizard.step, WizardStep::PreviewCensus);
    wizard.previous();
    wizard.previous();
    assert_eq!(wizard.step, WizardStep::ClientPlan);
}

#[test]
fn step_titles() {
    let titles: Vec<_> = WizardStep::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["Client & Plan Information", "Preview Census", "Assign Plan", "Assign Variations"]);
}

// =============================================================
// File slots
// =============================================================

#[test]
fn assign_replaces_previous_file() {
    let mut wizard = WizardState::default();
    wizard.assign_file(FileSlot::Census, census());
    wizard.assign_file(FileSlot::Census, UploadedFileRef::new("v2.xlsx", 10, "", 99));
    let file = wizard.file(FileSlot::Census).unwrap();
    assert_eq!(file.name, "v2.xlsx");
    assert_eq!(file.id, "99");
}

#[test]
fn remove_clears_only_that_slot() {
    let mut wizard = complete_wizard();
    wizard.remove_file(FileSlot::Census);
    assert!(wizard.file(FileSlot::Census).is_none());
    assert_eq!(wizard.file(FileSlot::TermsOfBenefit), Some(&tob()));
}

#[test]
fn remove_bumps_picker_so_same_name_can_be_reselected() {
    let mut wizard = complete_wizard();
    let before = wizard.picker_generation(FileSlot::Census);
    wizard.remove_file(FileSlot::Census);
    assert_ne!(wizard.picker_generation(FileSlot::Census), before);
    assert_eq!(wizard.picker_generation(FileSlot::TermsOfBenefit), 0);

    wizard.assign_file(FileSlot::Census, census());
    assert_eq!(wizard.file(FileSlot::Census).map(|f| f.name.as_str()), Some("census.xlsx"));
}

#[test]
fn remove_all_clears_every_slot() {
    let mut wizard = complete_wizard();
    wizard.assign_file(FileSlot::ClaimsReport, UploadedFileRef::new("claims.pdf", 5, "application/pdf", 3));
    wizard.remove_all_files();
    assert!(!wizard.has_any_file());
    for slot in FileSlot::ALL {
        assert_eq!(wizard.picker_generation(slot), 1);
    }
}

#[test]
fn assigning_a_missing_slot_clears_its_marker() {
    let mut wizard = WizardState::default();
    assert!(!wizard.next(TODAY));
    assert_eq!(wizard.missing_files, vec![FileSlot::Census, FileSlot::TermsOfBenefit]);
    wizard.assign_file(FileSlot::Census, census());
    assert_eq!(wizard.missing_files, vec![FileSlot::TermsOfBenefit]);
}

#[test]
fn accepted_types() {
    assert_eq!(FileSlot::Census.accept(), ".xlsx");
    assert_eq!(FileSlot::TermsOfBenefit.accept(), ".pdf,.xlsx");
    assert_eq!(FileSlot::ClaimsReport.accept(), ".pdf,.xlsx");
}
