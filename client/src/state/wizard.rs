//! Case-creation wizard state: draft fields, per-field errors, the three
//! document slots, and step advancement.
//!
//! DESIGN
//! ======
//! Each step owns a [`StepContract`] that decides whether the wizard may
//! move forward. Step 1 checks the client/plan form and the mandatory
//! documents; steps 2-4 have no content yet and their contracts pass
//! unconditionally. New per-step data plugs in by giving the step a real
//! contract.
//!
//! File inputs cannot be cleared from state alone, so every slot carries a
//! picker generation. Removing a file bumps it and the view resets the
//! `<input type="file">` when the generation changes, which lets the same
//! filename be picked again.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::util::validation::{REQUIRED, check_email, check_not_before, check_numeric, check_uae_mobile};

// =============================================================
// Fields
// =============================================================

pub const CLAIM_HANDLING_OPTIONS: &[&str] = &["MEDNET", "NextCare", "Other"];
pub const PRODUCT_LINE_OPTIONS: &[&str] = &["MAXMED", "Individual", "SME", "Group"];
pub const REFERENCE_OPTIONS: &[&str] = &["Direct", "Agency", "Referral", "Other"];
pub const LOCATION_OPTIONS: &[&str] =
    &["Dubai", "Abu Dhabi", "Sharjah", "Ajman", "Umm Al Quwain", "Ras Al Khaimah", "Fujairah", "UAE-wide"];
pub const PREMIUM_FREQUENCY_OPTIONS: &[&str] = &["Annually", "Semi-Annually", "Quarterly", "Monthly"];
pub const CURRENT_INSURER_OPTIONS: &[&str] = &["DIC", "Oman Insurance", "AXA", "MetLife", "Other"];
pub const QUOTATION_FOR_OPTIONS: &[&str] = &["Individual", "SME", "Group", "Renewal"];
pub const POLICY_HOLDER_TYPE_OPTIONS: &[&str] = &["Individual", "Corporate", "Micro Group", "SME"];

pub const DEFAULT_CURRENCY: &str = "AED";

/// How a field is edited on the step-1 form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Select(&'static [&'static str]),
    Text,
    Email,
    Tel,
    Date,
    Number,
    ReadOnly,
}

/// Addressable field of the case draft, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CaseField {
    ClaimHandler,
    ProductLine,
    Reference,
    ClientName,
    ClientEmail,
    ClientLocation,
    AccountHandlerName,
    AccountHandlerEmail,
    AccountHandlerMobile,
    PolicyStartDate,
    PremiumFrequency,
    CurrentInsurer,
    Currency,
    QuotationFor,
    PolicyHolderType,
    TargetPremium,
}

impl CaseField {
    pub const ALL: [Self; 16] = [
        Self::ClaimHandler,
        Self::ProductLine,
        Self::Reference,
        Self::ClientName,
        Self::ClientEmail,
        Self::ClientLocation,
        Self::AccountHandlerName,
        Self::AccountHandlerEmail,
        Self::AccountHandlerMobile,
        Self::PolicyStartDate,
        Self::PremiumFrequency,
        Self::CurrentInsurer,
        Self::Currency,
        Self::QuotationFor,
        Self::PolicyHolderType,
        Self::TargetPremium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ClaimHandler => "Claim Handling By",
            Self::ProductLine => "Product Line",
            Self::Reference => "Reference",
            Self::ClientName => "Client Name",
            Self::ClientEmail => "Client Email",
            Self::ClientLocation => "Client Location",
            Self::AccountHandlerName => "Account Handling Person Name",
            Self::AccountHandlerEmail => "Account Handling Person Email",
            Self::AccountHandlerMobile => "Account Handling Person Mobile",
            Self::PolicyStartDate => "Policy Start Date",
            Self::PremiumFrequency => "Premium Frequency",
            Self::CurrentInsurer => "Current Insurer",
            Self::Currency => "Currency",
            Self::QuotationFor => "Quotation For",
            Self::PolicyHolderType => "Policy Holder Type",
            Self::TargetPremium => "Target Premium",
        }
    }

    /// DOM id / name attribute.
    pub fn key(self) -> &'static str {
        match self {
            Self::ClaimHandler => "claim-handling-by",
            Self::ProductLine => "product-line",
            Self::Reference => "reference",
            Self::ClientName => "client-name",
            Self::ClientEmail => "client-email",
            Self::ClientLocation => "client-location",
            Self::AccountHandlerName => "account-handler-name",
            Self::AccountHandlerEmail => "account-handler-email",
            Self::AccountHandlerMobile => "account-handler-mobile",
            Self::PolicyStartDate => "policy-start-date",
            Self::PremiumFrequency => "premium-frequency",
            Self::CurrentInsurer => "current-insurer",
            Self::Currency => "currency",
            Self::QuotationFor => "quotation-for",
            Self::PolicyHolderType => "policy-holder-type",
            Self::TargetPremium => "target-premium",
        }
    }

    pub fn input(self) -> FieldInput {
        match self {
            Self::ClaimHandler => FieldInput::Select(CLAIM_HANDLING_OPTIONS),
            Self::ProductLine => FieldInput::Select(PRODUCT_LINE_OPTIONS),
            Self::Reference => FieldInput::Select(REFERENCE_OPTIONS),
            Self::ClientLocation => FieldInput::Select(LOCATION_OPTIONS),
            Self::PremiumFrequency => FieldInput::Select(PREMIUM_FREQUENCY_OPTIONS),
            Self::CurrentInsurer => FieldInput::Select(CURRENT_INSURER_OPTIONS),
            Self::QuotationFor => FieldInput::Select(QUOTATION_FOR_OPTIONS),
            Self::PolicyHolderType => FieldInput::Select(POLICY_HOLDER_TYPE_OPTIONS),
            Self::ClientName | Self::AccountHandlerName => FieldInput::Text,
            Self::ClientEmail | Self::AccountHandlerEmail => FieldInput::Email,
            Self::AccountHandlerMobile => FieldInput::Tel,
            Self::PolicyStartDate => FieldInput::Date,
            Self::TargetPremium => FieldInput::Number,
            Self::Currency => FieldInput::ReadOnly,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::ClaimHandler => "Select claim handling",
            Self::ProductLine => "Select product line",
            Self::Reference => "Select reference",
            Self::ClientName => "Enter client name",
            Self::ClientEmail => "Enter client email",
            Self::ClientLocation => "Select location",
            Self::AccountHandlerName => "Enter person name",
            Self::AccountHandlerEmail => "Enter email address",
            Self::AccountHandlerMobile => "05XXXXXXXX",
            Self::PremiumFrequency => "Select frequency",
            Self::CurrentInsurer => "Select insurer",
            Self::QuotationFor => "Select quotation type",
            Self::PolicyHolderType => "Select holder type",
            Self::TargetPremium => "0",
            Self::PolicyStartDate | Self::Currency => "",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::AccountHandlerEmail | Self::Currency | Self::TargetPremium)
    }
}

/// Format rule for a single field. Empty input and fields without a rule pass.
pub fn validate_field(field: CaseField, value: &str, today: Date) -> Option<&'static str> {
    match field {
        CaseField::ClientEmail | CaseField::AccountHandlerEmail => check_email(value),
        CaseField::AccountHandlerMobile => check_uae_mobile(value),
        CaseField::PolicyStartDate => check_not_before(value, today),
        CaseField::TargetPremium => check_numeric(value),
        _ => None,
    }
}

/// Client and plan information entered on step 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub claim_handler: String,
    pub product_line: String,
    pub reference: String,
    pub client_name: String,
    pub client_email: String,
    pub client_location: String,
    pub account_handler_name: String,
    pub account_handler_email: String,
    pub account_handler_mobile: String,
    pub policy_start_date: String,
    pub premium_frequency: String,
    pub current_insurer: String,
    pub currency: String,
    pub quotation_for: String,
    pub policy_holder_type: String,
    pub target_premium: String,
}

impl Default for CaseDraft {
    fn default() -> Self {
        Self {
            claim_handler: String::new(),
            product_line: String::new(),
            reference: String::new(),
            client_name: String::new(),
            client_email: String::new(),
            client_location: String::new(),
            account_handler_name: String::new(),
            account_handler_email: String::new(),
            account_handler_mobile: String::new(),
            policy_start_date: String::new(),
            premium_frequency: String::new(),
            current_insurer: String::new(),
            currency: DEFAULT_CURRENCY.to_owned(),
            quotation_for: String::new(),
            policy_holder_type: String::new(),
            target_premium: "0".to_owned(),
        }
    }
}

impl CaseDraft {
    pub fn get(&self, field: CaseField) -> &str {
        self.slot(field)
    }

    pub fn set(&mut self, field: CaseField, value: String) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: CaseField) -> &String {
        match field {
            CaseField::ClaimHandler => &self.claim_handler,
            CaseField::ProductLine => &self.product_line,
            CaseField::Reference => &self.reference,
            CaseField::ClientName => &self.client_name,
            CaseField::ClientEmail => &self.client_email,
            CaseField::ClientLocation => &self.client_location,
            CaseField::AccountHandlerName => &self.account_handler_name,
            CaseField::AccountHandlerEmail => &self.account_handler_email,
            CaseField::AccountHandlerMobile => &self.account_handler_mobile,
            CaseField::PolicyStartDate => &self.policy_start_date,
            CaseField::PremiumFrequency => &self.premium_frequency,
            CaseField::CurrentInsurer => &self.current_insurer,
            CaseField::Currency => &self.currency,
            CaseField::QuotationFor => &self.quotation_for,
            CaseField::PolicyHolderType => &self.policy_holder_type,
            CaseField::TargetPremium => &self.target_premium,
        }
    }

    fn slot_mut(&mut self, field: CaseField) -> &mut String {
        match field {
            CaseField::ClaimHandler => &mut self.claim_handler,
            CaseField::ProductLine => &mut self.product_line,
            CaseField::Reference => &mut self.reference,
            CaseField::ClientName => &mut self.client_name,
            CaseField::ClientEmail => &mut self.client_email,
            CaseField::ClientLocation => &mut self.client_location,
            CaseField::AccountHandlerName => &mut self.account_handler_name,
            CaseField::AccountHandlerEmail => &mut self.account_handler_email,
            CaseField::AccountHandlerMobile => &mut self.account_handler_mobile,
            CaseField::PolicyStartDate => &mut self.policy_start_date,
            CaseField::PremiumFrequency => &mut self.premium_frequency,
            CaseField::CurrentInsurer => &mut self.current_insurer,
            CaseField::Currency => &mut self.currency,
            CaseField::QuotationFor => &mut self.quotation_for,
            CaseField::PolicyHolderType => &mut self.policy_holder_type,
            CaseField::TargetPremium => &mut self.target_premium,
        }
    }
}

// =============================================================
// Documents
// =============================================================

/// The three document upload targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FileSlot {
    Census,
    TermsOfBenefit,
    ClaimsReport,
}

impl FileSlot {
    pub const ALL: [Self; 3] = [Self::Census, Self::TermsOfBenefit, Self::ClaimsReport];

    fn index(self) -> usize {
        match self {
            Self::Census => 0,
            Self::TermsOfBenefit => 1,
            Self::ClaimsReport => 2,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Census => "census",
            Self::TermsOfBenefit => "tob",
            Self::ClaimsReport => "claims-report",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Census => "Drop or Select Census File",
            Self::TermsOfBenefit => "Upload Current TOB",
            Self::ClaimsReport => "Upload Claims Report",
        }
    }

    pub fn drop_hint(self) -> &'static str {
        match self {
            Self::Census => "Drop your census file here, or",
            Self::TermsOfBenefit => "Drop TOB file here, or",
            Self::ClaimsReport => "Drop claims report here, or",
        }
    }

    /// Value for the input's `accept` attribute.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Census => ".xlsx",
            Self::TermsOfBenefit | Self::ClaimsReport => ".pdf,.xlsx",
        }
    }

    /// Census and ToB must be present before leaving step 1.
    pub fn is_mandatory(self) -> bool {
        matches!(self, Self::Census | Self::TermsOfBenefit)
    }
}

/// Metadata of a picked file. The bytes are never read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFileRef {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl UploadedFileRef {
    /// `picked_at_ms` becomes the id.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>, picked_at_ms: u64) -> Self {
        Self { id: picked_at_ms.to_string(), name: name.into(), size, mime: mime.into() }
    }
}

// =============================================================
// Steps
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    ClientPlan,
    PreviewCensus,
    AssignPlan,
    AssignVariations,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [Self::ClientPlan, Self::PreviewCensus, Self::AssignPlan, Self::AssignVariations];

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            Self::ClientPlan => 1,
            Self::PreviewCensus => 2,
            Self::AssignPlan => 3,
            Self::AssignVariations => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ClientPlan => "Client & Plan Information",
            Self::PreviewCensus => "Preview Census",
            Self::AssignPlan => "Assign Plan",
            Self::AssignVariations => "Assign Variations",
        }
    }

    /// Following step, saturating at the last.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::ClientPlan => Self::PreviewCensus,
            Self::PreviewCensus => Self::AssignPlan,
            Self::AssignPlan | Self::AssignVariations => Self::AssignVariations,
        }
    }

    /// Preceding step, saturating at the first.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::ClientPlan | Self::PreviewCensus => Self::ClientPlan,
            Self::AssignPlan => Self::PreviewCensus,
            Self::AssignVariations => Self::AssignPlan,
        }
    }

    pub fn is_first(self) -> bool {
        self == Self::ClientPlan
    }

    pub fn is_last(self) -> bool {
        self == Self::AssignVariations
    }

    /// Gate for leaving this step forward.
    pub fn contract(self) -> &'static dyn StepContract {
        match self {
            Self::ClientPlan => &ClientPlanContract,
            Self::PreviewCensus | Self::AssignPlan | Self::AssignVariations => &OpenStep,
        }
    }
}

/// Outcome of checking a step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub field_errors: BTreeMap<CaseField, &'static str>,
    pub missing_files: Vec<FileSlot>,
}

impl StepReport {
    pub fn passed(&self) -> bool {
        self.field_errors.is_empty() && self.missing_files.is_empty()
    }
}

/// Validation a step must pass before the wizard advances.
pub trait StepContract: Send + Sync {
    fn check(&self, wizard: &WizardState, today: Date) -> StepReport;
}

/// Step 1: required fields, field formats, mandatory documents.
pub struct ClientPlanContract;

impl StepContract for ClientPlanContract {
    fn check(&self, wizard: &WizardState, today: Date) -> StepReport {
        let mut report = StepReport::default();
        for field in CaseField::ALL {
            let value = wizard.draft.get(field);
            if field.is_required() && value.is_empty() {
                report.field_errors.insert(field, REQUIRED);
            } else if let Some(message) = validate_field(field, value, today) {
                report.field_errors.insert(field, message);
            }
        }
        report.missing_files =
            FileSlot::ALL.into_iter().filter(|slot| slot.is_mandatory() && wizard.file(*slot).is_none()).collect();
        report
    }
}

/// Steps without content yet.
pub struct OpenStep;

impl StepContract for OpenStep {
    fn check(&self, _wizard: &WizardState, _today: Date) -> StepReport {
        StepReport::default()
    }
}

// =============================================================
// Wizard
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: CaseDraft,
    pub errors: BTreeMap<CaseField, &'static str>,
    pub missing_files: Vec<FileSlot>,
    files: [Option<UploadedFileRef>; 3],
    picker_generations: [u32; 3],
}

impl WizardState {
    /// Store a new value and drop any error shown for the field.
    pub fn set_field(&mut self, field: CaseField, value: String) {
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Run the field's format rule after it loses focus.
    pub fn blur(&mut self, field: CaseField, today: Date) {
        if let Some(message) = validate_field(field, self.draft.get(field), today) {
            self.errors.insert(field, message);
        }
    }

    pub fn error(&self, field: CaseField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn file(&self, slot: FileSlot) -> Option<&UploadedFileRef> {
        self.files[slot.index()].as_ref()
    }

    pub fn has_any_file(&self) -> bool {
        self.files.iter().any(Option::is_some)
    }

    pub fn picker_generation(&self, slot: FileSlot) -> u32 {
        self.picker_generations[slot.index()]
    }

    /// Replace whatever the slot held.
    pub fn assign_file(&mut self, slot: FileSlot, file: UploadedFileRef) {
        self.files[slot.index()] = Some(file);
        self.missing_files.retain(|s| *s != slot);
    }

    /// Clear one slot and reset its picker.
    pub fn remove_file(&mut self, slot: FileSlot) {
        let i = slot.index();
        self.files[i] = None;
        self.picker_generations[i] = self.picker_generations[i].wrapping_add(1);
    }

    pub fn remove_all_files(&mut self) {
        for slot in FileSlot::ALL {
            self.remove_file(slot);
        }
    }

    /// Check the current step, replacing the shown errors with the result.
    pub fn validate_step(&mut self, today: Date) -> bool {
        let report = self.step.contract().check(self, today);
        let passed = report.passed();
        self.errors = report.field_errors;
        self.missing_files = report.missing_files;
        passed
    }

    /// Advance when the current step's contract passes.
    pub fn next(&mut self, today: Date) -> bool {
        if !self.validate_step(today) {
            return false;
        }
        self.step = self.step.next();
        true
    }

    pub fn previous(&mut self) {
        self.step = self.step.previous();
    }
}
