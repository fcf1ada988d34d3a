use super::*;

#[test]
fn reached_steps_are_highlighted() {
    assert_eq!(
        step_marker_class(WizardStep::ClientPlan, WizardStep::AssignPlan),
        "stepper__marker stepper__marker--reached"
    );
    assert_eq!(
        step_marker_class(WizardStep::AssignPlan, WizardStep::AssignPlan),
        "stepper__marker stepper__marker--reached"
    );
}

#[test]
fn future_steps_are_plain() {
    assert_eq!(step_marker_class(WizardStep::AssignVariations, WizardStep::ClientPlan), "stepper__marker");
}

#[test]
fn side_slots_exclude_census() {
    assert!(!SIDE_SLOTS.contains(&FileSlot::Census));
    assert_eq!(SIDE_SLOTS.len() + 1, FileSlot::ALL.len());
}
