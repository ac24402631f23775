use crate::tests::Harness;
use crate::{date, Error, HitRegion, InputView, PickerOptions, RenderMode, Status, YearMonth};

fn native(options: PickerOptions) -> Harness {
    Harness::new(options.with_testing(true), date!("2024-03-12"))
}

#[test]
fn mode_selection() {
    assert_eq!(RenderMode::select(false, false), RenderMode::Desktop);
    assert_eq!(RenderMode::select(true, false), RenderMode::NativeFallback);
    assert_eq!(RenderMode::select(false, true), RenderMode::NativeFallback);
    assert_eq!(RenderMode::select(true, true), RenderMode::NativeFallback);
}

#[test]
fn accepts_canonical_date() {
    let mut harness = native(PickerOptions::default());
    assert_eq!(harness.picker.native_input("2024-07-14"), Ok(date!("2024-07-14")));
    assert_eq!(harness.changes(), [date!("2024-07-14")]);
    assert_eq!(harness.picker.focus_month(), YearMonth::new(2024, 6).unwrap());
}

#[test]
fn rejects_malformed() {
    let mut harness = native(PickerOptions::default());

    for raw in ["", "2024-02-30", "2024-13-01", "14/07/2024", "2024-7-14"] {
        let result = harness.picker.native_input(raw);
        assert!(matches!(result, Err(Error::InvalidDate(_))), "{raw}: {result:?}");
    }

    assert!(harness.changes().is_empty());
}

#[test]
fn rejects_out_of_bounds() {
    let mut harness = native(
        PickerOptions::default()
            .with_min(date!("2024-01-01"))
            .with_max(date!("2024-12-31")),
    );

    assert!(matches!(
        harness.picker.native_input("2025-01-01"),
        Err(Error::OutOfBounds { .. })
    ));

    assert_eq!(harness.picker.native_input("2024-12-31"), Ok(date!("2024-12-31")));
    assert_eq!(harness.changes(), [date!("2024-12-31")]);
}

#[test]
fn desktop_has_no_native_input() {
    let mut harness = Harness::new(PickerOptions::default(), date!("2024-03-12"));
    assert_eq!(harness.picker.native_input("2024-07-14"), Err(Error::NotNativeInput));
    assert!(harness.changes().is_empty());
}

#[test]
fn never_opens_popover() {
    let mut harness = native(PickerOptions::default().with_mobile(true));
    assert_eq!(harness.picker.focus_input(), None);
    assert_eq!(harness.picker.pointer_down(HitRegion::Trigger), Status::Closed);
    assert_eq!(harness.listeners.installed_count(), 0);

    let view = harness.picker.render(|_| ());
    assert_eq!(view.mode, RenderMode::NativeFallback);
    assert!(!view.open);
}

#[test]
fn native_attributes() {
    let mut harness = native(
        PickerOptions::default()
            .with_id("birthday")
            .with_max(date!("2024-12-31")),
    );

    harness.picker.set_value(Some(date!("2024-02-09")));

    assert_eq!(
        harness.picker.render(|_| ()).input,
        InputView::Native {
            id: Some("birthday".to_string()),
            value: "2024-02-09".to_string(),
            min: None,
            max: Some("2024-12-31".to_string()),
            placeholder: None,
        },
    );
}
