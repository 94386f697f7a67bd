use sticker_packer_core::prelude::*;

#[test]
fn stats_for_single_record_on_a4() {
    let settings = Settings::default();
    let stats = layout_stats(&[InputRecord::bare("album-1")], &settings);

    assert_eq!(stats.records, 1);
    assert_eq!(stats.total_pieces, 4);
    assert_eq!(stats.placed, 4);
    assert_eq!(stats.failed, 0);
    assert!(stats.fits_on_page);
    assert_eq!(stats.max_capacity, 4);

    // piece areas are integer-valued, so the used sum is exact:
    // 58*3 + 36*53 + 68*68 + 68*58 = 10650 mm²
    let expected = 10650.0 / settings.printable_area().area() * 100.0;
    assert!(
        (stats.efficiency - expected).abs() < 1e-9,
        "efficiency {} vs {expected}",
        stats.efficiency
    );
    assert!(stats.efficiency > 0.0 && stats.efficiency < 100.0);
}

#[test]
fn efficiency_counts_post_rotation_areas() {
    // Rotation preserves each piece's area, so the used sum must equal the
    // nominal sum regardless of which pieces ended up rotated.
    let settings = Settings::default();
    let records: Vec<_> = (1..=3)
        .map(|i| InputRecord::bare(format!("r{i}")))
        .collect();
    let result = calculate_layout(&records, &settings);
    assert!(result.fits);
    let stats = layout_stats(&records, &settings);
    let expected = 3.0 * 10650.0 / settings.printable_area().area() * 100.0;
    assert!((stats.efficiency - expected).abs() < 1e-6);
}

#[test]
fn degenerate_area_reports_zero_efficiency() {
    let settings = Settings::builder()
        .paper(10.0, 10.0)
        .uniform_margins(6.35)
        .build();
    let stats = layout_stats(&[InputRecord::bare("a")], &settings);
    assert_eq!(stats.efficiency, 0.0);
    assert_eq!(stats.placed, 0);
    assert_eq!(stats.failed, 4);
    assert!(!stats.fits_on_page);
    assert_eq!(stats.max_capacity, 0);
}

#[test]
fn empty_input_reports_zero_usage() {
    let stats = layout_stats::<()>(&[], &Settings::default());
    assert_eq!(stats.records, 0);
    assert_eq!(stats.total_pieces, 0);
    assert_eq!(stats.efficiency, 0.0);
    assert!(stats.fits_on_page);
}

#[test]
fn summary_mentions_the_headline_numbers() {
    let stats = layout_stats(&[InputRecord::bare("a")], &Settings::default());
    let summary = stats.summary();
    assert!(summary.contains("Records: 1"));
    assert!(summary.contains("4/4 placed"));
    assert!(summary.contains("Capacity: 4"));
}

#[test]
fn settings_validation_accepts_defaults_and_rejects_garbage() {
    assert!(Settings::default().validate().is_ok());

    let bad_paper = Settings::builder().paper(0.0, 297.0).build();
    assert!(bad_paper.validate().is_err());

    let bad_spacing = Settings::builder().element_spacing(-1.0).build();
    assert!(bad_spacing.validate().is_err());

    let bad_margin = Settings::builder().uniform_margins(f64::NAN).build();
    assert!(bad_margin.validate().is_err());

    // margins that swallow the page are legal; the layout just fails
    let swallowed = Settings::builder()
        .paper(100.0, 100.0)
        .uniform_margins(60.0)
        .build();
    assert!(swallowed.validate().is_ok());
}
