use mahina::catalog::*;
use mahina::types::*;
use mahina::CatalogError;

// ── Phase table ──

#[test]
fn test_table_is_complete() {
    assert_eq!(validate(), Ok(()));
    assert_eq!(PHASES.len(), PHASE_COUNT as usize);
    for (i, record) in PHASES.iter().enumerate() {
        assert_eq!(record.day, i as u32 + 1);
        assert!(!record.planting.is_empty(), "day {}", record.day);
        assert!(!record.fishing.is_empty(), "day {}", record.day);
    }
}

#[test]
fn test_significant_phase_names() {
    assert_eq!(phase_record(NEW_MOON_DAY).map(|r| r.name), Some("Hilo"));
    assert_eq!(phase_record(FULL_MOON_DAY).map(|r| r.name), Some("Akua"));
    assert_eq!(phase_record(DARK_MOON_DAY).map(|r| r.name), Some("Muku"));
}

#[test]
fn test_phase_record_out_of_range() {
    assert!(phase_record(0).is_none());
    assert!(phase_record(31).is_none());
}

#[test]
fn test_validate_table_rejects_short_table() {
    assert_eq!(validate_table(&PHASES[..29]), Err(CatalogError::WrongLength(29)));
}

#[test]
fn test_validate_table_rejects_out_of_order() {
    let mut table = PHASES;
    table.swap(3, 4);
    assert_eq!(
        validate_table(&table),
        Err(CatalogError::OutOfOrder {
            index: 3,
            expected: 4,
            found: 5
        })
    );
}

#[test]
fn test_validate_table_rejects_blank_entry() {
    let mut table = PHASES;
    table[9].name = " ";
    assert_eq!(validate_table(&table), Err(CatalogError::Incomplete(10)));
}

// ── Name lookup ──

#[test]
fn test_phase_by_name_ignores_diacritics() {
    assert_eq!(phase_by_name("akua").map(|r| r.day), Some(14));
    assert_eq!(phase_by_name("Mahealani").map(|r| r.day), Some(16));
    assert_eq!(phase_by_name("Laaukukahi").map(|r| r.day), Some(18));
    assert_eq!(phase_by_name("'Olepau").map(|r| r.day), Some(10));
    assert_eq!(phase_by_name("Kāne").map(|r| r.day), Some(27));
    assert!(phase_by_name("Pōʻalima").is_none());
}

// ── Groups ──

#[test]
fn test_canonical_groups() {
    let [hoonui, poepoe, hoemi] = groups(GroupLayout::Canonical);
    assert_eq!((hoonui.start, hoonui.end), (1, 10));
    assert_eq!((poepoe.start, poepoe.end), (11, 20));
    assert_eq!((hoemi.start, hoemi.end), (21, 30));
    assert_eq!(hoonui.name, "Hoʻonui");
    assert_eq!(poepoe.gloss, "round");
    assert_eq!(hoemi.kind, GroupKind::Hoemi);
}

#[test]
fn test_legacy_groups() {
    let [hoonui, poepoe, hoemi] = groups(GroupLayout::Legacy);
    assert_eq!((hoonui.start, hoonui.end), (1, 10));
    assert_eq!((poepoe.start, poepoe.end), (11, 16));
    assert_eq!((hoemi.start, hoemi.end), (17, 30));
}

#[test]
fn test_groups_partition_every_day() {
    for layout in [GroupLayout::Canonical, GroupLayout::Legacy] {
        let all = groups(layout);
        assert_eq!(all.iter().map(|g| g.night_count()).sum::<u32>(), PHASE_COUNT);
        for day in 1..=PHASE_COUNT {
            let owners = all.iter().filter(|g| g.contains(day)).count();
            assert_eq!(owners, 1, "day {} under {:?}", day, layout);
            assert!(group_for_day(day, layout).contains(day));
        }
    }
}

#[test]
fn test_group_for_day_layout_difference() {
    assert_eq!(group_for_day(18, GroupLayout::Canonical).kind, GroupKind::Poepoe);
    assert_eq!(group_for_day(18, GroupLayout::Legacy).kind, GroupKind::Hoemi);
}
