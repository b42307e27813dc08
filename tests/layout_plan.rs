use displayctl::{ActiveOrdinal, LayoutError, Monitor, MonitorSet, activation_target, tile_offsets};

fn monitor(index: usize, name: &str, primary: bool) -> Monitor {
    Monitor {
        index,
        device_name: format!("\\\\.\\DISPLAY{}", index + 1),
        display_name: name.to_string(),
        is_primary: primary,
        is_active: true,
    }
}

#[test]
fn tiling_starts_at_zero_and_accumulates_widths() {
    let offsets = tile_offsets(&[1920, 2560, 1280]);
    assert_eq!(offsets, vec![0, 1920, 4480]);
}

#[test]
fn tiling_positions_never_overlap() {
    let widths = [800, 1024, 1920, 1366];
    let offsets = tile_offsets(&widths);

    assert_eq!(offsets[0], 0);
    for i in 1..offsets.len() {
        assert_eq!(
            offsets[i],
            offsets[i - 1] + widths[i - 1] as i32,
            "monitor {} must start where monitor {} ends",
            i,
            i - 1
        );
        assert!(offsets[i] >= offsets[i - 1]);
    }
}

#[test]
fn tiling_of_empty_set_is_empty() {
    assert!(tile_offsets(&[]).is_empty());
}

#[test]
fn activation_resolves_in_range_ordinals() {
    let monitors = vec![
        monitor(0, "Monitor A", true),
        monitor(1, "Monitor B", false),
    ];

    let first = ActiveOrdinal::new(1).unwrap();
    let second = ActiveOrdinal::new(2).unwrap();
    assert_eq!(activation_target(&monitors, first).unwrap(), 0);
    assert_eq!(activation_target(&monitors, second).unwrap(), 1);
}

#[test]
fn activation_out_of_range_fails() {
    let monitors = vec![
        monitor(0, "Monitor A", true),
        monitor(1, "Monitor B", false),
    ];

    let third = ActiveOrdinal::new(3).unwrap();
    let result = activation_target(&monitors, third);
    assert!(matches!(
        result,
        Err(LayoutError::InvalidOrdinal {
            requested: 3,
            available: 2
        })
    ));
}

#[test]
fn activation_on_empty_set_fails() {
    let first = ActiveOrdinal::new(1).unwrap();
    assert!(matches!(
        activation_target(&[], first),
        Err(LayoutError::NoMonitors)
    ));
}

#[test]
fn clone_source_is_the_primary_monitor() {
    let set = MonitorSet::new(vec![
        monitor(0, "Monitor A", false),
        monitor(1, "Monitor B", true),
        monitor(2, "Monitor C", false),
    ]);

    let source = set.primary_or_first().unwrap();
    assert_eq!(source.display_name, "Monitor B");
}

#[test]
fn clone_source_falls_back_to_first_without_primary_flag() {
    let set = MonitorSet::new(vec![
        monitor(0, "Monitor A", false),
        monitor(1, "Monitor B", false),
    ]);

    let source = set.primary_or_first().unwrap();
    assert_eq!(source.display_name, "Monitor A");
}

#[test]
fn monitor_set_lookup_by_ordinal() {
    let set = MonitorSet::new(vec![
        monitor(0, "Monitor A", true),
        monitor(1, "Monitor B", false),
    ]);

    let second = ActiveOrdinal::new(2).unwrap();
    assert_eq!(set.get(second).unwrap().display_name, "Monitor B");

    let fourth = ActiveOrdinal::new(4).unwrap();
    assert!(set.get(fourth).is_none());
}
