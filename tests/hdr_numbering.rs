use displayctl::{OutputOrdinal, OutputTechnology, VSIF_SUPPORT_HDR, nth_external, with_hdr_bit};

#[test]
fn ordinals_count_only_external_targets() {
    // topology: built-in panel, then HDMI "Monitor A", then DP "Monitor B"
    let technologies = [
        OutputTechnology::Internal,
        OutputTechnology::HDMI,
        OutputTechnology::DisplayPortExternal,
    ];

    let first = OutputOrdinal::new(1).unwrap();
    let second = OutputOrdinal::new(2).unwrap();
    let third = OutputOrdinal::new(3).unwrap();

    // ordinal 1 resolves to the first external target in path order, not the
    // first path overall
    assert_eq!(nth_external(&technologies, first), Some(1));
    assert_eq!(nth_external(&technologies, second), Some(2));
    assert_eq!(nth_external(&technologies, third), None);
}

#[test]
fn internal_only_topology_has_no_outputs() {
    let technologies = [OutputTechnology::Internal];
    let first = OutputOrdinal::new(1).unwrap();
    assert_eq!(nth_external(&technologies, first), None);
}

#[test]
fn embedded_displayport_counts_as_external() {
    let technologies = [
        OutputTechnology::Internal,
        OutputTechnology::DisplayPortEmbedded,
    ];
    let first = OutputOrdinal::new(1).unwrap();
    assert_eq!(nth_external(&technologies, first), Some(1));
}

#[test]
fn hdr_bit_round_trips() {
    // arbitrary signal info with the HDR bit clear
    let original: u32 = 0x0003_0241;
    assert_eq!(original & VSIF_SUPPORT_HDR, 0);

    let enabled = with_hdr_bit(original, true);
    assert_eq!(enabled, original | VSIF_SUPPORT_HDR);

    let restored = with_hdr_bit(enabled, false);
    assert_eq!(restored, original, "enable then disable must be a no-op");
}

#[test]
fn hdr_bit_flip_preserves_unrelated_bits() {
    let original: u32 = 0xffff_ffff;

    let disabled = with_hdr_bit(original, false);
    assert_eq!(disabled, original & !VSIF_SUPPORT_HDR);
    assert_eq!(with_hdr_bit(disabled, true), original);
}

#[test]
fn ordinals_reject_zero() {
    assert!(OutputOrdinal::new(0).is_none());
    assert!("0".parse::<OutputOrdinal>().is_err());
    assert!("not a number".parse::<OutputOrdinal>().is_err());
    assert_eq!("2".parse::<OutputOrdinal>().unwrap().index(), 1);
}

#[test]
fn technology_values_round_trip_from_the_os() {
    assert_eq!(OutputTechnology::from_value(5), OutputTechnology::HDMI);
    assert_eq!(OutputTechnology::from_value(42), OutputTechnology::Other);
    assert_eq!(
        OutputTechnology::from_value(-2147483648),
        OutputTechnology::Internal
    );
    assert!(OutputTechnology::from_value(-2147483648).is_internal());
    assert!(!OutputTechnology::from_value(10).is_internal());
}
