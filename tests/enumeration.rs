#![cfg(target_os = "windows")]

use displayctl::{ActiveOrdinal, LayoutError, activate_only, query_monitors, query_outputs};

#[test]
fn test_enumeration_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let first = query_monitors()?;
    println!("Discovered monitors:\n{}", first);

    let second = query_monitors()?;
    assert_eq!(
        first, second,
        "Two consecutive enumerations should return structurally equal sets"
    );

    for monitor in first.monitors() {
        assert!(monitor.is_active, "Enumeration should only report active monitors");
    }

    Ok(())
}

#[test]
fn test_activate_out_of_range_fails_without_mutation() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let before = query_monitors()?;
    let out_of_range = ActiveOrdinal::new(before.len() as u32 + 1).unwrap();

    let result = activate_only(out_of_range);
    assert!(matches!(
        result,
        Err(LayoutError::InvalidOrdinal { .. }) | Err(LayoutError::NoMonitors)
    ));

    // the rejected call must not have touched the topology
    let after = query_monitors()?;
    assert_eq!(before, after);

    Ok(())
}

#[test]
fn test_hdr_outputs_skip_internal_panels() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let outputs = query_outputs()?;
    for (i, output) in outputs.iter().enumerate() {
        println!("{}", output);
        assert_eq!(
            output.ordinal.get() as usize,
            i + 1,
            "Output ordinals should be sequential"
        );
        assert!(
            !output.technology.is_internal(),
            "Internal panels must not appear in the HDR numbering domain"
        );
    }

    Ok(())
}
