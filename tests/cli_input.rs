use displayctl::{Layout, MenuChoice};

#[test]
fn menu_choices_parse_from_their_numbers() {
    assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::ShowMonitors);
    assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::Extend);
    assert_eq!("3".parse::<MenuChoice>().unwrap(), MenuChoice::Clone);
    assert_eq!("4".parse::<MenuChoice>().unwrap(), MenuChoice::ActivateOne);
    assert_eq!("5".parse::<MenuChoice>().unwrap(), MenuChoice::ToggleHdr);
    assert_eq!("6".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
}

#[test]
fn menu_tolerates_surrounding_whitespace() {
    assert_eq!(" 4 \n".parse::<MenuChoice>().unwrap(), MenuChoice::ActivateOne);
}

#[test]
fn malformed_menu_input_is_an_error_not_a_panic() {
    assert!("".parse::<MenuChoice>().is_err());
    assert!("abc".parse::<MenuChoice>().is_err());
    assert!("0".parse::<MenuChoice>().is_err());
    assert!("7".parse::<MenuChoice>().is_err());
    assert!("-1".parse::<MenuChoice>().is_err());
}

#[test]
fn layouts_parse_from_their_names() {
    assert_eq!("extend".parse::<Layout>().unwrap(), Layout::Extend);
    assert_eq!("Extended".parse::<Layout>().unwrap(), Layout::Extend);
    assert_eq!("clone".parse::<Layout>().unwrap(), Layout::Clone);
    assert_eq!("duplicate".parse::<Layout>().unwrap(), Layout::Clone);
    assert!("mirror".parse::<Layout>().is_err());
}
