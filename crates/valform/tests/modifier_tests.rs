use valform::phone::PhoneFormatter;
use valform::special_chars::SpecialCharsModifier;
use valform::tags::TagSplitter;
use valform::{
    Domain, PhoneOptions, SpecialCharsOptions, TagOptions, format_phone, set_config,
    split_tags, strip_special_chars,
};

fn phone_options(format: &str, is_international: bool) -> PhoneOptions {
    PhoneOptions {
        format: format.to_string(),
        is_international,
    }
}

fn tag_options(separators: &[&str]) -> TagOptions {
    TagOptions {
        separators: separators.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_phone_regrouped_per_format() {
    let formatter = PhoneFormatter::new(phone_options("3-8", true));
    let envelope = formatter.format("12345678765");
    assert!(envelope.success);
    assert_eq!(envelope.message, "Phone number successfully formatted");
    assert_eq!(envelope.data.unwrap(), "123-45678765");
}

#[test]
fn test_phone_national_format_drops_country_code() {
    let formatter = PhoneFormatter::new(phone_options("3-4-4", false));
    let envelope = formatter.format("12345678765");
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap(), "4567-8765");
}

#[test]
fn test_phone_length_window() {
    let formatter = PhoneFormatter::new(phone_options("3-8-5", true));
    let envelope = formatter.format("123-4567-876544133");
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(
        envelope.message,
        "Phone number length can contain only 7-15 digits"
    );
}

#[test]
fn test_phone_format_digit_count_mismatch() {
    let formatter = PhoneFormatter::new(phone_options("3-8", true));
    let envelope = formatter.format("123-4567-876544133");
    assert!(!envelope.success);
    assert_eq!(
        envelope.message,
        "Format does not match no. of digits in phone number"
    );
}

#[test]
fn test_phone_rejects_foreign_characters() {
    let formatter = PhoneFormatter::new(phone_options("3-3-4", true));
    let envelope = formatter.format("123$456$4133");
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Phone number input is invalid");
}

#[test]
fn test_phone_via_global_configuration() {
    set_config(Domain::Phones, &phone_options("3-4-4", true));
    let envelope = format_phone("1234567 8765");
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap(), "123-4567-8765");
}

#[test]
fn test_tags_single_configured_separator_wins_even_if_rare() {
    let splitter = TagSplitter::new(tag_options(&[","]));
    let envelope = splitter.split("a:b:c:d,e,f");
    assert!(envelope.success);
    assert_eq!(envelope.message, "Tags array created successfully");
    assert_eq!(envelope.data.unwrap(), vec!["a:b:c:d", "e", "f"]);
}

#[test]
fn test_tags_most_frequent_configured_separator_wins() {
    let splitter = TagSplitter::new(tag_options(&[",", "-"]));
    let envelope = splitter.split("a,b,c-d,e,f,a-b-c-d-e-f");
    assert_eq!(
        envelope.data.unwrap(),
        vec!["a,b,c", "d,e,f,a", "b", "c", "d", "e", "f"]
    );
}

#[test]
fn test_tags_default_candidates_are_the_inputs_special_chars() {
    let splitter = TagSplitter::new(TagOptions::default());
    assert_eq!(
        splitter.split("a,b,c,d,e,f").data.unwrap(),
        vec!["a", "b", "c", "d", "e", "f"]
    );
    // The most frequent special character wins among the defaults too.
    assert_eq!(
        splitter.split("a,b,c-d,e,f,a-b-c-d-e-f").data.unwrap(),
        vec!["a,b,c", "d,e,f,a", "b", "c", "d", "e", "f"]
    );
}

#[test]
fn test_tags_absent_separators_return_the_whole_input() {
    let splitter = TagSplitter::new(tag_options(&["|", "."]));
    let envelope = splitter.split("a,b,c-d,e,f,a-b-c-d-e-f");
    assert_eq!(envelope.data.unwrap(), vec!["a,b,c-d,e,f,a-b-c-d-e-f"]);
}

#[test]
fn test_tags_empty_separator_list_behaves_as_default() {
    let splitter = TagSplitter::new(tag_options(&[]));
    let envelope = splitter.split("a,b,c-d,e,f,a-b-c-d-e-f");
    assert_eq!(
        envelope.data.unwrap(),
        vec!["a,b,c", "d,e,f,a", "b", "c", "d", "e", "f"]
    );
}

#[test]
fn test_tags_separator_must_be_a_single_character() {
    let splitter = TagSplitter::new(tag_options(&[",,"]));
    let envelope = splitter.split("a,b,c,d,e,f");
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(
        envelope.message,
        "Separators may only include one character each."
    );
}

#[test]
fn test_tags_separator_must_be_special() {
    let splitter = TagSplitter::new(tag_options(&["3"]));
    let envelope = splitter.split("a3b3c3d3e3f");
    assert!(!envelope.success);
    assert_eq!(
        envelope.message,
        "Separators may only include special characters."
    );
}

#[test]
fn test_tags_via_global_configuration() {
    set_config(Domain::Tags, &tag_options(&[";"]));
    let envelope = split_tags("x;y;z");
    assert_eq!(envelope.data.unwrap(), vec!["x", "y", "z"]);
}

#[test]
fn test_special_chars_configured_exceptions_survive() {
    let modifier = SpecialCharsModifier::new(SpecialCharsOptions {
        exceptions: "@#$".to_string(),
    });
    let envelope = modifier.strip("av!iv @ avisrur $# !&*");
    assert!(envelope.success);
    assert_eq!(envelope.message, "String successfully modified");
    assert_eq!(envelope.data.unwrap(), "aviv @ avisrur $# ");
}

#[test]
fn test_special_chars_default_strips_everything_special() {
    let modifier = SpecialCharsModifier::new(SpecialCharsOptions::default());
    let envelope = modifier.strip("av!iv @ avisrur $# !&*");
    assert_eq!(envelope.data.unwrap(), "aviv  avisrur  ");
}

#[test]
fn test_special_chars_rejects_non_string_input() {
    let modifier = SpecialCharsModifier::new(SpecialCharsOptions::default());
    let envelope = modifier.strip(12345);
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(envelope.message, "Input should be a string");
}

#[test]
fn test_special_chars_via_global_configuration() {
    set_config(
        Domain::SpecialCharsModifier,
        &SpecialCharsOptions {
            exceptions: "-".to_string(),
        },
    );
    let envelope = strip_special_chars("well-formed, mostly!");
    assert_eq!(envelope.data.unwrap(), "well-formed mostly");
}
