//! Tests for the textual action form.

use concierge_core::{BrowserAction, ParseActionError};
use concierge_model::{AttributeFilter, EntryId, ModelError};

fn parse(text: &str) -> Result<BrowserAction, ParseActionError> {
    text.parse()
}

#[test]
fn parses_every_action() {
    let cases = [
        "category:medical",
        "entity:new-york",
        "back",
        "filter:type=er",
        "clear-filter",
        "toggle:tv-english",
        "collapse-all",
        "show-only:customs",
    ];
    for text in cases {
        let action = parse(text).unwrap();
        assert_eq!(action.to_string(), text);
    }
}

#[test]
fn filter_parts_are_trimmed() {
    assert_eq!(
        parse("filter: tier = budget ").unwrap(),
        BrowserAction::SetFilter(AttributeFilter::new("tier", "budget"))
    );
}

#[test]
fn filter_value_may_contain_equals() {
    assert_eq!(
        parse("filter:note=a=b").unwrap(),
        BrowserAction::SetFilter(AttributeFilter::new("note", "a=b"))
    );
}

#[test]
fn ids_are_trimmed() {
    assert_eq!(
        parse("entity: ny-er-1").unwrap(),
        BrowserAction::SelectEntity(EntryId::new("ny-er-1").unwrap())
    );
}

#[test]
fn unknown_action_is_rejected() {
    assert_eq!(
        parse("jump:somewhere").unwrap_err(),
        ParseActionError::Unknown("jump:somewhere".to_string())
    );
}

#[test]
fn missing_argument_is_rejected() {
    assert_eq!(
        parse("entity").unwrap_err(),
        ParseActionError::MissingArgument {
            action: "entity".to_string()
        }
    );
    assert_eq!(
        parse("toggle:  ").unwrap_err(),
        ParseActionError::MissingArgument {
            action: "toggle".to_string()
        }
    );
}

#[test]
fn malformed_filter_is_rejected() {
    assert_eq!(
        parse("filter:tier").unwrap_err(),
        ParseActionError::MalformedFilter("tier".to_string())
    );
    assert_eq!(
        parse("filter:=budget").unwrap_err(),
        ParseActionError::MalformedFilter("=budget".to_string())
    );
}

#[test]
fn invalid_id_error_is_wrapped() {
    let err = ModelError::InvalidId(String::new());
    assert_eq!(ParseActionError::from(err.clone()), ParseActionError::InvalidId(err));
}
