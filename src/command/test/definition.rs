use super::*;

fn optional_string(name: &str) -> CommandOption {
    CommandOption {
        required: false,
        ..CommandOption::required_string(name, "Optional value")
    }
}

/// Tests that a well-formed definition passes validation.
///
/// Expected: Ok(())
#[test]
fn accepts_valid_definition() {
    let (definition, _) = counting_command("submit-project", Behaviour::Succeed);
    let definition = definition
        .option(CommandOption::required_string("repo", "Repository name"))
        .option(optional_string("note"));

    assert_eq!(definition.validate(), Ok(()));
}

/// Tests that uppercase letters and spaces are rejected in command names.
///
/// Expected: Err(InvalidName)
#[test]
fn rejects_invalid_command_names() {
    for name in ["Setup", "set up", "", "a-name-that-is-far-too-long-for-discord"] {
        let (definition, _) = counting_command(name, Behaviour::Succeed);

        assert_eq!(
            definition.validate(),
            Err(LoadError::InvalidName(name.to_string())),
            "name {:?} should be rejected",
            name
        );
    }
}

/// Tests that an empty description is rejected.
///
/// Expected: Err(InvalidDescription)
#[test]
fn rejects_empty_description() {
    let (definition, _) = counting_command("ping", Behaviour::Succeed);
    let definition = definition.option(CommandOption::required_string("target", ""));

    assert_eq!(
        definition.validate(),
        Err(LoadError::InvalidDescription("target".to_string()))
    );
}

/// Tests that two options with the same name are rejected.
///
/// Expected: Err(DuplicateOption)
#[test]
fn rejects_duplicate_option_names() {
    let (definition, _) = counting_command("ping", Behaviour::Succeed);
    let definition = definition
        .option(CommandOption::required_string("target", "First"))
        .option(CommandOption::required_string("target", "Second"));

    assert_eq!(
        definition.validate(),
        Err(LoadError::DuplicateOption {
            command: "ping".to_string(),
            option: "target".to_string(),
        })
    );
}

/// Tests that required options must precede optional ones.
///
/// Expected: Err(RequiredOptionAfterOptional)
#[test]
fn rejects_required_option_after_optional() {
    let (definition, _) = counting_command("ping", Behaviour::Succeed);
    let definition = definition
        .option(optional_string("note"))
        .option(CommandOption::required_string("target", "Target"));

    assert_eq!(
        definition.validate(),
        Err(LoadError::RequiredOptionAfterOptional {
            command: "ping".to_string(),
            option: "target".to_string(),
        })
    );
}

/// Tests that more than 25 options are rejected.
///
/// Expected: Err(TooManyOptions)
#[test]
fn rejects_more_than_twenty_five_options() {
    let (definition, _) = counting_command("ping", Behaviour::Succeed);
    let definition = (0..26).fold(definition, |definition, i| {
        definition.option(CommandOption::required_string(&format!("opt{}", i), "Value"))
    });

    assert_eq!(
        definition.validate(),
        Err(LoadError::TooManyOptions {
            command: "ping".to_string(),
            count: 26,
        })
    );
}

/// Tests the `/setup` definition's Discord-facing shape.
///
/// Expected: three required string options in declaration order
#[test]
fn setup_definition_declares_three_required_strings() {
    let definition = setup::definition(SetupSettings::default());

    assert_eq!(definition.validate(), Ok(()));
    assert_eq!(definition.name(), "setup");
    assert_eq!(
        definition.description(),
        "Setup the bot by creating a bot role and channels."
    );

    let names: Vec<&str> = definition
        .options()
        .iter()
        .map(|option| option.name.as_str())
        .collect();
    assert_eq!(names, vec!["category_name", "channel_one", "channel_two"]);
    assert!(definition
        .options()
        .iter()
        .all(|option| option.required && option.kind == OptionKind::String));
}

/// Tests that descriptors serialize to Discord's command JSON.
///
/// Expected: numeric option type under the `type` key
#[test]
fn descriptor_serializes_to_discord_json() {
    let (definition, _) = counting_command("ping", Behaviour::Succeed);
    let definition = definition.option(CommandOption::required_string("target", "Target"));

    let json = serde_json::to_value(definition.descriptor()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": "ping",
            "description": "Test command",
            "options": [
                { "type": 3, "name": "target", "description": "Target", "required": true }
            ]
        })
    );
}
