use super::*;

fn lead(name: &str, role: Option<&str>) -> Lead {
    Lead { role: role.map(str::to_owned), ..Lead::new("1000", name) }
}

// =============================================================
// Tokens
// =============================================================

#[test]
fn personalization_fields_list_every_token() {
    let tokens: Vec<_> = PERSONALIZATION_FIELDS.iter().map(|f| f.token).collect();
    assert_eq!(tokens, ["{{fullName}}", "{{firstName}}", "{{lastName}}", "{{jobTitle}}"]);
}

#[test]
fn tokens_in_finds_placeholders_in_order() {
    assert_eq!(tokens_in("Hi {{firstName}}, the {{jobTitle}} role"), ["{{firstName}}", "{{jobTitle}}"]);
    assert!(tokens_in("no placeholders").is_empty());
}

#[test]
fn tokens_in_ignores_unterminated_placeholder() {
    assert_eq!(tokens_in("{{fullName}} and {{broken"), ["{{fullName}}"]);
}

#[test]
fn unknown_tokens_reports_unsupported_fields() {
    assert_eq!(unknown_tokens("Hi {{firstName}} at {{company}}"), ["{{company}}"]);
    assert!(unknown_tokens("{{fullName}} {{lastName}}").is_empty());
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn render_fills_name_parts_and_title() {
    let text = render_template(
        "Hi {{firstName}} {{lastName}} ({{fullName}}), fellow {{jobTitle}}",
        &lead("Ada King Lovelace", Some("Engineer")),
    );
    assert_eq!(text, "Hi Ada King Lovelace (Ada King Lovelace), fellow Engineer");
}

#[test]
fn render_single_word_name_has_empty_last_name() {
    let text = render_template("[{{firstName}}][{{lastName}}][{{jobTitle}}]", &lead("Cher", None));
    assert_eq!(text, "[Cher][][]");
}

#[test]
fn render_leaves_unknown_tokens() {
    assert_eq!(render_template("{{company}}", &lead("A B", None)), "{{company}}");
}

// =============================================================
// Schedule
// =============================================================

#[test]
fn default_steps_schedule_only_follow_ups() {
    let steps = default_steps();
    let kinds: Vec<_> = steps.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, MessageKind::ALL);
    assert_eq!(steps[0].schedule, None);
    assert_eq!(steps[1].schedule, None);
    assert_eq!(steps[2].schedule, Some(Schedule::new(SendAfter::WelcomeMessage)));
    assert_eq!(steps[3].schedule, Some(Schedule::new(SendAfter::FirstFollowUp)));
    assert!(steps.iter().all(|s| s.template.is_empty()));
}

#[test]
fn schedule_describes_itself() {
    assert_eq!(Schedule::new(SendAfter::Connection).to_string(), "Send 1 day after connection");
    let weekly = Schedule { amount: 2, unit: DelayUnit::Week, after: SendAfter::WelcomeMessage };
    assert_eq!(weekly.to_string(), "Send 2 weeks after welcome message");
    assert_eq!(weekly.delay_days(), 14);
}

#[test]
fn schedule_delay_saturates() {
    let schedule = Schedule { amount: u32::MAX, unit: DelayUnit::Week, after: SendAfter::Connection };
    assert_eq!(schedule.delay_days(), u32::MAX);
}

#[test]
fn select_values_parse_back() {
    assert_eq!(DelayUnit::from_value("week"), Some(DelayUnit::Week));
    assert_eq!(SendAfter::from_value("firstFollow"), Some(SendAfter::FirstFollowUp));
    assert_eq!(SendAfter::from_value("later"), None);
}
