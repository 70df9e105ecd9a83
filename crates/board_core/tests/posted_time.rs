use board_core::{
    format_for_display, parse_to_minutes, Job, JobFields, PostedMinutes, MINUTES_PER_DAY,
};

#[test]
fn minutes_follow_unit_substring_rule() {
    assert_eq!(parse_to_minutes("3 hours"), PostedMinutes::Known(180));
    assert_eq!(parse_to_minutes("1 day"), PostedMinutes::Known(1440));
    assert_eq!(parse_to_minutes("45 minutes"), PostedMinutes::Known(45));
    assert_eq!(parse_to_minutes("1 minute"), PostedMinutes::Known(1));
    assert_eq!(parse_to_minutes("2 hour"), PostedMinutes::Known(120));
}

#[test]
fn unrecognized_or_missing_unit_counts_as_days() {
    assert_eq!(parse_to_minutes("2 weeks"), PostedMinutes::Known(2 * MINUTES_PER_DAY));
    assert_eq!(parse_to_minutes("3 Hours"), PostedMinutes::Known(3 * MINUTES_PER_DAY));
    assert_eq!(parse_to_minutes("4"), PostedMinutes::Known(4 * MINUTES_PER_DAY));
}

#[test]
fn non_numeric_value_is_unknown() {
    assert_eq!(parse_to_minutes("a few hours"), PostedMinutes::Unknown);
    assert_eq!(parse_to_minutes(""), PostedMinutes::Unknown);
    assert_eq!(parse_to_minutes("yesterday").value(), None);
}

#[test]
fn value_is_read_leniently() {
    assert_eq!(parse_to_minutes("3.5 hours"), PostedMinutes::Known(180));
    assert_eq!(parse_to_minutes("10+ minutes"), PostedMinutes::Known(10));
}

#[test]
fn display_pluralizes_counts_above_one() {
    assert_eq!(format_for_display("1 hour"), "1 hour");
    assert_eq!(format_for_display("2 hour"), "2 hours");
    assert_eq!(format_for_display("5 day"), "5 days");
    assert_eq!(format_for_display("0 minute"), "0 minute");
}

#[test]
fn display_does_not_double_pluralize() {
    assert_eq!(format_for_display("2 hours"), "2 hours");
    assert_eq!(format_for_display("10 minutes"), "10 minutes");
    assert_eq!(format_for_display("1 days"), "1 days");
}

#[test]
fn display_keeps_unreadable_values_as_is() {
    assert_eq!(format_for_display("few hour"), "few hour");
    assert_eq!(format_for_display("3"), "3 ");
}

#[test]
fn job_holds_fields_verbatim_and_derives_posted_values() {
    let job = Job::from_fields(JobFields {
        job_no: "17".into(),
        title: "  Rust Dev ".into(),
        link: "not a url".into(),
        posted: "2 hour".into(),
        job_type: "whatever".into(),
        level: "".into(),
        estimated_time: "1 month".into(),
        skill: "Rust".into(),
        detail: "Line one\nLine two".into(),
    });

    assert_eq!(job.job_no(), "17");
    assert_eq!(job.title(), "  Rust Dev ");
    assert_eq!(job.link(), "not a url");
    assert_eq!(job.posted(), "2 hour");
    assert_eq!(job.job_type(), "whatever");
    assert_eq!(job.level(), "");
    assert_eq!(job.estimated_time(), "1 month");
    assert_eq!(job.skill(), "Rust");
    assert_eq!(job.detail(), "Line one\nLine two");
    assert_eq!(job.posted_minutes(), PostedMinutes::Known(120));
    assert_eq!(job.formatted_posted_time(), "2 hours");
}
