use chrono::{Days, NaiveDate, TimeZone, Utc};
use quickgoals_core::{Goal, GoalState};
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn due_at(date: NaiveDate) -> Goal {
    Goal::new("goal", Utc.from_utc_datetime(&date.and_hms_opt(8, 0, 0).unwrap()))
}

#[test]
fn goal_new_sets_defaults() {
    let before = Utc::now();
    let goal = Goal::new("Run 5k", Utc::now());

    assert!(!goal.id().is_nil());
    assert_eq!(goal.title(), "Run 5k");
    assert!(!goal.is_completed());
    assert_eq!(goal.state(), GoalState::Active);
    assert!(goal.created_date() >= before);
}

#[test]
fn new_goals_get_distinct_ids() {
    let first = Goal::new("a", Utc::now());
    let second = Goal::new("a", Utc::now());
    assert_ne!(first.id(), second.id());
}

#[test]
fn days_remaining_counts_calendar_days() {
    let today = today();

    assert_eq!(due_at(today).days_remaining_in(today, &Utc), 0);
    assert_eq!(
        due_at(today.checked_sub_days(Days::new(1)).unwrap()).days_remaining_in(today, &Utc),
        -1
    );
    assert_eq!(
        due_at(today.checked_add_days(Days::new(5)).unwrap()).days_remaining_in(today, &Utc),
        5
    );
}

#[test]
fn due_today_is_not_overdue() {
    let goal = due_at(today());
    assert!(!goal.is_overdue_in(today(), &Utc));
}

#[test]
fn overdue_iff_past_and_active() {
    let today = today();
    let mut goal = due_at(today.checked_sub_days(Days::new(3)).unwrap());
    assert!(goal.is_overdue_in(today, &Utc));

    goal.toggle();
    assert!(goal.days_remaining_in(today, &Utc) < 0);
    assert!(!goal.is_overdue_in(today, &Utc));

    let future = due_at(today.checked_add_days(Days::new(3)).unwrap());
    assert!(!future.is_overdue_in(today, &Utc));
}

#[test]
fn toggle_twice_restores_state() {
    let mut goal = due_at(today());
    goal.toggle();
    assert_eq!(goal.state(), GoalState::Completed);
    goal.toggle();
    assert_eq!(goal.state(), GoalState::Active);
}

#[test]
fn local_calendar_helpers_agree_with_explicit_zone() {
    let goal = due_at(today());
    assert_eq!(
        goal.days_remaining(today()),
        goal.days_remaining_in(today(), &chrono::Local)
    );
}

#[test]
fn start_of_local_day_lands_on_the_picked_day() {
    let picked = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
    let stored = quickgoals_core::start_of_local_day(picked);
    let goal = Goal::new("gifts", stored);

    assert_eq!(goal.target_day_in(&chrono::Local), picked);
    assert_eq!(goal.days_remaining(picked), 0);
}

#[test]
fn goal_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let target = Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap();
    let created = Utc.with_ymd_and_hms(2026, 10, 15, 7, 45, 12).unwrap();
    let goal = Goal::with_id(id, "Read book", target, false, created);

    let json = serde_json::to_value(&goal).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Read book");
    assert_eq!(json["targetDate"], "2026-11-01T00:00:00Z");
    assert_eq!(json["isCompleted"], false);
    assert_eq!(json["createdDate"], "2026-10-15T07:45:12Z");
    assert_eq!(json.as_object().unwrap().len(), 5);

    let decoded: Goal = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, goal);
}

#[test]
fn deserialize_rejects_missing_fields() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "no dates",
        "isCompleted": false
    });

    assert!(serde_json::from_value::<Goal>(value).is_err());
}
