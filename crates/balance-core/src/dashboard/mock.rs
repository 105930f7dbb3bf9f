//! Built-in tasks and schedules used until something has been persisted.

use jiff::civil::Date;

use crate::models::{Frequency, PreferredWindow, Schedule, ScheduleStatus, Task};

fn task(
    id: &str,
    title: &str,
    frequency: Frequency,
    duration_minutes: u32,
    anchor: bool,
    preferred_window: PreferredWindow,
) -> Task {
    Task {
        id: id.to_string(),
        goal_id: None,
        title: title.to_string(),
        frequency,
        duration_minutes,
        anchor,
        why: None,
        preferred_window,
    }
}

/// The five built-in task templates.
pub fn builtin_tasks() -> Vec<Task> {
    vec![
        task("1", "Drink 2L water", Frequency::Daily, 5, true, PreferredWindow::Any),
        task("2", "6k steps", Frequency::Daily, 30, false, PreferredWindow::Morning),
        task("3", "Plan 3 meals", Frequency::Weekly, 15, false, PreferredWindow::Evening),
        task("4", "10-min reset", Frequency::Daily, 10, true, PreferredWindow::Evening),
        task("5", "Skincare routine", Frequency::Daily, 7, true, PreferredWindow::Evening),
    ]
}

/// One occurrence of every built-in task on `today`; the second one is
/// already done.
pub fn builtin_schedules(today: Date) -> Vec<Schedule> {
    builtin_tasks()
        .into_iter()
        .map(|task| {
            let status = if task.id == "2" {
                ScheduleStatus::Done
            } else {
                ScheduleStatus::Pending
            };
            Schedule::pending(task.id.clone(), task, today).with_status(status)
        })
        .collect()
}
