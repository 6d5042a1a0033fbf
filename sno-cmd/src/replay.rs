//! Scripted notification replay.

use sno_activity::{ClassList, LoadingToggle, Notification, ToggleConfig};

/// Deliver `notifications` to a fresh toggle over an empty class list and
/// describe the marker after each step. The first line is the initial state.
pub fn replay_lines(notifications: &[Notification], config: &ToggleConfig) -> Vec<String> {
    let root = ClassList::new();
    let toggle = LoadingToggle::from_config(root.clone(), config);

    let mut lines = Vec::with_capacity(notifications.len() + 1);
    lines.push(format!("start  -> {} [{}]", toggle.state(), root));
    for notification in notifications {
        let state = toggle.apply(*notification);
        lines.push(format!("{:<6} -> {} [{}]", notification.to_string(), state, root));
    }
    lines
}
