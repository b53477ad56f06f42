//! Notification badge arithmetic and cross-module routing.

use notifications::Notifications;

/// Ids of the seeded inbox, newest first.
pub const SEEDED_IDS: [&str; 5] = ["NTF-1", "NTF-2", "NTF-3", "NTF-4", "NTF-5"];

#[cfg(test)]
mod tests {
    use super::*;
    use lumira_health_shared::{Destination, RecordingShell, ShellEvent};

    #[test]
    fn test_badge_equals_the_unread_count_at_rest() {
        let module = Notifications::with_sample_data();
        let by_hand = module.notifications().iter().filter(|n| !n.read).count();
        assert_eq!(module.unread_count(), by_hand);
        assert_eq!(module.unread_count(), 3);
    }

    #[test]
    fn test_the_badge_never_goes_negative() {
        let mut module = Notifications::with_sample_data();
        for id in SEEDED_IDS {
            module.open_notification(id).unwrap();
            module.back_home();
        }
        assert_eq!(module.unread_count(), 0);

        // Everything is read now; a second pass must not underflow.
        for id in SEEDED_IDS {
            module.open_notification(id).unwrap();
            module.back_home();
        }
        assert_eq!(module.unread_count(), 0);
    }

    #[test]
    fn test_mark_all_read_is_idempotent() {
        let mut module = Notifications::with_sample_data();
        module.mark_all_read();
        assert_eq!(module.unread_count(), 0);

        module.mark_all_read();
        assert_eq!(module.unread_count(), 0);
        assert_eq!(module.notifications().len(), 5);
    }

    #[test]
    fn test_health_tips_route_to_the_tips_screen() {
        let module = Notifications::with_sample_data();
        let shell = RecordingShell::new();

        module.follow_action("NTF-4", &shell).unwrap();
        assert_eq!(shell.events(), vec![ShellEvent::Open(Destination::HealthTips)]);
    }

    #[test]
    fn test_notifications_without_a_route_are_quiet() {
        let module = Notifications::with_sample_data();
        let shell = RecordingShell::new();

        module.follow_action("NTF-3", &shell).unwrap();
        module.follow_action("NTF-5", &shell).unwrap();
        assert!(shell.is_empty());
    }
}
