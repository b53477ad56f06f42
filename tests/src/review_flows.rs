//! Review queues and the prepend contract of every message board.
//!
//! Three modules let the user create a record at view time: staff messages,
//! community posts, and locally pushed notifications. All of them take the
//! next id past the seeded sequence, land at the top, stamp "Just now", and
//! refuse blank input without touching the dataset.

#[cfg(test)]
mod tests {
    use engagement::Engagement;
    use lumira_health_shared::HealthError;
    use notifications::{NotificationKind, Notifications};
    use staff_coordination::{RequestStatus, StaffCoordination};

    #[test]
    fn test_review_settles_a_pending_request_exactly_once() {
        let mut module = StaffCoordination::with_sample_data();
        assert_eq!(module.pending_count(), 2);

        module.approve_request("RQ-1").unwrap();
        assert_eq!(module.pending_count(), 1);

        // Settled requests cannot be reviewed again, in either direction.
        assert!(matches!(
            module.deny_request("RQ-1"),
            Err(HealthError::InvalidStatusChange { .. })
        ));
        assert!(matches!(
            module.approve_request("RQ-1"),
            Err(HealthError::InvalidStatusChange { .. })
        ));
        assert_eq!(module.pending_count(), 1);

        module.deny_request("RQ-2").unwrap();
        assert_eq!(module.pending_count(), 0);

        let statuses: Vec<RequestStatus> =
            module.requests().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                RequestStatus::Approved,
                RequestStatus::Denied,
                RequestStatus::Approved,
                RequestStatus::Denied,
            ]
        );
    }

    #[test]
    fn test_staff_messages_prepend_with_the_next_id() {
        let mut module = StaffCoordination::with_sample_data();
        let tail_before: Vec<String> =
            module.messages().iter().map(|m| m.id.clone()).collect();

        let id = module.send_message("Naomi Adeyemi", "Fire drill at 15:00.").unwrap();
        assert_eq!(id, "MSG-4");

        let board = module.messages();
        assert_eq!(board[0].id, "MSG-4");
        assert_eq!(board[0].sent, "Just now");
        let tail_after: Vec<String> = board[1..].iter().map(|m| m.id.clone()).collect();
        assert_eq!(tail_after, tail_before);
    }

    #[test]
    fn test_community_posts_prepend_with_the_next_id() {
        let mut module = Engagement::with_sample_data("Alex Mutua");

        let id = module.publish_post("Signed up for the donor drive!").unwrap();
        assert_eq!(id, "POST-4");
        assert_eq!(module.posts()[0].id, "POST-4");
        assert_eq!(module.posts()[0].posted, "Just now");
        assert_eq!(module.posts()[0].likes, 0);
        assert_eq!(module.posts().len(), 4);
    }

    #[test]
    fn test_pushed_notifications_prepend_with_the_next_id() {
        let mut module = Notifications::with_sample_data();

        let id = module
            .push_notification(NotificationKind::HealthTip, "Stretch break", "Two minutes now.", false)
            .unwrap();
        assert_eq!(id, "NTF-6");
        assert_eq!(module.notifications()[0].time, "Just now");
    }

    #[test]
    fn test_blank_submissions_are_refused_everywhere() {
        let mut staff = StaffCoordination::with_sample_data();
        assert_eq!(
            staff.send_message("Naomi Adeyemi", "   "),
            Err(HealthError::EmptyInput { field: "content" })
        );
        assert_eq!(staff.messages().len(), 3);

        let mut engagement = Engagement::with_sample_data("Alex Mutua");
        assert!(engagement.publish_post("\t\n").is_err());
        assert_eq!(engagement.posts().len(), 3);

        let mut inbox = Notifications::with_sample_data();
        assert!(inbox
            .push_notification(NotificationKind::System, "", "body", false)
            .is_err());
        assert_eq!(inbox.notifications().len(), 5);
    }
}
