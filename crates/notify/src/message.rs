//! Notification text for accepted submissions.

use civic_report_core::{NewFeedback, NewIssue};

/// Subject and plain-text body of one developer email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    #[must_use]
    pub fn issue_reported(id: i64, issue: &NewIssue) -> Self {
        let attachment = issue.image.as_deref().unwrap_or("none");
        Self {
            subject: format!("New issue reported: {}", issue.location),
            body: format!(
                "A new issue was reported.\n\nID: {id}\nLocation: {}\nDescription: {}\nAttachment: {attachment}\n",
                issue.location, issue.description,
            ),
        }
    }

    #[must_use]
    pub fn feedback_received(id: i64, feedback: &NewFeedback) -> Self {
        let comments = feedback.comments.as_deref().unwrap_or("(no comments)");
        Self {
            subject: format!("New feedback received (rating {})", feedback.rating),
            body: format!(
                "New feedback was submitted.\n\nID: {id}\nRating: {}\nComments: {comments}\n",
                feedback.rating,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_notification_mentions_location_and_attachment() {
        let issue = NewIssue::new(
            Some("Riverside Walk".to_owned()),
            Some("Fallen tree".to_owned()),
            Some("1700000000000-x.jpg".to_owned()),
        )
        .unwrap();
        let n = Notification::issue_reported(7, &issue);
        assert_eq!(n.subject, "New issue reported: Riverside Walk");
        assert!(n.body.contains("ID: 7"));
        assert!(n.body.contains("Fallen tree"));
        assert!(n.body.contains("Attachment: 1700000000000-x.jpg"));
    }

    #[test]
    fn feedback_notification_without_comments() {
        let feedback = NewFeedback::new(Some(3), None).unwrap();
        let n = Notification::feedback_received(2, &feedback);
        assert_eq!(n.subject, "New feedback received (rating 3)");
        assert!(n.body.contains("(no comments)"));
    }
}
