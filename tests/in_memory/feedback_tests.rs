//! Feedback loop tests: resolution seeds a request the employee completes.

use super::helpers::{EMPLOYEE_EMAIL, TECH_EMAIL, ctx, desk, desktop, open_ticket, Desk};
use rstest::rstest;
use servicedesk::{
    feedback::{
        domain::{FeedbackStatus, FeedbackSubmission},
        ports::{FeedbackRepository, FeedbackRepositoryError},
    },
    resolution::{
        domain::{NoChange, ResolutionPlan},
        services::ResolutionContext,
    },
    store::domain::Collection,
};

async fn resolve_one(desk: &Desk, ctx: &ResolutionContext) -> Result<(), eyre::Report> {
    let ticket = open_ticket("f00dcafe01", "TK-2001", "eq-7");
    desk.put(Collection::Ticket, "f00dcafe01", &ticket).await?;
    desk.put(Collection::EquipmentActive, "eq-7", &desktop("eq-7"))
        .await?;
    desk.service
        .resolve(
            ctx,
            ticket.id(),
            &ResolutionPlan::NoChange(NoChange::default()),
        )
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_rates_the_resolution_once(
    desk: Desk,
    ctx: ResolutionContext,
) -> Result<(), eyre::Report> {
    resolve_one(&desk, &ctx).await?;
    let pending = desk
        .feedback
        .get_pending_feedback_by_email(EMPLOYEE_EMAIL)
        .await?;
    let request = pending
        .first()
        .ok_or_else(|| eyre::eyre!("no pending feedback"))?;

    let completed = desk
        .feedback
        .submit_feedback(
            FeedbackSubmission::new(request.id.clone(), 5, EMPLOYEE_EMAIL)
                .with_comment(" Quick fix "),
        )
        .await?;

    assert_eq!(completed.status, FeedbackStatus::Completed);
    assert_eq!(completed.comment, "Quick fix");
    assert!(
        desk.feedback
            .get_pending_feedback_by_email(EMPLOYEE_EMAIL)
            .await?
            .is_empty()
    );
    let repeat = desk
        .feedback
        .submit_feedback(FeedbackSubmission::new(request.id.clone(), 1, EMPLOYEE_EMAIL))
        .await;
    assert!(matches!(
        repeat,
        Err(FeedbackRepositoryError::AlreadyCompleted(_))
    ));
    Ok(())
}

#[rstest]
#[case(TECH_EMAIL)]
#[case("someone.else@corp.test")]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_reporting_employee_may_rate(
    desk: Desk,
    ctx: ResolutionContext,
    #[case] submitter: &str,
) -> Result<(), eyre::Report> {
    resolve_one(&desk, &ctx).await?;
    let request_id = desk
        .feedback
        .get_pending_feedback_by_email(EMPLOYEE_EMAIL)
        .await?
        .first()
        .map(|feedback| feedback.id.clone())
        .ok_or_else(|| eyre::eyre!("no pending feedback"))?;

    let result = desk
        .feedback
        .submit_feedback(FeedbackSubmission::new(request_id, 4, submitter))
        .await;

    let err = result
        .err()
        .ok_or_else(|| eyre::eyre!("submission by {submitter} should fail"))?;
    assert!(matches!(err, FeedbackRepositoryError::PermissionDenied(_)));
    assert_eq!(err.kind(), servicedesk::error::ErrorKind::PermissionDenied);
    Ok(())
}
