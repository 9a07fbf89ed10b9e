use super::*;

/// Tests counting a user's assessments.
///
/// Verifies that other users' assessments are not counted.
///
/// Expected: Ok(2) for the user's own assessments
#[tokio::test]
async fn counts_only_own_assessments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_assessment(db, user.id).await?;
    factory::create_assessment(db, user.id).await?;
    factory::create_assessment(db, other.id).await?;

    let repo = StressAssessmentRepository::new(db);
    let count = repo.count_by_user(user.id).await?;

    assert_eq!(count, 2);

    Ok(())
}
