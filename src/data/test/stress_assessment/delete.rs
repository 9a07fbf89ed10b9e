use super::*;

/// Tests deleting a stress assessment.
///
/// Expected: Ok(()) and the assessment is no longer found
#[tokio::test]
async fn deletes_assessment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_assessment(db, user.id).await?;

    let repo = StressAssessmentRepository::new(db);
    repo.delete(created.id).await?;

    let found = repo.find_by_id(created.id).await?;
    assert!(found.is_none());

    Ok(())
}
