use super::*;

/// Tests finding an assessment by id.
///
/// Expected: Ok(Some(StressAssessment)) for an existing assessment
#[tokio::test]
async fn finds_existing_assessment() -> Result<(), AppError> {
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
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests finding a non-existent assessment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_assessment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StressAssessmentRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
