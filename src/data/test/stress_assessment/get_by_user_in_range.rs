use super::*;
use test_utils::factory::stress_assessment::StressAssessmentFactory;

/// Tests listing assessments in a time range, oldest first.
///
/// Expected: only in-range assessments, ordered by recorded time ascending
#[tokio::test]
async fn returns_in_range_assessments_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    StressAssessmentFactory::new(db, user.id)
        .recorded_at(now - Duration::days(30))
        .build()
        .await?;
    let older = StressAssessmentFactory::new(db, user.id)
        .recorded_at(now - Duration::days(5))
        .build()
        .await?;
    let newer = StressAssessmentFactory::new(db, user.id)
        .recorded_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = StressAssessmentRepository::new(db);
    let assessments = repo
        .get_by_user_in_range(user.id, Some(now - Duration::days(7)), Some(now))
        .await?;

    assert_eq!(assessments.len(), 2);
    assert_eq!(assessments[0].id, older.id);
    assert_eq!(assessments[1].id, newer.id);

    Ok(())
}

/// Tests listing without range bounds.
///
/// Expected: every assessment for the user is returned
#[tokio::test]
async fn returns_all_assessments_without_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    factory::create_assessment(db, user.id).await?;
    factory::create_assessment(db, user.id).await?;

    let repo = StressAssessmentRepository::new(db);
    let assessments = repo.get_by_user_in_range(user.id, None, None).await?;

    assert_eq!(assessments.len(), 2);

    Ok(())
}
