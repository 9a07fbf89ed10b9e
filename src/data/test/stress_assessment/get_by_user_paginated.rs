use super::*;
use test_utils::factory::stress_assessment::StressAssessmentFactory;

/// Tests paginated assessment listing order.
///
/// Verifies that assessments come back newest first with the correct
/// total.
///
/// Expected: Ok with assessments ordered by recorded time descending
#[tokio::test]
async fn returns_newest_first_with_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let oldest = StressAssessmentFactory::new(db, user.id)
        .recorded_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = StressAssessmentFactory::new(db, user.id)
        .recorded_at(now)
        .build()
        .await?;

    let repo = StressAssessmentRepository::new(db);
    let (assessments, total) = repo.get_by_user_paginated(user.id, 0, 10, None, None).await?;

    assert_eq!(total, 2);
    assert_eq!(assessments[0].id, newest.id);
    assert_eq!(assessments[1].id, oldest.id);

    Ok(())
}

/// Tests bounding the listing by a recorded-time range.
///
/// Expected: only assessments inside the range are returned
#[tokio::test]
async fn filters_by_time_range() -> Result<(), AppError> {
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
        .recorded_at(now - Duration::days(10))
        .build()
        .await?;
    let recent = StressAssessmentFactory::new(db, user.id)
        .recorded_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = StressAssessmentRepository::new(db);
    let (assessments, total) = repo
        .get_by_user_paginated(user.id, 0, 10, Some(now - Duration::days(1)), Some(now))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(assessments[0].id, recent.id);

    Ok(())
}

/// Tests that the listing is scoped to one user.
///
/// Expected: other users' assessments are excluded
#[tokio::test]
async fn excludes_other_users_assessments() -> Result<(), AppError> {
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
    factory::create_assessment(db, other.id).await?;

    let repo = StressAssessmentRepository::new(db);
    let (assessments, total) = repo.get_by_user_paginated(user.id, 0, 10, None, None).await?;

    assert_eq!(total, 1);
    assert_eq!(assessments[0].user_id, user.id);

    Ok(())
}
