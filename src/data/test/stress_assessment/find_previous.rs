use super::*;
use test_utils::factory::stress_assessment::StressAssessmentFactory;

/// Tests finding the assessment preceding a given time.
///
/// Verifies that the most recent assessment recorded strictly before the
/// cutoff is returned.
///
/// Expected: Ok(Some(StressAssessment)) for the closest earlier assessment
#[tokio::test]
async fn returns_most_recent_before_cutoff() -> Result<(), AppError> {
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
        .recorded_at(now - Duration::days(5))
        .build()
        .await?;
    let closest = StressAssessmentFactory::new(db, user.id)
        .recorded_at(now - Duration::days(2))
        .build()
        .await?;
    StressAssessmentFactory::new(db, user.id)
        .recorded_at(now)
        .build()
        .await?;

    let repo = StressAssessmentRepository::new(db);
    let previous = repo.find_previous(user.id, now - Duration::days(1)).await?;

    assert!(previous.is_some());
    assert_eq!(previous.unwrap().id, closest.id);

    Ok(())
}

/// Tests finding a previous assessment when none precede the cutoff.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_earlier_assessment() -> Result<(), AppError> {
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
        .recorded_at(now)
        .build()
        .await?;

    let repo = StressAssessmentRepository::new(db);
    let previous = repo.find_previous(user.id, now - Duration::days(1)).await?;

    assert!(previous.is_none());

    Ok(())
}
