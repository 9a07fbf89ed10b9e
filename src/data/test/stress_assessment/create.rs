use super::*;

/// Tests creating a stress assessment.
///
/// Verifies that the scores, triggers, and symptoms are stored and come
/// back decoded.
///
/// Expected: Ok(StressAssessment) with all fields preserved
#[tokio::test]
async fn creates_assessment_with_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = StressAssessmentRepository::new(db);
    let assessment = repo
        .create(CreateStressAssessmentParams {
            user_id: user.id,
            score: 7,
            physical_score: 6,
            emotional_score: 8,
            behavioral_score: 5,
            cognitive_score: 7,
            triggers: vec!["work".to_string(), "sleep".to_string()],
            symptoms: vec!["tension".to_string()],
            recorded_at: Utc::now(),
        })
        .await?;

    assert_eq!(assessment.user_id, user.id);
    assert_eq!(assessment.score, 7);
    assert_eq!(assessment.physical_score, 6);
    assert_eq!(assessment.emotional_score, 8);
    assert_eq!(assessment.behavioral_score, 5);
    assert_eq!(assessment.cognitive_score, 7);
    assert_eq!(assessment.triggers, vec!["work", "sleep"]);
    assert_eq!(assessment.symptoms, vec!["tension"]);

    Ok(())
}

/// Tests creating an assessment with no triggers or symptoms.
///
/// Expected: Ok(StressAssessment) with empty lists
#[tokio::test]
async fn creates_assessment_with_empty_lists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::StressAssessment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = StressAssessmentRepository::new(db);
    let assessment = repo
        .create(CreateStressAssessmentParams {
            user_id: user.id,
            score: 3,
            physical_score: 3,
            emotional_score: 3,
            behavioral_score: 3,
            cognitive_score: 3,
            triggers: vec![],
            symptoms: vec![],
            recorded_at: Utc::now(),
        })
        .await?;

    assert!(assessment.triggers.is_empty());
    assert!(assessment.symptoms.is_empty());

    Ok(())
}
