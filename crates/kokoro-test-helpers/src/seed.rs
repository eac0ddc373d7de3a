//! Row factories shared by the integration tests.

use chrono::{NaiveDate, Utc};
use kokoro_entity::access_tokens::ActiveModel as ActiveAccessToken;
use kokoro_entity::assessment::ActiveModel as ActiveAssessment;
use kokoro_entity::assessment::option::ActiveModel as ActiveOption;
use kokoro_entity::assessment::question::ActiveModel as ActiveQuestion;
use kokoro_entity::therapist::ActiveModel as ActiveTherapist;
use kokoro_entity::therapist::availability::ActiveModel as ActiveAvailability;
use kokoro_entity::user::ActiveModel as ActiveUser;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};
use uuid::Uuid;

/// Inserts a user together with an access token and returns the user's id.
pub async fn create_test_user<C: ConnectionTrait>(conn: &C, username: &str, token: &str) -> Result<Uuid, DbErr> {
    let user = ActiveUser {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_owned()),
        email: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(conn)
    .await?;

    ActiveAccessToken {
        user_id: Set(user.id),
        access_token: Set(token.to_owned()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(user.id)
}

pub async fn create_test_therapist<C: ConnectionTrait>(conn: &C, name: &str) -> Result<i32, DbErr> {
    let therapist = ActiveTherapist {
        name: Set(name.to_owned()),
        virtual_available: Set(true),
        in_person_available: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(therapist.therapist_id)
}

pub async fn create_test_availability<C: ConnectionTrait>(
    conn: &C,
    therapist_id: i32,
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
) -> Result<i32, DbErr> {
    let slot = ActiveAvailability {
        therapist_id: Set(therapist_id),
        day_of_week: Set(date.format("%A").to_string()),
        start_time: Set(start_time.to_owned()),
        end_time: Set(end_time.to_owned()),
        is_online: Set(true),
        is_in_office: Set(false),
        availability_date: Set(date),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(slot.availability_id)
}

pub struct SeededQuestion {
    pub question_id: i32,
    pub option_ids: Vec<i32>,
}

/// Inserts an assessment with the given questions, each question paired with
/// its `(option_text, score)` tuples.
pub async fn create_test_assessment<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    questions: &[(&str, &[(&str, i32)])],
) -> Result<(i32, Vec<SeededQuestion>), DbErr> {
    let assessment = ActiveAssessment {
        name: Set(name.to_owned()),
        description: Set(None),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    let mut seeded = Vec::with_capacity(questions.len());
    for (question_text, options) in questions {
        let question = ActiveQuestion {
            assessment_id: Set(assessment.assessment_id),
            question_text: Set((*question_text).to_owned()),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        let mut option_ids = Vec::with_capacity(options.len());
        for (option_text, score) in *options {
            let option = ActiveOption {
                question_id: Set(question.question_id),
                option_text: Set((*option_text).to_owned()),
                score: Set(*score),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            option_ids.push(option.option_id);
        }

        seeded.push(SeededQuestion {
            question_id: question.question_id,
            option_ids,
        });
    }

    Ok((assessment.assessment_id, seeded))
}
