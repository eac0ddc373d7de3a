use kokoro_entity::assessment::result;
use kokoro_entity::assessment::result::{Entity as ResultEntity, Model as AssessmentResult};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Full attempt history of one user, newest first.
    pub async fn user_results<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<AssessmentResult>, DbErr> {
        ResultEntity::find()
            .filter(result::Column::UserId.eq(user_id))
            .order_by_desc(result::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load results"))
    }
}
