use kokoro_entity::assessment::option;
use kokoro_entity::assessment::option::Entity as OptionEntity;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use std::error::Error;

pub struct Query;

impl Query {
    /// Score weight per option id for the given ids. Ids missing from the
    /// returned map do not exist in the options table; the caller decides
    /// what that means instead of trusting a `NULL` SQL aggregate.
    pub async fn scores_by_id<C: ConnectionTrait>(conn: &C, option_ids: &[i32]) -> Result<HashMap<i32, i32>, DbErr> {
        let options = OptionEntity::find()
            .filter(option::Column::OptionId.is_in(option_ids.iter().copied()))
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load option scores"))?;

        Ok(options.into_iter().map(|option| (option.option_id, option.score)).collect())
    }
}
