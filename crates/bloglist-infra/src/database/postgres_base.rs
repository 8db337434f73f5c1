use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use bloglist_core::error::RepoError;
use bloglist_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Map a failed write, surfacing unique-key violations as constraint errors.
pub(crate) fn write_error(err: DbErr) -> RepoError {
    match err {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => match other.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::Constraint(detail),
            _ => RepoError::Query(other.to_string()),
        },
    }
}

/// Map a failed read.
pub(crate) fn read_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// Convert a stored row into its domain value.
pub(crate) fn to_domain<M, T>(model: M) -> Result<T, RepoError>
where
    T: TryFrom<M>,
    T::Error: Into<RepoError>,
{
    T::try_from(model).map_err(Into::into)
}

fn to_active_model<E, T>(entity: T) -> Result<E::ActiveModel, RepoError>
where
    E: EntityTrait,
    T: TryInto<E::ActiveModel>,
    T::Error: Into<RepoError>,
{
    entity.try_into().map_err(Into::into)
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync + 'static,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: TryFrom<E::Model> + TryInto<E::ActiveModel> + Send + Sync + 'static,
    <T as TryFrom<E::Model>>::Error: Into<RepoError>,
    <T as TryInto<E::ActiveModel>>::Error: Into<RepoError>,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(read_error)?;

        result.map(to_domain).transpose()
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let active_model = to_active_model::<E, T>(entity)?;
        let model = active_model.insert(&self.db).await.map_err(write_error)?;

        to_domain(model)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let active_model = to_active_model::<E, T>(entity)?;
        let model = active_model.update(&self.db).await.map_err(write_error)?;

        to_domain(model)
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(write_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = E::delete_many()
            .exec(&self.db)
            .await
            .map_err(write_error)?;

        Ok(result.rows_affected)
    }
}
