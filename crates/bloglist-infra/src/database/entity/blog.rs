//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use bloglist_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: String,
    pub author: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub likes: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for bloglist_core::domain::Blog {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let likes = u64::try_from(model.likes).map_err(|_| {
            RepoError::Query(format!("blog {} has negative likes {}", model.id, model.likes))
        })?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            author: model.author,
            url: model.url,
            likes,
            created_at: model.created_at.into(),
        })
    }
}

impl TryFrom<bloglist_core::domain::Blog> for ActiveModel {
    type Error = RepoError;

    fn try_from(blog: bloglist_core::domain::Blog) -> Result<Self, Self::Error> {
        let likes = i64::try_from(blog.likes).map_err(|_| {
            RepoError::Constraint(format!("likes {} out of range for blog {}", blog.likes, blog.id))
        })?;

        Ok(Self {
            id: Set(blog.id),
            user_id: Set(blog.user_id),
            title: Set(blog.title),
            author: Set(blog.author),
            url: Set(blog.url),
            likes: Set(likes),
            created_at: Set(blog.created_at.into()),
        })
    }
}
