//! Registry row entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usr")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    /// Grade label, e.g. "middle"
    pub position: String,
    pub project: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database row to domain entity, decoding the grade label
impl TryFrom<Model> for User {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            position: model.position.parse()?,
            name: model.name,
            surname: model.surname,
            project: model.project,
        })
    }
}
