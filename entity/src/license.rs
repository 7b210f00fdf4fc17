use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "license")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub name: String,
    #[sea_orm(unique, indexed)]
    pub url: String,
    pub text_url: Option<String>,
    pub fedora_abbreviation: Option<String>,
    pub fedora_name: Option<String>,
    pub spdx_name: Option<String>,
    pub spdx_abbreviation: Option<String>,
    pub spdx_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::license_name_alias::Entity")]
    NameAlias,

    #[sea_orm(has_many = "super::license_url_alias::Entity")]
    UrlAlias,
}

impl Related<super::license_name_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NameAlias.def()
    }
}

impl Related<super::license_url_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UrlAlias.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
