use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sex marker carried by the user seed data. The wire values are `m` and `f`;
/// anything else decodes to `Unspecified` instead of failing, and the table
/// renders such owners without a colour hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    #[serde(other, rename = "unspecified")]
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[ts(type = "number")]
    pub id: i64,
    pub title: String,
    pub icon: String,
    /// References `User.id`. The referenced user is the "owner" filter facet.
    #[ts(type = "number")]
    pub owner_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    /// References `Category.id`. May dangle; the join tolerates that.
    #[ts(type = "number")]
    pub category_id: i64,
}

/// A product with its category and owning user resolved and attached.
///
/// `category` and `user` are `None` when the corresponding reference does not
/// resolve. That is not an error condition: every consumer treats the absent
/// case as first-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    #[ts(type = "number")]
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub user: Option<User>,
}
