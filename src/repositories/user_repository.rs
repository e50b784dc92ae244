use crate::entities::{user, user::Entity as User};
use chrono::Utc;
use sea_orm::*;

pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_admin: bool,
}

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await
    }

    // Returns every row colliding with the new account, so the caller can
    // report which field is taken
    pub async fn find_duplicates(
        db: &DatabaseConnection,
        username: &str,
        email: &str,
    ) -> Result<Vec<user::Model>, DbErr> {
        User::find()
            .filter(
                Condition::any()
                    .add(user::Column::Email.eq(email))
                    .add(user::Column::Username.eq(username)),
            )
            .all(db)
            .await
    }

    pub async fn create(db: &DatabaseConnection, data: NewUser) -> Result<user::Model, DbErr> {
        let new_user = user::ActiveModel {
            id: NotSet,
            email: Set(data.email),
            username: Set(data.username),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            password_hash: Set(data.password_hash),
            is_admin: Set(data.is_admin),
            created_at: Set(Utc::now()),
        };

        new_user.insert(db).await
    }
}
