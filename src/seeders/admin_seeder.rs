use crate::config::Config;
use crate::repositories::user_repository::{NewUser, UserRepository};
use crate::services::auth_service::AuthService;
use sea_orm::DatabaseConnection;

pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), String> {
    let (Some(email), Some(password)) =
        (config.admin_email.as_deref(), config.admin_password.as_deref())
    else {
        return Ok(());
    };

    let exists = UserRepository::find_by_email(db, email)
        .await
        .map_err(|e| e.to_string())?;

    if exists.is_none() {
        println!("🚀 Creating admin account...");

        let password_hash = AuthService::hash_password(password).map_err(|(_, _, msg)| msg)?;

        UserRepository::create(
            db,
            NewUser {
                email: email.to_string(),
                username: config.admin_username.clone(),
                first_name: "Admin".to_string(),
                last_name: "Admin".to_string(),
                password_hash,
                is_admin: true,
            },
        )
        .await
        .map_err(|e| e.to_string())?;

        println!("✅ Admin account ready (email: {})", email);
    }

    Ok(())
}
