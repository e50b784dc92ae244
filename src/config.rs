use sea_orm::DatabaseConnection;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub media_root: String,
    pub page_size: u64,
    pub min_cooking_time: i32,
    pub min_ingredient_amount: i32,
    pub ingredients_data_path: Option<String>,
    pub tags_data_path: Option<String>,
    pub admin_email: Option<String>,
    pub admin_username: String,
    pub admin_password: Option<String>,
}

#[cfg_attr(not(test), derive(Clone, axum::extract::FromRef))]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

// sea-orm withholds `Clone` on `DatabaseConnection` when its `mock` feature is
// active (enabled here via dev-dependencies), so the derives above cannot be
// used in test builds; these impls reproduce what the derives expand to.
#[cfg(test)]
fn clone_db(db: &DatabaseConnection) -> DatabaseConnection {
    match db {
        DatabaseConnection::SqlxPostgresPoolConnection(conn) => {
            DatabaseConnection::SqlxPostgresPoolConnection(conn.clone())
        }
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(conn.clone())
        }
        DatabaseConnection::Disconnected => DatabaseConnection::Disconnected,
    }
}

#[cfg(test)]
impl Clone for AppState {
    fn clone(&self) -> Self {
        AppState {
            db: clone_db(&self.db),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        clone_db(&state.db)
    }
}

#[cfg(test)]
impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl Config {
    pub fn init() -> Config {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .expect("PORT must be a number");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in .env");
        let jwt_expires_in = env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "1440".to_string())
            .parse::<i64>()
            .expect("JWT_EXPIRATION_MINUTES must be a number");

        let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());
        let page_size = env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .expect("PAGE_SIZE must be a number");

        let min_cooking_time = env::var("MIN_COOKING_TIME")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<i32>()
            .expect("MIN_COOKING_TIME must be a number");
        let min_ingredient_amount = env::var("MIN_INGREDIENT_AMOUNT")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<i32>()
            .expect("MIN_INGREDIENT_AMOUNT must be a number");

        let ingredients_data_path = env::var("INGREDIENTS_DATA_PATH").ok();
        let tags_data_path = env::var("TAGS_DATA_PATH").ok();

        let admin_email = env::var("ADMIN_EMAIL").ok();
        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = env::var("ADMIN_PASSWORD").ok();

        Config {
            server_host,
            server_port,
            database_url,
            jwt_secret,
            jwt_expires_in,
            media_root,
            page_size,
            min_cooking_time,
            min_ingredient_amount,
            ingredients_data_path,
            tags_data_path,
            admin_email,
            admin_username,
            admin_password,
        }
    }
}
