use crate::config::Config;
use crate::models::auth_model::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};

pub struct JwtUtils;

impl JwtUtils {
    /// Generate an access token for the user. Returns the token together with
    /// its expiry as a unix timestamp.
    pub fn generate_jwt(
        config: &Config,
        user_id: i64,
    ) -> Result<(String, i64), jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expire = now + Duration::minutes(config.jwt_expires_in);

        let claims = Claims {
            sub: user_id,
            exp: expire.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )?;

        Ok((token, expire.timestamp()))
    }

    /// Validate a token and return the decoded data. Expiry is checked here.
    pub fn validate_jwt(
        config: &Config,
        token: &str,
    ) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation)
    }
}
