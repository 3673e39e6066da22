//! Account and session service
//!
//! Signup, login, session lookup, logout, the bootstrap admin and user
//! administration. Sessions are opaque tokens stored as `session:<token>`
//! with an expiry checked on every lookup.

use std::sync::Arc;

use chrono::Duration;
use shared::client::{LoginRequest, SignupRequest};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Session, User, UserInfo, UserUpdate};
use shared::util::now;

use super::CurrentUser;
use super::password::{hash_password, verify_password};
use super::token::generate_token;
use crate::core::ServerState;
use crate::core::config::AdminConfig;
use crate::db::repository::{ActivityRepository, SessionRepository, UserRepository};
use crate::security_log;
use crate::store::KvStore;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_required_text,
};

pub const ADMIN_ROLE: &str = "Admin";
const DEFAULT_ROLE: &str = "Vendedor";

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
    activity: ActivityRepository,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(store: Arc<dyn KvStore>, session_ttl: Duration) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            sessions: SessionRepository::new(store.clone()),
            activity: ActivityRepository::new(store),
            session_ttl,
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.store.clone(), state.config.session_ttl())
    }

    /// Register a new account (active, argon2-hashed password)
    pub async fn signup(&self, request: SignupRequest) -> AppResult<UserInfo> {
        let email = request.email.trim().to_string();
        validate_email(&email)?;
        validate_required_text(&request.password, "password", MAX_PASSWORD_LEN)?;
        validate_required_text(&request.name, "nombre", MAX_NAME_LEN)?;
        validate_optional_text(&request.role, "rol", MAX_SHORT_TEXT_LEN)?;

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            password_hash: hash_password(&request.password)?,
            name: request.name.trim().to_string(),
            role: request
                .role
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            active: true,
            created_at: now(),
        };

        self.users.create(&user).await.inspect_err(|e| {
            if e.code == ErrorCode::UserAlreadyExists {
                security_log!("INFO", "signup_duplicate", email = user.email.as_str());
            }
        })?;

        tracing::info!(email = %user.email, role = %user.role, "User registered");
        Ok(UserInfo::from(user))
    }

    /// Check credentials and open a session
    ///
    /// Nothing is written unless the credentials are valid and the account
    /// is active.
    pub async fn login(&self, request: LoginRequest) -> AppResult<(String, UserInfo)> {
        let email = request.email.trim();

        let user = match self.users.find_by_email(email).await? {
            Some(user) if verify_password(&request.password, &user.password_hash) => user,
            Some(_) => {
                security_log!("WARN", "login_failed", email = email, reason = "bad_password");
                return Err(AppError::invalid_credentials());
            }
            None => {
                security_log!("WARN", "login_failed", email = email, reason = "unknown_user");
                return Err(AppError::invalid_credentials());
            }
        };

        if !user.active {
            security_log!("WARN", "login_failed", email = email, reason = "inactive");
            return Err(AppError::new(ErrorCode::AccountDisabled));
        }

        let token = generate_token()?;
        let session = Session::new(user.id.clone(), user.email.clone(), now(), self.session_ttl);
        self.sessions.save(&token, &session).await?;

        self.activity
            .record(
                &user.id,
                &user.name,
                "Inicio de sesión",
                format!("{} inició sesión", user.name),
            )
            .await;

        security_log!("INFO", "login_success", email = user.email.as_str());
        Ok((token, UserInfo::from(user)))
    }

    /// Resolve a bearer token to its (active) user
    ///
    /// Expired sessions are deleted on the way out.
    pub async fn authenticate(&self, token: &str) -> AppResult<CurrentUser> {
        let Some(session) = self.sessions.find(token).await? else {
            return Err(AppError::new(ErrorCode::SessionInvalid));
        };

        if session.is_expired(now()) {
            self.sessions.delete(token).await?;
            security_log!("INFO", "session_expired", email = session.email.as_str());
            return Err(AppError::new(ErrorCode::SessionExpired));
        }

        match self.users.find_by_email(&session.email).await? {
            Some(user) if user.active => Ok(CurrentUser::from(&user)),
            _ => Err(AppError::with_message(
                ErrorCode::SessionInvalid,
                "Usuario no encontrado o inactivo",
            )),
        }
    }

    /// Current user's full profile (no hash)
    pub async fn profile(&self, current: &CurrentUser) -> AppResult<UserInfo> {
        Ok(UserInfo::from(self.users.get(&current.email).await?))
    }

    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.sessions.delete(token).await
    }

    /// Create the configured admin account unless it already exists
    ///
    /// Returns whether the account was created.
    pub async fn init_admin(&self, admin: &AdminConfig) -> AppResult<(bool, UserInfo)> {
        if let Some(existing) = self.users.find_by_email(&admin.email).await? {
            return Ok((false, UserInfo::from(existing)));
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: admin.email.clone(),
            password_hash: hash_password(&admin.password)?,
            name: admin.name.clone(),
            role: ADMIN_ROLE.to_string(),
            active: true,
            created_at: now(),
        };
        self.users.save(&user).await?;

        tracing::info!(email = %user.email, "Admin account created");
        Ok((true, UserInfo::from(user)))
    }

    /// All accounts, without hashes
    pub async fn list_users(&self) -> AppResult<Vec<UserInfo>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserInfo::from).collect())
    }

    pub async fn get_user(&self, email: &str) -> AppResult<UserInfo> {
        Ok(UserInfo::from(self.users.get(email).await?))
    }

    /// Apply an admin edit to an account; a new password is re-hashed
    pub async fn update_user(
        &self,
        actor: &CurrentUser,
        email: &str,
        update: UserUpdate,
    ) -> AppResult<UserInfo> {
        let mut user = self.users.get(email).await?;

        if let Some(name) = &update.name {
            validate_required_text(name, "nombre", MAX_NAME_LEN)?;
        }
        validate_optional_text(&update.role, "rol", MAX_SHORT_TEXT_LEN)?;
        user.apply(&update);

        if let Some(password) = update.password.as_deref().filter(|p| !p.is_empty()) {
            validate_required_text(password, "password", MAX_PASSWORD_LEN)?;
            user.password_hash = hash_password(password)?;
            security_log!("INFO", "password_changed", email = user.email.as_str(), by = actor.email.as_str());
        }

        self.users.save(&user).await?;
        self.activity
            .record(
                &actor.id,
                &actor.name,
                "Actualizar Usuario",
                format!("Usuario: {}", user.name),
            )
            .await;

        tracing::info!(email = %user.email, by = %actor.email, "User updated");
        Ok(UserInfo::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::tests::RejectingStore;
    use crate::store::MemoryStore;

    fn service() -> (Arc<dyn KvStore>, AuthService) {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let service = AuthService::new(store.clone(), Duration::minutes(30));
        (store, service)
    }

    fn signup(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: "secreto".to_string(),
            name: "Ana".to_string(),
            role: None,
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_login_session_round_trip() {
        let (_, auth) = service();
        let info = auth.signup(signup("ana@iraka.com")).await.unwrap();
        assert!(info.active);
        assert_eq!(info.role, "Vendedor");

        let (token, user) = auth.login(login("ana@iraka.com", "secreto")).await.unwrap();
        assert_eq!(user.id, info.id);

        let current = auth.authenticate(&token).await.unwrap();
        assert_eq!(current.email, "ana@iraka.com");
        assert_eq!(current.name, "Ana");
    }

    #[tokio::test]
    async fn test_duplicate_signup() {
        let (_, auth) = service();
        auth.signup(signup("ana@iraka.com")).await.unwrap();
        let err = auth.signup(signup("ana@iraka.com")).await.unwrap_err();
        assert_eq!(err.message, "El usuario ya existe");
        assert_eq!(err.http_status().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let (_, auth) = service();
        assert!(auth.signup(signup("not-an-email")).await.is_err());
        let mut request = signup("ana@iraka.com");
        request.password = String::new();
        assert!(auth.signup(request).await.is_err());
    }

    #[tokio::test]
    async fn test_wrong_password_writes_nothing() {
        let (store, auth) = service();
        auth.signup(signup("ana@iraka.com")).await.unwrap();

        let err = auth.login(login("ana@iraka.com", "nope")).await.unwrap_err();
        assert_eq!(err.message, "Credenciales incorrectas");
        assert!(store.scan_prefix("session:").await.unwrap().is_empty());
        assert!(store.scan_prefix("actividad:").await.unwrap().is_empty());

        let err = auth.login(login("nadie@iraka.com", "x")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_logs_activity() {
        let (store, auth) = service();
        auth.signup(signup("ana@iraka.com")).await.unwrap();
        auth.login(login("ana@iraka.com", "secreto")).await.unwrap();

        let entries = ActivityRepository::new(store).find_recent().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, "Inicio de sesión");
    }

    #[tokio::test]
    async fn test_login_survives_activity_write_failure() {
        let store = RejectingStore::new("actividad:");
        let auth = AuthService::new(store.clone(), Duration::minutes(30));
        auth.signup(signup("ana@iraka.com")).await.unwrap();

        let (token, user) = auth.login(login("ana@iraka.com", "secreto")).await.unwrap();
        assert_eq!(user.email, "ana@iraka.com");
        assert_eq!(auth.authenticate(&token).await.unwrap().email, "ana@iraka.com");
        assert!(store.scan_prefix("actividad:").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_login() {
        let (store, auth) = service();
        auth.signup(signup("ana@iraka.com")).await.unwrap();
        let users = UserRepository::new(store.clone());
        let mut user = users.get("ana@iraka.com").await.unwrap();
        user.active = false;
        users.save(&user).await.unwrap();

        let err = auth.login(login("ana@iraka.com", "secreto")).await.unwrap_err();
        assert_eq!(err.message, "Usuario inactivo");
        assert!(store.scan_prefix("session:").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_expired_session_is_removed() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let auth = AuthService::new(store.clone(), Duration::zero());
        auth.signup(signup("ana@iraka.com")).await.unwrap();
        let (token, _) = auth.login(login("ana@iraka.com", "secreto")).await.unwrap();

        let err = auth.authenticate(&token).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionExpired);
        assert!(store.scan_prefix("session:").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_token_and_logout() {
        let (_, auth) = service();
        assert_eq!(
            auth.authenticate("deadbeef").await.unwrap_err().code,
            ErrorCode::SessionInvalid
        );

        auth.signup(signup("ana@iraka.com")).await.unwrap();
        let (token, _) = auth.login(login("ana@iraka.com", "secreto")).await.unwrap();
        auth.logout(&token).await.unwrap();
        assert!(auth.authenticate(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_init_admin_is_idempotent() {
        let (_, auth) = service();
        let admin = AdminConfig {
            email: "admin@irakaworld.com".to_string(),
            password: "Iraka2025".to_string(),
            name: "Administrador Principal".to_string(),
        };
        let (created, info) = auth.init_admin(&admin).await.unwrap();
        assert!(created);
        assert_eq!(info.role, "Admin");

        let (created, again) = auth.init_admin(&admin).await.unwrap();
        assert!(!created);
        assert_eq!(again.id, info.id);

        auth.login(login("admin@irakaworld.com", "Iraka2025"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_user_rehashes_password() {
        let (store, auth) = service();
        auth.signup(signup("ana@iraka.com")).await.unwrap();
        let actor = CurrentUser {
            id: "admin-id".to_string(),
            email: "admin@irakaworld.com".to_string(),
            name: "Admin".to_string(),
            role: "Admin".to_string(),
        };

        let updated = auth
            .update_user(
                &actor,
                "ana@iraka.com",
                UserUpdate {
                    role: Some("Admin".to_string()),
                    password: Some("nuevo".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.role, "Admin");

        assert!(auth.login(login("ana@iraka.com", "secreto")).await.is_err());
        auth.login(login("ana@iraka.com", "nuevo")).await.unwrap();

        let entries = ActivityRepository::new(store).find_recent().await.unwrap();
        assert!(entries.iter().any(|a| a.action == "Actualizar Usuario" && a.user == "admin-id"));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let (_, auth) = service();
        let actor = CurrentUser {
            id: "x".to_string(),
            email: "x@iraka.com".to_string(),
            name: "X".to_string(),
            role: "Admin".to_string(),
        };
        let err = auth
            .update_user(&actor, "ghost@iraka.com", UserUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.message, "Usuario no encontrado");
        assert!(err.is_not_found());
    }
}
