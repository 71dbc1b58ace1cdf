use crate::{
    dto::auth::{LoginRequest, TokenKind, TokenPair},
    error::AppResult,
    services::user_service::{find_model, find_model_by_email},
    state::AppState,
};

/// Exchange credentials for a token pair. An unknown email and a wrong
/// password both come back as `Ok(None)`.
pub async fn login(state: &AppState, payload: LoginRequest) -> AppResult<Option<TokenPair>> {
    let LoginRequest { email, password } = payload;

    let Some(user) = find_model_by_email(state, &email).await? else {
        tracing::debug!("login for unknown email");
        return Ok(None);
    };

    let tokens = user.get_tokens(&password, &state.tokens)?;
    match &tokens {
        Some(_) => tracing::info!(user_id = %user.id, "tokens issued"),
        None => tracing::debug!(user_id = %user.id, "password mismatch"),
    }
    Ok(tokens)
}

/// Mint a new access token from a valid refresh token whose subject still
/// exists.
pub async fn refresh_access_token(state: &AppState, refresh_token: &str) -> AppResult<String> {
    let claims = state.tokens.verify(refresh_token, TokenKind::Refresh)?;
    let user = find_model(state, &claims.sub).await?;
    let token = state.tokens.issue(&user.id, TokenKind::Access)?;
    tracing::info!(user_id = %user.id, "access token refreshed");
    Ok(token)
}
