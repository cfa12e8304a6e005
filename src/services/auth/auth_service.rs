//! # 인증 서비스
//!
//! 회원가입, 로그인, 로그인 인증번호 발송, 비밀번호 재설정 요청을 담당합니다.
//!
//! 모든 연산은 [`ApiResponse`] 봉투를 반환합니다. 중복 가입이나 잘못된 자격 증명
//! 같은 예상 가능한 실패는 0이 아닌 `code`로 표현하고, `Err(AppError)`는
//! 저장소 장애나 해싱 실패 같은 인프라 문제에만 사용합니다.
//!
//! ## 회원가입 검사 순서
//!
//! 여러 조건이 동시에 실패하면 먼저 검사한 것이 응답됩니다.
//!
//! 1. 비밀번호 확인 불일치 → 40000
//! 2. 사용자명 중복 → 40001
//! 3. 증명서 번호 중복 → 40002

use std::sync::Arc;

use log::{info, warn};

use super::{PasswordHasher, TokenService};
use crate::{
    domain::{
        dto::{
            common::{ApiResponse, BusinessCode},
            users::{
                request::{
                    LoginRequest, LoginVerifyCodeRequest, PasswordRecoveryRequest, RegisterRequest,
                },
                response::{AccountResponse, LoginResponse, UserProfileResponse},
            },
        },
        entities::users::user::NewUser,
    },
    errors::AppResult,
    repositories::users::UserStore,
    utils::string_utils::mask_identifier,
};

/// 인증번호 발송 성공 메시지
pub const VERIFY_CODE_SENT_MESSAGE: &str = "验证码已发送";
/// 비밀번호 재설정 링크 발송 성공 메시지
pub const RECOVERY_LINK_SENT_MESSAGE: &str = "重置链接已发送";

pub struct AuthService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// 새 사용자를 등록하고 공개 프로필을 반환합니다.
    ///
    /// 사전 중복 검사 이후 동시 가입으로 유니크 제약이 깨지면
    /// `AppError::ConflictError`가 그대로 전파됩니다.
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> AppResult<ApiResponse<UserProfileResponse>> {
        if request.password != request.confirm_password {
            return Ok(ApiResponse::business_error(BusinessCode::PasswordMismatch));
        }

        if self.store.find_by_username(&request.username).await?.is_some() {
            warn!("회원가입 거부 - 사용자명 중복: {}", request.username);
            return Ok(ApiResponse::business_error(BusinessCode::UsernameExists));
        }

        if self.store.find_by_id_number(&request.id_number).await?.is_some() {
            warn!(
                "회원가입 거부 - 증명서 번호 중복: {}",
                mask_identifier(&request.id_number)
            );
            return Ok(ApiResponse::business_error(BusinessCode::IdNumberExists));
        }

        let hashed_password = self.hasher.hash(&request.password)?;

        let user = self
            .store
            .insert(NewUser {
                username: request.username,
                hashed_password,
                real_name: Some(request.real_name),
                id_type: request.id_type,
                id_number: request.id_number,
                phone: request.phone,
                email: request.email,
                user_type: request.user_type,
            })
            .await?;

        info!("👤 회원가입 완료: {} (id={})", user.username, user.id);
        Ok(ApiResponse::ok(UserProfileResponse::from(user)))
    }

    /// 사용자명, 이메일, 휴대폰 번호 중 하나와 비밀번호로 로그인합니다.
    ///
    /// 계정이 없는 경우와 비밀번호가 틀린 경우를 구분하지 않고 모두 40010으로 응답합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<ApiResponse<LoginResponse>> {
        let Some(user) = self.store.find_by_login_identifier(&request.username).await? else {
            warn!("로그인 실패: {}", mask_identifier(&request.username));
            return Ok(ApiResponse::business_error(BusinessCode::InvalidCredentials));
        };

        if !self.hasher.verify(&request.password, &user.hashed_password)? {
            warn!("로그인 실패: {}", mask_identifier(&request.username));
            return Ok(ApiResponse::business_error(BusinessCode::InvalidCredentials));
        }

        info!("🔑 로그인 성공: {}", user.username);
        Ok(ApiResponse::ok(LoginResponse {
            token: self.tokens.encode(&user.username),
            user: UserProfileResponse::from(user),
        }))
    }

    /// 로그인 인증번호 발송 (시뮬레이션)
    ///
    /// 사용자명 또는 휴대폰 번호로 사용자를 찾고 증명서 번호 끝자리를 확인합니다.
    /// 실제로 SMS를 보내지는 않습니다.
    pub async fn send_login_verification_code(
        &self,
        request: LoginVerifyCodeRequest,
    ) -> AppResult<ApiResponse<AccountResponse>> {
        let Some(user) = self.store.find_by_username_or_phone(&request.username).await? else {
            return Ok(ApiResponse::business_error(BusinessCode::UserNotFound));
        };

        if !user.id_number.ends_with(&request.id_last4) {
            warn!(
                "인증번호 발송 거부 - 증명서 번호 끝자리 불일치: {}",
                user.username
            );
            return Ok(ApiResponse::business_error(BusinessCode::IdSuffixMismatch));
        }

        info!("📨 로그인 인증번호 발송(시뮬레이션): {}", user.username);
        Ok(ApiResponse::with_message(
            AccountResponse {
                account: request.username,
            },
            VERIFY_CODE_SENT_MESSAGE,
        ))
    }

    /// 비밀번호 재설정 링크 발송 (시뮬레이션)
    ///
    /// 계정 존재 여부를 드러내지 않도록 항상 성공으로 응답합니다.
    pub fn request_password_recovery(
        &self,
        request: PasswordRecoveryRequest,
    ) -> ApiResponse<AccountResponse> {
        info!(
            "📧 비밀번호 재설정 요청(시뮬레이션): {}",
            mask_identifier(&request.account)
        );

        ApiResponse::with_message(
            AccountResponse {
                account: request.account,
            },
            RECOVERY_LINK_SENT_MESSAGE,
        )
    }
}
