use digest_content::error::ContentServiceError;
use digest_content::usecase::token::{
    CreateTokenInput, CreateTokenUseCase, ResolveIdentityUseCase, issue_access_token,
};
use digest_content::usecase::user::{RegisterUserInput, RegisterUserUseCase, hash_password};

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, test_user};

#[tokio::test]
async fn register_then_login_resolves_to_the_registered_user() {
    let repo = MockUserRepo::empty();

    let registered = RegisterUserUseCase { repo: repo.clone() }
        .execute(RegisterUserInput {
            email: "alice@example.com".to_owned(),
            password: "a long and honest password".to_owned(),
        })
        .await
        .unwrap();

    let login = CreateTokenUseCase {
        users: repo.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_lifetime_secs: 1800,
    };
    let out = login
        .execute(CreateTokenInput {
            email: "alice@example.com".to_owned(),
            password: "a long and honest password".to_owned(),
        })
        .await
        .unwrap();

    let resolve = ResolveIdentityUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let resolved = resolve.execute(&out.access_token).await.unwrap();
    assert_eq!(resolved.id, registered.id);
    assert_eq!(resolved.email, "alice@example.com");
}

#[tokio::test]
async fn duplicate_registration_conflicts_regardless_of_password() {
    let repo = MockUserRepo::empty();

    RegisterUserUseCase { repo: repo.clone() }
        .execute(RegisterUserInput {
            email: "bob@example.com".to_owned(),
            password: "first password".to_owned(),
        })
        .await
        .unwrap();

    let result = RegisterUserUseCase { repo }
        .execute(RegisterUserInput {
            email: "bob@example.com".to_owned(),
            password: "second, different password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(ContentServiceError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );
}

#[tokio::test]
async fn losing_a_registration_race_still_conflicts() {
    use digest_content::domain::repository::UserRepository;
    use digest_content::domain::types::{NewUser, User};

    // Store where the duplicate only becomes visible at insert time, as
    // when a concurrent registration commits between the pre-insert lookup
    // and the insert itself.
    struct RacingUserRepo {
        inner: MockUserRepo,
    }

    impl UserRepository for RacingUserRepo {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, ContentServiceError> {
            Ok(None)
        }
        async fn find_by_id(&self, id: i32) -> Result<Option<User>, ContentServiceError> {
            self.inner.find_by_id(id).await
        }
        async fn create(&self, user: &NewUser) -> Result<User, ContentServiceError> {
            self.inner.create(user).await
        }
    }

    let repo = RacingUserRepo {
        inner: MockUserRepo::new(vec![test_user(1, "erin@example.com")]),
    };
    let result = RegisterUserUseCase { repo }
        .execute(RegisterUserInput {
            email: "erin@example.com".to_owned(),
            password: "some password".to_owned(),
        })
        .await;

    // The insert-time conflict surfaces as EmailTaken, never Internal.
    assert!(
        matches!(result, Err(ContentServiceError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let repo = MockUserRepo::empty();
    RegisterUserUseCase { repo: repo.clone() }
        .execute(RegisterUserInput {
            email: "carol@example.com".to_owned(),
            password: "the real password".to_owned(),
        })
        .await
        .unwrap();

    let login = CreateTokenUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_lifetime_secs: 1800,
    };

    let wrong_password = login
        .execute(CreateTokenInput {
            email: "carol@example.com".to_owned(),
            password: "not the real password".to_owned(),
        })
        .await
        .unwrap_err();
    let unknown_email = login
        .execute(CreateTokenInput {
            email: "nobody@example.com".to_owned(),
            password: "the real password".to_owned(),
        })
        .await
        .unwrap_err();

    // Same variant, same kind, same message — no enumeration oracle.
    assert!(matches!(
        wrong_password,
        ContentServiceError::InvalidCredentials
    ));
    assert!(matches!(
        unknown_email,
        ContentServiceError::InvalidCredentials
    ));
    assert_eq!(wrong_password.kind(), unknown_email.kind());
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn inactive_account_cannot_login_or_resolve() {
    let mut user = test_user(1, "dave@example.com");
    user.password_hash = hash_password("daves password").unwrap();
    user.is_active = false;
    let repo = MockUserRepo::new(vec![user]);

    let login = CreateTokenUseCase {
        users: repo.clone(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_lifetime_secs: 1800,
    };
    let result = login
        .execute(CreateTokenInput {
            email: "dave@example.com".to_owned(),
            password: "daves password".to_owned(),
        })
        .await;
    assert!(matches!(
        result,
        Err(ContentServiceError::InvalidCredentials)
    ));

    // A token issued before deactivation stops resolving too.
    let (token, _) = issue_access_token(1, 1800, TEST_JWT_SECRET).unwrap();
    let resolve = ResolveIdentityUseCase {
        users: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = resolve.execute(&token).await;
    assert!(matches!(result, Err(ContentServiceError::Unauthenticated)));
}

#[tokio::test]
async fn token_for_unknown_user_does_not_resolve() {
    let (token, _) = issue_access_token(999, 1800, TEST_JWT_SECRET).unwrap();
    let resolve = ResolveIdentityUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = resolve.execute(&token).await;
    assert!(matches!(result, Err(ContentServiceError::Unauthenticated)));
}
